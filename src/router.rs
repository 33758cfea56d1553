use dioxus::prelude::*;

use crate::{
    layouts::security::GuardLayout,
    navigation::page::{PageKind, SettingsFeature},
    pages::{
        fine_tuning::FineTuningPage,
        forbidden::ForbiddenPage,
        home::HomePage,
        invite::InvitePage,
        login::LoginPage,
        not_found::NotFoundPage,
        onboarding::{OnboardingPage, OnboardingStepPage},
        settings::{LiveDocumentSyncPage, SettingsPage},
        workspace::{WorkspaceChatPage, WorkspaceSettingsPage, WorkspaceThreadPage},
    },
    security::guard::Redirect,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(GuardLayout)]
        #[route("/", HomePage)]
        Home {},

        #[route("/login", LoginPage)]
        Login {},

        #[route("/workspace/:slug/settings/:tab", WorkspaceSettingsPage)]
        WorkspaceSettings { slug: String, tab: String },

        #[route("/workspace/:slug", WorkspaceChatPage)]
        WorkspaceChat { slug: String },

        #[route("/workspace/:slug/t/:thread_slug", WorkspaceThreadPage)]
        WorkspaceThread { slug: String, thread_slug: String },

        #[route("/accept-invite/:code", InvitePage)]
        AcceptInvite { code: String },

        #[route("/settings/beta-features/live-document-sync/manage", LiveDocumentSyncPage)]
        LiveDocumentSync {},

        #[route("/settings/:feature", SettingsPage)]
        Settings { feature: SettingsFeature },

        #[route("/onboarding", OnboardingPage)]
        Onboarding {},

        #[route("/onboarding/:step", OnboardingStepPage)]
        OnboardingStep { step: String },

        #[route("/fine-tuning", FineTuningPage)]
        FineTuning {},

        #[route("/forbidden", ForbiddenPage)]
        Forbidden {},

        #[route("/:..segments", NotFoundPage)]
        NotFound { segments: Vec<String> },
}

impl Route {
    pub fn page(&self) -> PageKind {
        match self {
            Self::Home {} => PageKind::Main,
            Self::Login {} => PageKind::Login,
            Self::WorkspaceSettings { .. } => PageKind::WorkspaceSettings,
            Self::WorkspaceChat { .. } | Self::WorkspaceThread { .. } => PageKind::WorkspaceChat,
            Self::AcceptInvite { .. } => PageKind::Invite,
            Self::LiveDocumentSync {} => PageKind::LiveDocumentSyncManage,
            Self::Settings { feature } => PageKind::Settings(*feature),
            Self::Onboarding {} | Self::OnboardingStep { .. } => PageKind::Onboarding,
            Self::FineTuning {} => PageKind::FineTuning,
            Self::Forbidden {} => PageKind::Forbidden,
            Self::NotFound { .. } => PageKind::NotFound,
        }
    }
}

impl From<Redirect> for Route {
    fn from(redirect: Redirect) -> Self {
        match redirect {
            Redirect::Login => Self::Login {},
            Redirect::Forbidden => Self::Forbidden {},
        }
    }
}
