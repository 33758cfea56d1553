use std::collections::HashMap;

use derive_more::Display;
use dioxus::logger::tracing;

use crate::navigation::page::{PageKind, SettingsFeature};
use crate::security::role::RequiredRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDefinition {
    pub pattern: &'static str,
    pub required_role: RequiredRole,
    pub page: PageKind,
}

const fn route(pattern: &'static str, required_role: RequiredRole, page: PageKind) -> RouteDefinition {
    RouteDefinition {
        pattern,
        required_role,
        page,
    }
}

const fn settings(feature_path: &'static str, required_role: RequiredRole, feature: SettingsFeature) -> RouteDefinition {
    route(feature_path, required_role, PageKind::Settings(feature))
}

use RequiredRole::{Admin, Authenticated, Manager, Public};

#[rustfmt::skip]
const STANDARD_ROUTES: &[RouteDefinition] = &[
    route("/", Authenticated, PageKind::Main),
    route("/login", Public, PageKind::Login),
    route("/workspace/:slug/settings/:tab", Manager, PageKind::WorkspaceSettings),
    route("/workspace/:slug", Authenticated, PageKind::WorkspaceChat),
    route("/workspace/:slug/t/:threadSlug", Authenticated, PageKind::WorkspaceChat),
    route("/accept-invite/:code", Public, PageKind::Invite),

    settings("/settings/llm-preference", Admin, SettingsFeature::LlmPreference),
    settings("/settings/transcription-preference", Admin, SettingsFeature::TranscriptionPreference),
    settings("/settings/audio-preference", Admin, SettingsFeature::AudioPreference),
    settings("/settings/embedding-preference", Admin, SettingsFeature::EmbeddingPreference),
    settings("/settings/text-splitter-preference", Admin, SettingsFeature::TextSplitterPreference),
    settings("/settings/vector-database", Admin, SettingsFeature::VectorDatabase),
    settings("/settings/agents", Admin, SettingsFeature::Agents),
    settings("/settings/event-logs", Admin, SettingsFeature::EventLogs),
    settings("/settings/embed-config", Admin, SettingsFeature::EmbedConfig),
    settings("/settings/embed-chats", Admin, SettingsFeature::EmbedChats),

    // Grouped under "manager" in the product menu, but only system
    // preferences is actually open to managers.
    settings("/settings/security", Admin, SettingsFeature::Security),
    settings("/settings/privacy", Admin, SettingsFeature::Privacy),
    settings("/settings/appearance", Admin, SettingsFeature::Appearance),
    settings("/settings/beta-features", Admin, SettingsFeature::BetaFeatures),
    settings("/settings/api-keys", Admin, SettingsFeature::ApiKeys),
    settings("/settings/workspace-chats", Admin, SettingsFeature::WorkspaceChats),
    settings("/settings/system-preferences", Manager, SettingsFeature::SystemPreferences),
    settings("/settings/invites", Admin, SettingsFeature::Invites),
    settings("/settings/users", Admin, SettingsFeature::Users),
    settings("/settings/workspaces", Admin, SettingsFeature::Workspaces),

    route("/onboarding", Public, PageKind::Onboarding),
    route("/onboarding/:step", Public, PageKind::Onboarding),

    route("/settings/beta-features/live-document-sync/manage", Admin, PageKind::LiveDocumentSyncManage),
    route("/fine-tuning", Admin, PageKind::FineTuning),
    route("/forbidden", Public, PageKind::Forbidden),
];

const NOT_FOUND: RouteDefinition = route("*", Public, PageKind::NotFound);

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum TableError {
    #[display("route pattern {_0:?} must start with '/'")]
    NotAbsolute(&'static str),
    #[display("route pattern {_0:?} has a parameter without a name")]
    UnnamedParam(&'static str),
    #[display("route pattern {_1:?} collides with {_0:?}")]
    Duplicate(&'static str, &'static str),
}

impl std::error::Error for TableError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    Static(&'static str),
    Param,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CompiledRoute {
    definition: RouteDefinition,
    segments: Vec<Segment>,
}

impl CompiledRoute {
    fn compile(definition: RouteDefinition) -> Result<Self, TableError> {
        let Some(rest) = definition.pattern.strip_prefix('/') else {
            return Err(TableError::NotAbsolute(definition.pattern));
        };

        let mut segments = Vec::new();
        for part in rest.split('/').filter(|part| !part.is_empty()) {
            match part.strip_prefix(':') {
                Some("") => return Err(TableError::UnnamedParam(definition.pattern)),
                Some(_) => segments.push(Segment::Param),
                None => segments.push(Segment::Static(part)),
            }
        }

        Ok(Self { definition, segments })
    }

    /// Pattern with parameter names erased, so `/a/:x` and `/a/:y` agree.
    fn shape(&self) -> String {
        let mut shape = String::new();
        for segment in &self.segments {
            shape.push('/');
            match segment {
                Segment::Static(s) => shape.push_str(s),
                Segment::Param => shape.push(':'),
            }
        }
        shape
    }

    fn static_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, Segment::Static(_)))
            .count()
    }

    fn matches(&self, parts: &[&str]) -> bool {
        parts.len() == self.segments.len()
            && self.segments.iter().zip(parts).all(|(segment, part)| match segment {
                Segment::Static(s) => s == part,
                Segment::Param => true,
            })
    }
}

/// Ordered, validated routing table. Built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<CompiledRoute>,
}

impl RouteTable {
    pub fn new(definitions: impl IntoIterator<Item = RouteDefinition>) -> Result<Self, TableError> {
        let mut seen: HashMap<String, &'static str> = HashMap::new();
        let mut routes = Vec::new();

        for definition in definitions {
            let compiled = CompiledRoute::compile(definition)?;

            if let Some(existing) = seen.insert(compiled.shape(), definition.pattern) {
                return Err(TableError::Duplicate(existing, definition.pattern));
            }

            routes.push(compiled);
        }

        Ok(Self { routes })
    }

    /// Every route the application serves.
    pub fn standard() -> Result<Self, TableError> {
        Self::new(STANDARD_ROUTES.iter().copied())
    }

    pub fn definitions(&self) -> impl Iterator<Item = &RouteDefinition> {
        self.routes.iter().map(|route| &route.definition)
    }

    /// Finds the route serving `path`. Query string, fragment and empty
    /// segments are ignored. The candidate with most static segments wins,
    /// then the earliest in the table.
    pub fn match_path(&self, path: &str) -> Option<&RouteDefinition> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let parts: Vec<&str> = path.split('/').filter(|part| !part.is_empty()).collect();

        let mut best: Option<&CompiledRoute> = None;

        for route in self.routes.iter().filter(|route| route.matches(&parts)) {
            if best.is_none_or(|best| route.static_count() > best.static_count()) {
                best = Some(route);
            }
        }

        best.map(|route| &route.definition)
    }

    /// Definition serving `path`, or the public not-found page.
    pub fn resolve(&self, path: &str) -> &RouteDefinition {
        self.match_path(path).unwrap_or(&NOT_FOUND)
    }

    /// Requirement for rendering `page` at `path`. When the table and the
    /// router disagree about which page lives there, the page is held to the
    /// strictest requirement.
    pub fn requirement(&self, path: &str, page: PageKind) -> RequiredRole {
        let definition = self.resolve(path);

        if definition.page == page {
            return definition.required_role;
        }

        tracing::error!(
            "route table serves {table_page} at {path} but router rendered {page}",
            table_page = definition.page
        );

        RequiredRole::Admin
    }
}
