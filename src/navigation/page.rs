use std::str::FromStr;

use derive_more::Display;

/// One entry of the `/settings/<feature>` family. `Display` is the path segment.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsFeature {
    #[display("llm-preference")]
    LlmPreference,
    #[display("transcription-preference")]
    TranscriptionPreference,
    #[display("audio-preference")]
    AudioPreference,
    #[display("embedding-preference")]
    EmbeddingPreference,
    #[display("text-splitter-preference")]
    TextSplitterPreference,
    #[display("vector-database")]
    VectorDatabase,
    #[display("agents")]
    Agents,
    #[display("event-logs")]
    EventLogs,
    #[display("embed-config")]
    EmbedConfig,
    #[display("embed-chats")]
    EmbedChats,
    #[display("security")]
    Security,
    #[display("privacy")]
    Privacy,
    #[display("appearance")]
    Appearance,
    #[display("beta-features")]
    BetaFeatures,
    #[display("api-keys")]
    ApiKeys,
    #[display("workspace-chats")]
    WorkspaceChats,
    #[display("system-preferences")]
    SystemPreferences,
    #[display("invites")]
    Invites,
    #[display("users")]
    Users,
    #[display("workspaces")]
    Workspaces,
}

impl SettingsFeature {
    pub const ALL: [SettingsFeature; 20] = [
        Self::LlmPreference,
        Self::TranscriptionPreference,
        Self::AudioPreference,
        Self::EmbeddingPreference,
        Self::TextSplitterPreference,
        Self::VectorDatabase,
        Self::Agents,
        Self::EventLogs,
        Self::EmbedConfig,
        Self::EmbedChats,
        Self::Security,
        Self::Privacy,
        Self::Appearance,
        Self::BetaFeatures,
        Self::ApiKeys,
        Self::WorkspaceChats,
        Self::SystemPreferences,
        Self::Invites,
        Self::Users,
        Self::Workspaces,
    ];
}

impl FromStr for SettingsFeature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|feature| feature.to_string() == s)
            .ok_or_else(|| format!("unknown settings page {s:?}"))
    }
}

/// Typed reference to a page the router can render.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    #[display("main")]
    Main,
    #[display("login")]
    Login,
    #[display("workspace-chat")]
    WorkspaceChat,
    #[display("workspace-settings")]
    WorkspaceSettings,
    #[display("invite")]
    Invite,
    #[display("onboarding")]
    Onboarding,
    #[display("settings/{_0}")]
    Settings(SettingsFeature),
    #[display("live-document-sync")]
    LiveDocumentSyncManage,
    #[display("fine-tuning")]
    FineTuning,
    #[display("forbidden")]
    Forbidden,
    #[display("not-found")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_segments_parse_back() {
        for feature in SettingsFeature::ALL {
            assert_eq!(feature.to_string().parse::<SettingsFeature>(), Ok(feature));
        }
    }

    #[test]
    fn unknown_settings_segment_is_rejected() {
        assert!("LLM-Preference".parse::<SettingsFeature>().is_err());
        assert!("".parse::<SettingsFeature>().is_err());
    }

    #[test]
    fn settings_page_names_include_feature() {
        assert_eq!(
            PageKind::Settings(SettingsFeature::VectorDatabase).to_string(),
            "settings/vector-database"
        );
    }
}
