//! Local UI chrome state (dark mode, nav).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state so rendering
//! controls can evolve independently of API data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Admin sections reachable from the top navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Overview,
    ApiKeys,
    BannedWords,
    ElevenLabsPool,
    Settings,
    Calls,
    PhoneNumbers,
    Widgets,
    Flows,
}

impl Section {
    /// Route path for this section.
    pub fn path(self) -> &'static str {
        match self {
            Self::Overview => "/",
            Self::ApiKeys => "/api-keys",
            Self::BannedWords => "/banned-words",
            Self::ElevenLabsPool => "/elevenlabs-pool",
            Self::Settings => "/settings",
            Self::Calls => "/calls",
            Self::PhoneNumbers => "/phone-numbers",
            Self::Widgets => "/widgets",
            Self::Flows => "/flows",
        }
    }

    /// Nav label for this section.
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::ApiKeys => "API Keys",
            Self::BannedWords => "Banned Words",
            Self::ElevenLabsPool => "ElevenLabs Pool",
            Self::Settings => "Settings",
            Self::Calls => "Calls",
            Self::PhoneNumbers => "Phone Numbers",
            Self::Widgets => "Widgets",
            Self::Flows => "Flows",
        }
    }

    /// All sections in nav order.
    pub fn all() -> [Self; 9] {
        [
            Self::Overview,
            Self::ApiKeys,
            Self::BannedWords,
            Self::ElevenLabsPool,
            Self::Settings,
            Self::Calls,
            Self::PhoneNumbers,
            Self::Widgets,
            Self::Flows,
        ]
    }
}

/// UI state for chrome shared across pages.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
}
