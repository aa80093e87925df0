//! Current path plus the three-valued onboarding flag.

use serde::{Deserialize, Serialize};

/// Well-known application paths.
pub mod paths {
    pub const ROOT: &str = "/";
    pub const ONBOARDING: &str = "/onboarding";
    pub const DASHBOARD: &str = "/dashboard";
    pub const PAYMENT: &str = "/payment";
    pub const TRANSACTION_STATUS: &str = "/transaction-status";
    pub const SETTINGS: &str = "/settings";
    pub const TRANSACTIONS: &str = "/transactions";
    pub const CARDS: &str = "/cards";
    pub const CARDS_MANAGE: &str = "/cards/manage";
}

/// Whether the user has completed onboarding.
///
/// Starts `Unresolved` until the persisted flag has been read once; that
/// state is distinct from `NotOnboarded` so nothing is gated on a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingFlag {
    #[default]
    Unresolved,
    NotOnboarded,
    Onboarded,
}

impl OnboardingFlag {
    /// `Some(true)` once onboarded, `None` while unresolved.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Unresolved => None,
            Self::NotOnboarded => Some(false),
            Self::Onboarded => Some(true),
        }
    }
}

impl From<bool> for OnboardingFlag {
    fn from(onboarded: bool) -> Self {
        if onboarded {
            Self::Onboarded
        } else {
            Self::NotOnboarded
        }
    }
}

impl std::fmt::Display for OnboardingFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Unresolved => "unresolved",
            Self::NotOnboarded => "not_onboarded",
            Self::Onboarded => "onboarded",
        };
        write!(f, "{s}")
    }
}

/// The only mutable state of the navigation core.
///
/// Owned by the orchestrator, which is its single writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    pub current_path: String,
    pub onboarding: OnboardingFlag,
}

impl NavigationState {
    pub fn new(current_path: impl Into<String>) -> Self {
        Self {
            current_path: current_path.into(),
            onboarding: OnboardingFlag::Unresolved,
        }
    }
}

/// Normalize a raw path: ensure a leading slash, drop trailing slashes.
pub fn normalize(path: &str) -> String {
    let trimmed = path.trim();
    let trimmed = trimmed.trim_end_matches('/');
    if trimmed.is_empty() {
        return paths::ROOT.to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
