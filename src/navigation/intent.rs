//! What screens and chrome widgets ask the orchestrator to do.
//!
//! Screens never mutate navigation state; they hand one of these back.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "intent", content = "value", rename_all = "snake_case")]
pub enum Intent {
    /// Go to a path, pushing it onto history.
    Navigate(String),
    /// Pop one history entry.
    Back,
    /// Persist the onboarding flag and enter the app.
    CompleteOnboarding,
    /// Clear the onboarding flag and return to onboarding.
    Logout,
    /// Surface a transient message; no navigation.
    Notice(String),
}

impl Intent {
    pub fn navigate(path: impl Into<String>) -> Self {
        Self::Navigate(path.into())
    }

    pub fn notice(text: impl Into<String>) -> Self {
        Self::Notice(text.into())
    }
}

/// Icons referenced by chrome and screen descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Bell,
    Settings,
    Home,
    ListChecks,
    CreditCard,
    User,
    Languages,
    ShieldCheck,
    SlidersHorizontal,
    FileText,
    LifeBuoy,
}
