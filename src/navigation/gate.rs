//! Enforces the onboarding access invariant.
//!
//! Two states (onboarded or not) crossed with two path classes (the
//! onboarding path or anything else). Every redirect lands on a path the
//! rules treat as terminal for the same state, so a redirect can never
//! trigger itself again.

use serde::Serialize;

use super::state::{OnboardingFlag, paths};

/// Outcome of consulting the gate for one path observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "target", rename_all = "snake_case")]
pub enum GateDecision {
    /// Flag not loaded yet: render nothing, redirect nowhere.
    Pending,
    /// The path is allowed in the current state.
    Proceed,
    /// Navigate (replacing history) to the given path.
    Redirect(&'static str),
}

/// Decide whether `path` is reachable in the given onboarding state.
pub fn decide(path: &str, flag: OnboardingFlag) -> GateDecision {
    let onboarded = match flag.as_bool() {
        None => return GateDecision::Pending,
        Some(b) => b,
    };

    if path == paths::ROOT {
        return GateDecision::Redirect(landing(onboarded));
    }
    if !onboarded && path != paths::ONBOARDING {
        return GateDecision::Redirect(paths::ONBOARDING);
    }
    if onboarded && path == paths::ONBOARDING {
        return GateDecision::Redirect(paths::DASHBOARD);
    }
    GateDecision::Proceed
}

/// Landing path for a state. Also the catch-all target for unknown paths.
pub fn default_path(flag: OnboardingFlag) -> Option<&'static str> {
    flag.as_bool().map(landing)
}

fn landing(onboarded: bool) -> &'static str {
    if onboarded {
        paths::DASHBOARD
    } else {
        paths::ONBOARDING
    }
}
