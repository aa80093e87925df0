//! Navigation core — onboarding gate, chrome derivation, routing, footer.
//!
//! Everything here is a pure function of the current path and the
//! onboarding flag. The orchestrator composes these pieces.

pub mod chrome;
pub mod footer;
pub mod gate;
pub mod intent;
pub mod routes;
pub mod state;

pub use chrome::{ChromeDescriptor, HeaderAction, derive, title_case};
pub use footer::{FOOTER_ITEMS, FooterNavItem, FooterView, active_item};
pub use gate::{GateDecision, decide, default_path};
pub use intent::{Icon, Intent};
pub use routes::{RouteEntry, RouteMatch, RouteParams, RouteTable, ScreenId};
pub use state::{NavigationState, OnboardingFlag, normalize, paths};
