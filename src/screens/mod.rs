//! Screens — typed props for each render target and the intents they emit.
//!
//! Screens hold no navigation state. The orchestrator builds one from a
//! route match; a front end renders it and feeds chosen intents back.

pub mod payment;
pub mod settings;
pub mod transaction;

use chrono::NaiveDate;
use serde::Serialize;

use crate::navigation::{Intent, RouteMatch, ScreenId, paths, title_case};

pub use payment::{PaymentDetails, PaymentErrors, PaymentProps, SelectOption};
pub use settings::{SettingsMenuItem, SettingsProps, UserProfile};
pub use transaction::{TransactionAction, TransactionOutcome, TransactionStatusProps};

/// Wall-clock inputs a screen may need. Injected so rendering stays
/// reproducible in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    pub today: NaiveDate,
    pub now_millis: i64,
}

impl RenderContext {
    pub fn now() -> Self {
        let now = chrono::Local::now();
        Self {
            today: now.date_naive(),
            now_millis: now.timestamp_millis(),
        }
    }
}

/// Buttons on the account overview and where they lead.
const OVERVIEW_LINKS: &[(&str, &str)] = &[
    ("Send", paths::PAYMENT),
    ("Request", "/request"),
    ("Add Money", "/add-money"),
    ("More", "/more-actions"),
    ("Manage", paths::CARDS_MANAGE),
    ("Business Card", "/cards/pc1"),
    ("Personal Card", "/cards/pc2"),
    ("View All", paths::TRANSACTIONS),
];

/// A labelled control on a screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenAction {
    pub label: String,
    pub intent: Intent,
}

impl ScreenAction {
    fn new(label: impl Into<String>, intent: Intent) -> Self {
        Self {
            label: label.into(),
            intent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    Onboarding,
    AccountOverview,
    Payment(PaymentProps),
    TransactionStatus(TransactionStatusProps),
    Settings(SettingsProps),
    Placeholder {
        title: String,
        path: String,
    },
}

impl Screen {
    /// Build the screen selected by `route` for `path`.
    pub fn build(route: &RouteMatch, path: &str, ctx: &RenderContext) -> Self {
        match route.screen {
            ScreenId::Onboarding => Self::Onboarding,
            ScreenId::AccountOverview => Self::AccountOverview,
            ScreenId::Payment => Self::Payment(PaymentProps::new(ctx.now_millis)),
            ScreenId::TransactionStatus => Self::TransactionStatus(TransactionStatusProps::from_id(
                route.params.get("transaction_id"),
                ctx.today,
            )),
            ScreenId::Settings => {
                let sub = route
                    .params
                    .rest()
                    .and_then(|rest| rest.split('/').next());
                Self::Settings(SettingsProps::new(sub))
            }
            ScreenId::Placeholder => Self::Placeholder {
                title: title_case(path.trim_start_matches('/')),
                path: path.to_string(),
            },
            ScreenId::CardDetails => Self::Placeholder {
                title: format!(
                    "Card Details for {}",
                    route.params.get("card_id").unwrap_or(transaction::MISSING_ID)
                ),
                path: path.to_string(),
            },
        }
    }

    /// Every control the screen offers, in display order.
    pub fn actions(&self) -> Vec<ScreenAction> {
        match self {
            Self::Onboarding => vec![ScreenAction::new("Get Started", Intent::CompleteOnboarding)],
            Self::AccountOverview => OVERVIEW_LINKS
                .iter()
                .map(|(label, path)| ScreenAction::new(*label, Intent::navigate(*path)))
                .collect(),
            // Paying goes through `PaymentProps::submit`, which needs the form.
            Self::Payment(_) => vec![ScreenAction::new("Cancel", Intent::Back)],
            Self::TransactionStatus(props) => TransactionAction::ALL
                .iter()
                .map(|action| ScreenAction::new(action.label(), props.intent_for(*action)))
                .collect(),
            Self::Settings(props) => props
                .menu
                .iter()
                .map(|item| ScreenAction::new(item.label, Intent::navigate(item.path)))
                .chain(std::iter::once(ScreenAction::new(
                    settings::LOGOUT_LABEL,
                    props.logout(),
                )))
                .collect(),
            Self::Placeholder { .. } => Vec::new(),
        }
    }

    /// Find a control by (case-insensitive) label.
    pub fn action(&self, label: &str) -> Option<Intent> {
        self.actions()
            .into_iter()
            .find(|a| a.label.eq_ignore_ascii_case(label.trim()))
            .map(|a| a.intent)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Onboarding => "onboarding",
            Self::AccountOverview => "account_overview",
            Self::Payment(_) => "payment",
            Self::TransactionStatus(_) => "transaction_status",
            Self::Settings(_) => "settings",
            Self::Placeholder { .. } => "placeholder",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::RouteTable;

    fn ctx() -> RenderContext {
        RenderContext {
            today: NaiveDate::from_ymd_opt(2024, 7, 15).unwrap(),
            now_millis: 1_721_000_000_000,
        }
    }

    fn screen_for(path: &str) -> Screen {
        let route = RouteTable::standard().resolve(path).unwrap();
        Screen::build(&route, path, &ctx())
    }

    #[test]
    fn settings_sub_route() {
        match screen_for("/settings/security") {
            Screen::Settings(props) => {
                assert_eq!(props.sub_route.as_deref(), Some("security"));
                assert_eq!(props.user.name, "Alex Thompson");
            }
            other => panic!("Expected settings, got {other:?}"),
        }
        match screen_for("/settings") {
            Screen::Settings(props) => assert!(props.sub_route.is_none()),
            other => panic!("Expected settings, got {other:?}"),
        }
    }

    #[test]
    fn transaction_status_from_path() {
        match screen_for("/transaction-status/success-42") {
            Screen::TransactionStatus(props) => {
                assert_eq!(props.status, TransactionOutcome::Completed);
                assert_eq!(props.message, "Payment Successful!");
            }
            other => panic!("Expected transaction status, got {other:?}"),
        }
    }

    #[test]
    fn placeholder_titles() {
        assert_eq!(
            screen_for("/add-money"),
            Screen::Placeholder {
                title: "Add Money".to_string(),
                path: "/add-money".to_string(),
            }
        );
        match screen_for("/cards/99") {
            Screen::Placeholder { title, .. } => assert_eq!(title, "Card Details for 99"),
            other => panic!("Expected placeholder, got {other:?}"),
        }
    }

    #[test]
    fn payment_submit_path_uses_clock() {
        let screen = screen_for("/payment");
        match &screen {
            Screen::Payment(props) => {
                assert_eq!(
                    props.submit_path,
                    "/transaction-status/processing-1721000000000"
                );
                assert_eq!(props.payees.len(), 3);
                assert_eq!(props.cards.len(), 3);
            }
            other => panic!("Expected payment, got {other:?}"),
        }
        // Paying is not a bare button; it needs a validated form.
        assert_eq!(screen.action("pay"), None);
        assert_eq!(screen.action("Cancel"), Some(Intent::Back));
    }

    #[test]
    fn onboarding_get_started() {
        assert_eq!(
            screen_for("/onboarding").action("get started"),
            Some(Intent::CompleteOnboarding)
        );
    }

    #[test]
    fn settings_actions_end_with_logout() {
        let actions = screen_for("/settings").actions();
        assert_eq!(actions.len(), 8);
        assert_eq!(actions.last().map(|a| a.intent.clone()), Some(Intent::Logout));
    }

    #[test]
    fn overview_links() {
        let screen = screen_for("/dashboard");
        assert_eq!(screen.action("Send"), Some(Intent::navigate("/payment")));
        assert_eq!(screen.action("manage"), Some(Intent::navigate("/cards/manage")));
        assert!(screen.action("missing").is_none());
    }
}
