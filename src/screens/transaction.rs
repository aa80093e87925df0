//! Transaction status screen props.
//!
//! There is no payments backend. The outcome shown is inferred from the
//! transaction id itself: an id containing "success" reads as completed,
//! one containing "failed" as failed, anything else as still processing.
//! This is demo plumbing and must never be treated as an authoritative
//! payment status.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::navigation::{Intent, paths};

/// Shown when the path carries no transaction id.
pub const MISSING_ID: &str = "N/A";

const ACCOUNT_NAME: &str = "Alex Johnson's Savings Account";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionOutcome {
    Processing,
    Completed,
    Failed,
}

impl TransactionOutcome {
    /// Infer the outcome from an id. "success" wins over "failed".
    pub fn from_id(id: &str) -> Self {
        if id.contains("success") {
            Self::Completed
        } else if id.contains("failed") {
            Self::Failed
        } else {
            Self::Processing
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Completed => "Payment Successful!",
            Self::Failed => "Payment Failed. Please try again.",
            Self::Processing => "Payment is currently processing.",
        }
    }

    /// Fixed demo amount for each outcome.
    pub fn amount(&self) -> Decimal {
        match self {
            Self::Completed => dec!(125.00),
            Self::Failed => dec!(75.50),
            Self::Processing => dec!(210.00),
        }
    }
}

impl std::fmt::Display for TransactionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Processing => "Processing",
            Self::Completed => "Completed",
            Self::Failed => "Failed",
        };
        write!(f, "{s}")
    }
}

/// Buttons on the status card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionAction {
    ContactSupport,
    ViewDetails,
    GoHome,
}

impl TransactionAction {
    pub const ALL: [TransactionAction; 3] = [Self::ContactSupport, Self::ViewDetails, Self::GoHome];

    pub fn label(&self) -> &'static str {
        match self {
            Self::ContactSupport => "Contact Support",
            Self::ViewDetails => "View Details",
            Self::GoHome => "Back to Home",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionStatusProps {
    pub transaction_id: String,
    pub status: TransactionOutcome,
    pub message: &'static str,
    pub account_name: &'static str,
    pub amount: Decimal,
    pub date: NaiveDate,
}

impl TransactionStatusProps {
    /// Build props from the id path segment, if present.
    pub fn from_id(id: Option<&str>, today: NaiveDate) -> Self {
        let transaction_id = id
            .filter(|s| !s.is_empty())
            .unwrap_or(MISSING_ID)
            .to_string();
        let status = TransactionOutcome::from_id(&transaction_id);
        Self {
            transaction_id,
            status,
            message: status.message(),
            account_name: ACCOUNT_NAME,
            amount: status.amount(),
            date: today,
        }
    }

    pub fn intent_for(&self, action: TransactionAction) -> Intent {
        match action {
            TransactionAction::GoHome => Intent::navigate(paths::DASHBOARD),
            TransactionAction::ViewDetails => {
                Intent::notice(format!("Viewing details for transaction {}", self.transaction_id))
            }
            TransactionAction::ContactSupport => {
                Intent::notice("Contacting support for transaction...")
            }
        }
    }

    /// Amount as displayed, e.g. `$125.00`.
    pub fn formatted_amount(&self) -> String {
        format!("${:.2}", self.amount.abs())
    }

    /// Date as displayed, `YYYY-MM-DD`.
    pub fn formatted_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 15).unwrap()
    }

    #[test]
    fn success_id() {
        let props = TransactionStatusProps::from_id(Some("success-42"), today());
        assert_eq!(props.status, TransactionOutcome::Completed);
        assert_eq!(props.message, "Payment Successful!");
        assert_eq!(props.amount, dec!(125.00));
        assert_eq!(props.formatted_amount(), "$125.00");
        assert_eq!(props.transaction_id, "success-42");
    }

    #[test]
    fn failed_id() {
        let props = TransactionStatusProps::from_id(Some("failed-7"), today());
        assert_eq!(props.status, TransactionOutcome::Failed);
        assert_eq!(props.message, "Payment Failed. Please try again.");
        assert_eq!(props.formatted_amount(), "$75.50");
    }

    #[test]
    fn other_ids_are_processing() {
        let props = TransactionStatusProps::from_id(Some("processing-1721000000000"), today());
        assert_eq!(props.status, TransactionOutcome::Processing);
        assert_eq!(props.message, "Payment is currently processing.");
        assert_eq!(props.amount, dec!(210.00));
    }

    #[test]
    fn success_wins_over_failed() {
        assert_eq!(
            TransactionOutcome::from_id("failed-then-success"),
            TransactionOutcome::Completed
        );
    }

    #[test]
    fn missing_id_degrades_to_sentinel() {
        let props = TransactionStatusProps::from_id(None, today());
        assert_eq!(props.transaction_id, "N/A");
        assert_eq!(props.status, TransactionOutcome::Processing);

        let props = TransactionStatusProps::from_id(Some(""), today());
        assert_eq!(props.transaction_id, "N/A");
    }

    #[test]
    fn date_format() {
        let props = TransactionStatusProps::from_id(Some("x"), today());
        assert_eq!(props.formatted_date(), "2024-07-15");
        assert_eq!(props.account_name, "Alex Johnson's Savings Account");
    }

    #[test]
    fn actions_map_to_intents() {
        let props = TransactionStatusProps::from_id(Some("success-42"), today());
        assert_eq!(
            props.intent_for(TransactionAction::GoHome),
            Intent::Navigate("/dashboard".to_string())
        );
        assert_eq!(
            props.intent_for(TransactionAction::ViewDetails),
            Intent::Notice("Viewing details for transaction success-42".to_string())
        );
        assert!(matches!(
            props.intent_for(TransactionAction::ContactSupport),
            Intent::Notice(_)
        ));
    }

    #[test]
    fn decimal_serializes_as_string() {
        let props = TransactionStatusProps::from_id(Some("success-1"), today());
        let json = serde_json::to_value(&props).unwrap();
        assert_eq!(json["amount"], "125.00");
        assert_eq!(json["status"], "completed");
        assert_eq!(json["date"], "2024-07-15");
    }
}
