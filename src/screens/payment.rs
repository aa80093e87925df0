//! Payment form: fixed payee and card options, and submit validation.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::navigation::{Intent, paths};

/// One entry of a select list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub id: &'static str,
    pub label: &'static str,
    pub details: Option<&'static str>,
}

pub const PAYEES: &[SelectOption] = &[
    SelectOption {
        id: "payee1",
        label: "John Doe",
        details: Some("Savings ****1234"),
    },
    SelectOption {
        id: "payee2",
        label: "Utility Services Inc.",
        details: Some("Bill ****5678"),
    },
    SelectOption {
        id: "payee3",
        label: "Online Store",
        details: Some("Order #98765"),
    },
];

pub const CARDS: &[SelectOption] = &[
    SelectOption {
        id: "card1",
        label: "Visa ****1111",
        details: Some("Expires 12/25"),
    },
    SelectOption {
        id: "card2",
        label: "Mastercard ****2222",
        details: Some("Expires 08/26"),
    },
    SelectOption {
        id: "card3",
        label: "Amex ****3333",
        details: Some("Expires 01/24 (Expired)"),
    },
];

pub const INVALID_AMOUNT: &str = "Please enter a valid amount.";
pub const MISSING_PAYEE: &str = "Please select a payee.";
pub const MISSING_CARD: &str = "Please select a payment card.";

/// Per-field validation messages. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaymentErrors {
    pub amount: Option<&'static str>,
    pub payee: Option<&'static str>,
    pub card: Option<&'static str>,
}

impl PaymentErrors {
    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.payee.is_none() && self.card.is_none()
    }

    /// Messages in field order.
    pub fn messages(&self) -> Vec<&'static str> {
        [self.amount, self.payee, self.card]
            .into_iter()
            .flatten()
            .collect()
    }
}

impl std::fmt::Display for PaymentErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.messages().join(" "))
    }
}

/// A validated payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentDetails {
    pub amount: Decimal,
    pub payee_id: &'static str,
    pub card_id: &'static str,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentProps {
    /// Where a submitted payment lands.
    pub submit_path: String,
    pub payees: &'static [SelectOption],
    pub cards: &'static [SelectOption],
}

impl PaymentProps {
    pub fn new(now_millis: i64) -> Self {
        Self {
            submit_path: format!("{}/processing-{}", paths::TRANSACTION_STATUS, now_millis),
            payees: PAYEES,
            cards: CARDS,
        }
    }

    /// Check the form. Every failing field gets its own message.
    pub fn validate(
        &self,
        amount: &str,
        payee: Option<&str>,
        card: Option<&str>,
        note: Option<&str>,
    ) -> Result<PaymentDetails, PaymentErrors> {
        let amount = amount
            .trim()
            .parse::<Decimal>()
            .ok()
            .filter(|a| *a > Decimal::ZERO);
        let payee = payee.and_then(|id| find(self.payees, id));
        let card = card.and_then(|id| find(self.cards, id));

        match (amount, payee, card) {
            (Some(amount), Some(payee), Some(card)) => Ok(PaymentDetails {
                amount,
                payee_id: payee.id,
                card_id: card.id,
                note: note
                    .map(str::trim)
                    .filter(|n| !n.is_empty())
                    .map(str::to_string),
            }),
            (amount, payee, card) => Err(PaymentErrors {
                amount: amount.is_none().then_some(INVALID_AMOUNT),
                payee: payee.is_none().then_some(MISSING_PAYEE),
                card: card.is_none().then_some(MISSING_CARD),
            }),
        }
    }

    /// Validate and, if the form is good, return the intent that processes it.
    pub fn submit(
        &self,
        amount: &str,
        payee: Option<&str>,
        card: Option<&str>,
        note: Option<&str>,
    ) -> Result<Intent, PaymentErrors> {
        let details = self.validate(amount, payee, card, note)?;
        info!(
            amount = %details.amount,
            payee = details.payee_id,
            card = details.card_id,
            "Payment submitted"
        );
        Ok(Intent::navigate(self.submit_path.clone()))
    }
}

/// Look up an option by id, or by label ignoring case.
fn find(options: &'static [SelectOption], key: &str) -> Option<&'static SelectOption> {
    let key = key.trim();
    options
        .iter()
        .find(|o| o.id == key || o.label.eq_ignore_ascii_case(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn props() -> PaymentProps {
        PaymentProps::new(1_721_000_000_000)
    }

    #[test]
    fn valid_submission_navigates_to_processing() {
        let intent = props()
            .submit("25.50", Some("payee1"), Some("card2"), Some("rent"))
            .unwrap();
        assert_eq!(
            intent,
            Intent::navigate("/transaction-status/processing-1721000000000")
        );
    }

    #[test]
    fn details_carry_the_form_values() {
        let details = props()
            .validate(" 12.5 ", Some("Online Store"), Some("card1"), Some("  "))
            .unwrap();
        assert_eq!(details.amount, dec!(12.5));
        assert_eq!(details.payee_id, "payee3");
        assert_eq!(details.card_id, "card1");
        assert_eq!(details.note, None);
    }

    #[test]
    fn invalid_amounts_are_rejected() {
        for amount in ["", "abc", "0", "0.00", "-5"] {
            let errors = props()
                .submit(amount, Some("payee1"), Some("card1"), None)
                .unwrap_err();
            assert_eq!(errors.amount, Some(INVALID_AMOUNT), "amount {amount:?}");
            assert!(errors.payee.is_none());
            assert!(errors.card.is_none());
        }
    }

    #[test]
    fn missing_payee_is_rejected() {
        let errors = props().submit("10", None, Some("card1"), None).unwrap_err();
        assert_eq!(errors.messages(), vec![MISSING_PAYEE]);

        let errors = props()
            .submit("10", Some("payee9"), Some("card1"), None)
            .unwrap_err();
        assert_eq!(errors.payee, Some(MISSING_PAYEE));
    }

    #[test]
    fn missing_card_is_rejected() {
        let errors = props().submit("10", Some("payee2"), None, None).unwrap_err();
        assert_eq!(errors.messages(), vec![MISSING_CARD]);
    }

    #[test]
    fn all_errors_reported_together() {
        let errors = props().submit("", None, None, None).unwrap_err();
        assert!(!errors.is_empty());
        assert_eq!(
            errors.to_string(),
            "Please enter a valid amount. Please select a payee. Please select a payment card."
        );
    }
}
