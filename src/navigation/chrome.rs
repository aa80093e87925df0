//! Chrome derivation — header and footer frame as a pure function of the path.
//!
//! Evaluated as an ordered rule table: the first rule whose predicate
//! matches builds the descriptor, otherwise the default builder applies.
//! Order matters (`/cards/manage` must be seen before `/cards/`).

use serde::Serialize;

use super::intent::{Icon, Intent};
use super::state::paths;

/// A button in the header's trailing action area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderAction {
    pub icon: Icon,
    pub label: &'static str,
    pub on_click: Intent,
}

/// Header/footer frame for one path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChromeDescriptor {
    pub title: Option<String>,
    pub show_back_button: bool,
    pub back_action: Option<Intent>,
    pub header_actions: Vec<HeaderAction>,
    pub footer_visible: bool,
    /// Suppress the content wrapper's padding for screens that manage
    /// their own scroll region.
    pub full_bleed_content: bool,
}

impl ChromeDescriptor {
    /// No header, no footer. The screen owns the whole viewport.
    pub fn none() -> Self {
        Self {
            title: None,
            show_back_button: false,
            back_action: None,
            header_actions: Vec::new(),
            footer_visible: false,
            full_bleed_content: true,
        }
    }

    /// Ordinary page: titled header with a back button, footer shown.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            show_back_button: true,
            back_action: Some(Intent::Back),
            header_actions: Vec::new(),
            footer_visible: true,
            full_bleed_content: false,
        }
    }

    fn without_back_button(mut self) -> Self {
        self.show_back_button = false;
        self.back_action = None;
        self
    }

    fn without_footer(mut self) -> Self {
        self.footer_visible = false;
        self
    }

    fn full_bleed(mut self) -> Self {
        self.full_bleed_content = true;
        self
    }

    /// Whether a header is rendered at all.
    pub fn has_header(&self) -> bool {
        self.title.is_some() || self.show_back_button || !self.header_actions.is_empty()
    }
}

/// Turn a hyphenated path segment into a display title.
///
/// `"add-money"` becomes `"Add Money"`. Every title derived from a path goes
/// through here so the same segment always reads the same way.
pub fn title_case(segment: &str) -> String {
    segment
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One entry of the chrome rule table.
pub struct ChromeRule {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    pub build: fn(&str) -> ChromeDescriptor,
}

/// Fixed pages whose header title is a literal.
const FIXED_TITLES: &[(&str, &str)] = &[
    ("/request", "Request Money"),
    ("/add-money", "Add Money"),
    ("/more-actions", "More Actions"),
    (paths::CARDS_MANAGE, "Manage Cards"),
    (paths::TRANSACTIONS, "All Transactions"),
];

/// Rules in priority order.
pub const CHROME_RULES: &[ChromeRule] = &[
    ChromeRule {
        name: "onboarding",
        matches: is_onboarding,
        build: onboarding_chrome,
    },
    ChromeRule {
        name: "dashboard",
        matches: is_dashboard,
        build: dashboard_chrome,
    },
    ChromeRule {
        name: "payment",
        matches: is_payment,
        build: payment_chrome,
    },
    ChromeRule {
        name: "transaction_status",
        matches: is_transaction_status,
        build: transaction_status_chrome,
    },
    ChromeRule {
        name: "settings",
        matches: is_settings,
        build: settings_chrome,
    },
    ChromeRule {
        name: "fixed_title",
        matches: is_fixed_title,
        build: fixed_title_chrome,
    },
    ChromeRule {
        name: "card_details",
        matches: is_card_details,
        build: card_details_chrome,
    },
];

/// Derive the chrome for `path`. Pure: equal paths give equal descriptors.
pub fn derive(path: &str) -> ChromeDescriptor {
    CHROME_RULES
        .iter()
        .find(|rule| (rule.matches)(path))
        .map(|rule| (rule.build)(path))
        .unwrap_or_else(|| default_chrome(path))
}

/// Name of the rule that handles `path`, `"default"` when none does.
pub fn rule_name(path: &str) -> &'static str {
    CHROME_RULES
        .iter()
        .find(|rule| (rule.matches)(path))
        .map(|rule| rule.name)
        .unwrap_or("default")
}

fn is_onboarding(path: &str) -> bool {
    path == paths::ONBOARDING
}

fn onboarding_chrome(_path: &str) -> ChromeDescriptor {
    ChromeDescriptor::none()
}

fn is_dashboard(path: &str) -> bool {
    path == paths::DASHBOARD
}

fn dashboard_chrome(_path: &str) -> ChromeDescriptor {
    let mut chrome = ChromeDescriptor::titled("My Account")
        .without_back_button()
        .full_bleed();
    chrome.header_actions = vec![
        HeaderAction {
            icon: Icon::Bell,
            label: "Notifications",
            on_click: Intent::notice("Notifications clicked!"),
        },
        HeaderAction {
            icon: Icon::Settings,
            label: "Settings",
            on_click: Intent::navigate(paths::SETTINGS),
        },
    ];
    chrome
}

fn is_payment(path: &str) -> bool {
    path.starts_with(paths::PAYMENT)
}

fn payment_chrome(_path: &str) -> ChromeDescriptor {
    ChromeDescriptor::titled("Make a Payment").without_footer()
}

fn is_transaction_status(path: &str) -> bool {
    path.starts_with(paths::TRANSACTION_STATUS)
}

fn transaction_status_chrome(_path: &str) -> ChromeDescriptor {
    ChromeDescriptor::titled("Transaction Status")
        .without_footer()
        .full_bleed()
}

fn is_settings(path: &str) -> bool {
    path.starts_with(paths::SETTINGS)
}

fn settings_chrome(path: &str) -> ChromeDescriptor {
    // The bare settings page is a footer tab root, so it has no back button.
    match settings_sub_page(path) {
        Some(page) => ChromeDescriptor::titled(title_case(page)).full_bleed(),
        None => ChromeDescriptor::titled("Settings")
            .without_back_button()
            .full_bleed(),
    }
}

/// First non-empty segment after `/settings`, if any.
fn settings_sub_page(path: &str) -> Option<&str> {
    path.strip_prefix(paths::SETTINGS)?
        .split('/')
        .find(|s| !s.is_empty())
}

fn is_fixed_title(path: &str) -> bool {
    FIXED_TITLES.iter().any(|(p, _)| *p == path)
}

fn fixed_title_chrome(path: &str) -> ChromeDescriptor {
    let title = FIXED_TITLES
        .iter()
        .find(|(p, _)| *p == path)
        .map(|(_, title)| *title)
        .unwrap_or_default();
    ChromeDescriptor::titled(title)
}

fn card_suffix(path: &str) -> Option<&str> {
    path.strip_prefix("/cards/")
        .filter(|suffix| !suffix.is_empty() && *suffix != "manage")
}

fn is_card_details(path: &str) -> bool {
    card_suffix(path).is_some()
}

fn card_details_chrome(path: &str) -> ChromeDescriptor {
    let suffix = card_suffix(path).unwrap_or_default();
    ChromeDescriptor::titled(format!("Card {}", title_case(suffix)))
}

fn default_chrome(path: &str) -> ChromeDescriptor {
    let last = path.rsplit('/').find(|s| !s.is_empty()).unwrap_or_default();
    let mut chrome = ChromeDescriptor::titled(title_case(last));
    if last.is_empty() {
        chrome.title = None;
    }
    chrome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_examples() {
        assert_eq!(title_case("add-money"), "Add Money");
        assert_eq!(title_case("more-actions"), "More Actions");
        assert_eq!(title_case("security"), "Security");
        assert_eq!(title_case("a-b-c"), "A B C");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn title_case_is_idempotent_on_capitalized_words() {
        for word in ["Security", "Settings", "Profile"] {
            assert_eq!(title_case(word), word);
            assert_eq!(title_case(&title_case(word)), word);
        }
    }

    #[test]
    fn derive_is_deterministic() {
        for path in [
            "/dashboard",
            "/payment",
            "/settings/app",
            "/cards/99",
            "/unknown/thing",
            "/onboarding",
        ] {
            assert_eq!(derive(path), derive(path));
        }
    }

    #[test]
    fn onboarding_has_no_chrome() {
        let chrome = derive("/onboarding");
        assert_eq!(chrome, ChromeDescriptor::none());
        assert!(!chrome.has_header());
        assert!(!chrome.footer_visible);
    }

    #[test]
    fn dashboard_has_actions_and_no_back() {
        let chrome = derive("/dashboard");
        assert_eq!(chrome.title.as_deref(), Some("My Account"));
        assert!(!chrome.show_back_button);
        assert!(chrome.back_action.is_none());
        assert!(chrome.footer_visible);
        assert!(chrome.full_bleed_content);

        let labels: Vec<&str> = chrome.header_actions.iter().map(|a| a.label).collect();
        assert_eq!(labels, ["Notifications", "Settings"]);
        assert_eq!(
            chrome.header_actions[1].on_click,
            Intent::Navigate("/settings".to_string())
        );
    }

    #[test]
    fn dashboard_match_is_exact() {
        assert_eq!(rule_name("/dashboard"), "dashboard");
        assert_eq!(rule_name("/dashboard/extra"), "default");
    }

    #[test]
    fn payment_hides_footer() {
        let chrome = derive("/payment");
        assert_eq!(chrome.title.as_deref(), Some("Make a Payment"));
        assert!(!chrome.footer_visible);
        assert!(chrome.show_back_button);
        assert!(!chrome.full_bleed_content);
    }

    #[test]
    fn transaction_status_is_full_bleed_without_footer() {
        let chrome = derive("/transaction-status/success-42");
        assert_eq!(chrome.title.as_deref(), Some("Transaction Status"));
        assert!(!chrome.footer_visible);
        assert!(chrome.full_bleed_content);
    }

    #[test]
    fn settings_root_has_no_back_button() {
        let chrome = derive("/settings");
        assert_eq!(chrome.title.as_deref(), Some("Settings"));
        assert!(!chrome.show_back_button);
        assert!(chrome.full_bleed_content);
        assert!(chrome.footer_visible);
    }

    #[test]
    fn settings_sub_page_title() {
        let chrome = derive("/settings/security");
        assert_eq!(chrome.title.as_deref(), Some("Security"));
        assert!(chrome.show_back_button);
        assert_eq!(chrome.back_action, Some(Intent::Back));

        let chrome = derive("/settings/two-factor/setup");
        assert_eq!(chrome.title.as_deref(), Some("Two Factor"));
    }

    #[test]
    fn fixed_titles() {
        assert_eq!(derive("/request").title.as_deref(), Some("Request Money"));
        assert_eq!(derive("/add-money").title.as_deref(), Some("Add Money"));
        assert_eq!(derive("/more-actions").title.as_deref(), Some("More Actions"));
        assert_eq!(derive("/transactions").title.as_deref(), Some("All Transactions"));
    }

    #[test]
    fn cards_manage_beats_card_details() {
        assert_eq!(rule_name("/cards/manage"), "fixed_title");
        assert_eq!(derive("/cards/manage").title.as_deref(), Some("Manage Cards"));
        assert_eq!(derive("/cards/99").title.as_deref(), Some("Card 99"));
        assert_eq!(derive("/cards/pc1").title.as_deref(), Some("Card Pc1"));
    }

    #[test]
    fn default_uses_last_segment() {
        let chrome = derive("/some/odd-place");
        assert_eq!(chrome.title.as_deref(), Some("Odd Place"));
        assert!(chrome.show_back_button);
        assert!(chrome.footer_visible);
        assert!(chrome.header_actions.is_empty());
        assert!(!chrome.full_bleed_content);

        assert_eq!(derive("/").title, None);
    }
}
