//! Footer tab bar — static items and active-tab highlighting.

use serde::Serialize;

use super::intent::{Icon, Intent};
use super::state::paths;

/// A footer tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterNavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: Icon,
    /// Where clicking the tab navigates.
    pub path: &'static str,
    /// Paths under this prefix highlight the tab.
    pub active_prefix: &'static str,
}

impl FooterNavItem {
    pub fn on_click(&self) -> Intent {
        Intent::navigate(self.path)
    }
}

/// Tabs in display order.
pub const FOOTER_ITEMS: &[FooterNavItem] = &[
    FooterNavItem {
        id: "dashboard",
        label: "Home",
        icon: Icon::Home,
        path: paths::DASHBOARD,
        active_prefix: paths::DASHBOARD,
    },
    FooterNavItem {
        id: "transactions",
        label: "History",
        icon: Icon::ListChecks,
        path: paths::TRANSACTIONS,
        active_prefix: paths::TRANSACTIONS,
    },
    FooterNavItem {
        id: "cards",
        label: "Cards",
        icon: Icon::CreditCard,
        path: paths::CARDS_MANAGE,
        active_prefix: paths::CARDS,
    },
    FooterNavItem {
        id: "settings",
        label: "Profile",
        icon: Icon::User,
        path: paths::SETTINGS,
        active_prefix: paths::SETTINGS,
    },
];

/// Id of the tab to highlight for `path`: the item whose prefix is the
/// longest one `path` starts with.
pub fn active_item(path: &str) -> Option<&'static str> {
    FOOTER_ITEMS
        .iter()
        .filter(|item| path.starts_with(item.active_prefix))
        .max_by_key(|item| item.active_prefix.len())
        .map(|item| item.id)
}

/// What the footer shows for one rendered frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterView {
    pub items: &'static [FooterNavItem],
    pub active: Option<&'static str>,
}

impl FooterView {
    pub fn for_path(path: &str) -> Self {
        Self {
            items: FOOTER_ITEMS,
            active: active_item(path),
        }
    }

    /// Look up a tab by id or (case-insensitive) label.
    pub fn find(&self, key: &str) -> Option<&'static FooterNavItem> {
        self.items
            .iter()
            .find(|item| item.id == key || item.label.eq_ignore_ascii_case(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_tab_by_prefix() {
        assert_eq!(active_item("/dashboard"), Some("dashboard"));
        assert_eq!(active_item("/transactions"), Some("transactions"));
        assert_eq!(active_item("/cards/manage"), Some("cards"));
        assert_eq!(active_item("/cards/99"), Some("cards"));
        assert_eq!(active_item("/settings"), Some("settings"));
        assert_eq!(active_item("/settings/security"), Some("settings"));
    }

    #[test]
    fn no_active_tab_off_the_tab_bar() {
        assert_eq!(active_item("/request"), None);
        assert_eq!(active_item("/add-money"), None);
        assert_eq!(active_item("/transaction-status/abc"), None);
    }

    #[test]
    fn cards_tab_targets_manage_page() {
        let view = FooterView::for_path("/cards/pc1");
        let cards = view.find("cards").unwrap();
        assert_eq!(cards.on_click(), Intent::Navigate("/cards/manage".to_string()));
        assert_eq!(view.active, Some("cards"));
    }

    #[test]
    fn find_by_label() {
        let view = FooterView::for_path("/dashboard");
        assert_eq!(view.find("profile").map(|i| i.id), Some("settings"));
        assert_eq!(view.find("History").map(|i| i.id), Some("transactions"));
        assert!(view.find("nope").is_none());
    }
}
