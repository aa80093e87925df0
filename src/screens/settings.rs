//! Settings screen props: static user profile and menu.

use serde::Serialize;

use crate::navigation::{Icon, Intent};

/// Profile card shown at the top of the settings menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub member_since: String,
    pub avatar_url: Option<String>,
    pub initials: String,
}

impl UserProfile {
    /// The hard-coded demo account.
    pub fn demo() -> Self {
        Self {
            name: "Alex Thompson".to_string(),
            email: "alex.thompson@example.com".to_string(),
            member_since: "June 2022".to_string(),
            avatar_url: Some(
                "https://ui-avatars.com/api/?name=Alex+Thompson&background=2563EB&color=F9FAFB&size=128"
                    .to_string(),
            ),
            initials: "AT".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsMenuItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: Icon,
    pub path: &'static str,
}

pub const MENU_ITEMS: &[SettingsMenuItem] = &[
    SettingsMenuItem {
        id: "profile",
        label: "Account Holder",
        icon: Icon::User,
        path: "/settings/profile",
    },
    SettingsMenuItem {
        id: "language",
        label: "Preferred Language",
        icon: Icon::Languages,
        path: "/settings/language",
    },
    SettingsMenuItem {
        id: "notifications",
        label: "Notification Settings",
        icon: Icon::Bell,
        path: "/settings/notifications",
    },
    SettingsMenuItem {
        id: "security",
        label: "Security & Privacy",
        icon: Icon::ShieldCheck,
        path: "/settings/security",
    },
    SettingsMenuItem {
        id: "app",
        label: "App Preferences",
        icon: Icon::SlidersHorizontal,
        path: "/settings/app",
    },
    SettingsMenuItem {
        id: "documents",
        label: "Statements & Documents",
        icon: Icon::FileText,
        path: "/settings/documents",
    },
    SettingsMenuItem {
        id: "support",
        label: "Customer Support",
        icon: Icon::LifeBuoy,
        path: "/settings/support",
    },
];

pub const LOGOUT_LABEL: &str = "Log Out";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsProps {
    pub user: UserProfile,
    /// Segment after `/settings`, e.g. `security`.
    pub sub_route: Option<String>,
    pub menu: &'static [SettingsMenuItem],
}

impl SettingsProps {
    pub fn new(sub_route: Option<&str>) -> Self {
        Self {
            user: UserProfile::demo(),
            sub_route: sub_route.map(str::to_string),
            menu: MENU_ITEMS,
        }
    }

    /// The menu entry for the active sub-route, if it is a known one.
    pub fn active_item(&self) -> Option<&'static SettingsMenuItem> {
        let sub = self.sub_route.as_deref()?;
        self.menu.iter().find(|item| item.id == sub)
    }

    pub fn logout(&self) -> Intent {
        Intent::Logout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_profile() {
        let user = UserProfile::demo();
        assert_eq!(user.name, "Alex Thompson");
        assert_eq!(user.initials, "AT");
        assert_eq!(user.member_since, "June 2022");
    }

    #[test]
    fn menu_paths_live_under_settings() {
        assert_eq!(MENU_ITEMS.len(), 7);
        for item in MENU_ITEMS {
            assert_eq!(item.path, format!("/settings/{}", item.id));
        }
    }

    #[test]
    fn active_item_follows_sub_route() {
        let props = SettingsProps::new(Some("security"));
        assert_eq!(props.active_item().map(|i| i.label), Some("Security & Privacy"));

        assert!(SettingsProps::new(None).active_item().is_none());
        assert!(SettingsProps::new(Some("unknown")).active_item().is_none());
    }

    #[test]
    fn logout_emits_intent() {
        assert_eq!(SettingsProps::new(None).logout(), Intent::Logout);
    }
}
