//! Ordered path patterns mapped to screens.
//!
//! Patterns are `/`-separated segments. A segment starting with `:` captures
//! one path segment under that name; a trailing `*` captures the remainder
//! (possibly empty). Matching is first-match-wins over declaration order.

use std::collections::BTreeMap;

use serde::Serialize;

/// Screens the router can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenId {
    Onboarding,
    AccountOverview,
    Payment,
    TransactionStatus,
    Settings,
    Placeholder,
    CardDetails,
}

/// Parameters captured from a path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    /// Key under which a trailing `*` stores its capture.
    pub const WILDCARD: &'static str = "*";

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// The `*` capture, `None` when empty or absent.
    pub fn rest(&self) -> Option<&str> {
        self.get(Self::WILDCARD).filter(|s| !s.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn insert(&mut self, name: &str, value: String) {
        self.0.insert(name.to_string(), value);
    }
}

/// One declared route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: &'static str,
    pub screen: ScreenId,
}

impl RouteEntry {
    pub const fn new(pattern: &'static str, screen: ScreenId) -> Self {
        Self { pattern, screen }
    }

    /// Match `path` against this pattern, returning captured parameters.
    pub fn extract(&self, path: &str) -> Option<RouteParams> {
        let mut params = RouteParams::default();
        let mut remaining = segments(path);

        for part in segments(self.pattern) {
            if part == "*" {
                let rest: Vec<&str> = remaining.by_ref().collect();
                params.insert(RouteParams::WILDCARD, rest.join("/"));
                return Some(params);
            }
            let segment = remaining.next()?;
            match part.strip_prefix(':') {
                Some(name) => params.insert(name, segment.to_string()),
                None if part == segment => {}
                None => return None,
            }
        }

        if remaining.next().is_some() {
            return None;
        }
        Some(params)
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// A successful route lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    pub pattern: &'static str,
    pub screen: ScreenId,
    pub params: RouteParams,
}

/// Ordered, closed set of routes.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl RouteTable {
    /// The application's routes. `/cards/manage` is declared ahead of
    /// `/cards/:card_id`, which would otherwise swallow it.
    pub fn standard() -> Self {
        use ScreenId::*;
        Self {
            entries: vec![
                RouteEntry::new("/onboarding", Onboarding),
                RouteEntry::new("/dashboard", AccountOverview),
                RouteEntry::new("/payment", Payment),
                RouteEntry::new("/transaction-status/:transaction_id", TransactionStatus),
                RouteEntry::new("/settings/*", Settings),
                RouteEntry::new("/request", Placeholder),
                RouteEntry::new("/add-money", Placeholder),
                RouteEntry::new("/more-actions", Placeholder),
                RouteEntry::new("/cards/manage", Placeholder),
                RouteEntry::new("/transactions", Placeholder),
                RouteEntry::new("/cards/:card_id", CardDetails),
            ],
        }
    }

    /// First route matching `path`. Unmatched paths are `None`, not an error.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        self.entries.iter().find_map(|entry| {
            entry.extract(path).map(|params| RouteMatch {
                pattern: entry.pattern,
                screen: entry.screen,
                params,
            })
        })
    }
}
