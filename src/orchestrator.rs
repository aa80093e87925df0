//! Orchestrator — composition root of the navigation core.
//!
//! On every observation: gate first, then chrome + route, then the screen.
//! It is the single writer of `NavigationState` and owns the back stack.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::navigation::{
    ChromeDescriptor, FooterView, GateDecision, Intent, NavigationState, OnboardingFlag,
    RouteTable, chrome, decide, default_path, normalize, paths,
};
use crate::screens::{RenderContext, Screen};
use crate::store::FlagStore;

/// A fully resolved frame: chrome wrapped around a screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    pub path: String,
    /// `None` for the onboarding screen, which renders with zero chrome.
    pub chrome: Option<ChromeDescriptor>,
    pub screen: Screen,
    /// Present iff the chrome says the footer is visible.
    pub footer: Option<FooterView>,
}

impl View {
    /// Resolve a control label against everything on screen: the back
    /// button, header actions, footer tabs, then the screen's own controls.
    pub fn find_control(&self, label: &str) -> Option<Intent> {
        let label = label.trim();
        if let Some(chrome) = &self.chrome {
            if label.eq_ignore_ascii_case("back") {
                if let Some(back) = &chrome.back_action {
                    return Some(back.clone());
                }
            }
            if let Some(action) = chrome
                .header_actions
                .iter()
                .find(|a| a.label.eq_ignore_ascii_case(label))
            {
                return Some(action.on_click.clone());
            }
        }
        if let Some(item) = self.footer.as_ref().and_then(|f| f.find(label)) {
            return Some(item.on_click());
        }
        self.screen.action(label)
    }
}

/// Result of observing the current path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Flag still loading: neutral, chrome-less placeholder only.
    Placeholder,
    /// Path is not allowed or not known; go here instead.
    Redirect { from: String, to: &'static str },
    Render(View),
}

/// What applying an intent did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// The current path changed; observe again.
    Navigated,
    /// Nothing to re-render; show this message.
    Notice(String),
    /// Nothing happened (e.g. back at the root of history).
    Ignored,
}

pub struct Orchestrator {
    store: Arc<dyn FlagStore>,
    routes: RouteTable,
    state: NavigationState,
    history: Vec<String>,
}

impl Orchestrator {
    pub fn new(store: Arc<dyn FlagStore>, start_path: &str) -> Self {
        let start = normalize(start_path);
        Self {
            store,
            routes: RouteTable::standard(),
            state: NavigationState::new(start.clone()),
            history: vec![start],
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current_path(&self) -> &str {
        &self.state.current_path
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn store(&self) -> Arc<dyn FlagStore> {
        Arc::clone(&self.store)
    }

    /// Record the result of the one-time flag load.
    pub fn resolve_flag(&mut self, onboarded: bool) {
        self.state.onboarding = OnboardingFlag::from(onboarded);
        info!(onboarding = %self.state.onboarding, "Onboarding flag resolved");
    }

    /// Read the store and resolve the flag in one step.
    pub async fn load_flag(&mut self) -> OnboardingFlag {
        let onboarded = read_flag(self.store.as_ref()).await;
        self.resolve_flag(onboarded);
        self.state.onboarding
    }

    /// Evaluate the current path. Does not mutate state; the caller
    /// performs any redirect.
    pub fn observe(&self, ctx: &RenderContext) -> Outcome {
        let path = self.state.current_path.as_str();
        let flag = self.state.onboarding;

        match decide(path, flag) {
            GateDecision::Pending => {
                debug!(path = %path, "Flag unresolved, rendering placeholder");
                return Outcome::Placeholder;
            }
            GateDecision::Redirect(to) => {
                debug!(path = %path, to = to, "Gate redirect");
                return Outcome::Redirect {
                    from: path.to_string(),
                    to,
                };
            }
            GateDecision::Proceed => {}
        }

        let Some(route) = self.routes.resolve(path) else {
            // Unknown path: same landing the gate would pick for `/`.
            let to = default_path(flag).unwrap_or(paths::ONBOARDING);
            debug!(path = %path, to = to, "No route matched, redirecting");
            return Outcome::Redirect {
                from: path.to_string(),
                to,
            };
        };

        let descriptor = chrome::derive(path);
        let footer = descriptor
            .footer_visible
            .then(|| FooterView::for_path(path));
        let rule = chrome::rule_name(path);
        let frame_chrome = (path != paths::ONBOARDING).then_some(descriptor);
        let screen = Screen::build(&route, path, ctx);

        debug!(
            path = %path,
            route = route.pattern,
            screen = screen.name(),
            rule = rule,
            "Rendering"
        );

        Outcome::Render(View {
            path: path.to_string(),
            chrome: frame_chrome,
            screen,
            footer,
        })
    }

    /// Push a path onto history and make it current.
    pub fn push(&mut self, path: &str) {
        let path = normalize(path);
        if self.history.last() != Some(&path) {
            self.history.push(path.clone());
        }
        self.state.current_path = path;
    }

    /// Swap the current history entry, as redirects do. An entry that
    /// becomes equal to the one below it is collapsed into it.
    pub fn replace(&mut self, path: &str) {
        let path = normalize(path);
        self.history.pop();
        if self.history.last() != Some(&path) {
            self.history.push(path.clone());
        }
        self.state.current_path = path;
    }

    /// Pop one entry. Returns false at the root of history.
    pub fn back(&mut self) -> bool {
        if self.history.len() < 2 {
            return false;
        }
        self.history.pop();
        if let Some(previous) = self.history.last() {
            self.state.current_path = previous.clone();
        }
        true
    }

    /// Persist completion and enter the app.
    pub async fn complete_onboarding(&mut self) {
        if let Err(e) = self.store.write(true).await {
            warn!("Failed to persist onboarding flag: {}", e);
        }
        self.state.onboarding = OnboardingFlag::Onboarded;
        info!("Onboarding completed");
        self.push(paths::DASHBOARD);
    }

    /// Forget completion and return to onboarding.
    pub async fn logout(&mut self) {
        if let Err(e) = self.store.clear().await {
            warn!("Failed to clear onboarding flag: {}", e);
        }
        self.state.onboarding = OnboardingFlag::NotOnboarded;
        info!("Logged out");
        self.push(paths::ONBOARDING);
    }

    /// Apply an intent emitted by a screen or chrome widget.
    pub async fn apply(&mut self, intent: Intent) -> Applied {
        debug!(intent = ?intent, "Applying intent");
        match intent {
            Intent::Navigate(path) => {
                self.push(&path);
                Applied::Navigated
            }
            Intent::Back => {
                if self.back() {
                    Applied::Navigated
                } else {
                    Applied::Ignored
                }
            }
            Intent::CompleteOnboarding => {
                self.complete_onboarding().await;
                Applied::Navigated
            }
            Intent::Logout => {
                self.logout().await;
                Applied::Navigated
            }
            Intent::Notice(text) => {
                info!(notice = %text, "Notice");
                Applied::Notice(text)
            }
        }
    }
}

/// Read the persisted flag. Store failures are logged and read as
/// "not onboarded" so the gate always gets a resolved input.
pub async fn read_flag(store: &dyn FlagStore) -> bool {
    match store.read().await {
        Ok(value) => value,
        Err(e) => {
            warn!("Failed to read onboarding flag, assuming not onboarded: {}", e);
            false
        }
    }
}
