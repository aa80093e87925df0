//! Single-threaded event loop around the orchestrator.
//!
//! Three kinds of input share one queue: path changes, screen intents, and
//! the one-shot flag load. Redirects are followed within the observation
//! that produced them, so an event is fully settled before the next one is
//! read. Rendered frames go out on a separate channel.

use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::error::Error;
use crate::navigation::Intent;
use crate::orchestrator::{Applied, Orchestrator, Outcome, View, read_flag};
use crate::screens::RenderContext;

/// Redirects followed within one observation before giving up on a path.
/// The gate settles in at most two, so hitting this means a rule regression.
pub const MAX_REDIRECT_HOPS: u32 = 4;

/// Input to the navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// The persisted flag finished loading.
    FlagLoaded(bool),
    /// The user (or the driver) moved to a path.
    PathChanged(String),
    /// A screen or chrome widget asked for something.
    Intent(Intent),
    Shutdown,
}

/// Output of the navigator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "frame", rename_all = "snake_case")]
pub enum Frame {
    /// Flag not loaded yet: blank, chrome-less.
    Placeholder { path: String },
    Redirect { from: String, to: String },
    View(View),
    Notice { text: String },
}

/// Cheap, cloneable sender for driving a running navigator.
#[derive(Debug, Clone)]
pub struct NavigatorHandle {
    tx: mpsc::UnboundedSender<NavEvent>,
}

impl NavigatorHandle {
    pub fn send(&self, event: NavEvent) -> Result<(), Error> {
        self.tx
            .send(event)
            .map_err(|_| Error::Navigator("event queue closed".to_string()))
    }

    pub fn navigate(&self, path: impl Into<String>) -> Result<(), Error> {
        self.send(NavEvent::PathChanged(path.into()))
    }

    pub fn dispatch(&self, intent: Intent) -> Result<(), Error> {
        self.send(NavEvent::Intent(intent))
    }

    pub fn shutdown(&self) -> Result<(), Error> {
        self.send(NavEvent::Shutdown)
    }
}

pub struct Navigator {
    orchestrator: Orchestrator,
    tx: mpsc::UnboundedSender<NavEvent>,
    rx: mpsc::UnboundedReceiver<NavEvent>,
    frames: mpsc::UnboundedSender<Frame>,
    clock: fn() -> RenderContext,
}

impl Navigator {
    /// Create a navigator. Frames are delivered on the returned receiver.
    pub fn new(
        orchestrator: Orchestrator,
    ) -> (Self, NavigatorHandle, mpsc::UnboundedReceiver<Frame>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let (frames, frames_rx) = mpsc::unbounded_channel();
        let handle = NavigatorHandle { tx: tx.clone() };
        let navigator = Self {
            orchestrator,
            tx,
            rx,
            frames,
            clock: RenderContext::now,
        };
        (navigator, handle, frames_rx)
    }

    /// Replace the wall clock used to build screens.
    pub fn with_clock(mut self, clock: fn() -> RenderContext) -> Self {
        self.clock = clock;
        self
    }

    /// Start the one-time flag load. Its result arrives as `FlagLoaded`.
    fn spawn_flag_load(&self) {
        let store = self.orchestrator.store();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let onboarded = read_flag(store.as_ref()).await;
            // The loop may already be gone; nothing to do then.
            let _ = tx.send(NavEvent::FlagLoaded(onboarded));
        });
    }

    /// Run until `Shutdown` or until the frame receiver is dropped.
    pub async fn run(mut self) -> Result<(), Error> {
        self.spawn_flag_load();
        info!(path = %self.orchestrator.current_path(), "Navigator started");

        if !self.observe() {
            return Ok(());
        }

        while let Some(event) = self.rx.recv().await {
            debug!(event = ?event, "Navigator event");
            let keep_going = match event {
                NavEvent::Shutdown => break,
                NavEvent::FlagLoaded(onboarded) => {
                    self.orchestrator.resolve_flag(onboarded);
                    self.observe()
                }
                NavEvent::PathChanged(path) => {
                    self.orchestrator.push(&path);
                    self.observe()
                }
                NavEvent::Intent(intent) => {
                    match self.orchestrator.apply(intent).await {
                        Applied::Navigated => self.observe(),
                        Applied::Notice(text) => self.emit(Frame::Notice { text }),
                        Applied::Ignored => true,
                    }
                }
            };
            if !keep_going {
                break;
            }
        }

        info!("Navigator stopped");
        Ok(())
    }

    /// Observe the current path, following redirects, and publish the
    /// result. Returns false once nobody is listening for frames.
    fn observe(&mut self) -> bool {
        let ctx = (self.clock)();
        let mut hops = 0;
        loop {
            match self.orchestrator.observe(&ctx) {
                Outcome::Placeholder => {
                    return self.emit(Frame::Placeholder {
                        path: self.orchestrator.current_path().to_string(),
                    });
                }
                Outcome::Render(view) => return self.emit(Frame::View(view)),
                Outcome::Redirect { from, to } => {
                    hops += 1;
                    if hops > MAX_REDIRECT_HOPS {
                        error!(
                            from = %from,
                            to = to,
                            hops = hops,
                            "Redirect loop detected, refusing to follow"
                        );
                        return self.emit(Frame::Placeholder { path: from });
                    }
                    let frame = Frame::Redirect {
                        from,
                        to: to.to_string(),
                    };
                    if !self.emit(frame) {
                        return false;
                    }
                    self.orchestrator.replace(to);
                }
            }
        }
    }

    fn emit(&self, frame: Frame) -> bool {
        self.frames.send(frame).is_ok()
    }
}
