//! Terminal driver: stdin commands in, rendered frames out.

use futures::stream::{self, BoxStream, StreamExt};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::error::Error;
use crate::navigation::Intent;
use crate::navigator::{Frame, NavigatorHandle};
use crate::orchestrator::View;
use crate::render;
use crate::screens::Screen;

pub const HELP: &str = "\
Commands:
  /some/path       go to a path
  back             press the back button
  tap <label>      press a control (header action, footer tab, or screen button)
  <label>          same as tap
  pay <amount> <payee> <card> [note]
                   submit the payment form
  json             toggle JSON output
  state            show the last rendered view as JSON
  help             show this message
  quit             exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Navigate(String),
    Back,
    Tap(String),
    Pay {
        amount: String,
        payee: Option<String>,
        card: Option<String>,
        note: Option<String>,
    },
    ToggleJson,
    State,
    Help,
    Quit,
}

/// Parse one input line. Blank lines are `None`.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if line.starts_with('/') {
        return Some(Command::Navigate(line.to_string()));
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let command = match word.to_ascii_lowercase().as_str() {
        "pay" if !rest.is_empty() => parse_pay(rest),
        "back" if rest.is_empty() => Command::Back,
        "tap" | "press" if !rest.is_empty() => Command::Tap(rest.to_string()),
        "json" if rest.is_empty() => Command::ToggleJson,
        "state" if rest.is_empty() => Command::State,
        "help" | "?" if rest.is_empty() => Command::Help,
        "quit" | "exit" if rest.is_empty() => Command::Quit,
        _ => Command::Tap(line.to_string()),
    };
    Some(command)
}

/// `<amount> <payee> <card> [note...]`; missing fields are left for the
/// form's validation to report.
fn parse_pay(args: &str) -> Command {
    let mut rest = args.trim();
    let mut take = || {
        if rest.is_empty() {
            return None;
        }
        let (word, tail) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        rest = tail.trim_start();
        Some(word.to_string())
    };
    let amount = take().unwrap_or_default();
    let payee = take();
    let card = take();
    let note = Some(rest.trim_end())
        .filter(|n| !n.is_empty())
        .map(str::to_string);
    Command::Pay {
        amount,
        payee,
        card,
        note,
    }
}

/// Drives a navigator from stdin until `quit`, EOF, or the navigator stops.
pub struct CliDriver {
    handle: NavigatorHandle,
    frames: mpsc::UnboundedReceiver<Frame>,
    json: bool,
    last_view: Option<View>,
}

impl CliDriver {
    pub fn new(handle: NavigatorHandle, frames: mpsc::UnboundedReceiver<Frame>) -> Self {
        Self {
            handle,
            frames,
            json: false,
            last_view: None,
        }
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub async fn run(mut self) -> Result<(), Error> {
        let mut lines = stdin_lines();
        eprint!("> ");

        loop {
            tokio::select! {
                frame = self.frames.recv() => {
                    let Some(frame) = frame else { break };
                    self.show(frame);
                    eprint!("> ");
                }
                line = lines.next() => {
                    let Some(line) = line else { break };
                    let Some(command) = parse_command(&line) else {
                        eprint!("> ");
                        continue;
                    };
                    if !self.execute(command)? {
                        break;
                    }
                }
            }
        }

        // Navigator may already be gone.
        let _ = self.handle.shutdown();
        Ok(())
    }

    /// Returns false when the driver should stop.
    fn execute(&mut self, command: Command) -> Result<bool, Error> {
        match command {
            Command::Quit => return Ok(false),
            Command::Navigate(path) => self.handle.navigate(path)?,
            Command::Back => self.handle.dispatch(Intent::Back)?,
            Command::Tap(label) => match self.lookup(&label) {
                Some(intent) => self.handle.dispatch(intent)?,
                None => {
                    eprintln!("No control labelled '{label}' on this screen");
                    eprint!("> ");
                }
            },
            Command::Pay {
                amount,
                payee,
                card,
                note,
            } => {
                let Some(Screen::Payment(props)) = self.last_view.as_ref().map(|v| &v.screen)
                else {
                    eprintln!("No payment form on this screen");
                    eprint!("> ");
                    return Ok(true);
                };
                match props.submit(&amount, payee.as_deref(), card.as_deref(), note.as_deref()) {
                    Ok(intent) => self.handle.dispatch(intent)?,
                    Err(errors) => {
                        for message in errors.messages() {
                            eprintln!("⚠️  {message}");
                        }
                        eprint!("> ");
                    }
                }
            }
            Command::ToggleJson => {
                self.json = !self.json;
                eprintln!("JSON output {}", if self.json { "on" } else { "off" });
                eprint!("> ");
            }
            Command::State => {
                match self.last_view.as_ref().map(serde_json::to_string_pretty) {
                    Some(Ok(json)) => println!("{json}"),
                    Some(Err(e)) => eprintln!("Failed to serialize view: {e}"),
                    None => eprintln!("Nothing rendered yet"),
                }
                eprint!("> ");
            }
            Command::Help => {
                eprintln!("{HELP}");
                eprint!("> ");
            }
        }
        Ok(true)
    }

    fn lookup(&self, label: &str) -> Option<Intent> {
        self.last_view.as_ref()?.find_control(label)
    }

    fn show(&mut self, frame: Frame) {
        if self.json {
            match render::frame_json(&frame) {
                Ok(line) => println!("{line}"),
                Err(e) => tracing::error!("Failed to serialize frame: {}", e),
            }
        } else {
            println!("\n{}\n", render::frame(&frame));
        }
        if let Frame::View(view) = frame {
            self.last_view = Some(view);
        }
    }
}

/// Lines typed on stdin, read on a background task.
fn stdin_lines() -> BoxStream<'static, String> {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Ok(None) => break, // EOF
                Err(e) => {
                    tracing::error!("Error reading stdin: {}", e);
                    break;
                }
            }
        }
    });

    stream::unfold(rx, |mut rx| async move { rx.recv().await.map(|line| (line, rx)) }).boxed()
}
