//! Plain-text rendering of navigator frames for the terminal driver.

use std::fmt::Write;

use crate::navigator::Frame;
use crate::orchestrator::View;
use crate::screens::Screen;

const RULE: &str = "────────────────────────────────────────";

/// Render a frame as human-readable text.
pub fn frame(frame: &Frame) -> String {
    match frame {
        Frame::Placeholder { path } => format!("… loading ({path})"),
        Frame::Redirect { from, to } => format!("↪ {from} → {to}"),
        Frame::Notice { text } => format!("ℹ️  {text}"),
        Frame::View(view) => self::view(view),
    }
}

/// Render a frame as a single JSON line.
pub fn frame_json(frame: &Frame) -> Result<String, serde_json::Error> {
    serde_json::to_string(frame)
}

pub fn view(view: &View) -> String {
    let mut out = String::new();

    if let Some(chrome) = view.chrome.as_ref().filter(|c| c.has_header()) {
        let back = if chrome.show_back_button { "← " } else { "" };
        let title = chrome.title.as_deref().unwrap_or("");
        let actions: Vec<&str> = chrome.header_actions.iter().map(|a| a.label).collect();
        if actions.is_empty() {
            let _ = writeln!(out, "{back}{title}");
        } else {
            let _ = writeln!(out, "{back}{title}  [{}]", actions.join("] ["));
        }
        let _ = writeln!(out, "{RULE}");
    }

    screen(&mut out, &view.screen);

    if let Some(footer) = &view.footer {
        let _ = writeln!(out, "{RULE}");
        let tabs: Vec<String> = footer
            .items
            .iter()
            .map(|item| {
                if footer.active == Some(item.id) {
                    format!("*{}*", item.label)
                } else {
                    item.label.to_string()
                }
            })
            .collect();
        let _ = writeln!(out, "{}", tabs.join(" | "));
    }

    let _ = write!(out, "({})", view.path);
    out
}

fn screen(out: &mut String, screen: &Screen) {
    match screen {
        Screen::Onboarding => {
            let _ = writeln!(out, "Welcome to BankEase");
            let _ = writeln!(out, "Banking made simple.");
        }
        Screen::AccountOverview => {
            let _ = writeln!(out, "Account overview");
        }
        Screen::Payment(props) => {
            let _ = writeln!(out, "Payee Account");
            for option in props.payees {
                let _ = writeln!(out, "  {:<8} {}", option.id, option.label);
            }
            let _ = writeln!(out, "Payment Card");
            for option in props.cards {
                let _ = writeln!(
                    out,
                    "  {:<8} {} ({})",
                    option.id,
                    option.label,
                    option.details.unwrap_or_default()
                );
            }
            let _ = writeln!(out, "pay <amount> <payee> <card> [note]");
        }
        Screen::TransactionStatus(props) => {
            let _ = writeln!(out, "{}", props.message);
            let _ = writeln!(out, "  Transaction  {}", props.transaction_id);
            let _ = writeln!(out, "  Account      {}", props.account_name);
            let _ = writeln!(out, "  Amount       {}", props.formatted_amount());
            let _ = writeln!(out, "  Date         {}", props.formatted_date());
        }
        Screen::Settings(props) => {
            let _ = writeln!(out, "{} <{}>", props.user.name, props.user.email);
            let _ = writeln!(out, "Member since {}", props.user.member_since);
            if let Some(item) = props.active_item() {
                let _ = writeln!(out, "Section: {}", item.label);
            }
        }
        Screen::Placeholder { title, .. } => {
            let _ = writeln!(out, "{title}");
            let _ = writeln!(out, "This page is under construction.");
        }
    }

    let actions = screen.actions();
    if !actions.is_empty() {
        let labels: Vec<String> = actions.iter().map(|a| format!("[{}]", a.label)).collect();
        let _ = writeln!(out, "{}", labels.join(" "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{ChromeDescriptor, FooterView, RouteTable, chrome};
    use crate::screens::RenderContext;
    use chrono::NaiveDate;

    fn view_for(path: &str) -> View {
        let ctx = RenderContext {
            today: NaiveDate::from_ymd_opt(2024, 7, 15).unwrap(),
            now_millis: 1,
        };
        let route = RouteTable::standard().resolve(path).unwrap();
        let descriptor: ChromeDescriptor = chrome::derive(path);
        let footer = descriptor.footer_visible.then(|| FooterView::for_path(path));
        View {
            path: path.to_string(),
            chrome: Some(descriptor),
            screen: Screen::build(&route, path, &ctx),
            footer,
        }
    }

    #[test]
    fn dashboard_marks_home_tab() {
        let text = view(&view_for("/dashboard"));
        assert!(text.contains("*Home*"));
        assert!(text.contains("My Account  [Notifications] [Settings]"));
        assert!(!text.contains('←'));
    }

    #[test]
    fn payment_has_back_arrow_and_no_footer() {
        let text = view(&view_for("/payment"));
        assert!(text.starts_with("← Make a Payment"));
        assert!(text.contains("payee2   Utility Services Inc."));
        assert!(text.contains("card3    Amex ****3333 (Expires 01/24 (Expired))"));
        assert!(!text.contains("*Home*"));
    }

    #[test]
    fn transaction_status_details() {
        let text = view(&view_for("/transaction-status/failed-9"));
        assert!(text.contains("failed-9"));
        assert!(text.contains("$75.50"));
        assert!(text.contains("2024-07-15"));
    }

    #[test]
    fn frame_json_is_tagged() {
        let json = frame_json(&Frame::Notice {
            text: "hi".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"frame":"notice","text":"hi"}"#);
    }
}
