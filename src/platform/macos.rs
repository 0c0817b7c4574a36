//! macOS backend: `afplay` for sounds, AppleScript via `osascript` for
//! Notification Center, `terminal-notifier` when AppleScript fails.

use std::path::Path;

use super::Presenter;

pub const PLAYER: &str = "afplay";
pub const PRESENTER: &str = "osascript";
pub const FALLBACK_PRESENTER: &str = "terminal-notifier";

pub fn presenters() -> Vec<Presenter> {
    vec![
        Presenter::new(PRESENTER, presenter_args),
        Presenter::new(FALLBACK_PRESENTER, terminal_notifier_args),
    ]
}

/// AppleScript notifications cannot carry a custom icon
pub fn presenter_args(title: &str, message: &str, _icon: Option<&Path>) -> Vec<String> {
    vec!["-e".to_string(), display_notification_script(title, message)]
}

/// `terminal-notifier -title T -message M [-contentImage I -appIcon I]`
pub fn terminal_notifier_args(title: &str, message: &str, icon: Option<&Path>) -> Vec<String> {
    let mut args = vec![
        "-title".to_string(),
        title.to_string(),
        "-message".to_string(),
        message.to_string(),
    ];
    if let Some(icon) = icon {
        let icon = icon.display().to_string();
        args.extend([
            "-contentImage".to_string(),
            icon.clone(),
            "-appIcon".to_string(),
            icon,
        ]);
    }
    args
}

/// `display notification "<message>" with title "<title>"`
pub fn display_notification_script(title: &str, message: &str) -> String {
    format!(
        "display notification \"{}\" with title \"{}\"",
        escape_applescript(message),
        escape_applescript(title)
    )
}

/// Make `text` safe inside an AppleScript double-quoted string literal
fn escape_applescript(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            _ => escaped.push(c),
        }
    }
    escaped
}
