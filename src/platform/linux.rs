//! Linux backend: PulseAudio `paplay` and libnotify `notify-send`.

use std::path::Path;

use super::Presenter;

pub const PLAYER: &str = "paplay";
pub const PRESENTER: &str = "notify-send";

pub fn presenters() -> Vec<Presenter> {
    vec![Presenter::new(PRESENTER, presenter_args)]
}

/// `notify-send [-i ICON] TITLE MESSAGE`
pub fn presenter_args(title: &str, message: &str, icon: Option<&Path>) -> Vec<String> {
    let mut args = Vec::new();
    if let Some(icon) = icon {
        args.push("-i".to_string());
        args.push(icon.display().to_string());
    }
    args.push(title.to_string());
    args.push(message.to_string());
    args
}
