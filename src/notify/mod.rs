//! Notifications: sound resolution and the `send_notification` tool.

mod handler;
pub mod sound;

pub use handler::{
    NotificationHandler, NotificationOutcome, NotificationRequest, DEFAULT_TITLE, TOOL_NAME,
};
pub use sound::{resolve_sound, SymbolicSound};
