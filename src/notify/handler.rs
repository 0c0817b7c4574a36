//! The `send_notification` tool

use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::{debug, info};

use super::sound::{is_playable, resolve_sound};
use crate::config::Settings;
use crate::mcp::Tool;
use crate::platform::PlatformServices;

pub const TOOL_NAME: &str = "send_notification";
pub const DEFAULT_TITLE: &str = "Claude Notification";

/// Arguments of a `send_notification` call, defaults applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub title: String,
    pub message: String,
    pub sound: Option<String>,
}

impl NotificationRequest {
    pub fn new(title: Option<String>, message: impl Into<String>, sound: Option<String>) -> Self {
        Self {
            title: title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            message: message.into(),
            sound,
        }
    }

    /// Lenient extraction: missing or null fields take their defaults,
    /// non-string title/message are rendered as JSON text, a non-string
    /// sound means no sound.
    pub fn from_arguments(arguments: &Map<String, Value>) -> Self {
        Self {
            title: text_field(arguments, "title").unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            message: text_field(arguments, "message").unwrap_or_default(),
            sound: arguments
                .get("sound")
                .and_then(Value::as_str)
                .map(String::from),
        }
    }
}

fn text_field(arguments: &Map<String, Value>, key: &str) -> Option<String> {
    match arguments.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// What the caller gets back. Always a success: delivery is best effort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationOutcome {
    pub success: bool,
    pub message: String,
}

impl NotificationOutcome {
    fn sent(title: &str) -> Self {
        Self {
            success: true,
            message: format!("Notification sent: {}", title),
        }
    }
}

pub struct NotificationHandler {
    settings: Settings,
    platform: Box<dyn PlatformServices>,
}

impl NotificationHandler {
    pub fn new(settings: Settings, platform: Box<dyn PlatformServices>) -> Self {
        Self { settings, platform }
    }

    /// Play the sound (if any, and if the file exists), then show the
    /// notification with the configured icon. Neither result affects the
    /// outcome.
    pub fn send(&self, request: &NotificationRequest) -> NotificationOutcome {
        if let Some(path) = resolve_sound(request.sound.as_deref(), &self.settings) {
            if is_playable(&path) {
                let played = self.platform.play(&path);
                debug!("sound {} played: {}", path.display(), played);
            } else {
                debug!("skipping sound {}: not found", path.display());
            }
        }

        if self.settings.visual_notifications_enabled() {
            let icon = self.settings.notification_icon();
            let shown = self
                .platform
                .notify(&request.title, &request.message, icon.as_deref());
            debug!("notification shown: {}", shown);
        } else {
            debug!("visual notifications disabled");
        }

        info!("notification sent: {}", request.title);
        NotificationOutcome::sent(&request.title)
    }
}

impl Tool for NotificationHandler {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        "Send a notification with optional sound"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "title": { "type": "string" },
                "message": { "type": "string" },
                "sound": {
                    "type": "string",
                    "enum": ["start", "complete", "frog", "none"]
                }
            },
            "required": ["message"]
        })
    }

    fn call(&self, arguments: &Map<String, Value>) -> Value {
        let outcome = self.send(&NotificationRequest::from_arguments(arguments));
        json!(outcome)
    }
}
