//! Single source of truth for claude-notify filesystem layout.
//!
//! This module defines WHERE things live. It has no I/O, no validation,
//! no business logic.
//!
//! ```text
//! ~/.claude-notify/
//! └── config.toml              # Optional sound defaults
//!
//! /Applications/Claude.app/Contents/Resources/AppIcon.icns
//!                              # Default notification icon
//!
//! /System/Library/Sounds/      # macOS system sounds
//! ├── Frog.aiff
//! ├── Glass.aiff
//! └── Ping.aiff
//! ```

use std::path::{Path, PathBuf};

// =============================================================================
// User Level (~/.claude-notify/)
// =============================================================================

/// User's home for claude-notify: `~/.claude-notify/`
pub fn notify_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".claude-notify")
}

/// Optional config file: `~/.claude-notify/config.toml`
pub fn config_path() -> PathBuf {
    notify_home().join("config.toml")
}

// =============================================================================
// System Sounds
// =============================================================================

/// macOS system sounds directory
pub const SYSTEM_SOUNDS_DIR: &str = "/System/Library/Sounds";

pub fn system_sounds_dir() -> &'static Path {
    Path::new(SYSTEM_SOUNDS_DIR)
}

/// Full path of a named system sound, e.g. `system_sound("Ping.aiff")`
pub fn system_sound(file_name: &str) -> PathBuf {
    system_sounds_dir().join(file_name)
}

// =============================================================================
// Icons
// =============================================================================

/// Used as the notification icon when nothing else is configured
pub const CLAUDE_APP_ICON: &str = "/Applications/Claude.app/Contents/Resources/AppIcon.icns";

pub fn claude_app_icon() -> PathBuf {
    PathBuf::from(CLAUDE_APP_ICON)
}
