//! Configuration for claude-notify
//!
//! Two layers, both read fresh on every call so edits take effect on the
//! next request without restarting the server:
//!
//! 1. Environment variables (highest priority), read through [`EnvSource`]
//! 2. Optional `~/.claude-notify/config.toml`
//!
//! Built-in defaults live with the code that uses them (see `notify::sound`).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::warn;

use crate::paths;

/// Overrides the sound played for `"start"`
pub const ENV_START_SOUND: &str = "CLAUDE_START_SOUND";
/// Overrides the sound played for `"complete"`
pub const ENV_COMPLETE_SOUND: &str = "CLAUDE_COMPLETE_SOUND";
/// Set to anything but true/1/yes/y/on to suppress the visual notification
pub const ENV_VISUAL_NOTIFICATIONS: &str = "CLAUDE_VISUAL_NOTIFICATIONS";
/// Image shown with the notification by presenters that support one
pub const ENV_NOTIFICATION_ICON: &str = "CLAUDE_NOTIFICATION_ICON";

// =============================================================================
// Environment capability
// =============================================================================

/// Read-only view of environment variables.
///
/// Production code uses [`ProcessEnv`]; tests hand in a map.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for RefCell<HashMap<String, String>> {
    fn var(&self, key: &str) -> Option<String> {
        self.borrow().get(key).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for Rc<T> {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

// =============================================================================
// Config file - ~/.claude-notify/config.toml
// =============================================================================

/// Contents of the optional config file. Every section defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub sounds: SoundsSection,
    #[serde(default)]
    pub notifications: NotificationsSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SoundsSection {
    /// Sound for `"start"`, `~` is expanded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// Sound for `"complete"`, `~` is expanded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complete: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationsSection {
    /// Show the visual notification (sounds still play when false)
    #[serde(default = "default_visual")]
    pub visual: bool,
    /// Notification icon, `~` is expanded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

fn default_visual() -> bool {
    true
}

impl Default for NotificationsSection {
    fn default() -> Self {
        Self {
            visual: default_visual(),
            icon: None,
        }
    }
}

impl FileConfig {
    /// Load from disk. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
    }
}

// =============================================================================
// Settings - what the handler actually consults
// =============================================================================

/// Live configuration. Nothing is cached: every accessor goes back to the
/// environment and the config file.
pub struct Settings {
    env: Box<dyn EnvSource>,
    config_file: Option<PathBuf>,
}

impl Settings {
    pub fn new(env: Box<dyn EnvSource>, config_file: Option<PathBuf>) -> Self {
        Self { env, config_file }
    }

    /// Process environment plus `~/.claude-notify/config.toml`
    pub fn from_process_env() -> Self {
        Self::new(Box::new(ProcessEnv), Some(paths::config_path()))
    }

    pub fn env_var(&self, key: &str) -> Option<String> {
        self.env.var(key)
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Current config file contents. A broken file is reported and ignored
    /// so a typo never takes notifications down.
    pub fn file_config(&self) -> FileConfig {
        let Some(path) = self.config_file.as_deref() else {
            return FileConfig::default();
        };

        match FileConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("ignoring config file: {:#}", e);
                FileConfig::default()
            }
        }
    }

    pub fn visual_notifications_enabled(&self) -> bool {
        match self.env_var(ENV_VISUAL_NOTIFICATIONS) {
            Some(value) => is_truthy(&value),
            None => self.file_config().notifications.visual,
        }
    }

    /// First existing candidate of: env var, config file entry, the
    /// Claude app icon. `None` when none of them is on disk.
    pub fn notification_icon(&self) -> Option<PathBuf> {
        let configured = match self.env_var(ENV_NOTIFICATION_ICON) {
            Some(value) => Some(PathBuf::from(value)),
            None => self
                .file_config()
                .notifications
                .icon
                .map(|icon| PathBuf::from(shellexpand::tilde(&icon).into_owned())),
        };

        configured
            .into_iter()
            .chain(std::iter::once(paths::claude_app_icon()))
            .find(|path| path.is_file())
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "1" | "yes" | "y" | "on"
    )
}
