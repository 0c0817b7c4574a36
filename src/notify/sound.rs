//! Sound resolution
//!
//! A requested sound is either one of the symbolic names (`start`,
//! `complete`, `frog`) or a literal filesystem path. Resolution happens on
//! every request; nothing is cached.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::{FileConfig, Settings, ENV_COMPLETE_SOUND, ENV_START_SOUND};
use crate::paths;

pub const DEFAULT_START_SOUND: &str = "Ping.aiff";
pub const DEFAULT_COMPLETE_SOUND: &str = "Glass.aiff";
pub const FROG_SOUND: &str = "Frog.aiff";

/// Reserved sound names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolicSound {
    Start,
    Complete,
    Frog,
}

impl SymbolicSound {
    pub const ALL: [SymbolicSound; 3] = [Self::Start, Self::Complete, Self::Frog];

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "start" => Some(Self::Start),
            "complete" => Some(Self::Complete),
            "frog" => Some(Self::Frog),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Complete => "complete",
            Self::Frog => "frog",
        }
    }

    /// Environment variable that overrides this sound. `frog` is fixed.
    pub fn env_var(self) -> Option<&'static str> {
        match self {
            Self::Start => Some(ENV_START_SOUND),
            Self::Complete => Some(ENV_COMPLETE_SOUND),
            Self::Frog => None,
        }
    }

    pub fn default_path(self) -> PathBuf {
        match self {
            Self::Start => paths::system_sound(DEFAULT_START_SOUND),
            Self::Complete => paths::system_sound(DEFAULT_COMPLETE_SOUND),
            Self::Frog => paths::system_sound(FROG_SOUND),
        }
    }

    fn configured(self, config: &FileConfig) -> Option<&str> {
        match self {
            Self::Start => config.sounds.start.as_deref(),
            Self::Complete => config.sounds.complete.as_deref(),
            Self::Frog => None,
        }
    }

    /// Environment variable, then config file, then the built-in default.
    /// An empty environment value still counts as set.
    pub fn resolve(self, settings: &Settings) -> PathBuf {
        let Some(env_var) = self.env_var() else {
            return self.default_path();
        };

        if let Some(path) = settings.env_var(env_var) {
            return PathBuf::from(path);
        }

        match self.configured(&settings.file_config()) {
            Some(path) => PathBuf::from(shellexpand::tilde(path).as_ref()),
            None => self.default_path(),
        }
    }
}

/// Map a requested sound to the file to play. `None` means no sound.
pub fn resolve_sound(sound: Option<&str>, settings: &Settings) -> Option<PathBuf> {
    let sound = sound?;
    match SymbolicSound::parse(sound) {
        Some(symbolic) => Some(symbolic.resolve(settings)),
        None => Some(PathBuf::from(sound)),
    }
}

/// Whether a resolved sound should be handed to the player
pub fn is_playable(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.exists()
}

/// `.aiff` files in `dir`, sorted. An unreadable directory lists nothing.
pub fn list_sounds(dir: &Path) -> Vec<String> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("cannot list sounds in {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut sounds: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().map(|e| e == "aiff").unwrap_or(false))
        .filter_map(|path| path.file_name().and_then(|n| n.to_str()).map(String::from))
        .collect();
    sounds.sort();
    sounds
}
