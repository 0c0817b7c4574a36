//! OS side effects: playing a sound and showing a notification.
//!
//! Both are external commands run synchronously. Results are reported as a
//! bool for logging; callers are free to ignore them.
//!
//! Backends:
//! - macOS: `afplay`, then `osascript` with `terminal-notifier` as fallback
//! - Linux: `paplay` + `notify-send`

pub mod linux;
pub mod macos;

use std::path::Path;
use std::process::Command;
use std::rc::Rc;
use tracing::{debug, warn};

/// Platform capability used by the notification handler
pub trait PlatformServices {
    /// Play the sound file at `path`. Blocks until the player exits.
    fn play(&self, path: &Path) -> bool;

    /// Show a desktop notification, with `icon` where the presenter
    /// supports one. Blocks until the presenter exits.
    fn notify(&self, title: &str, message: &str, icon: Option<&Path>) -> bool;
}

impl<T: PlatformServices + ?Sized> PlatformServices for Rc<T> {
    fn play(&self, path: &Path) -> bool {
        (**self).play(path)
    }

    fn notify(&self, title: &str, message: &str, icon: Option<&Path>) -> bool {
        (**self).notify(title, message, icon)
    }
}

/// Builds a presenter's argument list from title, message and icon
pub type PresenterArgs = fn(&str, &str, Option<&Path>) -> Vec<String>;

/// One program able to show a notification
#[derive(Clone)]
pub struct Presenter {
    program: String,
    args: PresenterArgs,
}

impl Presenter {
    pub fn new(program: impl Into<String>, args: PresenterArgs) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn show(&self, title: &str, message: &str, icon: Option<&Path>) -> bool {
        debug!("notifying '{}' with {}", title, self.program);
        let mut cmd = Command::new(&self.program);
        cmd.args((self.args)(title, message, icon));
        run_command(cmd, &self.program)
    }
}

/// Runs a player and an ordered list of presenters by name
#[derive(Clone)]
pub struct CommandPlatform {
    player: String,
    presenters: Vec<Presenter>,
}

impl CommandPlatform {
    pub fn new(player: impl Into<String>, presenters: Vec<Presenter>) -> Self {
        Self {
            player: player.into(),
            presenters,
        }
    }

    pub fn macos() -> Self {
        Self::new(macos::PLAYER, macos::presenters())
    }

    pub fn linux() -> Self {
        Self::new(linux::PLAYER, linux::presenters())
    }

    /// Backend for the OS we were built for
    pub fn native() -> Self {
        if cfg!(target_os = "linux") {
            Self::linux()
        } else {
            Self::macos()
        }
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    /// Presenter programs in the order they are tried
    pub fn presenters(&self) -> impl Iterator<Item = &str> {
        self.presenters.iter().map(Presenter::program)
    }
}

impl PlatformServices for CommandPlatform {
    fn play(&self, path: &Path) -> bool {
        debug!("playing {} with {}", path.display(), self.player);
        let mut cmd = Command::new(&self.player);
        cmd.arg(path);
        run_command(cmd, &self.player)
    }

    /// Stops at the first presenter that succeeds
    fn notify(&self, title: &str, message: &str, icon: Option<&Path>) -> bool {
        self.presenters
            .iter()
            .any(|presenter| presenter.show(title, message, icon))
    }
}

/// Run to completion with stdin closed and output captured. The child must
/// never touch our stdin/stdout, they carry the protocol.
fn run_command(mut cmd: Command, program: &str) -> bool {
    match cmd.output() {
        Ok(output) if output.status.success() => true,
        Ok(output) => {
            warn!(
                "{} exited with {}: {}",
                program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            false
        }
        Err(e) => {
            warn!("failed to run {}: {}", program, e);
            false
        }
    }
}
