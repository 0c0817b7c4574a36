pub mod config;
pub mod logging;
pub mod mcp;
pub mod notify;
pub mod paths;
pub mod platform;

// Re-export commonly used types
pub use config::{EnvSource, ProcessEnv, Settings};
pub use mcp::{run_loop, run_stdio_server, Dispatcher, Tool};
pub use notify::{NotificationHandler, NotificationOutcome, NotificationRequest};
pub use platform::{CommandPlatform, PlatformServices};
