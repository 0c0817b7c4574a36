//! MCP (Model Context Protocol) server
//!
//! Line-delimited JSON-RPC 2.0 over stdio. No external SDK - blocking I/O,
//! one request at a time.

mod dispatch;
pub mod protocol;
mod server;

pub use dispatch::{Dispatcher, Tool};
pub use server::{handle_line, run_loop, run_stdio_server};
