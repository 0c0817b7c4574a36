//! MCP server - stdio transport

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

use super::dispatch::Dispatcher;
use super::protocol::Response;

/// Run the server over stdin/stdout until stdin closes
pub fn run_stdio_server(dispatcher: &Dispatcher) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    info!("claude-notify: MCP server ready ({})", dispatcher.tool_names().join(", "));
    run_loop(stdin.lock(), stdout.lock(), dispatcher)
}

/// Manifest first, then one response line per request line.
///
/// Returns `Ok` when input reaches end-of-stream. Only a failed read or
/// write ends the loop early.
pub fn run_loop<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    dispatcher: &Dispatcher,
) -> Result<()> {
    write_line(&mut writer, &dispatcher.manifest())?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .context("Failed to read request")?;
        if read == 0 {
            debug!("input closed, shutting down");
            break;
        }

        let response = handle_line(&buf, dispatcher);
        write_line(&mut writer, &response)?;
    }

    Ok(())
}

/// Decode and dispatch one line. Never fails: anything that goes wrong
/// becomes an internal error response.
pub fn handle_line(line: &[u8], dispatcher: &Dispatcher) -> Response {
    match decode(line).and_then(|request| dispatcher.dispatch(&request)) {
        Ok(response) => response,
        Err(e) => {
            warn!("bad request: {}", e);
            Response::internal_error(&e.to_string())
        }
    }
}

fn decode(line: &[u8]) -> Result<Value> {
    let text = std::str::from_utf8(line)?;
    debug!("received: {}", text.trim_end());
    Ok(serde_json::from_str(text.trim())?)
}

fn write_line<W: Write, T: Serialize>(writer: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *writer, value).context("Failed to encode response")?;
    writer.write_all(b"\n").context("Failed to write response")?;
    writer.flush().context("Failed to flush response")?;
    Ok(())
}
