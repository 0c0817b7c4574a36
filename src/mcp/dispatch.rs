//! Request dispatch: `tools/call` routed by tool name

use anyhow::Result;
use serde_json::{Map, Value};
use tracing::debug;

use super::protocol::{
    object_or_absent, Capabilities, Manifest, Request, Response, ToolDescriptor,
    PROTOCOL_VERSION, TOOLS_CALL,
};
use crate::config::Settings;
use crate::notify::NotificationHandler;
use crate::platform::PlatformServices;

/// A capability callable through `tools/call`.
///
/// Calls cannot fail: a tool reports problems inside its result, never as a
/// protocol error.
pub trait Tool {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn input_schema(&self) -> Value;
    fn call(&self, arguments: &Map<String, Value>) -> Value;
}

/// Tool registry, in registration order
#[derive(Default)]
pub struct Dispatcher {
    tools: Vec<Box<dyn Tool>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with `send_notification`
    pub fn with_defaults(settings: Settings, platform: Box<dyn PlatformServices>) -> Self {
        let mut dispatcher = Self::new();
        dispatcher.register(Box::new(NotificationHandler::new(settings, platform)));
        dispatcher
    }

    /// Add a tool, replacing any tool with the same name
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        match self.tools.iter_mut().find(|t| t.name() == tool.name()) {
            Some(slot) => *slot = tool,
            None => self.tools.push(tool),
        }
    }

    pub fn tool(&self, name: &str) -> Option<&dyn Tool> {
        self.tools
            .iter()
            .find(|t| t.name() == name)
            .map(|t| &**t)
    }

    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    pub fn manifest(&self) -> Manifest {
        let tools = self
            .tools
            .iter()
            .map(|t| {
                (
                    t.name().to_string(),
                    ToolDescriptor {
                        description: t.description().to_string(),
                        input_schema: t.input_schema(),
                    },
                )
            })
            .collect();

        Manifest {
            protocol_version: PROTOCOL_VERSION,
            capabilities: Capabilities { tools },
        }
    }

    /// Route one decoded request. `Err` means the request itself was
    /// malformed; the caller turns it into an internal error response.
    pub fn dispatch(&self, value: &Value) -> Result<Response> {
        let request = Request::parse(value)?;
        let id = Some(request.id.cloned().unwrap_or(Value::Null));

        if request.method != Some(TOOLS_CALL) {
            debug!("unknown method {:?}", request.method);
            return Ok(Response::method_not_found(id));
        }

        let params = request.params()?;
        let name = params
            .and_then(|p| p.get("name"))
            .and_then(Value::as_str);
        let Some(tool) = name.and_then(|n| self.tool(n)) else {
            debug!("unknown tool {:?}", name);
            return Ok(Response::method_not_found(id));
        };

        let empty = Map::new();
        let arguments =
            object_or_absent(params.and_then(|p| p.get("arguments")), "arguments")?
                .unwrap_or(&empty);

        debug!("calling {}", tool.name());
        Ok(Response::success(id, tool.call(arguments)))
    }
}
