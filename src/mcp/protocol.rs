//! JSON-RPC 2.0 protocol types

use anyhow::{bail, Result};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

pub const PROTOCOL_VERSION: &str = "2024-11-01";
pub const TOOLS_CALL: &str = "tools/call";

pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INTERNAL_ERROR: i32 = -32603;

/// Borrowed view of a decoded request line.
///
/// Only the top level must be an object. `params` is checked when it is
/// actually needed, so a bad `params` on an unknown method is still
/// "method not found".
#[derive(Debug)]
pub struct Request<'a> {
    pub id: Option<&'a Value>,
    pub method: Option<&'a str>,
    params: Option<&'a Value>,
}

impl<'a> Request<'a> {
    pub fn parse(value: &'a Value) -> Result<Self> {
        let Some(object) = value.as_object() else {
            bail!("request must be a JSON object, got {}", json_kind(value));
        };

        Ok(Self {
            id: object.get("id"),
            method: object.get("method").and_then(Value::as_str),
            params: object.get("params"),
        })
    }

    pub fn params(&self) -> Result<Option<&'a Map<String, Value>>> {
        object_or_absent(self.params, "params")
    }
}

/// `None` for absent or null, the map for an object, an error otherwise
pub fn object_or_absent<'a>(
    value: Option<&'a Value>,
    field: &str,
) -> Result<Option<&'a Map<String, Value>>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(other) => bail!("'{}' must be an object, got {}", field, json_kind(other)),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(Debug, Serialize)]
pub struct Response {
    pub jsonrpc: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Error>,
}

#[derive(Debug, Serialize)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Response {
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Option<Value>, code: i32, message: &str) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(Error {
                code,
                message: message.to_string(),
            }),
        }
    }

    pub fn method_not_found(id: Option<Value>) -> Self {
        Self::error(id, METHOD_NOT_FOUND, "Method not found")
    }

    /// Unparsable or malformed input. Carries no `id`.
    pub fn internal_error(message: &str) -> Self {
        Self::error(None, INTERNAL_ERROR, message)
    }
}

/// Emitted once at startup, before any request is read
#[derive(Debug, Serialize)]
pub struct Manifest {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: &'static str,
    pub capabilities: Capabilities,
}

#[derive(Debug, Serialize)]
pub struct Capabilities {
    /// Serialized as an object keyed by tool name, in registration order
    #[serde(serialize_with = "ordered_map")]
    pub tools: Vec<(String, ToolDescriptor)>,
}

fn ordered_map<S: Serializer>(
    entries: &[(String, ToolDescriptor)],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_map(entries.iter().map(|(name, tool)| (name, tool)))
}

#[derive(Debug, Serialize)]
pub struct ToolDescriptor {
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}
