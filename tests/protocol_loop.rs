//! End-to-end: manifest, send_notification, errors, end of input

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use claude_notify::config::{ENV_COMPLETE_SOUND, ENV_START_SOUND};
use claude_notify::{run_loop, Dispatcher, EnvSource, PlatformServices, Settings};
use serde_json::{json, Value};
use tempfile::TempDir;

#[derive(Default)]
struct Recorder {
    played: RefCell<Vec<PathBuf>>,
    shown: RefCell<Vec<(String, String)>>,
}

impl PlatformServices for Recorder {
    fn play(&self, path: &Path) -> bool {
        self.played.borrow_mut().push(path.to_path_buf());
        false
    }

    fn notify(&self, title: &str, message: &str, _icon: Option<&Path>) -> bool {
        self.shown
            .borrow_mut()
            .push((title.to_string(), message.to_string()));
        false
    }
}

struct Harness {
    env: Rc<RefCell<HashMap<String, String>>>,
    platform: Rc<Recorder>,
    dispatcher: Dispatcher,
}

impl Harness {
    fn new() -> Self {
        let env = Rc::new(RefCell::new(HashMap::new()));
        let platform = Rc::new(Recorder::default());
        let settings = Settings::new(Box::new(env.clone()) as Box<dyn EnvSource>, None);
        let dispatcher = Dispatcher::with_defaults(settings, Box::new(platform.clone()));
        Self {
            env,
            platform,
            dispatcher,
        }
    }

    fn set_env(&self, key: &str, value: &str) {
        self.env
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// Raw output lines, manifest included
    fn run(&self, input: &str) -> Vec<String> {
        let mut output = Vec::new();
        run_loop(Cursor::new(input), &mut output, &self.dispatcher).unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(String::from)
            .collect()
    }

    fn run_json(&self, input: &str) -> Vec<Value> {
        self.run(input)
            .iter()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }
}

fn notify_request(id: Value, arguments: Value) -> String {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": { "name": "send_notification", "arguments": arguments }
    })
    .to_string()
}

#[test]
fn test_manifest_is_first_line() {
    let harness = Harness::new();
    let lines = harness.run_json("");
    assert_eq!(lines.len(), 1);

    let manifest = &lines[0];
    assert_eq!(manifest["protocolVersion"], json!("2024-11-01"));
    assert_eq!(
        manifest["capabilities"]["tools"]["send_notification"],
        json!({
            "description": "Send a notification with optional sound",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "title": { "type": "string" },
                    "message": { "type": "string" },
                    "sound": { "type": "string", "enum": ["start", "complete", "frog", "none"] }
                },
                "required": ["message"]
            }
        })
    );

    let raw = harness.run("").remove(0);
    assert!(
        raw.contains(r#""inputSchema":{"type":"object","properties":{"title":"#),
        "schema keys reordered: {}",
        raw
    );
}

#[test]
fn test_build_finished_scenario() {
    let harness = Harness::new();
    let input = r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"send_notification","arguments":{"title":"Done","message":"Build finished","sound":"complete"}}}"#;
    let lines = harness.run(&format!("{}\n", input));

    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[1],
        r#"{"jsonrpc":"2.0","id":1,"result":{"success":true,"message":"Notification sent: Done"}}"#
    );
    let response: Value = serde_json::from_str(&lines[1]).unwrap();
    assert_eq!(
        response,
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": { "success": true, "message": "Notification sent: Done" }
        })
    );
    assert_eq!(
        *harness.platform.shown.borrow(),
        vec![("Done".to_string(), "Build finished".to_string())]
    );
}

#[test]
fn test_id_is_echoed_unchanged() {
    let harness = Harness::new();
    let ids = [json!(1), json!("req-7"), json!({ "nested": [1, 2] }), json!(null)];
    let input: String = ids
        .iter()
        .map(|id| notify_request(id.clone(), json!({ "message": "x" })) + "\n")
        .collect();

    let lines = harness.run_json(&input);
    for (id, response) in ids.iter().zip(&lines[1..]) {
        assert_eq!(&response["id"], id);
        assert_eq!(
            response["result"]["message"],
            json!("Notification sent: Claude Notification")
        );
    }
}

#[test]
fn test_repeated_request_gives_identical_responses() {
    let harness = Harness::new();
    let request = notify_request(json!(42), json!({ "title": "Again", "message": "m" }));
    let lines = harness.run(&format!("{}\n{}\n", request, request));
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], lines[2]);
    assert_eq!(harness.platform.shown.borrow().len(), 2);
}

#[test]
fn test_unknown_method_and_tool() {
    let harness = Harness::new();
    let input = concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"send_email","arguments":{}}}"#,
        "\n",
    );
    let lines = harness.run_json(input);

    for (i, response) in lines[1..].iter().enumerate() {
        assert_eq!(
            *response,
            json!({
                "jsonrpc": "2.0",
                "id": i + 1,
                "error": { "code": -32601, "message": "Method not found" }
            })
        );
    }
    assert!(harness.platform.shown.borrow().is_empty());
}

#[test]
fn test_parse_failure_then_recovery() {
    let harness = Harness::new();
    let input = format!(
        "{{\"id\": 1, \"method\": \n{}\n",
        notify_request(json!(2), json!({ "message": "after" }))
    );
    let lines = harness.run_json(&input);

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1]["jsonrpc"], json!("2.0"));
    assert_eq!(lines[1]["error"]["code"], json!(-32603));
    assert!(lines[1].get("id").is_none());
    assert!(lines[1].get("result").is_none());
    assert_eq!(lines[2]["id"], json!(2));
    assert_eq!(lines[2]["result"]["success"], json!(true));
}

#[test]
fn test_bad_arguments_shape_is_internal_error() {
    let harness = Harness::new();
    let request = notify_request(json!(3), json!(["message"]));
    let lines = harness.run_json(&format!("{}\n", request));
    assert_eq!(lines[1]["error"]["code"], json!(-32603));
    assert!(lines[1].get("id").is_none());
}

#[test]
fn test_sound_played_only_when_file_exists() {
    let dir = TempDir::new().unwrap();
    let start = dir.path().join("start.aiff");
    std::fs::write(&start, b"FORM").unwrap();

    let harness = Harness::new();
    harness.set_env(ENV_START_SOUND, start.to_str().unwrap());
    harness.set_env(ENV_COMPLETE_SOUND, dir.path().join("missing.aiff").to_str().unwrap());

    let input = [
        notify_request(json!(1), json!({ "message": "a", "sound": "start" })),
        notify_request(json!(2), json!({ "message": "b", "sound": "complete" })),
        notify_request(json!(3), json!({ "message": "c", "sound": "none" })),
        notify_request(json!(4), json!({ "message": "d" })),
    ]
    .join("\n");
    let lines = harness.run_json(&input);

    assert_eq!(lines.len(), 5);
    assert!(lines[1..].iter().all(|r| r["result"]["success"] == json!(true)));
    assert_eq!(*harness.platform.played.borrow(), vec![start]);
    assert_eq!(harness.platform.shown.borrow().len(), 4);
}

#[test]
fn test_env_changes_apply_to_next_request() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.aiff");
    let second = dir.path().join("second.aiff");
    std::fs::write(&first, b"FORM").unwrap();
    std::fs::write(&second, b"FORM").unwrap();

    let harness = Harness::new();
    let request = notify_request(json!(1), json!({ "message": "m", "sound": "start" })) + "\n";

    harness.set_env(ENV_START_SOUND, first.to_str().unwrap());
    harness.run(&request);
    harness.set_env(ENV_START_SOUND, second.to_str().unwrap());
    harness.run(&request);

    assert_eq!(*harness.platform.played.borrow(), vec![first, second]);
}
