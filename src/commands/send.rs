use anyhow::Result;

use claude_notify::{CommandPlatform, NotificationHandler, NotificationRequest, Settings};

pub fn execute(message: String, title: Option<String>, sound: Option<String>) -> Result<()> {
    let handler = NotificationHandler::new(
        Settings::from_process_env(),
        Box::new(CommandPlatform::native()),
    );

    let outcome = handler.send(&NotificationRequest::new(title, message, sound));
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
