use anyhow::Result;
use colored::*;
use serde_json::json;

use claude_notify::notify::sound::list_sounds;
use claude_notify::paths;

pub fn execute(json: bool) -> Result<()> {
    let dir = paths::system_sounds_dir();
    let sounds = list_sounds(dir);

    if json {
        let output = json!({
            "directory": dir.display().to_string(),
            "sounds": sounds,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if sounds.is_empty() {
        println!(
            "{}",
            format!("No sounds found in {}", dir.display()).bright_yellow()
        );
        return Ok(());
    }

    println!("{}", format!("🔊 Sounds in {}", dir.display()).bold());
    for sound in &sounds {
        println!("   {}", sound);
    }
    Ok(())
}
