use anyhow::Result;
use colored::*;
use serde::Serialize;

use claude_notify::notify::sound::is_playable;
use claude_notify::notify::SymbolicSound;
use claude_notify::{CommandPlatform, Settings};

#[derive(Serialize)]
struct HealthCheck {
    status: String, // "healthy", "warning", "critical"
    player: ProgramStatus,
    presenters: Vec<ProgramStatus>,
    sounds: Vec<SoundStatus>,
    visual_notifications: bool,
    icon: Option<String>,
    config_file: Option<String>,
}

#[derive(Serialize)]
struct ProgramStatus {
    name: String,
    path: Option<String>,
}

#[derive(Serialize)]
struct SoundStatus {
    name: String,
    path: String,
    exists: bool,
}

fn program_status(name: &str) -> ProgramStatus {
    ProgramStatus {
        name: name.to_string(),
        path: which::which(name).ok().map(|p| p.display().to_string()),
    }
}

/// Returns the process exit code: 0 healthy, 1 warnings, 2 critical
pub fn execute(json_output: bool) -> Result<i32> {
    let settings = Settings::from_process_env();
    let platform = CommandPlatform::native();

    let player = program_status(platform.player());
    let presenters: Vec<ProgramStatus> = platform.presenters().map(program_status).collect();
    let sounds: Vec<SoundStatus> = SymbolicSound::ALL
        .iter()
        .map(|sound| {
            let path = sound.resolve(&settings);
            SoundStatus {
                name: sound.name().to_string(),
                exists: is_playable(&path),
                path: path.display().to_string(),
            }
        })
        .collect();

    let status = overall_status(
        player.path.is_some(),
        presenters.iter().any(|p| p.path.is_some()),
        sounds.iter().all(|s| s.exists),
    );

    let check = HealthCheck {
        status: status.to_string(),
        player,
        presenters,
        sounds,
        visual_notifications: settings.visual_notifications_enabled(),
        icon: settings
            .notification_icon()
            .map(|p| p.display().to_string()),
        config_file: settings
            .config_file()
            .filter(|p| p.exists())
            .map(|p| p.display().to_string()),
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&check)?);
    } else {
        print_human(&check);
    }

    Ok(exit_code(status))
}

fn overall_status(player_found: bool, presenter_found: bool, sounds_ok: bool) -> &'static str {
    // No presenter means nothing visible ever happens
    if !presenter_found {
        "critical"
    } else if !player_found || !sounds_ok {
        "warning"
    } else {
        "healthy"
    }
}

fn exit_code(status: &str) -> i32 {
    match status {
        "healthy" => 0,
        "warning" => 1,
        _ => 2,
    }
}

fn mark(ok: bool) -> ColoredString {
    if ok {
        "✓".green().bold()
    } else {
        "✗".red().bold()
    }
}

fn print_human(check: &HealthCheck) {
    println!("🏥 Checking notification setup...\n");

    for program in std::iter::once(&check.player).chain(&check.presenters) {
        match &program.path {
            Some(path) => println!("   {} {} ({})", mark(true), program.name, path),
            None => println!("   {} {} not found on PATH", mark(false), program.name),
        }
    }

    println!("\n{}", "Sounds".bold());
    for sound in &check.sounds {
        println!("   {} {:<9} {}", mark(sound.exists), sound.name, sound.path);
    }

    println!(
        "\nVisual notifications: {}",
        if check.visual_notifications {
            "enabled".green()
        } else {
            "disabled".yellow()
        }
    );
    if let Some(path) = &check.icon {
        println!("Notification icon: {}", path);
    }
    if let Some(path) = &check.config_file {
        println!("Config file: {}", path);
    }

    let summary = match check.status.as_str() {
        "healthy" => "✅ All good".green().bold(),
        "warning" => "⚠️  Notifications work, some sounds will be skipped".yellow().bold(),
        _ => "❌ No notification presenter available".red().bold(),
    };
    println!("\n{}", summary);
}
