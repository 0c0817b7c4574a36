use anyhow::Result;
use clap::{Parser, Subcommand};

use claude_notify::{logging, CommandPlatform, Dispatcher, Settings};

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Desktop notifications for AI coding assistants", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve line-delimited JSON-RPC over stdin/stdout (default)
    Serve,

    /// Send one notification from the shell
    Send {
        /// Notification text
        message: String,

        /// Notification title
        #[arg(short, long)]
        title: Option<String>,

        /// start, complete, frog, or a path to a sound file
        #[arg(short, long)]
        sound: Option<String>,
    },

    /// List system sounds
    Sounds {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Check sound player, notification presenter and sound configuration
    Doctor {
        /// Output results as JSON
        #[arg(short, long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Serve);

    // The host reads our stderr; keep the server quiet unless asked
    logging::init(match command {
        Commands::Serve => "warn",
        _ => "info",
    });

    match command {
        Commands::Serve => {
            let dispatcher = Dispatcher::with_defaults(
                Settings::from_process_env(),
                Box::new(CommandPlatform::native()),
            );
            claude_notify::run_stdio_server(&dispatcher)?;
        }
        Commands::Send {
            message,
            title,
            sound,
        } => {
            commands::send::execute(message, title, sound)?;
        }
        Commands::Sounds { json } => {
            commands::sounds::execute(json)?;
        }
        Commands::Doctor { json } => {
            let code = commands::doctor::execute(json)?;
            if code != 0 {
                std::process::exit(code);
            }
        }
    }

    Ok(())
}
