mod commands;
mod config;
mod transport;

use clap::{Parser, Subcommand};
use config::CliConfig;
use luckybot_core::Storage;
use luckybot_draw::{DrawError, LuckyBot};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use transport::ConsoleTransport;

#[derive(Parser)]
#[command(name = "luckybot")]
#[command(about = "Daily chat lottery, played from the terminal")]
#[command(version)]
struct Cli {
    /// Data directory for the results database
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Bot configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Skip the pauses between messages
    #[arg(long, global = true)]
    fast: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a chat command to the bot
    #[command(subcommand)]
    Chat(commands::ChatCommands),

    /// Inspect and export stored results
    #[command(subcommand)]
    Results(commands::ResultsCommands),

    /// List the chat commands the bot understands
    Menu,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "luckybot={},luckybot_core={},luckybot_draw={}",
            log_level, log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = CliConfig::load(cli.data_dir, cli.config.as_deref(), cli.verbose)?;
    if cli.fast {
        config = config.without_pacing();
    }

    if let Commands::Menu = cli.command {
        commands::print_menu();
        return Ok(());
    }

    tokio::fs::create_dir_all(&config.data_dir).await?;
    let storage = Arc::new(Storage::new(&config.database_path()).await?);

    let result = match cli.command {
        Commands::Chat(cmd) => {
            let bot = LuckyBot::new(storage, ConsoleTransport::new(), config.bot.clone())?;
            commands::handle_chat_command(cmd, &bot).await
        }
        Commands::Results(cmd) => {
            commands::handle_results_command(cmd, &storage, &config.bot).await
        }
        Commands::Menu => Ok(()),
    };

    if let Err(e) = result {
        match e {
            DrawError::NoParticipants => {
                eprintln!("Error: No participants in this chat");
                eprintln!("Use 'luckybot chat register --name <NAME>' to join");
            }
            e if e.is_internal() => {
                eprintln!("Error: {}", e);
                eprintln!("This is a bug, please report it with the --verbose log");
            }
            _ => {
                eprintln!("Error: {}", e);
            }
        }
        std::process::exit(1);
    }

    Ok(())
}
