//! Wordle Client - CLI
//!
//! Plays against a Wordle backend in a full-screen TUI or a simple line mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_client::{
    api::HttpGameClient,
    commands::{fetch_leaderboard, run_simple, show_game},
    config::{ClientConfig, DEFAULT_LOG_FILE, DEFAULT_PLAYER, DEFAULT_SERVER},
    core::GameId,
    interactive::{App, run_tui},
    output::{print_leaderboard, print_session},
    session::GameController,
};

#[derive(Parser)]
#[command(
    name = "wordle_client",
    about = "Terminal client for a Wordle game server",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the game server
    #[arg(long, global = true, env = "WORDLE_SERVER", default_value = DEFAULT_SERVER)]
    server: String,

    /// Player name sent when starting a game
    #[arg(short, long, global = true, env = "WORDLE_PLAYER", default_value = DEFAULT_PLAYER)]
    player: String,

    /// Log file used by the full-screen mode
    #[arg(long, global = true, env = "WORDLE_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    log_file: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line by line, no TUI)
    Simple,

    /// Print the board of an existing game
    Show {
        /// Game id as issued by the server
        id: String,
    },

    /// Print the leaderboard
    Leaderboard,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play);

    // Logs go to a file while the TUI owns the screen
    match command {
        Commands::Play => init_file_logging(Path::new(&cli.log_file))?,
        _ => init_stderr_logging(),
    }

    let config = ClientConfig::new(&cli.server, &cli.player)?;
    info!(server = config.server(), player = config.player(), "Starting client");
    let client = HttpGameClient::new(config.server());

    match command {
        Commands::Play => {
            let app = App::new(GameController::new(client, config.player()));
            run_tui(app)
        }
        Commands::Simple => {
            let mut controller = GameController::new(client, config.player());
            run_simple(&mut controller, &mut io::stdin().lock())
        }
        Commands::Show { id } => {
            let session = show_game(&client, &GameId::new(id))?;
            print_session(&session);
            Ok(())
        }
        Commands::Leaderboard => {
            let entries = fetch_leaderboard(&client)?;
            print_leaderboard(&entries);
            Ok(())
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .try_init();
}
