//! Noughts - tic-tac-toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use noughts_tui::{Cli, Command, Settings, init_tracing, replay, run_tui};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let settings = Settings::load(&cli.config)
        .with_context(|| format!("Loading {}", cli.config.display()))?
        .with_overrides(cli.ai_delay_ms, cli.seed, cli.ai_label.clone());
    init_tracing(settings.log_file())?;
    info!(config = %cli.config.display(), "Settings ready");

    match cli.command() {
        Command::Play => run_tui(&settings).await,
        Command::Replay {
            mode,
            moves,
            player_one,
            player_two,
        } => {
            let view = replay(mode, &moves, &player_one, &player_two, settings.ai_label())?;
            println!("{}", serde_json::to_string_pretty(&view)?);
            Ok(())
        }
    }
}
