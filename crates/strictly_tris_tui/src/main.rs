//! Strictly Tris - unified CLI

use anyhow::Result;
use clap::Parser;
use strictly_tris_tui::{Cli, Command, TrisConfig, replay, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TrisConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Tui { player1, player2 } => run_tui(&config.with_names(player1, player2)),
        Command::Replay {
            player1,
            player2,
            moves,
        } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
                )
                .with_writer(std::io::stderr)
                .init();

            let status = replay(&mut std::io::stdout().lock(), &player1, &player2, &moves)?;
            info!(?status, "Done");
            Ok(())
        }
    }
}
