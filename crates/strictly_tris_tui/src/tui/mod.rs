//! Terminal UI for Strictly Tris.

mod app;
mod input;
mod ui;

pub use app::{App, Screen};
pub use input::{Field, NameForm};

use crate::config::TrisConfig;
use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;
use tracing::{error, info, instrument};

/// Runs the terminal UI until the user quits.
pub fn run_tui(config: &TrisConfig) -> Result<()> {
    // Log to a file so output does not interfere with the TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting Strictly Tris TUI");

    let mut app = App::new(config.player1().clone(), config.player2().clone());
    let mut terminal = ratatui::init();
    let res = run_app(&mut terminal, &mut app);
    ratatui::restore();

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    info!("TUI closed");
    res
}

#[instrument(skip_all)]
fn run_app(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    while !*app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key)?;
        }
    }
    Ok(())
}
