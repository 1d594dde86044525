//! Command-line interface for strictly_tris.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Tris - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_tris")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./strictly_tris.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a match in the terminal UI
    Tui {
        /// Pre-filled name for player 1 (X)
        #[arg(long)]
        player1: Option<String>,

        /// Pre-filled name for player 2 (O)
        #[arg(long)]
        player2: Option<String>,
    },

    /// Play a fixed list of moves without a UI and print every announcement
    Replay {
        /// Name for player 1 (X)
        #[arg(long, default_value = "")]
        player1: String,

        /// Name for player 2 (O)
        #[arg(long, default_value = "")]
        player2: String,

        /// Cell indices (0-8, row-major) in the order they are played
        #[arg(required = true)]
        moves: Vec<usize>,
    },
}
