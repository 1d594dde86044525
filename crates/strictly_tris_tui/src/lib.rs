//! Terminal front end for the strictly_tris match engine.
//!
//! # Architecture
//!
//! - **Cli**: `clap` definitions for the `strictly_tris` binary
//! - **Config**: optional TOML file with logging and name defaults
//! - **Tui**: ratatui front end fed by the engine's event channel
//! - **Replay**: headless play-through of a move list

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod replay;
mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, TrisConfig};

// Crate-level exports - Front ends
pub use replay::replay;
pub use tui::{App, Field, NameForm, Screen, run_tui};
