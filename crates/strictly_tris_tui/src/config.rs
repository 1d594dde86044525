//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "strictly_tris.toml";

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TrisConfig {
    /// File the TUI writes its logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Pre-filled name for player 1.
    #[serde(default)]
    player1: Option<String>,

    /// Pre-filled name for player 2.
    #[serde(default)]
    player2: Option<String>,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_tris.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TrisConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            player1: None,
            player2: None,
        }
    }
}

impl TrisConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(log_file = %config.log_file.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists,
    /// else the built-in defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replaces the pre-filled names with any command-line overrides.
    pub fn with_names(mut self, player1: Option<String>, player2: Option<String>) -> Self {
        if player1.is_some() {
            self.player1 = player1;
        }
        if player2.is_some() {
            self.player2 = player2;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "player1 = \"Alice\"").unwrap();

        let config = TrisConfig::from_file(file.path()).unwrap();
        assert_eq!(config.player1().as_deref(), Some("Alice"));
        assert_eq!(config.player2(), &None);
        assert_eq!(config.log_filter(), "info");
        assert_eq!(config.log_file(), &PathBuf::from("strictly_tris.log"));
    }

    #[test]
    fn test_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "log_file = \"/tmp/tris.log\"\nlog_filter = \"debug\"\nplayer1 = \"Alice\"\nplayer2 = \"Bob\""
        )
        .unwrap();

        let config = TrisConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_file(), &PathBuf::from("/tmp/tris.log"));
        assert_eq!(config.log_filter(), "debug");
        assert_eq!(config.player2().as_deref(), Some("Bob"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TrisConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "player1 = ").unwrap();
        let err = TrisConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_command_line_names_override() {
        let config = TrisConfig::default().with_names(Some("Carol".to_string()), None);
        assert_eq!(config.player1().as_deref(), Some("Carol"));
        assert_eq!(config.player2(), &None);
    }
}
