//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// File that receives logs while the terminal UI owns the screen.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Show square numbers 1-9 on empty cells.
    #[serde(default = "default_show_hints")]
    show_hints: bool,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_show_hints() -> bool {
    true
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            show_hints: default_show_hints(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(show_hints = config.show_hints, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
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
