//! Driver configuration loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use minimax_tictactoe::Player;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for the interactive driver.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Mark the human plays. X moves first.
    #[serde(default = "default_human")]
    human: Player,

    /// Show move scores before each human turn.
    #[serde(default)]
    hints: bool,
}

fn default_human() -> Player {
    Player::X
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            human: default_human(),
            hints: false,
        }
    }
}

impl DriverConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(human = %config.human, hints = config.hints, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, falling back to defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of the file settings.
    ///
    /// `hints` can only turn hints on, never off.
    pub fn with_overrides(mut self, computer: Option<Player>, hints: bool) -> Self {
        if let Some(computer) = computer {
            self.human = computer.opponent();
        }
        self.hints |= hints;
        self
    }

    /// Mark the computer plays.
    pub fn computer(&self) -> Player {
        self.human.opponent()
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
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
