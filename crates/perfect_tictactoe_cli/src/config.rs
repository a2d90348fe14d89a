//! Engine configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use perfect_tictactoe::SearchConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Configuration for a play session.
///
/// ```toml
/// computer_delay_ms = 180
/// human_first = true
///
/// [search]
/// alpha_beta = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Search tuning for the computer player.
    #[serde(default)]
    search: SearchConfig,

    /// Pause before the computer replies, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// Whether the human (X) makes the first move.
    #[serde(default = "default_human_first")]
    human_first: bool,
}

fn default_computer_delay_ms() -> u64 {
    180
}

fn default_human_first() -> bool {
    true
}

impl EngineConfig {
    /// Creates a configuration from explicit values.
    pub fn new(search: SearchConfig, computer_delay_ms: u64, human_first: bool) -> Self {
        Self {
            search,
            computer_delay_ms,
            human_first,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            alpha_beta = config.search.alpha_beta(),
            computer_delay_ms = config.computer_delay_ms,
            human_first = config.human_first,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Pause before the computer replies.
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }

    /// Returns this configuration with the opening side overridden.
    pub fn with_human_first(self, human_first: bool) -> Self {
        Self {
            human_first,
            ..self
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(
            SearchConfig::default(),
            default_computer_delay_ms(),
            default_human_first(),
        )
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
