//! Game configuration loaded from TOML.
//!
//! ```toml
//! grid_size = 4
//!
//! [[players]]
//! name = "Red"
//! color = [255, 0, 0]
//!
//! [[players]]
//! name = "Blue"
//! color = [0, 0, 255]
//! ```

use crate::player::{Color, Player};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Setup for a new game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cells per side.
    #[serde(default = "default_grid_size")]
    grid_size: usize,

    /// Players in turn order.
    #[serde(default = "default_players")]
    players: Vec<Player>,
}

#[instrument]
fn default_grid_size() -> usize {
    10
}

#[instrument]
fn default_players() -> Vec<Player> {
    vec![Player::new("Red", Color::RED), Player::new("Blue", Color::BLUE)]
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: default_grid_size(),
            players: default_players(),
        }
    }
}

impl GameConfig {
    /// Creates a configuration.
    #[instrument(skip(players), fields(players = players.len()))]
    pub fn new(grid_size: usize, players: Vec<Player>) -> Self {
        Self { grid_size, players }
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the text is not valid configuration.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(
            grid_size = config.grid_size,
            players = config.players.len(),
            "Config parsed"
        );
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(grid_size = config.grid_size, "Config loaded successfully");
        Ok(config)
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if serialization fails.
    #[instrument(skip(self))]
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
