//! Game configuration loaded from TOML.

use crate::ConfigError;
use derive_getters::Getters;
use hotseat_tictactoe::PlayerSlot;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "hotseat.toml";

/// Starting player names.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayersConfig {
    /// Name for Player 1 (X).
    #[serde(default = "default_player_one")]
    one: String,

    /// Name for Player 2 (O).
    #[serde(default = "default_player_two")]
    two: String,
}

fn default_player_one() -> String {
    PlayerSlot::One.default_name()
}

fn default_player_two() -> String {
    PlayerSlot::Two.default_name()
}

impl Default for PlayersConfig {
    fn default() -> Self {
        Self {
            one: default_player_one(),
            two: default_player_two(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// File the terminal UI writes its log to.
    #[serde(default = "default_log_file")]
    file: PathBuf,

    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    filter: String,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("hotseat.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            filter: default_log_filter(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Player names.
    #[serde(default)]
    players: PlayersConfig,

    /// Logging.
    #[serde(default)]
    logging: LoggingConfig,
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config = Self::from_toml(&content)?;
        info!(player_one = %config.players.one, player_two = %config.players.two, "Config loaded");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces player names with any values given on the command line.
    pub fn with_overrides(mut self, one: Option<String>, two: Option<String>) -> Self {
        if let Some(name) = one {
            self.players.one = name;
        }
        if let Some(name) = two {
            self.players.two = name;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.players().one(), "Player 1");
        assert_eq!(config.players().two(), "Player 2");
        assert_eq!(config.logging().filter(), "info");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = GameConfig::from_toml("[players]\none = \"Alice\"\n").unwrap();
        assert_eq!(config.players().one(), "Alice");
        assert_eq!(config.players().two(), "Player 2");
        assert_eq!(config.logging().file(), &PathBuf::from("hotseat.log"));
    }

    #[test]
    fn test_invalid_toml() {
        let err = GameConfig::from_toml("[players\n").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_overrides() {
        let config = GameConfig::default().with_overrides(None, Some("Bob".to_string()));
        assert_eq!(config.players().one(), "Player 1");
        assert_eq!(config.players().two(), "Bob");
    }
}
