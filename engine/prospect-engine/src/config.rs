//! # Configuration Management
//!
//! Where the dataset lives and how the board presents it.

use crate::error::{EngineError, Result};
use crate::PLACEHOLDER_PHOTO_URL;
use prospect_data::NCAA_LEAGUE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration for the draft board
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Dataset location
    pub data: DataConfig,
    /// Presentation defaults
    pub display: DisplayConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Path to the dataset JSON document
    pub path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self { path: PathBuf::from("data/draft_board_2025.json") }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// League whose season log is shown on a prospect's profile
    pub stats_league: String,
    /// Image used when a prospect has no photo
    pub placeholder_photo_url: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            stats_league: NCAA_LEAGUE.to_string(),
            placeholder_photo_url: PLACEHOLDER_PHOTO_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log level when RUST_LOG is not set
    pub log_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { log_level: "info".to_string() }
    }
}

impl BoardConfig {
    /// Load configuration from environment variables over the defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("DRAFT_BOARD_DATA_PATH") {
            config.data.path = PathBuf::from(path);
        }

        if let Ok(league) = std::env::var("DRAFT_BOARD_STATS_LEAGUE") {
            config.display.stats_league = league;
        }

        if let Ok(level) = std::env::var("DRAFT_BOARD_LOG_LEVEL") {
            config.logging.log_level = level;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: BoardConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.data.path.as_os_str().is_empty() {
            return Err(EngineError::config("data.path must not be empty"));
        }
        if self.display.stats_league.trim().is_empty() {
            return Err(EngineError::config("display.stats_league must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.data.path, PathBuf::from("data/draft_board_2025.json"));
        assert_eq!(config.display.stats_league, "NCAA");
        assert_eq!(config.display.placeholder_photo_url, PLACEHOLDER_PHOTO_URL);
        assert_eq!(config.logging.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_file_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("board.toml");

        let mut config = BoardConfig::default();
        config.data.path = PathBuf::from("/srv/draft/2025.json");
        config.display.stats_league = "EuroCup".to_string();
        config.to_file(&path).unwrap();

        assert_eq!(BoardConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("board.toml");
        std::fs::write(&path, "[logging]\nlog_level = \"debug\"\n").unwrap();

        let config = BoardConfig::from_file(&path).unwrap();
        assert_eq!(config.logging.log_level, "debug");
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("board.toml");
        std::fs::write(&path, "[display]\nstats_league = \"  \"\n").unwrap();

        assert!(matches!(BoardConfig::from_file(&path), Err(EngineError::Config(_))));

        std::fs::write(&path, "[display\n").unwrap();
        assert!(matches!(BoardConfig::from_file(&path), Err(EngineError::ConfigParse(_))));
    }
}
