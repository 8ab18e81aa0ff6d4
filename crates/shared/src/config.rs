//! Configuration management for the recommender.
//!
//! This module handles loading and parsing configuration from TOML files,
//! with sensible defaults for all settings. The program runs without any
//! config file at all; a file only needs to exist to override defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Recommender settings
    #[serde(default)]
    pub recommender: RecommenderConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log directory path (only used when file output is enabled)
    pub log_dir: String,

    /// Default log level (trace, debug, info, warn, error)
    pub default_level: String,

    /// Enable console output
    pub console: bool,

    /// Enable file output
    pub file: bool,

    /// Enable JSON formatting for file logs
    pub json_format: bool,
}

/// Recommender configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommenderConfig {
    /// Jikan API base URL
    pub base_url: String,

    /// How many top-ranked anime to fetch at startup
    pub fetch_limit: usize,

    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,

    /// Open cover images in the platform image viewer
    pub show_images: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: "logs".to_string(),
            default_level: "info".to_string(),
            console: true,
            file: false,
            json_format: false,
        }
    }
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.jikan.moe/v4".to_string(),
            fetch_limit: 100,
            request_timeout_secs: 30,
            show_images: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            recommender: RecommenderConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// If the file doesn't exist, returns the default configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(
                path = %path.display(),
                "Config file not found, using defaults"
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Get the path for the log directory
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.logging.log_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.recommender.base_url, "https://api.jikan.moe/v4");
        assert_eq!(config.recommender.fetch_limit, 100);
        assert!(config.recommender.show_images);
        assert!(config.logging.console);
        assert!(!config.logging.file);
    }

    #[test]
    fn test_save_and_load_config() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let mut original_config = Config::default();
        original_config.recommender.fetch_limit = 50;
        original_config.save(&config_path)?;

        assert!(config_path.exists());

        let loaded_config = Config::from_file(&config_path)?;
        assert_eq!(loaded_config.recommender.fetch_limit, 50);
        assert_eq!(
            loaded_config.recommender.base_url,
            original_config.recommender.base_url
        );

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_config() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        // Should return default config without error
        assert_eq!(config.recommender.fetch_limit, 100);
    }

    #[test]
    fn test_partial_config_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[recommender]\nbase_url = \"http://localhost:8080/v4\"\nfetch_limit = 10\nrequest_timeout_secs = 5\nshow_images = false\n")?;

        let config = Config::from_file(&config_path)?;
        assert_eq!(config.recommender.base_url, "http://localhost:8080/v4");
        assert_eq!(config.recommender.fetch_limit, 10);
        // Logging section omitted entirely, defaults apply
        assert_eq!(config.logging.default_level, "info");

        Ok(())
    }
}
