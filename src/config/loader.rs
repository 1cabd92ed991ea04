use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Largest accepted card tile width or height, in cells.
pub const MAX_CARD_CELLS: u16 = 200;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/pack-opener/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("pack-opener").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The service URL is http(s)
    /// - The reveal step delay is non-zero
    /// - At least one pack type is listed and the default is one of them
    /// - The UI tick is non-zero and card tiles fit a terminal
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = &self.service.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!("Service URL '{}' must start with http:// or https://", base_url),
            });
        }

        if self.reveal.step_delay_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "Reveal step delay must be greater than zero".to_string(),
            });
        }

        if self.packs.available.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "At least one pack type must be configured".to_string(),
            });
        }

        if !self.packs.available.contains(&self.packs.default) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Default pack '{}' not found in available packs",
                    self.packs.default
                ),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "UI tick rate must be greater than zero".to_string(),
            });
        }

        for (name, value) in [
            ("card_width", self.ui.card_width),
            ("card_height", self.ui.card_height),
        ] {
            if value == 0 || value > MAX_CARD_CELLS {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "UI {} must be between 1 and {}, got {}",
                        name, MAX_CARD_CELLS, value
                    ),
                });
            }
        }

        Ok(())
    }
}
