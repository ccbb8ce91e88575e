//! Configuration module for fpick
//!
//! Manages application configuration. Configuration is stored in the
//! user's config directory and created with defaults on first run.

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const fn default_page_size() -> usize {
    10
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FpickConfig {
    /// Items per page until the terminal height takes over
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Open committed selections with the system default application
    #[serde(default)]
    pub open_on_select: bool,

    /// Directory basenames to skip, on top of the built-in ignore-list
    #[serde(default)]
    pub extra_ignores: Vec<String>,
}

impl Default for FpickConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            open_on_select: false,
            extra_ignores: Vec::new(),
        }
    }
}

impl FpickConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be
    /// determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("fpick").join("config.toml"))
    }

    /// Load configuration from file, creating the default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or
    /// created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be
    /// written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FpickConfig::default();
        assert_eq!(config.page_size, 10);
        assert!(!config.open_on_select);
        assert!(config.extra_ignores.is_empty());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = FpickConfig {
            page_size: 25,
            open_on_select: true,
            extra_ignores: vec!["generated".to_string()],
        };

        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: FpickConfig = toml::from_str(&serialized).unwrap();

        assert_eq!(parsed.page_size, 25);
        assert!(parsed.open_on_select);
        assert_eq!(parsed.extra_ignores, vec!["generated".to_string()]);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let parsed: FpickConfig = toml::from_str("").unwrap();
        assert_eq!(parsed.page_size, 10);
        assert!(!parsed.open_on_select);

        let parsed: FpickConfig = toml::from_str("page_size = 5").unwrap();
        assert_eq!(parsed.page_size, 5);
        assert!(parsed.extra_ignores.is_empty());
    }
}
