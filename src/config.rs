//! Configuration module for tabnav
//!
//! Holds the navigation defaults a frontend usually wants tunable:
//! wraparound for relative motions, ambiguity tolerance for filter
//! switches, and the refresh debounce window. Configuration is stored in
//! the user's config directory.

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

const fn default_wrap() -> bool {
    true
}

const fn default_debounce_ms() -> u64 {
    100
}

/// Navigation configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NavConfig {
    /// Whether relative motions wrap around the ends of the list
    #[serde(default = "default_wrap")]
    pub wrap: bool,

    /// Default ambiguity tolerance for filter switches
    ///
    /// With tolerance, a filter matching several tabs selects the first;
    /// without, it is reported as ambiguous.
    #[serde(default)]
    pub tolerant: bool,

    /// Trailing debounce window for ordinal refreshes, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub refresh_debounce_ms: u64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            wrap: default_wrap(),
            tolerant: false,
            refresh_debounce_ms: default_debounce_ms(),
        }
    }
}

impl NavConfig {
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

        Ok(config_dir.join("tabnav").join("config.toml"))
    }

    /// Load configuration from a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &std::path::Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from the user config file, creating the default
    /// if it doesn't exist
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

        Self::load_from(&config_path)
    }

    /// Load configuration, falling back to defaults on any failure
    #[must_use]
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created,
    /// the configuration cannot be serialized to TOML, or the file cannot
    /// be written.
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

    /// Refresh debounce window as a `Duration`
    #[must_use]
    pub const fn refresh_window(&self) -> Duration {
        Duration::from_millis(self.refresh_debounce_ms)
    }
}
