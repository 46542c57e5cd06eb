//! Configuration module for alma
//!
//! Manages application settings: where favorites are stored, which phrase
//! dataset to use, feedback timing and the share command.
//! Configuration is stored in the user's config directory and can be
//! overridden with `ALMA_*` environment variables.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const APP_DIR: &str = "alma-lux";

const fn default_feedback_ttl_ms() -> u64 {
    3000
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AlmaConfig {
    /// Directory of the favorites database (defaults to the data directory)
    #[serde(default)]
    pub database: Option<PathBuf>,

    /// Phrase dataset replacing the built-in one
    #[serde(default)]
    pub phrases_file: Option<PathBuf>,

    /// How long feedback messages stay visible
    #[serde(default = "default_feedback_ttl_ms")]
    pub feedback_ttl_ms: u64,

    /// Shell command acting as the native share target
    #[serde(default)]
    pub share_command: Option<String>,

    /// URL attached to share requests
    #[serde(default)]
    pub share_url: Option<String>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Default for AlmaConfig {
    fn default() -> Self {
        Self {
            database: None,
            phrases_file: None,
            feedback_ttl_ms: default_feedback_ttl_ms(),
            share_command: None,
            share_url: None,
            quiet: false,
            log_level: None,
        }
    }
}

impl AlmaConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_DIR).join("config.toml"))
    }

    /// Load configuration from the default location, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            tracing::info!(path = %path.display(), "Created default configuration");
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .add_source(Environment::with_prefix("ALMA").try_parsing(true))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be determined or
    /// the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Favorites database directory, configured or under the data directory
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no path is configured and the system data
    /// directory cannot be determined.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.database {
            return Ok(path.clone());
        }
        let data_dir = dirs::data_local_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine data directory".to_string()))?;
        Ok(data_dir.join(APP_DIR).join("favorites"))
    }

    #[must_use]
    pub const fn feedback_ttl(&self) -> Duration {
        Duration::from_millis(self.feedback_ttl_ms)
    }

    /// Read a setting by key, `None` for unset optional settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for an unknown key.
    pub fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        let display = |p: &Option<PathBuf>| p.as_ref().map(|p| p.display().to_string());
        match key {
            "database" => Ok(display(&self.database)),
            "phrases_file" => Ok(display(&self.phrases_file)),
            "feedback_ttl_ms" => Ok(Some(self.feedback_ttl_ms.to_string())),
            "share_command" => Ok(self.share_command.clone()),
            "share_url" => Ok(self.share_url.clone()),
            "quiet" => Ok(Some(self.quiet.to_string())),
            "log_level" => Ok(self.log_level.clone()),
            _ => Err(ConfigError::NotFound(key.to_string())),
        }
    }

    /// Update a setting by key; an empty value clears optional settings
    ///
    /// Does not save.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for an unknown key or `ConfigError::Message`
    /// for a value that does not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let optional = |v: &str| (!v.is_empty()).then(|| v.to_string());
        match key {
            "database" => self.database = optional(value).map(PathBuf::from),
            "phrases_file" => self.phrases_file = optional(value).map(PathBuf::from),
            "feedback_ttl_ms" => {
                self.feedback_ttl_ms = value.parse().map_err(|e| {
                    ConfigError::Message(format!("Invalid feedback_ttl_ms '{value}': {e}"))
                })?;
            }
            "share_command" => self.share_command = optional(value),
            "share_url" => self.share_url = optional(value),
            "quiet" => {
                self.quiet = value
                    .parse()
                    .map_err(|e| ConfigError::Message(format!("Invalid quiet '{value}': {e}")))?;
            }
            "log_level" => self.log_level = optional(value),
            _ => return Err(ConfigError::NotFound(key.to_string())),
        }
        Ok(())
    }
}
