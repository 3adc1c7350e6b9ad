//! Configuration loading for postbar
//!
//! Reads `config.json` from the XDG config directory (`~/.config/postbar/`
//! on Linux). The config carries the postal code to query and the color used
//! for each urgency bucket. It is loaded once at startup and passed by
//! reference into everything that needs it.

use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::dates::Classification;

/// Errors that can occur when loading the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file does not exist
    #[error("Config file not found at {0}")]
    Missing(PathBuf),

    /// The config file exists but is not valid JSON for the expected schema
    #[error("Config file is invalid: {0}")]
    Invalid(#[from] serde_json::Error),

    /// The config file could not be read
    #[error("Config file could not be read: {0}")]
    Unreadable(#[from] std::io::Error),

    /// No home directory, so the config/cache location cannot be resolved
    #[error("Could not determine config directory")]
    NoProjectDirs,
}

/// Display colors keyed by urgency bucket.
///
/// All three keys are required, so a missing color surfaces as an invalid
/// config at startup rather than a lookup failure at render time.
#[derive(Debug, Clone, Deserialize)]
pub struct Colors {
    pub today: String,
    pub tomorrow: String,
    pub someday: String,
}

/// Process configuration, loaded once at startup
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Postal code interpolated into the provider URL
    pub postal_code: String,
    /// Color value per classification (e.g. "#00ff00")
    pub colors: Colors,
}

impl Config {
    /// Default config path: `config.json` in the XDG config directory.
    ///
    /// Returns `None` if the config directory cannot be determined
    /// (e.g., no home directory).
    pub fn default_path() -> Option<PathBuf> {
        let project_dirs = ProjectDirs::from("", "", "postbar")?;
        Some(project_dirs.config_dir().join("config.json"))
    }

    /// Loads the config from the given path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::Missing(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// The configured color for a classification.
    pub fn color_for(&self, classification: Classification) -> &str {
        match classification {
            Classification::Today => &self.colors.today,
            Classification::Tomorrow => &self.colors.tomorrow,
            Classification::Someday => &self.colors.someday,
        }
    }
}
