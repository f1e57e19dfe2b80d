//! # Configuration Management
//!
//! This module handles loading and saving CLI configuration — currently
//! the API base URL. Authentication state lives in the session store
//! (see [`crate::session`]), not here.
//!
//! ## Configuration File Location
//!
//! All platforms: `$HOME/.config/famtrack/config.json`
//!
//! On Windows, uses `%USERPROFILE%\.config\famtrack\config.json` if
//! `$HOME` is not set.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default API base URL
const DEFAULT_BASE_URL: &str = "https://app.famtrack.dev";

/// Environment variable for overriding the base URL
const BASE_URL_ENV_VAR: &str = "FAMTRACK_BASE_URL";

/// CLI configuration
///
/// Stores the server base URL. The stored value is a default; the
/// `FAMTRACK_BASE_URL` environment variable always takes precedence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL for the API (stored in config file)
    #[serde(default = "stored_default_base_url")]
    stored_base_url: String,
}

/// Default base URL for storage (without env var override)
fn stored_default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stored_base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Create a new configuration with a custom base URL
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL for the API (stored in config file)
    pub fn with_url(base_url: String) -> Self {
        Self {
            stored_base_url: base_url,
        }
    }

    /// Get the effective base URL
    ///
    /// Environment variable `FAMTRACK_BASE_URL` takes precedence over the
    /// config file.
    pub fn base_url(&self) -> String {
        std::env::var(BASE_URL_ENV_VAR).unwrap_or_else(|_| self.stored_base_url.clone())
    }

    /// Load configuration from the default config file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(_)` - Configuration file not found or invalid
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when no file exists
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Save configuration to the default config file
    ///
    /// Creates the config directory if it doesn't exist.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Successfully saved configuration
    /// * `Err(_)` - Failed to create directory or write file
    pub fn save(&self) -> Result<()> {
        let path = config_path()?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Check if a configuration file exists
    pub fn exists() -> bool {
        config_path().map(|p| p.exists()).unwrap_or(false)
    }
}

/// Get the default base URL
///
/// Checks the `FAMTRACK_BASE_URL` environment variable first,
/// then falls back to the default production URL.
pub fn default_base_url() -> String {
    std::env::var(BASE_URL_ENV_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

/// Get the path to the configuration file
fn config_path() -> Result<PathBuf> {
    Ok(famtrack_dir()?.join("config.json"))
}

/// Get the Famtrack directory under the user's config directory
///
/// Also hosts the persisted session entries (see [`crate::session`]).
pub fn famtrack_dir() -> Result<PathBuf> {
    let config_dir = dirs_config_dir().context("Could not determine config directory")?;
    Ok(config_dir.join("famtrack"))
}

/// Get the config directory
///
/// Uses `$HOME/.config` on all platforms for consistency.
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .or_else(|| std::env::var("USERPROFILE").ok())
                .map(|h| PathBuf::from(h).join(".config"))
        })
}
