//! Configuration management
//!
//! Settings are read from `~/.config/pycomply/config.toml` (XDG standard)
//! or from an explicit `--config` path. Every field is optional; missing
//! values fall back to the built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::Standards;
use crate::paths;

/// Errors loading an explicitly requested config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File is not valid TOML for this schema
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Parser error
        #[source]
        source: toml::de::Error,
    },
}

/// pycomply configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Hosting service settings
    #[serde(default)]
    pub remote: RemoteConfig,
    /// Values the checks compare against
    #[serde(default)]
    pub standards: Standards,
    /// Execution settings
    #[serde(default)]
    pub run: RunConfig,
}

/// Hosting service settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Host recognized in repository URLs
    pub host: String,
    /// REST API root
    pub api_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            host: "github.com".to_string(),
            api_url: "https://api.github.com".to_string(),
            timeout_secs: 10,
        }
    }
}

impl RemoteConfig {
    /// Per-request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Execution settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Run checks on a thread pool
    pub parallel: bool,
}

impl Config {
    /// Get the default config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Parse config from TOML text
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load an explicitly requested config file; it must exist and parse
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content, path)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the default config file, or defaults if it is missing
    ///
    /// An unreadable or malformed default file is logged and ignored.
    #[must_use]
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }
        Self::load_from(&path).unwrap_or_else(|e| {
            log::warn!("{e}; using defaults");
            Self::default()
        })
    }
}
