//! Catalog configuration.
//!
//! Tunables for the query pipeline, renderer and controller. Every field has
//! a default, so an empty or missing TOML file yields a usable config.

use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use std::fs;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Delay between the last keystroke and committing search text
    pub debounce_ms: u64,
    /// Recipes strictly faster than this count as "quick"
    pub quick_threshold_minutes: u32,
    /// Key under which favorite ids are persisted
    pub storage_key: String,
    /// Deepest step nesting the renderer will descend into
    pub max_step_depth: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            debounce_ms: 300,
            quick_threshold_minutes: 30,
            storage_key: "recipe-favorites".to_string(),
            max_step_depth: 32,
        }
    }
}

impl CatalogConfig {
    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` on malformed TOML or mistyped fields.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads a config file, falling back to defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read or parsed.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(%path, "config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
