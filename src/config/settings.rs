//! Configuration settings for the affinity graph builder.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub graph: GraphConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            graph: GraphConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::ReadFile)?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default locations or use defaults.
    pub fn load() -> Result<Self> {
        // Try standard config locations
        let config_paths = [
            // Current directory
            PathBuf::from("config.toml"),
            PathBuf::from("affinity.toml"),
            // User config directory
            dirs::config_dir()
                .map(|p| p.join("affinity/config.toml"))
                .unwrap_or_default(),
        ];

        for path in &config_paths {
            if path.exists() {
                tracing::info!("Loading config from: {}", path.display());
                return Self::from_file(path);
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Config::default())
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.graph.max_distance == 0 {
            return Err(ConfigError::Invalid("graph.max_distance must be > 0".to_string()).into());
        }
        Ok(())
    }
}

/// Graph construction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Size of the sliding window when comparing word positions.
    ///
    /// The scale runs from 1 (adjacent words) through ~20 (sentence
    /// level) up to an arbitrarily large value (whole-document scope).
    pub max_distance: u32,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self { max_distance: 30 }
    }
}
