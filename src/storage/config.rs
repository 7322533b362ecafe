//! Configuration handling for the address book
//!
//! Configuration is stored in `config.toml` inside the data directory.
//! A missing file means defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::MalformedDetailPolicy;

/// File name of the configuration inside the data directory
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Settings for the contact entry wizard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// What to do with a phone/email/address entry that has no value
    pub malformed_detail: MalformedDetailPolicy,

    /// Echo each entered line back to the user
    pub echo_input: bool,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            malformed_detail: MalformedDetailPolicy::AcceptAsPublic,
            echo_input: true,
        }
    }
}

/// Settings for contact listings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show private details in listings without `--show-private`
    pub show_private: bool,
}

/// Address book configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Wizard settings
    pub wizard: WizardConfig,

    /// Listing settings
    pub display: DisplayConfig,
}

impl Config {
    /// Loads configuration from a data directory
    pub fn load(data_dir: &Path) -> Result<Self> {
        let config_path = data_dir.join(CONFIG_FILE);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

        Self::parse(&content).context("Failed to parse config")
    }

    /// Parses configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Saves the configuration into a data directory
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let config_path = data_dir.join(CONFIG_FILE);

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config: {}", config_path.display()))
    }
}
