//! Address book data directory
//!
//! Handles initialization and provides access to the store and config.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use thiserror::Error;

use super::config::CONFIG_FILE;
use super::{Config, ContactStore};

#[derive(Debug, Error)]
pub enum BookError {
    #[error("No address book at {0}. Run 'addressbook init' first.")]
    NotInitialized(PathBuf),

    #[error("Could not determine a data directory; pass --data-dir")]
    NoDataDir,
}

const DEFAULT_CONFIG: &str = r#"# Address book configuration

[wizard]
# What to do with a phone/email/address entry that has no value:
# "accept_as_public" stores the line as it was typed, "reprompt" asks again
malformed_detail = "accept_as_public"

# Echo each entered line back
echo_input = true

[display]
# Show private details in listings by default
show_private = false
"#;

/// An address book rooted at a data directory
pub struct AddressBook {
    root: PathBuf,
    config: Config,
}

impl AddressBook {
    /// Returns the platform data directory used when none is given
    pub fn default_dir() -> Result<PathBuf> {
        ProjectDirs::from("dev", "addressbook", "addressbook-cli")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| BookError::NoDataDir.into())
    }

    /// Opens an existing address book
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        if !root.join(CONFIG_FILE).is_file() {
            return Err(BookError::NotInitialized(root).into());
        }

        let config = Config::load(&root)?;

        Ok(Self { root, config })
    }

    /// Initializes an address book, keeping any existing config and contacts
    pub fn init(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create data directory: {}", root.display()))?;

        let config_path = root.join(CONFIG_FILE);
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG)
                .with_context(|| format!("Failed to write config: {}", config_path.display()))?;
        }

        Self::open(root)
    }

    /// Returns the data directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the contact store
    pub fn contacts(&self) -> ContactStore {
        ContactStore::in_dir(&self.root)
    }
}
