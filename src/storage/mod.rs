//! # Storage Layer
//!
//! Persistence for the address book with plain-text file formats.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Contacts | JSONL (one JSON per line, list order) | `<data-dir>/contacts.jsonl` |
//! | Config | TOML | `<data-dir>/config.toml` |
//!
//! ## Concurrency Safety
//!
//! - [`ContactStore`] uses file locking (`fs2`) for concurrent access
//! - Full rewrites are atomic (temp file + rename)
//!
//! ## Key Types
//!
//! - [`AddressBook`] - Entry point for a data directory
//! - [`ContactStore`] - Read/write contacts as JSONL
//! - [`Config`] - Wizard and display configuration

mod jsonl;
mod config;
mod book;

pub use jsonl::{ContactStore, CONTACTS_FILE};
pub use config::{Config, ConfigError, DisplayConfig, WizardConfig, CONFIG_FILE};
pub use book::{AddressBook, BookError};
