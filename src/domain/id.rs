//! Contact identifiers
//!
//! ID Format: `c-{7-char-hash}` (e.g., `c-7f2b4c1`)
//!
//! Hash is derived from the contact name + creation timestamp, so two
//! contacts with the same name saved at different times get different IDs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Invalid contact ID format: expected 'c-{{7-char-hash}}', got '{0}'")]
    InvalidContactId(String),
}

/// Generates a 7-character hash from name and timestamp
fn generate_hash(name: &str, timestamp: DateTime<Utc>) -> String {
    let input = format!("{}{}", name, timestamp.timestamp_nanos_opt().unwrap_or(0));
    let hash = blake3::hash(input.as_bytes());
    let hex = hash.to_hex();
    hex[..7].to_string()
}

/// Contact ID in the format `c-{7-char-hash}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContactId {
    hash: String,
}

impl ContactId {
    /// Creates a new contact ID from name and timestamp
    pub fn new(name: &str, timestamp: DateTime<Utc>) -> Self {
        Self {
            hash: generate_hash(name, timestamp),
        }
    }

    /// Returns the hash portion of the ID
    pub fn hash(&self) -> &str {
        &self.hash
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c-{}", self.hash)
    }
}

impl FromStr for ContactId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let hash = s
            .strip_prefix("c-")
            .ok_or_else(|| IdError::InvalidContactId(s.to_string()))?;

        if hash.len() != 7 || !hash.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(IdError::InvalidContactId(s.to_string()));
        }

        Ok(Self {
            hash: hash.to_string(),
        })
    }
}

impl TryFrom<String> for ContactId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ContactId> for String {
    fn from(id: ContactId) -> Self {
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn contact_id_format() {
        let id = ContactId::new("Alice", Utc::now());
        let s = id.to_string();

        assert!(s.starts_with("c-"));
        assert_eq!(s.len(), 9);
    }

    #[test]
    fn contact_id_same_input_same_hash() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(ContactId::new("Alice", ts), ContactId::new("Alice", ts));
    }

    #[test]
    fn contact_id_differs_by_timestamp() {
        let t1 = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let t2 = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 6).unwrap();
        assert_ne!(ContactId::new("Alice", t1), ContactId::new("Alice", t2));
    }

    #[test]
    fn parse_contact_id() {
        let id: ContactId = "c-7f2b4c1".parse().unwrap();
        assert_eq!(id.hash(), "7f2b4c1");
        assert_eq!(id.to_string(), "c-7f2b4c1");
    }

    #[test]
    fn parse_rejects_bad_ids() {
        assert!("a-7f2b4c1".parse::<ContactId>().is_err());
        assert!("c-7f2b".parse::<ContactId>().is_err());
        assert!("c-zzzzzzz".parse::<ContactId>().is_err());
    }

    #[test]
    fn serde_roundtrip_as_string() {
        let id: ContactId = "c-abc1234".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"c-abc1234\"");

        let back: ContactId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
