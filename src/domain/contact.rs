//! Contact domain model
//!
//! A [`ContactDraft`] is the record the entry wizard fills in field by
//! field. Once complete it becomes a [`Contact`], which is what the store
//! persists and the listing renders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::detail::{Detail, PLACEHOLDER};
use super::id::ContactId;
use super::listing::DisplayRecord;

/// Separator between tags on input
pub const TAG_SEPARATOR: char = ',';

/// Set of tags; duplicates collapse and iteration is sorted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(BTreeSet<String>);

impl TagSet {
    /// Creates an empty tag set
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Adds a tag after trimming it. Blank tags are skipped.
    ///
    /// Returns true if the set changed.
    pub fn add(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() {
            return false;
        }
        self.0.insert(tag.to_string())
    }

    /// Adds every tag from a comma separated line
    pub fn add_all(&mut self, input: &str) {
        if input.is_empty() {
            return;
        }
        for tag in input.split(TAG_SEPARATOR) {
            self.add(tag);
        }
    }

    /// Builds a tag set from a comma separated line
    pub fn parse(input: &str) -> Self {
        let mut tags = Self::new();
        tags.add_all(input);
        tags
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }
}

impl<'a> FromIterator<&'a str> for TagSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tags = Self::new();
        for tag in iter {
            tags.add(tag);
        }
        tags
    }
}

/// A contact under construction by the entry wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub phone: Detail,
    pub email: Detail,
    pub address: Detail,
    pub tags: TagSet,
}

impl ContactDraft {
    /// Creates a draft with every field at its placeholder
    pub fn new() -> Self {
        Self {
            name: PLACEHOLDER.to_string(),
            phone: Detail::default(),
            email: Detail::default(),
            address: Detail::default(),
            tags: TagSet::new(),
        }
    }
}

impl Default for ContactDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayRecord for ContactDraft {
    fn as_text(&self) -> String {
        format_contact(&self.name, [&self.phone, &self.email, &self.address], &self.tags, false)
    }

    fn as_text_hide_private(&self) -> String {
        format_contact(&self.name, [&self.phone, &self.email, &self.address], &self.tags, true)
    }
}

/// A saved contact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique identifier
    pub id: ContactId,

    pub name: String,
    pub phone: Detail,
    pub email: Detail,
    pub address: Detail,

    #[serde(default, skip_serializing_if = "TagSet::is_empty")]
    pub tags: TagSet,

    /// When the contact was saved
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// Takes ownership of a completed draft
    pub fn from_draft(draft: ContactDraft) -> Self {
        let now = Utc::now();
        Self {
            id: ContactId::new(&draft.name, now),
            name: draft.name,
            phone: draft.phone,
            email: draft.email,
            address: draft.address,
            tags: draft.tags,
            created_at: now,
        }
    }

    /// Returns true if any word of the name matches a keyword (case-insensitive)
    pub fn name_matches_any(&self, keywords: &[String]) -> bool {
        self.name.split_whitespace().any(|word| {
            keywords
                .iter()
                .any(|keyword| word.eq_ignore_ascii_case(keyword.trim()))
        })
    }
}

impl DisplayRecord for Contact {
    fn as_text(&self) -> String {
        format_contact(&self.name, [&self.phone, &self.email, &self.address], &self.tags, false)
    }

    fn as_text_hide_private(&self) -> String {
        format_contact(&self.name, [&self.phone, &self.email, &self.address], &self.tags, true)
    }
}

const DETAIL_LABELS: [&str; 3] = ["Phone", "Email", "Address"];

/// Formats a contact on one line.
///
/// With `hide_private`, private details are left out entirely; otherwise
/// they are shown with a `(private)` prefix. Blank details are skipped.
fn format_contact(name: &str, details: [&Detail; 3], tags: &TagSet, hide_private: bool) -> String {
    let mut text = name.to_string();

    for (label, detail) in DETAIL_LABELS.iter().zip(details) {
        if detail.value.trim().is_empty() || (detail.private && hide_private) {
            continue;
        }
        let marker = if detail.private { "(private) " } else { "" };
        text.push_str(&format!(" {}: {}{}", label, marker, detail.value));
    }

    if !tags.is_empty() {
        let tag_list: String = tags.iter().map(|tag| format!("[{}]", tag)).collect();
        text.push_str(&format!(" Tags: {}", tag_list));
    }

    text
}
