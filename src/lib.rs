//! Address book CLI - contacts with private details
//!
//! New contacts are entered through a five-step console wizard (name,
//! phone, email, address, tags) that supports stepping back with `undo`.
//! Phone, email and address can be marked private with a trailing `/p`,
//! and listings hide private details unless asked to show them.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{Contact, ContactDraft, ContactId, Detail, DisplayRecord, TagSet};
