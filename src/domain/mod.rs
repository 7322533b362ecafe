//! Domain models for the address book
//!
//! Contains the core logic without any I/O concerns: the contact model,
//! the entry wizard state machine and list rendering.

mod id;
mod detail;
mod contact;
mod listing;
mod wizard;

pub use id::{ContactId, IdError};
pub use detail::{parse_detail, Detail, DetailParseError, PLACEHOLDER, PRIVATE_MARKER};
pub use contact::{Contact, ContactDraft, TagSet, TAG_SEPARATOR};
pub use listing::{
    indexed_item, join_lines, position_of, render, render_with, DisplayRecord, Visibility,
    DISPLAYED_INDEX_OFFSET,
};
pub use wizard::{Entry, MalformedDetailPolicy, Outcome, Step, WizardState, UNDO_TOKEN};
