//! Contact commands

use std::io::{self, Write};

use anyhow::{Context, Result};
use thiserror::Error;

use super::output::Output;
use super::wizard::EntryWizard;
use crate::domain::{
    position_of, render_with, Contact, ContactDraft, DisplayRecord, MalformedDetailPolicy,
    Visibility, DISPLAYED_INDEX_OFFSET,
};
use crate::storage::AddressBook;

#[derive(Debug, Error, PartialEq)]
pub enum IndexError {
    #[error("No contact at index {index}; the address book has {len} contact(s)")]
    OutOfRange { index: usize, len: usize },
}

/// Walks the user through a new contact and saves it
pub fn add(output: &Output, book: &AddressBook, strict: bool) -> Result<()> {
    let config = &book.config().wizard;
    let policy = if strict {
        MalformedDetailPolicy::Reprompt
    } else {
        config.malformed_detail
    };
    output.verbose_ctx("add", &format!("Malformed detail policy: {:?}", policy));

    let stdin = io::stdin();
    let input = stdin.lock();

    // Keep stdout clean for the JSON result
    let prompts: Box<dyn Write> = if output.is_json() {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };

    let draft = EntryWizard::new(input, prompts)
        .policy(policy)
        .echo(config.echo_input)
        .log_to(output)
        .run(ContactDraft::new())
        .context("Contact entry did not finish")?;

    let contact = Contact::from_draft(draft);
    book.contacts().append(&contact)?;
    output.verbose_ctx("add", &format!("Saved {} to {}", contact.id, book.contacts().path().display()));

    if output.is_json() {
        output.data(&serde_json::json!({
            "id": contact.id.to_string(),
            "text": contact.as_text_hide_private(),
        }));
    } else {
        output.success(&format!(
            "Added contact {}: {}",
            contact.id,
            contact.as_text_hide_private()
        ));
    }

    Ok(())
}

/// Lists all contacts
pub fn list(output: &Output, book: &AddressBook, show_private: bool) -> Result<()> {
    let contacts = book.contacts().read_all()?;
    output.verbose_ctx("list", &format!("Loaded {} contacts", contacts.len()));

    let visibility = visibility(show_private || book.config().display.show_private);
    show_contacts(output, &contacts.iter().collect::<Vec<_>>(), visibility);
    Ok(())
}

/// Shows one contact in full
pub fn view(output: &Output, book: &AddressBook, index: usize) -> Result<()> {
    let contacts = book.contacts().read_all()?;
    let position = locate(index, contacts.len())?;
    let contact = &contacts[position];

    if output.is_json() {
        output.data(&serde_json::json!({
            "index": index,
            "id": contact.id.to_string(),
            "text": contact.as_text(),
        }));
    } else {
        println!("{}", contact.as_text());
    }

    Ok(())
}

/// Lists contacts whose name contains any of the keywords
pub fn find(output: &Output, book: &AddressBook, keywords: &[String]) -> Result<()> {
    let contacts = book.contacts().read_all()?;
    let matches: Vec<&Contact> = contacts
        .iter()
        .filter(|c| c.name_matches_any(keywords))
        .collect();
    output.verbose_ctx(
        "find",
        &format!("{} of {} contacts match {:?}", matches.len(), contacts.len(), keywords),
    );

    let visibility = visibility(book.config().display.show_private);
    show_contacts(output, &matches, visibility);
    Ok(())
}

/// Deletes the contact at a list index
pub fn delete(output: &Output, book: &AddressBook, index: usize) -> Result<()> {
    let store = book.contacts();
    let len = store.read_all()?.len();
    let position = locate(index, len)?;

    let removed = store
        .remove_at(position)?
        .ok_or(IndexError::OutOfRange { index, len })?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "deleted": removed.id.to_string(),
            "text": removed.as_text_hide_private(),
        }));
    } else {
        output.success(&format!("Deleted contact: {}", removed.as_text_hide_private()));
    }

    Ok(())
}

/// Deletes every contact
pub fn clear(output: &Output, book: &AddressBook) -> Result<()> {
    let count = book.contacts().clear()?;

    if output.is_json() {
        output.data(&serde_json::json!({ "cleared": count }));
    } else {
        output.success(&format!("Address book has been cleared ({} removed)", count));
    }

    Ok(())
}

fn visibility(show_private: bool) -> Visibility {
    if show_private {
        Visibility::All
    } else {
        Visibility::Public
    }
}

fn locate(index: usize, len: usize) -> Result<usize, IndexError> {
    position_of(index, len).ok_or(IndexError::OutOfRange { index, len })
}

fn show_contacts(output: &Output, contacts: &[&Contact], visibility: Visibility) {
    if output.is_json() {
        let items: Vec<_> = contacts
            .iter()
            .enumerate()
            .map(|(position, c)| {
                let text = match visibility {
                    Visibility::Public => c.as_text_hide_private(),
                    Visibility::All => c.as_text(),
                };
                serde_json::json!({
                    "index": position + DISPLAYED_INDEX_OFFSET,
                    "id": c.id.to_string(),
                    "text": text,
                })
            })
            .collect();
        output.data(&items);
    } else if contacts.is_empty() {
        println!("No contacts found.");
    } else {
        output.indexed_list(&render_with(contacts, visibility));
        println!();
        println!("{} contact(s) listed", contacts.len());
    }
}
