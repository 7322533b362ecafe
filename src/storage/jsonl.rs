//! JSONL storage for contacts
//!
//! Contacts are stored in `contacts.jsonl` with one JSON object per line,
//! in the order they were added. That order is the list order users see.
//! Uses file locking for concurrent access safety.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use crate::domain::Contact;

/// File name of the contact store inside the data directory
pub const CONTACTS_FILE: &str = "contacts.jsonl";

/// Store for contact data in JSONL format
pub struct ContactStore {
    path: PathBuf,
}

impl ContactStore {
    /// Creates a new contact store at the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates the default store inside a data directory
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(CONTACTS_FILE))
    }

    /// Returns the path to the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all contacts in list order
    pub fn read_all(&self) -> Result<Vec<Contact>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open contact store: {}", self.path.display()))?;

        // Acquire shared lock for reading
        file.lock_shared()
            .context("Failed to acquire read lock on contact store")?;

        let reader = BufReader::new(&file);
        let mut contacts = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("Failed to read line {}", line_num + 1))?;

            if line.trim().is_empty() {
                continue;
            }

            let contact: Contact = serde_json::from_str(&line)
                .with_context(|| format!("Failed to parse contact at line {}", line_num + 1))?;

            contacts.push(contact);
        }

        // Lock is released when file is dropped
        Ok(contacts)
    }

    /// Writes all contacts to the store (full rewrite)
    pub fn write_all(&self, contacts: &[Contact]) -> Result<()> {
        self.ensure_parent()?;

        // Write to temp file first
        let temp_path = self.path.with_extension("jsonl.tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            file.lock_exclusive()
                .context("Failed to acquire write lock on contact store")?;

            let mut writer = BufWriter::new(&file);

            for contact in contacts {
                let line = serde_json::to_string(contact).context("Failed to serialize contact")?;
                writeln!(writer, "{}", line).context("Failed to write contact")?;
            }

            writer.flush().context("Failed to flush contact store")?;
        }

        // Atomic rename
        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }

    /// Appends a single contact to the end of the list
    pub fn append(&self, contact: &Contact) -> Result<()> {
        self.ensure_parent()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open contact store: {}", self.path.display()))?;

        file.lock_exclusive()
            .context("Failed to acquire write lock on contact store")?;

        let mut writer = BufWriter::new(&file);
        let line = serde_json::to_string(contact).context("Failed to serialize contact")?;
        writeln!(writer, "{}", line).context("Failed to write contact")?;

        writer.flush().context("Failed to flush contact store")?;

        Ok(())
    }

    /// Removes the contact at a 0-based position, returning it
    pub fn remove_at(&self, position: usize) -> Result<Option<Contact>> {
        let mut contacts = self.read_all()?;
        if position >= contacts.len() {
            return Ok(None);
        }
        let removed = contacts.remove(position);
        self.write_all(&contacts)?;
        Ok(Some(removed))
    }

    /// Removes every contact, returning how many were removed
    pub fn clear(&self) -> Result<usize> {
        let count = self.read_all()?.len();
        self.write_all(&[])?;
        Ok(count)
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContactDraft, Detail, TagSet};
    use tempfile::TempDir;

    fn make_contact(name: &str) -> Contact {
        Contact::from_draft(ContactDraft {
            name: name.to_string(),
            phone: Detail::private("91234567"),
            email: Detail::public(format!("{}@x.com", name.to_lowercase())),
            address: Detail::public("1 Road"),
            tags: TagSet::parse("friend"),
        })
    }

    #[test]
    fn read_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = ContactStore::in_dir(dir.path());

        let contacts = store.read_all().unwrap();
        assert!(contacts.is_empty());
    }

    #[test]
    fn append_keeps_insertion_order() {
        let dir = TempDir::new().unwrap();
        let store = ContactStore::in_dir(dir.path());

        store.append(&make_contact("Zed")).unwrap();
        store.append(&make_contact("Amy")).unwrap();
        store.append(&make_contact("Max")).unwrap();

        let names: Vec<_> = store
            .read_all()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Zed", "Amy", "Max"]);
    }

    #[test]
    fn write_and_read_contacts() {
        let dir = TempDir::new().unwrap();
        let store = ContactStore::in_dir(dir.path());

        let contacts = vec![make_contact("Alice"), make_contact("Bob")];
        store.write_all(&contacts).unwrap();

        let loaded = store.read_all().unwrap();
        assert_eq!(loaded, contacts);
        assert!(loaded[0].phone.private);
    }

    #[test]
    fn remove_at_position() {
        let dir = TempDir::new().unwrap();
        let store = ContactStore::in_dir(dir.path());

        store
            .write_all(&[make_contact("Alice"), make_contact("Bob"), make_contact("Carol")])
            .unwrap();

        let removed = store.remove_at(1).unwrap();
        assert_eq!(removed.map(|c| c.name), Some("Bob".to_string()));

        let names: Vec<_> = store.read_all().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Alice", "Carol"]);
    }

    #[test]
    fn remove_out_of_range_is_none() {
        let dir = TempDir::new().unwrap();
        let store = ContactStore::in_dir(dir.path());
        store.append(&make_contact("Alice")).unwrap();

        assert!(store.remove_at(5).unwrap().is_none());
        assert_eq!(store.read_all().unwrap().len(), 1);
    }

    #[test]
    fn clear_removes_everything() {
        let dir = TempDir::new().unwrap();
        let store = ContactStore::in_dir(dir.path());
        store.append(&make_contact("Alice")).unwrap();
        store.append(&make_contact("Bob")).unwrap();

        assert_eq!(store.clear().unwrap(), 2);
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = ContactStore::new(dir.path().join("nested").join("dir").join(CONTACTS_FILE));

        store.append(&make_contact("Alice")).unwrap();

        assert!(store.path().exists());
    }

    #[test]
    fn atomic_write() {
        let dir = TempDir::new().unwrap();
        let store = ContactStore::in_dir(dir.path());

        store.write_all(&[make_contact("Alice")]).unwrap();

        // Temp file should not exist after write
        let temp_path = store.path().with_extension("jsonl.tmp");
        assert!(!temp_path.exists());
    }

    #[test]
    fn skips_blank_lines() {
        let dir = TempDir::new().unwrap();
        let store = ContactStore::in_dir(dir.path());
        store.append(&make_contact("Alice")).unwrap();

        let mut content = fs::read_to_string(store.path()).unwrap();
        content.push_str("\n\n");
        fs::write(store.path(), content).unwrap();

        assert_eq!(store.read_all().unwrap().len(), 1);
    }
}
