use crate::prelude::{AppError, Contact};

use crate::store::{
    ContactStorage, CsvStorage, TxtStorage, resolve_export_path, resolve_import_path,
};
use std::path::{Path, PathBuf};

/// Outcome of reading a text store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSummary {
    pub loaded: usize,
    pub skipped: usize,
}

/// The in-memory contact book.
///
/// Contacts are kept in insertion order. The vector never leaves this type
/// mutably; readers get slices or references.
#[derive(Debug, Default, Clone)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Drops every contact whose name matches, ignoring ASCII case.
    /// Returns whether anything was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.contacts.len();
        self.contacts.retain(|contact| !contact.name_matches(name));
        self.contacts.len() != before
    }

    pub fn search(&self, name: &str) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|contact| contact.name_matches(name))
            .collect()
    }

    pub fn list_all(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Appends the records of a text file. Malformed lines are skipped and
    /// counted. On error nothing is appended.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<LoadSummary, AppError> {
        let path = path.as_ref();

        let (contacts, skipped) = TxtStorage::new(path).load_counting().inspect_err(|e| {
            log::warn!("Failed to load contacts from {}: {e}", path.display());
        })?;

        let summary = LoadSummary {
            loaded: contacts.len(),
            skipped,
        };
        self.contacts.extend(contacts);

        log::debug!(
            "Loaded {} contacts from {} ({} malformed lines skipped)",
            summary.loaded,
            path.display(),
            summary.skipped
        );
        Ok(summary)
    }

    /// Overwrites `path` with the whole book.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), AppError> {
        let path = path.as_ref();

        self.save_to(&TxtStorage::new(path)).inspect_err(|e| {
            log::warn!("Failed to save contacts to {}: {e}", path.display());
        })?;

        log::debug!("Saved {} contacts to {}", self.len(), path.display());
        Ok(())
    }

    pub fn load_from(&mut self, storage: &dyn ContactStorage) -> Result<usize, AppError> {
        let contacts = storage.load()?;
        let count = contacts.len();
        self.contacts.extend(contacts);
        Ok(count)
    }

    pub fn save_to(&self, storage: &dyn ContactStorage) -> Result<(), AppError> {
        storage.save(&self.contacts)
    }

    pub fn import_csv(&mut self, src: impl AsRef<Path>) -> Result<usize, AppError> {
        let path = resolve_import_path(src.as_ref())?;
        let count = self.load_from(&CsvStorage::new(&path))?;

        log::info!("Imported {count} contacts from {}", path.display());
        Ok(count)
    }

    /// Returns the file actually written and the number of contacts in it.
    pub fn export_csv(&self, des: impl AsRef<Path>) -> Result<(PathBuf, usize), AppError> {
        let path = resolve_export_path(des.as_ref())?;
        self.save_to(&CsvStorage::new(&path))?;

        log::info!("Exported {} contacts to {}", self.len(), path.display());
        Ok((path, self.len()))
    }
}
