//! The comma-delimited text format.
//!
//! One contact per line as `name,phone,email`. There is no quoting or
//! escaping, so a field holding a comma shifts the remaining fields on reload.

use super::*;

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

pub const DELIMITER: char = ',';

pub struct TxtStorage {
    pub path: PathBuf,
}

impl TxtStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads every well-formed line, also reporting how many lines were skipped.
    pub fn load_counting(&self) -> Result<(Vec<Contact>, usize), AppError> {
        let file = File::open(&self.path)?;
        deserialize_contacts_from_txt_buffer(BufReader::new(file))
    }
}

impl ContactStorage for TxtStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        let (contacts, _skipped) = self.load_counting()?;
        Ok(contacts)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        let data = serialize_contacts(contacts);
        file.write_all(data.as_bytes())?;
        file.flush()?;

        Ok(())
    }
}

pub fn serialize_contacts(contacts: &[Contact]) -> String {
    let mut data = String::new();

    for contact in contacts {
        data.push_str(&format_line(contact));
        data.push('\n');
    }
    data
}

pub fn format_line(contact: &Contact) -> String {
    format!(
        "{}{DELIMITER}{}{DELIMITER}{}",
        contact.name(),
        contact.phone(),
        contact.email()
    )
}

/// Splits on every comma. Fewer than three parts, or a blank name, is not a
/// contact. Parts after the third are dropped.
pub fn parse_line(line: &str) -> Option<Contact> {
    let parts: Vec<&str> = line.split(DELIMITER).collect();

    let [name, phone, email, ..] = parts.as_slice() else {
        return None;
    };

    Contact::new(*name, *phone, *email).ok()
}

pub fn deserialize_contacts_from_txt_buffer<R: BufRead>(
    buffer: R,
) -> Result<(Vec<Contact>, usize), AppError> {
    let mut contacts = Vec::new();
    let mut skipped = 0;

    for line in buffer.split(b'\n') {
        let line = line?;
        // Bytes that are not UTF-8 become U+FFFD instead of failing the file.
        let decoded = String::from_utf8_lossy(&line);
        let line = decoded.strip_suffix('\r').unwrap_or(decoded.as_ref());

        match parse_line(line) {
            Some(contact) => contacts.push(contact),
            None => skipped += 1,
        }
    }

    Ok((contacts, skipped))
}
