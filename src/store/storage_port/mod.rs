pub mod export_csv;
pub mod import_csv;

use super::*;
use csv::{Reader, Writer};
use serde::Deserialize;
use std::path::PathBuf;

pub use export_csv::resolve_export_path;
pub use import_csv::resolve_import_path;

/// CSV file used for import/export. Unlike the text store, fields are quoted
/// when needed, so commas inside values survive.
pub struct CsvStorage {
    pub path: PathBuf,
}

impl CsvStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// A CSV row before it has been checked.
#[derive(Debug, Deserialize)]
struct ContactRow {
    name: String,
    phone: String,
    email: String,
}

impl ContactStorage for CsvStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        let mut reader = Reader::from_path(&self.path)?;

        let mut contacts = Vec::new();

        for (row, result) in reader.deserialize().enumerate() {
            let row_data: ContactRow = result?;

            let contact = Contact::new(row_data.name, row_data.phone, row_data.email)
                .map_err(|e| {
                    AppError::Validation(format!(
                        "Row {} of {}: {e}",
                        row + 1,
                        self.path.display()
                    ))
                })?;
            contacts.push(contact);
        }

        Ok(contacts)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let mut writer = Writer::from_path(&self.path)?;

        for contact in contacts {
            writer.serialize(contact)?;
        }

        writer.flush()?;

        Ok(())
    }
}
