pub mod storage_port;
pub mod txt;

use crate::prelude::{AppError, Contact};
use std::fs;
use std::path::Path;

pub use storage_port::{CsvStorage, resolve_export_path, resolve_import_path};
pub use txt::TxtStorage;

/// A persistence medium the in-memory book can be read from and written to.
pub trait ContactStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
