use super::*;

pub const EXPORT_FILE_NAME: &str = "exported.csv";

/// A directory destination gets `exported.csv` appended; any other extension
/// than `.csv` is refused.
pub fn resolve_export_path(des: &Path) -> Result<PathBuf, AppError> {
    if des.is_dir() {
        return Ok(des.join(EXPORT_FILE_NAME));
    }

    if des.extension().is_some_and(|ext| ext != "csv") {
        return Err(AppError::Validation(
            "Export file must be a .csv file".to_string(),
        ));
    }

    Ok(des.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn directory_destination_gets_default_file_name() -> Result<(), AppError> {
        let dir = tempdir()?;

        assert_eq!(
            resolve_export_path(dir.path())?,
            dir.path().join("exported.csv")
        );
        Ok(())
    }

    #[test]
    fn non_csv_destination_is_rejected() {
        assert!(matches!(
            resolve_export_path(Path::new("out/contacts.txt")),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn csv_destination_is_kept() -> Result<(), AppError> {
        assert_eq!(
            resolve_export_path(Path::new("out/contacts.csv"))?,
            PathBuf::from("out/contacts.csv")
        );
        Ok(())
    }
}
