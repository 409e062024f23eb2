use super::*;

pub fn resolve_import_path(src: &Path) -> Result<PathBuf, AppError> {
    if !src.exists() {
        return Err(AppError::NotFound("CSV file".to_string()));
    }

    if src.extension().is_some_and(|ext| ext != "csv") {
        return Err(AppError::Validation("File not .csv".to_string()));
    }

    Ok(src.to_path_buf())
}
