// CSV codec service
// Serializes/deserializes record stores against the fixed column schemas

mod export;
mod import;

pub use export::export_records;
pub use import::import_records;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CsvError {
    #[error("add at least one record first")]
    EmptyStore,
    #[error("select a CSV output path")]
    EmptyPath,
    #[error("CSV file is missing a header row")]
    MissingHeader,
    #[error("CSV file is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("CSV file is empty")]
    EmptyFile,
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Normalize an export path. A directory gets the dataset's default file
/// name appended; missing parent directories are created.
pub fn resolve_output_path(path_text: &str, default_name: &str) -> Result<PathBuf, CsvError> {
    let trimmed = path_text.trim();
    if trimmed.is_empty() {
        return Err(CsvError::EmptyPath);
    }

    let mut path = PathBuf::from(trimmed);
    if path.is_dir() {
        path.push(default_name);
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_path_is_rejected() {
        assert!(matches!(
            resolve_output_path("   ", "student_schedule.csv"),
            Err(CsvError::EmptyPath)
        ));
    }

    #[test]
    fn test_directory_gets_default_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let resolved =
            resolve_output_path(dir.path().to_str().unwrap(), "professors.csv").unwrap();
        assert_eq!(resolved, dir.path().join("professors.csv"));
    }

    #[test]
    fn test_missing_parent_directories_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("out.csv");
        let resolved =
            resolve_output_path(nested.to_str().unwrap(), "student_schedule.csv").unwrap();
        assert_eq!(resolved, nested);
        assert!(nested.parent().unwrap().is_dir());
    }
}
