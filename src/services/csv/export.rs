// CSV export
// Header row plus one row per record, field values verbatim

use std::fs::File;
use std::path::PathBuf;

use super::{resolve_output_path, CsvError};
use crate::models::entry::CsvRecord;

/// Write the records to `path_text` and return the resolved path.
///
/// The empty-store check runs before any filesystem work, so a failed
/// export never creates files or directories. Records are written in store
/// order without re-validation; the serde column renames on the entry
/// types produce the exact fixed header.
pub fn export_records<T: CsvRecord>(records: &[T], path_text: &str) -> Result<PathBuf, CsvError> {
    if records.is_empty() {
        return Err(CsvError::EmptyStore);
    }

    let path = resolve_output_path(path_text, T::DEFAULT_FILE_NAME)?;
    let file = File::create(&path)?;
    let mut writer = csv::Writer::from_writer(file);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    log::info!("exported {} records to {}", records.len(), path.display());
    Ok(path)
}
