// CSV import
// Header/column presence checks only; row content is loaded verbatim

use std::fs::File;
use std::path::Path;

use super::CsvError;
use crate::models::entry::CsvRecord;

/// Read every data row of the file into records.
///
/// Columns may appear in any order; extra columns are ignored and a
/// missing cell in a short row becomes the empty string. Field content is
/// only trimmed, never semantically validated — a malformed weekday or
/// time string loads as-is. The whole file is parsed before anything is
/// returned, so a caller swapping its store sees all rows or none.
pub fn import_records<T: CsvRecord>(path: impl AsRef<Path>) -> Result<Vec<T>, CsvError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let headers = reader.headers()?.clone();
    if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
        return Err(CsvError::MissingHeader);
    }

    let mut column_indices = Vec::with_capacity(T::COLUMNS.len());
    let mut missing = Vec::new();
    for column in T::COLUMNS {
        match headers.iter().position(|header| header == *column) {
            Some(index) => column_indices.push(index),
            None => missing.push(column.to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(CsvError::MissingColumns(missing));
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let fields: Vec<String> = column_indices
            .iter()
            .map(|&index| row.get(index).unwrap_or("").trim().to_string())
            .collect();
        records.push(T::from_fields(&fields));
    }
    if records.is_empty() {
        return Err(CsvError::EmptyFile);
    }

    log::info!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::entry::ScheduleEntry;
    use std::io::Write;

    fn write_file(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.csv");
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    const HEADER: &str = "EventName,Location,Description,Weekday,StartTime,EndTime,IsCourse";

    #[test]
    fn test_import_reads_rows_in_order() {
        let (_dir, path) = write_file(&format!(
            "{HEADER}\nMath,Hall A,,1,2024-03-04 08:00,2024-03-04 09:00,1\nGym,Court,,5,2024-03-08 17:00,2024-03-08 18:00,0\n"
        ));
        let records: Vec<ScheduleEntry> = import_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].event_name, "Math");
        assert_eq!(records[1].is_course, "0");
    }

    #[test]
    fn test_header_only_file_is_empty() {
        let (_dir, path) = write_file(&format!("{HEADER}\n"));
        let result = import_records::<ScheduleEntry>(&path);
        assert!(matches!(result, Err(CsvError::EmptyFile)));
    }

    #[test]
    fn test_missing_columns_are_named() {
        let (_dir, path) = write_file("EventName,Location\nMath,Hall A\n");
        match import_records::<ScheduleEntry>(&path) {
            Err(CsvError::MissingColumns(missing)) => {
                assert_eq!(
                    missing,
                    vec!["Description", "Weekday", "StartTime", "EndTime", "IsCourse"]
                );
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_byte_file_has_no_header() {
        let (_dir, path) = write_file("");
        let result = import_records::<ScheduleEntry>(&path);
        assert!(matches!(result, Err(CsvError::MissingHeader)));
    }

    #[test]
    fn test_short_rows_fill_empty_cells() {
        let (_dir, path) = write_file(&format!("{HEADER}\nMath,Hall A\n"));
        let records: Vec<ScheduleEntry> = import_records(&path).unwrap();
        assert_eq!(records[0].event_name, "Math");
        assert_eq!(records[0].weekday, "");
        assert_eq!(records[0].is_course, "");
    }

    #[test]
    fn test_reordered_and_extra_columns_are_tolerated() {
        let (_dir, path) = write_file(
            "Location,EventName,Description,Weekday,StartTime,EndTime,IsCourse,Extra\nHall A,Math,,1,2024-03-04 08:00,2024-03-04 09:00,1,ignored\n",
        );
        let records: Vec<ScheduleEntry> = import_records(&path).unwrap();
        assert_eq!(records[0].event_name, "Math");
        assert_eq!(records[0].location, "Hall A");
    }

    #[test]
    fn test_import_skips_semantic_validation() {
        // Known permissiveness: bad weekday and inverted times load as-is.
        let (_dir, path) = write_file(&format!(
            "{HEADER}\nMath,Hall A,,9,2024-03-04 10:00,2024-03-04 08:00,maybe\n"
        ));
        let records: Vec<ScheduleEntry> = import_records(&path).unwrap();
        assert_eq!(records[0].weekday, "9");
        assert_eq!(records[0].is_course, "maybe");
    }

    #[test]
    fn test_cell_values_are_trimmed() {
        let (_dir, path) = write_file(&format!(
            "{HEADER}\n  Math , Hall A ,,1,2024-03-04 08:00,2024-03-04 09:00,1\n"
        ));
        let records: Vec<ScheduleEntry> = import_records(&path).unwrap();
        assert_eq!(records[0].event_name, "Math");
        assert_eq!(records[0].location, "Hall A");
    }
}
