// Date utility functions
// Canonical formats shared by the validator, the picker, and the CSV codec

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Canonical layout for StartTime/EndTime field values.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";
/// Canonical layout for the picker's base date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), DATETIME_FORMAT).ok()
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

pub fn format_datetime(value: NaiveDateTime) -> String {
    value.format(DATETIME_FORMAT).to_string()
}

pub fn format_date(value: NaiveDate) -> String {
    value.format(DATE_FORMAT).to_string()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Clock component of a previously entered date-time field, if it parses.
pub fn extract_clock(value: &str) -> Option<NaiveTime> {
    parse_datetime(value).map(|dt| dt.time())
}

/// Pick the base date for the time-range picker from prior form values.
///
/// Each candidate is tried first as a full date-time, then as a bare date;
/// the current date is the fallback when nothing parses.
pub fn detect_base_date(candidates: &[&str]) -> NaiveDate {
    for value in candidates {
        if let Some(dt) = parse_datetime(value) {
            return dt.date();
        }
        if let Some(d) = parse_date(value) {
            return d;
        }
    }
    today()
}
