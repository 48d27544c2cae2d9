// Entry models
// Canonical records for the two CSV-backed datasets

use chrono::{NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::utils::date;

/// Column seam between an entry type and the CSV codec / record store.
///
/// `COLUMNS` is the fixed header schema for the dataset, in file order.
/// `from_fields` receives one trimmed string per column in that order and
/// must accept any content — imported rows are not semantically validated.
pub trait CsvRecord: Serialize + Sized {
    const COLUMNS: &'static [&'static str];
    const DEFAULT_FILE_NAME: &'static str;

    fn to_fields(&self) -> Vec<String>;
    fn from_fields(fields: &[String]) -> Self;
}

fn field(fields: &[String], index: usize) -> String {
    fields.get(index).cloned().unwrap_or_default()
}

/// One row of the student weekly-schedule dataset.
///
/// Fields hold the canonical string form produced by the validator
/// (`Weekday` as "1".."7", times as `YYYY-MM-DD HH:MM`, `IsCourse` as
/// "0"/"1"). Rows loaded from disk may carry arbitrary strings; the typed
/// accessors parse on demand and return `None` for malformed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    #[serde(rename = "EventName")]
    pub event_name: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Weekday")]
    pub weekday: String,
    #[serde(rename = "StartTime")]
    pub start_time: String,
    #[serde(rename = "EndTime")]
    pub end_time: String,
    #[serde(rename = "IsCourse")]
    pub is_course: String,
}

impl ScheduleEntry {
    pub fn start_datetime(&self) -> Option<NaiveDateTime> {
        date::parse_datetime(&self.start_time)
    }

    pub fn end_datetime(&self) -> Option<NaiveDateTime> {
        date::parse_datetime(&self.end_time)
    }

    pub fn weekday_number(&self) -> Option<u8> {
        parse_weekday(&self.weekday)
    }

    pub fn is_course_flag(&self) -> Option<bool> {
        match self.is_course.trim() {
            "0" => Some(false),
            "1" => Some(true),
            _ => None,
        }
    }
}

impl CsvRecord for ScheduleEntry {
    const COLUMNS: &'static [&'static str] = &[
        "EventName",
        "Location",
        "Description",
        "Weekday",
        "StartTime",
        "EndTime",
        "IsCourse",
    ];
    const DEFAULT_FILE_NAME: &'static str = "student_schedule.csv";

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.event_name.clone(),
            self.location.clone(),
            self.description.clone(),
            self.weekday.clone(),
            self.start_time.clone(),
            self.end_time.clone(),
            self.is_course.clone(),
        ]
    }

    fn from_fields(fields: &[String]) -> Self {
        Self {
            event_name: field(fields, 0),
            location: field(fields, 1),
            description: field(fields, 2),
            weekday: field(fields, 3),
            start_time: field(fields, 4),
            end_time: field(fields, 5),
            is_course: field(fields, 6),
        }
    }
}

/// One row of the professor office-hours dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficeHourEntry {
    #[serde(rename = "ProfessorName")]
    pub professor_name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "EventName")]
    pub event_name: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Weekday")]
    pub weekday: String,
    #[serde(rename = "StartTime")]
    pub start_time: String,
    #[serde(rename = "EndTime")]
    pub end_time: String,
}

impl OfficeHourEntry {
    pub fn start_datetime(&self) -> Option<NaiveDateTime> {
        date::parse_datetime(&self.start_time)
    }

    pub fn end_datetime(&self) -> Option<NaiveDateTime> {
        date::parse_datetime(&self.end_time)
    }

    pub fn weekday_number(&self) -> Option<u8> {
        parse_weekday(&self.weekday)
    }
}

impl CsvRecord for OfficeHourEntry {
    const COLUMNS: &'static [&'static str] = &[
        "ProfessorName",
        "Email",
        "EventName",
        "Location",
        "Description",
        "Weekday",
        "StartTime",
        "EndTime",
    ];
    const DEFAULT_FILE_NAME: &'static str = "professors.csv";

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.professor_name.clone(),
            self.email.clone(),
            self.event_name.clone(),
            self.location.clone(),
            self.description.clone(),
            self.weekday.clone(),
            self.start_time.clone(),
            self.end_time.clone(),
        ]
    }

    fn from_fields(fields: &[String]) -> Self {
        Self {
            professor_name: field(fields, 0),
            email: field(fields, 1),
            event_name: field(fields, 2),
            location: field(fields, 3),
            description: field(fields, 4),
            weekday: field(fields, 5),
            start_time: field(fields, 6),
            end_time: field(fields, 7),
        }
    }
}

fn parse_weekday(value: &str) -> Option<u8> {
    value
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|w| (1..=7).contains(w))
}

/// ISO weekday for a canonical weekday field, for callers that want
/// chrono types.
pub fn weekday_from_number(number: u8) -> Option<Weekday> {
    match number {
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        7 => Some(Weekday::Sun),
        _ => None,
    }
}
