// Record validation service
// Pure field/cross-field checks turning raw form input into canonical entries

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::models::entry::{OfficeHourEntry, ScheduleEntry};
use crate::models::form::{OfficeHourForm, ScheduleForm};
use crate::utils::date;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("weekday must be an integer between 1 and 7")]
    InvalidWeekday,
    #[error("{field} must match the YYYY-MM-DD HH:MM format")]
    MalformedDateTime { field: &'static str },
    #[error("start and end times must fall on the same day")]
    DateMismatch,
    #[error("end time must be after start time")]
    EndNotAfterStart,
    #[error("enter a valid email address")]
    InvalidEmail,
    #[error("IsCourse must be 0 or 1")]
    InvalidCourseFlag,
}

fn require<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed)
}

pub fn validate_weekday(value: &str) -> Result<u8, ValidationError> {
    value
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|weekday| (1..=7).contains(weekday))
        .ok_or(ValidationError::InvalidWeekday)
}

pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if EMAIL_REGEX.is_match(value.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

fn parse_time_field(
    value: &str,
    field: &'static str,
) -> Result<chrono::NaiveDateTime, ValidationError> {
    date::parse_datetime(value).ok_or(ValidationError::MalformedDateTime { field })
}

/// Validate a student schedule form and produce a canonical entry.
///
/// Rules run in order and stop at the first failure: required fields,
/// weekday range, time formats, same-day check, end-after-start, and the
/// 0/1 course flag. Every stored field is re-serialized through the
/// canonical formatters, so surface formatting (missing zero padding and
/// the like) never reaches the store.
pub fn validate_schedule(form: &ScheduleForm) -> Result<ScheduleEntry, ValidationError> {
    let event_name = require(&form.event_name, "EventName")?;
    let location = require(&form.location, "Location")?;
    require(&form.weekday, "Weekday")?;
    require(&form.start_time, "StartTime")?;
    require(&form.end_time, "EndTime")?;

    let weekday = validate_weekday(&form.weekday)?;
    let start = parse_time_field(&form.start_time, "StartTime")?;
    let end = parse_time_field(&form.end_time, "EndTime")?;
    if start.date() != end.date() {
        return Err(ValidationError::DateMismatch);
    }
    if end <= start {
        return Err(ValidationError::EndNotAfterStart);
    }

    let is_course = match form.is_course.trim() {
        "0" => "0",
        "1" => "1",
        _ => return Err(ValidationError::InvalidCourseFlag),
    };

    Ok(ScheduleEntry {
        event_name: event_name.to_string(),
        location: location.to_string(),
        description: form.description.trim().to_string(),
        weekday: weekday.to_string(),
        start_time: date::format_datetime(start),
        end_time: date::format_datetime(end),
        is_course: is_course.to_string(),
    })
}

/// Validate a professor office-hours form and produce a canonical entry.
pub fn validate_office_hour(form: &OfficeHourForm) -> Result<OfficeHourEntry, ValidationError> {
    let professor_name = require(&form.professor_name, "ProfessorName")?;
    let email = require(&form.email, "Email")?;
    let event_name = require(&form.event_name, "EventName")?;
    let location = require(&form.location, "Location")?;
    require(&form.weekday, "Weekday")?;
    require(&form.start_time, "StartTime")?;
    require(&form.end_time, "EndTime")?;

    let weekday = validate_weekday(&form.weekday)?;
    let start = parse_time_field(&form.start_time, "StartTime")?;
    let end = parse_time_field(&form.end_time, "EndTime")?;
    if start.date() != end.date() {
        return Err(ValidationError::DateMismatch);
    }
    if end <= start {
        return Err(ValidationError::EndNotAfterStart);
    }
    validate_email(email)?;

    Ok(OfficeHourEntry {
        professor_name: professor_name.to_string(),
        email: email.to_string(),
        event_name: event_name.to_string(),
        location: location.to_string(),
        description: form.description.trim().to_string(),
        weekday: weekday.to_string(),
        start_time: date::format_datetime(start),
        end_time: date::format_datetime(end),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_schedule_form() -> ScheduleForm {
        ScheduleForm {
            event_name: "Linear Algebra".to_string(),
            location: "Hall B".to_string(),
            description: String::new(),
            weekday: "2".to_string(),
            start_time: "2024-03-05 09:00".to_string(),
            end_time: "2024-03-05 10:30".to_string(),
            is_course: "1".to_string(),
        }
    }

    fn filled_office_hour_form() -> OfficeHourForm {
        OfficeHourForm {
            professor_name: "Dr. Lane".to_string(),
            email: "lane@example.edu".to_string(),
            event_name: "Office Hour".to_string(),
            location: "Room 214".to_string(),
            description: String::new(),
            weekday: "4".to_string(),
            start_time: "2024-03-07 13:00".to_string(),
            end_time: "2024-03-07 15:00".to_string(),
        }
    }

    #[test]
    fn test_valid_schedule_form_passes() {
        let entry = validate_schedule(&filled_schedule_form()).unwrap();
        assert_eq!(entry.weekday, "2");
        assert_eq!(entry.is_course, "1");
    }

    #[test]
    fn test_missing_required_field_reports_name() {
        let mut form = filled_schedule_form();
        form.location = "   ".to_string();
        assert_eq!(
            validate_schedule(&form),
            Err(ValidationError::MissingField("Location"))
        );
    }

    #[test]
    fn test_required_check_precedes_weekday_parse() {
        let mut form = filled_schedule_form();
        form.weekday = String::new();
        assert_eq!(
            validate_schedule(&form),
            Err(ValidationError::MissingField("Weekday"))
        );
    }

    #[test]
    fn test_inverted_times_rejected() {
        let mut form = filled_schedule_form();
        form.start_time = "2024-01-01 09:00".to_string();
        form.end_time = "2024-01-01 08:00".to_string();
        let err = validate_schedule(&form).unwrap_err();
        assert_eq!(err, ValidationError::EndNotAfterStart);
        assert_eq!(err.to_string(), "end time must be after start time");
    }

    #[test]
    fn test_equal_times_rejected() {
        let mut form = filled_schedule_form();
        form.end_time = form.start_time.clone();
        assert_eq!(
            validate_schedule(&form),
            Err(ValidationError::EndNotAfterStart)
        );
    }

    #[test]
    fn test_cross_day_range_rejected() {
        let mut form = filled_schedule_form();
        form.end_time = "2024-03-06 10:30".to_string();
        assert_eq!(validate_schedule(&form), Err(ValidationError::DateMismatch));
    }

    #[test]
    fn test_fields_are_canonicalized() {
        let mut form = filled_schedule_form();
        form.event_name = "  Linear Algebra  ".to_string();
        form.weekday = " 2 ".to_string();
        form.start_time = "2024-3-5 9:00".to_string();
        let entry = validate_schedule(&form).unwrap();
        assert_eq!(entry.event_name, "Linear Algebra");
        assert_eq!(entry.weekday, "2");
        assert_eq!(entry.start_time, "2024-03-05 09:00");
    }

    #[test]
    fn test_course_flag_must_be_binary() {
        let mut form = filled_schedule_form();
        form.is_course = "2".to_string();
        assert_eq!(
            validate_schedule(&form),
            Err(ValidationError::InvalidCourseFlag)
        );
        form.is_course = " 0 ".to_string();
        assert_eq!(validate_schedule(&form).unwrap().is_course, "0");
    }

    #[test]
    fn test_valid_office_hour_form_passes() {
        let entry = validate_office_hour(&filled_office_hour_form()).unwrap();
        assert_eq!(entry.email, "lane@example.edu");
    }

    #[test]
    fn test_bad_email_rejected_after_time_rules() {
        let mut form = filled_office_hour_form();
        form.email = "lane@example".to_string();
        form.end_time = "2024-03-07 12:00".to_string();
        // Time ordering fails before the email shape is checked.
        assert_eq!(
            validate_office_hour(&form),
            Err(ValidationError::EndNotAfterStart)
        );
        form.end_time = "2024-03-07 15:00".to_string();
        assert_eq!(
            validate_office_hour(&form),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_description_stays_optional() {
        let mut form = filled_schedule_form();
        form.description = String::new();
        assert!(validate_schedule(&form).is_ok());
    }
}
