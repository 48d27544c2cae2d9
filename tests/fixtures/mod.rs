// Shared test fixtures for integration tests
#![allow(dead_code)]

use schedule_csv_builder::models::entry::{OfficeHourEntry, ScheduleEntry};
use schedule_csv_builder::models::form::{OfficeHourForm, ScheduleForm};

pub fn schedule_entry(event_name: &str, weekday: &str) -> ScheduleEntry {
    ScheduleEntry {
        event_name: event_name.to_string(),
        location: "Hall B".to_string(),
        description: String::new(),
        weekday: weekday.to_string(),
        start_time: "2024-03-05 09:00".to_string(),
        end_time: "2024-03-05 10:30".to_string(),
        is_course: "1".to_string(),
    }
}

pub fn office_hour_entry(professor_name: &str) -> OfficeHourEntry {
    OfficeHourEntry {
        professor_name: professor_name.to_string(),
        email: "lane@example.edu".to_string(),
        event_name: "Office Hour".to_string(),
        location: "Room 214".to_string(),
        description: "Drop in".to_string(),
        weekday: "4".to_string(),
        start_time: "2024-03-07 13:00".to_string(),
        end_time: "2024-03-07 15:00".to_string(),
    }
}

pub fn filled_schedule_form() -> ScheduleForm {
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

pub fn filled_office_hour_form() -> OfficeHourForm {
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
