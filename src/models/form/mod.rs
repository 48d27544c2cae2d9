// Form state models
// Caller-owned raw input for the two editors, fed to the validator as-is

use crate::models::entry::{OfficeHourEntry, ScheduleEntry};

/// Raw student-schedule form fields. Everything is a string until the
/// validator accepts it; `is_course` carries "0"/"1" from the checkbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleForm {
    pub event_name: String,
    pub location: String,
    pub description: String,
    pub weekday: String,
    pub start_time: String,
    pub end_time: String,
    pub is_course: String,
}

impl Default for ScheduleForm {
    fn default() -> Self {
        Self {
            event_name: String::new(),
            location: String::new(),
            description: String::new(),
            weekday: String::new(),
            start_time: String::new(),
            end_time: String::new(),
            is_course: "1".to_string(),
        }
    }
}

impl ScheduleForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Fill the form from a selected record so it can be edited in place.
    pub fn load(&mut self, entry: &ScheduleEntry) {
        self.event_name = entry.event_name.clone();
        self.location = entry.location.clone();
        self.description = entry.description.clone();
        self.weekday = entry.weekday.clone();
        self.start_time = entry.start_time.clone();
        self.end_time = entry.end_time.clone();
        self.is_course = entry.is_course.clone();
    }
}

/// Raw professor office-hours form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfficeHourForm {
    pub professor_name: String,
    pub email: String,
    pub event_name: String,
    pub location: String,
    pub description: String,
    pub weekday: String,
    pub start_time: String,
    pub end_time: String,
}

impl Default for OfficeHourForm {
    fn default() -> Self {
        Self {
            professor_name: String::new(),
            email: String::new(),
            event_name: "Office Hour".to_string(),
            location: String::new(),
            description: String::new(),
            weekday: String::new(),
            start_time: String::new(),
            end_time: String::new(),
        }
    }
}

impl OfficeHourForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn load(&mut self, entry: &OfficeHourEntry) {
        self.professor_name = entry.professor_name.clone();
        self.email = entry.email.clone();
        self.event_name = entry.event_name.clone();
        self.location = entry.location.clone();
        self.description = entry.description.clone();
        self.weekday = entry.weekday.clone();
        self.start_time = entry.start_time.clone();
        self.end_time = entry.end_time.clone();
    }
}
