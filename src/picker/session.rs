// Picker session
// Binds a drag selection to a base calendar date and produces the applied
// time-range strings for the host form

use chrono::{Duration, NaiveDate};
use thiserror::Error;

use super::drag::{DragSelection, PointerEvent};
use super::grid::TimeSlotGrid;
use crate::utils::date;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("date must match the YYYY-MM-DD format")]
pub struct DateInputError;

/// The committed range as the host form receives it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedRange {
    pub date: String,
    pub start_clock: String,
    pub end_clock: String,
}

impl AppliedRange {
    pub fn start_datetime(&self) -> String {
        format!("{} {}", self.date, self.start_clock)
    }

    pub fn end_datetime(&self) -> String {
        format!("{} {}", self.date, self.end_clock)
    }
}

/// One open picking interaction: a drag selection plus the date sub-control.
///
/// Date changes never touch the selection indices; only the labels shown
/// with the committed range move to the new day.
#[derive(Debug, Clone)]
pub struct PickerSession {
    selection: DragSelection,
    base_date: NaiveDate,
    /// Free-text date field, edited directly by the UI.
    pub date_input: String,
}

impl PickerSession {
    /// Open a session seeded from whatever the form already holds.
    ///
    /// The base date is taken from the first field that parses; initial
    /// indices are the nearest slots to the parsed clock components, with
    /// `(0, 1)` as the fallback.
    pub fn from_form(start_text: &str, end_text: &str, slot_pixel_height: f32) -> Self {
        let grid = TimeSlotGrid::default();
        let base_date = date::detect_base_date(&[start_text, end_text]);

        let start_index = date::extract_clock(start_text)
            .map(|clock| grid.index_for_nearest(clock))
            .unwrap_or(0)
            .min(grid.slot_count() - 2);
        let end_index = date::extract_clock(end_text)
            .map(|clock| grid.index_for_nearest(clock))
            .unwrap_or(start_index + 1);

        Self {
            selection: DragSelection::with_initial(
                grid,
                slot_pixel_height,
                start_index,
                end_index,
            ),
            base_date,
            date_input: date::format_date(base_date),
        }
    }

    pub fn base_date(&self) -> NaiveDate {
        self.base_date
    }

    pub fn selection(&self) -> &DragSelection {
        &self.selection
    }

    pub fn pointer(&mut self, event: PointerEvent) {
        self.selection.handle(event);
    }

    /// Shift the bound date by whole days, using the text field as the
    /// starting point when it parses and today otherwise.
    pub fn shift_date(&mut self, delta_days: i64) {
        let current = date::parse_date(&self.date_input).unwrap_or_else(date::today);
        self.set_date(current + Duration::days(delta_days));
    }

    pub fn set_today(&mut self) {
        self.set_date(date::today());
    }

    /// Adopt the free-text date. On failure the previous date is retained
    /// and the error is reported to the caller.
    pub fn apply_date_input(&mut self) -> Result<(), DateInputError> {
        match date::parse_date(&self.date_input) {
            Some(parsed) => {
                self.set_date(parsed);
                Ok(())
            }
            None => Err(DateInputError),
        }
    }

    fn set_date(&mut self, new_date: NaiveDate) {
        self.base_date = new_date;
        self.date_input = date::format_date(new_date);
    }

    /// Human-readable summary shown under the grid while selecting.
    pub fn range_text(&self) -> String {
        let date = date::format_date(self.base_date);
        format!(
            "{} {} - {} {}",
            date,
            self.selection.start_label(),
            date,
            self.selection.end_label()
        )
    }

    pub fn applied_range(&self) -> AppliedRange {
        AppliedRange {
            date: date::format_date(self.base_date),
            start_clock: self.selection.start_label(),
            end_clock: self.selection.end_label(),
        }
    }
}
