// Time-slot grid
// Fixed-step partition of a 24-hour day into labeled slots

use chrono::{NaiveTime, Timelike};
use thiserror::Error;

pub const MINUTES_PER_DAY: u32 = 24 * 60;
pub const DEFAULT_STEP_MINUTES: u32 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridConfigError {
    #[error("slot step of {0} minutes must divide a 24-hour day evenly")]
    StepDoesNotDivideDay(u32),
}

/// Ordered partition of one day into `1440 / step` slots.
///
/// Labels are `"HH:MM"` strings from `00:00` up to but excluding `24:00`;
/// index `slot_count()` renders as `"24:00"` so an end boundary at midnight
/// can be displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlotGrid {
    step_minutes: u32,
    slot_count: usize,
}

impl TimeSlotGrid {
    pub fn new(step_minutes: u32) -> Result<Self, GridConfigError> {
        if step_minutes == 0 || MINUTES_PER_DAY % step_minutes != 0 {
            return Err(GridConfigError::StepDoesNotDivideDay(step_minutes));
        }
        Ok(Self {
            step_minutes,
            slot_count: (MINUTES_PER_DAY / step_minutes) as usize,
        })
    }

    pub fn step_minutes(&self) -> u32 {
        self.step_minutes
    }

    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Restartable sequence of slot labels in ascending order.
    pub fn labels(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.slot_count).map(move |idx| self.label_at(idx))
    }

    pub fn label_at(&self, index: usize) -> String {
        let minutes = index as u32 * self.step_minutes;
        format!("{:02}:{:02}", minutes / 60, minutes % 60)
    }

    /// Exact label lookup; `"09:15"` on a 30-minute grid is absent.
    pub fn index_for_clock(&self, label: &str) -> Option<usize> {
        self.labels().position(|candidate| candidate == label)
    }

    /// Slot whose start is closest to the given clock time.
    pub fn index_for_nearest(&self, time: NaiveTime) -> usize {
        let minutes = time.hour() * 60 + time.minute();
        let index = ((minutes as f64 / self.step_minutes as f64).round()) as usize;
        index.min(self.slot_count - 1)
    }

    /// Map a pointer y coordinate to a slot index, clamped to the grid.
    pub fn coordinate_to_index(&self, y: f32, slot_pixel_height: f32) -> usize {
        if slot_pixel_height <= 0.0 {
            return 0;
        }
        let index = (y / slot_pixel_height).floor().max(0.0) as usize;
        index.min(self.slot_count - 1)
    }
}

impl Default for TimeSlotGrid {
    fn default() -> Self {
        Self {
            step_minutes: DEFAULT_STEP_MINUTES,
            slot_count: (MINUTES_PER_DAY / DEFAULT_STEP_MINUTES) as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_has_48_slots() {
        let grid = TimeSlotGrid::default();
        assert_eq!(grid.slot_count(), 48);
        assert_eq!(grid.step_minutes(), 30);
    }

    #[test]
    fn test_step_must_divide_day() {
        assert_eq!(
            TimeSlotGrid::new(25),
            Err(GridConfigError::StepDoesNotDivideDay(25))
        );
        assert_eq!(
            TimeSlotGrid::new(0),
            Err(GridConfigError::StepDoesNotDivideDay(0))
        );
        assert!(TimeSlotGrid::new(15).is_ok());
        assert!(TimeSlotGrid::new(60).is_ok());
    }

    #[test]
    fn test_labels_are_strictly_increasing_and_exclude_midnight() {
        let grid = TimeSlotGrid::default();
        let labels: Vec<String> = grid.labels().collect();
        assert_eq!(labels.len(), 48);
        assert_eq!(labels.first().map(String::as_str), Some("00:00"));
        assert_eq!(labels.last().map(String::as_str), Some("23:30"));
        for pair in labels.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_labels_iterator_restarts() {
        let grid = TimeSlotGrid::default();
        assert_eq!(grid.labels().count(), 48);
        assert_eq!(grid.labels().count(), 48);
    }

    #[test]
    fn test_end_boundary_renders_midnight() {
        let grid = TimeSlotGrid::default();
        assert_eq!(grid.label_at(47), "23:30");
        assert_eq!(grid.label_at(48), "24:00");
    }

    #[test]
    fn test_index_for_clock_exact_only() {
        let grid = TimeSlotGrid::default();
        assert_eq!(grid.index_for_clock("00:00"), Some(0));
        assert_eq!(grid.index_for_clock("09:30"), Some(19));
        assert_eq!(grid.index_for_clock("09:15"), None);
        assert_eq!(grid.index_for_clock("24:00"), None);
        assert_eq!(grid.index_for_clock("9:30"), None);
    }

    #[test]
    fn test_index_for_nearest_rounds_to_step() {
        let grid = TimeSlotGrid::default();
        let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        assert_eq!(grid.index_for_nearest(t(9, 0)), 18);
        assert_eq!(grid.index_for_nearest(t(9, 14)), 18);
        assert_eq!(grid.index_for_nearest(t(9, 16)), 19);
        assert_eq!(grid.index_for_nearest(t(23, 59)), 47);
    }

    #[test]
    fn test_coordinate_to_index_floors_and_clamps() {
        let grid = TimeSlotGrid::default();
        assert_eq!(grid.coordinate_to_index(0.0, 14.0), 0);
        assert_eq!(grid.coordinate_to_index(13.9, 14.0), 0);
        assert_eq!(grid.coordinate_to_index(14.0, 14.0), 1);
        assert_eq!(grid.coordinate_to_index(-50.0, 14.0), 0);
        assert_eq!(grid.coordinate_to_index(100_000.0, 14.0), 47);
    }
}
