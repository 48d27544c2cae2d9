// Time-range picker core
// Pure slot grid + drag state machine + picker session; no rendering here

pub mod drag;
pub mod grid;
pub mod session;

pub use drag::{DragPhase, DragSelection, PointerEvent};
pub use grid::TimeSlotGrid;
pub use session::{AppliedRange, PickerSession};
