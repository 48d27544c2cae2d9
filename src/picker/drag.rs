// Drag selection state machine
// Consumes pointer events against a slot grid, yields a committed range

use super::grid::TimeSlotGrid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Selecting,
    Committed,
}

/// Pointer input with the y coordinate relative to the grid's top edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press { y: f32 },
    Move { y: f32 },
    Release,
}

/// Interaction state for one picking session.
///
/// Invariant: `start_index < end_index`, `start_index <= slot_count - 2`
/// and `end_index <= slot_count - 1` at all times, so the selection always
/// spans at least one slot. Dragging below the anchor re-anchors the start
/// instead of producing an inverted range.
#[derive(Debug, Clone)]
pub struct DragSelection {
    grid: TimeSlotGrid,
    slot_pixel_height: f32,
    phase: DragPhase,
    start_index: usize,
    end_index: usize,
}

impl DragSelection {
    pub fn new(grid: TimeSlotGrid, slot_pixel_height: f32) -> Self {
        Self {
            grid,
            slot_pixel_height,
            phase: DragPhase::Idle,
            start_index: 0,
            end_index: 1,
        }
    }

    /// Start from indices recovered from earlier form input.
    pub fn with_initial(
        grid: TimeSlotGrid,
        slot_pixel_height: f32,
        start_index: usize,
        end_index: usize,
    ) -> Self {
        let count = grid.slot_count();
        let start = start_index.min(count - 2);
        let end = end_index.clamp(start + 1, count - 1);
        Self {
            grid,
            slot_pixel_height,
            phase: DragPhase::Idle,
            start_index: start,
            end_index: end,
        }
    }

    pub fn grid(&self) -> &TimeSlotGrid {
        &self.grid
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    pub fn end_index(&self) -> usize {
        self.end_index
    }

    pub fn start_label(&self) -> String {
        self.grid.label_at(self.start_index)
    }

    pub fn end_label(&self) -> String {
        self.grid.label_at(self.end_index)
    }

    pub fn handle(&mut self, event: PointerEvent) {
        let count = self.grid.slot_count();
        match event {
            PointerEvent::Press { y } => {
                let index = self
                    .grid
                    .coordinate_to_index(y, self.slot_pixel_height)
                    .min(count - 2);
                self.start_index = index;
                self.end_index = index + 1;
                self.phase = DragPhase::Selecting;
            }
            PointerEvent::Move { y } => {
                if self.phase != DragPhase::Selecting {
                    return;
                }
                let index = self.grid.coordinate_to_index(y, self.slot_pixel_height);
                if index <= self.start_index {
                    // Reversed drag: the pointer moved above the anchor.
                    self.start_index = index.min(count - 2);
                    self.end_index = self.start_index + 1;
                } else {
                    self.end_index = index;
                    if self.end_index <= self.start_index {
                        self.end_index = self.start_index + 1;
                    }
                }
            }
            PointerEvent::Release => {
                if self.phase == DragPhase::Selecting {
                    self.phase = DragPhase::Committed;
                }
            }
        }
    }
}
