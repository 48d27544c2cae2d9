// Time-range dialog
// egui window around the pure picker core: a date row, the painted slot
// column, and OK/Cancel. All selection logic lives in `crate::picker`.

use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke};

use crate::picker::{AppliedRange, PickerSession, PointerEvent};

pub const SLOT_HEIGHT: f32 = 14.0;
const CANVAS_WIDTH: f32 = 520.0;
const LABEL_GUTTER: f32 = 60.0;
const RIGHT_MARGIN: f32 = 10.0;
const CANVAS_MAX_HEIGHT: f32 = 420.0;

pub enum DialogAction {
    None,
    Apply(AppliedRange),
    Cancel,
}

pub struct TimeRangeDialog {
    session: PickerSession,
    date_error: Option<String>,
}

impl TimeRangeDialog {
    /// Open the dialog seeded from the host form's current start/end text.
    pub fn new(start_text: &str, end_text: &str) -> Self {
        Self {
            session: PickerSession::from_form(start_text, end_text, SLOT_HEIGHT),
            date_error: None,
        }
    }

    pub fn show(&mut self, ctx: &egui::Context) -> DialogAction {
        let mut action = DialogAction::None;

        egui::Window::new("Pick Time Range")
            .id(egui::Id::new("time_range_dialog"))
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                self.date_row(ui);

                if let Some(error) = &self.date_error {
                    ui.colored_label(Color32::RED, error);
                }

                egui::ScrollArea::vertical()
                    .max_height(CANVAS_MAX_HEIGHT)
                    .show(ui, |ui| {
                        self.slot_canvas(ui);
                    });

                ui.add_space(6.0);
                ui.label(self.session.range_text());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("OK").clicked() {
                        action = DialogAction::Apply(self.session.applied_range());
                    }
                    if ui.button("Cancel").clicked() {
                        action = DialogAction::Cancel;
                    }
                });
            });

        action
    }

    fn date_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Date (YYYY-MM-DD)");
            ui.add(egui::TextEdit::singleline(&mut self.session.date_input).desired_width(100.0));
            if ui.button("Previous day").clicked() {
                self.session.shift_date(-1);
                self.date_error = None;
            }
            if ui.button("Today").clicked() {
                self.session.set_today();
                self.date_error = None;
            }
            if ui.button("Next day").clicked() {
                self.session.shift_date(1);
                self.date_error = None;
            }
            if ui.button("Apply date").clicked() {
                self.date_error = self
                    .session
                    .apply_date_input()
                    .err()
                    .map(|error| error.to_string());
            }
        });
    }

    fn slot_canvas(&mut self, ui: &mut egui::Ui) {
        let grid = self.session.selection().grid().clone();
        let canvas_height = grid.slot_count() as f32 * SLOT_HEIGHT;
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(CANVAS_WIDTH, canvas_height),
            Sense::click_and_drag(),
        );

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, Color32::from_gray(247));

        // Hour lines and labels, matching the grid's step
        for index in 0..grid.slot_count() {
            let label = grid.label_at(index);
            if !label.ends_with(":00") {
                continue;
            }
            let y = rect.top() + index as f32 * SLOT_HEIGHT;
            painter.line_segment(
                [
                    Pos2::new(rect.left() + LABEL_GUTTER, y),
                    Pos2::new(rect.right() - RIGHT_MARGIN, y),
                ],
                Stroke::new(1.0, Color32::from_gray(204)),
            );
            painter.text(
                Pos2::new(rect.left() + LABEL_GUTTER - 20.0, y),
                Align2::RIGHT_CENTER,
                label,
                FontId::proportional(11.0),
                Color32::DARK_GRAY,
            );
        }

        // Forward pointer events to the state machine
        if let Some(pos) = response.interact_pointer_pos() {
            let y = pos.y - rect.top();
            if response.drag_started() {
                self.session.pointer(PointerEvent::Press { y });
            } else if response.dragged() {
                self.session.pointer(PointerEvent::Move { y });
            } else if response.clicked() {
                self.session.pointer(PointerEvent::Press { y });
                self.session.pointer(PointerEvent::Release);
            }
        }
        if response.drag_stopped() {
            self.session.pointer(PointerEvent::Release);
        }

        // Selection rectangle
        let selection = self.session.selection();
        let start_y = rect.top() + selection.start_index() as f32 * SLOT_HEIGHT;
        let end_y = rect.top() + selection.end_index() as f32 * SLOT_HEIGHT;
        painter.rect(
            Rect::from_min_max(
                Pos2::new(rect.left() + LABEL_GUTTER, start_y),
                Pos2::new(rect.right() - RIGHT_MARGIN, end_y),
            ),
            0.0,
            Color32::from_rgba_unmultiplied(205, 233, 255, 160),
            Stroke::new(2.0, Color32::from_rgb(74, 144, 226)),
        );
    }
}
