// Application shell
// Two dataset tabs sharing the same form / table / export-path layout.
// The UI owns the selected-index tracking; the stores never infer it.

use egui::Color32;

use crate::models::entry::{CsvRecord, OfficeHourEntry, ScheduleEntry};
use crate::models::form::{OfficeHourForm, ScheduleForm};
use crate::picker::AppliedRange;
use crate::services::csv::{export_records, import_records};
use crate::services::store::RecordStore;
use crate::services::validation::{validate_office_hour, validate_schedule};
use crate::ui_egui::time_range_dialog::{DialogAction, TimeRangeDialog};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DatasetTab {
    StudentSchedule,
    OfficeHours,
}

/// Which form the time-range dialog writes back into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PickerTarget {
    Student,
    Professor,
}

struct StatusMessage {
    text: String,
    is_error: bool,
}

pub struct ScheduleCsvApp {
    active_tab: DatasetTab,
    student_form: ScheduleForm,
    professor_form: OfficeHourForm,
    student_store: RecordStore<ScheduleEntry>,
    professor_store: RecordStore<OfficeHourEntry>,
    selected_student: Option<usize>,
    selected_professor: Option<usize>,
    student_path: String,
    professor_path: String,
    status: Option<StatusMessage>,
    picker: Option<(PickerTarget, TimeRangeDialog)>,
}

impl Default for ScheduleCsvApp {
    fn default() -> Self {
        Self {
            active_tab: DatasetTab::StudentSchedule,
            student_form: ScheduleForm::default(),
            professor_form: OfficeHourForm::default(),
            student_store: RecordStore::new(),
            professor_store: RecordStore::new(),
            selected_student: None,
            selected_professor: None,
            student_path: default_output_path(ScheduleEntry::DEFAULT_FILE_NAME),
            professor_path: default_output_path(OfficeHourEntry::DEFAULT_FILE_NAME),
            status: None,
            picker: None,
        }
    }
}

fn default_output_path(file_name: &str) -> String {
    std::env::current_dir()
        .map(|dir| dir.join(file_name).display().to_string())
        .unwrap_or_else(|_| file_name.to_string())
}

impl eframe::App for ScheduleCsvApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.menu_bar(ctx);
        self.tab_bar(ctx);
        self.status_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| match self.active_tab {
            DatasetTab::StudentSchedule => self.student_tab(ui),
            DatasetTab::OfficeHours => self.professor_tab(ui),
        });

        self.picker_window(ctx);
    }
}

impl ScheduleCsvApp {
    fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: false,
        });
    }

    fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: true,
        });
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        let mut import_student = false;
        let mut export_student = false;
        let mut import_professor = false;
        let mut export_professor = false;

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Student CSV").clicked() {
                        import_student = true;
                        ui.close_menu();
                    }
                    if ui.button("Export Student CSV").clicked() {
                        export_student = true;
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Open Professor CSV").clicked() {
                        import_professor = true;
                        ui.close_menu();
                    }
                    if ui.button("Export Professor CSV").clicked() {
                        export_professor = true;
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        if import_student {
            self.import_student();
        }
        if export_student {
            self.export_student();
        }
        if import_professor {
            self.import_professor();
        }
        if export_professor {
            self.export_professor();
        }
    }

    fn tab_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(
                    &mut self.active_tab,
                    DatasetTab::StudentSchedule,
                    "Student Schedule",
                );
                ui.selectable_value(
                    &mut self.active_tab,
                    DatasetTab::OfficeHours,
                    "Professor Office Hours",
                );
            });
        });
    }

    fn status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            if let Some(status) = &self.status {
                let color = if status.is_error {
                    Color32::RED
                } else {
                    ui.visuals().text_color()
                };
                ui.colored_label(color, &status.text);
            } else {
                ui.label("Ready");
            }
        });
    }

    // ----- student tab -----

    fn student_tab(&mut self, ui: &mut egui::Ui) {
        egui::SidePanel::left("student_form")
            .resizable(false)
            .default_width(280.0)
            .show_inside(ui, |ui| {
                self.student_form_panel(ui);
            });

        egui::TopBottomPanel::bottom("student_export_row").show_inside(ui, |ui| {
            self.student_export_row(ui);
        });

        egui::CentralPanel::default().show_inside(ui, |ui| {
            self.student_table(ui);
        });
    }

    fn student_form_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Schedule Entry");
        labeled_field(ui, "Event name", &mut self.student_form.event_name);
        labeled_field(ui, "Location", &mut self.student_form.location);
        labeled_field(
            ui,
            "Description (optional)",
            &mut self.student_form.description,
        );
        labeled_field(ui, "Weekday (1-7)", &mut self.student_form.weekday);
        labeled_field(
            ui,
            "Start time (YYYY-MM-DD HH:MM)",
            &mut self.student_form.start_time,
        );
        labeled_field(
            ui,
            "End time (YYYY-MM-DD HH:MM)",
            &mut self.student_form.end_time,
        );

        if ui.button("Drag to pick time range").clicked() {
            self.picker = Some((
                PickerTarget::Student,
                TimeRangeDialog::new(&self.student_form.start_time, &self.student_form.end_time),
            ));
        }

        let mut is_course = self.student_form.is_course.trim() == "1";
        if ui.checkbox(&mut is_course, "Course (IsCourse)").changed() {
            self.student_form.is_course = if is_course { "1" } else { "0" }.to_string();
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Save / Update").clicked() {
                self.save_student();
            }
            if ui.button("Delete Selected").clicked() {
                self.delete_student();
            }
            if ui.button("Clear Form").clicked() {
                self.student_form.clear();
                self.selected_student = None;
            }
        });
    }

    fn student_table(&mut self, ui: &mut egui::Ui) {
        let mut clicked: Option<usize> = None;
        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Grid::new("student_table")
                    .striped(true)
                    .min_col_width(90.0)
                    .show(ui, |ui| {
                        for column in ScheduleEntry::COLUMNS {
                            ui.strong(*column);
                        }
                        ui.end_row();

                        for (index, entry) in self.student_store.all().iter().enumerate() {
                            let selected = self.selected_student == Some(index);
                            for value in entry.to_fields() {
                                if ui.selectable_label(selected, value).clicked() {
                                    clicked = Some(index);
                                }
                            }
                            ui.end_row();
                        }
                    });
            });

        if let Some(index) = clicked {
            if let Some(entry) = self.student_store.get(index).cloned() {
                self.student_form.load(&entry);
                self.selected_student = Some(index);
            }
        }
    }

    fn student_export_row(&mut self, ui: &mut egui::Ui) {
        let mut export = false;
        let mut import = false;
        ui.horizontal(|ui| {
            ui.label("Output path");
            ui.add(egui::TextEdit::singleline(&mut self.student_path).desired_width(320.0));
            if ui.button("Choose Directory").clicked() {
                if let Some(dir) = rfd::FileDialog::new().pick_folder() {
                    self.student_path = dir
                        .join(ScheduleEntry::DEFAULT_FILE_NAME)
                        .display()
                        .to_string();
                }
            }
            if ui.button("Choose File").clicked() {
                if let Some(file) = rfd::FileDialog::new()
                    .add_filter("CSV", &["csv"])
                    .set_file_name(ScheduleEntry::DEFAULT_FILE_NAME)
                    .save_file()
                {
                    self.student_path = file.display().to_string();
                }
            }
            if ui.button("Export CSV").clicked() {
                export = true;
            }
            if ui.button("Open CSV").clicked() {
                import = true;
            }
        });
        if export {
            self.export_student();
        }
        if import {
            self.import_student();
        }
    }

    fn save_student(&mut self) {
        match validate_schedule(&self.student_form) {
            Ok(entry) => {
                let outcome = match self.selected_student {
                    Some(index) => self.student_store.replace(index, entry),
                    None => {
                        self.student_store.append(entry);
                        Ok(())
                    }
                };
                match outcome {
                    Ok(()) => {
                        self.student_form.clear();
                        self.selected_student = None;
                        self.set_status(format!(
                            "saved; {} schedule records",
                            self.student_store.len()
                        ));
                    }
                    Err(error) => self.set_error(error.to_string()),
                }
            }
            Err(error) => self.set_error(error.to_string()),
        }
    }

    fn delete_student(&mut self) {
        let Some(index) = self.selected_student else {
            self.set_error("select a schedule record to delete first");
            return;
        };
        match self.student_store.remove_at(index) {
            Ok(_) => {
                self.selected_student = None;
                self.student_form.clear();
                self.set_status("record deleted");
            }
            Err(error) => self.set_error(error.to_string()),
        }
    }

    fn export_student(&mut self) {
        match export_records(self.student_store.all(), &self.student_path) {
            Ok(path) => {
                self.student_path = path.display().to_string();
                self.set_status(format!(
                    "saved {} schedule records to {}",
                    self.student_store.len(),
                    path.display()
                ));
            }
            Err(error) => self.set_error(error.to_string()),
        }
    }

    fn import_student(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .pick_file()
        else {
            return;
        };
        match import_records::<ScheduleEntry>(&path) {
            Ok(records) => {
                let count = records.len();
                self.student_store.replace_all(records);
                self.selected_student = None;
                self.student_form.clear();
                self.student_path = path.display().to_string();
                self.set_status(format!(
                    "loaded {} schedule records from {}",
                    count,
                    path.display()
                ));
            }
            Err(error) => self.set_error(error.to_string()),
        }
    }

    // ----- professor tab -----

    fn professor_tab(&mut self, ui: &mut egui::Ui) {
        egui::SidePanel::left("professor_form")
            .resizable(false)
            .default_width(280.0)
            .show_inside(ui, |ui| {
                self.professor_form_panel(ui);
            });

        egui::TopBottomPanel::bottom("professor_export_row").show_inside(ui, |ui| {
            self.professor_export_row(ui);
        });

        egui::CentralPanel::default().show_inside(ui, |ui| {
            self.professor_table(ui);
        });
    }

    fn professor_form_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Office Hour Entry");
        labeled_field(
            ui,
            "Professor name",
            &mut self.professor_form.professor_name,
        );
        labeled_field(ui, "Email", &mut self.professor_form.email);
        labeled_field(ui, "Event name", &mut self.professor_form.event_name);
        labeled_field(ui, "Location", &mut self.professor_form.location);
        labeled_field(
            ui,
            "Description (optional)",
            &mut self.professor_form.description,
        );
        labeled_field(ui, "Weekday (1-7)", &mut self.professor_form.weekday);
        labeled_field(
            ui,
            "Start time (YYYY-MM-DD HH:MM)",
            &mut self.professor_form.start_time,
        );
        labeled_field(
            ui,
            "End time (YYYY-MM-DD HH:MM)",
            &mut self.professor_form.end_time,
        );

        if ui.button("Drag to pick time range").clicked() {
            self.picker = Some((
                PickerTarget::Professor,
                TimeRangeDialog::new(
                    &self.professor_form.start_time,
                    &self.professor_form.end_time,
                ),
            ));
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Save / Update").clicked() {
                self.save_professor();
            }
            if ui.button("Delete Selected").clicked() {
                self.delete_professor();
            }
            if ui.button("Clear Form").clicked() {
                self.professor_form.clear();
                self.selected_professor = None;
            }
        });
    }

    fn professor_table(&mut self, ui: &mut egui::Ui) {
        let mut clicked: Option<usize> = None;
        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Grid::new("professor_table")
                    .striped(true)
                    .min_col_width(90.0)
                    .show(ui, |ui| {
                        for column in OfficeHourEntry::COLUMNS {
                            ui.strong(*column);
                        }
                        ui.end_row();

                        for (index, entry) in self.professor_store.all().iter().enumerate() {
                            let selected = self.selected_professor == Some(index);
                            for value in entry.to_fields() {
                                if ui.selectable_label(selected, value).clicked() {
                                    clicked = Some(index);
                                }
                            }
                            ui.end_row();
                        }
                    });
            });

        if let Some(index) = clicked {
            if let Some(entry) = self.professor_store.get(index).cloned() {
                self.professor_form.load(&entry);
                self.selected_professor = Some(index);
            }
        }
    }

    fn professor_export_row(&mut self, ui: &mut egui::Ui) {
        let mut export = false;
        let mut import = false;
        ui.horizontal(|ui| {
            ui.label("Output path");
            ui.add(egui::TextEdit::singleline(&mut self.professor_path).desired_width(320.0));
            if ui.button("Choose Directory").clicked() {
                if let Some(dir) = rfd::FileDialog::new().pick_folder() {
                    self.professor_path = dir
                        .join(OfficeHourEntry::DEFAULT_FILE_NAME)
                        .display()
                        .to_string();
                }
            }
            if ui.button("Choose File").clicked() {
                if let Some(file) = rfd::FileDialog::new()
                    .add_filter("CSV", &["csv"])
                    .set_file_name(OfficeHourEntry::DEFAULT_FILE_NAME)
                    .save_file()
                {
                    self.professor_path = file.display().to_string();
                }
            }
            if ui.button("Export CSV").clicked() {
                export = true;
            }
            if ui.button("Open CSV").clicked() {
                import = true;
            }
        });
        if export {
            self.export_professor();
        }
        if import {
            self.import_professor();
        }
    }

    fn save_professor(&mut self) {
        match validate_office_hour(&self.professor_form) {
            Ok(entry) => {
                let outcome = match self.selected_professor {
                    Some(index) => self.professor_store.replace(index, entry),
                    None => {
                        self.professor_store.append(entry);
                        Ok(())
                    }
                };
                match outcome {
                    Ok(()) => {
                        self.professor_form.clear();
                        self.selected_professor = None;
                        self.set_status(format!(
                            "saved; {} office-hour records",
                            self.professor_store.len()
                        ));
                    }
                    Err(error) => self.set_error(error.to_string()),
                }
            }
            Err(error) => self.set_error(error.to_string()),
        }
    }

    fn delete_professor(&mut self) {
        let Some(index) = self.selected_professor else {
            self.set_error("select an office-hour record to delete first");
            return;
        };
        match self.professor_store.remove_at(index) {
            Ok(_) => {
                self.selected_professor = None;
                self.professor_form.clear();
                self.set_status("record deleted");
            }
            Err(error) => self.set_error(error.to_string()),
        }
    }

    fn export_professor(&mut self) {
        match export_records(self.professor_store.all(), &self.professor_path) {
            Ok(path) => {
                self.professor_path = path.display().to_string();
                self.set_status(format!(
                    "saved {} office-hour records to {}",
                    self.professor_store.len(),
                    path.display()
                ));
            }
            Err(error) => self.set_error(error.to_string()),
        }
    }

    fn import_professor(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .pick_file()
        else {
            return;
        };
        match import_records::<OfficeHourEntry>(&path) {
            Ok(records) => {
                let count = records.len();
                self.professor_store.replace_all(records);
                self.selected_professor = None;
                self.professor_form.clear();
                self.professor_path = path.display().to_string();
                self.set_status(format!(
                    "loaded {} office-hour records from {}",
                    count,
                    path.display()
                ));
            }
            Err(error) => self.set_error(error.to_string()),
        }
    }

    // ----- time range dialog -----

    fn picker_window(&mut self, ctx: &egui::Context) {
        let mut applied: Option<(PickerTarget, AppliedRange)> = None;
        let mut close = false;

        if let Some((target, dialog)) = self.picker.as_mut() {
            match dialog.show(ctx) {
                DialogAction::Apply(range) => {
                    applied = Some((*target, range));
                    close = true;
                }
                DialogAction::Cancel => close = true,
                DialogAction::None => {}
            }
        }

        if close {
            self.picker = None;
        }
        if let Some((target, range)) = applied {
            match target {
                PickerTarget::Student => {
                    self.student_form.start_time = range.start_datetime();
                    self.student_form.end_time = range.end_datetime();
                }
                PickerTarget::Professor => {
                    self.professor_form.start_time = range.start_datetime();
                    self.professor_form.end_time = range.end_datetime();
                }
            }
        }
    }
}

fn labeled_field(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.label(label);
    ui.add(egui::TextEdit::singleline(value).desired_width(f32::INFINITY));
    ui.add_space(4.0);
}
