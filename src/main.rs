// Schedule CSV Builder
// Main entry point

use schedule_csv_builder::ui_egui::ScheduleCsvApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Schedule CSV Builder");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 720.0])
            .with_min_inner_size([800.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Schedule CSV Builder",
        options,
        Box::new(|_cc| Ok(Box::new(ScheduleCsvApp::default()))),
    )
}
