mod app;
mod time_range_dialog;

pub use app::ScheduleCsvApp;
