//! UI widgets for the wordhint GUI

pub mod job_panel;
pub mod progress_display;
pub mod settings_panel;
