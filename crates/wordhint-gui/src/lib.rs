//! wordhint GUI using eframe/egui
//!
//! Two screens: the job form and the settings page. Host calls run on a
//! background tokio runtime and report back through [`async_bridge`].

pub mod app;
pub mod async_bridge;
pub mod dialogs;
pub mod host;
pub mod job_form;
pub mod settings_form;
pub mod state;
pub mod theme;
pub mod widgets;

#[cfg(test)]
mod testing;

use std::sync::Arc;
use thiserror::Error;
use wordhint_core::{FileConfig, HostCapabilities, ThemeMode};

/// Failures that stop the GUI from starting.
#[derive(Debug, Error)]
pub enum GuiError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("GUI error: {0}")]
    Eframe(String),
}

/// How the GUI should start.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub config: FileConfig,
    pub capabilities: HostCapabilities,
    /// Forces the initial theme instead of restoring the persisted one.
    pub theme: Option<ThemeMode>,
}

/// Main entry point for the GUI
pub fn run(options: LaunchOptions) -> Result<(), GuiError> {
    let async_bridge = async_bridge::AsyncBridge::new()?;
    let host = Arc::new(host::ShellHost::from_config(&options.config));
    let theme = theme::ThemeContext::new(options.theme.unwrap_or_default());
    let restore_theme = options.theme.is_none();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([options.config.ui.window_width, options.config.ui.window_height])
            .with_min_inner_size([480.0, 420.0])
            .with_resizable(true)
            .with_title("Wordhint"),
        ..Default::default()
    };

    eframe::run_native(
        "Wordhint",
        native_options,
        Box::new(move |_cc| {
            Ok(Box::new(app::WordhintApp::new(
                async_bridge,
                host,
                options.capabilities,
                theme,
                restore_theme,
            )))
        }),
    )
    .map_err(|e| GuiError::Eframe(e.to_string()))
}
