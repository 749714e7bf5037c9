//! Process-wide display mode, handed to every screen that can change it.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use wordhint_core::ThemeMode;

/// Shared dark/light flag.
///
/// Cloning yields another handle to the same flag. The app applies it to the
/// egui context every frame.
#[derive(Debug, Clone, Default)]
pub struct ThemeContext {
    dark: Arc<AtomicBool>,
}

impl ThemeContext {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            dark: Arc::new(AtomicBool::new(mode.is_dark())),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        if self.is_dark() {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        self.dark.load(Ordering::Relaxed)
    }

    pub fn set(&self, mode: ThemeMode) {
        self.dark.store(mode.is_dark(), Ordering::Relaxed);
    }

    /// Apply a persisted theme string. Unknown values leave the mode unchanged.
    pub fn apply_setting(&self, theme: &str) -> bool {
        match ThemeMode::from_setting(theme) {
            Some(mode) => {
                self.set(mode);
                true
            }
            None => false,
        }
    }

    /// Push the current mode into egui.
    pub fn apply(&self, ctx: &egui::Context) {
        let visuals = match self.mode() {
            ThemeMode::Dark => egui::Visuals::dark(),
            ThemeMode::Light => egui::Visuals::light(),
        };
        ctx.set_visuals(visuals);
    }
}
