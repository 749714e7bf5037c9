//! Settings screen: theme buttons and a raw read-out of the persisted settings

use crate::async_bridge::{AsyncBridge, UiEvent};
use crate::theme::ThemeContext;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use wordhint_core::{AppSetting, HostBridge, HostError};

pub struct SettingsForm<H> {
    host: Arc<H>,
    theme: ThemeContext,

    /// Serialized settings from the last successful read
    settings_text: String,

    reading: bool,

    /// Set once the user picks a theme; a late start-up restore is then dropped
    theme_chosen: bool,
}

impl<H: HostBridge> SettingsForm<H> {
    pub fn new(host: Arc<H>, theme: ThemeContext) -> Self {
        Self {
            host,
            theme,
            settings_text: String::new(),
            reading: false,
            theme_chosen: false,
        }
    }

    pub fn settings_text(&self) -> &str {
        &self.settings_text
    }

    pub fn is_reading(&self) -> bool {
        self.reading
    }

    pub fn theme(&self) -> &ThemeContext {
        &self.theme
    }

    /// Switch the display mode now and persist the choice in the background.
    ///
    /// The literal theme string is persisted even when it is not a known mode.
    /// A failed save is only logged and never reverts the display.
    pub fn apply_theme(&mut self, theme: &str, bridge: &AsyncBridge) {
        self.theme_chosen = true;
        if !self.theme.apply_setting(theme) {
            warn!(theme, "Unknown theme, display left unchanged");
        }

        let host = Arc::clone(&self.host);
        let setting = AppSetting::new(theme);
        bridge.spawn_detached(async move {
            let theme = setting.theme.clone();
            match host.save_settings(setting).await {
                Ok(()) => info!(theme = %theme, "Settings saved"),
                Err(err) => error!(theme = %theme, error = %err, "Failed to save settings"),
            }
        });
    }

    /// Apply the theme read at start-up unless the user already chose one.
    ///
    /// Returns whether the display changed.
    pub fn restore_theme(&mut self, outcome: Result<AppSetting, HostError>) -> bool {
        if self.theme_chosen {
            debug!("Theme already chosen, start-up restore dropped");
            return false;
        }

        match outcome.map(|setting| (setting.theme_mode(), setting)) {
            Ok((Some(mode), setting)) => {
                self.theme.set(mode);
                info!(theme = %setting.theme, "Theme restored");
                true
            }
            Ok((None, setting)) => {
                warn!(theme = %setting.theme, "Persisted theme not recognised");
                false
            }
            Err(err) => {
                warn!(error = %err, "Could not read persisted theme");
                false
            }
        }
    }

    pub fn read_settings(&mut self, bridge: &AsyncBridge) {
        self.reading = true;
        let host = Arc::clone(&self.host);
        bridge.spawn_event(async move { UiEvent::SettingsRead(host.get_settings().await) });
    }

    pub fn finish_read(&mut self, outcome: Result<AppSetting, HostError>) {
        self.reading = false;
        match outcome.and_then(|setting| Ok(serde_json::to_string(&setting)?)) {
            Ok(text) => {
                info!(settings = %text, "Settings read");
                self.settings_text = text;
            }
            Err(err) => error!(error = %err, "Failed to read settings"),
        }
    }
}
