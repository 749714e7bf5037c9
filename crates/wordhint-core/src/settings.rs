//! Persisted application settings and the JSON file that backs them.

use crate::bridge::HostError;
use crate::config::config_directory;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

const SETTINGS_FILE_NAME: &str = "settings.json";

pub const DARK_THEME: &str = "dark";
pub const LIGHT_THEME: &str = "light";

/// Settings shape exchanged with the host: `{"theme": "dark" | "light"}`.
///
/// The theme is kept as a free string; unknown values are stored and returned
/// as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSetting {
    pub theme: String,
}

impl AppSetting {
    pub fn new(theme: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
        }
    }

    /// Typed view of the theme, `None` for unrecognised values.
    pub fn theme_mode(&self) -> Option<ThemeMode> {
        ThemeMode::from_setting(&self.theme)
    }
}

impl Default for AppSetting {
    fn default() -> Self {
        Self::new(LIGHT_THEME)
    }
}

/// Display mode of the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Dark,
    #[default]
    Light,
}

impl ThemeMode {
    pub fn from_setting(value: &str) -> Option<Self> {
        match value {
            DARK_THEME => Some(ThemeMode::Dark),
            LIGHT_THEME => Some(ThemeMode::Light),
            _ => None,
        }
    }

    pub fn as_setting(self) -> &'static str {
        match self {
            ThemeMode::Dark => DARK_THEME,
            ThemeMode::Light => LIGHT_THEME,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

/// Path to `settings.json` in the default configuration directory.
pub fn settings_path() -> PathBuf {
    config_directory().join(SETTINGS_FILE_NAME)
}

/// JSON file store for [`AppSetting`].
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store rooted at the default configuration directory.
    pub fn default_location() -> Self {
        Self::new(settings_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted settings. A missing file yields the defaults.
    pub fn load(&self) -> Result<AppSetting, HostError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No settings file, using defaults");
                Ok(AppSetting::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn save(&self, setting: &AppSetting) -> Result<(), HostError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let serialized = serde_json::to_string_pretty(setting)?;
        fs::write(&self.path, serialized)?;
        debug!(path = %self.path.display(), theme = %setting.theme, "Settings written");
        Ok(())
    }
}
