use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = "wordhint";
const CONFIG_FILE_NAME: &str = "config.toml";
const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Result returned by [`load_config`], capturing the source and any non-fatal issues.
#[derive(Debug, Clone)]
pub struct ConfigLoadResult {
    pub config: FileConfig,
    pub warnings: Vec<String>,
    pub source: ConfigSource,
}

/// Indicates where the configuration was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// No persisted configuration was found or usable; defaults were synthesized.
    Default,
    /// Configuration was read from `config.toml`.
    File,
}

/// Errors that can occur when persisting configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Ser(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "IO error: {err}"),
            ConfigError::Ser(err) => write!(f, "TOML serialization error: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        Self::Ser(value)
    }
}

/// Disk-backed configuration schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default = "FileConfig::schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub host: HostConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            host: HostConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl FileConfig {
    const fn schema_version() -> u32 {
        CURRENT_SCHEMA_VERSION
    }
}

/// How the desktop host reaches the job engine and which shell features it offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostConfig {
    /// Program that runs conversion jobs. Receives the job as JSON on stdin.
    #[serde(default)]
    pub job_command: Option<String>,
    #[serde(default)]
    pub job_args: Vec<String>,
    #[serde(default = "HostConfig::default_file_dialog")]
    pub file_dialog: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            job_command: None,
            job_args: Vec::new(),
            file_dialog: true,
        }
    }
}

impl HostConfig {
    const fn default_file_dialog() -> bool {
        true
    }
}

/// Window geometry for the GUI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "UiConfig::default_window_width")]
    pub window_width: f32,
    #[serde(default = "UiConfig::default_window_height")]
    pub window_height: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: Self::default_window_width(),
            window_height: Self::default_window_height(),
        }
    }
}

impl UiConfig {
    const fn default_window_width() -> f32 {
        720.0
    }

    const fn default_window_height() -> f32 {
        640.0
    }
}

/// Path to the configuration directory.
pub fn config_directory() -> PathBuf {
    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// Path to `config.toml`.
pub fn config_path() -> PathBuf {
    config_directory().join(CONFIG_FILE_NAME)
}

/// Load the configuration from the default location, falling back to defaults.
pub fn load_config() -> ConfigLoadResult {
    load_config_from(&config_path())
}

/// Load the configuration from `path`, falling back to defaults on any problem.
pub fn load_config_from(path: &Path) -> ConfigLoadResult {
    let mut warnings = Vec::new();

    if path.exists() {
        match fs::read_to_string(path) {
            Ok(raw) => match toml::from_str::<FileConfig>(&raw) {
                Ok(cfg) => {
                    let (cfg, mut sanitize_warnings) = sanitize_config(cfg);
                    warnings.append(&mut sanitize_warnings);
                    return ConfigLoadResult {
                        config: cfg,
                        warnings,
                        source: ConfigSource::File,
                    };
                }
                Err(err) => {
                    warnings.push(format!(
                        "Failed to parse {} as TOML: {}. Falling back to defaults.",
                        path.display(),
                        err
                    ));
                }
            },
            Err(err) => {
                warnings.push(format!(
                    "Failed to read {}: {}. Falling back to defaults.",
                    path.display(),
                    err
                ));
            }
        }
    }

    ConfigLoadResult {
        config: FileConfig::default(),
        warnings,
        source: ConfigSource::Default,
    }
}

/// Persist the configuration as pretty TOML, creating parent directories.
pub fn save_config_to(config: &FileConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(config)?;
    fs::write(path, serialized)?;
    Ok(())
}

fn sanitize_config(mut config: FileConfig) -> (FileConfig, Vec<String>) {
    let mut warnings = Vec::new();

    if config.schema_version != CURRENT_SCHEMA_VERSION {
        warnings.push(format!(
            "Unknown schema_version {}; treating as {}.",
            config.schema_version, CURRENT_SCHEMA_VERSION
        ));
        config.schema_version = CURRENT_SCHEMA_VERSION;
    }

    if let Some(command) = config.host.job_command.as_ref() {
        if command.trim().is_empty() {
            warnings.push("host.job_command is empty; job submission disabled.".to_string());
            config.host.job_command = None;
        }
    }

    let defaults = UiConfig::default();
    if !(config.ui.window_width.is_finite() && config.ui.window_width >= 320.0) {
        warnings.push(format!(
            "ui.window_width {} is invalid; reset to {}.",
            config.ui.window_width, defaults.window_width
        ));
        config.ui.window_width = defaults.window_width;
    }
    if !(config.ui.window_height.is_finite() && config.ui.window_height >= 240.0) {
        warnings.push(format!(
            "ui.window_height {} is invalid; reset to {}.",
            config.ui.window_height, defaults.window_height
        ));
        config.ui.window_height = defaults.window_height;
    }

    (config, warnings)
}
