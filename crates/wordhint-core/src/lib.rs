//! Core library for the wordhint front end: host contract, job model, settings
//! storage, configuration and logging.

pub mod bridge;
pub mod config;
pub mod job;
pub mod logging;
pub mod runner;
pub mod settings;

pub use bridge::{HostBridge, HostCapabilities, HostError, select_book};
pub use config::{
    ConfigError, ConfigLoadResult, ConfigSource, FileConfig, HostConfig, UiConfig,
    config_directory, config_path, load_config, load_config_from, save_config_to,
};
pub use job::{HintLevel, JobDraft, JobRequest, JobResult, Language, OutputFormat};
pub use logging::{LoggingDestination, LoggingError, init_logging};
pub use runner::ProcessJobRunner;
pub use settings::{AppSetting, SettingsStore, ThemeMode};
