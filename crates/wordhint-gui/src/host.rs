//! Host services available when running as a desktop application

use crate::dialogs;
use tracing::{debug, warn};
use wordhint_core::{
    AppSetting, FileConfig, HostBridge, HostError, JobRequest, JobResult, ProcessJobRunner,
    SettingsStore,
};

/// Desktop host: native dialogs, JSON settings file, external job program.
#[derive(Debug, Clone)]
pub struct ShellHost {
    runner: ProcessJobRunner,
    settings: SettingsStore,
}

impl ShellHost {
    pub fn new(runner: ProcessJobRunner, settings: SettingsStore) -> Self {
        Self { runner, settings }
    }

    pub fn from_config(config: &FileConfig) -> Self {
        let runner = ProcessJobRunner::from_config(&config.host);
        if !runner.is_configured() {
            warn!("No job command configured, submissions will fail");
        }
        Self::new(runner, SettingsStore::default_location())
    }
}

impl HostBridge for ShellHost {
    async fn submit_job(&self, request: JobRequest) -> Result<JobResult, HostError> {
        self.runner.run(&request).await
    }

    async fn open_file_dialog(&self, initial_path: String) -> Result<Option<String>, HostError> {
        // The dialog blocks its thread until closed
        let picked = tokio::task::spawn_blocking(move || dialogs::pick_book(&initial_path))
            .await
            .map_err(|err| HostError::Dialog(err.to_string()))?;
        debug!(picked = ?picked, "File dialog closed");
        Ok(picked.map(|path| path.to_string_lossy().to_string()))
    }

    async fn save_settings(&self, setting: AppSetting) -> Result<(), HostError> {
        let store = self.settings.clone();
        tokio::task::spawn_blocking(move || store.save(&setting))
            .await
            .map_err(|err| HostError::Unavailable(err.to_string()))?
    }

    async fn get_settings(&self) -> Result<AppSetting, HostError> {
        let store = self.settings.clone();
        tokio::task::spawn_blocking(move || store.load())
            .await
            .map_err(|err| HostError::Unavailable(err.to_string()))?
    }
}
