//! Request/response contract between the front end and its host.
//!
//! Every call is one-shot: a single request, a single response, no streaming,
//! no cancellation and no ordering guarantee relative to other calls.

use crate::job::{JobRequest, JobResult};
use crate::settings::AppSetting;
use std::future::{self, Future};
use thiserror::Error;
use tracing::debug;

/// Failures reported by a host call.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("host service unavailable: {0}")]
    Unavailable(String),
    #[error("host I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed host payload: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("job exited with {status}: {stderr}")]
    JobFailed { status: String, stderr: String },
    #[error("file dialog failed: {0}")]
    Dialog(String),
}

/// Privileged host features available to the current UI context.
///
/// Decided once at start-up and handed to every component that needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Native file-open dialogs can be shown.
    pub file_dialog: bool,
}

impl HostCapabilities {
    pub const fn desktop_shell() -> Self {
        Self { file_dialog: true }
    }

    pub const fn headless() -> Self {
        Self { file_dialog: false }
    }
}

impl Default for HostCapabilities {
    fn default() -> Self {
        Self::desktop_shell()
    }
}

/// Services the host performs on behalf of the UI.
pub trait HostBridge: Send + Sync + 'static {
    /// Run a conversion job and return the host's status text.
    fn submit_job(
        &self,
        request: JobRequest,
    ) -> impl Future<Output = Result<JobResult, HostError>> + Send;

    /// Show a file-open dialog. `Ok(None)` means the user cancelled.
    fn open_file_dialog(
        &self,
        initial_path: String,
    ) -> impl Future<Output = Result<Option<String>, HostError>> + Send;

    fn save_settings(
        &self,
        setting: AppSetting,
    ) -> impl Future<Output = Result<(), HostError>> + Send;

    fn get_settings(&self) -> impl Future<Output = Result<AppSetting, HostError>> + Send;
}

/// Ask the host for a book path.
///
/// Without the file-dialog capability this never settles: the request is not
/// sent and the returned future stays pending.
pub async fn select_book<H: HostBridge>(
    host: &H,
    capabilities: HostCapabilities,
    initial_path: &str,
) -> Result<Option<String>, HostError> {
    if !capabilities.file_dialog {
        debug!("File dialog requested outside the desktop shell, ignoring");
        return future::pending().await;
    }
    host.open_file_dialog(initial_path.to_string()).await
}
