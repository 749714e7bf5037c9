//! Job submission screen: editable job parameters, one host call per action

use crate::async_bridge::{AsyncBridge, UiEvent};
use crate::state::{JobState, MessageStyle, WorkMessage};
use chrono::Local;
use std::sync::Arc;
use tracing::{debug, error, info};
use wordhint_core::{HostBridge, HostCapabilities, HostError, JobDraft, JobResult, select_book};

pub struct JobForm<H> {
    host: Arc<H>,
    capabilities: HostCapabilities,

    /// Parameters as the user is editing them
    pub draft: JobDraft,

    state: JobState,
    message: WorkMessage,

    /// Tag of the most recent submission; older results are dropped
    last_submission: u64,
}

impl<H: HostBridge> JobForm<H> {
    pub fn new(host: Arc<H>, capabilities: HostCapabilities) -> Self {
        Self {
            host,
            capabilities,
            draft: JobDraft::default(),
            state: JobState::Idle,
            message: WorkMessage::default(),
            last_submission: 0,
        }
    }

    pub fn state(&self) -> &JobState {
        &self.state
    }

    pub fn message(&self) -> &WorkMessage {
        &self.message
    }

    pub fn capabilities(&self) -> HostCapabilities {
        self.capabilities
    }

    /// Ask the host for a book through its file dialog.
    ///
    /// Returns false without doing anything when the dialog capability is
    /// missing.
    pub fn select_book(&mut self, bridge: &AsyncBridge) -> bool {
        if !self.capabilities.file_dialog {
            debug!("File dialog unavailable, Browse ignored");
            return false;
        }

        let host = Arc::clone(&self.host);
        let capabilities = self.capabilities;
        let initial_path = self.draft.book.clone();
        bridge.spawn_event(async move {
            let outcome = select_book(&*host, capabilities, &initial_path).await;
            UiEvent::BookSelected(outcome)
        });
        true
    }

    /// Apply the dialog result. Host failures are handed back unchanged.
    pub fn finish_book_selection(
        &mut self,
        outcome: Result<Option<String>, HostError>,
    ) -> Result<Option<String>, HostError> {
        if let Ok(Some(path)) = &outcome {
            info!(book = %path, "Book selected");
            self.draft.book = path.clone();
        }
        outcome
    }

    /// Submit the current draft. Ignored while a job is outstanding.
    pub fn start_job(&mut self, bridge: &AsyncBridge) -> Option<u64> {
        if self.state.is_working() {
            debug!("Job already running, submit ignored");
            return None;
        }

        self.last_submission += 1;
        let submission = self.last_submission;
        let request = self.draft.to_request();
        info!(
            submission,
            book = %request.book,
            format = %request.format,
            language = %request.language,
            hint_level = request.hint_level.get(),
            allow_long = request.allow_long,
            show_phoneme = request.show_phoneme,
            "Submitting job"
        );

        self.state = JobState::Submitting {
            submission,
            started_at: Local::now(),
        };

        let host = Arc::clone(&self.host);
        bridge.spawn_event(async move {
            let outcome = host.submit_job(request).await;
            UiEvent::JobFinished {
                submission,
                outcome,
            }
        });
        Some(submission)
    }

    pub fn finish_job(&mut self, submission: u64, outcome: Result<JobResult, HostError>) {
        let current = match self.state {
            JobState::Submitting {
                submission: current,
                ..
            } => current,
            _ => {
                debug!(submission, "Result arrived with no job outstanding, dropped");
                return;
            }
        };
        if current != submission {
            debug!(submission, current, "Stale job result dropped");
            return;
        }

        match outcome {
            Ok(result) => {
                info!(submission, result = %result, "Job completed");
                self.message = WorkMessage::new(MessageStyle::Result, result.as_str());
                self.state = JobState::Completed {
                    result: result.into_inner(),
                };
            }
            Err(err) => {
                error!(submission, error = %err, "Job failed");
                let text = err.to_string();
                self.message = WorkMessage::new(MessageStyle::Failure, text.clone());
                self.state = JobState::Failed { error: text };
            }
        }
    }

    /// Go back to idle after a finished job. The last message stays.
    pub fn reset(&mut self) {
        if self.state.is_finished() {
            self.state = JobState::Idle;
        }
    }
}
