//! View-state shared by the job screen and its widgets

use chrono::{DateTime, Local};

pub const DEFAULT_WORK_MESSAGE: &str =
    "this is the default message, only 1 line long and aligned in the middle.";

/// Lifecycle of the current conversion job
#[derive(Clone, Debug, Default, PartialEq)]
pub enum JobState {
    /// Nothing submitted yet, or reset after a finished job
    #[default]
    Idle,

    /// Waiting for the host to answer
    Submitting {
        /// Tag of the outstanding submission
        submission: u64,

        /// When the request was sent
        started_at: DateTime<Local>,
    },

    /// Host returned its status text
    Completed {
        result: String,
    },

    /// Host call failed
    Failed {
        error: String,
    },
}

impl JobState {
    pub fn is_working(&self) -> bool {
        matches!(self, JobState::Submitting { .. })
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, JobState::Completed { .. } | JobState::Failed { .. })
    }
}

/// How the result line is drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageStyle {
    /// Greeting shown before any job ran
    Placeholder,
    /// Text returned by the host
    Result,
    /// A host call failed
    Failure,
}

/// The single line of text under the Process button
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkMessage {
    pub style: MessageStyle,
    pub text: String,
}

impl WorkMessage {
    pub fn new(style: MessageStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }
}

impl Default for WorkMessage {
    fn default() -> Self {
        Self::new(MessageStyle::Placeholder, DEFAULT_WORK_MESSAGE)
    }
}
