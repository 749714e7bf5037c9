//! Runs conversion jobs by handing the request to an external host program.
//!
//! The program receives the JSON-encoded [`JobRequest`] on stdin (one line)
//! and answers with its status text on stdout. A non-zero exit is a failure.

use crate::bridge::HostError;
use crate::config::HostConfig;
use crate::job::{JobRequest, JobResult};
use std::io;
use std::process::Stdio;
use std::time::Instant;
use tokio::io::AsyncWriteExt;
use tokio::process::{ChildStdin, Command};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default)]
pub struct ProcessJobRunner {
    command: Option<String>,
    args: Vec<String>,
}

impl ProcessJobRunner {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: Some(command.into()),
            args,
        }
    }

    /// Runner without a job program; every submission fails as unavailable.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn from_config(config: &HostConfig) -> Self {
        Self {
            command: config.job_command.clone(),
            args: config.job_args.clone(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.command.is_some()
    }

    pub async fn run(&self, request: &JobRequest) -> Result<JobResult, HostError> {
        let Some(command) = self.command.as_deref() else {
            return Err(HostError::Unavailable(
                "no job command configured (set host.job_command)".to_string(),
            ));
        };

        let program = shellexpand::tilde(command).into_owned();
        let args: Vec<String> = self
            .args
            .iter()
            .map(|arg| shellexpand::tilde(arg).into_owned())
            .collect();

        let mut payload = serde_json::to_vec(request)?;
        payload.push(b'\n');

        info!(
            program = %program,
            book = %request.book,
            format = %request.format,
            language = %request.language,
            hint_level = request.hint_level.get(),
            "Starting job"
        );
        let started = Instant::now();

        let mut child = Command::new(&program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(err) = write_payload(&mut stdin, &payload).await {
                // The program may exit without reading; its status decides the outcome.
                if err.kind() != io::ErrorKind::BrokenPipe {
                    return Err(err.into());
                }
                debug!("Job program closed stdin before reading the request");
            }
        }

        let output = child.wait_with_output().await?;
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !stderr.is_empty() {
            debug!(stderr = %stderr, "Job wrote to stderr");
        }

        if output.status.success() {
            info!(elapsed_ms, "Job finished");
            Ok(JobResult::new(stdout))
        } else {
            warn!(status = %output.status, elapsed_ms, "Job failed");
            Err(HostError::JobFailed {
                status: output.status.to_string(),
                stderr,
            })
        }
    }
}

async fn write_payload(stdin: &mut ChildStdin, payload: &[u8]) -> io::Result<()> {
    stdin.write_all(payload).await?;
    stdin.shutdown().await
}
