//! Async runtime bridge for running host calls behind egui

use std::future::Future;
use std::io;
use std::sync::{Arc, Mutex};
#[cfg(test)]
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tracing::warn;
use wordhint_core::{AppSetting, HostError, JobResult};

/// Completion of a host call, delivered back to the UI thread.
#[derive(Debug)]
pub enum UiEvent {
    /// The file dialog closed. `Ok(None)` means the user cancelled.
    BookSelected(Result<Option<String>, HostError>),
    /// A job submission finished.
    JobFinished {
        submission: u64,
        outcome: Result<JobResult, HostError>,
    },
    /// Settings requested by the settings screen arrived.
    SettingsRead(Result<AppSetting, HostError>),
    /// Settings read once at start-up to restore the theme.
    ThemeRestored(Result<AppSetting, HostError>),
}

/// Bridge between the tokio runtime and egui
pub struct AsyncBridge {
    /// Tokio runtime for host calls (wrapped in Option for clean shutdown)
    runtime: Option<Runtime>,

    events_tx: mpsc::UnboundedSender<UiEvent>,
    events_rx: Mutex<mpsc::UnboundedReceiver<UiEvent>>,

    /// Context to wake when an event lands; set on the first frame.
    repaint: Arc<Mutex<Option<egui::Context>>>,
}

impl AsyncBridge {
    pub fn new() -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("wordhint-host")
            .enable_all()
            .build()?;
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        Ok(Self {
            runtime: Some(runtime),
            events_tx,
            events_rx: Mutex::new(events_rx),
            repaint: Arc::new(Mutex::new(None)),
        })
    }

    /// Remember the egui context so finished tasks can request a repaint.
    pub fn set_repaint_context(&self, ctx: &egui::Context) {
        if let Ok(mut guard) = self.repaint.lock() {
            if guard.is_none() {
                *guard = Some(ctx.clone());
            }
        }
    }

    /// Run `task` in the background and post its event to the UI thread.
    pub fn spawn_event<F>(&self, task: F)
    where
        F: Future<Output = UiEvent> + Send + 'static,
    {
        let Some(runtime) = self.runtime.as_ref() else {
            warn!("Runtime already shut down, dropping task");
            return;
        };

        let tx = self.events_tx.clone();
        let repaint = Arc::clone(&self.repaint);
        runtime.spawn(async move {
            let event = task.await;
            if tx.send(event).is_err() {
                return;
            }
            if let Ok(guard) = repaint.lock() {
                if let Some(ctx) = guard.as_ref() {
                    ctx.request_repaint();
                }
            }
        });
    }

    /// Run `task` in the background without reporting back.
    pub fn spawn_detached<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        match self.runtime.as_ref() {
            Some(runtime) => {
                runtime.spawn(task);
            }
            None => warn!("Runtime already shut down, dropping task"),
        }
    }

    /// Take every event that has arrived since the last frame.
    pub fn drain_events(&self) -> Vec<UiEvent> {
        let mut events = Vec::new();
        if let Ok(mut rx) = self.events_rx.lock() {
            while let Ok(event) = rx.try_recv() {
                events.push(event);
            }
        }
        events
    }

    /// Block until the next event arrives or `timeout` passes.
    #[cfg(test)]
    pub fn recv_timeout(&self, timeout: Duration) -> Option<UiEvent> {
        let runtime = self.runtime.as_ref()?;
        let mut rx = self.events_rx.lock().ok()?;
        runtime
            .block_on(async { tokio::time::timeout(timeout, rx.recv()).await })
            .ok()
            .flatten()
    }
}

impl Drop for AsyncBridge {
    fn drop(&mut self) {
        // Dropping a runtime inside an async context panics; shut down without blocking.
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}
