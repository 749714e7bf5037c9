//! In-memory host used by the screen tests

use std::sync::Mutex;
use std::time::{Duration, Instant};
use wordhint_core::{AppSetting, HostBridge, HostError, JobRequest, JobResult};

pub const EVENT_TIMEOUT: Duration = Duration::from_secs(2);

pub struct FakeHost {
    pub jobs: Mutex<Vec<JobRequest>>,
    pub job_reply: Mutex<Result<String, String>>,
    pub dialog_calls: Mutex<Vec<String>>,
    pub dialog_reply: Mutex<Result<Option<String>, String>>,
    pub saved: Mutex<Vec<AppSetting>>,
    pub stored: Mutex<Result<AppSetting, String>>,
    pub fail_saves: bool,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self {
            jobs: Mutex::new(Vec::new()),
            job_reply: Mutex::new(Ok("Done".to_string())),
            dialog_calls: Mutex::new(Vec::new()),
            dialog_reply: Mutex::new(Ok(Some("/books/picked.epub".to_string()))),
            saved: Mutex::new(Vec::new()),
            stored: Mutex::new(Ok(AppSetting::default())),
            fail_saves: false,
        }
    }
}

impl FakeHost {
    pub fn saved_themes(&self) -> Vec<String> {
        self.saved
            .lock()
            .unwrap()
            .iter()
            .map(|s| s.theme.clone())
            .collect()
    }
}

impl HostBridge for FakeHost {
    async fn submit_job(&self, request: JobRequest) -> Result<JobResult, HostError> {
        self.jobs.lock().unwrap().push(request);
        let reply = self.job_reply.lock().unwrap().clone();
        reply.map(JobResult::new).map_err(HostError::Unavailable)
    }

    async fn open_file_dialog(&self, initial_path: String) -> Result<Option<String>, HostError> {
        self.dialog_calls.lock().unwrap().push(initial_path);
        let reply = self.dialog_reply.lock().unwrap().clone();
        reply.map_err(HostError::Dialog)
    }

    async fn save_settings(&self, setting: AppSetting) -> Result<(), HostError> {
        self.saved.lock().unwrap().push(setting);
        if self.fail_saves {
            Err(HostError::Unavailable("disk full".to_string()))
        } else {
            Ok(())
        }
    }

    async fn get_settings(&self) -> Result<AppSetting, HostError> {
        let stored = self.stored.lock().unwrap().clone();
        stored.map_err(HostError::Unavailable)
    }
}

/// Poll `condition` until it holds or the event timeout passes.
pub fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + EVENT_TIMEOUT;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    condition()
}
