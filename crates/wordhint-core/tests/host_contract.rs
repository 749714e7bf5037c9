use std::sync::{Arc, Mutex};
use std::time::Duration;

use wordhint_core::{
    AppSetting, HostBridge, HostCapabilities, HostError, JobDraft, JobRequest, JobResult, Language,
    OutputFormat, ProcessJobRunner, select_book,
};

#[derive(Default)]
struct RecordingHost {
    dialog_requests: Arc<Mutex<Vec<String>>>,
}

impl HostBridge for RecordingHost {
    async fn submit_job(&self, _request: JobRequest) -> Result<JobResult, HostError> {
        Ok(JobResult::new("Done"))
    }

    async fn open_file_dialog(&self, initial_path: String) -> Result<Option<String>, HostError> {
        self.dialog_requests.lock().unwrap().push(initial_path);
        Ok(Some("/books/chosen.epub".to_string()))
    }

    async fn save_settings(&self, _setting: AppSetting) -> Result<(), HostError> {
        Ok(())
    }

    async fn get_settings(&self) -> Result<AppSetting, HostError> {
        Ok(AppSetting::default())
    }
}

#[tokio::test]
async fn select_book_without_capability_stays_pending() {
    let host = RecordingHost::default();

    let outcome = tokio::time::timeout(
        Duration::from_millis(100),
        select_book(&host, HostCapabilities::headless(), "old.epub"),
    )
    .await;

    assert!(outcome.is_err(), "select_book should never settle without the capability");
    assert!(host.dialog_requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn select_book_with_capability_forwards_initial_path() {
    let host = RecordingHost::default();

    let chosen = select_book(&host, HostCapabilities::desktop_shell(), "old.epub")
        .await
        .expect("dialog succeeds");

    assert_eq!(chosen.as_deref(), Some("/books/chosen.epub"));
    assert_eq!(*host.dialog_requests.lock().unwrap(), vec!["old.epub".to_string()]);
}

#[cfg(unix)]
#[tokio::test]
async fn process_runner_sends_json_payload_on_stdin() {
    let runner = ProcessJobRunner::new("sh", vec!["-c".to_string(), "cat".to_string()]);
    let draft = JobDraft {
        book: "novel.epub".to_string(),
        format: OutputFormat::Mobi,
        language: Language::Cn,
        hint_level: "5".to_string(),
        allow_long: true,
        show_phoneme: false,
    };

    let result = runner.run(&draft.to_request()).await.expect("job succeeds");
    let echoed: serde_json::Value = serde_json::from_str(result.as_str()).expect("echoed JSON");

    assert_eq!(
        echoed,
        serde_json::json!({
            "book": "novel.epub",
            "format": "mobi",
            "language": "cn",
            "hint_level": 5,
            "allow_long": true,
            "show_phoneme": false,
        })
    );
}

#[cfg(unix)]
#[tokio::test]
async fn process_runner_returns_trimmed_stdout() {
    let runner = ProcessJobRunner::new(
        "sh",
        vec!["-c".to_string(), "cat >/dev/null; printf '  Done\\n'".to_string()],
    );

    let result = runner.run(&JobRequest::default()).await.expect("job succeeds");
    assert_eq!(result.as_str(), "Done");
}

#[cfg(unix)]
#[tokio::test]
async fn process_runner_reports_non_zero_exit() {
    let runner = ProcessJobRunner::new(
        "sh",
        vec![
            "-c".to_string(),
            "cat >/dev/null; echo 'book not found' >&2; exit 3".to_string(),
        ],
    );

    match runner.run(&JobRequest::default()).await {
        Err(HostError::JobFailed { stderr, .. }) => assert_eq!(stderr, "book not found"),
        other => panic!("expected JobFailed, got {other:?}"),
    }
}

#[cfg(unix)]
#[tokio::test]
async fn process_runner_ignores_program_that_skips_stdin() {
    let runner = ProcessJobRunner::new(
        "sh",
        vec!["-c".to_string(), "exec 0<&-; echo Done".to_string()],
    );
    // Larger than a pipe buffer so the write cannot finish before stdin closes.
    let request = JobRequest {
        book: "b".repeat(200 * 1024),
        ..JobRequest::default()
    };

    let result = runner.run(&request).await.expect("job succeeds");
    assert_eq!(result.as_str(), "Done");
}
