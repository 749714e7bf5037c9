//! Progress display widget

use crate::state::JobState;
use chrono::Local;

/// Render job progress
///
/// The host reports no intermediate progress, so a running job shows an
/// animated indeterminate bar.
pub fn render(ui: &mut egui::Ui, state: &JobState) {
    match state {
        JobState::Submitting { started_at, .. } => {
            ui.vertical(|ui| {
                ui.add(egui::ProgressBar::new(0.0).animate(true));
                let elapsed = Local::now().signed_duration_since(*started_at);
                let elapsed_secs = elapsed.num_milliseconds() as f64 / 1000.0;
                ui.label(format!("Elapsed: {:.1}s", elapsed_secs));
            });
            // Keep the elapsed counter ticking
            ui.ctx().request_repaint_after(std::time::Duration::from_millis(100));
        }
        JobState::Completed { .. } => {
            ui.add(egui::ProgressBar::new(1.0));
        }
        JobState::Failed { .. } | JobState::Idle => {
            // Nothing to show
        }
    }
}
