//! Main application structure for the wordhint GUI

use crate::async_bridge::{AsyncBridge, UiEvent};
use crate::job_form::JobForm;
use crate::settings_form::SettingsForm;
use crate::theme::ThemeContext;
use crate::widgets;
use crate::widgets::job_panel::JobAction;
use crate::widgets::settings_panel::SettingsAction;
use std::sync::Arc;
use tracing::{info, warn};
use wordhint_core::{HostBridge, HostCapabilities};

/// Screen shown in the central panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Settings,
}

/// Main application struct implementing eframe::App
pub struct WordhintApp<H> {
    async_bridge: AsyncBridge,
    theme: ThemeContext,
    job_form: JobForm<H>,
    settings_form: SettingsForm<H>,
    page: Page,
}

impl<H: HostBridge> WordhintApp<H> {
    /// Build the app. When `restore_theme` is set the persisted theme is read
    /// once in the background and applied when it arrives.
    pub fn new(
        async_bridge: AsyncBridge,
        host: Arc<H>,
        capabilities: HostCapabilities,
        theme: ThemeContext,
        restore_theme: bool,
    ) -> Self {
        if restore_theme {
            let host = Arc::clone(&host);
            async_bridge
                .spawn_event(async move { UiEvent::ThemeRestored(host.get_settings().await) });
        }

        info!(
            file_dialog = capabilities.file_dialog,
            theme = theme.mode().as_setting(),
            "Application started"
        );

        Self {
            job_form: JobForm::new(Arc::clone(&host), capabilities),
            settings_form: SettingsForm::new(host, theme.clone()),
            async_bridge,
            theme,
            page: Page::Home,
        }
    }

    fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::BookSelected(outcome) => {
                if let Err(err) = self.job_form.finish_book_selection(outcome) {
                    warn!(error = %err, "File dialog failed");
                }
            }
            UiEvent::JobFinished {
                submission,
                outcome,
            } => self.job_form.finish_job(submission, outcome),
            UiEvent::SettingsRead(outcome) => self.settings_form.finish_read(outcome),
            UiEvent::ThemeRestored(outcome) => {
                self.settings_form.restore_theme(outcome);
            }
        }
    }

    /// Render the top panel with page switcher
    fn render_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Wordhint");
                ui.add_space(16.0);
                ui.selectable_value(&mut self.page, Page::Home, "Home");
                ui.selectable_value(&mut self.page, Page::Settings, "Settings");
            });
        });
    }

    fn render_home(&mut self, ui: &mut egui::Ui) {
        let capabilities = self.job_form.capabilities();
        let state = self.job_form.state().clone();
        let message = self.job_form.message().clone();

        let action = widgets::job_panel::render(
            ui,
            &mut self.job_form.draft,
            &state,
            &message,
            capabilities,
        );

        ui.add_space(16.0);
        widgets::progress_display::render(ui, self.job_form.state());

        match action {
            Some(JobAction::Browse) => {
                self.job_form.select_book(&self.async_bridge);
            }
            Some(JobAction::Process) => {
                self.job_form.start_job(&self.async_bridge);
            }
            Some(JobAction::RunAgain) => self.job_form.reset(),
            None => {}
        }
    }

    fn render_settings(&mut self, ui: &mut egui::Ui) {
        let action = widgets::settings_panel::render(
            ui,
            self.settings_form.settings_text(),
            self.settings_form.is_reading(),
        );

        match action {
            Some(SettingsAction::ApplyTheme(theme)) => {
                self.settings_form.apply_theme(theme, &self.async_bridge);
                ui.ctx().request_repaint();
            }
            Some(SettingsAction::Read) => self.settings_form.read_settings(&self.async_bridge),
            None => {}
        }
    }
}

impl<H: HostBridge> eframe::App for WordhintApp<H> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.async_bridge.set_repaint_context(ctx);

        for event in self.async_bridge.drain_events() {
            self.handle_event(event);
        }

        // Theme may have changed through an event or a button last frame
        self.theme.apply(ctx);

        self.render_top_panel(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.page {
                    Page::Home => self.render_home(ui),
                    Page::Settings => self.render_settings(ui),
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeHost, wait_until};
    use wordhint_core::{AppSetting, HostError, ThemeMode};

    fn app(mode: ThemeMode) -> (Arc<FakeHost>, WordhintApp<FakeHost>) {
        let host = Arc::new(FakeHost::default());
        let app = WordhintApp::new(
            AsyncBridge::new().unwrap(),
            Arc::clone(&host),
            HostCapabilities::desktop_shell(),
            ThemeContext::new(mode),
            false,
        );
        (host, app)
    }

    #[test]
    fn late_theme_restore_does_not_undo_user_choice() {
        let (host, mut app) = app(ThemeMode::Light);

        app.settings_form.apply_theme("dark", &app.async_bridge);
        app.handle_event(UiEvent::ThemeRestored(Ok(AppSetting::new("light"))));

        assert_eq!(app.theme.mode(), ThemeMode::Dark);
        assert!(wait_until(|| host.saved_themes() == vec!["dark".to_string()]));
    }

    #[test]
    fn theme_restore_applies_before_any_choice() {
        let (_host, mut app) = app(ThemeMode::Light);

        app.handle_event(UiEvent::ThemeRestored(Ok(AppSetting::new("dark"))));
        assert_eq!(app.theme.mode(), ThemeMode::Dark);
    }

    #[test]
    fn failed_book_selection_keeps_book() {
        let (_host, mut app) = app(ThemeMode::Light);
        app.job_form.draft.book = "keep.epub".to_string();

        app.handle_event(UiEvent::BookSelected(Err(HostError::Dialog(
            "no display".to_string(),
        ))));
        assert_eq!(app.job_form.draft.book, "keep.epub");

        app.handle_event(UiEvent::BookSelected(Ok(Some("new.epub".to_string()))));
        assert_eq!(app.job_form.draft.book, "new.epub");
    }

    #[test]
    fn job_result_event_reaches_the_form() {
        let (_host, mut app) = app(ThemeMode::Light);
        let submission = app.job_form.start_job(&app.async_bridge).unwrap();

        app.handle_event(UiEvent::JobFinished {
            submission,
            outcome: Ok(wordhint_core::JobResult::new("Done")),
        });
        assert_eq!(app.job_form.message().text, "Done");
    }
}
