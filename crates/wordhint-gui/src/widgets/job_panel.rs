//! Job configuration form widget

use crate::state::{JobState, MessageStyle, WorkMessage};
use wordhint_core::job::{MAX_HINT_LEVEL, MIN_HINT_LEVEL};
use wordhint_core::{HintLevel, HostCapabilities, JobDraft, Language, OutputFormat};

/// Button pressed on the job form this frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobAction {
    Browse,
    Process,
    RunAgain,
}

/// Render the job form
/// Returns the action the user triggered, if any
pub fn render(
    ui: &mut egui::Ui,
    draft: &mut JobDraft,
    state: &JobState,
    message: &WorkMessage,
    capabilities: HostCapabilities,
) -> Option<JobAction> {
    ui.vertical(|ui| {
        let mut action = None;

        ui.label(egui::RichText::new("Your Book").strong());
        ui.horizontal(|ui| {
            let browse_width = 90.0;
            ui.add(
                egui::TextEdit::singleline(&mut draft.book)
                    .hint_text("select your ebook from your computer...")
                    .desired_width(ui.available_width() - browse_width),
            );
            let browse = ui
                .add_enabled(capabilities.file_dialog, egui::Button::new("Browse..."))
                .on_disabled_hover_text("File dialogs are only available in the desktop shell");
            if browse.clicked() {
                action = Some(JobAction::Browse);
            }
        });

        ui.add_space(8.0);

        ui.label(egui::RichText::new("Select Output Format").strong());
        egui::ComboBox::from_id_salt("format_select")
            .selected_text(draft.format.label())
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for format in OutputFormat::ALL {
                    ui.selectable_value(&mut draft.format, format, format.label());
                }
            });

        ui.add_space(8.0);

        ui.label(egui::RichText::new("Select Language").strong());
        egui::ComboBox::from_id_salt("language_select")
            .selected_text(draft.language.label())
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for language in Language::ALL {
                    ui.selectable_value(&mut draft.language, language, language.label());
                }
            });

        ui.add_space(8.0);

        ui.label(egui::RichText::new("Hint Level").strong());
        let mut level = draft.hint_level().get();
        if ui
            .add(egui::Slider::new(&mut level, MIN_HINT_LEVEL..=MAX_HINT_LEVEL).step_by(1.0))
            .changed()
        {
            draft.set_hint_level(HintLevel::new(level));
        }

        ui.add_space(8.0);

        ui.horizontal(|ui| {
            let mut allow_long = draft.allow_long;
            if ui.checkbox(&mut allow_long, "Allow Long Description").changed() {
                draft.toggle_allow_long();
            }
            ui.add_space(16.0);
            let mut show_phoneme = draft.show_phoneme;
            if ui.checkbox(&mut show_phoneme, "Show Phoneme").changed() {
                draft.toggle_show_phoneme();
            }
        });

        ui.add_space(12.0);

        ui.horizontal(|ui| {
            match state {
                JobState::Submitting { .. } => {
                    ui.add_enabled(false, egui::Button::new("⏳ Processing..."));
                }
                JobState::Completed { .. } | JobState::Failed { .. } => {
                    if ui.button("Run Again").clicked() {
                        action = Some(JobAction::RunAgain);
                    }
                }
                JobState::Idle => {
                    let button = egui::Button::new(egui::RichText::new("▶ Process").strong())
                        .fill(egui::Color32::from_rgb(29, 78, 216));
                    if ui.add(button).clicked() {
                        action = Some(JobAction::Process);
                    }
                }
            }

            ui.add_space(12.0);
            render_message(ui, message);
        });

        action
    })
    .inner
}

fn render_message(ui: &mut egui::Ui, message: &WorkMessage) {
    let text = egui::RichText::new(&message.text);
    let text = match message.style {
        MessageStyle::Placeholder => text.weak(),
        MessageStyle::Result => text.color(egui::Color32::from_rgb(30, 64, 175)),
        MessageStyle::Failure => text.color(egui::Color32::RED),
    };
    ui.add(egui::Label::new(text).truncate());
}
