//! Settings screen widget

use wordhint_core::settings::{DARK_THEME, LIGHT_THEME};

/// Button pressed on the settings screen this frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsAction {
    ApplyTheme(&'static str),
    Read,
}

const THEME_BUTTONS: [(&str, &str); 2] = [("Dark Theme", DARK_THEME), ("Light Theme", LIGHT_THEME)];

/// Render the settings screen
pub fn render(ui: &mut egui::Ui, settings_text: &str, reading: bool) -> Option<SettingsAction> {
    ui.vertical(|ui| {
        let mut action = None;

        ui.heading("Settings Page");
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            for (label, theme) in THEME_BUTTONS {
                if ui.button(label).clicked() {
                    action = Some(SettingsAction::ApplyTheme(theme));
                }
            }

            if ui.add_enabled(!reading, egui::Button::new("Read Settings")).clicked() {
                action = Some(SettingsAction::Read);
            }
            if reading {
                ui.spinner();
            }
        });

        ui.add_space(12.0);
        ui.label(egui::RichText::new(settings_text).monospace());

        action
    })
    .inner
}
