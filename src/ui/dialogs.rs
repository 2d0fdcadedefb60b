use eframe::egui::{self, TextEdit, Ui};

use uv_vis_dsp_viewer::i18n::{tr, Language, Msg};
use uv_vis_dsp_viewer::state::AppState;

use crate::APP_NAME;

const PROJECT_URL: &str = env!("CARGO_PKG_REPOSITORY");

enum SettingsAction {
    Apply,
    Reset,
}

// ---------------------------------------------------------------------------
// Settings window
// ---------------------------------------------------------------------------

/// Border wavelength and default concentrations. Shown while
/// `state.settings_form` is set.
pub fn settings_window(ctx: &egui::Context, state: &mut AppState) {
    let lang = state.lang();
    let Some(form) = state.settings_form.as_mut() else {
        return;
    };

    let mut open = true;
    let mut action = None;
    egui::Window::new(tr(lang, Msg::Settings))
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .show(ctx, |ui: &mut Ui| {
            egui::Grid::new("settings_grid")
                .num_columns(5)
                .spacing([8.0, 6.0])
                .show(ui, |ui: &mut Ui| {
                    ui.label(tr(lang, Msg::UvVisBorder));
                    ui.add(TextEdit::singleline(&mut form.uv_vis_border).desired_width(48.0));
                    ui.label(tr(lang, Msg::Nm));
                    ui.end_row();

                    ui.label(tr(lang, Msg::DefaultConcentrations));
                    ui.end_row();

                    concentration_row(
                        ui,
                        lang,
                        tr(lang, Msg::Uv),
                        &mut form.uv_significand,
                        &mut form.uv_exponent,
                    );
                    concentration_row(
                        ui,
                        lang,
                        tr(lang, Msg::Visible),
                        &mut form.vis_significand,
                        &mut form.vis_exponent,
                    );
                });

            ui.add_space(8.0);
            ui.horizontal(|ui: &mut Ui| {
                if ui.button(tr(lang, Msg::Reset)).clicked() {
                    action = Some(SettingsAction::Reset);
                }
                if ui.button(tr(lang, Msg::Ok)).clicked() {
                    action = Some(SettingsAction::Apply);
                }
            });
        });

    match action {
        Some(SettingsAction::Apply) => {
            if let Err(err) = state.apply_settings() {
                log::debug!("Settings window stays open: {err}");
            }
        }
        Some(SettingsAction::Reset) => state.reset_settings(),
        None if !open => state.close_settings(),
        None => {}
    }
}

fn concentration_row(
    ui: &mut Ui,
    lang: Language,
    label: &str,
    significand: &mut String,
    exponent: &mut String,
) {
    ui.label(label);
    ui.add(TextEdit::singleline(significand).desired_width(48.0));
    ui.label("• 10^");
    ui.add(TextEdit::singleline(exponent).desired_width(36.0));
    ui.label(tr(lang, Msg::MolPerLitre));
    ui.end_row();
}

// ---------------------------------------------------------------------------
// About window
// ---------------------------------------------------------------------------

pub fn about_window(ctx: &egui::Context, open: &mut bool, lang: Language) {
    egui::Window::new(tr(lang, Msg::About))
        .collapsible(false)
        .resizable(false)
        .open(open)
        .show(ctx, |ui: &mut Ui| {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.strong(format!("{APP_NAME} {}", env!("CARGO_PKG_VERSION")));
                ui.label(tr(lang, Msg::AboutText));
                ui.hyperlink(PROJECT_URL);
            });
        });
}
