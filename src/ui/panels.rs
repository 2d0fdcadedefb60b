use eframe::egui::{self, Button, Color32, RichText, TextEdit, Ui};
use egui_extras::{Column, TableBuilder};

use uv_vis_dsp_viewer::i18n::{tr, Language, Msg};
use uv_vis_dsp_viewer::state::AppState;

// ---------------------------------------------------------------------------
// Menu actions
// ---------------------------------------------------------------------------

/// What a click in the menu bar asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Open,
    SavePlotPng,
    ExportCsv,
    SelectLanguage(Language),
    Settings,
    About,
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu bar and return the action chosen in it, if any.
pub fn top_bar(ui: &mut Ui, state: &AppState) -> Option<MenuAction> {
    let lang = state.lang();
    let has_spectrum = state.spectrum().is_some();
    let mut action = None;

    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button(tr(lang, Msg::File), |ui: &mut Ui| {
            if ui.button(tr(lang, Msg::Open)).clicked() {
                action = Some(MenuAction::Open);
                ui.close_menu();
            }
            if ui
                .add_enabled(has_spectrum, Button::new(tr(lang, Msg::SavePlotPng)))
                .clicked()
            {
                action = Some(MenuAction::SavePlotPng);
                ui.close_menu();
            }
            if ui
                .add_enabled(has_spectrum, Button::new(tr(lang, Msg::ExportCsv)))
                .clicked()
            {
                action = Some(MenuAction::ExportCsv);
                ui.close_menu();
            }
        });

        ui.menu_button(tr(lang, Msg::Edit), |ui: &mut Ui| {
            ui.menu_button(tr(lang, Msg::Language), |ui: &mut Ui| {
                for choice in Language::ALL {
                    if ui
                        .selectable_label(choice == lang, choice.native_name())
                        .clicked()
                    {
                        action = Some(MenuAction::SelectLanguage(choice));
                        ui.close_menu();
                    }
                }
            });
            if ui.button(tr(lang, Msg::Settings)).clicked() {
                action = Some(MenuAction::Settings);
                ui.close_menu();
            }
        });

        ui.menu_button(tr(lang, Msg::Help), |ui: &mut Ui| {
            if ui.button(tr(lang, Msg::About)).clicked() {
                action = Some(MenuAction::About);
                ui.close_menu();
            }
        });

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });

    action
}

// ---------------------------------------------------------------------------
// Left side panel – peaks and extinction
// ---------------------------------------------------------------------------

/// Render the analysis panel: sample info, peak list, concentration entry
/// and the extinction result line.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    let lang = state.lang();

    match state.metadata_summary() {
        Some(summary) => ui.label(summary),
        None => ui.label(tr(lang, Msg::SelectDspFile)),
    };
    ui.separator();

    ui.horizontal(|ui: &mut Ui| {
        let has_spectrum = state.spectrum().is_some();
        if ui
            .add_enabled(has_spectrum, Button::new(tr(lang, Msg::FindPeaks)))
            .clicked()
        {
            state.find_peaks();
        }
        if ui
            .add_enabled(
                state.selected_peak.is_some(),
                Button::new(tr(lang, Msg::RemovePeak)),
            )
            .clicked()
        {
            state.remove_selected_peak();
        }
    });

    peak_table(ui, state);
    ui.separator();

    ui.label(tr(lang, Msg::MolarConcentration));
    ui.horizontal(|ui: &mut Ui| {
        ui.add(TextEdit::singleline(&mut state.conc_significand).desired_width(48.0));
        ui.label("• 10^");
        ui.add(TextEdit::singleline(&mut state.conc_exponent).desired_width(36.0));
        ui.label(tr(lang, Msg::MolPerLitre));
    });

    if ui
        .add_enabled(
            !state.peaks.is_empty(),
            Button::new(tr(lang, Msg::CalculateExtinction)),
        )
        .clicked()
    {
        state.calculate_extinction();
    }

    ui.horizontal(|ui: &mut Ui| {
        let mut text = state.extinction_text.as_str();
        ui.add(TextEdit::singleline(&mut text).desired_width(ui.available_width() - 90.0));
        if ui.button(tr(lang, Msg::Copy)).clicked() {
            ui.ctx().copy_text(state.extinction_text.clone());
        }
    });
}

fn peak_table(ui: &mut Ui, state: &mut AppState) {
    let lang = state.lang();
    let selected = state.selected_peak;
    let rows: Vec<(String, String)> = state
        .peaks
        .iter()
        .map(|p| (p.wavelength.to_string(), p.absorbance.to_string()))
        .collect();
    let mut clicked = None;

    TableBuilder::new(ui)
        .striped(true)
        .sense(egui::Sense::click())
        .max_scroll_height(160.0)
        .column(Column::exact(120.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong(format!("{}, {}", tr(lang, Msg::Wavelength), tr(lang, Msg::Nm)));
            });
            header.col(|ui| {
                ui.strong(tr(lang, Msg::Absorbance));
            });
        })
        .body(|mut body| {
            for (i, (wavelength, absorbance)) in rows.iter().enumerate() {
                body.row(18.0, |mut row| {
                    row.set_selected(selected == Some(i));
                    row.col(|ui| {
                        ui.label(wavelength);
                    });
                    row.col(|ui| {
                        ui.label(absorbance);
                    });
                    if row.response().clicked() {
                        clicked = Some(i);
                    }
                });
            }
        });

    if let Some(i) = clicked {
        state.select_peak(i);
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title(tr(state.lang(), Msg::SelectDspFile))
        .add_filter("DSP files", &["dsp", "DSP"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}
