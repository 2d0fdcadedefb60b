use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use eframe::egui;

use uv_vis_dsp_viewer::data::export::export_csv;
use uv_vis_dsp_viewer::state::AppState;

use crate::ui::panels::{self, MenuAction};
use crate::ui::{dialogs, plot};
use crate::APP_NAME;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DspViewerApp {
    pub state: AppState,
    /// Screen rect of the plot in the last frame, used to crop PNG exports.
    plot_rect: Option<egui::Rect>,
    /// Target of a requested plot screenshot.
    pending_png: Option<PathBuf>,
    show_about: bool,
    window_title: String,
}

impl DspViewerApp {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            plot_rect: None,
            pending_png: None,
            show_about: false,
            window_title: APP_NAME.to_string(),
        }
    }

    fn handle_menu(&mut self, ctx: &egui::Context, action: MenuAction) {
        match action {
            MenuAction::Open => panels::open_file_dialog(&mut self.state),
            MenuAction::SavePlotPng => {
                if let Some(path) = save_dialog(&self.state, "png", "PNG") {
                    self.pending_png = Some(path);
                    ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(
                        egui::UserData::default(),
                    ));
                }
            }
            MenuAction::ExportCsv => {
                let Some(path) = save_dialog(&self.state, "csv", "CSV") else {
                    return;
                };
                let result = match self.state.spectrum() {
                    Some(spectrum) => export_csv(&path, spectrum, &self.state.peaks),
                    None => return,
                };
                if let Err(e) = result {
                    log::error!("CSV export failed: {e:#}");
                    self.state.status_message = Some(format!("Error: {e:#}"));
                }
            }
            MenuAction::SelectLanguage(lang) => self.state.select_language(lang),
            MenuAction::Settings => self.state.open_settings(),
            MenuAction::About => self.show_about = true,
        }
    }

    /// Save the screenshot requested by "Save plot as PNG", if it arrived.
    fn handle_screenshot(&mut self, ctx: &egui::Context) {
        let shot: Option<Arc<egui::ColorImage>> = ctx.input(|i| {
            i.raw.events.iter().find_map(|e| match e {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        let Some(shot) = shot else {
            return;
        };
        let Some(path) = self.pending_png.take() else {
            return;
        };

        let cropped = match self.plot_rect {
            Some(rect) => shot.region(&rect, Some(ctx.pixels_per_point())),
            None => (*shot).clone(),
        };
        match save_png(&cropped, &path) {
            Ok(()) => log::info!("Saved plot to {}", path.display()),
            Err(e) => {
                log::error!("Saving plot failed: {e:#}");
                self.state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    fn sync_window_title(&mut self, ctx: &egui::Context) {
        let title = match self.state.spectrum() {
            Some(sp) => format!("{} – {APP_NAME}", sp.sample_name()),
            None => APP_NAME.to_string(),
        };
        if title != self.window_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.window_title = title;
        }
    }
}

impl eframe::App for DspViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_screenshot(ctx);

        // ---- Top panel: menu bar ----
        let action = egui::TopBottomPanel::top("top_bar")
            .show(ctx, |ui| panels::top_bar(ui, &self.state))
            .inner;
        if let Some(action) = action {
            self.handle_menu(ctx, action);
        }

        // ---- Left side panel: peaks and extinction ----
        egui::SidePanel::left("analysis_panel")
            .default_width(320.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            self.plot_rect = plot::spectrum_plot(ui, &self.state);
        });

        // ---- Windows ----
        dialogs::settings_window(ctx, &mut self.state);
        dialogs::about_window(ctx, &mut self.show_about, self.state.lang());

        self.sync_window_title(ctx);
    }
}

// ---------------------------------------------------------------------------
// Save helpers
// ---------------------------------------------------------------------------

fn save_dialog(state: &AppState, extension: &str, filter_name: &str) -> Option<PathBuf> {
    let stem = state
        .spectrum()
        .map(|sp| sp.sample_name().to_string())
        .unwrap_or_else(|| "spectrum".to_string());
    rfd::FileDialog::new()
        .set_file_name(format!("{stem}.{extension}"))
        .add_filter(filter_name, &[extension])
        .save_file()
}

fn save_png(shot: &egui::ColorImage, path: &Path) -> Result<()> {
    let [width, height] = shot.size;
    let bytes: Vec<u8> = shot.pixels.iter().flat_map(|c| c.to_array()).collect();
    let buffer = image::RgbaImage::from_raw(width as u32, height as u32, bytes)
        .context("screenshot buffer does not match its size")?;
    buffer
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
