mod app;
mod ui;

use std::path::PathBuf;

use app::DspViewerApp;
use eframe::egui;
use uv_vis_dsp_viewer::state::AppState;
use uv_vis_dsp_viewer::{Config, CONFIG_FILE_NAME};

pub const APP_NAME: &str = "UV-vis DSP viewer";

fn main() -> eframe::Result {
    env_logger::init();

    let config = Config::load_or_default(CONFIG_FILE_NAME);
    let mut state = AppState::new(config, CONFIG_FILE_NAME);

    // Optional: a .dsp file to open right away.
    if let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) {
        state.load_path(&path);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(|_cc| Ok(Box::new(DspViewerApp::new(state)))),
    )
}
