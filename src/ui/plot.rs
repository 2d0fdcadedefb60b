use eframe::egui::{Color32, Rect, Ui};
use egui_plot::{GridInput, GridMark, Legend, Line, Plot, PlotPoints, Points};

use uv_vis_dsp_viewer::data::ticks::tick_spacing;
use uv_vis_dsp_viewer::i18n::{tr, Msg};
use uv_vis_dsp_viewer::state::AppState;

// ---------------------------------------------------------------------------
// Spectrum plot (central panel)
// ---------------------------------------------------------------------------

/// Render absorbance vs. wavelength with the detected peaks marked.
/// Returns the plot's screen rect so it can be cropped out of a screenshot.
pub fn spectrum_plot(ui: &mut Ui, state: &AppState) -> Option<Rect> {
    let lang = state.lang();
    let spectrum = match state.spectrum() {
        Some(sp) => sp,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading(tr(lang, Msg::NoSpectrum));
            });
            return None;
        }
    };

    let ticks = state.plot_ticks();
    let step = tick_spacing(&ticks);
    let top = ticks.last().copied().unwrap_or(1.0);
    let (x_min, x_max) = spectrum.wavelength_range()?;

    let mut plot = Plot::new("spectrum_plot")
        .legend(Legend::default())
        .x_axis_label(tr(lang, Msg::Nm))
        .y_axis_label("A")
        .include_x(x_min as f64)
        .include_x(x_max as f64)
        .include_y(top)
        .y_grid_spacer(move |_input: GridInput| -> Vec<GridMark> {
            ticks
                .iter()
                .map(|&value| GridMark {
                    value,
                    step_size: step,
                })
                .collect()
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);
    if spectrum.min_absorbance() > 0.0 {
        plot = plot.include_y(0.0);
    }

    let line_color = ui.visuals().text_color();
    let points: PlotPoints = spectrum
        .points()
        .map(|(wl, a)| [wl as f64, a])
        .collect();
    let peak_points: Vec<[f64; 2]> = state
        .peaks
        .iter()
        .map(|p| [p.wavelength as f64, p.absorbance])
        .collect();

    let response = plot.show(ui, |plot_ui| {
        plot_ui.line(
            Line::new(points)
                .name(spectrum.sample_name())
                .color(line_color)
                .width(1.0),
        );
        if !peak_points.is_empty() {
            plot_ui.points(
                Points::new(peak_points)
                    .radius(3.0)
                    .color(Color32::RED)
                    .name("λ max"),
            );
        }
    });

    Some(response.response.rect)
}
