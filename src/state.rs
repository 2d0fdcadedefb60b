use std::path::{Path, PathBuf};

use crate::config::{Config, SettingsForm};
use crate::data::extinction::{compute_all, extinction_summary};
use crate::data::loader::{load_file, load_spectrum};
use crate::data::model::{Concentration, LoadedSpectrum, Peak, Spectrum};
use crate::data::peaks::{detect_peaks, remove_peak};
use crate::data::ticks::generate_ticks;
use crate::error::{ConfigError, DspParseError, ExtinctionError};
use crate::i18n::{spectrum_type_label, tr, Language, Msg};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI session, independent of rendering.
///
/// UI handlers only ever mutate it through these methods; each one calls the
/// pure data layer and stores the result.
pub struct AppState {
    /// Persisted settings.
    pub config: Config,

    /// Where `config` is written on every change.
    config_path: PathBuf,

    /// Active sample (None until a file has been loaded).
    pub loaded: Option<LoadedSpectrum>,

    /// Detected peaks of the active sample, ascending wavelength.
    pub peaks: Vec<Peak>,

    /// Row selected in the peak table.
    pub selected_peak: Option<usize>,

    /// Concentration entry fields (significand • 10^exponent mol/L).
    pub conc_significand: String,
    pub conc_exponent: String,

    /// Result line of the last extinction calculation (or a prompt).
    pub extinction_text: String,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Contents of the settings dialog while it is open.
    pub settings_form: Option<SettingsForm>,
}

impl AppState {
    pub fn new(config: Config, config_path: impl Into<PathBuf>) -> Self {
        Self {
            config,
            config_path: config_path.into(),
            loaded: None,
            peaks: Vec::new(),
            selected_peak: None,
            conc_significand: String::new(),
            conc_exponent: String::new(),
            extinction_text: String::new(),
            status_message: None,
            settings_form: None,
        }
    }

    pub fn lang(&self) -> Language {
        self.config.lang
    }

    pub fn spectrum(&self) -> Option<&Spectrum> {
        self.loaded.as_ref().map(|l| &l.spectrum)
    }

    // -- Loading --------------------------------------------------------------

    /// Load a spectrum from raw file bytes. On failure the previous spectrum
    /// and its peaks stay as they were.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<(), DspParseError> {
        match load_spectrum(bytes, &self.config) {
            Ok(loaded) => {
                self.set_loaded(loaded);
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to parse DSP data: {e}");
                self.status_message = Some(format!("{}: {e}", tr(self.lang(), Msg::CannotReadFile)));
                Err(e)
            }
        }
    }

    /// Load a `.dsp` file from disk. Errors are reported via `status_message`.
    pub fn load_path(&mut self, path: &Path) {
        match load_file(path, &self.config) {
            Ok(loaded) => {
                log::info!(
                    "Loaded {} ({} points, {})",
                    path.display(),
                    loaded.spectrum.len(),
                    loaded.spectrum.spectrum_type()
                );
                self.set_loaded(loaded);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message =
                    Some(format!("{}: {e:#}", tr(self.lang(), Msg::CannotReadFile)));
            }
        }
    }

    /// Replace the active sample, discarding everything derived from the old one.
    pub fn set_loaded(&mut self, loaded: LoadedSpectrum) {
        let Concentration {
            significand,
            exponent,
        } = loaded.default_concentration;
        self.conc_significand = significand.to_string();
        self.conc_exponent = exponent.to_string();
        self.peaks.clear();
        self.selected_peak = None;
        self.extinction_text.clear();
        self.status_message = None;
        self.loaded = Some(loaded);
    }

    // -- Peaks ----------------------------------------------------------------

    /// Re-run detection on the active sample, replacing the peak list.
    pub fn find_peaks(&mut self) {
        let Some(spectrum) = self.spectrum() else {
            return;
        };
        let peaks = detect_peaks(
            spectrum.wavelengths(),
            spectrum.absorbances(),
            self.config.peak_rising_run_threshold,
        );
        log::info!("Found {} peaks in {}", peaks.len(), spectrum.sample_name());
        self.peaks = peaks;
        self.selected_peak = None;
        self.extinction_text.clear();
    }

    pub fn select_peak(&mut self, index: usize) {
        if index < self.peaks.len() {
            self.selected_peak = Some(index);
        }
    }

    /// Drop the peak selected in the table, if any.
    pub fn remove_selected_peak(&mut self) {
        let Some(index) = self.selected_peak.take() else {
            return;
        };
        self.peaks = remove_peak(std::mem::take(&mut self.peaks), index);
        self.extinction_text.clear();
    }

    // -- Extinction -----------------------------------------------------------

    /// Compute ε for every peak from the concentration entry fields and put
    /// the result (or a prompt) into `extinction_text`.
    pub fn calculate_extinction(&mut self) {
        let lang = self.lang();
        match Concentration::from_inputs(&self.conc_significand, &self.conc_exponent) {
            Ok(concentration) => {
                let values = compute_all(&self.peaks, &concentration);
                self.extinction_text = extinction_summary(&values, tr(lang, Msg::Nm));
                log::info!("Extinction at c = {concentration}: {}", self.extinction_text);
            }
            Err(ExtinctionError::MissingConcentration) => {
                self.extinction_text = tr(lang, Msg::EnterMolarConcentration).to_string();
            }
            Err(e) => {
                log::warn!("{e}");
                self.extinction_text = format!("{}: {e}", tr(lang, Msg::EnterMolarConcentration));
            }
        }
    }

    // -- Plot -----------------------------------------------------------------

    /// Y-axis ticks of the active sample (`[0.0]` when nothing is loaded).
    pub fn plot_ticks(&self) -> Vec<f64> {
        let absorbances = self.spectrum().map(Spectrum::absorbances).unwrap_or(&[]);
        generate_ticks(absorbances, self.config.tick_headroom)
    }

    /// Two-line description of the active sample:
    /// `"scan.dsp:\nUV (200-400 nm), step 1 nm"`.
    pub fn metadata_summary(&self) -> Option<String> {
        let spectrum = self.spectrum()?;
        let meta = spectrum.metadata();
        let lang = self.lang();
        let nm = tr(lang, Msg::Nm);
        Some(format!(
            "{}:\n{} ({}-{} {nm}), {} {} {nm}",
            meta.sample_filename,
            spectrum_type_label(lang, meta.spectrum_type),
            meta.start_wavelength,
            meta.end_wavelength,
            tr(lang, Msg::Step),
            meta.step,
        ))
    }

    // -- Configuration --------------------------------------------------------

    pub fn select_language(&mut self, lang: Language) {
        if self.config.lang == lang {
            return;
        }
        log::info!("Switching language to {}", lang.code());
        self.config.lang = lang;
        self.persist();
    }

    pub fn open_settings(&mut self) {
        self.settings_form = Some(SettingsForm::from_config(&self.config));
    }

    pub fn close_settings(&mut self) {
        self.settings_form = None;
    }

    /// Apply the open settings dialog. An invalid entry keeps the dialog open
    /// and the previous configuration in place.
    pub fn apply_settings(&mut self) -> Result<(), ConfigError> {
        let Some(form) = self.settings_form.clone() else {
            return Ok(());
        };
        if let Err(e) = self.config.apply_settings(&form) {
            log::warn!("Rejected settings: {e}");
            self.status_message = Some(format!("{}: {e}", tr(self.lang(), Msg::InvalidSetting)));
            return Err(e);
        }
        self.status_message = None;
        self.settings_form = None;
        self.persist();
        Ok(())
    }

    /// Restore factory settings (language included) and close the dialog.
    pub fn reset_settings(&mut self) {
        self.config = Config::default();
        self.settings_form = None;
        self.persist();
    }

    fn persist(&mut self) {
        if let Err(e) = self.config.save(&self.config_path) {
            log::error!("Failed to save configuration: {e}");
            self.status_message = Some(e.to_string());
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dsp::render_dsp;

    fn state_in(dir: &tempfile::TempDir) -> AppState {
        AppState::new(Config::default(), dir.path().join("cfg.json"))
    }

    fn band() -> Vec<f64> {
        vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 0.5, 0.2, 0.1]
    }

    #[test]
    fn load_sets_default_concentration() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        let text = render_dsp("s.dsp", 400, 402, 1, &[0.1, 0.5, 0.2]);
        state.load_bytes(text.as_bytes()).unwrap();
        assert_eq!(state.conc_significand, "5");
        assert_eq!(state.conc_exponent, "-5");
        assert_eq!(
            state.metadata_summary().unwrap(),
            "s.dsp:\nUV (400-402 nm), step 1 nm"
        );
    }

    #[test]
    fn failed_load_keeps_previous_sample() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        let a = band();
        state
            .load_bytes(render_dsp("s.dsp", 300, 312, 1, &a).as_bytes())
            .unwrap();
        state.find_peaks();
        assert_eq!(state.peaks.len(), 1);

        assert!(state.load_bytes(b"garbage").is_err());
        assert_eq!(state.spectrum().unwrap().sample_name(), "s");
        assert_eq!(state.peaks.len(), 1);
        assert!(state.status_message.is_some());
    }

    #[test]
    fn peak_workflow() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        state
            .load_bytes(render_dsp("s.dsp", 300, 312, 1, &band()).as_bytes())
            .unwrap();
        state.find_peaks();
        assert_eq!(state.peaks, vec![Peak::new(309, 0.9)]);

        state.conc_significand = "1".into();
        state.conc_exponent = "-4".into();
        state.calculate_extinction();
        assert_eq!(state.extinction_text, "λ max, nm (ε): 309 (9000)");

        state.select_peak(0);
        state.remove_selected_peak();
        assert!(state.peaks.is_empty());
        assert!(state.extinction_text.is_empty());
    }

    #[test]
    fn missing_concentration_prompts() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        state.conc_significand.clear();
        state.calculate_extinction();
        assert_eq!(state.extinction_text, "Enter molar concentration!");
    }

    #[test]
    fn language_switch_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        state.select_language(Language::Kk);
        let saved = Config::load(state.config_path()).unwrap();
        assert_eq!(saved.lang, Language::Kk);
    }

    #[test]
    fn invalid_settings_keep_dialog_and_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = state_in(&dir);
        state.open_settings();
        if let Some(form) = state.settings_form.as_mut() {
            form.uv_vis_border = "five hundred".into();
        }
        assert!(state.apply_settings().is_err());
        assert!(state.settings_form.is_some());
        assert_eq!(state.config, Config::default());

        if let Some(form) = state.settings_form.as_mut() {
            form.uv_vis_border = "550".into();
        }
        state.apply_settings().unwrap();
        assert!(state.settings_form.is_none());
        assert_eq!(Config::load(state.config_path()).unwrap().uv_vis_border, 550);
    }
}
