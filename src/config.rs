use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::model::{Concentration, SpectrumType};
use crate::data::peaks::DEFAULT_RISING_RUN_THRESHOLD;
use crate::data::ticks::DEFAULT_TICK_HEADROOM;
use crate::error::ConfigError;
use crate::i18n::Language;

/// Settings file, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "uvdv_config.json";

// ---------------------------------------------------------------------------
// Persisted configuration
// ---------------------------------------------------------------------------

/// User settings, stored as JSON. Missing keys fall back to their defaults so
/// files written by older versions still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub lang: Language,
    /// Scans whose midpoint lies below this wavelength (nm) count as UV.
    pub uv_vis_border: i64,
    pub uv_default_conc: Concentration,
    pub vis_default_conc: Concentration,
    pub peak_rising_run_threshold: u32,
    pub tick_headroom: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lang: Language::En,
            uv_vis_border: 500,
            uv_default_conc: Concentration::new(5.0, -5),
            vis_default_conc: Concentration::new(1.0, -2),
            peak_rising_run_threshold: DEFAULT_RISING_RUN_THRESHOLD,
            tick_headroom: DEFAULT_TICK_HEADROOM,
        }
    }
}

impl Config {
    /// Default concentration offered for a freshly loaded spectrum.
    pub fn default_concentration(&self, spectrum_type: SpectrumType) -> Concentration {
        match spectrum_type {
            SpectrumType::Uv => self.uv_default_conc,
            SpectrumType::Visible => self.vis_default_conc,
        }
    }

    /// Read the configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Load the configuration, falling back to defaults when the file is
    /// absent or unreadable. A missing file is created with the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No configuration at {}, writing defaults", path.display());
            let config = Config::default();
            if let Err(e) = config.save(path) {
                log::warn!("Could not write default configuration: {e}");
            }
            return config;
        }
        match Config::load(path) {
            Ok(config) => {
                log::info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring configuration at {}: {e}", path.display());
                Config::default()
            }
        }
    }

    /// Write the configuration as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::debug!("Saved configuration to {}", path.as_ref().display());
        Ok(())
    }

    /// Apply the settings dialog. Every field is validated before anything
    /// changes, so a single bad entry leaves the configuration untouched.
    pub fn apply_settings(&mut self, form: &SettingsForm) -> Result<(), ConfigError> {
        let uv_vis_border = parse_field::<i64>("uv_vis_border", &form.uv_vis_border)?;
        let uv_default_conc = Concentration::new(
            parse_significand("uv_default_conc significand", &form.uv_significand)?,
            parse_field("uv_default_conc exponent", &form.uv_exponent)?,
        );
        let vis_default_conc = Concentration::new(
            parse_significand("vis_default_conc significand", &form.vis_significand)?,
            parse_field("vis_default_conc exponent", &form.vis_exponent)?,
        );

        self.uv_vis_border = uv_vis_border;
        self.uv_default_conc = uv_default_conc;
        self.vis_default_conc = vis_default_conc;
        Ok(())
    }
}

fn parse_field<T: std::str::FromStr>(field: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse::<T>().map_err(|_| ConfigError::InvalidValue {
        field,
        value: raw.to_string(),
    })
}

fn parse_significand(field: &'static str, raw: &str) -> Result<f64, ConfigError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v != 0.0)
        .ok_or_else(|| ConfigError::InvalidValue {
            field,
            value: raw.to_string(),
        })
}

// ---------------------------------------------------------------------------
// Settings dialog contents
// ---------------------------------------------------------------------------

/// Raw text of the settings dialog entries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettingsForm {
    pub uv_vis_border: String,
    pub uv_significand: String,
    pub uv_exponent: String,
    pub vis_significand: String,
    pub vis_exponent: String,
}

impl SettingsForm {
    /// Pre-fill the dialog from the current configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            uv_vis_border: config.uv_vis_border.to_string(),
            uv_significand: config.uv_default_conc.significand.to_string(),
            uv_exponent: config.uv_default_conc.exponent.to_string(),
            vis_significand: config.vis_default_conc.significand.to_string(),
            vis_exponent: config.vis_default_conc.exponent.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_file_without_analysis_keys() {
        let json = r#"{"lang": "ru", "uv_vis_border": 450, "uv_default_conc": [2, -5], "vis_default_conc": [1, -3]}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.lang, Language::Ru);
        assert_eq!(config.uv_vis_border, 450);
        assert_eq!(config.uv_default_conc, Concentration::new(2.0, -5));
        assert_eq!(config.peak_rising_run_threshold, 5);
        assert_eq!(config.tick_headroom, 1.1);
    }

    #[test]
    fn default_concentration_by_type() {
        let config = Config::default();
        assert_eq!(
            config.default_concentration(SpectrumType::Uv),
            Concentration::new(5.0, -5)
        );
        assert_eq!(
            config.default_concentration(SpectrumType::Visible),
            Concentration::new(1.0, -2)
        );
    }

    #[test]
    fn settings_apply_all_fields() {
        let mut config = Config::default();
        let form = SettingsForm {
            uv_vis_border: "420".into(),
            uv_significand: "2.5".into(),
            uv_exponent: "-6".into(),
            vis_significand: "3".into(),
            vis_exponent: "-3".into(),
        };
        config.apply_settings(&form).unwrap();
        assert_eq!(config.uv_vis_border, 420);
        assert_eq!(config.uv_default_conc, Concentration::new(2.5, -6));
        assert_eq!(config.vis_default_conc, Concentration::new(3.0, -3));
    }

    #[test]
    fn bad_setting_rejects_whole_update() {
        let mut config = Config::default();
        let mut form = SettingsForm::from_config(&config);
        form.uv_vis_border = "480".into();
        form.vis_exponent = "minus two".into();
        let err = config.apply_settings(&form).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { field: "vis_default_conc exponent", .. }
        ));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn zero_significand_is_invalid() {
        let mut config = Config::default();
        let mut form = SettingsForm::from_config(&config);
        form.uv_significand = "0".into();
        assert!(config.apply_settings(&form).is_err());
    }

    #[test]
    fn form_round_trips_defaults() {
        let mut config = Config::default();
        let form = SettingsForm::from_config(&config);
        assert_eq!(form.uv_significand, "5");
        config.apply_settings(&form).unwrap();
        assert_eq!(config, Config::default());
    }
}
