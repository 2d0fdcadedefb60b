use std::path::Path;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::error::DspParseError;

use super::dsp::parse_dsp;
use super::encoding::decode_dsp_bytes;
use super::model::LoadedSpectrum;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Decode and parse the raw bytes of a DSP export, then pick the default
/// concentration configured for its spectrum type.
pub fn load_spectrum(bytes: &[u8], config: &Config) -> Result<LoadedSpectrum, DspParseError> {
    let text = decode_dsp_bytes(bytes);
    let spectrum = parse_dsp(&text, config.uv_vis_border)?;
    let default_concentration = config.default_concentration(spectrum.spectrum_type());
    Ok(LoadedSpectrum {
        spectrum,
        default_concentration,
    })
}

/// Read a `.dsp` file from disk and load it.
pub fn load_file(path: &Path, config: &Config) -> Result<LoadedSpectrum> {
    let bytes =
        std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    load_spectrum(&bytes, config).with_context(|| format!("parsing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dsp::render_dsp;
    use crate::data::model::{Concentration, SpectrumType};

    #[test]
    fn uv_scan_gets_uv_default() {
        let text = render_dsp("dye.dsp", 400, 402, 1, &[0.1, 0.5, 0.2]);
        let loaded = load_spectrum(text.as_bytes(), &Config::default()).unwrap();
        assert_eq!(loaded.spectrum.wavelengths(), &[400, 401, 402]);
        assert_eq!(loaded.spectrum.spectrum_type(), SpectrumType::Uv);
        assert_eq!(loaded.default_concentration, Concentration::new(5.0, -5));
    }

    #[test]
    fn visible_scan_gets_visible_default() {
        let text = render_dsp("dye.dsp", 450, 750, 5, &[0.1; 61]);
        let loaded = load_spectrum(text.as_bytes(), &Config::default()).unwrap();
        assert_eq!(loaded.spectrum.spectrum_type(), SpectrumType::Visible);
        assert_eq!(loaded.default_concentration, Concentration::new(1.0, -2));
    }

    #[test]
    fn border_comes_from_config() {
        let config = Config {
            uv_vis_border: 300,
            ..Config::default()
        };
        let text = render_dsp("dye.dsp", 400, 402, 1, &[0.1, 0.5, 0.2]);
        let loaded = load_spectrum(text.as_bytes(), &config).unwrap();
        assert_eq!(loaded.spectrum.spectrum_type(), SpectrumType::Visible);
    }

    #[test]
    fn missing_file_mentions_path() {
        let err = load_file(Path::new("/nonexistent/scan.dsp"), &Config::default()).unwrap_err();
        assert!(format!("{err:#}").contains("scan.dsp"));
    }
}
