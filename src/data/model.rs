use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SpectrumType – UV or visible, decided by the spectral midpoint
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpectrumType {
    Uv,
    Visible,
}

impl SpectrumType {
    /// Classify a scan range against the configured UV / visible border.
    ///
    /// The midpoint is compared as a real number, so a 399–402 nm scan has a
    /// midpoint of 400.5 nm.
    pub fn classify(start_wavelength: i64, end_wavelength: i64, uv_vis_border: i64) -> Self {
        let midpoint = (start_wavelength as f64 + end_wavelength as f64) / 2.0;
        if midpoint < uv_vis_border as f64 {
            SpectrumType::Uv
        } else {
            SpectrumType::Visible
        }
    }
}

impl fmt::Display for SpectrumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpectrumType::Uv => write!(f, "UV"),
            SpectrumType::Visible => write!(f, "visible"),
        }
    }
}

// ---------------------------------------------------------------------------
// Spectrum – one loaded sample
// ---------------------------------------------------------------------------

/// Header values read from the lines around the `nm` marker.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumMetadata {
    /// Filename as written by the instrument, extension included.
    pub sample_filename: String,
    pub start_wavelength: i64,
    pub end_wavelength: i64,
    pub step: i64,
    pub spectrum_type: SpectrumType,
}

/// A single absorbance scan.
///
/// Fields are private: a spectrum is only built through
/// [`Spectrum::from_readings`], which derives the wavelength axis, so the
/// two series can never disagree in length or spacing.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    sample_name: String,
    wavelengths: Vec<i64>,
    absorbances: Vec<f64>,
    metadata: SpectrumMetadata,
}

impl Spectrum {
    /// Build a spectrum from its header and the readings in file order.
    /// `wavelengths[i] = start_wavelength + i * step`; the last one must fit
    /// in an `i64`, which `parse_dsp` checks before calling this.
    pub fn from_readings(
        sample_name: impl Into<String>,
        metadata: SpectrumMetadata,
        absorbances: Vec<f64>,
    ) -> Self {
        let wavelengths = (0..absorbances.len() as i64)
            .map(|i| metadata.start_wavelength + i * metadata.step)
            .collect();
        Spectrum {
            sample_name: sample_name.into(),
            wavelengths,
            absorbances,
            metadata,
        }
    }

    /// Sample filename with its extension removed.
    pub fn sample_name(&self) -> &str {
        &self.sample_name
    }

    pub fn wavelengths(&self) -> &[i64] {
        &self.wavelengths
    }

    pub fn absorbances(&self) -> &[f64] {
        &self.absorbances
    }

    pub fn metadata(&self) -> &SpectrumMetadata {
        &self.metadata
    }

    pub fn spectrum_type(&self) -> SpectrumType {
        self.metadata.spectrum_type
    }

    /// Number of readings.
    pub fn len(&self) -> usize {
        self.absorbances.len()
    }

    /// Whether the spectrum holds no readings.
    pub fn is_empty(&self) -> bool {
        self.absorbances.is_empty()
    }

    /// `(wavelength, absorbance)` pairs in scan order.
    pub fn points(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.wavelengths
            .iter()
            .copied()
            .zip(self.absorbances.iter().copied())
    }

    /// First and last wavelength of the series, if any.
    pub fn wavelength_range(&self) -> Option<(i64, i64)> {
        Some((*self.wavelengths.first()?, *self.wavelengths.last()?))
    }

    /// Smallest reading, `+inf` for an empty spectrum.
    pub fn min_absorbance(&self) -> f64 {
        self.absorbances.iter().copied().fold(f64::INFINITY, f64::min)
    }
}

// ---------------------------------------------------------------------------
// Peak
// ---------------------------------------------------------------------------

/// A detected absorbance maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    pub wavelength: i64,
    pub absorbance: f64,
}

impl Peak {
    pub fn new(wavelength: i64, absorbance: f64) -> Self {
        Self {
            wavelength,
            absorbance,
        }
    }
}

// ---------------------------------------------------------------------------
// Concentration – significand × 10^exponent mol/L
// ---------------------------------------------------------------------------

/// Molar concentration kept in the split form the user types it in.
/// Serialised as `[significand, exponent]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, i32)", into = "(f64, i32)")]
pub struct Concentration {
    pub significand: f64,
    pub exponent: i32,
}

impl Concentration {
    pub const fn new(significand: f64, exponent: i32) -> Self {
        Self {
            significand,
            exponent,
        }
    }

    /// The concentration in mol/L.
    pub fn molar(&self) -> f64 {
        self.significand * 10f64.powi(self.exponent)
    }
}

impl From<(f64, i32)> for Concentration {
    fn from((significand, exponent): (f64, i32)) -> Self {
        Concentration::new(significand, exponent)
    }
}

impl From<Concentration> for (f64, i32) {
    fn from(c: Concentration) -> Self {
        (c.significand, c.exponent)
    }
}

impl fmt::Display for Concentration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}e{}", self.significand, self.exponent)
    }
}

// ---------------------------------------------------------------------------
// LoadedSpectrum – what a successful file load hands to the UI
// ---------------------------------------------------------------------------

/// A parsed spectrum together with the default concentration selected for
/// its spectrum type.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSpectrum {
    pub spectrum: Spectrum,
    pub default_concentration: Concentration,
}
