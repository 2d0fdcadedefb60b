use crate::error::ExtinctionError;

use super::model::{Concentration, Peak};

// ---------------------------------------------------------------------------
// Concentration entry
// ---------------------------------------------------------------------------

impl Concentration {
    /// Read a concentration from the two entry fields of the UI
    /// (significand and power of ten).
    pub fn from_inputs(significand: &str, exponent: &str) -> Result<Self, ExtinctionError> {
        let (significand, exponent) = (significand.trim(), exponent.trim());
        if significand.is_empty() || exponent.is_empty() {
            return Err(ExtinctionError::MissingConcentration);
        }
        let value = significand
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v != 0.0)
            .ok_or_else(|| ExtinctionError::InvalidConcentration {
                field: "significand",
                value: significand.to_string(),
            })?;
        let power = exponent
            .parse::<i32>()
            .map_err(|_| ExtinctionError::InvalidConcentration {
                field: "exponent",
                value: exponent.to_string(),
            })?;
        Ok(Concentration::new(value, power))
    }
}

// ---------------------------------------------------------------------------
// Molar extinction
// ---------------------------------------------------------------------------

/// ε = A / c, with c = significand × 10^exponent mol/L.
pub fn extinction(absorbance: f64, concentration: &Concentration) -> f64 {
    absorbance / concentration.significand * 10f64.powi(-concentration.exponent)
}

/// Formatted ε for every peak, keyed by the peak wavelength.
pub fn compute_all(peaks: &[Peak], concentration: &Concentration) -> Vec<(i64, String)> {
    peaks
        .iter()
        .map(|p| {
            (
                p.wavelength,
                format_float_num(extinction(p.absorbance, concentration)),
            )
        })
        .collect()
}

/// Show a value as an integer when its one-decimal rounding already is one,
/// otherwise with a single decimal: `2.96 → "3"`, `2.94 → "2.9"`.
///
/// The one-decimal rounding works on the exact binary value (`0.35` is
/// really 0.3499… and gives "0.3"); integer ties round to even.
pub fn format_float_num(value: f64) -> String {
    let integer = value.round_ties_even();
    let one_decimal = format!("{value:.1}");
    let tenths = one_decimal.parse::<f64>().unwrap_or(value);
    if integer == tenths {
        format!("{integer:.0}")
    } else {
        one_decimal
    }
}

/// One copyable line: `λ max, nm (ε): 400 (3), 450 (2.9)`.
pub fn extinction_summary(extinctions: &[(i64, String)], nm_label: &str) -> String {
    let parts: Vec<String> = extinctions
        .iter()
        .map(|(wavelength, eps)| format!("{wavelength} ({eps})"))
        .collect();
    format!("λ max, {nm_label} (ε): {}", parts.join(", "))
}
