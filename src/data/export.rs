use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use super::model::{Peak, Spectrum};

/// One CSV row of the exported spectrum.
#[derive(Debug, Serialize)]
struct ExportRow {
    wavelength_nm: i64,
    absorbance: f64,
    peak: bool,
}

/// Write the spectrum as `wavelength_nm,absorbance,peak` rows; `peak` marks
/// readings at a detected peak wavelength.
pub fn write_csv<W: Write>(writer: W, spectrum: &Spectrum, peaks: &[Peak]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (wavelength_nm, absorbance) in spectrum.points() {
        let peak = peaks.iter().any(|p| p.wavelength == wavelength_nm);
        csv_writer
            .serialize(ExportRow {
                wavelength_nm,
                absorbance,
                peak,
            })
            .with_context(|| format!("writing row for {wavelength_nm} nm"))?;
    }
    csv_writer.flush().context("flushing CSV output")?;
    Ok(())
}

/// Export the active spectrum to a CSV file.
pub fn export_csv(path: &Path, spectrum: &Spectrum, peaks: &[Peak]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_csv(file, spectrum, peaks)?;
    log::info!(
        "Exported {} readings of {} to {}",
        spectrum.len(),
        spectrum.sample_name(),
        path.display()
    );
    Ok(())
}
