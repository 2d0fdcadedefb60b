use std::fmt::Write as _;

use crate::error::DspParseError;

use super::model::{Spectrum, SpectrumMetadata, SpectrumType};

/// Line that separates the sample filename from the scan range.
pub const UNIT_MARKER: &str = "nm";
/// Line after which every non-blank line is an absorbance reading.
pub const DATA_MARKER: &str = "#DATA";

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// Parse a decoded DSP export (carriage returns already stripped).
///
/// Layout relied upon:
///
/// ```text
/// <sample filename>
/// nm
/// <start wavelength>
/// <end wavelength>
/// <step>
/// ...
/// #DATA
/// <absorbance>
/// <absorbance>
/// ...
/// ```
///
/// Everything else in the file is ignored.
pub fn parse_dsp(text: &str, uv_vis_border: i64) -> Result<Spectrum, DspParseError> {
    let lines: Vec<&str> = text.split('\n').collect();

    let marker_idx = lines
        .iter()
        .position(|l| *l == UNIT_MARKER)
        .ok_or(DspParseError::MissingMarker(UNIT_MARKER))?;
    if marker_idx == 0 {
        return Err(DspParseError::MissingSampleName);
    }
    let sample_filename = lines[marker_idx - 1].to_string();
    let sample_name = strip_extension(&sample_filename).to_string();

    let start_wavelength = header_int(&lines, marker_idx + 1, "start wavelength")?;
    let end_wavelength = header_int(&lines, marker_idx + 2, "end wavelength")?;
    let step = header_int(&lines, marker_idx + 3, "step")?;
    if step <= 0 {
        return Err(DspParseError::InvalidStep(step));
    }

    let spectrum_type = SpectrumType::classify(start_wavelength, end_wavelength, uv_vis_border);

    let data_idx = lines
        .iter()
        .position(|l| *l == DATA_MARKER)
        .ok_or(DspParseError::MissingMarker(DATA_MARKER))?;

    let absorbances = lines[data_idx + 1..]
        .iter()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(offset, l)| {
            l.trim()
                .parse::<f64>()
                .ok()
                .filter(|a| a.is_finite())
                .ok_or_else(|| DspParseError::InvalidReading {
                    line: data_idx + offset + 2,
                    value: l.to_string(),
                })
        })
        .collect::<Result<Vec<f64>, _>>()?;
    if absorbances.is_empty() {
        return Err(DspParseError::EmptyData);
    }
    let last_offset = i64::try_from(absorbances.len() - 1).ok();
    if last_offset
        .and_then(|n| n.checked_mul(step))
        .and_then(|d| start_wavelength.checked_add(d))
        .is_none()
    {
        return Err(DspParseError::WavelengthOverflow {
            start: start_wavelength,
            step,
            count: absorbances.len(),
        });
    }

    let metadata = SpectrumMetadata {
        sample_filename,
        start_wavelength,
        end_wavelength,
        step,
        spectrum_type,
    };
    Ok(Spectrum::from_readings(sample_name, metadata, absorbances))
}

fn header_int(lines: &[&str], idx: usize, field: &'static str) -> Result<i64, DspParseError> {
    let raw = lines.get(idx).ok_or(DspParseError::MissingField {
        line: idx + 1,
        field,
    })?;
    raw.trim()
        .parse::<i64>()
        .map_err(|_| DspParseError::InvalidInteger {
            line: idx + 1,
            field,
            value: raw.to_string(),
        })
}

/// Drop the extension from a filename: `"a.b.dsp"` → `"a.b"`.
///
/// Leading dots of the last path component don't start an extension
/// (`".dsp"` stays `".dsp"`), and both `/` and `\` count as separators since
/// the name may come from a Windows instrument PC.
pub fn strip_extension(filename: &str) -> &str {
    let base_start = filename.rfind(['/', '\\']).map_or(0, |i| i + 1);
    let base = &filename[base_start..];
    match base.rfind('.') {
        Some(dot) if base[..dot].chars().any(|c| c != '.') => &filename[..base_start + dot],
        _ => filename,
    }
}

// ---------------------------------------------------------------------------
// Writer
// ---------------------------------------------------------------------------

/// Render a minimal DSP document that [`parse_dsp`] reads back exactly.
pub fn render_dsp(
    sample_filename: &str,
    start_wavelength: i64,
    end_wavelength: i64,
    step: i64,
    absorbances: &[f64],
) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{sample_filename}");
    let _ = writeln!(out, "{UNIT_MARKER}");
    let _ = writeln!(out, "{start_wavelength}");
    let _ = writeln!(out, "{end_wavelength}");
    let _ = writeln!(out, "{step}");
    let _ = writeln!(out, "{DATA_MARKER}");
    for a in absorbances {
        let _ = writeln!(out, "{a}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = "Scan header\nsample_01.dsp\nnm\n400\n402\n1\nsome other field\n#DATA\n0.1\n0.5\n0.2\n";

    #[test]
    fn parses_basic_scenario() {
        let sp = parse_dsp(SCENARIO, 500).unwrap();
        assert_eq!(sp.sample_name(), "sample_01");
        assert_eq!(sp.wavelengths(), &[400, 401, 402]);
        assert_eq!(sp.absorbances(), &[0.1, 0.5, 0.2]);
        assert_eq!(sp.metadata().step, 1);
        assert_eq!(sp.metadata().end_wavelength, 402);
        assert_eq!(sp.spectrum_type(), SpectrumType::Uv);
    }

    #[test]
    fn midpoint_at_border_is_visible() {
        let text = render_dsp("v.dsp", 400, 600, 10, &[0.3]);
        let sp = parse_dsp(&text, 500).unwrap();
        assert_eq!(sp.spectrum_type(), SpectrumType::Visible);
    }

    #[test]
    fn blank_lines_after_data_are_ignored() {
        let text = "s.dsp\nnm\n300\n304\n2\n#DATA\n\n1.5\n  \n2.5\n\n";
        let sp = parse_dsp(text, 500).unwrap();
        assert_eq!(sp.wavelengths(), &[300, 302]);
        assert_eq!(sp.absorbances(), &[1.5, 2.5]);
    }

    #[test]
    fn missing_unit_marker() {
        let err = parse_dsp("s.dsp\nNM\n1\n2\n1\n#DATA\n0.1\n", 500).unwrap_err();
        assert_eq!(err, DspParseError::MissingMarker("nm"));
    }

    #[test]
    fn marker_on_first_line_has_no_sample_name() {
        let err = parse_dsp("nm\n1\n2\n1\n#DATA\n0.1\n", 500).unwrap_err();
        assert_eq!(err, DspParseError::MissingSampleName);
    }

    #[test]
    fn missing_data_marker() {
        let err = parse_dsp("s.dsp\nnm\n1\n2\n1\n0.1\n", 500).unwrap_err();
        assert_eq!(err, DspParseError::MissingMarker("#DATA"));
    }

    #[test]
    fn non_integer_header() {
        let err = parse_dsp("s.dsp\nnm\n400\n40x\n1\n#DATA\n0.1\n", 500).unwrap_err();
        assert_eq!(
            err,
            DspParseError::InvalidInteger {
                line: 4,
                field: "end wavelength",
                value: "40x".into()
            }
        );
    }

    #[test]
    fn truncated_header() {
        let err = parse_dsp("s.dsp\nnm\n400", 500).unwrap_err();
        assert_eq!(
            err,
            DspParseError::MissingField {
                line: 4,
                field: "end wavelength"
            }
        );
    }

    #[test]
    fn non_positive_step_is_rejected() {
        let err = parse_dsp("s.dsp\nnm\n400\n402\n0\n#DATA\n0.1\n", 500).unwrap_err();
        assert_eq!(err, DspParseError::InvalidStep(0));
    }

    #[test]
    fn non_numeric_reading_reports_line() {
        let err = parse_dsp("s.dsp\nnm\n400\n402\n1\n#DATA\n0.1\nabc\n", 500).unwrap_err();
        assert_eq!(
            err,
            DspParseError::InvalidReading {
                line: 8,
                value: "abc".into()
            }
        );
    }

    #[test]
    fn non_finite_readings_are_rejected() {
        let err = parse_dsp("s.dsp\nnm\n400\n401\n1\n#DATA\n0.1\ninf\n", 500).unwrap_err();
        assert_eq!(
            err,
            DspParseError::InvalidReading {
                line: 8,
                value: "inf".into()
            }
        );
        let err = parse_dsp("s.dsp\nnm\n400\n401\n1\n#DATA\nNaN\n", 500).unwrap_err();
        assert!(matches!(err, DspParseError::InvalidReading { line: 7, .. }));
    }

    #[test]
    fn oversized_step_overflows_the_axis() {
        let text = "s.dsp\nnm\n0\n0\n4611686018427387904\n#DATA\n0.1\n0.2\n0.3\n";
        let err = parse_dsp(text, 500).unwrap_err();
        assert_eq!(
            err,
            DspParseError::WavelengthOverflow {
                start: 0,
                step: 4_611_686_018_427_387_904,
                count: 3
            }
        );
        // Two readings still fit.
        let text = "s.dsp\nnm\n0\n0\n4611686018427387904\n#DATA\n0.1\n0.2\n";
        let sp = parse_dsp(text, 500).unwrap();
        assert_eq!(sp.wavelengths(), &[0, 4_611_686_018_427_387_904]);
    }

    #[test]
    fn no_readings() {
        let err = parse_dsp("s.dsp\nnm\n400\n402\n1\n#DATA\n\n", 500).unwrap_err();
        assert_eq!(err, DspParseError::EmptyData);
    }

    #[test]
    fn writer_starts_with_the_filename() {
        let text = render_dsp("w.dsp", 400, 402, 2, &[0.5, 0.25]);
        assert_eq!(text, "w.dsp\nnm\n400\n402\n2\n#DATA\n0.5\n0.25\n");
    }

    #[test]
    fn extension_stripping() {
        assert_eq!(strip_extension("sample.dsp"), "sample");
        assert_eq!(strip_extension("a.b.dsp"), "a.b");
        assert_eq!(strip_extension("noext"), "noext");
        assert_eq!(strip_extension(".dsp"), ".dsp");
        assert_eq!(strip_extension(r"C:\data.d\scan"), r"C:\data.d\scan");
        assert_eq!(strip_extension(r"C:\data\scan.dsp"), r"C:\data\scan");
    }
}
