use thiserror::Error;

// ---------------------------------------------------------------------------
// DSP parsing errors (file cannot be read)
// ---------------------------------------------------------------------------

/// Everything that makes a DSP export unreadable.
///
/// None of these are recoverable for the file at hand; the caller keeps its
/// previous spectrum and asks the user for another file.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DspParseError {
    /// A required landmark line (`nm` or `#DATA`) is absent.
    #[error("missing \"{0}\" marker line")]
    MissingMarker(&'static str),

    /// The `nm` marker is the very first line, so no sample filename precedes it.
    #[error("no sample filename precedes the \"nm\" marker")]
    MissingSampleName,

    /// The file ends before one of the start/end/step lines.
    #[error("line {line}: {field} is missing")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: expected {field} as an integer, found {value:?}")]
    InvalidInteger {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("wavelength step must be positive, found {0}")]
    InvalidStep(i64),

    /// Not a number, or not finite (`inf`, `NaN`).
    #[error("line {line}: expected an absorbance reading, found {value:?}")]
    InvalidReading { line: usize, value: String },

    /// The wavelength of the last reading does not fit in an `i64`.
    #[error("wavelength axis overflows: start {start}, step {step}, {count} readings")]
    WavelengthOverflow { start: i64, step: i64, count: usize },

    #[error("no absorbance readings follow the #DATA marker")]
    EmptyData,
}

// ---------------------------------------------------------------------------
// Extinction errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtinctionError {
    /// One of the concentration entry fields is empty.
    #[error("molar concentration is not set")]
    MissingConcentration,

    #[error("invalid concentration {field}: {value:?}")]
    InvalidConcentration { field: &'static str, value: String },
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A settings entry could not be parsed; the update is rejected as a whole.
    #[error("invalid value for {field}: {value:?}")]
    InvalidValue { field: &'static str, value: String },

    #[error("configuration file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
