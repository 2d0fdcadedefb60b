//! Spectral data pipeline of the UV-vis DSP viewer.
//!
//! Raw `.dsp` bytes are decoded and parsed into a [`data::model::Spectrum`],
//! scanned for peaks, and turned into molar extinction coefficients for a
//! given concentration. [`state::AppState`] wraps the pipeline as the session
//! the desktop shell drives.

pub mod config;
pub mod data;
pub mod error;
pub mod i18n;
pub mod state;

pub use config::{Config, SettingsForm, CONFIG_FILE_NAME};
pub use data::loader::{load_file, load_spectrum};
pub use data::model::{Concentration, LoadedSpectrum, Peak, Spectrum, SpectrumMetadata, SpectrumType};
pub use error::{ConfigError, DspParseError, ExtinctionError};
