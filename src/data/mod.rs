/// Data layer: core types, decoding, parsing and spectral analysis.
///
/// Architecture:
/// ```text
///  raw .dsp bytes
///        │
///        ▼
///   ┌──────────┐
///   │ encoding  │  guess charset, decode, strip CR
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   dsp     │  landmarks → Spectrum (+ UV / visible type)
///   └──────────┘
///        │
///        ├──────────────► ticks       absorbances → y-axis ticks
///        ▼
///   ┌──────────┐
///   │  peaks    │  run-length maxima → Vec<Peak>
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ extinction │  peaks + concentration → ε strings
///   └────────────┘
/// ```
///
/// `loader` glues the first two stages together; `export` writes the active
/// spectrum back out as CSV.

pub mod dsp;
pub mod encoding;
pub mod export;
pub mod extinction;
pub mod loader;
pub mod model;
pub mod peaks;
pub mod ticks;
