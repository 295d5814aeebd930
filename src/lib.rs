//! Samplekit - discrete-time signal synthesis and analysis for Rust
//!
//! This library generates canonical waveforms on a uniform time base and
//! provides the transforms used to study sampling: resampling (including the
//! aliasing it causes below the Nyquist rate), amplitude quantization, FFT
//! analysis with band-limited reconstruction, and linear convolution.

pub mod error;
pub mod generator;
#[cfg(feature = "wav")]
pub mod io;
pub mod noise;
pub mod oscillators;
pub mod processing;
pub mod signals;
pub mod sweep;

// Re-export commonly used types at the crate root
pub use error::{Result, SignalError};
pub use generator::{GeneratorConfig, WaveformGenerator, WaveformKind};
#[cfg(feature = "wav")]
pub use io::read_wav;
pub use noise::GaussianNoise;
pub use oscillators::{Periodic, RectangularPulse, SineWave, SquareWave, TriangleWave, Waveform};
pub use processing::{
    AnalyzerConfig, Convolver, CubicSpline, InterpolationMode, Quantizer, Resampler,
    SpectralAnalyzer,
};
pub use signals::{IntoTimeSpan, Signal, Spectrum, TimeSpan};
