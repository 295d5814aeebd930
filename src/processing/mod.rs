//! Transforms over [`Signal`](crate::Signal)s.
//!
//! - `Resampler` and `Quantizer` mutate a signal in place
//! - `SpectralAnalyzer` caches a spectrum on a signal and can rebuild it
//! - `Convolver` combines two signals into new samples

mod convolve;
mod interpolate;
mod quantize;
mod resample;
mod spectral;

pub use convolve::Convolver;
pub use interpolate::{CubicSpline, InterpolationMode, linear};
pub use quantize::Quantizer;
pub use resample::{Resampler, resample};
pub use spectral::{AnalyzerConfig, SpectralAnalyzer, fft_frequencies};
