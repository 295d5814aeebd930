//! FFT-based spectral analysis and band-limited reconstruction.

use rustfft::FftPlanner;
use rustfft::num_complex::Complex64;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::InterpolationMode;
use crate::error::{Result, SignalError};
use crate::signals::{Signal, Spectrum};

fn default_oversampling() -> usize {
    4
}

/// Configuration for a [`SpectralAnalyzer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Rate multiplier for the cubic pre-analysis oversampling step
    #[serde(default = "default_oversampling")]
    pub oversampling_factor: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            oversampling_factor: default_oversampling(),
        }
    }
}

impl AnalyzerConfig {
    pub fn with_oversampling_factor(mut self, factor: usize) -> Self {
        self.oversampling_factor = factor;
        self
    }
}

/// Standard FFT bin frequencies for `n` samples taken at `sampling_rate`.
///
/// Bins `0..ceil(n/2)` map to `k·rate/n`; the rest wrap to negative
/// frequencies `(k - n)·rate/n`.
///
/// # Examples
///
/// ```
/// use samplekit::processing::fft_frequencies;
///
/// assert_eq!(fft_frequencies(4, 4.0), vec![0.0, 1.0, -2.0, -1.0]);
/// assert_eq!(fft_frequencies(5, 5.0), vec![0.0, 1.0, 2.0, -2.0, -1.0]);
/// ```
pub fn fft_frequencies(n: usize, sampling_rate: f64) -> Vec<f64> {
    let resolution = sampling_rate / n as f64;
    let positive = n.div_ceil(2);
    (0..n)
        .map(|k| {
            if k < positive {
                k as f64 * resolution
            } else {
                -((n - k) as f64) * resolution
            }
        })
        .collect()
}

/// Computes frequency-domain views of signals and rebuilds signals from them.
///
/// # Examples
///
/// ```
/// use samplekit::{SpectralAnalyzer, WaveformGenerator};
///
/// let mut sine = WaveformGenerator::new()
///     .sine(1.0, 50.0, 0.0, (0.0, 1.0), 1000.0)
///     .unwrap();
/// let analyzer = SpectralAnalyzer::new();
/// analyzer.analyze(&mut sine, false).unwrap();
/// assert_eq!(analyzer.peak_frequency(&sine).unwrap().abs(), 50.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SpectralAnalyzer {
    config: AnalyzerConfig,
}

impl SpectralAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Computes the magnitude spectrum of `signal` and caches it on the signal.
    ///
    /// With `use_interpolation`, the samples are first fitted with a cubic
    /// spline and evaluated at `oversampling_factor` times the sampling rate
    /// over the same duration; that denser sequence is what gets transformed.
    ///
    /// Returns `(frequencies, magnitudes)`.
    ///
    /// # Errors
    ///
    /// * `EmptySignal` if there is nothing to transform
    /// * `InvalidParameter` if the oversampling factor is zero
    pub fn analyze(
        &self,
        signal: &mut Signal,
        use_interpolation: bool,
    ) -> Result<(Vec<f64>, Vec<f64>)> {
        if signal.is_empty() {
            return Err(SignalError::EmptySignal);
        }

        let (values, rate) = if use_interpolation {
            let factor = self.config.oversampling_factor;
            if factor == 0 {
                return Err(SignalError::invalid(
                    "oversampling_factor",
                    "must be at least 1",
                ));
            }
            let rate = factor as f64 * signal.sampling_rate();
            let dense_t = signal.duration().time_base(rate)?;
            if dense_t.is_empty() {
                return Err(SignalError::EmptySignal);
            }
            let values =
                InterpolationMode::Cubic.apply(signal.timestamps(), signal.samples(), &dense_t)?;
            (values, rate)
        } else {
            (signal.samples().to_vec(), signal.sampling_rate())
        };

        let n = values.len();
        let mut bins: Vec<Complex64> = values.iter().map(|&v| Complex64::new(v, 0.0)).collect();
        let mut planner = FftPlanner::new();
        planner.plan_fft_forward(n).process(&mut bins);

        let mut spectrum = Spectrum::new(fft_frequencies(n, rate), bins, rate);
        if use_interpolation {
            spectrum = spectrum.interpolated();
        }
        debug!(
            bins = n,
            sampling_rate = rate,
            interpolated = use_interpolation,
            "analyzed signal"
        );
        let result = (
            spectrum.frequencies().to_vec(),
            spectrum.magnitudes().to_vec(),
        );
        signal.set_spectrum(spectrum);
        Ok(result)
    }

    /// Rebuilds `signal` from its cached spectrum with an ideal low-pass filter.
    ///
    /// Every bin whose frequency magnitude exceeds `cutoff_frequency` is zeroed,
    /// the inverse FFT is taken and its real part becomes the new samples. If
    /// the spectrum came from the interpolated analysis, the signal adopts the
    /// uniform time base that spectrum was computed on, at whatever factor.
    /// The cached spectrum is consumed.
    ///
    /// # Errors
    ///
    /// * `EmptySignal` if the signal has no samples
    /// * `InvalidParameter` if `cutoff_frequency` is negative or NaN
    /// * `Precondition` if the signal has not been analyzed since it last changed
    pub fn reconstruct(&self, signal: &mut Signal, cutoff_frequency: f64) -> Result<()> {
        if signal.is_empty() {
            return Err(SignalError::EmptySignal);
        }
        if cutoff_frequency.is_nan() || cutoff_frequency < 0.0 {
            return Err(SignalError::invalid(
                "cutoff_frequency",
                format!("must be non-negative, got {cutoff_frequency}"),
            ));
        }
        let spectrum = signal.take_spectrum().ok_or_else(|| {
            SignalError::Precondition("reconstruct requires a current spectrum".into())
        })?;

        let rate = spectrum.sampling_rate();
        let interpolated = spectrum.is_interpolated();
        let frequencies = spectrum.frequencies().to_vec();
        let mut bins = spectrum.into_bins();
        let mut removed = 0usize;
        for (bin, f) in bins.iter_mut().zip(&frequencies) {
            if f.abs() > cutoff_frequency {
                *bin = Complex64::new(0.0, 0.0);
                removed += 1;
            }
        }

        let n = bins.len();
        let mut planner = FftPlanner::new();
        planner.plan_fft_inverse(n).process(&mut bins);
        let scale = 1.0 / n as f64;
        let samples: Vec<f64> = bins.iter().map(|c| c.re * scale).collect();

        debug!(cutoff_frequency, bins = n, removed, "reconstructed signal");
        // Interpolated spectra describe the uniform grid, even at factor 1
        if interpolated {
            if rate != signal.sampling_rate() {
                warn!(
                    from_rate = signal.sampling_rate(),
                    to_rate = rate,
                    "reconstruction adopts the oversampled time base"
                );
            }
            let timestamps = signal.duration().time_base(rate)?;
            signal.set_time_base(timestamps, samples, rate);
        } else {
            signal.set_samples(samples);
        }
        Ok(())
    }

    /// Frequency of the strongest bin in the signal's cached spectrum.
    ///
    /// # Errors
    ///
    /// * `Precondition` if the signal has not been analyzed since it last changed
    pub fn peak_frequency(&self, signal: &Signal) -> Result<f64> {
        signal
            .spectral_data()
            .and_then(Spectrum::peak_frequency)
            .ok_or_else(|| SignalError::Precondition("signal has no current spectrum".into()))
    }
}
