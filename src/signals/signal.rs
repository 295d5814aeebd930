//! The time-domain sample container every operation works on.

use std::cmp::Ordering;
use std::ops::Add;

use super::{Spectrum, TimeSpan};
use crate::error::{Result, SignalError, check_rate};

/// A sampled signal: index-aligned timestamps and amplitudes plus metadata.
///
/// Fields are private so the invariants hold for the lifetime of the value:
/// - `timestamps` and `samples` always have the same length
/// - `timestamps` is strictly increasing
/// - `sampling_rate` is positive
/// - once digital, a signal stays digital
/// - a cached spectrum is dropped whenever `samples` or `sampling_rate` change
///
/// # Examples
///
/// ```
/// use samplekit::Signal;
///
/// let signal = Signal::from_raw(4.0, vec![0.0, 1.0, 0.0, -1.0]).unwrap();
/// assert_eq!(signal.timestamps(), &[0.0, 0.25, 0.5, 0.75]);
/// assert_eq!(signal.duration().end(), 1.0);
/// assert!(!signal.is_digital());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    timestamps: Vec<f64>,
    samples: Vec<f64>,
    duration: TimeSpan,
    sampling_rate: f64,
    is_digital: bool,
    spectrum: Option<Spectrum>,
}

impl Signal {
    /// Creates an analog signal from explicit timestamps and samples.
    ///
    /// # Arguments
    ///
    /// * `timestamps` - Strictly increasing sample times
    /// * `samples` - Amplitudes, one per timestamp
    /// * `duration` - Nominal span; may be wider than the timestamps cover
    /// * `sampling_rate` - Samples per unit time, must be positive
    pub fn new(
        timestamps: Vec<f64>,
        samples: Vec<f64>,
        duration: TimeSpan,
        sampling_rate: f64,
    ) -> Result<Self> {
        check_rate("sampling_rate", sampling_rate)?;
        if timestamps.len() != samples.len() {
            return Err(SignalError::invalid(
                "samples",
                format!(
                    "expected {} samples to match timestamps, got {}",
                    timestamps.len(),
                    samples.len()
                ),
            ));
        }
        if timestamps.windows(2).any(|w| w[0].partial_cmp(&w[1]) != Some(Ordering::Less)) {
            return Err(SignalError::invalid(
                "timestamps",
                "must be strictly increasing",
            ));
        }
        Ok(Self::from_parts(timestamps, samples, duration, sampling_rate))
    }

    /// Wraps raw audio samples read at `sampling_rate`.
    ///
    /// The duration becomes `(0, len / sampling_rate)` and sample `i` sits at
    /// `i / sampling_rate`.
    pub fn from_raw(sampling_rate: f64, samples: Vec<f64>) -> Result<Self> {
        check_rate("sampling_rate", sampling_rate)?;
        let duration = TimeSpan::new(0.0, samples.len() as f64 / sampling_rate)?;
        let timestamps = (0..samples.len())
            .map(|i| i as f64 / sampling_rate)
            .collect();
        Ok(Self::from_parts(timestamps, samples, duration, sampling_rate))
    }

    /// Assembles a signal whose invariants the caller already guarantees.
    pub(crate) fn from_parts(
        timestamps: Vec<f64>,
        samples: Vec<f64>,
        duration: TimeSpan,
        sampling_rate: f64,
    ) -> Self {
        debug_assert_eq!(timestamps.len(), samples.len());
        Self {
            timestamps,
            samples,
            duration,
            sampling_rate,
            is_digital: false,
            spectrum: None,
        }
    }

    pub fn timestamps(&self) -> &[f64] {
        &self.timestamps
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn duration(&self) -> TimeSpan {
        self.duration
    }

    pub fn sampling_rate(&self) -> f64 {
        self.sampling_rate
    }

    /// True once the signal has been quantized.
    pub fn is_digital(&self) -> bool {
        self.is_digital
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Cached spectrum from the last analysis, if still current.
    pub fn spectral_data(&self) -> Option<&Spectrum> {
        self.spectrum.as_ref()
    }

    /// Bin frequencies from the last analysis, if still current.
    pub fn frequencies(&self) -> Option<&[f64]> {
        self.spectrum.as_ref().map(Spectrum::frequencies)
    }

    /// Bin magnitudes from the last analysis, if still current.
    pub fn spectrum(&self) -> Option<&[f64]> {
        self.spectrum.as_ref().map(Spectrum::magnitudes)
    }

    /// Replaces the amplitudes, keeping the time base.
    pub(crate) fn set_samples(&mut self, samples: Vec<f64>) {
        debug_assert_eq!(samples.len(), self.timestamps.len());
        self.samples = samples;
        self.spectrum = None;
    }

    /// Replaces the whole time base.
    pub(crate) fn set_time_base(&mut self, timestamps: Vec<f64>, samples: Vec<f64>, rate: f64) {
        debug_assert_eq!(timestamps.len(), samples.len());
        self.timestamps = timestamps;
        self.samples = samples;
        self.sampling_rate = rate;
        self.spectrum = None;
    }

    pub(crate) fn mark_digital(&mut self) {
        self.is_digital = true;
    }

    pub(crate) fn set_spectrum(&mut self, spectrum: Spectrum) {
        self.spectrum = Some(spectrum);
    }

    pub(crate) fn take_spectrum(&mut self) -> Option<Spectrum> {
        self.spectrum.take()
    }

    /// Element-wise sum of two signals sharing duration and sampling rate.
    ///
    /// The result reuses `self`'s timestamps, is analog and carries no spectrum.
    ///
    /// # Examples
    ///
    /// ```
    /// use samplekit::{TimeSpan, WaveformGenerator};
    ///
    /// let span = TimeSpan::new(0.0, 1.0).unwrap();
    /// let generator = WaveformGenerator::new();
    /// let a = generator.sine(1.0, 3.0, 0.0, span, 100.0).unwrap();
    /// let b = generator.sine(0.5, 7.0, 0.0, span, 100.0).unwrap();
    /// let mixed = a.try_add(&b).unwrap();
    /// assert_eq!(mixed.len(), 100);
    /// ```
    pub fn try_add(&self, other: &Signal) -> Result<Signal> {
        if self.duration != other.duration {
            return Err(SignalError::IncompatibleSignal(format!(
                "durations differ: {:?} vs {:?}",
                <(f64, f64)>::from(self.duration),
                <(f64, f64)>::from(other.duration)
            )));
        }
        if self.sampling_rate != other.sampling_rate {
            return Err(SignalError::IncompatibleSignal(format!(
                "sampling rates differ: {} vs {}",
                self.sampling_rate, other.sampling_rate
            )));
        }
        if self.len() != other.len() {
            return Err(SignalError::IncompatibleSignal(format!(
                "lengths differ: {} vs {}",
                self.len(),
                other.len()
            )));
        }
        let samples = self
            .samples
            .iter()
            .zip(&other.samples)
            .map(|(a, b)| a + b)
            .collect();
        Ok(Signal::from_parts(
            self.timestamps.clone(),
            samples,
            self.duration,
            self.sampling_rate,
        ))
    }
}

impl Add<&Signal> for &Signal {
    type Output = Result<Signal>;

    fn add(self, other: &Signal) -> Self::Output {
        self.try_add(other)
    }
}
