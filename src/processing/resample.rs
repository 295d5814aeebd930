//! Rebuilds a signal's time base at a new sampling rate.

use tracing::debug;

use super::InterpolationMode;
use crate::error::{Result, SignalError, check_rate};
use crate::signals::Signal;

/// Resamples signals in place by interpolating the original samples.
///
/// New timestamps follow the uniform time base over the signal's unchanged
/// duration. No anti-aliasing filter is applied: resampling a tone below twice
/// its frequency yields the folded alias, exactly as sampling the continuous
/// waveform at that rate would.
///
/// # Examples
///
/// ```
/// use samplekit::{Resampler, WaveformGenerator};
///
/// let generator = WaveformGenerator::new();
/// let mut sine = generator.sine(1.0, 3.0, 0.0, (0.0, 10.0), 1000.0).unwrap();
/// Resampler::new().resample(&mut sine, 100.0).unwrap();
/// assert_eq!(sine.len(), 1000);
/// assert_eq!(sine.sampling_rate(), 100.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Resampler {
    interpolation: InterpolationMode,
}

impl Resampler {
    /// Creates a resampler using linear interpolation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the interpolation mode (builder pattern).
    pub fn with_interpolation(mut self, mode: InterpolationMode) -> Self {
        self.interpolation = mode;
        self
    }

    pub fn interpolation(&self) -> InterpolationMode {
        self.interpolation
    }

    /// Replaces `signal`'s timestamps, samples and sampling rate.
    ///
    /// # Errors
    ///
    /// * `InvalidParameter` if `new_rate` is not positive
    /// * `EmptySignal` if the signal has no samples, or the new rate leaves no
    ///   room for a single sample in the duration
    pub fn resample(&self, signal: &mut Signal, new_rate: f64) -> Result<()> {
        check_rate("new_rate", new_rate)?;
        if signal.is_empty() {
            return Err(SignalError::EmptySignal);
        }
        let timestamps = signal.duration().time_base(new_rate)?;
        if timestamps.is_empty() {
            return Err(SignalError::EmptySignal);
        }
        let samples = self
            .interpolation
            .apply(signal.timestamps(), signal.samples(), &timestamps)?;

        debug!(
            from_rate = signal.sampling_rate(),
            to_rate = new_rate,
            from_len = signal.len(),
            to_len = samples.len(),
            mode = ?self.interpolation,
            "resampled signal"
        );
        signal.set_time_base(timestamps, samples, new_rate);
        Ok(())
    }
}

/// Resamples `signal` in place with linear interpolation.
pub fn resample(signal: &mut Signal, new_rate: f64) -> Result<()> {
    Resampler::new().resample(signal, new_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Quantizer, SpectralAnalyzer, WaveformGenerator};

    fn sine(frequency: f64, rate: f64) -> Signal {
        WaveformGenerator::new()
            .sine(1.0, frequency, 0.0, (0.0, 1.0), rate)
            .unwrap()
    }

    #[test]
    fn test_rejects_bad_rate() {
        let mut signal = sine(1.0, 100.0);
        assert!(matches!(
            resample(&mut signal, 0.0),
            Err(SignalError::InvalidParameter { .. })
        ));
        assert!(resample(&mut signal, -3.0).is_err());
        assert_eq!(signal.len(), 100);
    }

    #[test]
    fn test_rejects_empty() {
        let mut signal = WaveformGenerator::new()
            .sine(1.0, 1.0, 0.0, (0.0, 1.0), 0.5)
            .unwrap();
        assert!(signal.is_empty());
        assert!(matches!(
            resample(&mut signal, 10.0),
            Err(SignalError::EmptySignal)
        ));
    }

    #[test]
    fn test_rate_too_low_for_duration() {
        let mut signal = sine(1.0, 100.0);
        assert!(matches!(
            resample(&mut signal, 0.5),
            Err(SignalError::EmptySignal)
        ));
    }

    #[test]
    fn test_updates_time_base() {
        let mut signal = sine(2.0, 1000.0);
        resample(&mut signal, 50.0).unwrap();
        assert_eq!(signal.len(), 50);
        assert_eq!(signal.timestamps().len(), 50);
        assert_eq!(signal.sampling_rate(), 50.0);
        assert!((signal.timestamps()[1] - 0.02).abs() < 1e-15);
    }

    #[test]
    fn test_round_trip_band_limited() {
        let original = sine(2.0, 1000.0);
        let mut signal = original.clone();
        resample(&mut signal, 100.0).unwrap();
        resample(&mut signal, 1000.0).unwrap();
        assert_eq!(signal.len(), original.len());
        // Beyond 0.99 the down-sampled copy only extrapolates its last value
        for ((t, a), b) in original
            .timestamps()
            .iter()
            .zip(original.samples())
            .zip(signal.samples())
        {
            if *t <= 0.99 {
                assert!((a - b).abs() < 0.01, "t = {t}: {a} vs {b}");
            }
        }
    }

    #[test]
    fn test_round_trip_under_nyquist_loses_shape() {
        let original = sine(2.0, 1000.0);
        let mut signal = original.clone();
        resample(&mut signal, 3.0).unwrap();
        resample(&mut signal, 1000.0).unwrap();
        let worst = original
            .samples()
            .iter()
            .zip(signal.samples())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max);
        assert!(worst > 0.5);
    }

    #[test]
    fn test_keeps_digital_flag() {
        let mut signal = sine(2.0, 100.0);
        Quantizer::quantize(&mut signal, 4).unwrap();
        resample(&mut signal, 50.0).unwrap();
        assert!(signal.is_digital());
    }

    #[test]
    fn test_drops_spectrum() {
        let mut signal = sine(2.0, 100.0);
        SpectralAnalyzer::new().analyze(&mut signal, false).unwrap();
        resample(&mut signal, 50.0).unwrap();
        assert!(signal.spectrum().is_none());
    }

    #[test]
    fn test_cubic_mode() {
        let original = sine(2.0, 1000.0);
        let mut signal = original.clone();
        let resampler = Resampler::new().with_interpolation(InterpolationMode::Cubic);
        resampler.resample(&mut signal, 100.0).unwrap();
        resampler.resample(&mut signal, 1000.0).unwrap();
        for ((t, a), b) in original
            .timestamps()
            .iter()
            .zip(original.samples())
            .zip(signal.samples())
        {
            if (0.05..=0.95).contains(t) {
                assert!((a - b).abs() < 1e-3);
            }
        }
    }
}
