//! Discrete linear convolution of two signals.

use tracing::debug;

use crate::error::{Result, SignalError};
use crate::signals::{Signal, TimeSpan};

/// Computes full linear convolutions.
pub struct Convolver;

impl Convolver {
    /// Convolves the samples of `a` and `b`.
    ///
    /// The output has `a.len() + b.len() - 1` samples and is the raw sum
    /// `out[n] = Σ a[k]·b[n-k]`, with no normalization.
    ///
    /// # Errors
    ///
    /// * `EmptySignal` if either signal has no samples
    ///
    /// # Examples
    ///
    /// ```
    /// use samplekit::{Convolver, Signal};
    ///
    /// let a = Signal::from_raw(3.0, vec![1.0, 2.0, 3.0]).unwrap();
    /// let b = Signal::from_raw(2.0, vec![0.0, 1.0]).unwrap();
    /// assert_eq!(Convolver::convolve(&a, &b).unwrap(), vec![0.0, 1.0, 2.0, 3.0]);
    /// ```
    pub fn convolve(a: &Signal, b: &Signal) -> Result<Vec<f64>> {
        if a.is_empty() || b.is_empty() {
            return Err(SignalError::EmptySignal);
        }
        let out = convolve_samples(a.samples(), b.samples());
        debug!(left = a.len(), right = b.len(), output = out.len(), "convolved signals");
        Ok(out)
    }

    /// Convolves `a` and `b` and wraps the result in a new signal.
    ///
    /// Convolution alone does not fix a time axis, so the output is spread
    /// uniformly over `(a.start + b.start, a.end + b.end)`, half-open, at a
    /// sampling rate of `output length / span length`.
    pub fn convolve_to_signal(a: &Signal, b: &Signal) -> Result<Signal> {
        let samples = Self::convolve(a, b)?;
        let (da, db) = (a.duration(), b.duration());
        let span = TimeSpan::new(da.start() + db.start(), da.end() + db.end())?;
        let n = samples.len();
        let rate = n as f64 / span.length();
        let step = span.length() / n as f64;
        let timestamps = (0..n).map(|i| span.start() + i as f64 * step).collect();
        Ok(Signal::from_parts(timestamps, samples, span, rate))
    }
}

/// Direct-form linear convolution of two non-empty sample slices.
fn convolve_samples(a: &[f64], b: &[f64]) -> Vec<f64> {
    let mut out = vec![0.0; a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        for (j, &h) in b.iter().enumerate() {
            out[i + j] += x * h;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WaveformGenerator;

    fn raw(values: &[f64]) -> Signal {
        Signal::from_raw(values.len() as f64, values.to_vec()).unwrap()
    }

    #[test]
    fn test_known_result() {
        let out = Convolver::convolve(&raw(&[1.0, 2.0, 3.0]), &raw(&[0.0, 1.0, 0.5])).unwrap();
        assert_eq!(out, vec![0.0, 1.0, 2.5, 4.0, 1.5]);
    }

    #[test]
    fn test_identity_kernel() {
        let signal = raw(&[0.3, -1.0, 2.0, 4.0]);
        let out = Convolver::convolve(&signal, &raw(&[1.0])).unwrap();
        assert_eq!(out, signal.samples().to_vec());
    }

    #[test]
    fn test_commutative() {
        let a = raw(&[1.0, -2.0, 0.5]);
        let b = raw(&[3.0, 1.0, 4.0, 1.0, 5.0]);
        assert_eq!(
            Convolver::convolve(&a, &b).unwrap(),
            Convolver::convolve(&b, &a).unwrap()
        );
    }

    #[test]
    fn test_output_length() {
        let generator = WaveformGenerator::new();
        let a = generator.sine(1.0, 100.0, 0.0, (0.0, 0.5), 1000.0).unwrap();
        let b = generator.sine(1.0, 10.0, 0.0, (0.0, 0.5), 1000.0).unwrap();
        let out = Convolver::convolve(&a, &b).unwrap();
        assert_eq!(out.len(), 999);
    }

    #[test]
    fn test_empty_input() {
        let empty = WaveformGenerator::new()
            .sine(1.0, 1.0, 0.0, (0.0, 1.0), 0.5)
            .unwrap();
        let other = raw(&[1.0]);
        assert!(matches!(
            Convolver::convolve(&empty, &other),
            Err(SignalError::EmptySignal)
        ));
        assert!(matches!(
            Convolver::convolve(&other, &empty),
            Err(SignalError::EmptySignal)
        ));
    }

    #[test]
    fn test_to_signal_time_axis() {
        let generator = WaveformGenerator::new();
        let a = generator.sine(1.0, 100.0, 0.0, (0.0, 0.5), 1000.0).unwrap();
        let b = generator.sine(1.0, 10.0, 0.0, (0.0, 0.5), 1000.0).unwrap();
        let signal = Convolver::convolve_to_signal(&a, &b).unwrap();
        assert_eq!(signal.len(), 999);
        assert_eq!(signal.duration(), TimeSpan::new(0.0, 1.0).unwrap());
        assert_eq!(signal.timestamps()[0], 0.0);
        assert!(*signal.timestamps().last().unwrap() < 1.0);
        assert!((signal.sampling_rate() - 999.0).abs() < 1e-9);
        assert!(signal.timestamps().windows(2).all(|w| w[0] < w[1]));
    }
}
