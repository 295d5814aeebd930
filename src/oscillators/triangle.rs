//! Triangle and sawtooth waveforms.

use super::{Periodic, Waveform};
use crate::error::{Result, SignalError};

/// A periodic ramp with configurable symmetry.
///
/// Each cycle starts at `-amplitude`, rises linearly to `+amplitude` at the
/// `width` fraction of the cycle, then falls linearly back to `-amplitude`.
/// A width of 1.0 is a rising sawtooth, 0.0 a falling sawtooth and 0.5 a
/// symmetric triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleWave {
    amplitude: f64,
    frequency: f64,
    /// Fraction of the cycle spent rising, in [0.0, 1.0]
    width: f64,
}

impl TriangleWave {
    /// Creates a new triangle waveform.
    ///
    /// # Arguments
    ///
    /// * `amplitude` - Peak value
    /// * `frequency` - Frequency in cycles per unit time
    /// * `width` - Rising fraction of each cycle, between 0 and 1 inclusive
    ///
    /// # Examples
    ///
    /// ```
    /// use samplekit::{TriangleWave, Waveform};
    ///
    /// let wave = TriangleWave::new(1.0, 1.0, 0.5).unwrap();
    /// assert_eq!(wave.value_at(0.0), -1.0);
    /// assert_eq!(wave.value_at(0.5), 1.0);
    /// ```
    pub fn new(amplitude: f64, frequency: f64, width: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&width) {
            return Err(SignalError::invalid(
                "width",
                format!("must lie between 0 and 1, got {width}"),
            ));
        }
        Ok(Self {
            amplitude,
            frequency,
            width,
        })
    }

    /// A sawtooth rising from `-amplitude` to `+amplitude` each cycle.
    pub fn rising_sawtooth(amplitude: f64, frequency: f64) -> Self {
        Self {
            amplitude,
            frequency,
            width: 1.0,
        }
    }

    /// A sawtooth falling from `+amplitude` to `-amplitude` each cycle.
    pub fn falling_sawtooth(amplitude: f64, frequency: f64) -> Self {
        Self {
            amplitude,
            frequency,
            width: 0.0,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }
}

impl Waveform for TriangleWave {
    fn value_at(&self, t: f64) -> f64 {
        let phase = self.phase_at(t);
        // The branches never divide by zero: phase < 0 and phase >= 1 are impossible
        let unit = if phase < self.width {
            -1.0 + 2.0 * phase / self.width
        } else {
            1.0 - 2.0 * (phase - self.width) / (1.0 - self.width)
        };
        self.amplitude * unit
    }
}

impl Periodic for TriangleWave {
    fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
    }

    fn frequency(&self) -> f64 {
        self.frequency
    }
}
