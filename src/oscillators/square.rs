//! Square waveform implementation.

use super::{Periodic, Waveform};
use crate::error::{Result, SignalError};

/// A square waveform alternating between `+amplitude` and `-amplitude`.
///
/// Output is high for the first `duty` fraction of each cycle and low for the
/// rest, so a duty of 0.5 gives a symmetric square wave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareWave {
    amplitude: f64,
    frequency: f64,
    /// Fraction of each cycle spent high, in (0.0, 1.0)
    duty: f64,
}

impl SquareWave {
    /// Creates a new square waveform.
    ///
    /// # Arguments
    ///
    /// * `amplitude` - Output level (high is `+amplitude`, low is `-amplitude`)
    /// * `frequency` - Frequency in cycles per unit time
    /// * `duty` - Fraction of the cycle spent high, strictly between 0 and 1
    ///
    /// # Examples
    ///
    /// ```
    /// use samplekit::{SquareWave, Waveform};
    ///
    /// let wave = SquareWave::new(1.0, 1.0, 0.25).unwrap();
    /// assert_eq!(wave.value_at(0.1), 1.0);
    /// assert_eq!(wave.value_at(0.5), -1.0);
    /// ```
    pub fn new(amplitude: f64, frequency: f64, duty: f64) -> Result<Self> {
        if !(duty > 0.0 && duty < 1.0) {
            return Err(SignalError::invalid(
                "duty",
                format!("must lie strictly between 0 and 1, got {duty}"),
            ));
        }
        Ok(Self {
            amplitude,
            frequency,
            duty,
        })
    }

    pub fn duty(&self) -> f64 {
        self.duty
    }
}

impl Waveform for SquareWave {
    fn value_at(&self, t: f64) -> f64 {
        if self.phase_at(t) < self.duty {
            self.amplitude
        } else {
            -self.amplitude
        }
    }
}

impl Periodic for SquareWave {
    fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
    }

    fn frequency(&self) -> f64 {
        self.frequency
    }
}
