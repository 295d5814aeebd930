//! Sine waveform implementation.

use super::{Periodic, Waveform};
use std::f64::consts::PI;

/// `amplitude * sin(2π·frequency·t + phase_bias)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineWave {
    amplitude: f64,
    frequency: f64,
    /// Phase offset in radians
    phase_bias: f64,
}

impl SineWave {
    /// Creates a new sine waveform.
    ///
    /// # Arguments
    ///
    /// * `amplitude` - Peak value
    /// * `frequency` - Frequency in cycles per unit time
    /// * `phase_bias` - Phase offset in radians
    ///
    /// # Examples
    ///
    /// ```
    /// use samplekit::{SineWave, Waveform};
    ///
    /// let wave = SineWave::new(2.0, 1.0, 0.0);
    /// assert!((wave.value_at(0.25) - 2.0).abs() < 1e-12);
    /// ```
    pub fn new(amplitude: f64, frequency: f64, phase_bias: f64) -> Self {
        Self {
            amplitude,
            frequency,
            phase_bias,
        }
    }
}

impl Waveform for SineWave {
    fn value_at(&self, t: f64) -> f64 {
        self.amplitude * (2.0 * PI * self.frequency * t + self.phase_bias).sin()
    }
}

impl Periodic for SineWave {
    fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
    }

    fn frequency(&self) -> f64 {
        self.frequency
    }
}
