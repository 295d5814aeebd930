//! Rectangular pulse waveform.

use super::Waveform;
use crate::error::{Result, SignalError};

/// A single rectangular pulse of a given width centred at `t = 0`.
///
/// Built from a difference of sign functions, so the value is exactly
/// `amplitude` strictly inside `[-width/2, width/2]`, zero strictly outside and
/// `amplitude / 2` on either edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangularPulse {
    amplitude: f64,
    /// Total width of the pulse
    width: f64,
}

impl RectangularPulse {
    /// Creates a new rectangular pulse.
    ///
    /// # Arguments
    ///
    /// * `amplitude` - Level inside the pulse
    /// * `width` - Total pulse width, must be non-negative
    ///
    /// # Examples
    ///
    /// ```
    /// use samplekit::{RectangularPulse, Waveform};
    ///
    /// let pulse = RectangularPulse::new(13.0, 2.0).unwrap();
    /// assert_eq!(pulse.value_at(0.0), 13.0);
    /// assert_eq!(pulse.value_at(1.0), 6.5);
    /// assert_eq!(pulse.value_at(3.0), 0.0);
    /// ```
    pub fn new(amplitude: f64, width: f64) -> Result<Self> {
        if !(width >= 0.0 && width.is_finite()) {
            return Err(SignalError::invalid(
                "pulse_width",
                format!("must be a non-negative finite number, got {width}"),
            ));
        }
        Ok(Self { amplitude, width })
    }

    pub fn width(&self) -> f64 {
        self.width
    }
}

/// Sign function with `sign(0) == 0`, unlike `f64::signum`.
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

impl Waveform for RectangularPulse {
    fn value_at(&self, t: f64) -> f64 {
        let half = self.width / 2.0;
        self.amplitude * (sign(t + half) - sign(t - half)) / 2.0
    }
}
