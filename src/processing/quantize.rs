//! Amplitude quantization onto evenly spaced levels.

use tracing::debug;

use crate::error::{Result, SignalError};
use crate::signals::Signal;

/// Maps a signal's amplitudes onto a finite set of levels.
///
/// The levels are `levels` evenly spaced values spanning the signal's current
/// `[min, max]` inclusive. Each sample moves to the nearest level, ties going
/// to the lower one. The mapping is lossy and marks the signal digital.
pub struct Quantizer;

impl Quantizer {
    /// Quantizes `signal` in place.
    ///
    /// A constant signal collapses every level onto its single value and is
    /// left unchanged apart from becoming digital.
    ///
    /// # Errors
    ///
    /// * `InvalidParameter` if `levels < 2`
    /// * `EmptySignal` if the signal has no samples
    ///
    /// # Examples
    ///
    /// ```
    /// use samplekit::{Quantizer, Signal};
    ///
    /// let mut signal = Signal::from_raw(4.0, vec![0.0, 0.4, 0.6, 1.0]).unwrap();
    /// Quantizer::quantize(&mut signal, 2).unwrap();
    /// assert_eq!(signal.samples(), &[0.0, 0.0, 1.0, 1.0]);
    /// assert!(signal.is_digital());
    /// ```
    pub fn quantize(signal: &mut Signal, levels: usize) -> Result<()> {
        if levels < 2 {
            return Err(SignalError::invalid(
                "levels",
                format!("need at least 2 levels, got {levels}"),
            ));
        }
        if signal.is_empty() {
            return Err(SignalError::EmptySignal);
        }

        let grid = level_grid(signal.samples(), levels);
        let samples = signal
            .samples()
            .iter()
            .map(|&x| grid.nearest(x))
            .collect();

        debug!(
            levels,
            min = grid.min,
            max = grid.max,
            samples = signal.len(),
            "quantized signal"
        );
        signal.set_samples(samples);
        signal.mark_digital();
        Ok(())
    }

    /// The candidate levels a signal would be quantized onto.
    pub fn levels(signal: &Signal, levels: usize) -> Result<Vec<f64>> {
        if levels < 2 {
            return Err(SignalError::invalid(
                "levels",
                format!("need at least 2 levels, got {levels}"),
            ));
        }
        if signal.is_empty() {
            return Err(SignalError::EmptySignal);
        }
        let grid = level_grid(signal.samples(), levels);
        Ok((0..levels).map(|k| grid.level(k)).collect())
    }
}

struct LevelGrid {
    min: f64,
    max: f64,
    step: f64,
    count: usize,
}

fn level_grid(samples: &[f64], count: usize) -> LevelGrid {
    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    LevelGrid {
        min,
        max,
        step: (max - min) / (count - 1) as f64,
        count,
    }
}

impl LevelGrid {
    fn level(&self, k: usize) -> f64 {
        // Pin the top level so the maximum maps onto itself exactly
        if k + 1 == self.count {
            self.max
        } else {
            self.min + k as f64 * self.step
        }
    }

    fn nearest(&self, x: f64) -> f64 {
        if self.step == 0.0 {
            return self.min;
        }
        let position = ((x - self.min) / self.step).clamp(0.0, (self.count - 1) as f64);
        let below = (position.floor() as usize).min(self.count - 1);
        let lower = self.level(below);
        if below + 1 == self.count {
            return lower;
        }
        let upper = self.level(below + 1);
        // Strictly closer wins, so exact ties stay on the lower level
        if (upper - x).abs() < (x - lower).abs() {
            upper
        } else {
            lower
        }
    }
}
