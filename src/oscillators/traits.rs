//! Core trait definitions for closed-form waveforms.

/// A waveform that can be evaluated at any instant.
///
/// Unlike a phase-accumulating oscillator, a `Waveform` is a pure function of
/// time, so rendering it over an arbitrary (even irregular) time base gives the
/// same value for the same instant every time.
pub trait Waveform {
    /// Evaluates the waveform at time `t`.
    fn value_at(&self, t: f64) -> f64;

    /// Evaluates the waveform at every timestamp.
    fn render(&self, timestamps: &[f64]) -> Vec<f64> {
        timestamps.iter().map(|&t| self.value_at(t)).collect()
    }
}

/// Common interface for waveforms that repeat with a fixed frequency.
pub trait Periodic: Waveform {
    /// Sets the repetition frequency.
    ///
    /// # Arguments
    ///
    /// * `frequency` - New frequency in cycles per unit time
    fn set_frequency(&mut self, frequency: f64);

    /// Gets the repetition frequency.
    fn frequency(&self) -> f64;

    /// Position within the current cycle at time `t`, in `[0.0, 1.0)`.
    fn phase_at(&self, t: f64) -> f64 {
        let phase = (self.frequency() * t).rem_euclid(1.0);
        // rem_euclid can round up to exactly 1.0 for tiny negative inputs
        if phase >= 1.0 { 0.0 } else { phase }
    }
}
