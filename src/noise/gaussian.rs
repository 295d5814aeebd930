//! Gaussian noise generator implementation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::error::{Result, SignalError};

/// A Gaussian (normally distributed) noise generator.
///
/// Each sample is drawn independently from a zero-mean normal distribution
/// whose standard deviation is the amplitude. Output is only reproducible when
/// the generator is built from a seed or an explicitly seeded RNG.
pub struct GaussianNoise<R: Rng = StdRng> {
    /// Standard deviation of each sample
    amplitude: f64,
    distribution: Normal<f64>,
    rng: R,
}

impl GaussianNoise<StdRng> {
    /// Creates a noise generator seeded from system entropy.
    ///
    /// # Examples
    ///
    /// ```
    /// use samplekit::GaussianNoise;
    ///
    /// let mut noise = GaussianNoise::new(1.0).unwrap();
    /// let sample = noise.next_sample();
    /// assert!(sample.is_finite());
    /// ```
    pub fn new(amplitude: f64) -> Result<Self> {
        Self::with_rng(amplitude, StdRng::from_entropy())
    }

    /// Creates a reproducible noise generator.
    ///
    /// # Examples
    ///
    /// ```
    /// use samplekit::GaussianNoise;
    ///
    /// let a = GaussianNoise::seeded(1.0, 42).unwrap().render(8);
    /// let b = GaussianNoise::seeded(1.0, 42).unwrap().render(8);
    /// assert_eq!(a, b);
    /// ```
    pub fn seeded(amplitude: f64, seed: u64) -> Result<Self> {
        Self::with_rng(amplitude, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GaussianNoise<R> {
    /// Creates a noise generator drawing from a custom RNG.
    ///
    /// # Arguments
    ///
    /// * `amplitude` - Standard deviation, must be non-negative and finite
    /// * `rng` - Random number generator to use
    pub fn with_rng(amplitude: f64, rng: R) -> Result<Self> {
        let distribution = Normal::new(0.0, amplitude).map_err(|e| {
            SignalError::invalid("amplitude", format!("{e} (got {amplitude})"))
        })?;
        Ok(Self {
            amplitude,
            distribution,
            rng,
        })
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Draws the next sample.
    pub fn next_sample(&mut self) -> f64 {
        self.distribution.sample(&mut self.rng)
    }

    /// Draws `count` independent samples.
    pub fn render(&mut self, count: usize) -> Vec<f64> {
        (0..count).map(|_| self.next_sample()).collect()
    }
}
