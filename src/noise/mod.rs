//! Noise generators.

mod gaussian;

pub use gaussian::GaussianNoise;
