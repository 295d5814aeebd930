//! Batch processing of independent signals across a rayon thread pool.
//!
//! Every task owns or exclusively borrows its own [`Signal`], so no
//! synchronization is needed. This is how multi-rate aliasing comparisons are
//! built: clone one dense signal per target rate, resample each copy, analyze
//! them, then low-pass them all at a common cutoff.

use rayon::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::processing::{Resampler, SpectralAnalyzer};
use crate::signals::Signal;

/// Resamples a copy of `signal` at every rate, in parallel.
///
/// With `analyze`, each copy is also run through the oversampling spectral
/// analysis so its spectrum is ready for [`lowpass_all`]. Results keep the
/// order of `rates`. The first failure aborts the sweep.
///
/// # Examples
///
/// ```
/// use samplekit::{WaveformGenerator, sweep};
///
/// let sine = WaveformGenerator::new()
///     .sine(1.0, 10.0, 0.0, (0.0, 1.0), 1000.0)
///     .unwrap();
/// let copies = sweep::resample_sweep(&sine, &[10.0, 20.0, 40.0], true).unwrap();
/// assert_eq!(copies[1].len(), 20);
/// assert!(copies.iter().all(|s| s.spectrum().is_some()));
/// ```
pub fn resample_sweep(signal: &Signal, rates: &[f64], analyze: bool) -> Result<Vec<Signal>> {
    debug!(rates = rates.len(), analyze, "starting resample sweep");
    let resampler = Resampler::new();
    let analyzer = SpectralAnalyzer::new();
    rates
        .par_iter()
        .map(|&rate| {
            let mut copy = signal.clone();
            resampler.resample(&mut copy, rate)?;
            if analyze {
                analyzer.analyze(&mut copy, true)?;
            }
            Ok(copy)
        })
        .collect()
}

/// Analyzes every signal in parallel.
pub fn analyze_all(signals: &mut [Signal], use_interpolation: bool) -> Result<()> {
    let analyzer = SpectralAnalyzer::new();
    signals
        .par_iter_mut()
        .try_for_each(|signal| analyzer.analyze(signal, use_interpolation).map(|_| ()))
}

/// Reconstructs every analyzed signal through the same ideal low-pass filter.
pub fn lowpass_all(signals: &mut [Signal], cutoff_frequency: f64) -> Result<()> {
    debug!(
        signals = signals.len(),
        cutoff_frequency, "low-passing batch"
    );
    let analyzer = SpectralAnalyzer::new();
    signals
        .par_iter_mut()
        .try_for_each(|signal| analyzer.reconstruct(signal, cutoff_frequency))
}
