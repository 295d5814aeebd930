//! Frequency-domain view cached on a [`Signal`](crate::Signal) after analysis.

use rustfft::num_complex::Complex64;

/// Result of a forward FFT over a signal's samples.
///
/// Holds the complex bins alongside their magnitudes so the signal can be
/// rebuilt by an inverse transform. `sampling_rate` is the rate of the sequence
/// that was actually transformed, which is higher than the signal's own rate
/// when the analysis oversampled first.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    frequencies: Vec<f64>,
    magnitudes: Vec<f64>,
    bins: Vec<Complex64>,
    sampling_rate: f64,
    /// Transform ran on a spline-resampled copy, not the stored samples
    interpolated: bool,
}

impl Spectrum {
    pub(crate) fn new(frequencies: Vec<f64>, bins: Vec<Complex64>, sampling_rate: f64) -> Self {
        let magnitudes = bins.iter().map(|c| c.norm()).collect();
        Self {
            frequencies,
            magnitudes,
            bins,
            sampling_rate,
            interpolated: false,
        }
    }

    /// Marks the spectrum as computed on the uniform interpolated time base.
    pub(crate) fn interpolated(mut self) -> Self {
        self.interpolated = true;
        self
    }

    /// Bin centre frequencies in FFT order (non-negative first, then negative).
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Magnitude of each bin.
    pub fn magnitudes(&self) -> &[f64] {
        &self.magnitudes
    }

    /// Raw complex bins.
    pub fn bins(&self) -> &[Complex64] {
        &self.bins
    }

    /// Rate of the sequence the transform was computed on.
    pub fn sampling_rate(&self) -> f64 {
        self.sampling_rate
    }

    /// True when the transformed sequence was a spline evaluated on the
    /// uniform time base of the signal's duration.
    pub fn is_interpolated(&self) -> bool {
        self.interpolated
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Frequency of the largest-magnitude bin. Ties resolve to the lowest index.
    pub fn peak_frequency(&self) -> Option<f64> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &m) in self.magnitudes.iter().enumerate() {
            match best {
                Some((_, b)) if m <= b => {}
                _ => best = Some((i, m)),
            }
        }
        best.map(|(i, _)| self.frequencies[i])
    }

    pub(crate) fn into_bins(self) -> Vec<Complex64> {
        self.bins
    }
}
