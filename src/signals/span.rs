//! Nominal time span of a signal and the uniform time base derived from it.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SignalError, check_rate};

/// A half-open time interval `[start, end)` with `start < end`.
///
/// # Examples
///
/// ```
/// use samplekit::TimeSpan;
///
/// let span = TimeSpan::new(0.0, 1.0).unwrap();
/// assert_eq!(span.sample_count(1000.0), 1000);
/// assert!(TimeSpan::new(1.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct TimeSpan {
    start: f64,
    end: f64,
}

impl TimeSpan {
    /// Creates a span, rejecting `start >= end` and non-finite bounds.
    pub fn new(start: f64, end: f64) -> Result<Self> {
        if !(start.is_finite() && end.is_finite()) || start >= end {
            return Err(SignalError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    /// Length of the span (`end - start`).
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Number of uniform samples that fit in the span: `floor(rate * length)`.
    pub fn sample_count(&self, sampling_rate: f64) -> usize {
        (sampling_rate * self.length()).floor().max(0.0) as usize
    }

    /// Uniform timestamps `start + i / rate` for `i` in `0..sample_count(rate)`.
    ///
    /// `end` itself is never included.
    pub fn time_base(&self, sampling_rate: f64) -> Result<Vec<f64>> {
        check_rate("sampling_rate", sampling_rate)?;
        let count = self.sample_count(sampling_rate);
        Ok((0..count)
            .map(|i| self.start + i as f64 / sampling_rate)
            .collect())
    }
}

/// Anything that can be validated into a [`TimeSpan`].
///
/// Lets generator methods accept either a checked `TimeSpan` or a raw
/// `(start, end)` pair.
pub trait IntoTimeSpan {
    fn into_time_span(self) -> Result<TimeSpan>;
}

impl IntoTimeSpan for TimeSpan {
    fn into_time_span(self) -> Result<TimeSpan> {
        Ok(self)
    }
}

impl IntoTimeSpan for (f64, f64) {
    fn into_time_span(self) -> Result<TimeSpan> {
        TimeSpan::new(self.0, self.1)
    }
}

impl TryFrom<(f64, f64)> for TimeSpan {
    type Error = SignalError;

    fn try_from((start, end): (f64, f64)) -> Result<Self> {
        TimeSpan::new(start, end)
    }
}

impl From<TimeSpan> for (f64, f64) {
    fn from(span: TimeSpan) -> Self {
        (span.start, span.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_inverted_and_empty_ranges() {
        assert!(matches!(
            TimeSpan::new(2.0, 1.0),
            Err(SignalError::InvalidRange { .. })
        ));
        assert!(TimeSpan::new(0.0, 0.0).is_err());
        assert!(TimeSpan::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_sample_count_truncates() {
        let span = TimeSpan::new(0.0, 1.0).unwrap();
        assert_eq!(span.sample_count(1000.0), 1000);
        assert_eq!(span.sample_count(20.5), 20);
        assert_eq!(span.sample_count(0.5), 0);

        let centred = TimeSpan::new(-6.0, 6.0).unwrap();
        assert_eq!(centred.sample_count(1000.0), 12000);
    }

    #[test]
    fn test_time_base_is_half_open() {
        let span = TimeSpan::new(1.0, 2.0).unwrap();
        let t = span.time_base(4.0).unwrap();
        assert_eq!(t, vec![1.0, 1.25, 1.5, 1.75]);
    }

    #[test]
    fn test_time_base_rejects_bad_rate() {
        let span = TimeSpan::new(0.0, 1.0).unwrap();
        assert!(span.time_base(0.0).is_err());
        assert!(span.time_base(-10.0).is_err());
    }

    #[test]
    fn test_tuple_conversions() {
        let span: TimeSpan = (0.0, 0.5).try_into().unwrap();
        assert_eq!(span.length(), 0.5);
        let pair: (f64, f64) = span.into();
        assert_eq!(pair, (0.0, 0.5));
        assert!(TimeSpan::try_from((1.0, 0.0)).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let span: TimeSpan = serde_json::from_str("[0.0, 1.0]").unwrap();
        assert_eq!(span, TimeSpan::new(0.0, 1.0).unwrap());
        assert_eq!(serde_json::to_string(&span).unwrap(), "[0.0,1.0]");

        assert!(serde_json::from_str::<TimeSpan>("[1.0, 0.0]").is_err());
        assert!(serde_json::from_str::<TimeSpan>("[0.5, 0.5]").is_err());
    }
}
