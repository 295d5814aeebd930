//! Error types shared by every signal operation.

use thiserror::Error;

/// Result type for signal operations
pub type Result<T> = std::result::Result<T, SignalError>;

/// Errors raised synchronously by generators and transforms.
///
/// None of these are transient: the core performs no I/O apart from the
/// optional WAV reader, so retrying an operation with the same input always
/// fails the same way.
#[derive(Error, Debug)]
pub enum SignalError {
    /// Malformed time span
    #[error("invalid time range: start {start} must be less than end {end}")]
    InvalidRange { start: f64, end: f64 },

    /// Numeric parameter outside its domain
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Two signals disagree on duration or sampling rate
    #[error("incompatible signals: {0}")]
    IncompatibleSignal(String),

    /// Operation needs at least one sample
    #[error("signal has no samples")]
    EmptySignal,

    /// Operation called out of order
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// Failed to read audio
    #[cfg(feature = "wav")]
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),
}

impl SignalError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        SignalError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Checks that a sampling rate is finite and strictly positive.
pub(crate) fn check_rate(name: &'static str, rate: f64) -> Result<()> {
    if rate.is_finite() && rate > 0.0 {
        Ok(())
    } else {
        Err(SignalError::invalid(
            name,
            format!("must be a positive finite number, got {rate}"),
        ))
    }
}
