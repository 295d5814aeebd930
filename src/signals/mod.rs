//! Signal data types.
//!
//! This module provides the value types every generator and transform works on:
//! - `Signal`, the time-domain sample container
//! - `TimeSpan`, the nominal `[start, end)` interval of a signal
//! - `Spectrum`, the frequency-domain view cached after analysis

mod signal;
mod span;
mod spectrum;

pub use signal::Signal;
pub use span::{IntoTimeSpan, TimeSpan};
pub use spectrum::Spectrum;
