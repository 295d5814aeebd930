//! Closed-form waveforms.
//!
//! Each waveform is a pure function of time. Generators render them over a
//! uniform time base to produce a [`Signal`](crate::Signal).

mod pulse;
mod sine;
mod square;
mod traits;
mod triangle;

pub use pulse::RectangularPulse;
pub use sine::SineWave;
pub use square::SquareWave;
pub use traits::{Periodic, Waveform};
pub use triangle::TriangleWave;
