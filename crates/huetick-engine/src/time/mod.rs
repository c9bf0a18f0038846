//! Animation timing.
//!
//! A saver redraws on a fixed cadence, not per vsync. [`Cadence`] tells the
//! runtime when the next animation tick is due so the event loop can sleep
//! between frames.

mod cadence;

pub use cadence::Cadence;
