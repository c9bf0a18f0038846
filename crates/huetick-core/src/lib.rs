//! Pure screen-saver logic: wall-clock time to color and label.
//!
//! This crate has no GUI or GPU dependencies. A host runtime drives the
//! [`Saver`] contract and supplies a [`Painter`] to draw through, which keeps
//! everything here testable headless.

pub mod clock;
pub mod paint;
pub mod saver;
pub mod swatch;
pub mod view;

pub use clock::{ClockReading, ClockSource, SystemClock};
pub use paint::{Painter, Rgba};
pub use saver::{Invalidate, Saver, Size, FRAME_INTERVAL};
pub use swatch::Swatch;
pub use view::ColorAtTime;
