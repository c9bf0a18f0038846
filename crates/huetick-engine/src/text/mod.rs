//! Font handling.
//!
//! One face, loaded once at startup. Layout is uniform-cell: every label
//! character advances by the same width so the hex string does not jitter as
//! digits change between frames.

mod typeface;

pub use typeface::{PlacedGlyph, Typeface, TypefaceError};
