//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, and wires them to the GPU layer and
//! the saver's animation cadence.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig, WindowMode};
