//! Huetick host runtime.
//!
//! Plays the role a screen-saver engine plays for a plugin view: owns the
//! window and event loop, drives the animation cadence, and turns
//! [`huetick_core::Saver`] draw calls into GPU work.

pub mod device;
pub mod window;
pub mod time;

pub mod logging;
pub mod coords;
pub mod render;
pub mod scene;
pub mod text;
