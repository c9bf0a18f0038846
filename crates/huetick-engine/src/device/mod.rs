//! GPU device + surface management.
//!
//! One window, one surface, a fixed workload of a clear plus a handful of
//! glyph quads a few times a second. This layer creates the wgpu
//! device/queue, keeps the surface configured across resizes, and hands out
//! frames to render into.

mod gpu;

pub use gpu::{Frame, Gpu, GpuConfig, SurfaceStatus};
