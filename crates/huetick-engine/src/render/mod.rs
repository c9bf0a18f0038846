//! GPU rendering.
//!
//! The saver's fill is the clear color of the frame's render pass; the only
//! shape pass is the glyph renderer. CPU geometry is in physical pixels
//! (top-left origin, +Y down); the vertex shader converts to NDC using a
//! viewport uniform.

mod text;

pub use text::TextRenderer;

use huetick_core::Rgba;

/// Converts a straight-alpha color to wgpu's clear-color type.
#[inline]
pub fn to_wgpu_color(c: Rgba) -> wgpu::Color {
    wgpu::Color {
        r: c.r as f64,
        g: c.g as f64,
        b: c.b as f64,
        a: c.a as f64,
    }
}
