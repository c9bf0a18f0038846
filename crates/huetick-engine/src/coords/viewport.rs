/// Viewport size in pixels.
///
/// The renderer treats this as the coordinate basis for converting pixel
/// positions to NDC in the shader.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
