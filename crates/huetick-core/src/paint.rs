/// Straight-alpha RGBA color, channels in `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from the three RGB channels.
    #[inline]
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
}

/// Drawing surface seam between the saver logic and a host renderer.
///
/// The host hands one of these to [`Saver::draw`](crate::Saver::draw) each
/// frame. Implementations record or execute the two primitives the saver
/// needs; tests use a recording implementation, the engine a GPU-backed one.
pub trait Painter {
    /// Floods the entire surface with `color`.
    fn fill(&mut self, color: Rgba);

    /// Returns `(width, height)` of `text` laid out at `px` pixels.
    fn text_size(&self, text: &str, px: f32) -> (f32, f32);

    /// Draws `text` with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, px: f32, color: Rgba);
}
