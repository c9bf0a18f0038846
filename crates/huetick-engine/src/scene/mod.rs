//! Per-frame draw recording.
//!
//! A saver draws through the [`Painter`] seam; [`ScenePainter`] records those
//! calls into a [`Scene`] the renderer consumes. An empty scene means the
//! saver skipped the frame and nothing is presented.

use huetick_core::{Painter, Rgba};

use crate::coords::Vec2;
use crate::text::Typeface;

/// One recorded text draw.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub origin: Vec2,
    pub px: f32,
    pub color: Rgba,
}

/// Draw commands for a single frame.
#[derive(Debug, Default)]
pub struct Scene {
    fill: Option<Rgba>,
    texts: Vec<TextCmd>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the scene for a new frame, keeping allocations.
    pub fn begin(&mut self) {
        self.fill = None;
        self.texts.clear();
    }

    /// True when the frame recorded nothing at all.
    pub fn is_empty(&self) -> bool {
        self.fill.is_none() && self.texts.is_empty()
    }

    pub fn fill(&self) -> Option<Rgba> {
        self.fill
    }

    pub fn texts(&self) -> &[TextCmd] {
        &self.texts
    }
}

/// `Painter` implementation backed by a [`Scene`] and a [`Typeface`].
pub struct ScenePainter<'a> {
    scene: &'a mut Scene,
    typeface: &'a Typeface,
}

impl<'a> ScenePainter<'a> {
    pub fn new(scene: &'a mut Scene, typeface: &'a Typeface) -> Self {
        Self { scene, typeface }
    }
}

impl Painter for ScenePainter<'_> {
    fn fill(&mut self, color: Rgba) {
        self.scene.fill = Some(color);
    }

    fn text_size(&self, text: &str, px: f32) -> (f32, f32) {
        self.typeface.measure(text, px)
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, px: f32, color: Rgba) {
        self.scene.texts.push(TextCmd {
            text: text.to_string(),
            origin: Vec2::new(x, y),
            px,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_scene_is_empty() {
        assert!(Scene::new().is_empty());
    }

    #[test]
    fn begin_clears_previous_frame() {
        let mut scene = Scene::new();
        scene.fill = Some(Rgba::WHITE);
        scene.texts.push(TextCmd {
            text: "#000000".to_string(),
            origin: Vec2::zero(),
            px: 10.0,
            color: Rgba::WHITE,
        });

        scene.begin();
        assert!(scene.is_empty());
        assert_eq!(scene.fill(), None);
        assert!(scene.texts().is_empty());
    }

    #[test]
    fn fill_alone_is_not_empty() {
        let mut scene = Scene::new();
        scene.fill = Some(Rgba::opaque(0.1, 0.2, 0.3));
        assert!(!scene.is_empty());
    }
}
