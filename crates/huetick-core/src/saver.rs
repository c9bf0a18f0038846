use std::time::Duration;

use crate::paint::Painter;

/// Redraw cadence of the saver: 4 frames per second.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(250);

/// Surface bounds in pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether the size describes a drawable surface. Minimized windows
    /// report 0x0; hosts skip layout callbacks for such sizes.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

/// What an animation tick wants redrawn.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Invalidate {
    /// Redraw the full visible area.
    Full,
    /// Nothing changed; skip the redraw.
    None,
}

/// Contract between a screen-saver view and the host runtime.
///
/// The host owns the window and the animation timer and invokes these
/// callbacks serially from its main loop. No callback may block.
pub trait Saver {
    /// Called once before the first frame, with the initial surface size and
    /// whether the saver runs as a small preview.
    fn setup(&mut self, size: Size, is_preview: bool);

    /// Called whenever the surface changes size.
    fn resized(&mut self, size: Size);

    /// Called on the animation cadence. No drawing happens here; the return
    /// value tells the host what to invalidate.
    fn animate_one_frame(&mut self) -> Invalidate {
        Invalidate::Full
    }

    /// Called by the host when the surface needs repainting.
    fn draw(&mut self, painter: &mut dyn Painter, bounds: Size);

    /// How often the host should call [`animate_one_frame`](Self::animate_one_frame).
    fn frame_interval(&self) -> Duration {
        FRAME_INTERVAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_size_is_valid() {
        assert!(Size::new(800.0, 600.0).is_valid());
        assert!(Size::new(0.5, 0.5).is_valid());
    }

    #[test]
    fn zero_dimension_is_invalid() {
        assert!(!Size::new(0.0, 600.0).is_valid());
        assert!(!Size::new(800.0, 0.0).is_valid());
        assert!(!Size::new(0.0, 0.0).is_valid());
    }

    #[test]
    fn non_finite_dimension_is_invalid() {
        assert!(!Size::new(f32::NAN, 600.0).is_valid());
        assert!(!Size::new(f32::INFINITY, 600.0).is_valid());
        assert!(!Size::new(800.0, f32::NEG_INFINITY).is_valid());
    }
}
