use std::fmt;

use crate::coords::Vec2;

/// Every character a swatch label can contain. The uniform cell width is the
/// widest advance across this set.
const LABEL_CHARSET: &str = "#0123456789abcdef";

/// Error returned by [`Typeface::from_bytes`].
#[derive(Debug, Clone)]
pub struct TypefaceError(pub String);

impl fmt::Display for TypefaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for TypefaceError {}

/// A glyph positioned for rasterization: bitmap top-left at `(x, y)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlacedGlyph {
    pub ch: char,
    pub x: f32,
    pub y: f32,
    pub width: usize,
    pub height: usize,
}

/// A single parsed TrueType/OpenType face.
///
/// Owned by the application and handed to the renderer each frame so glyphs
/// can be rasterized on demand.
pub struct Typeface {
    font: fontdue::Font,
}

impl Typeface {
    /// Parses a TrueType or OpenType font from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TypefaceError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| TypefaceError(e.to_string()))?;
        Ok(Self { font })
    }

    /// Uniform advance per label character at `px` pixels.
    ///
    /// Proportional faces give hex digits slightly different advances; laying
    /// every character out in cells of the widest advance is the equivalent of
    /// a monospaced-figures font feature.
    pub fn cell_advance(&self, px: f32) -> f32 {
        LABEL_CHARSET
            .chars()
            .map(|c| self.font.metrics(c, px).advance_width)
            .fold(0.0_f32, f32::max)
    }

    fn ascent(&self, px: f32) -> f32 {
        self.font
            .horizontal_line_metrics(px)
            .map_or(px, |m| m.ascent)
    }

    /// Line height (ascent minus descent) at `px` pixels.
    pub fn line_height(&self, px: f32) -> f32 {
        self.font
            .horizontal_line_metrics(px)
            .map_or(px * 1.2, |m| m.ascent - m.descent)
    }

    /// Measures `text` laid out in uniform cells: `(width, height)` in pixels.
    pub fn measure(&self, text: &str, px: f32) -> (f32, f32) {
        let cells = text.chars().count() as f32;
        (cells * self.cell_advance(px), self.line_height(px))
    }

    /// Lays `text` out in uniform cells with the top-left corner at `origin`.
    ///
    /// Each glyph is centered within its cell by its natural advance, then
    /// offset by its bearing; zero-area glyphs (spaces) are skipped.
    pub fn layout(&self, text: &str, px: f32, origin: Vec2) -> Vec<PlacedGlyph> {
        let cell = self.cell_advance(px);
        let baseline = origin.y + self.ascent(px);

        text.chars()
            .enumerate()
            .filter_map(|(i, ch)| {
                let m = self.font.metrics(ch, px);
                if m.width == 0 || m.height == 0 {
                    return None;
                }

                let cell_x = origin.x + i as f32 * cell;
                let x = cell_x + (cell - m.advance_width) / 2.0 + m.xmin as f32;
                let y = baseline - m.height as f32 - m.ymin as f32;

                Some(PlacedGlyph {
                    ch,
                    x,
                    y,
                    width: m.width,
                    height: m.height,
                })
            })
            .collect()
    }

    /// Rasterizes one glyph to an 8-bit coverage bitmap.
    pub fn rasterize(&self, ch: char, px: f32) -> (fontdue::Metrics, Vec<u8>) {
        self.font.rasterize(ch, px)
    }
}
