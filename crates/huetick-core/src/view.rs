use crate::clock::ClockSource;
use crate::paint::{Painter, Rgba};
use crate::saver::{Invalidate, Saver, Size};
use crate::swatch::Swatch;

/// The label font takes up a sixth of the surface width.
const FONT_WIDTH_DIVISOR: f32 = 6.0;

/// The screen-saver view: fills the surface with the current time as a color
/// and overlays the hex string, centered.
///
/// The only mutable state is the cached font size, itself a deterministic
/// function of the surface width, so the whole view is a pure function of
/// (clock reading, surface size) per frame.
pub struct ColorAtTime<C> {
    clock: C,
    font_px: Option<f32>,
    font_recomputes: u64,
}

impl<C: ClockSource> ColorAtTime<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            font_px: None,
            font_recomputes: 0,
        }
    }

    /// Number of times the font has been recomputed. Observable so tests can
    /// verify the cache only refreshes on setup and resize.
    pub fn font_recomputes(&self) -> u64 {
        self.font_recomputes
    }

    fn update_font(&mut self, size: Size) {
        self.font_px = Some(size.width / FONT_WIDTH_DIVISOR);
        self.font_recomputes += 1;
        log::debug!("font size updated to {:?}", self.font_px);
    }
}

impl<C: ClockSource> Saver for ColorAtTime<C> {
    fn setup(&mut self, size: Size, is_preview: bool) {
        log::info!(
            "color-at-time starting: {}x{} preview={is_preview}",
            size.width,
            size.height
        );
        self.update_font(size);
    }

    fn resized(&mut self, size: Size) {
        self.update_font(size);
    }

    fn animate_one_frame(&mut self) -> Invalidate {
        Invalidate::Full
    }

    fn draw(&mut self, painter: &mut dyn Painter, bounds: Size) {
        // All-or-nothing: without a complete reading the frame stays untouched.
        let Some(reading) = self.clock.read() else {
            return;
        };

        let swatch = Swatch::from_reading(reading);
        painter.fill(swatch.color);

        // Hosts are expected to call setup() first; computing here anyway is
        // harmless because the cache is a pure function of width.
        let font_px = match self.font_px {
            Some(px) => px,
            None => bounds.width / FONT_WIDTH_DIVISOR,
        };

        let (text_w, text_h) = painter.text_size(&swatch.label, font_px);
        let x = ((bounds.width - text_w) / 2.0).round();
        let y = ((bounds.height - text_h) / 2.0).round();

        painter.draw_text(&swatch.label, x, y, font_px, Rgba::WHITE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ClockReading;

    struct FixedClock(ClockReading);

    impl ClockSource for FixedClock {
        fn read(&self) -> Option<ClockReading> {
            Some(self.0)
        }
    }

    struct DeadClock;

    impl ClockSource for DeadClock {
        fn read(&self) -> Option<ClockReading> {
            None
        }
    }

    #[derive(Debug, PartialEq)]
    enum Cmd {
        Fill(Rgba),
        Text { text: String, x: f32, y: f32, px: f32, color: Rgba },
    }

    /// Records paint commands; characters are 0.5 px wide and 1.0 px tall per
    /// font pixel so centering math is easy to predict.
    #[derive(Default)]
    struct Recorder {
        cmds: Vec<Cmd>,
    }

    impl Painter for Recorder {
        fn fill(&mut self, color: Rgba) {
            self.cmds.push(Cmd::Fill(color));
        }

        fn text_size(&self, text: &str, px: f32) -> (f32, f32) {
            (text.chars().count() as f32 * px * 0.5, px)
        }

        fn draw_text(&mut self, text: &str, x: f32, y: f32, px: f32, color: Rgba) {
            self.cmds.push(Cmd::Text { text: text.to_string(), x, y, px, color });
        }
    }

    fn view_at(h: u8, m: u8, s: u8) -> ColorAtTime<FixedClock> {
        ColorAtTime::new(FixedClock(ClockReading::new(h, m, s)))
    }

    #[test]
    fn draw_fills_then_labels() {
        let mut view = view_at(23, 59, 59);
        view.setup(Size::new(600.0, 400.0), false);

        let mut rec = Recorder::default();
        view.draw(&mut rec, Size::new(600.0, 400.0));

        assert_eq!(rec.cmds.len(), 2);
        assert_eq!(
            rec.cmds[0],
            Cmd::Fill(Rgba::opaque(23.0 / 255.0, 59.0 / 255.0, 59.0 / 255.0))
        );
        match &rec.cmds[1] {
            Cmd::Text { text, px, color, .. } => {
                assert_eq!(text, "#173b3b");
                assert_eq!(*px, 100.0);
                assert_eq!(*color, Rgba::WHITE);
            }
            other => panic!("expected text command, got {other:?}"),
        }
    }

    #[test]
    fn label_is_centered_with_rounded_coordinates() {
        let mut view = view_at(9, 5, 0);
        view.setup(Size::new(601.0, 401.0), false);

        let mut rec = Recorder::default();
        view.draw(&mut rec, Size::new(601.0, 401.0));

        // font = 601/6, text = 7 chars * font * 0.5, each axis rounded.
        let font = 601.0 / 6.0_f32;
        let expect_x = ((601.0 - 7.0 * font * 0.5) / 2.0_f32).round();
        let expect_y = ((401.0 - font) / 2.0_f32).round();

        match &rec.cmds[1] {
            Cmd::Text { x, y, .. } => {
                assert_eq!(*x, expect_x);
                assert_eq!(*y, expect_y);
                assert_eq!(x.fract(), 0.0);
                assert_eq!(y.fract(), 0.0);
            }
            other => panic!("expected text command, got {other:?}"),
        }
    }

    #[test]
    fn missing_clock_reading_draws_nothing() {
        let mut view = ColorAtTime::new(DeadClock);
        view.setup(Size::new(600.0, 400.0), false);

        let mut rec = Recorder::default();
        view.draw(&mut rec, Size::new(600.0, 400.0));

        assert!(rec.cmds.is_empty());
    }

    #[test]
    fn draw_twice_is_identical() {
        let mut view = view_at(12, 34, 56);
        view.setup(Size::new(800.0, 600.0), false);

        let mut a = Recorder::default();
        view.draw(&mut a, Size::new(800.0, 600.0));
        let mut b = Recorder::default();
        view.draw(&mut b, Size::new(800.0, 600.0));

        assert_eq!(a.cmds, b.cmds);
    }

    #[test]
    fn setup_computes_initial_font() {
        let mut view = view_at(0, 0, 0);
        assert_eq!(view.font_recomputes(), 0);

        view.setup(Size::new(300.0, 200.0), true);
        assert_eq!(view.font_recomputes(), 1);
    }

    #[test]
    fn resize_recomputes_font_to_width_over_six() {
        let mut view = view_at(1, 2, 3);
        view.setup(Size::new(300.0, 200.0), false);
        view.resized(Size::new(1920.0, 1080.0));

        let mut rec = Recorder::default();
        view.draw(&mut rec, Size::new(1920.0, 1080.0));

        match &rec.cmds[1] {
            Cmd::Text { px, .. } => assert_eq!(*px, 320.0),
            other => panic!("expected text command, got {other:?}"),
        }
        assert_eq!(view.font_recomputes(), 2);
    }

    #[test]
    fn consecutive_draws_reuse_the_cached_font() {
        let mut view = view_at(1, 2, 3);
        view.setup(Size::new(300.0, 200.0), false);

        let mut rec = Recorder::default();
        view.draw(&mut rec, Size::new(300.0, 200.0));
        view.draw(&mut rec, Size::new(300.0, 200.0));

        assert_eq!(view.font_recomputes(), 1);
    }

    #[test]
    fn animate_requests_full_invalidation() {
        let mut view = view_at(0, 0, 0);
        assert_eq!(view.animate_one_frame(), Invalidate::Full);
    }

    #[test]
    fn frame_interval_is_quarter_second() {
        let view = view_at(0, 0, 0);
        assert_eq!(view.frame_interval(), std::time::Duration::from_millis(250));
    }
}
