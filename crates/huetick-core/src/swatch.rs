use crate::clock::ClockReading;
use crate::paint::Rgba;

/// Converts a clock component to its 2-character zero-padded lowercase hex
/// form. `9` becomes `"09"`, `14` becomes `"0e"`, `59` becomes `"3b"`.
#[inline]
pub fn pad2(value: u8) -> String {
    format!("{value:02x}")
}

/// Parses a 2-digit hex string back to a normalized channel value in `[0, 1]`.
///
/// The divisor is 255.0 even though clock components never exceed 0x3b, so
/// every rendered color sits in the dark end of the channel range. The
/// scaling is kept as-is rather than stretched to the full range.
#[inline]
pub fn channel(hex: &str) -> f32 {
    u8::from_str_radix(hex, 16).map_or(0.0, |v| f32::from(v) / 255.0)
}

/// A fill color and its hex label, derived from one clock reading.
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    pub color: Rgba,
    pub label: String,
}

impl Swatch {
    /// Pure and deterministic: the same reading always produces a
    /// byte-identical label and bit-identical color.
    pub fn from_reading(reading: ClockReading) -> Self {
        let red = pad2(reading.hour);
        let green = pad2(reading.minute);
        let blue = pad2(reading.second);

        let color = Rgba::opaque(channel(&red), channel(&green), channel(&blue));
        let label = format!("#{red}{green}{blue}");

        Self { color, label }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── pad2 ──────────────────────────────────────────────────────────────

    #[test]
    fn pad2_single_digit_gets_leading_zero() {
        assert_eq!(pad2(0), "00");
        assert_eq!(pad2(9), "09");
    }

    #[test]
    fn pad2_uses_lowercase_hex() {
        assert_eq!(pad2(14), "0e");
        assert_eq!(pad2(59), "3b");
        assert_eq!(pad2(23), "17");
    }

    #[test]
    fn pad2_always_two_chars_for_clock_range() {
        for v in 0..=59u8 {
            assert_eq!(pad2(v).len(), 2);
        }
    }

    // ── channel ───────────────────────────────────────────────────────────

    #[test]
    fn channel_divides_by_255() {
        assert_eq!(channel("00"), 0.0);
        assert_eq!(channel("17"), 23.0 / 255.0);
        assert_eq!(channel("3b"), 59.0 / 255.0);
        assert_eq!(channel("ff"), 1.0);
    }

    #[test]
    fn channel_invalid_hex_is_zero() {
        assert_eq!(channel("zz"), 0.0);
    }

    // ── swatch ────────────────────────────────────────────────────────────

    #[test]
    fn label_is_hash_plus_six_hex_digits() {
        let s = Swatch::from_reading(ClockReading::new(9, 5, 0));
        assert_eq!(s.label, "#090500");
        assert_eq!(s.label.len(), 7);
    }

    #[test]
    fn label_end_of_day() {
        let s = Swatch::from_reading(ClockReading::new(23, 59, 59));
        assert_eq!(s.label, "#173b3b");
        assert_eq!(s.color.r, 23.0 / 255.0);
        assert_eq!(s.color.g, 59.0 / 255.0);
        assert_eq!(s.color.b, 59.0 / 255.0);
        assert_eq!(s.color.a, 1.0);
    }

    #[test]
    fn label_length_is_seven_for_all_valid_readings() {
        for h in 0..=23u8 {
            for m in [0u8, 9, 10, 59] {
                for s in [0u8, 9, 10, 59] {
                    let swatch = Swatch::from_reading(ClockReading::new(h, m, s));
                    assert_eq!(swatch.label.len(), 7, "at {h}:{m}:{s}");
                    assert!(swatch.label.starts_with('#'));
                    assert!(swatch.label[1..].chars().all(|c| c.is_ascii_hexdigit()));
                }
            }
        }
    }

    #[test]
    fn channels_never_leave_the_dark_range() {
        for h in 0..=23u8 {
            for m in 0..=59u8 {
                let s = Swatch::from_reading(ClockReading::new(h, m, m));
                assert!(s.color.r <= 23.0 / 255.0);
                assert!(s.color.g <= 59.0 / 255.0);
                assert!(s.color.b <= 59.0 / 255.0);
            }
        }
    }

    #[test]
    fn from_reading_is_idempotent() {
        let reading = ClockReading::new(12, 34, 56);
        let a = Swatch::from_reading(reading);
        let b = Swatch::from_reading(reading);
        assert_eq!(a, b);
    }
}
