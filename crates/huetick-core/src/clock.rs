use chrono::Timelike;

/// One complete wall-clock sample.
///
/// Readings are taken fresh at draw time and discarded afterwards; nothing in
/// the saver persists them.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ClockReading {
    /// Hour of day, `0..=23`.
    pub hour: u8,
    /// Minute, `0..=59`.
    pub minute: u8,
    /// Second, `0..=59`.
    pub second: u8,
}

impl ClockReading {
    #[inline]
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self { hour, minute, second }
    }
}

/// Source of wall-clock readings.
///
/// The result is all-or-nothing: either a complete reading or `None`. A `None`
/// means the frame is skipped entirely — no fill, no text, no fallback color.
pub trait ClockSource {
    fn read(&self) -> Option<ClockReading>;
}

/// The local system clock.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn read(&self) -> Option<ClockReading> {
        let now = chrono::Local::now();

        // chrono encodes leap seconds in the nanosecond field, so `second()`
        // stays in 0..=59; the clamp keeps the documented range airtight.
        Some(ClockReading {
            hour: now.hour() as u8,
            minute: now.minute() as u8,
            second: now.second().min(59) as u8,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_reads_in_range() {
        let reading = SystemClock.read().unwrap();
        assert!(reading.hour <= 23);
        assert!(reading.minute <= 59);
        assert!(reading.second <= 59);
    }
}
