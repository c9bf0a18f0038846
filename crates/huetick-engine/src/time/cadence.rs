use std::time::{Duration, Instant};

/// Fixed-interval tick scheduler.
///
/// Deadlines advance in whole intervals from the last arming point. When the
/// loop stalls past several deadlines (debugger, suspend, display sleep) the
/// missed ticks are skipped rather than replayed, so at most one tick fires
/// per wakeup.
#[derive(Debug, Clone)]
pub struct Cadence {
    interval: Duration,
    next: Instant,
}

impl Cadence {
    pub fn new(interval: Duration) -> Self {
        debug_assert!(!interval.is_zero());
        Self {
            interval,
            next: Instant::now() + interval,
        }
    }

    /// The instant the event loop should wake at.
    pub fn next_deadline(&self) -> Instant {
        self.next
    }

    /// Re-arms the schedule from `now`. Call after suspensions or surface
    /// reconfiguration so stale deadlines do not fire immediately.
    pub fn reset(&mut self, now: Instant) {
        self.next = now + self.interval;
    }

    /// Returns `true` when a tick is due at `now` and schedules the next one.
    pub fn advance(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }

        // Skip any deadlines the stall consumed.
        while self.next <= now {
            self.next += self.interval;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn not_due_before_deadline() {
        let start = Instant::now();
        let mut c = Cadence::new(ms(250));
        c.reset(start);

        assert!(!c.advance(start + ms(100)));
        assert_eq!(c.next_deadline(), start + ms(250));
    }

    #[test]
    fn due_at_deadline_schedules_next() {
        let start = Instant::now();
        let mut c = Cadence::new(ms(250));
        c.reset(start);

        assert!(c.advance(start + ms(250)));
        assert_eq!(c.next_deadline(), start + ms(500));
    }

    #[test]
    fn stall_skips_missed_ticks() {
        let start = Instant::now();
        let mut c = Cadence::new(ms(250));
        c.reset(start);

        // Three intervals late: one tick fires, deadline lands in the future.
        assert!(c.advance(start + ms(800)));
        assert_eq!(c.next_deadline(), start + ms(1000));
        assert!(!c.advance(start + ms(900)));
    }

    #[test]
    fn reset_rebases_the_schedule() {
        let start = Instant::now();
        let mut c = Cadence::new(ms(250));
        c.reset(start);
        assert!(c.advance(start + ms(250)));

        let later = start + ms(10_000);
        c.reset(later);
        assert_eq!(c.next_deadline(), later + ms(250));
        assert!(!c.advance(later + ms(100)));
    }
}
