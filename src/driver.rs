//! Cancellable one-second repeating schedule that drives the countdown.
//!
//! The egui event loop has no timer callbacks, so the schedule is polled:
//! each frame asks how many whole seconds have come due since the last poll.

use crate::constants::TICK_INTERVAL;
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
pub struct TickDriver {
    next_due: Option<Instant>,
}

impl TickDriver {
    pub fn new() -> Self {
        Self { next_due: None }
    }

    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    /// Arms the schedule one interval from `now`. No-op if already armed,
    /// so repeated starts never produce a second schedule.
    pub fn start(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now + TICK_INTERVAL);
        }
    }

    /// Disarms the schedule. Safe to call when already idle.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Number of ticks due at `now`, zero when idle. Re-arms on a fixed
    /// cadence from the previous due instant so a slow frame catches up
    /// instead of drifting the countdown.
    pub fn advance(&mut self, now: Instant) -> u32 {
        let Some(mut due) = self.next_due else {
            return 0;
        };
        let mut ticks = 0;
        while due <= now {
            ticks += 1;
            due += TICK_INTERVAL;
        }
        self.next_due = Some(due);
        ticks
    }

    /// Time until the next tick, used to schedule the next repaint.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_driver_yields_no_ticks() {
        let mut driver = TickDriver::new();
        assert!(!driver.is_active());
        assert_eq!(driver.advance(Instant::now()), 0);
    }

    #[test]
    fn one_tick_per_elapsed_second() {
        let t0 = Instant::now();
        let mut driver = TickDriver::new();
        driver.start(t0);
        assert_eq!(driver.advance(t0 + Duration::from_millis(999)), 0);
        assert_eq!(driver.advance(t0 + Duration::from_millis(1000)), 1);
        assert_eq!(driver.advance(t0 + Duration::from_millis(1500)), 0);
        assert_eq!(driver.advance(t0 + Duration::from_millis(2000)), 1);
    }

    #[test]
    fn stalled_loop_catches_up_without_drift() {
        let t0 = Instant::now();
        let mut driver = TickDriver::new();
        driver.start(t0);
        // 3.5 seconds pass before the next poll
        assert_eq!(driver.advance(t0 + Duration::from_millis(3500)), 3);
        // the cadence stays anchored to t0, not to the late poll
        assert_eq!(driver.advance(t0 + Duration::from_millis(4000)), 1);
    }

    #[test]
    fn start_while_armed_keeps_the_existing_schedule() {
        let t0 = Instant::now();
        let mut driver = TickDriver::new();
        driver.start(t0);
        driver.start(t0 + Duration::from_millis(600));
        // only one tick at the 1s mark, not a second schedule at 1.6s
        assert_eq!(driver.advance(t0 + Duration::from_millis(1700)), 1);
    }

    #[test]
    fn cancel_is_idempotent_and_stops_pending_ticks() {
        let t0 = Instant::now();
        let mut driver = TickDriver::new();
        driver.start(t0);
        driver.cancel();
        driver.cancel();
        assert!(!driver.is_active());
        assert_eq!(driver.advance(t0 + Duration::from_secs(5)), 0);
        assert_eq!(driver.time_until_due(t0), None);
    }
}
