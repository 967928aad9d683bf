//! Control surface over the countdown: start/pause/reset plus the per-frame
//! poll that turns elapsed wall time into ticks and phase transitions.

use crate::driver::TickDriver;
use crate::timer::{Phase, TimerState};
use std::time::{Duration, Instant};
use tracing::info;

pub struct Session {
    pub state: TimerState,
    driver: TickDriver,
    /// Whether a finished interval rolls straight into the next one, or
    /// stops and waits for an explicit Start.
    pub auto_start_next: bool,
}

impl Session {
    pub fn new(auto_start_next: bool) -> Self {
        Self {
            state: TimerState::new(),
            driver: TickDriver::new(),
            auto_start_next,
        }
    }

    /// No-op while already running.
    pub fn start(&mut self, now: Instant) {
        if self.state.running {
            return;
        }
        self.state.running = true;
        self.driver.start(now);
        info!(
            phase = self.state.phase.label(),
            remaining = self.state.remaining_seconds,
            "timer started"
        );
    }

    /// No-op while idle. Keeps the remaining time.
    pub fn pause(&mut self) {
        if !self.state.running {
            return;
        }
        self.driver.cancel();
        self.state.running = false;
        info!(remaining = self.state.remaining_seconds, "timer paused");
    }

    /// Stops any active countdown and restores the initial work interval.
    pub fn reset(&mut self) {
        self.driver.cancel();
        self.state.reset();
        info!("timer reset");
    }

    /// Drains due ticks at `now`. Returns each phase entered this frame, in
    /// order, so the caller can notify once per switch.
    pub fn poll(&mut self, now: Instant) -> Vec<Phase> {
        let mut transitions = Vec::new();
        if !self.state.running {
            return transitions;
        }
        for _ in 0..self.driver.advance(now) {
            if let Some(entered) = self.state.tick() {
                info!(phase = entered.label(), "phase switched");
                transitions.push(entered);
                if !self.auto_start_next {
                    self.pause();
                    break;
                }
            }
        }
        transitions
    }

    /// Time until the next tick is due, for repaint scheduling.
    pub fn next_due_in(&self, now: Instant) -> Option<Duration> {
        self.driver.time_until_due(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{BREAK_SECONDS, WORK_SECONDS};

    #[test]
    fn start_then_poll_decrements_once_per_second() {
        let t0 = Instant::now();
        let mut session = Session::new(true);
        session.start(t0);
        assert!(session.state.running);
        assert!(session.poll(t0 + Duration::from_secs(1)).is_empty());
        assert_eq!(session.state.remaining_seconds, WORK_SECONDS - 1);
        assert!(session.poll(t0 + Duration::from_secs(3)).is_empty());
        assert_eq!(session.state.remaining_seconds, WORK_SECONDS - 3);
    }

    #[test]
    fn double_start_does_not_double_the_cadence() {
        let t0 = Instant::now();
        let mut session = Session::new(true);
        session.start(t0);
        session.start(t0 + Duration::from_millis(400));
        session.poll(t0 + Duration::from_secs(2));
        assert_eq!(session.state.remaining_seconds, WORK_SECONDS - 2);
    }

    #[test]
    fn pause_while_idle_changes_nothing() {
        let mut session = Session::new(true);
        let before = session.state;
        session.pause();
        session.pause();
        assert_eq!(session.state, before);
    }

    #[test]
    fn pause_keeps_remaining_and_stops_ticks() {
        let t0 = Instant::now();
        let mut session = Session::new(true);
        session.start(t0);
        session.poll(t0 + Duration::from_secs(2));
        session.pause();
        assert!(!session.state.running);
        assert!(session.poll(t0 + Duration::from_secs(30)).is_empty());
        assert_eq!(session.state.remaining_seconds, WORK_SECONDS - 2);
    }

    #[test]
    fn switch_emits_one_transition_and_auto_resumes() {
        let t0 = Instant::now();
        let mut session = Session::new(true);
        session.state.remaining_seconds = 0;
        session.start(t0);
        let transitions = session.poll(t0 + Duration::from_secs(1));
        assert_eq!(transitions, vec![Phase::Break]);
        assert_eq!(session.state.remaining_seconds, BREAK_SECONDS);
        assert!(session.state.running);
        // countdown keeps going in the new phase
        session.poll(t0 + Duration::from_secs(2));
        assert_eq!(session.state.remaining_seconds, BREAK_SECONDS - 1);
    }

    #[test]
    fn switch_stops_when_auto_start_is_off() {
        let t0 = Instant::now();
        let mut session = Session::new(false);
        session.state.remaining_seconds = 0;
        session.start(t0);
        let transitions = session.poll(t0 + Duration::from_secs(1));
        assert_eq!(transitions, vec![Phase::Break]);
        assert!(!session.state.running);
        assert_eq!(session.state.remaining_seconds, BREAK_SECONDS);
        assert!(session.poll(t0 + Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn reset_from_running_break_restores_fresh_work_interval() {
        let t0 = Instant::now();
        let mut session = Session::new(true);
        session.state = TimerState {
            phase: Phase::Break,
            remaining_seconds: 42,
            running: false,
        };
        session.start(t0);
        session.reset();
        assert_eq!(session.state, TimerState::new());
        assert!(session.poll(t0 + Duration::from_secs(5)).is_empty());
        assert_eq!(session.state.remaining_seconds, WORK_SECONDS);
    }
}
