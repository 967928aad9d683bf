//! Core interval state machine: current phase, remaining time, tick transitions.

use crate::constants::{BREAK_SECONDS, WORK_SECONDS};

/// Which half of the focus/break cycle the timer is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Work,
    Break,
}

impl Phase {
    pub fn interval_seconds(self) -> u32 {
        match self {
            Phase::Work => WORK_SECONDS,
            Phase::Break => BREAK_SECONDS,
        }
    }

    pub fn toggled(self) -> Phase {
        match self {
            Phase::Work => Phase::Break,
            Phase::Break => Phase::Work,
        }
    }

    /// Short label used in the window title.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Work => "Focus",
            Phase::Break => "Break",
        }
    }

    /// Status line shown under the clock while this phase is active.
    pub fn status_text(self) -> &'static str {
        match self {
            Phase::Work => "Focus time",
            Phase::Break => "Standing break",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    pub phase: Phase,
    pub remaining_seconds: u32,
    pub running: bool,
}

impl TimerState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Work,
            remaining_seconds: WORK_SECONDS,
            running: false,
        }
    }

    /// One countdown step. Decrements the remaining time, or if the interval
    /// is already exhausted, flips to the other phase with a fresh interval
    /// and returns the phase being entered.
    pub fn tick(&mut self) -> Option<Phase> {
        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
            return None;
        }
        self.phase = self.phase.toggled();
        self.remaining_seconds = self.phase.interval_seconds();
        Some(self.phase)
    }

    /// Back to a fresh, stopped work interval regardless of prior state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Full length of the interval the timer is currently in.
    pub fn interval_seconds(&self) -> u32 {
        self.phase.interval_seconds()
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_stopped_work_interval() {
        let state = TimerState::new();
        assert_eq!(state.phase, Phase::Work);
        assert_eq!(state.remaining_seconds, WORK_SECONDS);
        assert!(!state.running);
    }

    #[test]
    fn tick_counts_down_one_second_at_a_time() {
        let mut state = TimerState::new();
        for t in 1..=WORK_SECONDS {
            assert_eq!(state.tick(), None);
            assert_eq!(state.remaining_seconds, WORK_SECONDS - t);
        }
        assert_eq!(state.phase, Phase::Work);
    }

    #[test]
    fn tick_at_zero_switches_to_break() {
        let mut state = TimerState::new();
        state.remaining_seconds = 0;
        assert_eq!(state.tick(), Some(Phase::Break));
        assert_eq!(state.phase, Phase::Break);
        assert_eq!(state.remaining_seconds, BREAK_SECONDS);
    }

    #[test]
    fn exhausting_break_switches_back_to_work() {
        let mut state = TimerState {
            phase: Phase::Break,
            remaining_seconds: 0,
            running: true,
        };
        assert_eq!(state.tick(), Some(Phase::Work));
        assert_eq!(state.remaining_seconds, WORK_SECONDS);
    }

    #[test]
    fn exactly_one_switch_across_a_full_work_interval() {
        let mut state = TimerState::new();
        let mut switches = 0;
        for _ in 0..=WORK_SECONDS {
            if state.tick().is_some() {
                switches += 1;
            }
        }
        assert_eq!(switches, 1);
        assert_eq!(state.phase, Phase::Break);
        assert_eq!(state.remaining_seconds, BREAK_SECONDS);
    }

    #[test]
    fn reset_restores_initial_state_from_anywhere() {
        let mut state = TimerState {
            phase: Phase::Break,
            remaining_seconds: 42,
            running: true,
        };
        state.reset();
        assert_eq!(state, TimerState::new());
    }
}
