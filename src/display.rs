//! Pure derivations from timer state: clock text, window title, ring fill.

use crate::constants::RING_RADIUS;
use crate::timer::TimerState;
use std::f32::consts::TAU;

/// `MM:SS`, zero-padded.
pub fn clock_text(remaining_seconds: u32) -> String {
    format!(
        "{:02}:{:02}",
        remaining_seconds / 60,
        remaining_seconds % 60
    )
}

pub fn window_title(state: &TimerState) -> String {
    format!(
        "{} - {}",
        clock_text(state.remaining_seconds),
        state.phase.label()
    )
}

/// Circumference of the fixed ring control. Computed once at startup and
/// passed around, the radius never changes.
pub fn ring_circumference() -> f32 {
    TAU * RING_RADIUS
}

/// Stroke offset for the progress ring: 0 renders a full ring, a full
/// circumference renders an empty one.
pub fn ring_offset(state: &TimerState, circumference: f32) -> f32 {
    let fraction = state.remaining_seconds as f32 / state.interval_seconds() as f32;
    circumference * (1.0 - fraction)
}
