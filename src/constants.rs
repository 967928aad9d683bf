//! Application constants and configuration

use std::time::Duration;

pub const APP_NAME: &str = "Focus Ring";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fixed interval lengths in seconds. Deliberately not configurable.
pub const WORK_SECONDS: u32 = 25 * 60;
pub const BREAK_SECONDS: u32 = 5 * 60;

/// Countdown cadence.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Static geometry of the progress ring control.
pub const RING_RADIUS: f32 = 110.0;
pub const RING_STROKE: f32 = 10.0;
