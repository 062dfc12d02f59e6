//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they are defined here rather than in the common crate.

use std::time::Duration;

/// Target frame time (~20 FPS). The face only changes on events, so this mostly
/// bounds input latency.
pub const FRAME_TIME: Duration = Duration::from_millis(50);

/// Interval between simulated battery level changes.
pub const BATTERY_INTERVAL: Duration = Duration::from_secs(20);

/// Interval between simulated step and heart-rate samples.
pub const HEALTH_INTERVAL: Duration = Duration::from_secs(5);
