//! Host services read by the face.
//!
//! The host owns the clock, the battery gauge and the health sensors. Subscriptions
//! deliver events into [`WatchFace::handle`](crate::WatchFace::handle); on window
//! load the face pulls current values through [`Services`] so it is never shown
//! empty.

use chrono::NaiveDateTime;

/// Battery state as reported by the host.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct BatteryChargeState {
    /// Charge level, 0-100.
    pub charge_percent: u8,
    /// Currently charging.
    pub is_charging: bool,
    /// Connected to a charger (may be full and no longer charging).
    pub is_plugged: bool,
}

impl BatteryChargeState {
    /// Discharging battery at `charge_percent`.
    pub const fn discharging(charge_percent: u8) -> Self {
        Self {
            charge_percent,
            is_charging: false,
            is_plugged: false,
        }
    }
}

/// Health event kinds, dispatched through one handler.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HealthEvent {
    /// Step count changed.
    MovementUpdate,
    /// New heart-rate sample available.
    HeartRateUpdate,
}

/// Read access to the host's clock and sensors.
pub trait Services {
    /// Host clock preference: `true` for 24-hour style.
    fn clock_is_24h(&self) -> bool;

    /// Current local wall-clock time.
    fn local_time(&self) -> NaiveDateTime;

    /// Current battery state.
    fn battery_state(&self) -> BatteryChargeState;

    /// Cumulative steps since local midnight.
    fn steps_today(&self) -> u32;

    /// Latest instantaneous heart-rate sample in beats per minute.
    fn heart_rate_bpm(&self) -> u32;
}
