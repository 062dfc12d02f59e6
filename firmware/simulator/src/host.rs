//! Simulated device services.
//!
//! Stands in for the watch firmware: wall-clock minute ticks from the system clock,
//! a battery that slowly drains (or charges), and a wearer who keeps walking.

use std::time::Instant;

use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};
use log::debug;
use watchface_common::{BatteryChargeState, Event, HealthEvent, Services};

use crate::timing::{BATTERY_INTERVAL, HEALTH_INTERVAL};

/// Resting heart rate the simulated wearer hovers around.
const HEART_RATE_BASE: f32 = 72.0;

/// Heart-rate swing above and below the base.
const HEART_RATE_SWING: f32 = 14.0;

/// Steps taken per health interval, before variation.
const STEPS_PER_INTERVAL: u32 = 9;

/// Minute key used to detect minute boundaries.
type MinuteStamp = (NaiveDate, u32, u32);

fn minute_stamp(time: &NaiveDateTime) -> MinuteStamp { (time.date(), time.hour(), time.minute()) }

/// Simulated host services and subscription source.
pub struct SimHost {
    is_24h: bool,
    battery: BatteryChargeState,
    steps: u32,
    heart_rate: u32,
    started: Instant,
    last_minute: MinuteStamp,
    last_battery: Instant,
    last_health: Instant,
}

impl SimHost {
    pub fn new(is_24h: bool) -> Self {
        let now = Instant::now();
        Self {
            is_24h,
            battery: BatteryChargeState::discharging(80),
            steps: 0,
            heart_rate: HEART_RATE_BASE as u32,
            started: now,
            last_minute: minute_stamp(&Local::now().naive_local()),
            last_battery: now,
            last_health: now,
        }
    }

    /// Flip the 12/24-hour clock preference.
    pub fn toggle_clock(&mut self) {
        self.is_24h = !self.is_24h;
        debug!("Clock style: {}", if self.is_24h { "24h" } else { "12h" });
    }

    /// Plug in or unplug the charger.
    pub fn toggle_charging(&mut self) {
        let plugged = !self.battery.is_plugged;
        self.battery.is_plugged = plugged;
        self.battery.is_charging = plugged && self.battery.charge_percent < 100;
        debug!("Charger {}", if plugged { "connected" } else { "disconnected" });
    }

    /// Collect the subscription events due since the last poll.
    pub fn poll(&mut self) -> Vec<Event<'static>> {
        let mut events = Vec::new();

        let now = Local::now().naive_local();
        let stamp = minute_stamp(&now);
        if stamp != self.last_minute {
            self.last_minute = stamp;
            events.push(Event::Tick(now));
        }

        if self.last_battery.elapsed() >= BATTERY_INTERVAL {
            self.last_battery = Instant::now();
            if self.step_battery() {
                events.push(Event::Battery(self.battery));
            }
        }

        if self.last_health.elapsed() >= HEALTH_INTERVAL {
            self.last_health = Instant::now();
            self.step_health();
            events.push(Event::Health(HealthEvent::MovementUpdate));
            events.push(Event::Health(HealthEvent::HeartRateUpdate));
        }

        events
    }

    /// Advance the battery by one percent. Returns `true` if the state changed.
    fn step_battery(&mut self) -> bool {
        let before = self.battery;
        let level = self.battery.charge_percent;
        if self.battery.is_plugged {
            self.battery.charge_percent = (level + 1).min(100);
            self.battery.is_charging = self.battery.charge_percent < 100;
        } else {
            self.battery.charge_percent = level.saturating_sub(1);
        }
        self.battery != before
    }

    fn step_health(&mut self) {
        let t = self.started.elapsed().as_secs_f32();
        self.steps += STEPS_PER_INTERVAL + (fake_signal(t, 0.0, 6.0, 0.7) as u32);
        self.heart_rate = fake_signal(t, HEART_RATE_BASE - HEART_RATE_SWING, HEART_RATE_BASE + HEART_RATE_SWING, 0.05)
            .round() as u32;
    }
}

impl Services for SimHost {
    fn clock_is_24h(&self) -> bool { self.is_24h }

    fn local_time(&self) -> NaiveDateTime { Local::now().naive_local() }

    fn battery_state(&self) -> BatteryChargeState { self.battery }

    fn steps_today(&self) -> u32 { self.steps }

    fn heart_rate_bpm(&self) -> u32 { self.heart_rate }
}

/// Smooth oscillation between `min` and `max`.
fn fake_signal(
    t: f32,
    min: f32,
    max: f32,
    freq: f32,
) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}
