//! The watchface session and its event handlers.
//!
//! [`WatchFace`] holds everything that lives across host callbacks: the window's
//! widget tree (present only while loaded), the text buffers behind each field and
//! the last weather icon category. The host calls [`WatchFace::load`] and
//! [`WatchFace::unload`] from its window handlers and routes every subscription
//! through [`WatchFace::handle`].
//!
//! Handlers are independent and idempotent: each formats into its own buffer and
//! pushes the result to its pair, silently skipping pairs the current display options
//! did not create.

use chrono::NaiveDateTime;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::{debug, info};

use crate::clock::{ClockStyle, format_date, format_time};
use crate::colors::BLACK;
use crate::composer::DisplayComposer;
use crate::config::{DATE_LEN, METRIC_LEN, TIME_LEN, WEATHER_LEN};
use crate::message::{AppMessage, MessageKey};
use crate::services::{BatteryChargeState, HealthEvent, Services};
use crate::settings::{DisplayOptions, Storage, apply_settings};
use crate::text::TextBuffer;
use crate::weather::{WeatherIcon, format_report};

/// Weather text shown until the first report arrives.
pub const LOADING_TEXT: &str = "Loading...";

/// A host callback.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Event<'a> {
    /// Minute tick with the current local time.
    Tick(NaiveDateTime),
    /// Battery state changed.
    Battery(BatteryChargeState),
    /// Health metric changed.
    Health(HealthEvent),
    /// Message from the companion application.
    Message(AppMessage<'a>),
}

/// One watchface session.
#[derive(Debug)]
pub struct WatchFace {
    bounds: Rectangle,
    layers: Option<DisplayComposer>,
    time_text: TextBuffer<TIME_LEN>,
    date_text: TextBuffer<DATE_LEN>,
    weather_text: TextBuffer<WEATHER_LEN>,
    steps_text: TextBuffer<METRIC_LEN>,
    heart_rate_text: TextBuffer<METRIC_LEN>,
    battery_text: TextBuffer<METRIC_LEN>,
    icon: Option<WeatherIcon>,
}

impl WatchFace {
    /// Create an unloaded session for a window covering `bounds`.
    pub const fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            layers: None,
            time_text: TextBuffer::new(),
            date_text: TextBuffer::new(),
            weather_text: TextBuffer::new(),
            steps_text: TextBuffer::new(),
            heart_rate_text: TextBuffer::new(),
            battery_text: TextBuffer::new(),
            icon: None,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Load the window: build the widgets and pull every initial value.
    ///
    /// The weather line shows [`LOADING_TEXT`] and no icon until a report arrives.
    /// Loading an already loaded window reloads it.
    pub fn load<S, T>(
        &mut self,
        services: &S,
        storage: &T,
    ) where
        S: Services + ?Sized,
        T: Storage + ?Sized,
    {
        self.unload();
        self.weather_text.set(LOADING_TEXT);
        self.icon = None;
        self.attach(services, storage);
        info!("Window loaded");
    }

    /// Unload the window, releasing every widget. No-op when not loaded.
    pub fn unload(&mut self) {
        if self.layers.take().is_some() {
            info!("Window unloaded");
        }
    }

    /// Rebuild the widgets for new display options, keeping the current texts and icon.
    fn reload<S, T>(
        &mut self,
        services: &S,
        storage: &T,
    ) where
        S: Services + ?Sized,
        T: Storage + ?Sized,
    {
        self.layers = None;
        self.attach(services, storage);
        info!("Window reloaded");
    }

    fn attach<S, T>(
        &mut self,
        services: &S,
        storage: &T,
    ) where
        S: Services + ?Sized,
        T: Storage + ?Sized,
    {
        let options = DisplayOptions::load(storage);
        let mut layers = DisplayComposer::build(self.bounds, options);
        layers.set_weather(self.weather_text.as_str());
        if let Some(icon) = self.icon {
            layers.set_icon(icon);
        }
        self.layers = Some(layers);

        self.on_tick(&services.local_time(), services);
        self.on_battery(services.battery_state());
        self.on_health(HealthEvent::MovementUpdate, services);
        self.on_health(HealthEvent::HeartRateUpdate, services);
    }

    // =========================================================================
    // Event Handlers
    // =========================================================================

    /// Route a host callback to its handler.
    pub fn handle<S, T>(
        &mut self,
        event: &Event<'_>,
        services: &S,
        storage: &mut T,
    ) where
        S: Services + ?Sized,
        T: Storage + ?Sized,
    {
        match event {
            Event::Tick(now) => self.on_tick(now, services),
            Event::Battery(state) => self.on_battery(*state),
            Event::Health(kind) => self.on_health(*kind, services),
            Event::Message(message) => self.on_message(message, services, storage),
        }
    }

    /// Minute tick: format time and date.
    pub fn on_tick<S: Services + ?Sized>(
        &mut self,
        now: &NaiveDateTime,
        services: &S,
    ) {
        let style = ClockStyle::from_24h(services.clock_is_24h());
        format_time(&mut self.time_text, now, style);
        format_date(&mut self.date_text, now);

        if let Some(layers) = &mut self.layers {
            layers.set_time(self.time_text.as_str());
            layers.set_date(self.date_text.as_str());
        }
    }

    /// Battery change: `"<n>%"`, with a trailing `+` while charging.
    pub fn on_battery(
        &mut self,
        state: BatteryChargeState,
    ) {
        self.battery_text.clear();
        self.battery_text.push_u32(u32::from(state.charge_percent));
        self.battery_text.push_str("%");
        if state.is_charging {
            self.battery_text.push_str("+");
        }

        if let Some(layers) = &mut self.layers {
            layers.set_battery(self.battery_text.as_str());
        }
    }

    /// Health update: `"<n> steps"` or `"<n> bpm"`.
    ///
    /// Each branch reads its service only when its pair exists.
    pub fn on_health<S: Services + ?Sized>(
        &mut self,
        event: HealthEvent,
        services: &S,
    ) {
        let Some(layers) = &mut self.layers else {
            return;
        };
        match event {
            HealthEvent::MovementUpdate => {
                if layers.steps().is_none() {
                    return;
                }
                self.steps_text.clear();
                self.steps_text.push_u32(services.steps_today());
                self.steps_text.push_str(" steps");
                layers.set_steps(self.steps_text.as_str());
            }
            HealthEvent::HeartRateUpdate => {
                if layers.heart_rate().is_none() {
                    return;
                }
                self.heart_rate_text.clear();
                self.heart_rate_text.push_u32(services.heart_rate_bpm());
                self.heart_rate_text.push_str(" bpm");
                layers.set_heart_rate(self.heart_rate_text.as_str());
            }
        }
    }

    /// Companion message: persist settings, then apply a weather report.
    ///
    /// A report needs both temperature and conditions; otherwise the weather text
    /// and icon are left as they were.
    pub fn on_message<S, T>(
        &mut self,
        message: &AppMessage<'_>,
        services: &S,
        storage: &mut T,
    ) where
        S: Services + ?Sized,
        T: Storage + ?Sized,
    {
        if apply_settings(message, storage) && self.is_loaded() {
            self.reload(services, &*storage);
        }

        let temperature = message.find_str(MessageKey::Temperature);
        let conditions = message.find_str(MessageKey::Conditions);
        let (Some(temperature), Some(conditions)) = (temperature, conditions) else {
            if temperature.is_some() || conditions.is_some() {
                debug!("Ignoring partial weather report");
            }
            return;
        };

        format_report(&mut self.weather_text, temperature, conditions);
        let icon = WeatherIcon::classify(conditions);
        self.icon = Some(icon);
        debug!("Weather {:?} -> {}", conditions, icon.name());

        if let Some(layers) = &mut self.layers {
            layers.set_weather(self.weather_text.as_str());
            layers.set_icon(icon);
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Check if the window is loaded.
    #[inline]
    pub const fn is_loaded(&self) -> bool { self.layers.is_some() }

    /// Widgets of the loaded window.
    #[inline]
    pub const fn layers(&self) -> Option<&DisplayComposer> { self.layers.as_ref() }

    #[inline]
    pub fn time_text(&self) -> &str { self.time_text.as_str() }

    #[inline]
    pub fn date_text(&self) -> &str { self.date_text.as_str() }

    #[inline]
    pub fn weather_text(&self) -> &str { self.weather_text.as_str() }

    #[inline]
    pub fn battery_text(&self) -> &str { self.battery_text.as_str() }

    /// Category of the last complete weather report.
    #[inline]
    pub const fn icon(&self) -> Option<WeatherIcon> { self.icon }
}

impl Drawable for WatchFace {
    type Color = Rgb565;
    type Output = ();

    fn draw<D>(
        &self,
        target: &mut D,
    ) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let Some(layers) = &self.layers else {
            return target.clear(BLACK);
        };
        if layers.background().is_none() {
            target.clear(BLACK)?;
        }
        layers.draw(target)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use chrono::NaiveDate;

    use super::*;
    use crate::colors::WHITE;
    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use crate::settings::MemoryStorage;
    use crate::test_support::Canvas;
    use crate::widgets::ResourceId;

    struct FakeServices {
        is_24h: bool,
        now: NaiveDateTime,
        battery: BatteryChargeState,
        steps: u32,
        heart_rate: u32,
        steps_reads: Cell<u32>,
    }

    impl FakeServices {
        fn new() -> Self {
            Self {
                is_24h: true,
                now: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap().and_hms_opt(14, 5, 0).unwrap(),
                battery: BatteryChargeState::discharging(43),
                steps: 1234,
                heart_rate: 72,
                steps_reads: Cell::new(0),
            }
        }
    }

    impl Services for FakeServices {
        fn clock_is_24h(&self) -> bool { self.is_24h }

        fn local_time(&self) -> NaiveDateTime { self.now }

        fn battery_state(&self) -> BatteryChargeState { self.battery }

        fn steps_today(&self) -> u32 {
            self.steps_reads.set(self.steps_reads.get() + 1);
            self.steps
        }

        fn heart_rate_bpm(&self) -> u32 { self.heart_rate }
    }

    fn screen() -> Rectangle { Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)) }

    fn all_enabled() -> MemoryStorage {
        let mut storage = MemoryStorage::new();
        for key in crate::settings::SETTING_KEYS {
            storage.write_bool(key, true).unwrap();
        }
        storage
    }

    fn weather<'a>(
        temperature: &'a str,
        conditions: &'a str,
    ) -> AppMessage<'a> {
        AppMessage::new()
            .with_string(MessageKey::Temperature, temperature)
            .with_string(MessageKey::Conditions, conditions)
    }

    #[test]
    fn test_load_pulls_initial_values() {
        let services = FakeServices::new();
        let storage = all_enabled();
        let mut face = WatchFace::new(screen());
        face.load(&services, &storage);

        let layers = face.layers().unwrap();
        assert_eq!(layers.time().text(), "14:05");
        assert_eq!(layers.date().text(), "Mon 04 Mar");
        assert_eq!(layers.weather().text(), LOADING_TEXT);
        assert_eq!(layers.battery().unwrap().text(), "43%");
        assert_eq!(layers.steps().unwrap().text(), "1234 steps");
        assert_eq!(layers.heart_rate().unwrap().text(), "72 bpm");
        assert_eq!(layers.icon_resource(), None);
    }

    #[test]
    fn test_tick_clock_preference() {
        let mut services = FakeServices::new();
        let storage = MemoryStorage::new();
        let mut face = WatchFace::new(screen());
        face.load(&services, &storage);
        assert_eq!(face.time_text(), "14:05");

        services.is_24h = false;
        face.on_tick(&services.now, &services);
        assert_eq!(face.layers().unwrap().time().text(), "02:05");
    }

    #[test]
    fn test_battery_text() {
        let services = FakeServices::new();
        let storage = all_enabled();
        let mut face = WatchFace::new(screen());
        face.load(&services, &storage);

        face.on_battery(BatteryChargeState::discharging(43));
        assert_eq!(face.layers().unwrap().battery().unwrap().text(), "43%");

        face.on_battery(BatteryChargeState {
            charge_percent: 80,
            is_charging: true,
            is_plugged: true,
        });
        assert_eq!(face.battery_text(), "80%+");
    }

    #[test]
    fn test_weather_report_scenario() {
        let services = FakeServices::new();
        let mut storage = MemoryStorage::new();
        let mut face = WatchFace::new(screen());
        face.load(&services, &storage);

        face.on_message(&weather("72°", "Partly Cloudy, Sunny"), &services, &mut storage);
        let layers = face.layers().unwrap();
        assert_eq!(layers.weather().text(), "72°, Partly Cloudy, Sunny");
        assert_eq!(layers.weather().outline().text(), "72°, Partly Cloudy, Sunny");
        assert_eq!(layers.icon_resource(), Some(ResourceId::WeatherSunny));
        assert_eq!(face.icon(), Some(WeatherIcon::Sunny));
    }

    #[test]
    fn test_long_conditions_classified_in_full() {
        let services = FakeServices::new();
        let mut storage = MemoryStorage::new();
        let mut face = WatchFace::new(screen());
        face.load(&services, &storage);

        // Keyword straddles byte 32 of the conditions string
        let conditions = "Scattered showers, then heavy Rain";
        assert!(!conditions[..32].contains("Rain"));
        face.on_message(&weather("12°", conditions), &services, &mut storage);

        assert_eq!(face.icon(), Some(WeatherIcon::Rainy));
        assert_eq!(face.layers().unwrap().icon_resource(), Some(ResourceId::WeatherRainy));
        // Only the display line is cut
        let shown = face.weather_text();
        assert!(shown.len() <= WEATHER_LEN);
        assert!("12°, Scattered showers, then heavy Rain".starts_with(shown));
    }

    #[test]
    fn test_weather_line_keeps_31_bytes() {
        let services = FakeServices::new();
        let mut storage = MemoryStorage::new();
        let mut face = WatchFace::new(screen());
        face.load(&services, &storage);

        // "72°, Partly Cloudy, Light Winds" is 32 bytes
        face.on_message(&weather("72°", "Partly Cloudy, Light Winds"), &services, &mut storage);
        assert_eq!(face.weather_text(), "72°, Partly Cloudy, Light Wind");
        assert_eq!(face.layers().unwrap().weather().text(), "72°, Partly Cloudy, Light Wind");
    }

    #[test]
    fn test_partial_message_leaves_weather_unchanged() {
        let services = FakeServices::new();
        let mut storage = MemoryStorage::new();
        let mut face = WatchFace::new(screen());
        face.load(&services, &storage);
        face.on_message(&weather("5°", "Light Rain"), &services, &mut storage);

        let partial = AppMessage::new().with_string(MessageKey::Conditions, "Snow");
        face.on_message(&partial, &services, &mut storage);

        let layers = face.layers().unwrap();
        assert_eq!(layers.weather().text(), "5°, Light Rain");
        assert_eq!(layers.icon_resource(), Some(ResourceId::WeatherRainy));
    }

    #[test]
    fn test_partial_message_before_first_report() {
        let services = FakeServices::new();
        let mut storage = MemoryStorage::new();
        let mut face = WatchFace::new(screen());
        face.load(&services, &storage);

        let partial = AppMessage::new().with_string(MessageKey::Temperature, "5°");
        face.on_message(&partial, &services, &mut storage);
        assert_eq!(face.weather_text(), LOADING_TEXT);
        assert_eq!(face.layers().unwrap().icon_resource(), None);
    }

    #[test]
    fn test_unknown_conditions_use_fallback_icon() {
        let services = FakeServices::new();
        let mut storage = MemoryStorage::new();
        let mut face = WatchFace::new(screen());
        face.load(&services, &storage);

        face.on_message(&weather("-3°", "Fog"), &services, &mut storage);
        assert_eq!(face.layers().unwrap().icon_resource(), Some(ResourceId::WeatherUnknown));
    }

    #[test]
    fn test_steps_disabled_never_reads_service() {
        let services = FakeServices::new();
        let storage = MemoryStorage::new();
        let mut face = WatchFace::new(screen());
        face.load(&services, &storage);

        face.on_health(HealthEvent::MovementUpdate, &services);
        face.on_health(HealthEvent::MovementUpdate, &services);
        assert!(face.layers().unwrap().steps().is_none());
        assert_eq!(services.steps_reads.get(), 0);
    }

    #[test]
    fn test_unload_without_optional_pairs() {
        let services = FakeServices::new();
        let storage = MemoryStorage::new();
        let mut face = WatchFace::new(screen());
        face.load(&services, &storage);
        face.unload();
        assert!(!face.is_loaded());

        // Handlers keep working with no widgets
        face.on_battery(BatteryChargeState::discharging(10));
        face.on_health(HealthEvent::HeartRateUpdate, &services);
        assert_eq!(face.battery_text(), "10%");

        face.unload();
        assert!(!face.is_loaded());
    }

    #[test]
    fn test_settings_message_reloads_window() {
        let services = FakeServices::new();
        let mut storage = MemoryStorage::new();
        let mut face = WatchFace::new(screen());
        face.load(&services, &storage);
        face.on_message(&weather("12°", "Cloudy"), &services, &mut storage);
        assert!(face.layers().unwrap().steps().is_none());

        let settings = AppMessage::new()
            .with_int(MessageKey::ShowSteps, 1)
            .with_bool(MessageKey::ShowBackground, true);
        face.on_message(&settings, &services, &mut storage);

        let layers = face.layers().unwrap();
        assert_eq!(layers.steps().unwrap().text(), "1234 steps");
        assert!(layers.background().is_some());
        assert!(layers.heart_rate().is_none());
        assert_eq!(layers.weather().text(), "12°, Cloudy");
        assert_eq!(layers.icon_resource(), Some(ResourceId::WeatherCloudy));
        assert_eq!(storage.read_bool(MessageKey::ShowSteps), Some(true));
    }

    #[test]
    fn test_settings_and_weather_in_one_message() {
        let services = FakeServices::new();
        let mut storage = MemoryStorage::new();
        let mut face = WatchFace::new(screen());
        face.load(&services, &storage);

        let message = weather("20°", "Clear").with_bool(MessageKey::ShowBattery, true);
        face.handle(&Event::Message(message), &services, &mut storage);

        let layers = face.layers().unwrap();
        assert_eq!(layers.battery().unwrap().text(), "43%");
        assert_eq!(layers.weather().text(), "20°, Clear");
        assert_eq!(layers.icon_resource(), Some(ResourceId::WeatherSunny));
    }

    #[test]
    fn test_load_resets_weather() {
        let services = FakeServices::new();
        let mut storage = MemoryStorage::new();
        let mut face = WatchFace::new(screen());
        face.load(&services, &storage);
        face.on_message(&weather("1°", "Snow"), &services, &mut storage);

        face.unload();
        face.load(&services, &storage);
        assert_eq!(face.weather_text(), LOADING_TEXT);
        assert_eq!(face.icon(), None);
    }

    #[test]
    fn test_handle_dispatches_events() {
        let services = FakeServices::new();
        let mut storage = all_enabled();
        let mut face = WatchFace::new(screen());
        face.load(&services, &storage);

        let later = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(9, 30, 0).unwrap();
        face.handle(&Event::Tick(later), &services, &mut storage);
        face.handle(&Event::Battery(BatteryChargeState::discharging(7)), &services, &mut storage);
        face.handle(&Event::Health(HealthEvent::HeartRateUpdate), &services, &mut storage);

        let layers = face.layers().unwrap();
        assert_eq!(layers.time().text(), "09:30");
        assert_eq!(layers.date().text(), "Tue 05 Mar");
        assert_eq!(layers.battery().unwrap().text(), "7%");
        assert_eq!(layers.heart_rate().unwrap().text(), "72 bpm");
    }

    #[test]
    fn test_draw_clears_to_black_without_background() {
        let services = FakeServices::new();
        let storage = MemoryStorage::new();
        let mut face = WatchFace::new(screen());
        face.load(&services, &storage);

        let mut canvas = Canvas::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        face.draw(&mut canvas).unwrap();
        assert_eq!(canvas.untouched(), 0);
        assert_eq!(canvas.pixel(Point::new(SCREEN_WIDTH as i32 - 1, SCREEN_HEIGHT as i32 - 1)), Some(BLACK));
        assert!(canvas.count(WHITE) > 0);
    }

    #[test]
    fn test_draw_unloaded_is_blank() {
        let face = WatchFace::new(screen());
        let mut canvas = Canvas::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        face.draw(&mut canvas).unwrap();
        assert_eq!(canvas.count(BLACK), (SCREEN_WIDTH * SCREEN_HEIGHT) as usize);
    }
}
