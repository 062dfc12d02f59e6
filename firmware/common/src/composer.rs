//! Widget tree for one loaded window.
//!
//! A [`DisplayComposer`] is built when the window loads and dropped when it unloads.
//! Optional elements are `Option`s decided once from [`DisplayOptions`]: an absent
//! pair has no halves at all, and updating it is a no-op for the whole window
//! lifetime.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Alignment;
use log::debug;

use crate::config::{
    BATTERY_HEIGHT,
    BATTERY_Y,
    DATE_HEIGHT,
    DATE_LEN,
    DATE_Y,
    ICON_HEIGHT,
    ICON_Y,
    METRIC_BOTTOM_OFFSET,
    METRIC_HEIGHT,
    METRIC_INSET,
    METRIC_LEN,
    TIME_HEIGHT,
    TIME_LEN,
    TIME_Y,
    WEATHER_HEIGHT,
    WEATHER_LEN,
    WEATHER_Y,
};
use crate::settings::DisplayOptions;
use crate::styles::{BATTERY_FONT, DATE_FONT, METRIC_FONT, TIME_FONT, WEATHER_FONT};
use crate::weather::WeatherIcon;
use crate::widgets::{Bitmap, BitmapLayer, OutlinedText, ResourceId};

/// Full-width row of the window at vertical offset `y`.
fn row(
    bounds: Rectangle,
    y: i32,
    height: u32,
) -> Rectangle {
    Rectangle::new(
        Point::new(bounds.top_left.x, bounds.top_left.y + y),
        Size::new(bounds.size.width, height),
    )
}

/// Left or right half of the bottom metric row, inset from the screen edge.
fn metric_cell(
    bounds: Rectangle,
    alignment: Alignment,
) -> Rectangle {
    let half = bounds.size.width / 2;
    let width = half.saturating_sub(METRIC_INSET as u32);
    let y = bounds.top_left.y + bounds.size.height as i32 - METRIC_BOTTOM_OFFSET;
    let x = match alignment {
        Alignment::Right => bounds.top_left.x + half as i32,
        Alignment::Left | Alignment::Center => bounds.top_left.x + METRIC_INSET,
    };
    Rectangle::new(Point::new(x, y), Size::new(width, METRIC_HEIGHT))
}

/// Every widget of the loaded window.
#[derive(Debug)]
pub struct DisplayComposer {
    background: Option<BitmapLayer>,
    time: OutlinedText<TIME_LEN>,
    date: OutlinedText<DATE_LEN>,
    weather: OutlinedText<WEATHER_LEN>,
    icon: BitmapLayer,
    steps: Option<OutlinedText<METRIC_LEN>>,
    heart_rate: Option<OutlinedText<METRIC_LEN>>,
    battery: Option<OutlinedText<METRIC_LEN>>,
}

impl DisplayComposer {
    /// Create the widget tree for a window covering `bounds`.
    ///
    /// The icon layer starts empty and every text pair starts blank.
    pub fn build(
        bounds: Rectangle,
        options: DisplayOptions,
    ) -> Self {
        let background = options
            .show_background
            .then(|| BitmapLayer::with_bitmap(bounds, Bitmap::load(ResourceId::Background)));

        let time = OutlinedText::new(row(bounds, TIME_Y, TIME_HEIGHT), TIME_FONT, Alignment::Center);
        let date = OutlinedText::new(row(bounds, DATE_Y, DATE_HEIGHT), DATE_FONT, Alignment::Center);
        let weather = OutlinedText::new(row(bounds, WEATHER_Y, WEATHER_HEIGHT), WEATHER_FONT, Alignment::Center);
        let icon = BitmapLayer::new(row(bounds, ICON_Y, ICON_HEIGHT));

        let steps = options
            .show_steps
            .then(|| OutlinedText::new(metric_cell(bounds, Alignment::Left), METRIC_FONT, Alignment::Left));
        let heart_rate = options
            .show_heart_rate
            .then(|| OutlinedText::new(metric_cell(bounds, Alignment::Right), METRIC_FONT, Alignment::Right));
        let battery = options
            .show_battery
            .then(|| OutlinedText::new(row(bounds, BATTERY_Y, BATTERY_HEIGHT), BATTERY_FONT, Alignment::Center));

        debug!("Built layers: {options:?}");

        Self {
            background,
            time,
            date,
            weather,
            icon,
            steps,
            heart_rate,
            battery,
        }
    }

    // =========================================================================
    // Updates
    // =========================================================================

    pub fn set_time(
        &mut self,
        text: &str,
    ) {
        self.time.set_text(text);
    }

    pub fn set_date(
        &mut self,
        text: &str,
    ) {
        self.date.set_text(text);
    }

    pub fn set_weather(
        &mut self,
        text: &str,
    ) {
        self.weather.set_text(text);
    }

    /// No-op when the steps field is disabled.
    pub fn set_steps(
        &mut self,
        text: &str,
    ) {
        if let Some(pair) = &mut self.steps {
            pair.set_text(text);
        }
    }

    /// No-op when the heart-rate field is disabled.
    pub fn set_heart_rate(
        &mut self,
        text: &str,
    ) {
        if let Some(pair) = &mut self.heart_rate {
            pair.set_text(text);
        }
    }

    /// No-op when the battery field is disabled.
    pub fn set_battery(
        &mut self,
        text: &str,
    ) {
        if let Some(pair) = &mut self.battery {
            pair.set_text(text);
        }
    }

    /// Show the icon for `icon`, releasing the previous bitmap first.
    ///
    /// The old bitmap is released even when the category is unchanged.
    pub fn set_icon(
        &mut self,
        icon: WeatherIcon,
    ) {
        if let Some(old) = self.icon.take_bitmap() {
            debug!("Releasing icon {:?}", old.id());
            drop(old);
        }
        let stale = self.icon.set_bitmap(Bitmap::load(ResourceId::for_icon(icon)));
        debug_assert!(stale.is_none(), "icon bitmap leaked");
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub const fn time(&self) -> &OutlinedText<TIME_LEN> { &self.time }

    #[inline]
    pub const fn date(&self) -> &OutlinedText<DATE_LEN> { &self.date }

    #[inline]
    pub const fn weather(&self) -> &OutlinedText<WEATHER_LEN> { &self.weather }

    #[inline]
    pub const fn steps(&self) -> Option<&OutlinedText<METRIC_LEN>> { self.steps.as_ref() }

    #[inline]
    pub const fn heart_rate(&self) -> Option<&OutlinedText<METRIC_LEN>> { self.heart_rate.as_ref() }

    #[inline]
    pub const fn battery(&self) -> Option<&OutlinedText<METRIC_LEN>> { self.battery.as_ref() }

    #[inline]
    pub const fn background(&self) -> Option<&BitmapLayer> { self.background.as_ref() }

    #[inline]
    pub const fn icon(&self) -> &BitmapLayer { &self.icon }

    /// Resource currently shown in the icon layer.
    #[inline]
    pub fn icon_resource(&self) -> Option<ResourceId> { self.icon.bitmap().map(Bitmap::id) }
}

impl Drawable for DisplayComposer {
    type Color = Rgb565;
    type Output = ();

    /// Draw in creation order, so later layers sit on top.
    fn draw<D>(
        &self,
        target: &mut D,
    ) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        if let Some(background) = &self.background {
            background.draw(target)?;
        }
        self.time.draw(target)?;
        self.date.draw(target)?;
        self.weather.draw(target)?;
        self.icon.draw(target)?;
        for pair in [&self.steps, &self.heart_rate, &self.battery].into_iter().flatten() {
            pair.draw(target)?;
        }
        Ok(())
    }
}

impl Drop for DisplayComposer {
    fn drop(&mut self) {
        // Bitmaps go in reverse creation order; text pairs own no resources
        drop(self.icon.take_bitmap());
        drop(self.background.take());
        debug!("Destroyed layers");
    }
}

// =============================================================================
// Tests
// =============================================================================
