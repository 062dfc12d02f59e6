//! Image resources and the layer that displays them.
//!
//! A [`Bitmap`] is a loaded image handle. It is not `Clone`: every handle has
//! exactly one owner, and releasing it is dropping it. A [`BitmapLayer`]
//! holds at most one bitmap and centres it in its frame.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::trace;

use crate::config::{ICON_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::weather::WeatherIcon;
use crate::widgets::art::{draw_background, draw_cloud, draw_rain, draw_snow, draw_sun, draw_unknown};

/// Image resources bundled with the face.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ResourceId {
    Background,
    WeatherSunny,
    WeatherCloudy,
    WeatherRainy,
    WeatherSnowy,
    WeatherUnknown,
}

impl ResourceId {
    /// Icon resource for a weather category.
    pub const fn for_icon(icon: WeatherIcon) -> Self {
        match icon {
            WeatherIcon::Sunny => Self::WeatherSunny,
            WeatherIcon::Cloudy => Self::WeatherCloudy,
            WeatherIcon::Rainy => Self::WeatherRainy,
            WeatherIcon::Snowy => Self::WeatherSnowy,
            WeatherIcon::Unknown => Self::WeatherUnknown,
        }
    }

    /// Native size of the resource.
    pub const fn size(self) -> Size {
        match self {
            Self::Background => Size::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            Self::WeatherSunny
            | Self::WeatherCloudy
            | Self::WeatherRainy
            | Self::WeatherSnowy
            | Self::WeatherUnknown => Size::new(ICON_SIZE, ICON_SIZE),
        }
    }
}

// =============================================================================
// Bitmap
// =============================================================================

/// A loaded image. Dropping it releases the resource.
#[derive(PartialEq, Eq, Debug)]
pub struct Bitmap {
    id: ResourceId,
}

impl Bitmap {
    /// Load a bundled resource.
    pub fn load(id: ResourceId) -> Self {
        trace!("Loaded bitmap {id:?}");
        Self { id }
    }

    /// Resource this bitmap was loaded from.
    #[inline]
    pub const fn id(&self) -> ResourceId { self.id }

    /// Native size.
    #[inline]
    pub const fn size(&self) -> Size { self.id.size() }

    /// Draw the image with its top-left corner at `top_left`.
    pub fn draw_at<D>(
        &self,
        display: &mut D,
        top_left: Point,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let edge = self.size().width;
        match self.id {
            ResourceId::Background => draw_background(display, Rectangle::new(top_left, self.size())),
            ResourceId::WeatherSunny => draw_sun(display, top_left, edge),
            ResourceId::WeatherCloudy => draw_cloud(display, top_left, edge),
            ResourceId::WeatherRainy => draw_rain(display, top_left, edge),
            ResourceId::WeatherSnowy => draw_snow(display, top_left, edge),
            ResourceId::WeatherUnknown => draw_unknown(display, top_left, edge),
        }
    }
}

impl Drop for Bitmap {
    fn drop(&mut self) {
        trace!("Released bitmap {:?}", self.id);
    }
}

// =============================================================================
// Bitmap Layer
// =============================================================================

/// A frame that shows one optional bitmap, centred and clipped.
#[derive(Debug)]
pub struct BitmapLayer {
    frame: Rectangle,
    bitmap: Option<Bitmap>,
}

impl BitmapLayer {
    /// Create an empty layer.
    pub const fn new(frame: Rectangle) -> Self { Self { frame, bitmap: None } }

    /// Create a layer showing `bitmap`.
    pub const fn with_bitmap(
        frame: Rectangle,
        bitmap: Bitmap,
    ) -> Self {
        Self {
            frame,
            bitmap: Some(bitmap),
        }
    }

    /// Layer frame.
    #[inline]
    pub const fn frame(&self) -> Rectangle { self.frame }

    /// Currently displayed bitmap.
    #[inline]
    pub const fn bitmap(&self) -> Option<&Bitmap> { self.bitmap.as_ref() }

    /// Remove the displayed bitmap, handing ownership back to the caller.
    #[inline]
    pub const fn take_bitmap(&mut self) -> Option<Bitmap> { self.bitmap.take() }

    /// Show `bitmap`. The layer must be empty; call [`take_bitmap`](Self::take_bitmap)
    /// first to release a previous image. A bitmap still held here is handed back.
    #[must_use = "a bitmap that was still displayed is returned and must be released"]
    pub fn set_bitmap(
        &mut self,
        bitmap: Bitmap,
    ) -> Option<Bitmap> {
        self.bitmap.replace(bitmap)
    }
}

impl Drawable for BitmapLayer {
    type Color = Rgb565;
    type Output = ();

    fn draw<D>(
        &self,
        target: &mut D,
    ) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let Some(bitmap) = &self.bitmap else {
            return Ok(());
        };
        let size = bitmap.size();
        let offset = Point::new(
            (self.frame.size.width as i32 - size.width as i32) / 2,
            (self.frame.size.height as i32 - size.height as i32) / 2,
        );
        bitmap.draw_at(&mut target.clipped(&self.frame), self.frame.top_left + offset);
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
