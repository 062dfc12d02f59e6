//! Vector art for the background and weather icons.
//!
//! Icons are drawn inside a square box given by its top-left corner and edge length,
//! so they scale with `ICON_SIZE`. Everything is built from `embedded-graphics`
//! primitives; there are no image assets to ship.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::iso_8859_1::FONT_9X15_BOLD;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Circle,
    Ellipse,
    Line,
    PrimitiveStyle,
    PrimitiveStyleBuilder,
    Rectangle,
    StrokeAlignment,
};
use embedded_graphics::text::Text;
#[cfg(not(test))]
use micromath::F32Ext;

use crate::colors::{
    CLOUD_GRAY,
    CLOUD_SHADE,
    HILL_FAR,
    HILL_NEAR,
    RAIN_BLUE,
    SKY_HORIZON,
    SKY_TOP,
    SNOW_WHITE,
    SUN_YELLOW,
    UNKNOWN_GRAY,
};
use crate::styles::CENTERED;

const SUN_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(SUN_YELLOW);
const SUN_RAY: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(SUN_YELLOW, 2);
const CLOUD_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(CLOUD_GRAY);
const CLOUD_EDGE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(CLOUD_SHADE, 1);
const RAIN_STROKE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(RAIN_BLUE, 2);
const SNOW_STROKE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(SNOW_WHITE, 1);
const UNKNOWN_RING: PrimitiveStyle<Rgb565> = PrimitiveStyleBuilder::new()
    .stroke_color(UNKNOWN_GRAY)
    .stroke_width(2)
    .stroke_alignment(StrokeAlignment::Inside)
    .build();
const UNKNOWN_TEXT: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_9X15_BOLD, UNKNOWN_GRAY);

/// Height of each sky gradient band in pixels.
const SKY_BAND_HEIGHT: u32 = 6;

/// Number of sun rays.
const SUN_RAYS: u32 = 8;

// =============================================================================
// Background
// =============================================================================

/// Linear blend between two colors, `t` in 0..=`steps`.
fn blend(
    from: Rgb565,
    to: Rgb565,
    t: u32,
    steps: u32,
) -> Rgb565 {
    if steps == 0 {
        return from;
    }
    let mix = |a: u8, b: u8| -> u8 {
        let (a, b) = (u32::from(a), u32::from(b));
        ((a * (steps - t) + b * t) / steps) as u8
    };
    Rgb565::new(mix(from.r(), to.r()), mix(from.g(), to.g()), mix(from.b(), to.b()))
}

/// Draw the background scene: a banded dusk sky over two rows of hills.
pub fn draw_background<D>(
    display: &mut D,
    area: Rectangle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let Rectangle { top_left, size } = area;
    if size.width == 0 || size.height == 0 {
        return;
    }

    let bands = size.height.div_ceil(SKY_BAND_HEIGHT);
    for band in 0..bands {
        let y = top_left.y + (band * SKY_BAND_HEIGHT) as i32;
        Rectangle::new(Point::new(top_left.x, y), Size::new(size.width, SKY_BAND_HEIGHT))
            .into_styled(PrimitiveStyle::with_fill(blend(SKY_TOP, SKY_HORIZON, band, bands - 1)))
            .draw(&mut display.clipped(&area))
            .ok();
    }

    let w = size.width as i32;
    let h = size.height as i32;
    let mut clipped = display.clipped(&area);

    // Far ridge, left of centre
    Ellipse::with_center(
        Point::new(top_left.x + w * 3 / 10, top_left.y + h),
        Size::new(size.width * 6 / 5, size.height / 2),
    )
    .into_styled(PrimitiveStyle::with_fill(HILL_FAR))
    .draw(&mut clipped)
    .ok();

    // Near ridge, right of centre
    Ellipse::with_center(
        Point::new(top_left.x + w * 4 / 5, top_left.y + h + h / 20),
        Size::new(size.width, size.height * 2 / 5),
    )
    .into_styled(PrimitiveStyle::with_fill(HILL_NEAR))
    .draw(&mut clipped)
    .ok();
}

// =============================================================================
// Weather Icons
// =============================================================================

/// Draw a sun: a disc with evenly spaced rays.
pub fn draw_sun<D>(
    display: &mut D,
    top_left: Point,
    size: u32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let center = top_left + Point::new((size / 2) as i32, (size / 2) as i32);
    let disc = size / 2;
    Circle::with_center(center, disc).into_styled(SUN_FILL).draw(display).ok();

    let inner = (disc / 2 + 2) as f32;
    let outer = (size / 2) as f32 - 1.0;
    for i in 0..SUN_RAYS {
        let angle = i as f32 * core::f32::consts::TAU / SUN_RAYS as f32;
        let (sin, cos) = (angle.sin(), angle.cos());
        let from = center + Point::new((cos * inner) as i32, (sin * inner) as i32);
        let to = center + Point::new((cos * outer) as i32, (sin * outer) as i32);
        Line::new(from, to).into_styled(SUN_RAY).draw(display).ok();
    }
}

/// Draw a cloud filling the top `height` pixels of a `width` wide box.
fn draw_cloud_body<D>(
    display: &mut D,
    top_left: Point,
    width: u32,
    height: u32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let w = width as i32;
    let h = height as i32;
    let base_y = top_left.y + h * 3 / 5;

    // Two puffs over a flat base
    Circle::with_center(Point::new(top_left.x + w * 2 / 5, top_left.y + h * 2 / 5), height * 3 / 4)
        .into_styled(CLOUD_FILL)
        .draw(display)
        .ok();
    Circle::with_center(Point::new(top_left.x + w * 2 / 3, base_y), height * 3 / 5)
        .into_styled(CLOUD_FILL)
        .draw(display)
        .ok();
    Rectangle::new(Point::new(top_left.x + w / 8, base_y), Size::new(width * 3 / 4, height * 2 / 5))
        .into_styled(CLOUD_FILL)
        .draw(display)
        .ok();
    Line::new(
        Point::new(top_left.x + w / 8, top_left.y + h - 1),
        Point::new(top_left.x + w * 7 / 8, top_left.y + h - 1),
    )
    .into_styled(CLOUD_EDGE)
    .draw(display)
    .ok();
}

/// Draw a full-size cloud.
pub fn draw_cloud<D>(
    display: &mut D,
    top_left: Point,
    size: u32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_cloud_body(display, top_left + Point::new(0, (size / 6) as i32), size, size * 2 / 3);
}

/// Draw a small cloud with slanted rain streaks below it.
pub fn draw_rain<D>(
    display: &mut D,
    top_left: Point,
    size: u32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_cloud_body(display, top_left, size, size / 2);

    let s = size as i32;
    let top = top_left.y + s / 2 + 3;
    let bottom = top_left.y + s - 2;
    for i in 1..=3 {
        let x = top_left.x + s * i / 4;
        Line::new(Point::new(x, top), Point::new(x - 3, bottom))
            .into_styled(RAIN_STROKE)
            .draw(display)
            .ok();
    }
}

/// Draw a small cloud with snowflakes below it.
pub fn draw_snow<D>(
    display: &mut D,
    top_left: Point,
    size: u32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_cloud_body(display, top_left, size, size / 2);

    let s = size as i32;
    let arm = (s / 10).max(2);
    let y = top_left.y + s * 3 / 4 + 1;
    for i in 1..=3 {
        let center = Point::new(top_left.x + s * i / 4, y + if i == 2 { arm } else { 0 });
        for (dx, dy) in [(arm, 0), (0, arm), (arm, arm), (arm, -arm)] {
            Line::new(center - Point::new(dx, dy), center + Point::new(dx, dy))
                .into_styled(SNOW_STROKE)
                .draw(display)
                .ok();
        }
    }
}

/// Draw the fallback badge: a question mark in a ring.
pub fn draw_unknown<D>(
    display: &mut D,
    top_left: Point,
    size: u32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let center = top_left + Point::new((size / 2) as i32, (size / 2) as i32);
    Circle::with_center(center, size - 2)
        .into_styled(UNKNOWN_RING)
        .draw(display)
        .ok();
    let glyph_height = FONT_9X15_BOLD.character_size.height as i32;
    Text::with_text_style("?", center - Point::new(0, glyph_height / 2), UNKNOWN_TEXT, CENTERED)
        .draw(display)
        .ok();
}

// =============================================================================
// Tests
// =============================================================================
