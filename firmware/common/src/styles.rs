//! Fonts and alignments for the text fields.
//!
//! Every text pair shares one font between its outline and fill halves, so styles
//! are exposed as font references; the two halves build their `MonoTextStyle` with
//! their own color.
//!
//! The weather and date fonts are ISO 8859-1 so the degree sign sent by the companion
//! app renders as a glyph rather than the replacement character.

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::iso_8859_1::{FONT_7X13_BOLD, FONT_9X15, FONT_9X15_BOLD, FONT_10X20};
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::PROFONT_24_POINT;

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Centered text, anchored at the top of the layer frame.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .build();

/// Left-aligned text, anchored at the top of the layer frame.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Right-aligned text, anchored at the top of the layer frame.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Right)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Field Fonts
// =============================================================================

/// Large digits for the time.
pub const TIME_FONT: &MonoFont<'static> = &PROFONT_24_POINT;

/// Date line below the time.
pub const DATE_FONT: &MonoFont<'static> = &FONT_10X20;

/// Weather report at the top of the screen.
pub const WEATHER_FONT: &MonoFont<'static> = &FONT_7X13_BOLD;

/// Steps and heart rate.
pub const METRIC_FONT: &MonoFont<'static> = &FONT_9X15;

/// Battery percentage.
pub const BATTERY_FONT: &MonoFont<'static> = &FONT_9X15_BOLD;

/// Map an alignment to its top-anchored text style.
#[inline]
pub const fn text_style_for(alignment: Alignment) -> TextStyle {
    match alignment {
        Alignment::Left => LEFT_ALIGNED,
        Alignment::Center => CENTERED,
        Alignment::Right => RIGHT_ALIGNED,
    }
}
