//! Display, layout and buffer configuration constants.
//!
//! Layout rows are expressed as vertical offsets and heights; horizontal extents
//! follow the window bounds so the same layout works on any screen width. Row
//! ordering is checked at compile time.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 200;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 228;

// =============================================================================
// Text Buffer Capacities (bytes)
// =============================================================================

/// "14:05"
pub const TIME_LEN: usize = 8;

/// "Mon 05 Jan"
pub const DATE_LEN: usize = 16;

/// "<temperature>, <conditions>". Longer reports are truncated; 31 bytes is what
/// fits a 32-byte C string with its terminator.
pub const WEATHER_LEN: usize = 31;

/// Steps, heart rate and battery: "12345 steps", "72 bpm", "43%".
pub const METRIC_LEN: usize = 16;

// =============================================================================
// Layout Rows
// =============================================================================

/// Weather text, top of the screen.
pub const WEATHER_Y: i32 = 8;
pub const WEATHER_HEIGHT: u32 = 22;

/// Weather icon, directly below the weather text.
pub const ICON_Y: i32 = 32;
pub const ICON_HEIGHT: u32 = 30;

/// Icon art is square and centred in the icon row.
pub const ICON_SIZE: u32 = 28;

/// Time, large and centred.
pub const TIME_Y: i32 = 82;
pub const TIME_HEIGHT: u32 = 36;

/// Date, below the time.
pub const DATE_Y: i32 = 122;
pub const DATE_HEIGHT: u32 = 24;

/// Battery, centred above the bottom metric row.
pub const BATTERY_Y: i32 = 172;
pub const BATTERY_HEIGHT: u32 = 20;

/// Distance from the bottom edge to the top of the steps / heart-rate row.
pub const METRIC_BOTTOM_OFFSET: i32 = 28;
pub const METRIC_HEIGHT: u32 = 25;

/// Horizontal inset of the steps (left) and heart-rate (right) fields.
pub const METRIC_INSET: i32 = 5;

/// Offset of the outline half relative to the fill half.
pub const OUTLINE_OFFSET: (i32, i32) = (-1, -1);

// Compile-time validation: rows must not overlap and must fit the screen
const _: () = assert!(WEATHER_Y + WEATHER_HEIGHT as i32 <= ICON_Y);
const _: () = assert!(ICON_Y + ICON_HEIGHT as i32 <= TIME_Y);
const _: () = assert!(ICON_SIZE <= ICON_HEIGHT);
const _: () = assert!(TIME_Y + TIME_HEIGHT as i32 <= DATE_Y);
const _: () = assert!(DATE_Y + DATE_HEIGHT as i32 <= BATTERY_Y);
const _: () = assert!(BATTERY_Y + BATTERY_HEIGHT as i32 <= SCREEN_HEIGHT as i32 - METRIC_BOTTOM_OFFSET);
const _: () = assert!(METRIC_HEIGHT as i32 <= METRIC_BOTTOM_OFFSET);
