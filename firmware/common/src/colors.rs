//! Color constants for the watchface.
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue. Standard
//! colors come from the `RgbColor` trait; the rest are tuned for the background art
//! and the weather icons.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Text Colors
// =============================================================================

/// Pure black (0, 0, 0). Outline half of every text pair, and the screen fill when
/// the background image is hidden.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Fill half of every text pair.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Background Art
// =============================================================================

/// Sky color at the top edge of the background.
pub const SKY_TOP: Rgb565 = Rgb565::new(2, 8, 14);

/// Sky color at the horizon.
pub const SKY_HORIZON: Rgb565 = Rgb565::new(24, 30, 20);

/// Far hills.
pub const HILL_FAR: Rgb565 = Rgb565::new(6, 20, 10);

/// Near hills.
pub const HILL_NEAR: Rgb565 = Rgb565::new(3, 14, 5);

// =============================================================================
// Weather Icons
// =============================================================================

/// Sun disc and rays.
pub const SUN_YELLOW: Rgb565 = Rgb565::new(31, 52, 2);

/// Cloud body.
pub const CLOUD_GRAY: Rgb565 = Rgb565::new(25, 51, 26);

/// Cloud underside shading.
pub const CLOUD_SHADE: Rgb565 = Rgb565::new(16, 34, 18);

/// Rain drops.
pub const RAIN_BLUE: Rgb565 = Rgb565::new(6, 34, 31);

/// Snow flakes.
pub const SNOW_WHITE: Rgb565 = Rgb565::WHITE;

/// Unknown-condition badge.
pub const UNKNOWN_GRAY: Rgb565 = Rgb565::new(14, 28, 14);
