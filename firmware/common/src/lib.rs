//! Platform-agnostic core of the outlined-text weather watchface.
//!
//! The host (device firmware or the desktop simulator) owns the run loop, the display
//! and every hardware service. It drives this crate through a single [`WatchFace`]
//! session value:
//!
//! - [`face`]: the session, its load/unload lifecycle and the four event handlers
//! - [`composer`]: the widget tree (background, outlined text pairs, weather icon)
//! - [`widgets`]: text layers, outlined pairs, bitmap layers and the vector art
//! - [`weather`]: condition-string classification into icon categories
//! - [`clock`]: time and date formatting
//! - [`message`]: companion application key-value messages
//! - [`settings`]: persisted display options and the storage trait
//! - [`services`]: host services the face reads from
//! - [`config`], [`colors`], [`styles`]: compile-time layout, palette and fonts
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p watchface-common
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), while the library itself stays
//! `no_std` for embedded hosts.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod clock;
pub mod colors;
pub mod composer;
pub mod config;
pub mod face;
pub mod message;
pub mod services;
pub mod settings;
pub mod styles;
pub mod text;
pub mod weather;
pub mod widgets;

#[cfg(test)]
mod test_support;

// Re-export commonly used items
pub use composer::DisplayComposer;
pub use face::{Event, WatchFace};
pub use message::{AppMessage, MessageKey, TupleValue};
pub use services::{BatteryChargeState, HealthEvent, Services};
pub use settings::{DisplayOptions, MemoryStorage, Storage, StorageError};
pub use weather::WeatherIcon;
