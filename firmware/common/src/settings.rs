//! Persisted display options.
//!
//! The face reads four boolean toggles once per window load. They are owned by the
//! host's persistent storage, reached through the [`Storage`] trait, and written only
//! when the companion's configuration page sends new values.
//!
//! A key that was never written reads as `false`, so a fresh install shows only the
//! always-on fields until the user saves settings once.

use heapless::LinearMap;
use log::warn;
use thiserror::Error;

use crate::message::{AppMessage, MessageKey};

/// Keys of the persisted display options.
pub const SETTING_KEYS: [MessageKey; 4] = [
    MessageKey::ShowHeartRate,
    MessageKey::ShowBackground,
    MessageKey::ShowSteps,
    MessageKey::ShowBattery,
];

// =============================================================================
// Storage
// =============================================================================

/// Errors returned by a [`Storage`] backend.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    /// No room left for another key.
    #[error("settings store is full")]
    Full,
    /// The host backend failed to persist the value.
    #[error("settings backend failed to persist {0:?}")]
    Backend(MessageKey),
}

/// Persistent boolean key-value storage provided by the host.
pub trait Storage {
    /// Read a stored flag; `None` if the key was never written.
    fn read_bool(
        &self,
        key: MessageKey,
    ) -> Option<bool>;

    /// Persist a flag.
    fn write_bool(
        &mut self,
        key: MessageKey,
        value: bool,
    ) -> Result<(), StorageError>;
}

/// Number of keys [`MemoryStorage`] can hold.
pub const MEMORY_STORAGE_CAPACITY: usize = 8;

/// Fixed-capacity in-memory storage, for hosts without flash and for tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    values: LinearMap<MessageKey, bool, MEMORY_STORAGE_CAPACITY>,
}

impl MemoryStorage {
    /// Create a new empty store.
    pub const fn new() -> Self { Self { values: LinearMap::new() } }
}

impl Storage for MemoryStorage {
    fn read_bool(
        &self,
        key: MessageKey,
    ) -> Option<bool> {
        self.values.get(&key).copied()
    }

    fn write_bool(
        &mut self,
        key: MessageKey,
        value: bool,
    ) -> Result<(), StorageError> {
        self.values.insert(key, value).map(|_| ()).map_err(|_| StorageError::Full)
    }
}

// =============================================================================
// Display Options
// =============================================================================

/// Toggles controlling which optional elements exist for a window lifetime.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct DisplayOptions {
    pub show_steps: bool,
    pub show_heart_rate: bool,
    pub show_battery: bool,
    pub show_background: bool,
}

impl DisplayOptions {
    /// Every optional element enabled.
    pub const ALL: Self = Self {
        show_steps: true,
        show_heart_rate: true,
        show_battery: true,
        show_background: true,
    };

    /// Read the options from storage. Missing keys read as `false`.
    pub fn load<S: Storage + ?Sized>(storage: &S) -> Self {
        let read = |key| storage.read_bool(key).unwrap_or(false);
        Self {
            show_steps: read(MessageKey::ShowSteps),
            show_heart_rate: read(MessageKey::ShowHeartRate),
            show_battery: read(MessageKey::ShowBattery),
            show_background: read(MessageKey::ShowBackground),
        }
    }
}

/// Persist every setting tuple carried by `message`.
///
/// Returns `true` if at least one stored value changed. A failed write is logged and
/// skipped; the remaining keys are still written.
pub fn apply_settings<S: Storage + ?Sized>(
    message: &AppMessage<'_>,
    storage: &mut S,
) -> bool {
    let mut changed = false;
    for key in SETTING_KEYS {
        let Some(value) = message.find_bool(key) else {
            continue;
        };
        if storage.read_bool(key) == Some(value) {
            continue;
        }
        match storage.write_bool(key, value) {
            Ok(()) => changed = true,
            Err(e) => warn!("Failed to persist {}: {}", key.name(), e),
        }
    }
    changed
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Storage whose writes always fail.
    struct ReadOnlyStorage;

    impl Storage for ReadOnlyStorage {
        fn read_bool(
            &self,
            _key: MessageKey,
        ) -> Option<bool> {
            None
        }

        fn write_bool(
            &mut self,
            key: MessageKey,
            _value: bool,
        ) -> Result<(), StorageError> {
            Err(StorageError::Backend(key))
        }
    }

    #[test]
    fn test_load_defaults_to_false() {
        let storage = MemoryStorage::new();
        assert_eq!(DisplayOptions::load(&storage), DisplayOptions::default());
    }

    #[test]
    fn test_load_reads_each_key() {
        let mut storage = MemoryStorage::new();
        storage.write_bool(MessageKey::ShowSteps, true).unwrap();
        storage.write_bool(MessageKey::ShowBattery, true).unwrap();

        let options = DisplayOptions::load(&storage);
        assert!(options.show_steps);
        assert!(!options.show_heart_rate);
        assert!(options.show_battery);
        assert!(!options.show_background);
    }

    #[test]
    fn test_apply_settings_reports_change() {
        let mut storage = MemoryStorage::new();
        let message = AppMessage::new().with_int(MessageKey::ShowSteps, 1);

        assert!(apply_settings(&message, &mut storage));
        assert_eq!(storage.read_bool(MessageKey::ShowSteps), Some(true));

        // Same value again is not a change
        assert!(!apply_settings(&message, &mut storage));
    }

    #[test]
    fn test_apply_settings_ignores_weather_tuples() {
        let mut storage = MemoryStorage::new();
        let message = AppMessage::new()
            .with_string(MessageKey::Temperature, "72°")
            .with_string(MessageKey::Conditions, "Sunny");

        assert!(!apply_settings(&message, &mut storage));
        assert_eq!(storage.read_bool(MessageKey::Temperature), None);
    }

    #[test]
    fn test_apply_settings_explicit_false_is_a_change() {
        let mut storage = MemoryStorage::new();
        let message = AppMessage::new().with_bool(MessageKey::ShowBattery, false);

        assert!(apply_settings(&message, &mut storage));
        assert_eq!(storage.read_bool(MessageKey::ShowBattery), Some(false));
    }

    #[test]
    fn test_apply_settings_write_failure_is_not_a_change() {
        let mut storage = ReadOnlyStorage;
        let message = AppMessage::new().with_bool(MessageKey::ShowSteps, true);
        assert!(!apply_settings(&message, &mut storage));
    }

    #[test]
    fn test_memory_storage_overwrites_in_place() {
        let mut storage = MemoryStorage::new();
        for key in SETTING_KEYS {
            storage.write_bool(key, true).unwrap();
        }
        // Overwriting an existing key never needs room
        assert!(storage.write_bool(MessageKey::ShowSteps, false).is_ok());
        assert_eq!(storage.read_bool(MessageKey::ShowSteps), Some(false));
    }

    #[test]
    fn test_storage_error_display() {
        assert_eq!(StorageError::Full.to_string(), "settings store is full");
        assert_eq!(
            StorageError::Backend(MessageKey::ShowSteps).to_string(),
            "settings backend failed to persist ShowSteps"
        );
    }
}
