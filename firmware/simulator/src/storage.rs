//! Display options persisted in a TOML file.
//!
//! ```toml
//! show_steps = true
//! show_heart_rate = false
//! show_battery = true
//! show_background = true
//! ```
//!
//! Keys that were never written are left out of the file and read as unset.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use watchface_common::{MessageKey, Storage, StorageError};

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
struct SettingsFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    show_heart_rate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    show_background: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    show_steps: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    show_battery: Option<bool>,
}

impl SettingsFile {
    fn slot(
        &mut self,
        key: MessageKey,
    ) -> Option<&mut Option<bool>> {
        match key {
            MessageKey::ShowHeartRate => Some(&mut self.show_heart_rate),
            MessageKey::ShowBackground => Some(&mut self.show_background),
            MessageKey::ShowSteps => Some(&mut self.show_steps),
            MessageKey::ShowBattery => Some(&mut self.show_battery),
            MessageKey::Temperature | MessageKey::Conditions => None,
        }
    }

    fn get(
        &self,
        key: MessageKey,
    ) -> Option<bool> {
        match key {
            MessageKey::ShowHeartRate => self.show_heart_rate,
            MessageKey::ShowBackground => self.show_background,
            MessageKey::ShowSteps => self.show_steps,
            MessageKey::ShowBattery => self.show_battery,
            MessageKey::Temperature | MessageKey::Conditions => None,
        }
    }
}

/// [`Storage`] backed by a TOML file, rewritten on every change.
#[derive(Debug)]
pub struct TomlStorage {
    path: PathBuf,
    settings: SettingsFile,
}

impl TomlStorage {
    /// Open the settings file. A missing file is an empty store; it is created on
    /// the first write.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let settings = match fs::read_to_string(&path) {
            Ok(src) => toml::from_str(&src).with_context(|| format!("invalid settings file {}", path.display()))?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No settings at {}, starting with defaults", path.display());
                SettingsFile::default()
            }
            Err(e) => return Err(e).with_context(|| format!("failed to read {}", path.display())),
        };
        Ok(Self { path, settings })
    }

    fn save(&self) -> Result<()> {
        let src = toml::to_string(&self.settings).context("failed to encode settings")?;
        fs::write(&self.path, src).with_context(|| format!("failed to write {}", self.path.display()))
    }
}

impl Storage for TomlStorage {
    fn read_bool(
        &self,
        key: MessageKey,
    ) -> Option<bool> {
        self.settings.get(key)
    }

    fn write_bool(
        &mut self,
        key: MessageKey,
        value: bool,
    ) -> Result<(), StorageError> {
        let slot = self.settings.slot(key).ok_or(StorageError::Backend(key))?;
        *slot = Some(value);
        self.save().map_err(|e| {
            warn!("{e:#}");
            StorageError::Backend(key)
        })
    }
}
