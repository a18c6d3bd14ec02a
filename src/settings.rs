//! Optional user settings read once at startup from
//! `<config_dir>/geoglobe/settings.ron`. A missing file means defaults; a file
//! that can't be read or parsed is reported and also falls back to defaults.

#[cfg(not(target_arch = "wasm32"))]
use std::fs;
use std::io;
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

use bevy::prelude::*;
#[cfg(not(target_arch = "wasm32"))]
use dirs::config_dir;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::globe::GlobeVariant;

#[cfg(not(target_arch = "wasm32"))]
const SETTINGS_DIRECTORY: &str = "geoglobe";
#[cfg(not(target_arch = "wasm32"))]
const SETTINGS_FILENAME: &str = "settings.ron";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not read settings: {0}")]
    Io(#[from] io::Error),
    #[error("could not parse settings: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

#[derive(Resource, Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
#[serde(default)]
pub struct GlobeSettings {
    pub variant:     GlobeVariant,
    /// Height in logical px of the virtual page the globe sits on. Taller than
    /// the window makes the page scrollable, which drives the rotation.
    pub page_height: Option<f32>,
}

impl GlobeSettings {
    pub fn from_ron(contents: &str) -> Result<Self, SettingsError> { Ok(ron::from_str(contents)?) }

    /// Never fails; problems are logged and defaults returned
    pub fn load() -> Self {
        match Self::read() {
            Ok(Some(settings)) => {
                info!("Loaded settings: {settings:?}");
                settings
            },
            Ok(None) => {
                info!("No settings file, using defaults");
                Self::default()
            },
            Err(error) => {
                warn!("Ignoring settings file: {error}");
                Self::default()
            },
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn read() -> Result<Option<Self>, SettingsError> {
        let Some(path) = settings_path() else {
            return Ok(None);
        };
        match fs::read_to_string(&path) {
            Ok(contents) => Self::from_ron(&contents).map(Some),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    // no filesystem in the browser
    #[cfg(target_arch = "wasm32")]
    #[allow(clippy::unnecessary_wraps, reason = "matches the native signature")]
    const fn read() -> Result<Option<Self>, SettingsError> { Ok(None) }
}

#[cfg(not(target_arch = "wasm32"))]
fn settings_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(SETTINGS_DIRECTORY).join(SETTINGS_FILENAME))
}
