//! Centralized navigation/playback options with TOML preset support.
//!
//! Every tweakable bound (orbit limits, gesture sensitivity, playback speed
//! mapping) is consolidated here. Options serialize to/from TOML so a host
//! can ship view presets alongside its packing results.

mod camera;
mod playback;

use std::path::Path;

pub use camera::CameraOptions;
pub use playback::PlaybackOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PackViewError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[playback]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Orbit limits and gesture sensitivity.
    pub camera: CameraOptions,
    /// Reveal playback speed mapping.
    pub playback: PlaybackOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, PackViewError> {
        toml::from_str(content)
            .map_err(|e| PackViewError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, PackViewError> {
        let content =
            std::fs::read_to_string(path).map_err(PackViewError::Io)?;
        let options = Self::from_toml_str(&content)?;
        log::info!("Loaded options from '{}'", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), PackViewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PackViewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(PackViewError::Io)?;
        }
        std::fs::write(path, content).map_err(PackViewError::Io)?;
        log::info!("Saved options to '{}'", path.display());
        Ok(())
    }
}
