//! Centralized demo options with TOML preset support.
//!
//! Camera tuning, the light rig, material presets, startup shading and
//! key bindings are consolidated here. The defaults reproduce the demo's
//! built-in constants; a TOML file only needs the sections it overrides.

mod camera;
mod keybindings;
mod lighting;
mod materials;
mod shading;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
pub use lighting::{LightOptions, LightingOptions};
pub use materials::MaterialOptions;
use serde::{Deserialize, Serialize};
pub use shading::ShadingOptions;

use crate::error::ShadeError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[lighting]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Light rig.
    pub lighting: LightingOptions,
    /// Material presets.
    pub materials: MaterialOptions,
    /// Startup shader and cel band count.
    pub shading: ShadingOptions,
    /// Keyboard binding options.
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, ShadeError> {
        let mut options: Self = toml::from_str(content)
            .map_err(|e| ShadeError::OptionsParse(e.to_string()))?;
        options.keybindings.rebuild_reverse_map();
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ShadeError> {
        let content = std::fs::read_to_string(path).map_err(ShadeError::Io)?;
        Self::from_toml(&content)
    }

    /// Load `path` if it exists, otherwise return the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ShadeError> {
        if path.is_file() {
            log::info!("loading options from {}", path.display());
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Reject configurations the camera or scene cannot honor.
    pub fn validate(&self) -> Result<(), ShadeError> {
        self.camera.validate().map_err(ShadeError::InvalidOptions)?;
        if self.materials.presets.is_empty() {
            return Err(ShadeError::InvalidOptions(
                "at least one material preset is required".into(),
            ));
        }
        if self.shading.initial_toon_levels == 0 {
            return Err(ShadeError::InvalidOptions(
                "shading.initial_toon_levels must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
