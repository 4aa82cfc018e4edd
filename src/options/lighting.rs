use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::scene::{Light, LIGHT_COUNT};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
/// Initial placement and color of one light.
pub struct LightOptions {
    /// Position.
    pub position: [f32; 3],
    /// RGB intensity.
    pub color: [f32; 3],
}

impl From<Light> for LightOptions {
    fn from(light: Light) -> Self {
        Self {
            position: light.position.to_array(),
            color: light.color.to_array(),
        }
    }
}

impl From<LightOptions> for Light {
    fn from(options: LightOptions) -> Self {
        Self::new(Vec3::from(options.position), Vec3::from(options.color))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// The two-light rig and how far a key press moves a light.
pub struct LightingOptions {
    /// Key light.
    pub light1: LightOptions,
    /// Fill light.
    pub light2: LightOptions,
    /// Distance moved by one nudge.
    pub nudge_step: f32,
}

impl Default for LightingOptions {
    fn default() -> Self {
        let [light1, light2] = Light::default_rig();
        Self {
            light1: light1.into(),
            light2: light2.into(),
            nudge_step: 0.5,
        }
    }
}

impl LightingOptions {
    /// The configured rig.
    #[must_use]
    pub fn lights(&self) -> [Light; LIGHT_COUNT] {
        [self.light1.into(), self.light2.into()]
    }
}
