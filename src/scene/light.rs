use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Number of point lights in the scene.
pub const LIGHT_COUNT: usize = 2;

/// A point light in view space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    /// Position.
    pub position: Vec3,
    /// RGB intensity.
    pub color: Vec3,
}

impl Light {
    /// Create a light.
    #[must_use]
    pub const fn new(position: Vec3, color: Vec3) -> Self {
        Self { position, color }
    }

    /// Default rig: a bright key light up-right and a dim yellow fill
    /// up-left.
    #[must_use]
    pub fn default_rig() -> [Self; LIGHT_COUNT] {
        [
            Self::new(Vec3::new(1.0, 1.0, 1.0), Vec3::splat(0.8)),
            Self::new(Vec3::new(-1.0, 1.0, 1.0), Vec3::new(0.2, 0.2, 0.0)),
        ]
    }
}
