use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Blinn-Phong material coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Ambient reflectance (RGB).
    pub ka: Vec3,
    /// Diffuse reflectance (RGB).
    pub kd: Vec3,
    /// Specular reflectance (RGB).
    pub ks: Vec3,
    /// Specular exponent.
    pub s: f32,
}

impl Material {
    /// Create a material from its coefficients.
    #[must_use]
    pub const fn new(ka: Vec3, kd: Vec3, ks: Vec3, s: f32) -> Self {
        Self { ka, kd, ks, s }
    }

    /// The built-in preset list: warm pink, glossy blue/green and matte
    /// slate.
    #[must_use]
    pub fn presets() -> Vec<Self> {
        vec![
            Self::new(
                Vec3::splat(0.2),
                Vec3::new(0.8, 0.7, 0.7),
                Vec3::new(1.0, 0.9, 0.8),
                200.0,
            ),
            Self::new(
                Vec3::splat(0.2),
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(0.0, 0.8, 0.4),
                200.0,
            ),
            Self::new(
                Vec3::splat(0.2),
                Vec3::new(0.35, 0.38, 0.56),
                Vec3::splat(0.02),
                200.0,
            ),
        ]
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::ZERO, Vec3::ZERO, 0.0)
    }
}
