use serde::{Deserialize, Serialize};

use crate::scene::ShaderProgram;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Startup shading selection.
pub struct ShadingOptions {
    /// Program selected at startup.
    pub initial_shader: ShaderProgram,
    /// Cel bands at startup (at least 1).
    pub initial_toon_levels: u32,
}

impl Default for ShadingOptions {
    fn default() -> Self {
        Self {
            initial_shader: ShaderProgram::BlinnPhong,
            initial_toon_levels: 4,
        }
    }
}
