use serde::{Deserialize, Serialize};

use crate::scene::Material;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Material presets, in selection order.
pub struct MaterialOptions {
    /// Preset list; must not be empty.
    pub presets: Vec<Material>,
}

impl Default for MaterialOptions {
    fn default() -> Self {
        Self {
            presets: Material::presets(),
        }
    }
}
