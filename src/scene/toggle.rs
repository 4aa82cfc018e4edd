use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Boolean switches flipped by key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Toggle {
    /// Run the animation clock.
    Animate,
    /// Cull back faces.
    CullFaces,
    /// Draw polygons as lines.
    Wireframe,
}

/// The set of toggles that are currently on. Everything starts off.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toggles {
    on: FxHashSet<Toggle>,
}

impl Toggles {
    /// Whether `toggle` is on.
    #[must_use]
    pub fn is_on(&self, toggle: Toggle) -> bool {
        self.on.contains(&toggle)
    }

    /// Flip `toggle`.
    pub fn flip(&mut self, toggle: Toggle) {
        if !self.on.remove(&toggle) {
            let _ = self.on.insert(toggle);
        }
    }
}
