//! The engine's discrete interactive vocabulary.
//!
//! Every key-driven operation is represented as a [`SceneCommand`].
//! Consumers construct commands (usually through the key bindings) and
//! pass them to [`ShadingEngine::execute`](super::ShadingEngine::execute).
//! Pointer gestures go to the camera directly and are not commands.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::scene::{SceneState, Toggle};

/// A discrete operation on the scene state.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// advance_material = "m"
/// toggle_animation = " "
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneCommand {
    // ── Materials ───────────────────────────────────────────────────
    /// Select the next material preset.
    AdvanceMaterial,
    /// Select the previous material preset.
    RetreatMaterial,

    // ── Shaders ─────────────────────────────────────────────────────
    /// Select the next shading program.
    AdvanceShader,
    /// Select the previous shading program.
    RetreatShader,

    // ── Lights ──────────────────────────────────────────────────────
    /// Move the light cursor to the next light.
    AdvanceLight,
    /// Move the light cursor to the previous light.
    RetreatLight,
    /// Move the selected light toward −X.
    NudgeLightLeft,
    /// Move the selected light toward +X.
    NudgeLightRight,
    /// Move the selected light toward −Y.
    NudgeLightDown,
    /// Move the selected light toward +Y.
    NudgeLightUp,

    // ── Cel shading ─────────────────────────────────────────────────
    /// One more cel band.
    IncreaseToonLevels,
    /// One fewer cel band (never below one).
    DecreaseToonLevels,

    // ── Toggles ─────────────────────────────────────────────────────
    /// Start or freeze the animation clock.
    ToggleAnimation,
    /// Enable or disable back-face culling.
    ToggleCulling,
    /// Switch between filled and wireframe polygons.
    ToggleWireframe,
}

impl SceneCommand {
    /// Apply this command to `scene`.
    pub fn apply(self, scene: &mut SceneState) {
        match self {
            Self::AdvanceMaterial => scene.advance_material(),
            Self::RetreatMaterial => scene.retreat_material(),
            Self::AdvanceShader => scene.advance_shader(),
            Self::RetreatShader => scene.retreat_shader(),
            Self::AdvanceLight => scene.advance_light(),
            Self::RetreatLight => scene.retreat_light(),
            Self::NudgeLightLeft => scene.nudge_light(Vec2::NEG_X),
            Self::NudgeLightRight => scene.nudge_light(Vec2::X),
            Self::NudgeLightDown => scene.nudge_light(Vec2::NEG_Y),
            Self::NudgeLightUp => scene.nudge_light(Vec2::Y),
            Self::IncreaseToonLevels => scene.increase_toon_levels(),
            Self::DecreaseToonLevels => scene.decrease_toon_levels(),
            Self::ToggleAnimation => scene.flip(Toggle::Animate),
            Self::ToggleCulling => scene.flip(Toggle::CullFaces),
            Self::ToggleWireframe => scene.flip(Toggle::Wireframe),
        }
    }
}
