//! Scene state: materials, lights, shader selection and toggles.
//!
//! All selection cursors are clamped on every mutation, so indexing the
//! material list or light rig with them never goes out of bounds.

mod light;
mod material;
mod object;
mod shader;
mod toggle;

use glam::Vec2;
pub use light::{Light, LIGHT_COUNT};
pub use material::Material;
pub use object::SceneObject;
pub use shader::{ShaderProgram, ShaderSources};
pub use toggle::{Toggle, Toggles};

use crate::options::Options;

/// Mutable selection state updated by discrete input.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneState {
    materials: Vec<Material>,
    material: usize,
    lights: [Light; LIGHT_COUNT],
    light: usize,
    light_step: f32,
    shader: ShaderProgram,
    toon_levels: u32,
    toggles: Toggles,
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new(&Options::default())
    }
}

impl SceneState {
    /// Build the initial state from options. An empty material list falls
    /// back to the built-in presets.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        let materials = if options.materials.presets.is_empty() {
            log::warn!("no material presets configured, using built-ins");
            Material::presets()
        } else {
            options.materials.presets.clone()
        };
        Self {
            materials,
            material: 0,
            lights: options.lighting.lights(),
            light: 0,
            light_step: options.lighting.nudge_step,
            shader: options.shading.initial_shader,
            toon_levels: options.shading.initial_toon_levels.max(1),
            toggles: Toggles::default(),
        }
    }

    /// Index of the selected material.
    #[must_use]
    pub fn material_index(&self) -> usize {
        self.material
    }

    /// The selected material.
    #[must_use]
    pub fn material(&self) -> &Material {
        &self.materials[self.material]
    }

    /// Number of material presets.
    #[must_use]
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Select the next material, stopping at the last one.
    pub fn advance_material(&mut self) {
        self.material = (self.material + 1).min(self.materials.len() - 1);
    }

    /// Select the previous material, stopping at the first one.
    pub fn retreat_material(&mut self) {
        self.material = self.material.saturating_sub(1);
    }

    /// The active shading program.
    #[must_use]
    pub fn shader(&self) -> ShaderProgram {
        self.shader
    }

    /// Select the next program, stopping at the last one.
    pub fn advance_shader(&mut self) {
        self.shader = ShaderProgram::from_index(self.shader.index() + 1);
    }

    /// Select the previous program, stopping at the first one.
    pub fn retreat_shader(&mut self) {
        self.shader =
            ShaderProgram::from_index(self.shader.index().saturating_sub(1));
    }

    /// Both lights.
    #[must_use]
    pub fn lights(&self) -> &[Light; LIGHT_COUNT] {
        &self.lights
    }

    /// Index of the light that nudges move.
    #[must_use]
    pub fn light_index(&self) -> usize {
        self.light
    }

    /// Move the light cursor forward, stopping at the last light.
    pub fn advance_light(&mut self) {
        self.light = (self.light + 1).min(LIGHT_COUNT - 1);
    }

    /// Move the light cursor back, stopping at the first light.
    pub fn retreat_light(&mut self) {
        self.light = self.light.saturating_sub(1);
    }

    /// Move the selected light by `steps` nudge steps along x and y.
    pub fn nudge_light(&mut self, steps: Vec2) {
        let offset = steps * self.light_step;
        let light = &mut self.lights[self.light];
        light.position.x += offset.x;
        light.position.y += offset.y;
    }

    /// Number of cel shading bands.
    #[must_use]
    pub fn toon_levels(&self) -> u32 {
        self.toon_levels
    }

    /// One more cel band.
    pub fn increase_toon_levels(&mut self) {
        self.toon_levels = self.toon_levels.saturating_add(1);
    }

    /// One fewer cel band, never below one.
    pub fn decrease_toon_levels(&mut self) {
        self.toon_levels = self.toon_levels.saturating_sub(1).max(1);
    }

    /// Current toggles.
    #[must_use]
    pub fn toggles(&self) -> &Toggles {
        &self.toggles
    }

    /// Flip one toggle.
    pub fn flip(&mut self, toggle: Toggle) {
        self.toggles.flip(toggle);
    }

    /// Whether a toggle is on.
    #[must_use]
    pub fn is_on(&self, toggle: Toggle) -> bool {
        self.toggles.is_on(toggle)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn defaults_match_startup_state() {
        let scene = SceneState::default();
        assert_eq!(scene.material_index(), 0);
        assert_eq!(scene.material_count(), 3);
        assert_eq!(scene.shader(), ShaderProgram::BlinnPhong);
        assert_eq!(scene.light_index(), 0);
        assert_eq!(scene.toon_levels(), 4);
        assert!(!scene.is_on(Toggle::Animate));
    }

    #[test]
    fn material_cursor_is_clamped() {
        let mut scene = SceneState::default();
        for _ in 0..10 {
            scene.advance_material();
            assert!(scene.material_index() < scene.material_count());
        }
        assert_eq!(scene.material_index(), 2);
        for _ in 0..10 {
            scene.retreat_material();
        }
        assert_eq!(scene.material_index(), 0);
    }

    #[test]
    fn shader_cursor_is_clamped() {
        let mut scene = SceneState::default();
        for _ in 0..7 {
            scene.advance_shader();
        }
        assert_eq!(scene.shader(), ShaderProgram::Cel);
        for _ in 0..7 {
            scene.retreat_shader();
        }
        assert_eq!(scene.shader(), ShaderProgram::Normal);
    }

    #[test]
    fn nudges_only_move_the_selected_light() {
        let mut scene = SceneState::default();
        let initial = *scene.lights();

        scene.advance_light();
        scene.advance_light();
        assert_eq!(scene.light_index(), 1);
        scene.nudge_light(Vec2::new(1.0, -1.0));

        assert_eq!(scene.lights()[0], initial[0]);
        assert_eq!(
            scene.lights()[1].position,
            initial[1].position + Vec3::new(0.5, -0.5, 0.0)
        );

        scene.retreat_light();
        scene.retreat_light();
        assert_eq!(scene.light_index(), 0);
    }

    #[test]
    fn toon_levels_never_drop_below_one() {
        let mut scene = SceneState::default();
        for _ in 0..10 {
            scene.decrease_toon_levels();
        }
        assert_eq!(scene.toon_levels(), 1);
        let mut last = scene.toon_levels();
        for _ in 0..5 {
            scene.increase_toon_levels();
            assert!(scene.toon_levels() > last);
            last = scene.toon_levels();
        }
    }

    #[test]
    fn empty_presets_fall_back_to_builtins() {
        let mut options = Options::default();
        options.materials.presets.clear();
        let mut scene = SceneState::new(&options);
        assert_eq!(scene.material_count(), 3);
        scene.advance_material();
        assert_eq!(scene.material(), &Material::presets()[1]);
    }
}
