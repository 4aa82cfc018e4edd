//! Per-frame composition of camera, scene state and object recipes into
//! the parameter set handed to the render boundary.

use glam::Mat4;
use serde::Serialize;

use super::uniform::ShadingUniform;
use crate::{
    camera::CameraController,
    error::ShadeError,
    scene::{
        Light, Material, SceneObject, SceneState, ShaderProgram, Toggle,
        LIGHT_COUNT,
    },
    transform::{recipe::apply_recipe, MatrixStack},
};

/// Framebuffer size in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Create a viewport.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height, or `None` for an empty (minimized) framebuffer.
    #[must_use]
    pub fn aspect(&self) -> Option<f32> {
        (self.width > 0 && self.height > 0)
            .then(|| self.width as f32 / self.height as f32)
    }
}

/// Fixed-function state the render boundary applies before drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RenderState {
    /// Cull back faces.
    pub cull_faces: bool,
    /// Draw polygons as lines.
    pub wireframe: bool,
}

/// Transforms for one object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectParams {
    /// Object name.
    pub name: String,
    /// Mesh file name, relative to the resource directory.
    pub mesh: String,
    /// Object-to-view transform.
    pub model_view: Mat4,
    /// Inverse-transpose of `model_view`, for normals.
    pub normal_matrix: Mat4,
}

/// Everything the render boundary needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// Framebuffer the frame was composed for.
    pub viewport: Viewport,
    /// Animation clock reading in seconds.
    pub time: f32,
    /// Perspective projection.
    pub projection: Mat4,
    /// Program to draw with.
    pub shader: ShaderProgram,
    /// Active material.
    pub material: Material,
    /// Both lights.
    pub lights: [Light; LIGHT_COUNT],
    /// Cel band count.
    pub toon_levels: u32,
    /// Culling and polygon mode.
    pub render_state: RenderState,
    /// Per-object transforms, in draw order.
    pub objects: Vec<ObjectParams>,
}

impl Frame {
    /// Pack the uniforms for object `index`.
    #[must_use]
    pub fn uniforms(&self, index: usize) -> Option<ShadingUniform> {
        self.objects
            .get(index)
            .map(|object| ShadingUniform::new(self, object))
    }
}

/// Compose one frame.
///
/// The projection and view go on independent stacks; each object then
/// gets its own scope on the model-view stack, its recipe is applied at
/// clock time `time`, and the scope is closed again.
pub fn compose_frame(
    scene: &SceneState,
    camera: &CameraController,
    objects: &[SceneObject],
    viewport: Viewport,
    time: f32,
) -> Result<Frame, ShadeError> {
    let mut projection = MatrixStack::new();
    let mut model_view = MatrixStack::new();

    projection.push_matrix();
    camera.apply_projection_matrix(&mut projection);
    model_view.push_matrix();
    camera.apply_view_matrix(&mut model_view);

    let mut params = Vec::with_capacity(objects.len());
    for object in objects {
        model_view.push_matrix();
        apply_recipe(&object.recipe, &mut model_view, time);
        let mv = model_view.top_matrix();
        params.push(ObjectParams {
            name: object.name.clone(),
            mesh: object.mesh.clone(),
            model_view: mv,
            normal_matrix: normal_matrix(mv),
        });
        model_view.pop_matrix()?;
    }

    let frame = Frame {
        viewport,
        time,
        projection: projection.top_matrix(),
        shader: scene.shader(),
        material: *scene.material(),
        lights: *scene.lights(),
        toon_levels: scene.toon_levels(),
        render_state: RenderState {
            cull_faces: scene.is_on(Toggle::CullFaces),
            wireframe: scene.is_on(Toggle::Wireframe),
        },
        objects: params,
    };

    model_view.pop_matrix()?;
    projection.pop_matrix()?;
    Ok(frame)
}

/// Inverse-transpose of `mv`. A singular transform (an object scaled to
/// nothing) has no normals to speak of, so identity is returned.
fn normal_matrix(mv: Mat4) -> Mat4 {
    if mv.determinant().abs() <= f32::EPSILON {
        log::warn!("singular model-view matrix, using identity normals");
        return Mat4::IDENTITY;
    }
    mv.inverse().transpose()
}

#[cfg(test)]
mod tests {
    use glam::{Vec3, Vec4};

    use super::*;
    use crate::transform::TransformOp;

    fn compose_default(scene: &SceneState, time: f32) -> Frame {
        let camera = CameraController::default();
        compose_frame(
            scene,
            &camera,
            &SceneObject::defaults(),
            Viewport::new(640, 480),
            time,
        )
        .unwrap()
    }

    #[test]
    fn viewport_aspect() {
        assert_eq!(Viewport::new(640, 480).aspect(), Some(640.0 / 480.0));
        assert_eq!(Viewport::new(640, 0).aspect(), None);
    }

    #[test]
    fn bunny_sits_left_and_below_the_target() {
        let frame = compose_default(&SceneState::default(), 0.0);
        let bunny = &frame.objects[0];
        assert_eq!(bunny.name, "bunny");

        let origin = bunny.model_view.transform_point3(Vec3::ZERO);
        assert!(origin.abs_diff_eq(Vec3::new(-0.5, -0.5, -2.0), 1e-6));
        // uniform scale 0.5, no rotation at t = 0
        let x = bunny.model_view.transform_vector3(Vec3::X);
        assert!(x.abs_diff_eq(Vec3::new(0.5, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn teapot_is_sheared_then_turned() {
        let frame = compose_default(&SceneState::default(), 0.0);
        let teapot = &frame.objects[1];

        // rotate(pi, Y) maps +X to -X, then shear adds 0.5 * x to y
        let x = teapot.model_view.transform_vector3(Vec3::X);
        assert!(x.abs_diff_eq(Vec3::new(-0.5, -0.25, 0.0), 1e-5));

        let origin = teapot.model_view.transform_point3(Vec3::ZERO);
        assert!(origin.abs_diff_eq(Vec3::new(0.5, 0.0, -2.0), 1e-6));
    }

    #[test]
    fn shear_follows_the_clock() {
        let scene = SceneState::default();
        let at_zero = compose_default(&scene, 0.0);
        let at_half_turn = compose_default(&scene, std::f32::consts::FRAC_PI_2);

        // cos(pi/2) = 0 removes the shear entirely
        let x = at_half_turn.objects[1]
            .model_view
            .transform_vector3(Vec3::X);
        assert!(x.abs_diff_eq(Vec3::new(-0.5, 0.0, 0.0), 1e-5));
        assert_ne!(at_zero.objects[1].model_view, at_half_turn.objects[1].model_view);
    }

    #[test]
    fn normal_matrix_keeps_normals_perpendicular() {
        let objects = vec![SceneObject {
            name: "squashed".into(),
            mesh: "box.obj".into(),
            recipe: vec![TransformOp::Scale(Vec3::new(2.0, 0.5, 1.0))],
        }];
        let frame = compose_frame(
            &SceneState::default(),
            &CameraController::default(),
            &objects,
            Viewport::new(100, 100),
            0.0,
        )
        .unwrap();
        let object = &frame.objects[0];

        // tangent and normal of the plane x + y = 0
        let tangent = object.model_view.transform_vector3(Vec3::new(1.0, -1.0, 0.0));
        let normal = object.normal_matrix.transform_vector3(Vec3::new(1.0, 1.0, 0.0));
        assert!(tangent.dot(normal).abs() < 1e-5);
    }

    #[test]
    fn singular_transform_gets_identity_normals() {
        let objects = vec![SceneObject {
            name: "flat".into(),
            mesh: "plane.obj".into(),
            recipe: vec![TransformOp::scale_uniform(0.0)],
        }];
        let frame = compose_frame(
            &SceneState::default(),
            &CameraController::default(),
            &objects,
            Viewport::new(100, 100),
            0.0,
        )
        .unwrap();
        assert_eq!(frame.objects[0].normal_matrix, Mat4::IDENTITY);
    }

    #[test]
    fn frame_carries_scene_selection() {
        let mut scene = SceneState::default();
        scene.advance_material();
        scene.advance_shader();
        scene.increase_toon_levels();
        scene.flip(Toggle::Wireframe);

        let frame = compose_default(&scene, 0.0);
        assert_eq!(frame.material, *scene.material());
        assert_eq!(frame.shader, ShaderProgram::Silhouette);
        assert_eq!(frame.toon_levels, 5);
        assert!(frame.render_state.wireframe);
        assert!(!frame.render_state.cull_faces);
        assert_eq!(frame.lights, *scene.lights());
    }

    #[test]
    fn projection_matches_camera() {
        let camera = CameraController::default();
        let frame = compose_frame(
            &SceneState::default(),
            &camera,
            &[],
            Viewport::new(1, 1),
            0.0,
        )
        .unwrap();
        assert_eq!(frame.projection, camera.projection().matrix());
        assert!(frame.objects.is_empty());
        let clip = frame.projection * Vec4::new(0.0, 0.0, -1.0, 1.0);
        assert!(clip.w > 0.0);
    }
}
