use std::f32::consts::PI;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::transform::{Scalar, TransformOp};

/// A drawable object: an opaque mesh plus the transform recipe applied to
/// it every frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    /// Display name.
    pub name: String,
    /// Mesh file name, relative to the resource directory.
    pub mesh: String,
    /// Model transform steps, applied in order.
    pub recipe: Vec<TransformOp>,
}

impl SceneObject {
    /// A bunny left of center, spinning about Y at one radian per second.
    #[must_use]
    pub fn bunny() -> Self {
        Self {
            name: "bunny".into(),
            mesh: "bunny.obj".into(),
            recipe: vec![
                TransformOp::Translate(Vec3::new(-0.5, -0.5, 0.0)),
                TransformOp::scale_uniform(0.5),
                TransformOp::Rotate {
                    angle: Scalar::Linear { rate: 1.0 },
                    axis: Vec3::Y,
                },
            ],
        }
    }

    /// A teapot right of center, turned to face the camera and sheared back
    /// and forth over time.
    #[must_use]
    pub fn teapot() -> Self {
        Self {
            name: "teapot".into(),
            mesh: "teapot.obj".into(),
            recipe: vec![
                TransformOp::Translate(Vec3::new(0.5, 0.0, 0.0)),
                TransformOp::scale_uniform(0.5),
                TransformOp::Shear {
                    amount: Scalar::Cosine { amplitude: 0.5 },
                },
                TransformOp::Rotate {
                    angle: Scalar::Constant(PI),
                    axis: Vec3::Y,
                },
            ],
        }
    }

    /// The demo scene.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![Self::bunny(), Self::teapot()]
    }
}
