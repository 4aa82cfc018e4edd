use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use super::stack::MatrixStack;

/// A scalar that is either fixed or driven by the animation clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scalar {
    /// A fixed value.
    Constant(f32),
    /// `rate * t`, with `t` in seconds.
    Linear {
        /// Units per second.
        rate: f32,
    },
    /// `amplitude * cos(t)`.
    Cosine {
        /// Peak magnitude.
        amplitude: f32,
    },
}

impl Scalar {
    /// Evaluate at clock time `t` (seconds).
    #[must_use]
    pub fn at(self, t: f32) -> f32 {
        match self {
            Self::Constant(value) => value,
            Self::Linear { rate } => rate * t,
            Self::Cosine { amplitude } => amplitude * t.cos(),
        }
    }
}

/// One step of an object's model transform.
///
/// A recipe is an ordered list of these; the order is significant since
/// each step post-multiplies the stack top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformOp {
    /// Translate by an offset.
    Translate(Vec3),
    /// Scale by per-axis factors.
    Scale(Vec3),
    /// Rotate about an axis by an angle in radians.
    Rotate {
        /// Rotation angle.
        angle: Scalar,
        /// Rotation axis (normalized on use).
        axis: Vec3,
    },
    /// Shear that skews y along x: `y' = y + amount * x`.
    Shear {
        /// Shear factor.
        amount: Scalar,
    },
}

impl TransformOp {
    /// Uniform scale shorthand.
    #[must_use]
    pub fn scale_uniform(factor: f32) -> Self {
        Self::Scale(Vec3::splat(factor))
    }

    /// Apply this step to the top of `stack` at clock time `t`.
    pub fn apply(&self, stack: &mut MatrixStack, t: f32) {
        match *self {
            Self::Translate(offset) => stack.translate(offset),
            Self::Scale(factors) => stack.scale(factors),
            Self::Rotate { angle, axis } => stack.rotate(angle.at(t), axis),
            Self::Shear { amount } => stack.mult_matrix(shear_y_along_x(amount.at(t))),
        }
    }
}

/// Apply every step of `recipe` in order.
pub fn apply_recipe(recipe: &[TransformOp], stack: &mut MatrixStack, t: f32) {
    for op in recipe {
        op.apply(stack, t);
    }
}

fn shear_y_along_x(amount: f32) -> Mat4 {
    let mut m = Mat4::IDENTITY;
    m.x_axis.y = amount;
    m
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;

    #[test]
    fn scalars_follow_the_clock() {
        assert_eq!(Scalar::Constant(3.0).at(10.0), 3.0);
        assert_eq!(Scalar::Linear { rate: 2.0 }.at(1.5), 3.0);
        assert!((Scalar::Cosine { amplitude: 0.5 }.at(PI) + 0.5).abs() < 1e-6);
        assert_eq!(Scalar::Cosine { amplitude: 0.5 }.at(0.0), 0.5);
    }

    #[test]
    fn shear_skews_y_by_x() {
        let mut stack = MatrixStack::new();
        TransformOp::Shear {
            amount: Scalar::Constant(0.5),
        }
        .apply(&mut stack, 0.0);

        let p = stack.top_matrix().transform_point3(Vec3::new(2.0, 1.0, 0.0));
        assert!(p.abs_diff_eq(Vec3::new(2.0, 2.0, 0.0), 1e-6));
    }

    #[test]
    fn recipe_order_matters() {
        let translate = TransformOp::Translate(Vec3::X);
        let scale = TransformOp::scale_uniform(0.5);

        let mut a = MatrixStack::new();
        apply_recipe(&[translate, scale], &mut a, 0.0);
        let mut b = MatrixStack::new();
        apply_recipe(&[scale, translate], &mut b, 0.0);

        let pa = a.top_matrix().transform_point3(Vec3::ZERO);
        let pb = b.top_matrix().transform_point3(Vec3::ZERO);
        assert!(pa.abs_diff_eq(Vec3::X, 1e-6));
        assert!(pb.abs_diff_eq(Vec3::new(0.5, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn time_driven_rotation_uses_clock() {
        let op = TransformOp::Rotate {
            angle: Scalar::Linear { rate: 1.0 },
            axis: Vec3::Y,
        };
        let mut still = MatrixStack::new();
        op.apply(&mut still, 0.0);
        assert!(still.top_matrix().abs_diff_eq(Mat4::IDENTITY, 1e-6));

        let mut turned = MatrixStack::new();
        op.apply(&mut turned, PI);
        let p = turned.top_matrix().transform_point3(Vec3::X);
        assert!(p.abs_diff_eq(-Vec3::X, 1e-5));
    }
}
