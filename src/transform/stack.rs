use glam::{Mat4, Vec3};

use crate::error::ShadeError;

/// An ordered stack of 4x4 matrices.
///
/// The top entry is the current composed transform. Every transform call
/// replaces the top with `top * T`, so later calls act in the local frame
/// of earlier ones. The stack is seeded with one identity matrix and never
/// drops below one entry.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixStack {
    stack: Vec<Mat4>,
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixStack {
    /// Create a stack holding a single identity matrix.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: vec![Mat4::IDENTITY],
        }
    }

    /// Number of matrices currently on the stack (always at least 1).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Duplicate the top matrix, opening a new scope.
    pub fn push_matrix(&mut self) {
        let top = self.top_matrix();
        self.stack.push(top);
    }

    /// Close the innermost scope.
    ///
    /// Popping the last remaining matrix is refused and leaves the stack
    /// untouched.
    pub fn pop_matrix(&mut self) -> Result<(), ShadeError> {
        if self.stack.len() <= 1 {
            log::warn!("pop_matrix called on a stack with one matrix left");
            return Err(ShadeError::StackUnderflow);
        }
        let _ = self.stack.pop();
        Ok(())
    }

    /// The current composed transform.
    #[must_use]
    pub fn top_matrix(&self) -> Mat4 {
        self.stack.last().copied().unwrap_or(Mat4::IDENTITY)
    }

    /// Replace the top matrix with `top * m`.
    pub fn mult_matrix(&mut self, m: Mat4) {
        if let Some(top) = self.stack.last_mut() {
            *top *= m;
        }
    }

    /// Post-multiply a translation.
    pub fn translate(&mut self, offset: Vec3) {
        self.mult_matrix(Mat4::from_translation(offset));
    }

    /// Post-multiply a (possibly non-uniform) scale.
    pub fn scale(&mut self, factors: Vec3) {
        self.mult_matrix(Mat4::from_scale(factors));
    }

    /// Post-multiply a uniform scale.
    pub fn scale_uniform(&mut self, factor: f32) {
        self.scale(Vec3::splat(factor));
    }

    /// Post-multiply a rotation of `angle` radians about `axis`.
    ///
    /// The axis does not need to be normalized; a zero axis is ignored.
    pub fn rotate(&mut self, angle: f32, axis: Vec3) {
        let Some(axis) = axis.try_normalize() else {
            return;
        };
        self.mult_matrix(Mat4::from_axis_angle(axis, angle));
    }
}
