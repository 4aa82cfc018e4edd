use glam::Mat4;

use crate::options::CameraOptions;

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self::from_options(&CameraOptions::default())
    }
}

impl Projection {
    /// Build projection parameters from camera options, with a square
    /// aspect until the first viewport is known.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        Self {
            fovy: options.fovy,
            aspect: 1.0,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Right-handed perspective with the OpenGL `[-1, 1]` depth range,
    /// matching the GLSL programs the frames are handed to.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec3, Vec4};

    use super::*;

    #[test]
    fn near_plane_maps_to_minus_one() {
        let projection = Projection::default();
        let clip = projection.matrix()
            * Vec4::new(0.0, 0.0, -projection.znear, 1.0);
        assert!((clip.z / clip.w + 1.0).abs() < 1e-4);
    }

    #[test]
    fn aspect_scales_horizontal_axis() {
        let square = Projection::default();
        let wide = Projection {
            aspect: 2.0,
            ..square
        };
        let p = Vec3::new(1.0, 1.0, -5.0);
        let a = square.matrix().project_point3(p);
        let b = wide.matrix().project_point3(p);
        assert!((a.x - 2.0 * b.x).abs() < 1e-5);
        assert!((a.y - b.y).abs() < 1e-6);
    }
}
