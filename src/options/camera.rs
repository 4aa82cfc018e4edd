use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera projection and control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Distance from the target before any zoom.
    pub initial_distance: f32,
    /// Closest the camera may get to the target.
    pub min_distance: f32,
    /// Farthest the camera may get from the target.
    pub max_distance: f32,
    /// Orbit radians per pixel of drag.
    pub rotate_speed: f32,
    /// Pan per pixel of drag, as a fraction of the distance.
    pub pan_speed: f32,
    /// Zoom drag: fraction of the distance per pixel of vertical drag.
    pub zoom_speed: f32,
    /// Scroll wheel: fraction of the distance per line.
    pub scroll_zoom_step: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 1000.0,
            initial_distance: 2.0,
            min_distance: 0.05,
            max_distance: 500.0,
            rotate_speed: 0.01,
            pan_speed: 0.001,
            zoom_speed: 0.005,
            scroll_zoom_step: 0.1,
        }
    }
}

impl CameraOptions {
    pub(crate) fn validate(&self) -> Result<(), String> {
        let fovy_ok = self.fovy > 0.0 && self.fovy < 180.0;
        if !fovy_ok {
            return Err(format!("camera.fovy must be in (0, 180), got {}", self.fovy));
        }
        let clip_ok = self.znear > 0.0 && self.zfar > self.znear;
        if !clip_ok {
            return Err(format!(
                "camera clip planes must satisfy 0 < znear < zfar, got {} and {}",
                self.znear, self.zfar
            ));
        }
        let distance_ok =
            self.min_distance > 0.0 && self.max_distance >= self.min_distance;
        if !distance_ok {
            return Err(format!(
                "camera distances must satisfy 0 < min_distance <= max_distance, got {} and {}",
                self.min_distance, self.max_distance
            ));
        }
        Ok(())
    }
}
