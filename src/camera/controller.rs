use glam::{Vec2, Vec3};

use super::{core::Projection, drag::DragMode};
use crate::{input::Modifiers, options::CameraOptions, transform::MatrixStack};

/// Active drag: the mode picked at click time and the last pointer
/// position a delta was taken from.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    mode: DragMode,
    last: Vec2,
}

/// Orbit camera driven by pointer drags.
///
/// Idle until [`mouse_clicked`](Self::mouse_clicked), then every
/// [`mouse_moved`](Self::mouse_moved) applies the delta from the previous
/// recorded position to the drag mode chosen at click time. Rotation is
/// accumulated as yaw (about Y) and pitch (about X) and never reset by a
/// new drag.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraController {
    /// Accumulated (yaw, pitch) in radians.
    rotation: Vec2,
    /// Target offset in the view plane.
    pan: Vec2,
    /// Distance from the target along the view axis.
    distance: f32,
    projection: Projection,
    drag: Option<Drag>,

    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
    scroll_zoom_step: f32,
    min_distance: f32,
    max_distance: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(&CameraOptions::default())
    }
}

impl CameraController {
    /// Create an idle camera from options.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        let min_distance = options.min_distance.max(f32::EPSILON);
        let max_distance = options.max_distance.max(min_distance);
        Self {
            rotation: Vec2::ZERO,
            pan: Vec2::ZERO,
            distance: options.initial_distance.clamp(min_distance, max_distance),
            projection: Projection::from_options(options),
            drag: None,
            rotate_speed: options.rotate_speed,
            pan_speed: options.pan_speed,
            zoom_speed: options.zoom_speed,
            scroll_zoom_step: options.scroll_zoom_step,
            min_distance,
            max_distance,
        }
    }

    /// Accumulated (yaw, pitch) in radians.
    #[must_use]
    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    /// Current target offset in the view plane.
    #[must_use]
    pub fn pan_offset(&self) -> Vec2 {
        self.pan
    }

    /// Current distance from the target.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Current projection parameters.
    #[must_use]
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Mode of the drag in progress, if any.
    #[must_use]
    pub fn drag_mode(&self) -> Option<DragMode> {
        self.drag.map(|d| d.mode)
    }

    /// Set the distance from the target. Called once before the first
    /// frame to establish the initial framing.
    pub fn set_init_distance(&mut self, distance: f32) {
        self.distance = distance.clamp(self.min_distance, self.max_distance);
    }

    /// Set the viewport aspect ratio used by the next projection.
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.projection.aspect = aspect;
        }
    }

    /// Begin a drag at `(x, y)`. The modifiers pick the drag mode for the
    /// whole drag.
    pub fn mouse_clicked(&mut self, x: f32, y: f32, modifiers: Modifiers) {
        let mode = DragMode::from_modifiers(modifiers);
        log::debug!("camera drag start at ({x}, {y}) in {mode:?} mode");
        self.drag = Some(Drag {
            mode,
            last: Vec2::new(x, y),
        });
    }

    /// Apply pointer motion to the active drag. Ignored when idle.
    pub fn mouse_moved(&mut self, x: f32, y: f32) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        let current = Vec2::new(x, y);
        let delta = current - drag.last;
        drag.last = current;
        let mode = drag.mode;

        match mode {
            DragMode::Orbit => self.rotation += delta * self.rotate_speed,
            DragMode::Pan => {
                let scale = self.distance * self.pan_speed;
                self.pan += Vec2::new(delta.x, -delta.y) * scale;
            }
            DragMode::Zoom => self.scale_distance(1.0 - self.zoom_speed * delta.y),
        }
    }

    /// End the active drag.
    pub fn mouse_released(&mut self) {
        if self.drag.take().is_some() {
            log::debug!("camera drag end");
        }
    }

    /// Re-derive the drag state from the polled button state.
    ///
    /// A release reported only through polling ends the drag here. A press
    /// and release that both happen between two polls go unnoticed.
    pub fn sync_button_state(&mut self, pressed: bool) {
        if !pressed {
            self.mouse_released();
        }
    }

    /// Scroll-wheel zoom; positive steps move closer.
    pub fn zoom_by(&mut self, steps: f32) {
        self.scale_distance(1.0 - steps * self.scroll_zoom_step);
    }

    fn scale_distance(&mut self, factor: f32) {
        let scaled = self.distance * factor;
        self.distance = if scaled.is_finite() {
            scaled.clamp(self.min_distance, self.max_distance)
        } else {
            self.min_distance
        };
    }

    /// Post-multiply the view transform onto the top of `stack`:
    /// translate by the pan offset and distance, then pitch about X, then
    /// yaw about Y.
    pub fn apply_view_matrix(&self, stack: &mut MatrixStack) {
        stack.translate(Vec3::new(self.pan.x, self.pan.y, -self.distance));
        stack.rotate(self.rotation.y, Vec3::X);
        stack.rotate(self.rotation.x, Vec3::Y);
    }

    /// Post-multiply the perspective projection onto the top of `stack`.
    pub fn apply_projection_matrix(&self, stack: &mut MatrixStack) {
        stack.mult_matrix(self.projection.matrix());
    }
}

#[cfg(test)]
mod tests {
    use glam::Mat4;

    use super::*;

    fn shift() -> Modifiers {
        Modifiers {
            shift: true,
            ..Modifiers::NONE
        }
    }

    fn ctrl() -> Modifiers {
        Modifiers {
            ctrl: true,
            ..Modifiers::NONE
        }
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let mut camera = CameraController::default();
        let before = camera.clone();
        camera.mouse_moved(50.0, 80.0);
        camera.mouse_moved(-300.0, 12.0);
        assert_eq!(camera, before);
    }

    #[test]
    fn zero_delta_drag_changes_nothing() {
        for modifiers in [Modifiers::NONE, shift(), ctrl()] {
            let mut camera = CameraController::default();
            camera.mouse_clicked(10.0, 20.0, modifiers);
            camera.mouse_moved(10.0, 20.0);
            assert_eq!(camera.rotation(), Vec2::ZERO);
            assert_eq!(camera.pan_offset(), Vec2::ZERO);
            assert_eq!(camera.distance(), 2.0);
        }
    }

    #[test]
    fn orbit_accumulates_incrementally() {
        let mut camera = CameraController::default();
        camera.mouse_clicked(0.0, 0.0, Modifiers::NONE);
        camera.mouse_moved(10.0, 0.0);
        camera.mouse_moved(20.0, 5.0);
        assert!(camera.rotation().abs_diff_eq(Vec2::new(0.2, 0.05), 1e-6));

        // a second drag continues from the accumulated orientation
        camera.mouse_released();
        camera.mouse_clicked(500.0, 500.0, Modifiers::NONE);
        camera.mouse_moved(510.0, 500.0);
        assert!(camera.rotation().abs_diff_eq(Vec2::new(0.3, 0.05), 1e-6));
    }

    #[test]
    fn moves_after_release_are_ignored() {
        let mut camera = CameraController::default();
        camera.mouse_clicked(100.0, 100.0, Modifiers::NONE);
        camera.mouse_moved(110.0, 100.0);
        let after_first = camera.rotation();
        assert!((after_first.x - 0.1).abs() < 1e-6);

        camera.sync_button_state(false);
        camera.mouse_moved(200.0, 200.0);
        assert_eq!(camera.rotation(), after_first);
        assert!(!camera.is_dragging());
    }

    #[test]
    fn mode_is_fixed_for_the_whole_drag() {
        let mut camera = CameraController::default();
        camera.mouse_clicked(0.0, 0.0, shift());
        camera.mouse_moved(0.0, 10.0);
        assert_eq!(camera.drag_mode(), Some(DragMode::Pan));
        assert_eq!(camera.rotation(), Vec2::ZERO);
        // pan moves opposite to screen y, scaled by distance
        assert!(camera.pan_offset().abs_diff_eq(Vec2::new(0.0, -0.02), 1e-6));
    }

    #[test]
    fn zoom_stays_positive() {
        let mut camera = CameraController::default();
        camera.mouse_clicked(0.0, 0.0, ctrl());
        // factor 1 - 0.005 * 1000 would invert the camera
        camera.mouse_moved(0.0, 1000.0);
        assert!(camera.distance() > 0.0);
        assert_eq!(camera.distance(), CameraOptions::default().min_distance);

        camera.mouse_moved(0.0, 0.0);
        assert!(camera.distance() > CameraOptions::default().min_distance);
    }

    #[test]
    fn scroll_zoom_is_clamped() {
        let mut camera = CameraController::default();
        camera.zoom_by(1.0);
        assert!((camera.distance() - 1.8).abs() < 1e-6);
        for _ in 0..200 {
            camera.zoom_by(-5.0);
        }
        assert_eq!(camera.distance(), CameraOptions::default().max_distance);
    }

    #[test]
    fn view_matrix_places_target_in_front() {
        let camera = CameraController::default();
        let mut stack = MatrixStack::new();
        stack.push_matrix();
        camera.apply_view_matrix(&mut stack);

        let target = stack.top_matrix().transform_point3(Vec3::ZERO);
        assert!(target.abs_diff_eq(Vec3::new(0.0, 0.0, -2.0), 1e-6));
        assert!(stack.pop_matrix().is_ok());
        assert_eq!(stack.top_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn view_matrix_does_not_mutate_camera() {
        let mut camera = CameraController::default();
        camera.mouse_clicked(0.0, 0.0, Modifiers::NONE);
        camera.mouse_moved(30.0, 40.0);
        let before = camera.clone();

        let mut stack = MatrixStack::new();
        camera.apply_view_matrix(&mut stack);
        camera.apply_projection_matrix(&mut stack);
        assert_eq!(camera, before);
    }

    #[test]
    fn invalid_aspect_is_ignored() {
        let mut camera = CameraController::default();
        camera.set_aspect(1.5);
        camera.set_aspect(f32::NAN);
        camera.set_aspect(0.0);
        assert_eq!(camera.projection().aspect, 1.5);
    }
}
