use crate::input::Modifiers;

/// What a pointer drag does to the camera.
///
/// Chosen once when the button goes down and kept until release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragMode {
    /// Rotate the view around the target.
    #[default]
    Orbit,
    /// Move the target in the view plane.
    Pan,
    /// Move the camera along the view axis.
    Zoom,
}

impl DragMode {
    /// Shift pans, ctrl or alt zooms, no modifier orbits. Shift wins when
    /// several modifiers are held.
    #[must_use]
    pub fn from_modifiers(modifiers: Modifiers) -> Self {
        if modifiers.shift {
            Self::Pan
        } else if modifiers.ctrl || modifiers.alt {
            Self::Zoom
        } else {
            Self::Orbit
        }
    }
}
