/// Platform-agnostic input events.
///
/// These are fed into
/// [`ShadingEngine::handle_input`](crate::engine::ShadingEngine::handle_input),
/// which routes pointer events to the camera and characters through the
/// key bindings.
///
/// # Example
///
/// ```
/// # use shadelab::{engine::ShadingEngine, input::InputEvent};
/// let mut engine = ShadingEngine::default();
/// engine.handle_input(InputEvent::Character('m'));
/// assert_eq!(engine.scene().material_index(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Cursor left the window; its last position is no longer current.
    CursorLeft,
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
        /// Modifier keys held at the time of the change.
        modifiers: Modifiers,
    },
    /// Scroll wheel (positive = zoom in).
    Scroll {
        /// Scroll amount in lines.
        delta: f32,
    },
    /// A character was typed.
    Character(char),
    /// The framebuffer changed size.
    Resized {
        /// Width in physical pixels.
        width: u32,
        /// Height in physical pixels.
        height: u32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

/// Modifier keys held during a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Shift key.
    pub shift: bool,
    /// Control key.
    pub ctrl: bool,
    /// Alt / option key.
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };
}

#[cfg(feature = "viewer")]
impl From<winit::keyboard::ModifiersState> for Modifiers {
    fn from(state: winit::keyboard::ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            ctrl: state.control_key(),
            alt: state.alt_key(),
        }
    }
}
