//! The shading engine: owns all interactive state and turns input into
//! frames.
//!
//! Events are drained into [`ShadingEngine::handle_input`] first, then one
//! frame is composed with [`ShadingEngine::compose_frame`]. The two never
//! interleave, so every frame reads fully settled state.

/// Animation clock.
pub mod clock;
/// Discrete scene commands.
pub mod command;
/// Per-frame parameter composition.
pub mod frame;
/// GPU uniform packing.
pub mod uniform;

use glam::Vec2;
use web_time::Instant;

pub use self::clock::AnimationClock;
pub use self::command::SceneCommand;
pub use self::frame::{compose_frame, Frame, ObjectParams, RenderState, Viewport};
pub use self::uniform::ShadingUniform;
use crate::{
    camera::CameraController,
    error::ShadeError,
    input::{InputEvent, Modifiers, MouseButton},
    options::{KeybindingOptions, Options},
    scene::{SceneObject, SceneState, Toggle},
};

/// Scene state, camera, clock and object table behind one entry point.
pub struct ShadingEngine {
    scene: SceneState,
    camera: CameraController,
    objects: Vec<SceneObject>,
    clock: AnimationClock,
    keybindings: KeybindingOptions,
    viewport: Viewport,
    /// Last reported pointer position; `None` until the pointer enters.
    cursor: Option<Vec2>,
    /// Left press seen before any pointer position, waiting to anchor.
    pending_press: Option<Modifiers>,
}

impl Default for ShadingEngine {
    fn default() -> Self {
        Self::new(&Options::default())
    }
}

impl ShadingEngine {
    /// Create an engine showing the default objects. The animation clock
    /// starts now.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        let mut camera = CameraController::new(&options.camera);
        camera.set_init_distance(options.camera.initial_distance);
        Self {
            scene: SceneState::new(options),
            camera,
            objects: SceneObject::defaults(),
            clock: AnimationClock::new(),
            keybindings: options.keybindings.clone(),
            viewport: Viewport::new(640, 480),
            cursor: None,
            pending_press: None,
        }
    }

    /// Replace the object table.
    #[must_use]
    pub fn with_objects(mut self, objects: Vec<SceneObject>) -> Self {
        self.objects = objects;
        self
    }

    /// Replace the animation clock.
    #[must_use]
    pub fn with_clock(mut self, clock: AnimationClock) -> Self {
        self.clock = clock;
        self
    }

    /// Current scene state.
    #[must_use]
    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    /// Current camera.
    #[must_use]
    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    /// Last known framebuffer size.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Apply a discrete command.
    pub fn execute(&mut self, command: SceneCommand) {
        command.apply(&mut self.scene);
        log::debug!("{command:?} -> {}", self.status_line());
    }

    /// Process a platform-agnostic input event.
    ///
    /// Left-button presses start a camera drag at the last cursor position
    /// with the modifiers held at that moment; releases end it. A press
    /// before any known position anchors at the next cursor event instead.
    /// Characters go through the key bindings; unbound characters are
    /// ignored.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = Some(Vec2::new(x, y));
                match self.pending_press.take() {
                    Some(modifiers) => self.camera.mouse_clicked(x, y, modifiers),
                    None => self.camera.mouse_moved(x, y),
                }
            }
            InputEvent::CursorLeft => self.cursor = None,
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed,
                modifiers,
            } => {
                if !pressed {
                    self.pending_press = None;
                    self.camera.mouse_released();
                } else if let Some(at) = self.cursor {
                    self.camera.mouse_clicked(at.x, at.y, modifiers);
                } else {
                    log::debug!("press before any cursor position; anchoring on next move");
                    self.pending_press = Some(modifiers);
                }
            }
            InputEvent::MouseButton { .. } => {}
            InputEvent::Scroll { delta } => self.camera.zoom_by(delta),
            InputEvent::Character(c) => {
                if let Some(command) = self.keybindings.lookup(c) {
                    self.execute(command);
                }
            }
            InputEvent::Resized { width, height } => {
                self.set_viewport(Viewport::new(width, height));
            }
        }
    }

    /// Re-derive the camera drag state from the polled left-button state.
    pub fn sync_button_state(&mut self, left_pressed: bool) {
        if !left_pressed {
            self.pending_press = None;
        }
        self.camera.sync_button_state(left_pressed);
    }

    /// Record the framebuffer size used by the next frame.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Compose a frame at the current time.
    pub fn compose_frame(&mut self) -> Result<Frame, ShadeError> {
        self.compose_frame_at(Instant::now())
    }

    /// Compose a frame as of `now`.
    ///
    /// Pushes the viewport aspect into the camera (an empty viewport keeps
    /// the previous aspect), reads the animation clock (zero while
    /// animation is off) and composes every object.
    pub fn compose_frame_at(&mut self, now: Instant) -> Result<Frame, ShadeError> {
        if let Some(aspect) = self.viewport.aspect() {
            self.camera.set_aspect(aspect);
        }
        let time = self.clock.read(now, self.scene.is_on(Toggle::Animate));
        compose_frame(&self.scene, &self.camera, &self.objects, self.viewport, time)
    }

    /// One-line summary of the selection state.
    #[must_use]
    pub fn status_line(&self) -> String {
        format!(
            "{} | material {}/{} | light {} | levels {}{}",
            self.scene.shader(),
            self.scene.material_index() + 1,
            self.scene.material_count(),
            self.scene.light_index() + 1,
            self.scene.toon_levels(),
            if self.scene.is_on(Toggle::Animate) {
                " | animating"
            } else {
                ""
            },
        )
    }
}
