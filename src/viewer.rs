//! Standalone window backed by winit.
//!
//! The window is the input source: its events are decoded into
//! [`InputEvent`]s for the engine, and every redraw composes one frame
//! and hands it to a [`RenderBoundary`]. The window title mirrors the
//! current selection.
//!
//! ```no_run
//! # use shadelab::viewer::Viewer;
//! Viewer::builder()
//!     .with_resource_dir("resources")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::{path::PathBuf, sync::Arc};

use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::{Window, WindowId},
};

use crate::{
    engine::{ShadingEngine, Viewport},
    error::ShadeError,
    input::{InputEvent, Modifiers, MouseButton},
    options::Options,
    render::{ParameterDump, RenderBoundary, CAPTURE_FILE},
};

/// Initial window size in logical pixels.
const WINDOW_SIZE: (u32, u32) = (640, 480);

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    resource_dir: PathBuf,
    options: Option<Options>,
    boundary: Option<Box<dyn RenderBoundary>>,
    offline: bool,
    title: String,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self {
            resource_dir: PathBuf::from("."),
            options: None,
            boundary: None,
            offline: false,
            title: "shadelab".into(),
        }
    }

    /// Directory holding the shader sources and meshes.
    #[must_use]
    pub fn with_resource_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.resource_dir = dir.into();
        self
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Hand frames to `boundary` instead of the parameter dump.
    #[must_use]
    pub fn with_boundary(mut self, boundary: impl RenderBoundary + 'static) -> Self {
        self.boundary = Some(Box::new(boundary));
        self
    }

    /// Render one frame, capture it to [`CAPTURE_FILE`] and exit.
    #[must_use]
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        let boundary = self
            .boundary
            .unwrap_or_else(|| Box::new(ParameterDump::new(self.resource_dir.clone())));
        Viewer {
            options: self.options.unwrap_or_default(),
            boundary,
            offline: self.offline,
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window that drives a [`ShadingEngine`].
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    boundary: Box<dyn RenderBoundary>,
    offline: bool,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed, or until the capture is written in offline mode.
    pub fn run(self) -> Result<(), ShadeError> {
        let event_loop =
            EventLoop::new().map_err(|e| ShadeError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            engine: ShadingEngine::new(&self.options),
            boundary: self.boundary,
            offline: self.offline,
            title: self.title,
            shown_status: String::new(),
            modifiers: Modifiers::NONE,
            left_pressed: false,
            failure: None,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| ShadeError::Viewer(e.to_string()))?;
        app.failure.map_or(Ok(()), Err)
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: ShadingEngine,
    boundary: Box<dyn RenderBoundary>,
    offline: bool,
    title: String,
    /// Status last written to the title bar.
    shown_status: String,
    modifiers: Modifiers,
    /// Left button state as last reported by the window.
    left_pressed: bool,
    /// First fatal error, returned from [`Viewer::run`].
    failure: Option<ShadeError>,
}

impl ViewerApp {
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: ShadeError) {
        log::error!("{error}");
        if self.failure.is_none() {
            self.failure = Some(error);
        }
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.engine.sync_button_state(self.left_pressed);

        let result = self
            .engine
            .compose_frame()
            .and_then(|frame| self.boundary.submit(&frame));
        if let Err(e) = result {
            self.fail(event_loop, e);
            return;
        }

        if self.offline {
            match self.boundary.capture(std::path::Path::new(CAPTURE_FILE)) {
                Ok(path) => log::info!("Wrote to {}", path.display()),
                Err(e) => {
                    log::error!("Couldn't write to {CAPTURE_FILE}");
                    self.fail(event_loop, e);
                    return;
                }
            }
            event_loop.exit();
            return;
        }

        let status = self.engine.status_line();
        if let Some(window) = &self.window {
            if status != self.shown_status {
                window.set_title(&format!("{} | {status}", self.title));
                self.shown_status = status;
            }
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                WINDOW_SIZE.0,
                WINDOW_SIZE.1,
            ));
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                self.fail(
                    event_loop,
                    ShadeError::Viewer(format!("failed to create window: {e}")),
                );
                return;
            }
        };

        let inner = window.inner_size();
        self.engine
            .set_viewport(Viewport::new(inner.width, inner.height));
        log::info!(
            "window ready: {}x{} ({})",
            inner.width,
            inner.height,
            if self.offline { "offline" } else { "interactive" }
        );

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                self.engine.handle_input(InputEvent::Resized {
                    width: size.width,
                    height: size.height,
                });
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = Modifiers::from(modifiers.state());
            }

            WindowEvent::MouseInput { button, state, .. } => {
                let button = MouseButton::from(button);
                let pressed = state == ElementState::Pressed;
                if button == MouseButton::Left {
                    self.left_pressed = pressed;
                }
                self.engine.handle_input(InputEvent::MouseButton {
                    button,
                    pressed,
                    modifiers: self.modifiers,
                });
            }

            // A release outside the window is never reported.
            WindowEvent::Focused(false) => self.left_pressed = false,

            WindowEvent::CursorMoved { position, .. } => {
                self.engine.handle_input(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::CursorLeft { .. } => {
                self.engine.handle_input(InputEvent::CursorLeft);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let scroll_delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                self.engine.handle_input(InputEvent::Scroll {
                    delta: scroll_delta,
                });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                if event.logical_key == Key::Named(NamedKey::Escape) {
                    event_loop.exit();
                    return;
                }
                if let Some(text) = &event.text {
                    for c in text.chars() {
                        self.engine.handle_input(InputEvent::Character(c));
                    }
                }
            }

            _ => (),
        }
    }
}
