//! Camera system for the shading demo.
//!
//! Provides an orbit camera with rotation, panning and zoom driven by
//! pointer drags, plus the projection parameters it feeds to the matrix
//! stacks each frame.

/// Orbit camera controller: drag state machine and view/projection output.
pub mod controller;
/// Perspective projection parameters.
pub mod core;
/// Drag modes selected by modifier keys at click time.
pub mod drag;

pub use self::controller::CameraController;
pub use self::core::Projection;
pub use self::drag::DragMode;
