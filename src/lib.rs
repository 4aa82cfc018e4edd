// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests unwrap freely
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Core of an interactive shading demo.
//!
//! Two meshes are shown under two movable point lights with a choice of
//! shading programs (normal visualization, Blinn-Phong, silhouette, cel)
//! and material presets. This crate owns everything except the drawing:
//! an orbit camera driven by pointer drags, matrix stacks that compose
//! view and model transforms, the selection state keys act on, and the
//! per-frame parameter set handed to a render boundary.
//!
//! # Key entry points
//!
//! - [`engine::ShadingEngine`] - input in, [`engine::Frame`]s out
//! - [`camera::CameraController`] - orbit/pan/zoom camera
//! - [`transform::MatrixStack`] - local-frame transform composition
//! - [`scene::SceneState`] - materials, lights, shader and toggles
//! - [`render::RenderBoundary`] - where frames are delivered
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Frame loop
//!
//! Input events are drained into the engine first, then exactly one frame
//! is composed and submitted. Nothing runs concurrently, so each frame
//! reads fully settled state.

pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod render;
pub mod scene;
pub mod transform;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use error::ShadeError;
