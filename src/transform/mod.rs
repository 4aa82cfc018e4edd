//! Hierarchical transform composition.
//!
//! A [`MatrixStack`] composes transforms in the object's local frame, and a
//! [`TransformOp`] recipe describes the fixed per-object sequence applied on
//! top of the view matrix each frame.

/// Typed transform operations and per-object recipes.
pub mod recipe;
/// Stack of 4x4 matrices with local-frame post-multiplication.
pub mod stack;

pub use recipe::{Scalar, TransformOp};
pub use stack::MatrixStack;
