//! Primitive UI elements - atomic building blocks
//!
//! This module contains the lowest-level UI components that implement
//! iced's `canvas::Program` trait directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Primitives must not import from `crate::app`
//! - **Generic Message types**: Use type parameters for flexibility
//!
//! # Contents
//!
//! - [`BlobCanvas`] - Animated organic blob using Canvas

pub mod blob_canvas;

pub use blob_canvas::{BlobCanvas, LayerPaint, view_blob};
