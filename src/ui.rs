//! UI module for the bubble window
//!
//! # Architecture
//!
//! - **Primitives** (`primitives`): `canvas::Program` implementations
//! - **Theme** (`theme`): palette and container styles

pub mod primitives;
pub mod theme;
