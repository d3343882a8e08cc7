//! Rendering primitives and the drawing-surface abstraction.
//!
//! This module defines everything the pad needs to draw itself:
//! - [`Color`]: RGBA color representation with the default palette
//! - [`FontSize`]: fixed typographic scale for labels and overlays
//! - [`DrawSurface`]: the backend trait rendering is delegated to
//! - Render functions that turn controller state into surface primitives

pub mod color;
pub mod font;
pub mod render;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use font::FontSize;
pub use surface::{DrawOp, DrawSurface, RecordingSurface, TextAlign};

// Re-export color constants for public API
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, CYAN, GREEN, PURPLE, RED, WHITE, YELLOW};
