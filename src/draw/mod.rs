//! Stroke model and rendering (Cairo-based).
//!
//! This module defines the core drawing types used for page annotation:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Stroke`]: One pen or highlighter gesture made of [`Point`]s
//! - [`StrokeStore`]: Ordered container of all strokes, with proximity erasure
//! - [`Renderer`]: Full-surface Cairo rasterizer for the stroke list

pub mod color;
pub mod render;
pub mod store;
pub mod stroke;

// Re-export commonly used types at module level
pub use color::Color;
pub use render::{RenderError, Renderer, Rgba, render_stroke, render_strokes};
pub use store::{StrokeError, StrokeId, StrokeStore};
pub use stroke::{Point, Stroke, StrokeKind, StrokeStyle};
