//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::input::Tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the tool and color selected when the overlay is first attached.
/// The toolbar can change both at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Initial pen color - a named color, a `#rrggbb` string, or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Initial tool (pen, highlighter, eraser)
    #[serde(default)]
    pub default_tool: Tool,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_tool: Tool::default(),
        }
    }
}

/// Stroke appearance per tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StrokeStyleConfig {
    /// Pen line width in pixels (valid range: 0.5 - 50.0)
    #[serde(default = "default_pen_width")]
    pub pen_width: f64,

    /// Highlighter line width in pixels (valid range: 0.5 - 50.0)
    #[serde(default = "default_highlighter_width")]
    pub highlighter_width: f64,

    /// Highlighter opacity (valid range: 0.05 - 1.0)
    #[serde(default = "default_highlighter_opacity")]
    pub highlighter_opacity: f64,
}

impl Default for StrokeStyleConfig {
    fn default() -> Self {
        Self {
            pen_width: default_pen_width(),
            highlighter_width: default_highlighter_width(),
            highlighter_opacity: default_highlighter_opacity(),
        }
    }
}

/// Eraser settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EraserConfig {
    /// Hit radius in pixels; strokes with a point closer than this are removed (valid range: 1.0 - 100.0)
    #[serde(default = "default_eraser_radius")]
    pub radius: f64,
}

impl Default for EraserConfig {
    fn default() -> Self {
        Self {
            radius: default_eraser_radius(),
        }
    }
}

/// Initial drawing surface size, used until the first viewport resize arrives.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SurfaceConfig {
    /// Width in pixels (valid range: 1 - 16384)
    #[serde(default = "default_surface_width")]
    pub width: i32,

    /// Height in pixels (valid range: 1 - 16384)
    #[serde(default = "default_surface_height")]
    pub height: i32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: default_surface_width(),
            height: default_surface_height(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("#ff0000".to_string())
}

fn default_pen_width() -> f64 {
    3.0
}

fn default_highlighter_width() -> f64 {
    10.0
}

fn default_highlighter_opacity() -> f64 {
    0.3
}

fn default_eraser_radius() -> f64 {
    10.0
}

fn default_surface_width() -> i32 {
    800
}

fn default_surface_height() -> i32 {
    600
}
