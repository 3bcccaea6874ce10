//! Drawing tool selection.

use crate::draw::StrokeKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Drawing tool selection.
///
/// The active tool decides what a pointer press does: pen and highlighter
/// start a new stroke, the eraser removes strokes under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Thin opaque freehand line (default)
    #[default]
    Pen,
    /// Wide translucent freehand line
    Highlighter,
    /// Removes whole strokes near the cursor
    Eraser,
}

impl Tool {
    /// The kind of stroke this tool draws, or `None` for the eraser.
    pub fn stroke_kind(self) -> Option<StrokeKind> {
        match self {
            Tool::Pen => Some(StrokeKind::Pen),
            Tool::Highlighter => Some(StrokeKind::Highlighter),
            Tool::Eraser => None,
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tool::Pen => "pen",
            Tool::Highlighter => "highlighter",
            Tool::Eraser => "eraser",
        };
        f.write_str(name)
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pen" => Ok(Tool::Pen),
            "highlighter" => Ok(Tool::Highlighter),
            "eraser" => Ok(Tool::Eraser),
            other => Err(format!("unknown tool '{other}'")),
        }
    }
}
