//! Host-independent overlay events.

use super::tool::Tool;
use crate::draw::{Color, Point};

/// Everything the surrounding page layer can deliver to the overlay.
///
/// Pointer and resize events come from the host environment unmodified;
/// the remaining variants are toolbar triggers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayEvent {
    /// Primary button pressed at a surface-local position
    PointerDown(Point),
    /// Pointer moved to a surface-local position
    PointerMove(Point),
    /// Primary button released
    PointerUp,
    /// Viewport changed size
    Resize { width: i32, height: i32 },
    /// Explicitly enter or leave writing mode
    SetWritingMode(bool),
    /// Flip writing mode (toolbar switch)
    ToggleWritingMode,
    /// Toolbar tool button
    SetTool(Tool),
    /// Toolbar color picker
    SetColor(Color),
    /// Ensure the toolbar exists
    RequestReopen,
    /// Toolbar close button
    CloseToolbar,
}
