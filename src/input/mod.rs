//! Input handling and tool state machine.
//!
//! This module translates host pointer, viewport, and toolbar events into
//! stroke store mutations and repaints. It owns the session state (writing
//! mode, tool, color) and the gesture state machine (idle, drawing).

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::OverlayEvent;
pub use state::{DrawingState, InputState};
pub use tool::Tool;
