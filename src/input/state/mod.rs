mod core;
mod mouse;

pub use self::core::{DrawingState, InputState};
