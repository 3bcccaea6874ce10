//! Overlay facade: the interface the surrounding page layer talks to.
//!
//! Wraps the [`InputState`] together with toolbar presence. The toolbar
//! widgets themselves live outside this crate; the overlay only tracks
//! whether they should exist so reopen requests stay idempotent.

use crate::config::Config;
use crate::draw::RenderError;
use crate::input::{InputState, OverlayEvent};
use log::{debug, info};

/// Toolbar presence for the attached overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarState {
    Hidden,  // Closed by the user; drawing state is kept
    Visible, // Toolbar shown
}

/// An attached annotation overlay.
pub struct Overlay {
    input: InputState,
    toolbar: ToolbarState,
}

impl Overlay {
    /// Attaches a new overlay with an empty stroke store and the toolbar shown.
    pub fn new(config: &Config) -> Result<Self, RenderError> {
        Ok(Self::with_input(InputState::from_config(config)?))
    }

    /// Attaches an overlay around an existing session.
    pub fn with_input(input: InputState) -> Self {
        info!("Overlay attached");
        Self {
            input,
            toolbar: ToolbarState::Visible,
        }
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn toolbar_state(&self) -> ToolbarState {
        self.toolbar
    }

    pub fn toolbar_visible(&self) -> bool {
        self.toolbar == ToolbarState::Visible
    }

    /// Ensures the toolbar exists. Calling it while the toolbar is shown does nothing.
    pub fn request_reopen(&mut self) {
        if self.toolbar == ToolbarState::Hidden {
            self.toolbar = ToolbarState::Visible;
            info!("Toolbar reopened");
        } else {
            debug!("Reopen requested while toolbar already visible");
        }
    }

    /// Removes the toolbar. Strokes and writing mode are left as they are.
    pub fn close_toolbar(&mut self) {
        if self.toolbar == ToolbarState::Visible {
            self.toolbar = ToolbarState::Hidden;
            info!("Toolbar closed");
        }
    }

    /// Routes one host or toolbar event. Returns `true` when the surface was repainted.
    pub fn dispatch(&mut self, event: OverlayEvent) -> bool {
        match event {
            OverlayEvent::PointerDown(point) => self.input.on_pointer_down(point),
            OverlayEvent::PointerMove(point) => self.input.on_pointer_move(point),
            OverlayEvent::PointerUp => {
                self.input.on_pointer_up();
                false
            }
            OverlayEvent::Resize { width, height } => self.input.on_resize(width, height),
            OverlayEvent::SetWritingMode(enabled) => {
                self.input.set_writing_mode(enabled);
                false
            }
            OverlayEvent::ToggleWritingMode => {
                self.input.toggle_writing_mode();
                false
            }
            OverlayEvent::SetTool(tool) => {
                self.input.set_tool(tool);
                false
            }
            OverlayEvent::SetColor(color) => {
                self.input.set_color(color);
                false
            }
            OverlayEvent::RequestReopen => {
                self.request_reopen();
                false
            }
            OverlayEvent::CloseToolbar => {
                self.close_toolbar();
                false
            }
        }
    }
}
