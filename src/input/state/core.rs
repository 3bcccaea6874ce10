//! Drawing state machine and session state.

use crate::config::Config;
use crate::draw::{Color, RenderError, Renderer, Stroke, StrokeId, StrokeStore};
use crate::input::tool::Tool;
use crate::util;
use log::{debug, info, warn};

/// Current pointer gesture state.
///
/// The eraser never leaves `Idle`: it acts on press and drag directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingState {
    /// No stroke being captured
    Idle,
    /// Pointer held with pen or highlighter; points go to `stroke`
    Drawing {
        /// Handle of the stroke receiving points
        stroke: StrokeId,
    },
}

/// Main input state containing all drawing session state.
///
/// Owns the stroke store and the renderer, and applies pointer, viewport,
/// and toolbar events to them. Pointer events are dropped entirely while
/// writing mode is off, so the page underneath keeps receiving them.
pub struct InputState {
    /// Every stroke on the overlay, in paint order
    pub(super) store: StrokeStore,
    /// Rasterizer for the overlay surface
    pub(super) renderer: Renderer,
    /// Whether the surface captures pointer events (false = click-through)
    pub(super) writing_mode: bool,
    /// Tool applied to the next pointer press
    pub(super) active_tool: Tool,
    /// Color captured by the next stroke
    pub(super) active_color: Color,
    /// Whether the primary button is held
    pub(super) pointer_down: bool,
    /// Gesture state machine
    pub(super) state: DrawingState,
    /// Eraser hit radius in pixels
    pub(super) eraser_radius: f64,
}

impl InputState {
    /// Creates a new InputState in click-through mode with an empty store.
    ///
    /// # Arguments
    /// * `color` - Initial stroke color
    /// * `tool` - Initial tool
    /// * `eraser_radius` - Eraser hit radius in pixels
    /// * `renderer` - Renderer sized to the current viewport
    pub fn with_defaults(color: Color, tool: Tool, eraser_radius: f64, renderer: Renderer) -> Self {
        Self {
            store: StrokeStore::new(),
            renderer,
            writing_mode: false,
            active_tool: tool,
            active_color: color,
            pointer_down: false,
            state: DrawingState::Idle,
            eraser_radius,
        }
    }

    /// Builds the session from user configuration.
    ///
    /// # Errors
    /// Fails only if the drawing surface cannot be allocated.
    pub fn from_config(config: &Config) -> Result<Self, RenderError> {
        let renderer = Renderer::new(
            config.surface.width,
            config.surface.height,
            config.strokes.clone(),
        )?;
        Ok(Self::with_defaults(
            config.drawing.default_color.to_color(),
            config.drawing.default_tool,
            config.eraser.radius,
            renderer,
        ))
    }

    pub fn writing_mode(&self) -> bool {
        self.writing_mode
    }

    pub fn active_tool(&self) -> Tool {
        self.active_tool
    }

    pub fn active_color(&self) -> Color {
        self.active_color
    }

    pub fn is_pointer_down(&self) -> bool {
        self.pointer_down
    }

    pub fn drawing_state(&self) -> DrawingState {
        self.state
    }

    /// Handle of the stroke being drawn, if any.
    pub fn active_stroke(&self) -> Option<StrokeId> {
        match self.state {
            DrawingState::Drawing { stroke } => Some(stroke),
            DrawingState::Idle => None,
        }
    }

    pub fn eraser_radius(&self) -> f64 {
        self.eraser_radius
    }

    pub fn store(&self) -> &StrokeStore {
        &self.store
    }

    /// All strokes in paint order.
    pub fn strokes(&self) -> &[Stroke] {
        self.store.all()
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Repaints the whole surface from the store.
    pub fn redraw(&mut self) {
        self.renderer.redraw(self.store.all());
    }

    /// Enters or leaves writing mode.
    ///
    /// Leaving writing mode mid-gesture abandons the stroke: the points
    /// captured so far stay in the store and the stroke stops accepting more.
    pub fn set_writing_mode(&mut self, enabled: bool) {
        if self.writing_mode == enabled {
            return;
        }

        if !enabled {
            if let DrawingState::Drawing { stroke } = self.state {
                self.store.finalize(stroke);
                debug!("Abandoned in-progress stroke {:?} on leaving writing mode", stroke);
            }
            self.state = DrawingState::Idle;
            self.pointer_down = false;
        }

        self.writing_mode = enabled;
        info!(
            "Writing mode {}",
            if enabled { "enabled" } else { "disabled (click-through)" }
        );
    }

    /// Flips writing mode and returns the new value.
    pub fn toggle_writing_mode(&mut self) -> bool {
        self.set_writing_mode(!self.writing_mode);
        self.writing_mode
    }

    /// Selects the tool for the next pointer press.
    ///
    /// A stroke already in progress keeps the kind it started with.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.active_tool != tool {
            debug!("Tool changed from {} to {}", self.active_tool, tool);
            self.active_tool = tool;
        }
    }

    /// Selects the color for the next stroke.
    pub fn set_color(&mut self, color: Color) {
        if self.active_color != color {
            debug!("Color changed to {}", util::color_to_name(&color));
            self.active_color = color;
        }
    }

    /// Resizes the surface to the viewport and repaints.
    ///
    /// Stroke coordinates are left as captured. Returns `true` when the
    /// surface was repainted.
    pub fn on_resize(&mut self, width: i32, height: i32) -> bool {
        match self.renderer.resize(width, height) {
            Ok(_) => {
                self.redraw();
                true
            }
            Err(err) => {
                warn!("Keeping previous surface size: {err}");
                false
            }
        }
    }
}
