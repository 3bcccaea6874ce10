use crate::draw::Point;
use crate::input::tool::Tool;
use log::{debug, error};

use super::{DrawingState, InputState};

impl InputState {
    /// Processes a primary-button press.
    ///
    /// # Behavior
    /// - Pen/highlighter: starts a stroke seeded with `point` and enters `Drawing`
    /// - Eraser: erases strokes near `point`, repainting if any were removed
    ///
    /// Ignored while writing mode is off. Returns `true` when the surface was repainted.
    pub fn on_pointer_down(&mut self, point: Point) -> bool {
        if !self.writing_mode {
            return false;
        }

        self.pointer_down = true;

        match self.active_tool.stroke_kind() {
            Some(kind) => {
                let stroke = self.store.begin_stroke(kind, self.active_color, point);
                self.state = DrawingState::Drawing { stroke };
                debug!(
                    "Started {:?} stroke {:?} at ({:.1}, {:.1})",
                    kind, stroke, point.x, point.y
                );
                false
            }
            None => self.erase_at(point),
        }
    }

    /// Processes pointer motion.
    ///
    /// # Behavior
    /// - Button not held: ignored
    /// - Eraser: erases strokes near `point`, repainting if any were removed
    /// - Drawing: appends `point` to the active stroke and repaints
    ///
    /// Ignored while writing mode is off. Returns `true` when the surface was repainted.
    pub fn on_pointer_move(&mut self, point: Point) -> bool {
        if !self.writing_mode || !self.pointer_down {
            return false;
        }

        if self.active_tool == Tool::Eraser {
            return self.erase_at(point);
        }

        let DrawingState::Drawing { stroke } = self.state else {
            // Drag that began with the eraser; nothing to extend.
            return false;
        };

        if let Err(err) = self.store.append_point(stroke, point) {
            error!("Dropping pointer capture after stroke bookkeeping error: {err}");
            self.state = DrawingState::Idle;
            return false;
        }

        self.redraw();
        true
    }

    /// Processes a primary-button release.
    ///
    /// Finalizes the active stroke, if any, and returns to `Idle`. Safe to
    /// call with no stroke in progress. Ignored while writing mode is off.
    pub fn on_pointer_up(&mut self) {
        if !self.writing_mode {
            return;
        }

        if let DrawingState::Drawing { stroke } = self.state {
            self.store.finalize(stroke);
            debug!("Finalized stroke {:?}", stroke);
        }

        self.state = DrawingState::Idle;
        self.pointer_down = false;
    }

    fn erase_at(&mut self, point: Point) -> bool {
        let removed = self.store.erase_near(point, self.eraser_radius);
        if removed == 0 {
            return false;
        }

        // The eraser may have hit the stroke a switched tool left active.
        if let DrawingState::Drawing { stroke } = self.state {
            if self.store.get(stroke).is_none() {
                self.state = DrawingState::Idle;
            }
        }

        self.redraw();
        true
    }
}
