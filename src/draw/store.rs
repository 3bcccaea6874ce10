//! Ordered stroke storage with proximity erasure.

use super::color::Color;
use super::stroke::{Point, Stroke, StrokeKind};
use log::debug;
use thiserror::Error;

/// Handle to a stroke returned by [`StrokeStore::begin_stroke`].
///
/// Only meaningful while the stroke is the store's active stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StrokeId(u64);

/// Misuse of the stroke store by its caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StrokeError {
    #[error("stroke {0:?} is not the active stroke (already finalized or erased)")]
    NotActive(StrokeId),

    #[error("no stroke is in progress")]
    NoActiveStroke,
}

/// Container for every stroke drawn on the overlay.
///
/// Insertion order is paint order: the first stroke is the bottom layer and
/// the last is painted on top. At most one stroke is active (still accepting
/// points) at any time; it is always the most recently begun stroke.
#[derive(Debug, Default)]
pub struct StrokeStore {
    /// Strokes in draw order
    strokes: Vec<Stroke>,
    /// Handle of each stroke, parallel to `strokes`
    ids: Vec<StrokeId>,
    active: Option<StrokeId>,
    next_id: u64,
}

impl StrokeStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new stroke seeded with `first_point` and appends it on top.
    ///
    /// Any stroke that was still active is finalized first.
    pub fn begin_stroke(&mut self, kind: StrokeKind, color: Color, first_point: Point) -> StrokeId {
        if let Some(previous) = self.active.take() {
            debug!("Finalizing {:?} implicitly before starting a new stroke", previous);
        }

        let id = StrokeId(self.next_id);
        self.next_id += 1;

        self.strokes.push(Stroke::new(kind, color, first_point));
        self.ids.push(id);
        self.active = Some(id);
        id
    }

    /// Appends a point to the active stroke.
    ///
    /// # Errors
    /// Returns [`StrokeError`] if `id` is not the active stroke. This always
    /// indicates a caller bug; the store is left untouched.
    pub fn append_point(&mut self, id: StrokeId, point: Point) -> Result<(), StrokeError> {
        match self.active {
            None => Err(StrokeError::NoActiveStroke),
            Some(active) if active != id => Err(StrokeError::NotActive(id)),
            Some(_) => {
                // The active stroke is always the last one begun.
                match (self.ids.last(), self.strokes.last_mut()) {
                    (Some(last), Some(stroke)) if *last == id => {
                        stroke.push_point(point);
                        Ok(())
                    }
                    _ => Err(StrokeError::NotActive(id)),
                }
            }
        }
    }

    /// Marks the stroke as complete. Finalizing anything but the active stroke is a no-op.
    pub fn finalize(&mut self, id: StrokeId) {
        if self.active == Some(id) {
            self.active = None;
        }
    }

    /// Returns the active stroke handle, if a stroke is in progress.
    pub fn active(&self) -> Option<StrokeId> {
        self.active
    }

    /// Returns the stroke behind a handle, if it has not been erased.
    pub fn get(&self, id: StrokeId) -> Option<&Stroke> {
        self.ids
            .iter()
            .position(|candidate| *candidate == id)
            .map(|index| &self.strokes[index])
    }

    /// Removes every stroke with a point strictly within `radius` of `point`.
    ///
    /// Returns how many strokes were removed (0 when nothing was hit).
    pub fn erase_near(&mut self, point: Point, radius: f64) -> usize {
        let before = self.strokes.len();
        let hits: Vec<bool> = self
            .strokes
            .iter()
            .map(|stroke| stroke.is_near(point, radius))
            .collect();

        if let Some(active) = self.active {
            let active_hit = self
                .ids
                .iter()
                .zip(&hits)
                .any(|(id, hit)| *hit && *id == active);
            if active_hit {
                self.active = None;
            }
        }

        let mut flags = hits.iter();
        self.strokes.retain(|_| flags.next().is_some_and(|hit| !hit));
        let mut flags = hits.iter();
        self.ids.retain(|_| flags.next().is_some_and(|hit| !hit));

        let removed = before - self.strokes.len();
        if removed > 0 {
            debug!(
                "Erased {} stroke(s) near ({:.1}, {:.1}), {} remaining",
                removed,
                point.x,
                point.y,
                self.strokes.len()
            );
        }
        removed
    }

    /// All strokes in paint order.
    pub fn all(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, RED};

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn begin_append_finalize_keeps_capture_order() {
        let mut store = StrokeStore::new();
        let id = store.begin_stroke(StrokeKind::Pen, RED, pt(10.0, 10.0));
        store.append_point(id, pt(20.0, 10.0)).unwrap();
        store.append_point(id, pt(30.0, 15.0)).unwrap();
        store.finalize(id);

        assert_eq!(store.len(), 1);
        assert_eq!(store.active(), None);
        let stroke = &store.all()[0];
        assert_eq!(stroke.kind(), StrokeKind::Pen);
        assert_eq!(stroke.color(), RED);
        assert_eq!(
            stroke.points(),
            &[pt(10.0, 10.0), pt(20.0, 10.0), pt(30.0, 15.0)]
        );
    }

    #[test]
    fn append_after_finalize_is_rejected() {
        let mut store = StrokeStore::new();
        let id = store.begin_stroke(StrokeKind::Pen, RED, pt(0.0, 0.0));
        store.finalize(id);

        assert_eq!(
            store.append_point(id, pt(1.0, 1.0)),
            Err(StrokeError::NoActiveStroke)
        );
        assert_eq!(store.all()[0].points().len(), 1);
    }

    #[test]
    fn append_to_stale_handle_is_rejected() {
        let mut store = StrokeStore::new();
        let first = store.begin_stroke(StrokeKind::Pen, RED, pt(0.0, 0.0));
        let second = store.begin_stroke(StrokeKind::Highlighter, BLUE, pt(50.0, 50.0));

        assert_eq!(
            store.append_point(first, pt(1.0, 1.0)),
            Err(StrokeError::NotActive(first))
        );
        assert!(store.append_point(second, pt(51.0, 51.0)).is_ok());
        assert_eq!(store.all()[0].points().len(), 1);
        assert_eq!(store.all()[1].points().len(), 2);
    }

    #[test]
    fn finalize_unknown_handle_is_noop() {
        let mut store = StrokeStore::new();
        let first = store.begin_stroke(StrokeKind::Pen, RED, pt(0.0, 0.0));
        let second = store.begin_stroke(StrokeKind::Pen, RED, pt(5.0, 5.0));

        store.finalize(first);
        assert_eq!(store.active(), Some(second));
    }

    #[test]
    fn erase_removes_only_strokes_within_radius() {
        let mut store = StrokeStore::new();
        let a = store.begin_stroke(StrokeKind::Pen, RED, pt(0.0, 0.0));
        store.append_point(a, pt(5.0, 5.0)).unwrap();
        store.finalize(a);
        let b = store.begin_stroke(StrokeKind::Pen, BLUE, pt(100.0, 100.0));
        store.append_point(b, pt(120.0, 100.0)).unwrap();
        store.finalize(b);

        let removed = store.erase_near(pt(5.0, 5.0), 10.0);

        assert_eq!(removed, 1);
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].color(), BLUE);
        assert!(store.get(a).is_none());
        assert!(store.get(b).is_some());
    }

    #[test]
    fn erase_near_nothing_is_zero() {
        let mut store = StrokeStore::new();
        assert_eq!(store.erase_near(pt(5.0, 5.0), 10.0), 0);

        let id = store.begin_stroke(StrokeKind::Pen, RED, pt(300.0, 300.0));
        store.finalize(id);
        assert_eq!(store.erase_near(pt(5.0, 5.0), 10.0), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn erase_can_remove_several_overlapping_strokes() {
        let mut store = StrokeStore::new();
        for color in [RED, BLUE, RED] {
            let id = store.begin_stroke(StrokeKind::Highlighter, color, pt(40.0, 40.0));
            store.finalize(id);
        }
        let far = store.begin_stroke(StrokeKind::Pen, RED, pt(400.0, 40.0));
        store.finalize(far);

        assert_eq!(store.erase_near(pt(42.0, 41.0), 10.0), 3);
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].points(), &[pt(400.0, 40.0)]);
    }

    #[test]
    fn erasing_active_stroke_clears_handle() {
        let mut store = StrokeStore::new();
        let id = store.begin_stroke(StrokeKind::Pen, RED, pt(10.0, 10.0));

        assert_eq!(store.erase_near(pt(10.0, 10.0), 10.0), 1);
        assert_eq!(store.active(), None);
        assert_eq!(
            store.append_point(id, pt(11.0, 11.0)),
            Err(StrokeError::NoActiveStroke)
        );
    }
}
