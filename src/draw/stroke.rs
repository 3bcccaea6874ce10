//! Stroke definitions for freehand annotations.

use super::color::Color;
use crate::config::StrokeStyleConfig;
use serde::{Deserialize, Serialize};

/// A position in surface-local pixel space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points.
    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Which drawing tool produced a stroke.
///
/// The eraser never produces strokes, so it has no variant here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrokeKind {
    /// Thin opaque line
    Pen,
    /// Wide translucent line
    Highlighter,
}

/// Line width and opacity used to paint a stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Line width in pixels
    pub width: f64,
    /// Paint opacity (1.0 = opaque)
    pub opacity: f64,
}

impl StrokeStyle {
    /// Resolves the paint style for a stroke kind.
    ///
    /// With default settings a pen paints 3 px opaque and a highlighter paints
    /// 10 px at 0.3 opacity.
    pub fn for_kind(kind: StrokeKind, config: &StrokeStyleConfig) -> Self {
        match kind {
            StrokeKind::Pen => Self {
                width: config.pen_width,
                opacity: 1.0,
            },
            StrokeKind::Highlighter => Self {
                width: config.highlighter_width,
                opacity: config.highlighter_opacity,
            },
        }
    }
}

/// One continuous pen or highlighter gesture.
///
/// Kind and color are fixed when the stroke is created. Points are only
/// appended through [`StrokeStore`](super::StrokeStore) while the stroke is
/// active, and the stroke always holds at least its seed point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    kind: StrokeKind,
    color: Color,
    points: Vec<Point>,
}

impl Stroke {
    pub(crate) fn new(kind: StrokeKind, color: Color, first_point: Point) -> Self {
        Self {
            kind,
            color,
            points: vec![first_point],
        }
    }

    pub fn kind(&self) -> StrokeKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Captured points in order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub(crate) fn push_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Returns true when any captured point lies strictly closer than `radius` to `point`.
    ///
    /// Only sampled points are tested, not the segments between them, so a
    /// fast stroke with widely spaced samples can slip past a small radius.
    pub fn is_near(&self, point: Point, radius: f64) -> bool {
        self.points.iter().any(|p| p.distance_to(point) < radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, RED};

    #[test]
    fn default_styles_match_tool_kinds() {
        let config = StrokeStyleConfig::default();

        let pen = StrokeStyle::for_kind(StrokeKind::Pen, &config);
        assert_eq!(pen.width, 3.0);
        assert_eq!(pen.opacity, 1.0);

        let highlighter = StrokeStyle::for_kind(StrokeKind::Highlighter, &config);
        assert_eq!(highlighter.width, 10.0);
        assert_eq!(highlighter.opacity, 0.3);
    }

    #[test]
    fn new_stroke_is_seeded_with_first_point() {
        let stroke = Stroke::new(StrokeKind::Pen, RED, Point::new(10.0, 10.0));
        assert_eq!(stroke.points(), &[Point::new(10.0, 10.0)]);
        assert_eq!(stroke.color(), RED);
        assert_eq!(stroke.kind(), StrokeKind::Pen);
    }

    #[test]
    fn proximity_uses_strict_radius() {
        let stroke = Stroke::new(StrokeKind::Highlighter, BLUE, Point::new(0.0, 0.0));
        assert!(stroke.is_near(Point::new(6.0, 7.9), 10.0));
        assert!(!stroke.is_near(Point::new(6.0, 8.0), 10.0));
        assert!(!stroke.is_near(Point::new(30.0, 0.0), 10.0));
    }

    #[test]
    fn proximity_ignores_gaps_between_samples() {
        let mut stroke = Stroke::new(StrokeKind::Pen, RED, Point::new(0.0, 0.0));
        stroke.push_point(Point::new(100.0, 0.0));

        // The polyline passes through (50, 0) but no sample is near it.
        assert!(!stroke.is_near(Point::new(50.0, 0.0), 10.0));
    }
}
