//! Cairo-based rendering of the stroke list.
//!
//! The [`Renderer`] owns an ARGB32 image surface sized to the viewport and
//! repaints it from scratch on every [`Renderer::redraw`]. There is no damage
//! tracking: each redraw clears the whole surface and paints every stroke in
//! store order.

use super::stroke::{Stroke, StrokeStyle};
use crate::config::StrokeStyleConfig;
use cairo::{Context, Format, ImageSurface, Operator};
use log::{debug, warn};
use std::io::Write;
use thiserror::Error;

/// Errors raised while managing the drawing surface.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create {width}x{height} drawing surface: {source}")]
    Surface {
        width: i32,
        height: i32,
        #[source]
        source: cairo::Error,
    },

    #[error("failed to encode surface as PNG: {0}")]
    Png(#[from] cairo::IoError),
}

/// A single pixel as stored by Cairo (premultiplied alpha).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Clears the whole target to fully transparent.
pub fn clear_surface(ctx: &Context) {
    let _ = ctx.save();
    ctx.set_operator(Operator::Clear);
    if let Err(err) = ctx.paint() {
        warn!("Failed to clear drawing surface: {err}");
    }
    let _ = ctx.restore();
}

/// Renders all strokes in order (first stroke = bottom layer).
pub fn render_strokes(ctx: &Context, strokes: &[Stroke], config: &StrokeStyleConfig) {
    for stroke in strokes {
        let style = StrokeStyle::for_kind(stroke.kind(), config);
        render_stroke(ctx, stroke, style);
    }
}

/// Renders one stroke as a connected polyline through its points.
///
/// The path starts at the first point and visits every point, so a stroke
/// with a single point paints a round dot.
pub fn render_stroke(ctx: &Context, stroke: &Stroke, style: StrokeStyle) {
    let Some(first) = stroke.points().first() else {
        return;
    };

    let color = stroke.color();
    ctx.set_source_rgba(color.r, color.g, color.b, color.a * style.opacity);
    ctx.set_line_width(style.width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.new_path();
    ctx.move_to(first.x, first.y);
    for point in stroke.points() {
        ctx.line_to(point.x, point.y);
    }

    if let Err(err) = ctx.stroke() {
        warn!("Failed to paint stroke: {err}");
    }
}

/// Full-surface rasterizer for the overlay.
pub struct Renderer {
    surface: ImageSurface,
    style: StrokeStyleConfig,
    /// Opacity applied to the stroke currently being painted
    global_alpha: f64,
}

impl Renderer {
    /// Creates a renderer with a cleared surface of the given size.
    ///
    /// Sizes below 1 px are clamped to 1 px.
    pub fn new(width: i32, height: i32, style: StrokeStyleConfig) -> Result<Self, RenderError> {
        let surface = create_surface(width, height)?;
        Ok(Self {
            surface,
            style,
            global_alpha: 1.0,
        })
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    /// Opacity left on the painter after the last redraw (always 1.0 between redraws).
    pub fn global_alpha(&self) -> f64 {
        self.global_alpha
    }

    /// Stroke styling used when painting.
    pub fn style(&self) -> &StrokeStyleConfig {
        &self.style
    }

    /// Matches the surface to a new viewport size.
    ///
    /// Existing stroke coordinates are not rescaled. Resizing to the current
    /// size is a no-op and returns `Ok(false)`; otherwise the surface is
    /// replaced by a cleared one and `Ok(true)` is returned. Callers must
    /// redraw after a successful resize.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<bool, RenderError> {
        let (width, height) = (width.max(1), height.max(1));
        if width == self.width() && height == self.height() {
            return Ok(false);
        }

        let surface = create_surface(width, height)?;
        debug!(
            "Surface resized from {}x{} to {}x{}",
            self.width(),
            self.height(),
            width,
            height
        );
        self.surface = surface;
        Ok(true)
    }

    /// Clears the surface and paints every stroke in order.
    pub fn redraw(&mut self, strokes: &[Stroke]) {
        let ctx = match Context::new(&self.surface) {
            Ok(ctx) => ctx,
            Err(err) => {
                warn!("Failed to create drawing context: {err}");
                return;
            }
        };

        clear_surface(&ctx);

        for stroke in strokes {
            let style = StrokeStyle::for_kind(stroke.kind(), &self.style);
            self.global_alpha = style.opacity;
            render_stroke(
                &ctx,
                stroke,
                StrokeStyle {
                    width: style.width,
                    opacity: self.global_alpha,
                },
            );
        }

        // Opacity never carries over into later draw calls.
        self.global_alpha = 1.0;
        drop(ctx);
        self.surface.flush();
    }

    /// Samples one pixel, or `None` outside the surface.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }

        let stride = self.surface.stride() as usize;
        let offset = y as usize * stride + x as usize * 4;
        let mut pixel = None;

        let result = self.surface.with_data(|data| {
            if let Some(bytes) = data.get(offset..offset + 4) {
                // ARGB32 is a native-endian u32 per pixel.
                let value = u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
                pixel = Some(Rgba {
                    a: (value >> 24) as u8,
                    r: (value >> 16) as u8,
                    g: (value >> 8) as u8,
                    b: value as u8,
                });
            }
        });

        if let Err(err) = result {
            warn!("Failed to read surface pixels: {err}");
        }
        pixel
    }

    /// Copies the raw surface bytes (row stride included).
    pub fn snapshot(&self) -> Vec<u8> {
        let mut copy = Vec::new();
        if let Err(err) = self.surface.with_data(|data| copy.extend_from_slice(data)) {
            warn!("Failed to read surface pixels: {err}");
        }
        copy
    }

    /// Returns true when at least one pixel is not fully transparent.
    pub fn has_ink(&self) -> bool {
        let mut inked = false;
        let _ = self
            .surface
            .with_data(|data| inked = data.iter().any(|byte| *byte != 0));
        inked
    }

    /// Encodes the current surface as PNG.
    pub fn write_png<W: Write>(&self, writer: &mut W) -> Result<(), RenderError> {
        self.surface.write_to_png(writer)?;
        Ok(())
    }
}

fn create_surface(width: i32, height: i32) -> Result<ImageSurface, RenderError> {
    let (width, height) = (width.max(1), height.max(1));
    ImageSurface::create(Format::ARgb32, width, height).map_err(|source| RenderError::Surface {
        width,
        height,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::StrokeStore;
    use crate::draw::color::{BLUE, RED};
    use crate::draw::stroke::{Point, StrokeKind};

    fn renderer(width: i32, height: i32) -> Renderer {
        Renderer::new(width, height, StrokeStyleConfig::default()).unwrap()
    }

    fn line(store: &mut StrokeStore, kind: StrokeKind, from: (f64, f64), to: (f64, f64)) {
        let color = if kind == StrokeKind::Pen { RED } else { BLUE };
        let id = store.begin_stroke(kind, color, Point::from(from));
        store.append_point(id, Point::from(to)).unwrap();
        store.finalize(id);
    }

    #[test]
    fn redraw_of_empty_list_leaves_surface_clear() {
        let mut renderer = renderer(64, 48);
        renderer.redraw(&[]);
        assert!(!renderer.has_ink());
        assert_eq!(renderer.global_alpha(), 1.0);
    }

    #[test]
    fn pen_paints_opaque_pixels_along_path() {
        let mut store = StrokeStore::new();
        line(&mut store, StrokeKind::Pen, (10.0, 10.0), (40.0, 10.0));

        let mut renderer = renderer(64, 48);
        renderer.redraw(store.all());

        let px = renderer.pixel(25, 10).unwrap();
        assert_eq!(px.a, 255);
        assert_eq!(px.r, 255);
        assert_eq!(px.g, 0);
        // Pen is 3 px wide; 5 px away stays empty.
        assert_eq!(renderer.pixel(25, 15).unwrap().a, 0);
    }

    #[test]
    fn highlighter_is_wide_and_translucent() {
        let mut store = StrokeStore::new();
        line(&mut store, StrokeKind::Highlighter, (10.0, 20.0), (50.0, 20.0));

        let mut renderer = renderer(64, 48);
        renderer.redraw(store.all());

        let center = renderer.pixel(30, 20).unwrap();
        assert!((70..=84).contains(&center.a), "alpha was {}", center.a);
        // 10 px wide: 3 px off the centre line is still covered.
        let off_center = renderer.pixel(30, 23).unwrap();
        assert!((70..=84).contains(&off_center.a), "alpha was {}", off_center.a);
        assert_eq!(renderer.global_alpha(), 1.0);
    }

    #[test]
    fn single_point_stroke_paints_without_error() {
        let mut store = StrokeStore::new();
        let id = store.begin_stroke(StrokeKind::Pen, RED, Point::new(20.0, 20.0));
        store.finalize(id);

        let mut renderer = renderer(40, 40);
        renderer.redraw(store.all());
        assert_eq!(renderer.global_alpha(), 1.0);
        assert!(renderer.pixel(40, 0).is_none());
    }

    #[test]
    fn resize_to_same_size_is_noop() {
        let mut renderer = renderer(80, 60);
        assert!(!renderer.resize(80, 60).unwrap());
        assert!(renderer.resize(120, 60).unwrap());
        assert_eq!((renderer.width(), renderer.height()), (120, 60));
    }

    #[test]
    fn resize_clamps_degenerate_sizes() {
        let mut renderer = renderer(80, 60);
        assert!(renderer.resize(0, -5).unwrap());
        assert_eq!((renderer.width(), renderer.height()), (1, 1));
    }

    #[test]
    fn erased_stroke_disappears_on_redraw() {
        let mut store = StrokeStore::new();
        line(&mut store, StrokeKind::Pen, (10.0, 10.0), (30.0, 10.0));

        let mut renderer = renderer(64, 48);
        renderer.redraw(store.all());
        assert!(renderer.has_ink());

        assert_eq!(store.erase_near(Point::new(10.0, 10.0), 10.0), 1);
        renderer.redraw(store.all());
        assert!(!renderer.has_ink());
    }
}
