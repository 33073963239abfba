//! Pixmap-backed implementation of the core drawing surface.

use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};
use watercolor_core::path::{Path, PathElement};
use watercolor_core::surface::Surface;
use watercolor_pigment::Srgb;

#[derive(Clone, Copy)]
struct PaintState {
    transform: Transform,
    fill: Srgb,
    stroke: Srgb,
}

/// A [`Surface`] that rasterizes into a `tiny-skia` pixmap.
///
/// Logical coordinates are y-up with the origin at the bottom-left; the
/// pixmap's device space is y-down. The flip is folded into the surface's
/// base transform, so translations and paths coming from the paint pass go
/// through in logical coordinates unchanged.
pub struct PixmapSurface {
    pixmap: Pixmap,
    state: PaintState,
    stack: Vec<PaintState>,
    pending: PathBuilder,
}

impl core::fmt::Debug for PixmapSurface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PixmapSurface")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

impl PixmapSurface {
    /// Creates a surface rendering into a transparent pixmap with the
    /// provided size (device pixels).
    ///
    /// Returns `None` when the dimensions cannot back a pixel buffer.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(width: u32, height: u32) -> Option<Self> {
        let pixmap = Pixmap::new(width, height)?;
        let base = Transform::from_row(1.0, 0.0, 0.0, -1.0, 0.0, height as f32);
        Some(Self {
            pixmap,
            state: PaintState {
                transform: base,
                fill: Srgb::BLACK,
                stroke: Srgb::BLACK,
            },
            stack: Vec::new(),
            pending: PathBuilder::new(),
        })
    }

    /// Returns the pixmap width.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Returns the pixmap height.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Returns a reference to the backing pixmap for presenting or copying.
    #[must_use]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Consumes the surface, returning the rendered pixmap.
    #[must_use]
    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    fn take_pending(&mut self) -> Option<tiny_skia::Path> {
        core::mem::replace(&mut self.pending, PathBuilder::new()).finish()
    }

    fn paint_for(color: Srgb) -> Option<Paint<'static>> {
        let color = tiny_skia::Color::from_rgba(color.red, color.green, color.blue, 1.0)?;
        let mut paint = Paint::default();
        paint.set_color(color);
        paint.anti_alias = true;
        Some(paint)
    }
}

impl Surface for PixmapSurface {
    fn save_state(&mut self) {
        self.stack.push(self.state);
    }

    fn restore_state(&mut self) {
        // Unbalanced restores are ignored rather than popping past the root.
        if let Some(previous) = self.stack.pop() {
            self.state = previous;
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.state.transform = self.state.transform.pre_translate(dx, dy);
    }

    fn set_fill_color(&mut self, color: Srgb) {
        self.state.fill = color;
    }

    fn set_stroke_color(&mut self, color: Srgb) {
        self.state.stroke = color;
    }

    fn add_path(&mut self, path: &Path) {
        for element in path.elements() {
            match element {
                PathElement::MoveTo(p) => self.pending.move_to(p.x, p.y),
                PathElement::LineTo(p) => self.pending.line_to(p.x, p.y),
                PathElement::CubicTo(c1, c2, end) => {
                    self.pending.cubic_to(c1.x, c1.y, c2.x, c2.y, end.x, end.y);
                }
                PathElement::Close => self.pending.close(),
            }
        }
    }

    fn fill_path(&mut self) {
        let Some(path) = self.take_pending() else {
            return;
        };
        let Some(paint) = Self::paint_for(self.state.fill) else {
            return;
        };
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, self.state.transform, None);
    }

    fn stroke_path(&mut self, width: f32) {
        let Some(path) = self.take_pending() else {
            return;
        };
        let Some(paint) = Self::paint_for(self.state.stroke) else {
            return;
        };
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, self.state.transform, None);
    }
}
