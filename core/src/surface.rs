//! Drawing surface abstraction and the painting context.
//!
//! Nodes never talk to a backend directly. They paint through [`RenderCtx`],
//! which forwards to a [`Surface`] implementation while carrying its own
//! explicit copy of the mutable graphics state (translation, fill, stroke).
//! The copy is what makes scoping cheap and auditable: entering a child
//! snapshots the state value, leaving restores it, and the surface's own
//! save/restore stack is bracketed at the same points. A child can therefore
//! never leak translation or color changes into a later sibling.

use core::fmt::{self, Debug};

use watercolor_pigment::Srgb;

use crate::alignment::Alignment;
use crate::geometry::{Point, Size};
use crate::path::Path;

/// An imperative 2D drawing surface.
///
/// The operation set is deliberately small: state stack, translation, two
/// current colors, and a pending path that fill/stroke consume. Anything a
/// rasterizer can express richer than this stays out of the core protocol.
///
/// Implementations must treat `save_state`/`restore_state` as a stack and
/// must clear the pending path after [`fill_path`](Surface::fill_path) or
/// [`stroke_path`](Surface::stroke_path).
pub trait Surface {
    /// Pushes a snapshot of the current graphics state.
    fn save_state(&mut self);

    /// Pops the most recent snapshot, restoring its graphics state.
    fn restore_state(&mut self);

    /// Translates the coordinate system by the given offsets.
    fn translate(&mut self, dx: f32, dy: f32);

    /// Sets the current fill color.
    fn set_fill_color(&mut self, color: Srgb);

    /// Sets the current stroke color.
    fn set_stroke_color(&mut self, color: Srgb);

    /// Appends a path to the pending path.
    fn add_path(&mut self, path: &Path);

    /// Fills the pending path with the current fill color and clears it.
    fn fill_path(&mut self);

    /// Strokes the pending path with the current stroke color and clears it.
    fn stroke_path(&mut self, width: f32);
}

/// The graphics state a [`RenderCtx`] carries down the traversal.
///
/// Only the parts of surface state that nodes actually change are tracked:
/// the accumulated translation and the two current colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphicsState {
    /// Accumulated translation from the surface origin.
    pub translation: Point,
    /// Current fill color.
    pub fill: Srgb,
    /// Current stroke color.
    pub stroke: Srgb,
}

impl Default for GraphicsState {
    fn default() -> Self {
        Self {
            translation: Point::zero(),
            fill: Srgb::BLACK,
            stroke: Srgb::BLACK,
        }
    }
}

/// Context passed to nodes when painting.
///
/// Every state mutation goes through the context so the explicit
/// [`GraphicsState`] and the backend surface can never disagree.
pub struct RenderCtx<'a> {
    surface: &'a mut dyn Surface,
    state: GraphicsState,
}

impl Debug for RenderCtx<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderCtx")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<'a> RenderCtx<'a> {
    /// Creates a new painting context over the given surface.
    #[must_use]
    pub fn new(surface: &'a mut dyn Surface) -> Self {
        Self {
            surface,
            state: GraphicsState::default(),
        }
    }

    /// Returns the current graphics state.
    #[must_use]
    pub const fn state(&self) -> GraphicsState {
        self.state
    }

    /// Runs `scope` with a saved graphics state.
    ///
    /// The state value is copied on entry and written back on exit, and the
    /// surface's own stack is pushed/popped at the same points. Whatever
    /// `scope` does to translation or colors is gone afterwards.
    pub fn saved(&mut self, scope: impl FnOnce(&mut Self)) {
        let snapshot = self.state;
        self.surface.save_state();
        scope(self);
        self.surface.restore_state();
        self.state = snapshot;
    }

    /// Translates the coordinate system by the given offsets.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.state.translation.x += dx;
        self.state.translation.y += dy;
        self.surface.translate(dx, dy);
    }

    /// Sets the current fill color.
    pub fn set_fill_color(&mut self, color: Srgb) {
        self.state.fill = color;
        self.surface.set_fill_color(color);
    }

    /// Sets the current stroke color.
    pub fn set_stroke_color(&mut self, color: Srgb) {
        self.state.stroke = color;
        self.surface.set_stroke_color(color);
    }

    /// Fills a path with the current fill color.
    pub fn fill(&mut self, path: &Path) {
        self.surface.add_path(path);
        self.surface.fill_path();
    }

    /// Strokes a path with the current stroke color and the given width.
    pub fn stroke(&mut self, path: &Path, width: f32) {
        self.surface.add_path(path);
        self.surface.stroke_path(width);
    }

    /// Translates so a child of size `child` sits at `alignment` within a
    /// parent of size `parent`.
    ///
    /// The same named anchor is resolved against both sizes and the
    /// coordinate system moves by the difference. Callers bracket this with
    /// [`saved`](Self::saved); the translation is not scoped by itself.
    pub fn align(&mut self, child: Size, parent: Size, alignment: Alignment) {
        let parent_anchor = alignment.point_in(parent);
        let child_anchor = alignment.point_in(child);
        self.translate(
            parent_anchor.x - child_anchor.x,
            parent_anchor.y - child_anchor.y,
        );
    }
}
