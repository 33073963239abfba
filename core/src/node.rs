//! The closed set of primitive node kinds and their traversal entry points.
//!
//! Every view lowers into this enum, so both passes of the engine are plain
//! pattern matches: no downcasting, no "unknown node" case, and adding a
//! kind means the compiler walks you to every place that must handle it.

use crate::border::Border;
use crate::foreground::ForegroundColor;
use crate::frame::{FixedFrame, FlexFrame};
use crate::geometry::{ProposalSize, Size};
use crate::geometry_reader::GeometryReader;
use crate::overlay::Overlay;
use crate::shape::ShapeView;
use crate::surface::RenderCtx;
use crate::view::View;

/// A lowered view tree node.
///
/// Each variant carries the payload struct that owns that kind's sizing and
/// painting policy; the enum itself only dispatches.
#[derive(Debug)]
pub enum Node {
    /// Fixes one or both axes of its child. See [`FixedFrame`].
    FixedFrame(FixedFrame),
    /// Clamps the width negotiation of its child. See [`FlexFrame`].
    FlexFrame(FlexFrame),
    /// Strokes a rectangle around its child. See [`Border`].
    Border(Border),
    /// Layers secondary content over a base. See [`Overlay`].
    Overlay(Overlay),
    /// Defers child construction until the size is known. See [`GeometryReader`].
    GeometryReader(GeometryReader),
    /// Fills a shape's path with the current fill color. See [`ShapeView`].
    Shape(ShapeView),
    /// Sets the fill color for its subtree. See [`ForegroundColor`].
    Foreground(ForegroundColor),
}

impl Node {
    /// Negotiates this node's size for the given proposal.
    ///
    /// Pure and total: any node answers any proposal, including fully
    /// unspecified ones, with a concrete size. Parents may call this
    /// repeatedly with different proposals to probe flexibility.
    #[must_use]
    pub fn size_that_fits(&self, proposal: ProposalSize) -> Size {
        match self {
            Self::FixedFrame(frame) => frame.size_that_fits(proposal),
            Self::FlexFrame(frame) => frame.size_that_fits(proposal),
            Self::Border(border) => border.size_that_fits(proposal),
            Self::Overlay(overlay) => overlay.size_that_fits(proposal),
            Self::GeometryReader(reader) => reader.size_that_fits(proposal),
            Self::Shape(shape) => shape.size_that_fits(proposal),
            Self::Foreground(foreground) => foreground.size_that_fits(proposal),
        }
    }

    /// Paints this node assuming it occupies exactly `size` at the context's
    /// current origin.
    ///
    /// `size` is normally a value previously returned by
    /// [`size_that_fits`](Self::size_that_fits); parents decide placement,
    /// children paint within it.
    pub fn render(&self, ctx: &mut RenderCtx<'_>, size: Size) {
        match self {
            Self::FixedFrame(frame) => frame.render(ctx, size),
            Self::FlexFrame(frame) => frame.render(ctx, size),
            Self::Border(border) => border.render(ctx, size),
            Self::Overlay(overlay) => overlay.render(ctx, size),
            Self::GeometryReader(reader) => reader.render(ctx, size),
            Self::Shape(shape) => shape.render(ctx, size),
            Self::Foreground(foreground) => foreground.render(ctx, size),
        }
    }
}

impl View for Node {
    fn body(self) -> Node {
        self
    }
}
