//! Shapes and the node that paints them.
//!
//! A shape knows one thing: the path it carves into a given rectangle.
//! [`ShapeView`] adapts any shape into a tree node by supplying the two
//! protocol halves, sizing (shapes are maximally flexible and fill whatever
//! is proposed) and painting (fill the path with the context's current fill
//! color).

use alloc::boxed::Box;
use core::fmt::Debug;

use crate::geometry::{ProposalSize, Rect, Size};
use crate::node::Node;
use crate::path::Path;
use crate::surface::RenderCtx;
use crate::view::View;

/// A resolution-independent shape.
pub trait Shape: Debug + 'static {
    /// Returns the shape's path carved into `rect`.
    fn path(&self, rect: Rect) -> Path;
}

/// A rectangle spanning its full bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rectangle;

impl Shape for Rectangle {
    fn path(&self, rect: Rect) -> Path {
        Path::rect(rect)
    }
}

impl View for Rectangle {
    fn body(self) -> Node {
        Node::Shape(ShapeView::new(self))
    }
}

/// An ellipse inscribed in its bounds.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ellipse;

impl Shape for Ellipse {
    fn path(&self, rect: Rect) -> Path {
        Path::ellipse(rect)
    }
}

impl View for Ellipse {
    fn body(self) -> Node {
        Node::Shape(ShapeView::new(self))
    }
}

/// Adapts a [`Shape`] into a paintable node.
#[derive(Debug)]
pub struct ShapeView {
    shape: Box<dyn Shape>,
}

impl ShapeView {
    /// Wraps the given shape.
    #[must_use]
    pub fn new(shape: impl Shape) -> Self {
        Self {
            shape: Box::new(shape),
        }
    }

    pub(crate) fn size_that_fits(&self, proposal: ProposalSize) -> Size {
        proposal.or_fallback()
    }

    pub(crate) fn render(&self, ctx: &mut RenderCtx<'_>, size: Size) {
        ctx.saved(|ctx| {
            let path = self.shape.path(Rect::from_size(size));
            ctx.fill(&path);
        });
    }
}

impl View for ShapeView {
    fn body(self) -> Node {
        Node::Shape(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{FALLBACK_EXTENT, Point};
    use crate::scene::{DrawCommand, SceneSurface};
    use watercolor_pigment::Srgb;

    #[test]
    fn test_shapes_fill_the_proposal() {
        let view = ShapeView::new(Ellipse);

        assert_eq!(
            view.size_that_fits(ProposalSize::new(150.0, 300.0)),
            Size::new(150.0, 300.0)
        );
        assert_eq!(
            view.size_that_fits(ProposalSize::new(None, 300.0)),
            Size::new(FALLBACK_EXTENT, 300.0)
        );
    }

    #[test]
    fn test_shape_fills_with_current_color() {
        let mut surface = SceneSurface::new();
        {
            let mut ctx = RenderCtx::new(&mut surface);
            ctx.set_fill_color(Srgb::RED);
            ShapeView::new(Rectangle).render(&mut ctx, Size::new(5.0, 5.0));
        }

        let scene = surface.finish();
        assert_eq!(
            scene.commands(),
            [DrawCommand::FillPath {
                path: Path::rect(Rect::from_size(Size::new(5.0, 5.0))),
                origin: Point::zero(),
                color: Srgb::RED,
            }]
        );
    }
}
