//! Fill-color scoping, and colors as views.

use alloc::boxed::Box;

use watercolor_pigment::Srgb;

use crate::geometry::{ProposalSize, Size};
use crate::node::Node;
use crate::shape::{Rectangle, ShapeView};
use crate::surface::RenderCtx;
use crate::view::View;

/// Sets the fill color for a subtree.
///
/// Sizing passes through to the child. Painting sets the fill color inside
/// a saved scope and then paints the child, so nested wrappers shadow outer
/// ones for exactly their subtree: the innermost wrapper around a shape
/// wins, and nothing outside the wrapper ever sees the change.
#[derive(Debug)]
pub struct ForegroundColor {
    color: Srgb,
    content: Box<Node>,
}

impl ForegroundColor {
    /// Wraps `content` with the given fill color.
    #[must_use]
    pub fn new(content: impl View, color: Srgb) -> Self {
        Self {
            color,
            content: Box::new(content.body()),
        }
    }

    pub(crate) fn size_that_fits(&self, proposal: ProposalSize) -> Size {
        self.content.size_that_fits(proposal)
    }

    pub(crate) fn render(&self, ctx: &mut RenderCtx<'_>, size: Size) {
        ctx.saved(|ctx| {
            ctx.set_fill_color(self.color);
            self.content.render(ctx, size);
        });
    }
}

impl View for ForegroundColor {
    fn body(self) -> Node {
        Node::Foreground(self)
    }
}

/// A plain color is itself a view: a full-bleed rectangle filled with it.
///
/// Like any shape it greedily fills its proposal, degrading to the small
/// fallback extent on unconstrained axes.
impl View for Srgb {
    fn body(self) -> Node {
        ForegroundColor::new(ShapeView::new(Rectangle), self).body()
    }
}
