//! Layering secondary content over a base view.

use alloc::boxed::Box;

use crate::alignment::Alignment;
use crate::geometry::{ProposalSize, Size};
use crate::node::Node;
use crate::surface::RenderCtx;
use crate::view::View;

/// Layers `layer` content on top of a `base` view without letting the layer
/// influence sizing.
///
/// The node's size is the base's size, full stop. During painting the base
/// fills the node's bounds; the layer is then sized by proposing those same
/// bounds, aligned within them, and painted in its own scope so the
/// alignment translation cannot leak to later siblings.
#[derive(Debug)]
pub struct Overlay {
    base: Box<Node>,
    layer: Box<Node>,
    alignment: Alignment,
}

impl Overlay {
    /// Creates a new overlay using the provided base view and overlay layer.
    #[must_use]
    pub fn new(base: impl View, layer: impl View) -> Self {
        Self {
            base: Box::new(base.body()),
            layer: Box::new(layer.body()),
            alignment: Alignment::Center,
        }
    }

    /// Sets how the overlay layer should be aligned inside the base bounds.
    #[must_use]
    pub const fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub(crate) fn size_that_fits(&self, proposal: ProposalSize) -> Size {
        self.base.size_that_fits(proposal)
    }

    pub(crate) fn render(&self, ctx: &mut RenderCtx<'_>, size: Size) {
        self.base.render(ctx, size);
        let layer_size = self.layer.size_that_fits(size.into());
        ctx.saved(|ctx| {
            ctx.align(layer_size, size, self.alignment);
            self.layer.render(ctx, layer_size);
        });
    }
}

impl View for Overlay {
    fn body(self) -> Node {
        Node::Overlay(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FixedFrame;
    use crate::shape::{Ellipse, Rectangle};

    #[test]
    fn test_overlay_size_is_base_size() {
        let base_size = FixedFrame::new(Rectangle)
            .width(30.0)
            .height(20.0)
            .size_that_fits(ProposalSize::new(600.0, 400.0));

        let overlay = Overlay::new(
            FixedFrame::new(Rectangle).width(30.0).height(20.0),
            Ellipse,
        )
        .alignment(Alignment::TopTrailing);

        assert_eq!(
            overlay.size_that_fits(ProposalSize::new(600.0, 400.0)),
            base_size
        );
    }

    #[test]
    fn test_greedy_layer_does_not_grow_overlay() {
        let overlay = Overlay::new(
            FixedFrame::new(Rectangle).width(30.0).height(20.0),
            Rectangle,
        );

        assert_eq!(
            overlay.size_that_fits(ProposalSize::new(600.0, 400.0)),
            Size::new(30.0, 20.0)
        );
    }
}
