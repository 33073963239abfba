//! Border decoration around a child.

use alloc::boxed::Box;

use watercolor_pigment::Srgb;

use crate::geometry::{ProposalSize, Rect, Size};
use crate::node::Node;
use crate::path::Path;
use crate::surface::RenderCtx;
use crate::view::View;

/// Strokes a rectangle around its child without consuming layout space.
///
/// Sizing passes straight through to the child. The stroke is centered on
/// the child's boundary (the stroked rectangle is inset by half the stroke
/// width on every edge), painted after the child so it always sits on top.
#[derive(Debug)]
pub struct Border {
    color: Srgb,
    width: f32,
    content: Box<Node>,
}

impl Border {
    /// Wraps `content` in a border with the given stroke color and width.
    #[must_use]
    pub fn new(content: impl View, color: Srgb, width: f32) -> Self {
        Self {
            color,
            width,
            content: Box::new(content.body()),
        }
    }

    pub(crate) fn size_that_fits(&self, proposal: ProposalSize) -> Size {
        self.content.size_that_fits(proposal)
    }

    pub(crate) fn render(&self, ctx: &mut RenderCtx<'_>, size: Size) {
        self.content.render(ctx, size);
        ctx.saved(|ctx| {
            ctx.set_stroke_color(self.color);
            let half = self.width / 2.0;
            let outline = Path::rect(Rect::from_size(size).inset(half, half, half, half));
            ctx.stroke(&outline, self.width);
        });
    }
}

impl View for Border {
    fn body(self) -> Node {
        Node::Border(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FixedFrame;
    use crate::shape::Rectangle;

    #[test]
    fn test_border_does_not_affect_size() {
        let child = FixedFrame::new(Rectangle).width(30.0).height(20.0);
        let bordered = Border::new(
            FixedFrame::new(Rectangle).width(30.0).height(20.0),
            Srgb::BLUE,
            8.0,
        );

        let proposal = ProposalSize::new(600.0, 400.0);
        assert_eq!(
            bordered.size_that_fits(proposal),
            child.size_that_fits(proposal)
        );
    }
}
