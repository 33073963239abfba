//! Deferred child construction from the resolved size.

use alloc::boxed::Box;
use core::fmt;

use crate::alignment::Alignment;
use crate::geometry::{ProposalSize, Size};
use crate::node::Node;
use crate::surface::RenderCtx;
use crate::view::View;

/// A node whose content is built from the size it ends up with.
///
/// The reader greedily fills its proposal (falling back to a small extent on
/// unconstrained axes), and only at paint time invokes its builder with the
/// final size. The built child is sized under that same size and painted
/// center-aligned. Because building happens during the paint pass, the
/// builder runs once per frame and its output is never consulted for
/// sizing.
pub struct GeometryReader {
    build: Box<dyn Fn(Size) -> Node>,
}

impl GeometryReader {
    /// Creates a reader whose content is produced by `build`.
    #[must_use]
    pub fn new<V: View>(build: impl Fn(Size) -> V + 'static) -> Self {
        Self {
            build: Box::new(move |size| build(size).body()),
        }
    }

    pub(crate) fn size_that_fits(&self, proposal: ProposalSize) -> Size {
        proposal.or_fallback()
    }

    pub(crate) fn render(&self, ctx: &mut RenderCtx<'_>, size: Size) {
        let child = (self.build)(size);
        let child_size = child.size_that_fits(size.into());
        ctx.saved(|ctx| {
            ctx.align(child_size, size, Alignment::Center);
            child.render(ctx, child_size);
        });
    }
}

impl fmt::Debug for GeometryReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeometryReader").finish_non_exhaustive()
    }
}

impl View for GeometryReader {
    fn body(self) -> Node {
        Node::GeometryReader(self)
    }
}
