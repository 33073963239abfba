//! The view protocol.

use crate::node::Node;

/// A declarative description of a piece of UI.
///
/// Anything that can lower itself into a [`Node`] is a view. Primitive
/// nodes implement this by wrapping themselves in their own variant;
/// composite views implement it by building the subtree they stand for:
///
/// ```
/// use watercolor_core::{Node, View};
/// use watercolor_core::frame::FixedFrame;
/// use watercolor_core::shape::Ellipse;
///
/// struct Badge;
///
/// impl View for Badge {
///     fn body(self) -> Node {
///         FixedFrame::new(Ellipse).width(12.0).height(12.0).body()
///     }
/// }
/// ```
///
/// Lowering happens once, at tree construction. Because `body` returns the
/// already-lowered [`Node`], a composite cannot forward to itself forever;
/// expansion bottoms out by construction rather than by a runtime check.
pub trait View: Sized + 'static {
    /// Lowers this view into its node representation.
    fn body(self) -> Node;
}
