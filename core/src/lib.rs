#![no_std]
//! Layout negotiation and rendering traversal for Watercolor.
//!
//! A frame is two walks over a tree of [`Node`]s:
//!
//! 1. **Negotiation** ([`Node::size_that_fits`]): proposals flow down,
//!    concrete sizes flow back up. A proposal may leave either axis
//!    unconstrained; a reported size never is.
//! 2. **Painting** ([`Node::render`]): each node paints into a
//!    [`surface::Surface`] through a scoped [`surface::RenderCtx`],
//!    placing children by resolving alignment anchors and translating.
//!
//! Views are built declaratively and lower into nodes once, at
//! construction, via [`View::body`]:
//!
//! ```
//! use watercolor_core::{Size, render_scene};
//! use watercolor_core::border::Border;
//! use watercolor_core::frame::FixedFrame;
//! use watercolor_core::shape::Ellipse;
//! use watercolor_pigment::Srgb;
//!
//! let view = Border::new(FixedFrame::new(Ellipse).width(150.0), Srgb::BLUE, 2.0);
//! let scene = render_scene(view, Size::new(600.0, 400.0));
//! assert_eq!(scene.commands().len(), 2);
//! ```
//!
//! Everything here is `no_std` and pure; rasterization lives in backend
//! crates that implement [`surface::Surface`].

extern crate alloc;

pub mod alignment;
pub mod border;
pub mod foreground;
pub mod frame;
pub mod geometry;
pub mod geometry_reader;
pub mod node;
pub mod overlay;
pub mod path;
pub mod render;
pub mod scene;
pub mod shape;
pub mod surface;
pub mod view;

pub use alignment::Alignment;
pub use geometry::{Point, ProposalSize, Rect, Size};
pub use node::Node;
pub use render::{render_into, render_scene};
pub use view::View;
pub use watercolor_pigment::Srgb;

#[cfg(test)]
mod tests;
