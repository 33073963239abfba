#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

pub mod view;

#[doc(inline)]
pub use view::ViewExt;

pub use watercolor_pigment as pigment;

pub use pigment::Srgb;

pub use watercolor_core::{
    alignment, border, foreground, frame, geometry, geometry_reader, node, overlay, path, render,
    scene, shape, surface,
};

#[doc(inline)]
pub use watercolor_core::{
    Alignment, Node, Point, ProposalSize, Rect, Size, View, render_into, render_scene,
};

pub mod prelude {
    //! A collection of commonly used traits and types for easy importing.
    //!
    //! # Example
    //!
    //! ```rust
    //! use watercolor::prelude::*;
    //!
    //! fn capped(view: impl View) -> FlexFrame {
    //!     view.max_width(100.0)
    //! }
    //! ```
    pub use super::*;

    pub use crate::frame::{FixedFrame, FlexFrame};
    pub use crate::geometry_reader::GeometryReader;
    pub use crate::scene::{DrawCommand, Scene};
    pub use crate::shape::{Ellipse, Rectangle};
    pub use crate::surface::{RenderCtx, Surface};
}

/// CPU rasterization to pixmaps and PNG bytes via `tiny-skia`.
#[cfg(feature = "skia")]
pub use watercolor_skia as skia;

pub use tracing as log;
