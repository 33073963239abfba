//! Extension methods that wrap views in layout and decoration nodes.
//!
//! Every modifier lowers immediately into a concrete node, so a modifier
//! chain nests the same way the tree does: `view.width(150.0).border(color,
//! 2.0)` is a border around a fixed-width frame around the view. Modifiers
//! returning a builder ([`FixedFrame`], [`FlexFrame`], [`Overlay`]) can keep
//! configuring it inline because inherent methods win over these extension
//! methods.

use watercolor_core::border::Border;
use watercolor_core::foreground::ForegroundColor;
use watercolor_core::frame::{FixedFrame, FlexFrame};
use watercolor_core::overlay::Overlay;
use watercolor_core::view::View;
use watercolor_pigment::Srgb;

/// Extension trait for views, adding common layout and styling modifiers.
pub trait ViewExt: View + Sized {
    /// Fixes this view's width to the provided value.
    fn width(self, width: f32) -> FixedFrame {
        FixedFrame::new(self).width(width)
    }

    /// Fixes this view's height to the provided value.
    fn height(self, height: f32) -> FixedFrame {
        FixedFrame::new(self).height(height)
    }

    /// Fixes both width and height simultaneously.
    fn frame_size(self, width: f32, height: f32) -> FixedFrame {
        FixedFrame::new(self).width(width).height(height)
    }

    /// Applies a minimum width constraint.
    fn min_width(self, width: f32) -> FlexFrame {
        FlexFrame::new(self).min_width(width)
    }

    /// Applies a maximum width constraint.
    fn max_width(self, width: f32) -> FlexFrame {
        FlexFrame::new(self).max_width(width)
    }

    /// Applies a minimum height constraint.
    ///
    /// Stored for API completeness; the height axis is not clamped.
    fn min_height(self, height: f32) -> FlexFrame {
        FlexFrame::new(self).min_height(height)
    }

    /// Applies a maximum height constraint.
    ///
    /// Stored for API completeness; the height axis is not clamped.
    fn max_height(self, height: f32) -> FlexFrame {
        FlexFrame::new(self).max_height(height)
    }

    /// Strokes a rectangular border around this view.
    ///
    /// The border never affects layout; the stroke is centered on the
    /// view's boundary and painted on top of it.
    fn border(self, color: Srgb, width: f32) -> Border {
        Border::new(self, color, width)
    }

    /// Adds an overlay to this view.
    ///
    /// The overlay never influences the base view's size.
    ///
    /// # Example
    ///
    /// ```rust
    /// use watercolor::prelude::*;
    ///
    /// let badge = Rectangle.frame_size(8.0, 8.0);
    /// let view = Ellipse.overlay(badge).alignment(Alignment::TopTrailing);
    /// ```
    fn overlay(self, layer: impl View) -> Overlay {
        Overlay::new(self, layer)
    }

    /// Sets the fill color for this view's subtree.
    fn foreground(self, color: Srgb) -> ForegroundColor {
        ForegroundColor::new(self, color)
    }
}

impl<V: View + Sized> ViewExt for V {}
