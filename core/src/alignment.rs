//! Alignment anchors for positioning a child within a parent's bounds.
//!
//! An alignment is pure configuration carried by container nodes (frames,
//! overlays); it is never a node of its own. Placement works by resolving
//! the same named anchor against both the parent's size and the child's
//! size, then translating by the difference, so "align top-trailing" means
//! "make the child's top-trailing point coincide with the parent's".

use crate::geometry::{Point, Size};

/// Horizontal component of an [`Alignment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAlignment {
    /// Anchor at the leading (minimum x) edge.
    Leading,
    /// Anchor at the horizontal midpoint.
    #[default]
    Center,
    /// Anchor at the trailing (maximum x) edge.
    Trailing,
}

impl HorizontalAlignment {
    /// Resolves the anchor's x-coordinate within an extent of `width`.
    #[must_use]
    pub const fn resolve(self, width: f32) -> f32 {
        match self {
            Self::Leading => 0.0,
            Self::Center => width / 2.0,
            Self::Trailing => width,
        }
    }
}

/// Vertical component of an [`Alignment`].
///
/// Coordinates are y-up, so the top anchor resolves to the full height and
/// the bottom anchor to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalAlignment {
    /// Anchor at the top (maximum y) edge.
    Top,
    /// Anchor at the vertical midpoint.
    #[default]
    Center,
    /// Anchor at the bottom (minimum y) edge.
    Bottom,
}

impl VerticalAlignment {
    /// Resolves the anchor's y-coordinate within an extent of `height`.
    #[must_use]
    pub const fn resolve(self, height: f32) -> f32 {
        match self {
            Self::Top => height,
            Self::Center => height / 2.0,
            Self::Bottom => 0.0,
        }
    }
}

/// A named two-dimensional anchor within a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    /// Top-leading corner.
    TopLeading,
    /// Top edge, horizontally centered.
    Top,
    /// Top-trailing corner.
    TopTrailing,
    /// Leading edge, vertically centered.
    Leading,
    /// Dead center.
    #[default]
    Center,
    /// Trailing edge, vertically centered.
    Trailing,
    /// Bottom-leading corner.
    BottomLeading,
    /// Bottom edge, horizontally centered.
    Bottom,
    /// Bottom-trailing corner.
    BottomTrailing,
}

impl Alignment {
    /// Returns the horizontal component of this alignment.
    #[must_use]
    pub const fn horizontal(self) -> HorizontalAlignment {
        match self {
            Self::TopLeading | Self::Leading | Self::BottomLeading => HorizontalAlignment::Leading,
            Self::Top | Self::Center | Self::Bottom => HorizontalAlignment::Center,
            Self::TopTrailing | Self::Trailing | Self::BottomTrailing => {
                HorizontalAlignment::Trailing
            }
        }
    }

    /// Returns the vertical component of this alignment.
    #[must_use]
    pub const fn vertical(self) -> VerticalAlignment {
        match self {
            Self::TopLeading | Self::Top | Self::TopTrailing => VerticalAlignment::Top,
            Self::Leading | Self::Center | Self::Trailing => VerticalAlignment::Center,
            Self::BottomLeading | Self::Bottom | Self::BottomTrailing => VerticalAlignment::Bottom,
        }
    }

    /// Resolves the anchor point within a rectangle of the given size.
    #[must_use]
    pub const fn point_in(self, size: Size) -> Point {
        Point::new(
            self.horizontal().resolve(size.width),
            self.vertical().resolve(size.height),
        )
    }
}
