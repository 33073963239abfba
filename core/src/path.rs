//! Backend-agnostic path geometry.
//!
//! A [`Path`] is a flat list of [`PathElement`]s built in points, in the
//! same y-up frame coordinates as everything else in this crate. Surfaces
//! translate the elements into whatever their rasterizer wants; nothing
//! here depends on a rendering library.

use alloc::vec::Vec;

use crate::geometry::{Point, Rect};

/// Cubic approximation factor for a quarter circle, 4/3 * (sqrt(2) - 1).
const KAPPA: f32 = 0.552_284_75;

/// A single path construction command.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathElement {
    /// Start a new sub-path at the point.
    MoveTo(Point),
    /// Straight line from the current point.
    LineTo(Point),
    /// Cubic Bezier curve: two control points, then the end point.
    CubicTo(Point, Point, Point),
    /// Close the current sub-path back to its starting point.
    Close,
}

/// A sequence of path elements describing one or more sub-paths.
///
/// # Example
///
/// ```
/// use watercolor_core::geometry::Point;
/// use watercolor_core::path::Path;
///
/// let mut path = Path::new();
/// path.move_to(Point::new(10.0, 10.0));
/// path.line_to(Point::new(100.0, 10.0));
/// path.line_to(Point::new(100.0, 100.0));
/// path.close();
/// ```
#[derive(Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    elements: Vec<PathElement>,
}

impl Path {
    /// Creates a new empty path.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Returns the path's elements in construction order.
    #[must_use]
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    /// Returns true if the path contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Moves the current point to the specified position without drawing.
    ///
    /// This starts a new sub-path at the given point.
    pub fn move_to(&mut self, point: Point) {
        self.elements.push(PathElement::MoveTo(point));
    }

    /// Draws a straight line from the current point to the specified point.
    pub fn line_to(&mut self, point: Point) {
        self.elements.push(PathElement::LineTo(point));
    }

    /// Draws a cubic Bezier curve from the current point to `end`.
    ///
    /// # Arguments
    /// * `control1` - The first control point
    /// * `control2` - The second control point
    /// * `end` - The end point of the curve
    pub fn bezier_to(&mut self, control1: Point, control2: Point, end: Point) {
        self.elements
            .push(PathElement::CubicTo(control1, control2, end));
    }

    /// Closes the current sub-path by drawing a straight line back to the start.
    pub fn close(&mut self) {
        self.elements.push(PathElement::Close);
    }

    /// Appends all of `other`'s elements to this path.
    pub fn append(&mut self, other: &Self) {
        self.elements.extend_from_slice(&other.elements);
    }

    /// Builds a closed rectangular path.
    #[must_use]
    pub fn rect(rect: Rect) -> Self {
        let mut path = Self::new();
        path.move_to(Point::new(rect.min_x(), rect.min_y()));
        path.line_to(Point::new(rect.max_x(), rect.min_y()));
        path.line_to(Point::new(rect.max_x(), rect.max_y()));
        path.line_to(Point::new(rect.min_x(), rect.max_y()));
        path.close();
        path
    }

    /// Builds an ellipse inscribed in `rect` from four cubic Bezier arcs.
    #[must_use]
    pub fn ellipse(rect: Rect) -> Self {
        let cx = rect.mid_x();
        let cy = rect.mid_y();
        let rx = rect.width() / 2.0;
        let ry = rect.height() / 2.0;
        let kx = rx * KAPPA;
        let ky = ry * KAPPA;

        let mut path = Self::new();
        path.move_to(Point::new(cx + rx, cy));
        path.bezier_to(
            Point::new(cx + rx, cy + ky),
            Point::new(cx + kx, cy + ry),
            Point::new(cx, cy + ry),
        );
        path.bezier_to(
            Point::new(cx - kx, cy + ry),
            Point::new(cx - rx, cy + ky),
            Point::new(cx - rx, cy),
        );
        path.bezier_to(
            Point::new(cx - rx, cy - ky),
            Point::new(cx - kx, cy - ry),
            Point::new(cx, cy - ry),
        );
        path.bezier_to(
            Point::new(cx + kx, cy - ry),
            Point::new(cx + rx, cy - ky),
            Point::new(cx + rx, cy),
        );
        path.close();
        path
    }
}

impl core::fmt::Debug for Path {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Path")
            .field("elements", &self.elements.len())
            .finish()
    }
}
