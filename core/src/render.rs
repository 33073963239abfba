//! The top-level rendering driver.
//!
//! One frame is two tree walks. The driver wraps the caller's view in a
//! root frame fixed to the canvas size, so the negotiation pass always
//! starts from a fully concrete proposal, then runs the paint pass with the
//! resolved size over a caller-supplied [`Surface`].

use crate::frame::FixedFrame;
use crate::geometry::Size;
use crate::scene::{Scene, SceneSurface};
use crate::surface::{RenderCtx, Surface};
use crate::view::View;

/// Renders `view` at the given canvas size into `surface`.
///
/// Returns the resolved root size, which for the root frame is always the
/// canvas size itself; the value is returned so callers driving a raw
/// surface can size follow-up work without re-negotiating.
pub fn render_into(view: impl View, size: Size, surface: &mut dyn Surface) -> Size {
    let root = FixedFrame::new(view)
        .width(size.width)
        .height(size.height)
        .body();

    let resolved = root.size_that_fits(size.into());
    let mut ctx = RenderCtx::new(surface);
    root.render(&mut ctx, resolved);
    resolved
}

/// Renders `view` at the given canvas size into a recorded [`Scene`].
///
/// Layout is a pure function of the tree and the proposal, so the same view
/// tree at the same size always records the same scene.
#[must_use]
pub fn render_scene(view: impl View, size: Size) -> Scene {
    let mut surface = SceneSurface::new();
    render_into(view, size, &mut surface);
    surface.finish()
}
