//! Watercolor's CPU raster backend, built on `tiny-skia`.
//!
//! The layout and paint protocol lives in `watercolor-core`; this crate owns
//! device space. It allocates the pixel buffer, folds the y-up to y-down
//! flip into a base transform, and maps core paths and colors onto
//! `tiny-skia` primitives. [`render_pixmap`] and [`render_png`] are the
//! one-call entry points.

pub mod error;
pub mod surface;

pub use error::RenderError;
pub use surface::PixmapSurface;
pub use tiny_skia::Pixmap;

use watercolor_core::geometry::Size;
use watercolor_core::render::render_into;
use watercolor_core::view::View;

/// Rasterizes `view` onto a transparent pixmap of the given size.
///
/// The view is proposed the full canvas and painted centered within it. The
/// canvas size is rounded to whole device pixels.
///
/// # Errors
///
/// Returns [`RenderError::InvalidSurfaceSize`] when `size` is not finite,
/// is smaller than one pixel per axis, or cannot back a pixel buffer.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn render_pixmap(view: impl View, size: Size) -> Result<Pixmap, RenderError> {
    let invalid = || RenderError::InvalidSurfaceSize {
        width: size.width,
        height: size.height,
    };
    if !size.width.is_finite() || !size.height.is_finite() || size.width < 1.0 || size.height < 1.0
    {
        return Err(invalid());
    }

    let mut surface = PixmapSurface::new(size.width.round() as u32, size.height.round() as u32)
        .ok_or_else(invalid)?;
    let resolved = render_into(view, size, &mut surface);
    tracing::debug!(
        "rasterized a {}x{} canvas, root resolved to {}x{}",
        surface.width(),
        surface.height(),
        resolved.width,
        resolved.height
    );
    Ok(surface.into_pixmap())
}

/// Rasterizes `view` and encodes the result as PNG bytes.
///
/// # Errors
///
/// Returns [`RenderError::InvalidSurfaceSize`] for unusable canvas sizes and
/// [`RenderError::Encode`] when PNG encoding fails.
pub fn render_png(view: impl View, size: Size) -> Result<Vec<u8>, RenderError> {
    let pixmap = render_pixmap(view, size)?;
    pixmap
        .encode_png()
        .map_err(|error| RenderError::Encode(error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use watercolor_core::frame::FixedFrame;
    use watercolor_core::shape::Rectangle;
    use watercolor_pigment::Srgb;

    #[test]
    fn test_render_pixmap_paints_centered_fill() {
        // A 4x4 red square centered on an 8x8 canvas.
        let view = FixedFrame::new(Rectangle).width(4.0).height(4.0);
        let pixmap = render_pixmap(
            watercolor_core::foreground::ForegroundColor::new(view, Srgb::RED),
            Size::new(8.0, 8.0),
        )
        .expect("render");

        let center = pixmap.pixel(4, 4).expect("pixel").demultiply();
        assert_eq!(center.red(), 244);
        assert_eq!(center.alpha(), 255);

        let corner = pixmap.pixel(0, 0).expect("pixel");
        assert_eq!(corner.alpha(), 0);
    }

    #[test]
    fn test_render_png_produces_png_bytes() {
        let bytes = render_png(Srgb::BLUE, Size::new(4.0, 4.0)).expect("render");
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_rejects_unusable_canvas_sizes() {
        for size in [
            Size::new(0.0, 100.0),
            Size::new(100.0, -5.0),
            Size::new(f32::NAN, 100.0),
            Size::new(f32::INFINITY, 100.0),
        ] {
            let result = render_pixmap(Rectangle, size);
            assert!(matches!(
                result,
                Err(RenderError::InvalidSurfaceSize { .. })
            ));
        }
    }
}
