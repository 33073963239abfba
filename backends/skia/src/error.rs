//! Errors produced while rasterizing.

use thiserror::Error;

/// Errors that can occur while rasterizing a view tree.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    /// The requested canvas size cannot back a pixel buffer.
    #[error("cannot allocate a {width}x{height} pixel surface")]
    InvalidSurfaceSize {
        /// Requested canvas width in logical pixels.
        width: f32,
        /// Requested canvas height in logical pixels.
        height: f32,
    },
    /// PNG encoding failed.
    #[error("PNG encoding failed: {0}")]
    Encode(String),
}
