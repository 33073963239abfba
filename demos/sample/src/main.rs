//! Renders the showcase composition to `sample.png`.
//!
//! The tree exercises every node kind once: a red ellipse pinned to 150
//! points wide, grown by a flexible frame, annotated by a geometry-reader
//! overlay that draws a half-size marker, double-bordered, and centered in
//! a 300 by 300 frame on a 600 by 400 canvas.

use tracing_subscriber::EnvFilter;
use watercolor::prelude::*;

fn showcase() -> impl View {
    Ellipse
        .foreground(Srgb::RED)
        .width(150.0)
        .min_width(100.0)
        .max_width(400.0)
        .overlay(GeometryReader::new(|size| {
            Srgb::WHITE
                .frame_size(size.width / 2.0, size.height / 2.0)
                .border(Srgb::BLACK, 1.0)
        }))
        .border(Srgb::BLUE, 2.0)
        .frame_size(300.0, 300.0)
        .border(Srgb::YELLOW, 2.0)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let canvas = Size::new(600.0, 400.0);
    let bytes = watercolor::skia::render_png(showcase(), canvas).expect("rasterization failed");
    std::fs::write("sample.png", &bytes).expect("failed to write sample.png");
    tracing::info!("wrote sample.png ({} bytes)", bytes.len());
}
