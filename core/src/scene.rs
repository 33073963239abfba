//! Backend-agnostic drawing commands recorded during rendering.
//!
//! [`SceneSurface`] is the reference [`Surface`] implementation: instead of
//! rasterizing it resolves every paint call against its own graphics-state
//! stack and records a [`DrawCommand`] with absolute geometry. The resulting
//! [`Scene`] is what tests assert on, and a raster backend could replay it
//! without knowing anything about the node tree that produced it.

use alloc::vec::Vec;

use watercolor_pigment::Srgb;

use crate::geometry::Point;
use crate::path::Path;
use crate::surface::{GraphicsState, Surface};

/// Primitive drawing operations producible by a paint pass.
///
/// Geometry is fully resolved: `origin` is the accumulated translation at
/// the moment the command was issued, and `path` is in that local frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawCommand {
    /// Fill a path with a solid color.
    FillPath {
        /// Path in the local frame rooted at `origin`.
        path: Path,
        /// Absolute offset of the local frame (logical pixels).
        origin: Point,
        /// Fill color in effect when the command was issued.
        color: Srgb,
    },
    /// Stroke a path with a solid color.
    StrokePath {
        /// Path in the local frame rooted at `origin`.
        path: Path,
        /// Absolute offset of the local frame (logical pixels).
        origin: Point,
        /// Stroke color in effect when the command was issued.
        color: Srgb,
        /// Stroke width in logical pixels, centered on the path.
        width: f32,
    },
}

/// A fully recorded scene containing draw commands.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scene {
    commands: Vec<DrawCommand>,
}

impl Scene {
    /// Returns the underlying commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    fn from_builder(builder: SceneBuilder) -> Self {
        Self {
            commands: builder.commands,
        }
    }
}

/// Builder used by [`SceneSurface`] to capture draw commands.
#[derive(Debug, Default)]
pub struct SceneBuilder {
    commands: Vec<DrawCommand>,
}

impl SceneBuilder {
    /// Creates a new builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Pushes a drawing command into the scene.
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Finalises the builder, returning the immutable scene.
    #[must_use]
    pub fn finish(self) -> Scene {
        Scene::from_builder(self)
    }
}

/// A [`Surface`] that records draw commands instead of rasterizing.
#[derive(Debug, Default)]
pub struct SceneSurface {
    builder: SceneBuilder,
    state: GraphicsState,
    stack: Vec<GraphicsState>,
    pending: Path,
}

impl SceneSurface {
    /// Creates an empty recording surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Finalises the recording, returning the scene.
    #[must_use]
    pub fn finish(self) -> Scene {
        self.builder.finish()
    }
}

impl Surface for SceneSurface {
    fn save_state(&mut self) {
        self.stack.push(self.state);
    }

    fn restore_state(&mut self) {
        // Unbalanced restores are ignored rather than popping past the root.
        if let Some(previous) = self.stack.pop() {
            self.state = previous;
        }
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.state.translation.x += dx;
        self.state.translation.y += dy;
    }

    fn set_fill_color(&mut self, color: Srgb) {
        self.state.fill = color;
    }

    fn set_stroke_color(&mut self, color: Srgb) {
        self.state.stroke = color;
    }

    fn add_path(&mut self, path: &Path) {
        self.pending.append(path);
    }

    fn fill_path(&mut self) {
        let path = core::mem::take(&mut self.pending);
        if !path.is_empty() {
            self.builder.push(DrawCommand::FillPath {
                path,
                origin: self.state.translation,
                color: self.state.fill,
            });
        }
    }

    fn stroke_path(&mut self, width: f32) {
        let path = core::mem::take(&mut self.pending);
        if !path.is_empty() {
            self.builder.push(DrawCommand::StrokePath {
                path,
                origin: self.state.translation,
                color: self.state.stroke,
                width,
            });
        }
    }
}
