//! Layers - child canvases composited onto a parent

use crate::{ComposeMode, SharedCanvas};

/// A child canvas composited at a raster offset.
///
/// The child is held by reference, so it is rendered as it is at the time
/// the parent's image is requested.
#[derive(Clone)]
pub struct Layer {
    canvas: SharedCanvas,
    x: i32,
    y: i32,
    mode: ComposeMode,
}

impl Layer {
    pub(crate) fn new(canvas: SharedCanvas, x: i32, y: i32, mode: ComposeMode) -> Self {
        Self { canvas, x, y, mode }
    }

    pub fn canvas(&self) -> &SharedCanvas {
        &self.canvas
    }

    /// Horizontal offset in raster pixels
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Vertical offset in raster pixels
    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn mode(&self) -> ComposeMode {
        self.mode
    }
}

// Layers may form cycles, so the child is summarized rather than printed.
impl std::fmt::Debug for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("Layer");
        match self.canvas.try_borrow() {
            Ok(canvas) => s.field("canvas", &(canvas.cols(), canvas.rows())),
            Err(_) => s.field("canvas", &"<borrowed>"),
        };
        s.field("x", &self.x)
            .field("y", &self.y)
            .field("mode", &self.mode)
            .finish()
    }
}
