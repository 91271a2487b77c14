//! Pixel Canvas
//!
//! Procedural pixel-art rendering. A [`Canvas`] is a grid of logical pixels,
//! each rendered as a `pixel_size × pixel_size` block of raster pixels.
//!
//! This crate provides:
//! - [`Mask`]: boolean grid for stamping, erasing and stenciling
//! - [`Paintbrush`]: mask whose reads are randomly perturbed (stipple effects)
//! - [`Canvas`]: retained draw program, stencils, layers and PNG rendering
//!
//! Stencils and layers are shared handles ([`SharedMask`], [`SharedCanvas`]).
//! Nothing is snapshotted: changing a stencil changes later draws, and
//! changing a child canvas changes later renders of its parents.
//!
//! # Example
//! ```rust,ignore
//! use pixel_canvas::{Canvas, Mask};
//!
//! let mut canvas = Canvas::new(16, 16, 4)?;
//! canvas.set_background_color("#202020ff");
//! canvas.draw_with_reflection_at(3, 5, "#ff8800ff");
//! canvas.render_to_file("sprite.png")?;
//! ```

mod brush;
mod canvas;
mod config;
mod grid;
mod layer;
mod line;
mod mask;
mod sink;
mod source;
mod stencil;

use std::cell::RefCell;
use std::rc::Rc;

pub use brush::Paintbrush;
pub use canvas::Canvas;
pub use config::CanvasConfig;
pub use grid::Grid;
pub use layer::Layer;
pub use line::{line_cells, line_cells_within};
pub use mask::Mask;
pub use sink::{FileSink, ImageSink};
pub use source::PixelSource;
pub use stencil::Stencil;

// Re-export the raster side for callers that inspect images
pub use pixel_raster as raster;
pub use pixel_raster::{Background, Color, ComposeMode, FilledRect, Gradient, RasterImage};

/// Mask shared between its owner and the canvases it stencils
pub type SharedMask = Rc<RefCell<Mask>>;

/// Canvas shared between its owner and the canvases it is layered into
pub type SharedCanvas = Rc<RefCell<Canvas>>;

pub type Result<T> = std::result::Result<T, CanvasError>;

/// Canvas error
#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    #[error("Invalid dimensions: {cols}x{rows} at pixel size {pixel_size}")]
    InvalidDimensions { cols: u32, rows: u32, pixel_size: u32 },

    #[error("Canvas is composited into itself")]
    LayerCycle,

    #[error(transparent)]
    Raster(#[from] pixel_raster::RasterError),

    #[error("Failed to write image: {0}")]
    Write(#[from] std::io::Error),
}

/// Wrap a mask in a shared handle
pub fn shared_mask(mask: Mask) -> SharedMask {
    Rc::new(RefCell::new(mask))
}
