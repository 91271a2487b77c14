//! Canvas - logical pixel grid with a retained draw program
//!
//! Draw calls only record rectangles. Nothing touches a raster until
//! [`Canvas::image`] builds a fresh one from the background, the recorded
//! rectangles and the layers, which it does again on every call.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use pixel_raster::{parse_color, Background, FilledRect, Gradient, RasterImage};

use crate::{
    line_cells_within, CanvasConfig, CanvasError, ComposeMode, FileSink, ImageSink, Layer,
    PixelSource, Result, SharedCanvas, Stencil,
};

/// Pixel-art canvas
#[derive(Debug)]
pub struct Canvas {
    /// Logical columns
    cols: u32,
    /// Logical rows
    rows: u32,
    /// Raster pixels per logical pixel, on each axis
    pixel_size: u32,
    /// Raster width (`cols * pixel_size`)
    width: u32,
    /// Raster height (`rows * pixel_size`)
    height: u32,
    background: Background,
    commands: Vec<FilledRect>,
    should_draw: bool,
    layers: Vec<Layer>,
    stencil: Option<Stencil>,
    /// Overwrite the corner pixels on render
    clear_corners: bool,
    corner_color: String,
}

impl Canvas {
    /// Create a canvas of `cols × rows` logical pixels
    pub fn new(cols: u32, rows: u32, pixel_size: u32) -> Result<Self> {
        Self::with_config(cols, rows, pixel_size, CanvasConfig::default())
    }

    /// Create a canvas with explicit configuration
    pub fn with_config(cols: u32, rows: u32, pixel_size: u32, config: CanvasConfig) -> Result<Self> {
        let invalid = CanvasError::InvalidDimensions { cols, rows, pixel_size };
        if cols == 0 || rows == 0 || pixel_size == 0 {
            return Err(invalid);
        }

        let (width, height) = match (cols.checked_mul(pixel_size), rows.checked_mul(pixel_size)) {
            (Some(w), Some(h)) if w <= i32::MAX as u32 && h <= i32::MAX as u32 => (w, h),
            _ => return Err(invalid),
        };

        let CanvasConfig { background, clear_corners, corner_color } = config;

        Ok(Self {
            cols,
            rows,
            pixel_size,
            width,
            height,
            background,
            commands: Vec::new(),
            should_draw: false,
            layers: Vec::new(),
            stencil: None,
            clear_corners,
            corner_color,
        })
    }

    /// Move into a shared handle, for use as a layer
    pub fn into_shared(self) -> SharedCanvas {
        Rc::new(RefCell::new(self))
    }

    /// Logical columns
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Logical rows
    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn pixel_size(&self) -> u32 {
        self.pixel_size
    }

    /// Raster width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Raster height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    // Background

    pub fn background(&self) -> &Background {
        &self.background
    }

    /// Use a solid background, replacing any gradient
    pub fn set_background_color(&mut self, color: impl Into<String>) {
        self.background = Background::Solid(color.into());
    }

    /// Use a top-to-bottom gradient background, replacing any solid color
    pub fn set_background_gradient(&mut self, start: impl Into<String>, stop: impl Into<String>) {
        self.background = Gradient::vertical(start, stop).into();
    }

    /// Use a center-out gradient background, replacing any solid color
    pub fn set_background_radial_gradient(&mut self, start: impl Into<String>, stop: impl Into<String>) {
        self.background = Gradient::radial(start, stop).into();
    }

    pub fn set_background(&mut self, background: impl Into<Background>) {
        self.background = background.into();
    }

    // Drawing

    /// Recorded rectangles, in draw order
    pub fn commands(&self) -> &[FilledRect] {
        &self.commands
    }

    /// Check if anything has been drawn
    pub fn has_drawn(&self) -> bool {
        self.should_draw
    }

    /// Draw one logical pixel.
    ///
    /// Returns false without drawing when the pixel is not entirely on the
    /// canvas or the attached stencil is filled there.
    pub fn draw_at(&mut self, col: i32, row: i32, color: &str) -> bool {
        let size = self.pixel_size as i64;
        let x1 = col as i64 * size;
        let y1 = row as i64 * size;
        let x2 = (col as i64 + 1) * size - 1;
        let y2 = (row as i64 + 1) * size - 1;

        let on_x = |x: i64| x >= 0 && x < self.width as i64;
        let on_y = |y: i64| y >= 0 && y < self.height as i64;
        if !on_x(x1) || !on_x(x2) || !on_y(y1) || !on_y(y2) {
            tracing::trace!("Skipped off-canvas pixel ({}, {})", col, row);
            return false;
        }

        if let Some(stencil) = &self.stencil {
            if stencil.blocks(col, row) {
                tracing::trace!("Stencil blocked pixel ({}, {})", col, row);
                return false;
            }
        }

        self.commands.push(FilledRect::new(x1 as u32, y1 as u32, x2 as u32, y2 as u32, color));
        self.should_draw = true;
        true
    }

    /// Draw a line of logical pixels (see [`crate::line_cells`]).
    ///
    /// Returns how many cells were drawn, counting repeats.
    pub fn draw_line(&mut self, col1: i32, row1: i32, col2: i32, row2: i32, color: &str) -> usize {
        line_cells_within(col1, row1, col2, row2, self.cols, self.rows)
            .filter(|&(col, row)| self.draw_at(col, row, color))
            .count()
    }

    /// Draw every filled cell of `source`, placed at `(col_offset, row_offset)`.
    ///
    /// The source is read once per call, so a [`crate::Paintbrush`] gives a
    /// new pattern each time. Returns how many cells were drawn.
    pub fn draw_with_mask<S: PixelSource + ?Sized>(
        &mut self,
        source: &S,
        color: &str,
        col_offset: i32,
        row_offset: i32,
    ) -> usize {
        let pixels = source.pixels();
        pixels
            .iter_filled()
            .filter(|&(col, row)| {
                self.draw_at(col_offset.saturating_add(col), row_offset.saturating_add(row), color)
            })
            .count()
    }

    /// Draw at `(col, row)` and at its horizontal mirror `(cols - col - 1, row)`.
    ///
    /// Returns true if either was drawn.
    pub fn draw_with_reflection_at(&mut self, col: i32, row: i32, color: &str) -> bool {
        let mirror = (self.cols as i32).saturating_sub(col).saturating_sub(1);
        let left = self.draw_at(col, row, color);
        let right = self.draw_at(mirror, row, color);
        left || right
    }

    /// Fill a `width × height` block of logical pixels starting at `(col1, row1)`.
    ///
    /// Negative origins shrink the block. A width or height reaching the
    /// raster size is cut to one less than it, and the far corner is then
    /// clipped to the raster. The block is recorded as a single rectangle
    /// and the stencil does not apply. Returns false when nothing is left.
    pub fn fill_rectangle(&mut self, col1: i32, row1: i32, width: i32, height: i32, color: &str) -> bool {
        let (mut col1, mut row1) = (col1 as i64, row1 as i64);
        let (mut width, mut height) = (width as i64, height as i64);
        let (raster_width, raster_height) = (self.width as i64, self.height as i64);

        if col1 < 0 {
            width += col1;
            col1 = 0;
        }
        if row1 < 0 {
            height += row1;
            row1 = 0;
        }
        if width >= raster_width {
            width = raster_width - 1;
        }
        if height >= raster_height {
            height = raster_height - 1;
        }

        let size = self.pixel_size as i64;
        let (x1, y1) = (col1 * size, row1 * size);
        let x2 = ((col1 + width) * size - 1).min(raster_width - 1);
        let y2 = ((row1 + height) * size - 1).min(raster_height - 1);

        if width <= 0 || height <= 0 || x1 > x2 || y1 > y2 {
            tracing::trace!("Skipped empty rectangle at ({}, {})", col1, row1);
            return false;
        }

        self.commands.push(FilledRect::new(x1 as u32, y1 as u32, x2 as u32, y2 as u32, color));
        self.should_draw = true;
        true
    }

    // Stencil

    /// Protect the cells filled in `source`, placed at `(col_offset, row_offset)`.
    ///
    /// Replaces any current stencil. Only later pixel, line and mask draws
    /// are affected; [`Canvas::fill_rectangle`] ignores stencils.
    pub fn apply_stencil<S: PixelSource + 'static>(
        &mut self,
        source: Rc<RefCell<S>>,
        col_offset: i32,
        row_offset: i32,
    ) {
        let source: Rc<RefCell<dyn PixelSource>> = source;
        self.stencil = Some(Stencil::new(source, col_offset, row_offset));
    }

    pub fn remove_stencil(&mut self) {
        self.stencil = None;
    }

    pub fn stencil(&self) -> Option<&Stencil> {
        self.stencil.as_ref()
    }

    pub fn has_stencil(&self) -> bool {
        self.stencil.is_some()
    }

    // Layers

    /// Composite `canvas` over this one at a logical offset.
    ///
    /// The offset is scaled by this canvas's pixel size. Layers are
    /// composited in the order they were added.
    pub fn composite_canvas(&mut self, canvas: SharedCanvas, offset_col: i32, offset_row: i32, mode: ComposeMode) {
        let size = self.pixel_size as i32;
        let x = offset_col.saturating_mul(size);
        let y = offset_row.saturating_mul(size);
        self.layers.push(Layer::new(canvas, x, y, mode));
    }

    /// Composite `canvas` with the default source-over mode
    pub fn composite(&mut self, canvas: SharedCanvas, offset_col: i32, offset_row: i32) {
        self.composite_canvas(canvas, offset_col, offset_row, ComposeMode::default());
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    // Output

    /// Build the image: background, then recorded rectangles, then each
    /// layer's own image in order.
    pub fn image(&self) -> Result<RasterImage> {
        let mut path = Vec::new();
        self.materialize(&mut path)
    }

    fn materialize(&self, path: &mut Vec<*const Canvas>) -> Result<RasterImage> {
        if path.iter().any(|c| std::ptr::eq(*c, self)) {
            tracing::warn!("Canvas layer cycle detected at depth {}", path.len());
            return Err(CanvasError::LayerCycle);
        }
        path.push(self);

        let mut image = RasterImage::new(self.width, self.height, &self.background)?;

        if self.should_draw {
            image.fill_rects(&self.commands)?;
        }

        for layer in &self.layers {
            let child = layer.canvas().try_borrow().map_err(|_| CanvasError::LayerCycle)?;
            let layer_image = child.materialize(path)?;
            image.composite(&layer_image, layer.x(), layer.y(), layer.mode());
        }

        path.pop();

        tracing::debug!(
            "Materialized {}x{} canvas ({} rects, {} layers)",
            self.width,
            self.height,
            self.commands.len(),
            self.layers.len()
        );

        Ok(image)
    }

    /// Build the image and encode it as PNG, clearing the corners first
    /// unless configured not to
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut image = self.image()?;

        if self.clear_corners {
            image.clear_corners(parse_color(&self.corner_color)?);
        }

        Ok(image.encode_png()?)
    }

    /// Render to PNG and hand the bytes to `sink`
    pub fn render<W: ImageSink + ?Sized>(&self, sink: &mut W) -> Result<()> {
        let bytes = self.to_png()?;
        sink.put_contents(&bytes)?;
        tracing::debug!("Rendered {}x{} canvas ({} bytes)", self.width, self.height, bytes.len());
        Ok(())
    }

    /// Render to a PNG file, replacing it if it exists
    pub fn render_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        self.render(&mut FileSink::new(path.as_ref()))
    }
}
