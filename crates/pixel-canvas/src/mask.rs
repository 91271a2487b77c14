//! Mask - boolean grid of logical pixels

use crate::{CanvasError, Grid, PixelSource, Result};

/// Boolean grid used for stenciling, stamped fills and pattern drawing.
///
/// Dimensions are fixed at construction. Out-of-bounds reads return
/// false and out-of-bounds writes are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    grid: Grid,
}

impl Mask {
    /// Create a mask with every cell set to `fill`
    pub fn new(cols: u32, rows: u32, fill: bool) -> Result<Self> {
        if cols == 0 || rows == 0 {
            return Err(CanvasError::InvalidDimensions { cols, rows, pixel_size: 1 });
        }
        Ok(Self { grid: Grid::new(cols, rows, fill) })
    }

    /// Create a fully filled mask
    pub fn filled(cols: u32, rows: u32) -> Result<Self> {
        Self::new(cols, rows, true)
    }

    /// Create a fully cleared mask
    pub fn empty(cols: u32, rows: u32) -> Result<Self> {
        Self::new(cols, rows, false)
    }

    pub fn cols(&self) -> u32 {
        self.grid.cols()
    }

    pub fn rows(&self) -> u32 {
        self.grid.rows()
    }

    /// Copy of the stored grid
    pub fn pixels(&self) -> Grid {
        self.grid.clone()
    }

    /// Borrow the stored grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_filled_at(&self, col: i32, row: i32) -> bool {
        self.grid.get(col, row)
    }

    pub fn fill_at(&mut self, col: i32, row: i32) {
        self.grid.set(col, row, true);
    }

    pub fn clear_at(&mut self, col: i32, row: i32) {
        self.grid.set(col, row, false);
    }

    /// Fill every cell with `col1 <= col <= col2` and `row1 <= row <= row2`.
    ///
    /// Cells of the range outside the mask are skipped.
    pub fn fill_rectangle(&mut self, col1: i32, row1: i32, col2: i32, row2: i32) {
        for col in col1..=col2 {
            for row in row1..=row2 {
                self.fill_at(col, row);
            }
        }
    }

    /// Erase: clear every cell under a filled cell of `other`, placed at
    /// `(col_offset, row_offset)`
    pub fn clear_mask<S: PixelSource + ?Sized>(&mut self, other: &S, col_offset: i32, row_offset: i32) {
        for (col, row) in other.pixels().iter_filled() {
            self.clear_at(col.saturating_add(col_offset), row.saturating_add(row_offset));
        }
    }

    /// Stamp: fill every cell under a filled cell of `other`, placed at
    /// `(col_offset, row_offset)`
    pub fn fill_mask<S: PixelSource + ?Sized>(&mut self, other: &S, col_offset: i32, row_offset: i32) {
        for (col, row) in other.pixels().iter_filled() {
            self.fill_at(col.saturating_add(col_offset), row.saturating_add(row_offset));
        }
    }

    /// Swap filled and unfilled cells
    pub fn invert(&mut self) {
        self.grid.invert();
    }

    pub fn count_filled(&self) -> usize {
        self.grid.count_filled()
    }
}

impl PixelSource for Mask {
    fn cols(&self) -> u32 {
        self.grid.cols()
    }

    fn rows(&self) -> u32 {
        self.grid.rows()
    }

    fn pixels(&self) -> Grid {
        self.grid.clone()
    }

    fn is_filled_at(&self, col: i32, row: i32) -> bool {
        self.grid.get(col, row)
    }
}
