//! Stencil - protects logical pixels from drawing

use std::cell::RefCell;
use std::rc::Rc;

use crate::PixelSource;

/// A pixel source placed over a canvas at a logical offset.
///
/// Filled stencil cells mark protected pixels: single-cell draws landing
/// on them are dropped. The source is shared, so edits made to it after
/// it was attached apply to later draws.
#[derive(Clone)]
pub struct Stencil {
    source: Rc<RefCell<dyn PixelSource>>,
    col_offset: i32,
    row_offset: i32,
}

impl Stencil {
    pub fn new(source: Rc<RefCell<dyn PixelSource>>, col_offset: i32, row_offset: i32) -> Self {
        Self { source, col_offset, row_offset }
    }

    pub fn col_offset(&self) -> i32 {
        self.col_offset
    }

    pub fn row_offset(&self) -> i32 {
        self.row_offset
    }

    /// Check whether drawing at canvas cell `(col, row)` is blocked
    pub fn blocks(&self, col: i32, row: i32) -> bool {
        let source = self.source.borrow();

        let min_col = self.col_offset;
        let max_col = self.col_offset.saturating_add(source.cols() as i32);
        let min_row = self.row_offset;
        let max_row = self.row_offset.saturating_add(source.rows() as i32);

        if col < min_col || col > max_col || row < min_row || row > max_row {
            return false;
        }

        source.is_filled_at(col - self.col_offset, row - self.row_offset)
    }
}

impl std::fmt::Debug for Stencil {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let source = self.source.borrow();
        f.debug_struct("Stencil")
            .field("cols", &source.cols())
            .field("rows", &source.rows())
            .field("col_offset", &self.col_offset)
            .field("row_offset", &self.row_offset)
            .finish()
    }
}
