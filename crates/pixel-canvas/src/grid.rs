//! Grid - dense boolean cells

/// Row-major grid of filled/unfilled logical pixels.
///
/// Coordinates are signed so callers can pass offset positions directly;
/// anything outside `[0, cols) × [0, rows)` reads as unfilled and ignores
/// writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cols: u32,
    rows: u32,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a grid with every cell set to `fill`
    pub fn new(cols: u32, rows: u32, fill: bool) -> Self {
        Self {
            cols,
            rows,
            cells: vec![fill; cols as usize * rows as usize],
        }
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col as u32 >= self.cols || row as u32 >= self.rows {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    /// Get cell value (false when out of bounds)
    pub fn get(&self, col: i32, row: i32) -> bool {
        self.index(col, row).map(|i| self.cells[i]).unwrap_or(false)
    }

    /// Set cell value if in bounds
    pub fn set(&mut self, col: i32, row: i32, value: bool) {
        if let Some(i) = self.index(col, row) {
            self.cells[i] = value;
        }
    }

    /// Flip every cell
    pub fn invert(&mut self) {
        for cell in &mut self.cells {
            *cell = !*cell;
        }
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: u32) -> Option<&[bool]> {
        if row >= self.rows {
            return None;
        }
        let start = row as usize * self.cols as usize;
        Some(&self.cells[start..start + self.cols as usize])
    }

    /// Filled cells as `(col, row)`, row by row
    pub fn iter_filled(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let cols = self.cols as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, filled)| **filled)
            .map(move |(i, _)| ((i % cols) as i32, (i / cols) as i32))
    }

    pub fn count_filled(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds() {
        let mut grid = Grid::new(3, 2, true);
        assert!(grid.get(2, 1));
        assert!(!grid.get(3, 1));
        assert!(!grid.get(-1, 0));
        assert!(!grid.get(0, 2));

        grid.set(5, 5, false);
        grid.set(-1, -1, false);
        assert_eq!(grid.count_filled(), 6);
    }

    #[test]
    fn test_iter_filled_is_row_major() {
        let mut grid = Grid::new(3, 3, false);
        grid.set(2, 0, true);
        grid.set(0, 1, true);
        grid.set(1, 2, true);

        let cells: Vec<_> = grid.iter_filled().collect();
        assert_eq!(cells, vec![(2, 0), (0, 1), (1, 2)]);
    }

    #[test]
    fn test_row_slices() {
        let mut grid = Grid::new(2, 2, false);
        grid.set(1, 1, true);
        assert_eq!(grid.row(1), Some(&[false, true][..]));
        assert_eq!(grid.row(2), None);
    }
}
