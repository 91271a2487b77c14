//! Line rasterization in logical pixels
//!
//! Lines follow `row = slope * col + intercept`. Steep and falling lines
//! are walked twice, once by row and once by column, so some cells come
//! out more than once. Callers rely on that coverage; do not dedupe.

use std::ops::RangeInclusive;

/// Cells visited when drawing a line from `(col1, row1)` to `(col2, row2)`.
///
/// - Vertical (`col1 == col2`): rows `row1..=row2` at `col1`.
/// - Slope above 1 or below 0: rows `row1..=row2`, with
///   `col = ceil((row - intercept) / slope)`.
/// - Always, except vertical: cols `col1..=col2`, with
///   `row = floor(slope * col + intercept)`.
///
/// A range whose end is before its start contributes nothing. Cells are
/// produced lazily, so long lines cost nothing until consumed.
pub fn line_cells(col1: i32, row1: i32, col2: i32, row2: i32) -> impl Iterator<Item = (i32, i32)> {
    walk(col1, row1, col2, row2, col1..=col2, row1..=row2)
}

/// Like [`line_cells`], but skips the part of each walk that falls outside
/// a `cols × rows` grid.
///
/// Only cells with `0 <= col < cols` on the column walk and
/// `0 <= row < rows` on the row walk are kept; the order of what remains
/// is unchanged.
pub fn line_cells_within(
    col1: i32,
    row1: i32,
    col2: i32,
    row2: i32,
    cols: u32,
    rows: u32,
) -> impl Iterator<Item = (i32, i32)> {
    let last_col = i32::try_from(cols).unwrap_or(i32::MAX).saturating_sub(1);
    let last_row = i32::try_from(rows).unwrap_or(i32::MAX).saturating_sub(1);
    walk(
        col1,
        row1,
        col2,
        row2,
        col1.max(0)..=col2.min(last_col),
        row1.max(0)..=row2.min(last_row),
    )
}

fn walk(
    col1: i32,
    row1: i32,
    col2: i32,
    row2: i32,
    col_range: RangeInclusive<i32>,
    row_range: RangeInclusive<i32>,
) -> impl Iterator<Item = (i32, i32)> {
    let rise = row2 as f64 - row1 as f64;
    let run = col2 as f64 - col1 as f64;

    let vertical = run == 0.0;
    let slope = if vertical { 0.0 } else { rise / run };
    let intercept = row1 as f64 - slope * col1 as f64;
    let steep = vertical || slope > 1.0 || slope < 0.0;

    #[allow(clippy::reversed_empty_ranges)]
    let row_range = if steep { row_range } else { 1..=0 };
    #[allow(clippy::reversed_empty_ranges)]
    let col_range = if vertical { 1..=0 } else { col_range };

    let by_row = row_range.map(move |row| {
        if vertical {
            (col1, row)
        } else {
            (((row as f64 - intercept) / slope).ceil() as i32, row)
        }
    });
    let by_col = col_range.map(move |col| (col, (slope * col as f64 + intercept).floor() as i32));

    by_row.chain(by_col)
}
