//! Pixel sources
//!
//! Anything that can say which logical pixels are filled. Canvas drawing,
//! stencils and mask stamping all read through this trait, so a [`Mask`]
//! and a [`Paintbrush`] are interchangeable wherever a pattern is consumed.
//!
//! [`Mask`]: crate::Mask
//! [`Paintbrush`]: crate::Paintbrush

use crate::Grid;

/// Source of filled/unfilled logical pixels
pub trait PixelSource {
    /// Grid width in logical pixels
    fn cols(&self) -> u32;

    /// Grid height in logical pixels
    fn rows(&self) -> u32;

    /// Snapshot of the cells as this source presents them.
    ///
    /// Implementations may return a different grid on every call.
    fn pixels(&self) -> Grid;

    /// Stored value of one cell; false when out of bounds
    fn is_filled_at(&self, col: i32, row: i32) -> bool;
}
