//! Paintbrush - randomly perturbed mask reads
//!
//! Drawing through a paintbrush gives a different stipple on every call,
//! because each read flips about 5% of the cells. The stored mask is never
//! changed by reading.

use std::cell::RefCell;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Grid, Mask, PixelSource, Result};

/// Share of cells flipped per read, in percent
const FLIP_PERCENT: u64 = 5;

/// Mask whose [`PixelSource::pixels`] reads are randomly perturbed
#[derive(Debug)]
pub struct Paintbrush<R = StdRng> {
    mask: Mask,
    rng: RefCell<R>,
}

impl Paintbrush<StdRng> {
    /// Create a brush over a new mask, seeded from the OS
    pub fn new(cols: u32, rows: u32, fill: bool) -> Result<Self> {
        Ok(Self::from_mask(Mask::new(cols, rows, fill)?))
    }

    /// Wrap an existing mask, seeded from the OS
    pub fn from_mask(mask: Mask) -> Self {
        Self::with_rng(mask, StdRng::from_entropy())
    }

    /// Wrap an existing mask with a fixed seed
    pub fn seeded(mask: Mask, seed: u64) -> Self {
        Self::with_rng(mask, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Paintbrush<R> {
    /// Wrap an existing mask with the given random source
    pub fn with_rng(mask: Mask, rng: R) -> Self {
        Self { mask, rng: RefCell::new(rng) }
    }

    /// Stored (unperturbed) mask
    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    /// Mutable access to the stored mask
    pub fn mask_mut(&mut self) -> &mut Mask {
        &mut self.mask
    }

    pub fn into_mask(self) -> Mask {
        self.mask
    }

    /// Number of cells each read may flip at most in expectation:
    /// `floor(cols * rows * 0.05)`
    pub fn flip_threshold(&self) -> u64 {
        self.total_cells() * FLIP_PERCENT / 100
    }

    fn total_cells(&self) -> u64 {
        self.mask.cols() as u64 * self.mask.rows() as u64
    }
}

impl<R: Rng> PixelSource for Paintbrush<R> {
    fn cols(&self) -> u32 {
        self.mask.cols()
    }

    fn rows(&self) -> u32 {
        self.mask.rows()
    }

    /// Copy of the stored grid where each cell is flipped when a uniform
    /// draw over `[1, total]` lands at or below the flip threshold.
    fn pixels(&self) -> Grid {
        let mut pixels = self.mask.pixels();
        let total = self.total_cells();
        let threshold = self.flip_threshold();
        if threshold == 0 {
            return pixels;
        }

        let mut rng = self.rng.borrow_mut();
        for cell in pixels.cells_mut() {
            if rng.gen_range(1..=total) <= threshold {
                *cell = !*cell;
            }
        }
        pixels
    }

    fn is_filled_at(&self, col: i32, row: i32) -> bool {
        self.mask.is_filled_at(col, row)
    }
}
