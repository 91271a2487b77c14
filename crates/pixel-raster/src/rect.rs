//! Filled rectangles
//!
//! The only drawing primitive of the engine. A canvas records these and
//! replays them every time its image is materialized.

/// Filled axis-aligned rectangle in raster pixels.
///
/// Corners are inclusive: `(x1, y1)-(x2, y2)` covers
/// `x2 - x1 + 1` columns and `y2 - y1 + 1` rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilledRect {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
    /// Fill color, resolved by [`crate::parse_color`] at replay time
    pub color: String,
}

impl FilledRect {
    pub fn new(x1: u32, y1: u32, x2: u32, y2: u32, color: impl Into<String>) -> Self {
        Self { x1, y1, x2, y2, color: color.into() }
    }

    /// Covered width in pixels
    pub fn width(&self) -> u32 {
        self.x2.saturating_sub(self.x1) + 1
    }

    /// Covered height in pixels
    pub fn height(&self) -> u32 {
        self.y2.saturating_sub(self.y1) + 1
    }

    /// Check if the raster pixel is covered
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }

    pub(crate) fn to_skia(&self) -> Option<tiny_skia::Rect> {
        tiny_skia::Rect::from_ltrb(
            self.x1 as f32,
            self.y1 as f32,
            self.x2 as f32 + 1.0,
            self.y2 as f32 + 1.0,
        )
    }
}
