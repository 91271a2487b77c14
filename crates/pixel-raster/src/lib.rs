//! Pixel Raster - Raster Surface
//!
//! The raster side of the pixel canvas engine, backed by tiny-skia.
//!
//! This crate provides:
//! - Color strings (hex and named) resolved to RGBA
//! - Solid and two-stop gradient backgrounds
//! - Filled axis-aligned rectangles replayed onto a pixmap
//! - Layer compositing with named compose modes
//! - PNG encoding

mod background;
mod color;
mod compose;
mod image;
mod rect;

pub use background::{Background, Gradient, GradientShape, DEFAULT_BACKGROUND};
pub use color::parse_color;
pub use compose::ComposeMode;
pub use image::RasterImage;
pub use rect::FilledRect;

/// Color (RGBA, straight alpha)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
    pub const TRANSPARENT: Color = Color { r: 0, g: 0, b: 0, a: 0 };
    pub const RED: Color = Color { r: 255, g: 0, b: 0, a: 255 };
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0, a: 255 };
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255, a: 255 };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create from hex string ("#f00", "#f00f", "#ff0000", "#ff000080")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }

        let short = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
        let long = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        match hex.len() {
            3 => Some(Color::rgb(short(0)?, short(1)?, short(2)?)),
            4 => Some(Color::rgba(short(0)?, short(1)?, short(2)?, short(3)?)),
            6 => Some(Color::rgb(long(0)?, long(2)?, long(4)?)),
            8 => Some(Color::rgba(long(0)?, long(2)?, long(4)?, long(6)?)),
            _ => None,
        }
    }

    /// Convert to a tiny-skia color
    pub fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

/// Raster error
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("Invalid raster dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid color: {0:?}")]
    InvalidColor(String),

    #[error("Invalid gradient from {start:?} to {stop:?}")]
    InvalidGradient { start: String, stop: String },

    #[error("Unknown compose mode: {0:?}")]
    UnknownComposeMode(String),

    #[error("PNG encoding failed: {0}")]
    Encode(String),
}
