//! Color strings
//!
//! Draw calls carry colors as plain strings. They are only resolved here,
//! when a draw program is replayed onto a raster.

use crate::{Color, RasterError};

/// Resolve a color string to RGBA.
///
/// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `transparent` and a
/// table of common named colors (case-insensitive).
pub fn parse_color(value: &str) -> Result<Color, RasterError> {
    let trimmed = value.trim();

    if let Some(color) = named_color(&trimmed.to_ascii_lowercase()) {
        return Ok(color);
    }

    if trimmed.starts_with('#') {
        if let Some(color) = Color::from_hex(trimmed) {
            return Ok(color);
        }
    }

    Err(RasterError::InvalidColor(value.to_string()))
}

fn named_color(name: &str) -> Option<Color> {
    let color = match name {
        "transparent" => Color::rgba(255, 255, 255, 0),
        "none" => Color::rgba(0, 0, 0, 0),
        "black" => Color::rgb(0, 0, 0),
        "white" => Color::rgb(255, 255, 255),
        "red" => Color::rgb(255, 0, 0),
        "lime" => Color::rgb(0, 255, 0),
        "green" => Color::rgb(0, 128, 0),
        "blue" => Color::rgb(0, 0, 255),
        "yellow" => Color::rgb(255, 255, 0),
        "cyan" | "aqua" => Color::rgb(0, 255, 255),
        "magenta" | "fuchsia" => Color::rgb(255, 0, 255),
        "gray" | "grey" => Color::rgb(128, 128, 128),
        "lightgray" | "lightgrey" => Color::rgb(211, 211, 211),
        "darkgray" | "darkgrey" => Color::rgb(169, 169, 169),
        "silver" => Color::rgb(192, 192, 192),
        "maroon" => Color::rgb(128, 0, 0),
        "olive" => Color::rgb(128, 128, 0),
        "navy" => Color::rgb(0, 0, 128),
        "teal" => Color::rgb(0, 128, 128),
        "purple" => Color::rgb(128, 0, 128),
        "orange" => Color::rgb(255, 165, 0),
        "pink" => Color::rgb(255, 192, 203),
        "brown" => Color::rgb(165, 42, 42),
        "gold" => Color::rgb(255, 215, 0),
        _ => return None,
    };
    Some(color)
}
