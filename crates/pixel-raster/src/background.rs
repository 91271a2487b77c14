//! Canvas backgrounds: solid colors and gradients

/// Default background: fully transparent white
pub const DEFAULT_BACKGROUND: &str = "#ffffff00";

/// Gradient shape
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GradientShape {
    /// Top row to bottom row
    #[default]
    Vertical,
    /// Center outwards to the farthest side
    Radial,
}

/// Two-stop gradient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient {
    pub start: String,
    pub stop: String,
    pub shape: GradientShape,
}

impl Gradient {
    /// Create a vertical gradient
    pub fn vertical(start: impl Into<String>, stop: impl Into<String>) -> Self {
        Self { start: start.into(), stop: stop.into(), shape: GradientShape::Vertical }
    }

    /// Create a radial gradient
    pub fn radial(start: impl Into<String>, stop: impl Into<String>) -> Self {
        Self { start: start.into(), stop: stop.into(), shape: GradientShape::Radial }
    }
}

/// What a raster is filled with before anything is drawn on it.
///
/// Solid and gradient are exclusive; setting one replaces the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Background {
    Solid(String),
    Gradient(Gradient),
}

impl Default for Background {
    fn default() -> Self {
        Background::Solid(DEFAULT_BACKGROUND.to_string())
    }
}

impl Background {
    /// Create solid color background
    pub fn solid(color: impl Into<String>) -> Self {
        Background::Solid(color.into())
    }

    /// Check if this is a gradient background
    pub fn is_gradient(&self) -> bool {
        matches!(self, Background::Gradient(_))
    }
}

impl From<Gradient> for Background {
    fn from(gradient: Gradient) -> Self {
        Background::Gradient(gradient)
    }
}
