//! Canvas Configuration

use pixel_raster::{Background, DEFAULT_BACKGROUND};

/// Canvas configuration options
#[derive(Debug, Clone)]
pub struct CanvasConfig {
    /// Initial background
    pub background: Background,

    /// Overwrite the four corner pixels when rendering
    pub clear_corners: bool,

    /// Color written to the corners (zero alpha by default)
    pub corner_color: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            background: Background::default(),
            clear_corners: true,
            corner_color: DEFAULT_BACKGROUND.to_string(),
        }
    }
}

impl CanvasConfig {
    /// Start from a different background
    pub fn with_background(mut self, background: impl Into<Background>) -> Self {
        self.background = background.into();
        self
    }

    /// Leave corner pixels as drawn when rendering
    pub fn keep_corners(mut self) -> Self {
        self.clear_corners = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CanvasConfig::default();
        assert!(config.clear_corners);
        assert_eq!(config.corner_color, "#ffffff00");
        assert_eq!(config.background, Background::solid("#ffffff00"));
    }

    #[test]
    fn test_builders() {
        let config = CanvasConfig::default()
            .with_background(Background::solid("black"))
            .keep_corners();
        assert!(!config.clear_corners);
        assert_eq!(config.background, Background::solid("black"));
    }
}
