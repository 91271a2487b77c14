//! Raster image backed by a tiny-skia Pixmap

use tiny_skia::{
    BlendMode, GradientStop, IntRect, LinearGradient, Paint, Pixmap, PixmapPaint, Point,
    RadialGradient, Rect, SpreadMode, Transform,
};

use crate::{
    parse_color, Background, Color, ComposeMode, FilledRect, Gradient, GradientShape,
    RasterError,
};

/// A materialized image
#[derive(Clone)]
pub struct RasterImage {
    pixmap: Pixmap,
}

impl RasterImage {
    /// Create an image filled with the given background
    pub fn new(width: u32, height: u32, background: &Background) -> Result<Self, RasterError> {
        let mut pixmap = Pixmap::new(width, height)
            .ok_or(RasterError::InvalidDimensions { width, height })?;

        match background {
            Background::Solid(color) => pixmap.fill(parse_color(color)?.to_skia()),
            Background::Gradient(gradient) => fill_gradient(&mut pixmap, gradient)?,
        }

        Ok(Self { pixmap })
    }

    /// Get image width
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Get image height
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Draw filled rectangles in order, each blended over what is below it.
    ///
    /// Fails on the first color that does not resolve; rectangles before it
    /// stay drawn.
    pub fn fill_rects(&mut self, rects: &[FilledRect]) -> Result<(), RasterError> {
        let mut paint = Paint::default();
        paint.anti_alias = false;

        for rect in rects {
            let Some(area) = rect.to_skia() else {
                continue;
            };
            paint.set_color(parse_color(&rect.color)?.to_skia());
            self.pixmap.fill_rect(area, &paint, Transform::identity(), None);
        }

        Ok(())
    }

    /// Composite another image on top of this one at a pixel offset.
    ///
    /// Parts of `layer` falling outside this image are clipped. Only the
    /// overlapping part is drawn, since tiny-skia does not clip a pixmap
    /// drawn at a negative offset.
    pub fn composite(&mut self, layer: &RasterImage, x: i32, y: i32, mode: ComposeMode) {
        let src_x = x.min(0).unsigned_abs();
        let src_y = y.min(0).unsigned_abs();
        let dst_x = x.max(0) as u32;
        let dst_y = y.max(0) as u32;

        let width = layer.width().saturating_sub(src_x).min(self.width().saturating_sub(dst_x));
        let height = layer.height().saturating_sub(src_y).min(self.height().saturating_sub(dst_y));
        if width == 0 || height == 0 {
            tracing::trace!("Layer at ({}, {}) misses the image", x, y);
            return;
        }

        let paint = PixmapPaint {
            blend_mode: mode.to_skia(),
            ..PixmapPaint::default()
        };

        let whole = src_x == 0 && src_y == 0 && width == layer.width() && height == layer.height();
        if whole {
            self.pixmap.draw_pixmap(x, y, layer.pixmap.as_ref(), &paint, Transform::identity(), None);
            return;
        }

        let Some(crop) = IntRect::from_xywh(src_x as i32, src_y as i32, width, height)
            .and_then(|rect| layer.pixmap.clone_rect(rect))
        else {
            return;
        };
        self.pixmap.draw_pixmap(
            dst_x as i32,
            dst_y as i32,
            crop.as_ref(),
            &paint,
            Transform::identity(),
            None,
        );
    }

    /// Overwrite a single pixel (no blending). Out of bounds is ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.width() || y >= self.height() {
            return;
        }
        let idx = (y * self.width() + x) as usize;
        self.pixmap.pixels_mut()[idx] = color.to_skia().premultiply().to_color_u8();
    }

    /// Overwrite the first and last pixel of the first and last row
    pub fn clear_corners(&mut self, color: Color) {
        let right = self.width() - 1;
        let bottom = self.height() - 1;
        for (x, y) in [(0, 0), (right, 0), (0, bottom), (right, bottom)] {
            self.set_pixel(x, y, color);
        }
    }

    /// Get pixel at (x, y) with straight alpha
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            Color::rgba(c.red(), c.green(), c.blue(), c.alpha())
        })
    }

    /// Encode as PNG
    pub fn encode_png(&self) -> Result<Vec<u8>, RasterError> {
        let bytes = self
            .pixmap
            .encode_png()
            .map_err(|e| RasterError::Encode(e.to_string()))?;
        tracing::debug!("Encoded {}x{} PNG ({} bytes)", self.width(), self.height(), bytes.len());
        Ok(bytes)
    }

    /// Borrow the underlying pixmap
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }
}

impl std::fmt::Debug for RasterImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterImage")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

fn fill_gradient(pixmap: &mut Pixmap, gradient: &Gradient) -> Result<(), RasterError> {
    let invalid = || RasterError::InvalidGradient {
        start: gradient.start.clone(),
        stop: gradient.stop.clone(),
    };

    let stops = vec![
        GradientStop::new(0.0, parse_color(&gradient.start)?.to_skia()),
        GradientStop::new(1.0, parse_color(&gradient.stop)?.to_skia()),
    ];

    let width = pixmap.width() as f32;
    let height = pixmap.height() as f32;

    let shader = match gradient.shape {
        GradientShape::Vertical => LinearGradient::new(
            Point::from_xy(0.0, 0.0),
            Point::from_xy(0.0, height),
            stops,
            SpreadMode::Pad,
            Transform::identity(),
        ),
        GradientShape::Radial => {
            let center = Point::from_xy(width / 2.0, height / 2.0);
            RadialGradient::new(
                center,
                center,
                width.max(height) / 2.0,
                stops,
                SpreadMode::Pad,
                Transform::identity(),
            )
        }
    }
    .ok_or_else(invalid)?;

    let mut paint = Paint::default();
    paint.shader = shader;
    paint.blend_mode = BlendMode::Source;
    paint.anti_alias = false;

    let area = Rect::from_xywh(0.0, 0.0, width, height).ok_or_else(invalid)?;
    pixmap.fill_rect(area, &paint, Transform::identity(), None);

    Ok(())
}
