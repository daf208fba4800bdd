//! tiny-skia raster surface for headless rendering.

use artpad_core::{Color, Point, StrokeStyle};
use tiny_skia::{
    FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Rect, Stroke, StrokeDash, Transform,
};

use crate::{BackendType, RenderError, RenderResult};

use super::Surface;

/// An RGBA pixmap surface.
pub struct RasterSurface {
    pixmap: Pixmap,
    anti_alias: bool,
}

impl RasterSurface {
    /// Allocate a transparent surface.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or too large.
    pub fn new(width: u32, height: u32, anti_alias: bool) -> RenderResult<Self> {
        let pixmap = Pixmap::new(width, height).ok_or_else(|| {
            RenderError::Resource(format!("Cannot allocate {width}x{height} pixmap"))
        })?;
        tracing::debug!("Raster surface allocated: {width}x{height}");
        Ok(Self { pixmap, anti_alias })
    }

    /// Premultiplied RGBA bytes, row-major.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Pixel at `(x, y)` as premultiplied RGBA, or `None` when out of bounds.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixmap
            .pixel(x, y)
            .map(|p| [p.red(), p.green(), p.blue(), p.alpha()])
    }

    /// Check if every pixel is fully transparent.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.pixmap.data().iter().all(|&byte| byte == 0)
    }

    /// The underlying pixmap.
    #[must_use]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    fn paint(&self, color: Color) -> Paint<'static> {
        let [r, g, b, a] = color.rgba();
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = self.anti_alias;
        paint
    }
}

impl Surface for RasterSurface {
    fn backend_type(&self) -> BackendType {
        BackendType::Raster
    }

    fn size(&self) -> (u32, u32) {
        (self.pixmap.width(), self.pixmap.height())
    }

    fn set_anti_aliasing(&mut self, enabled: bool) {
        self.anti_alias = enabled;
    }

    fn clear(&mut self, background: Option<Color>) -> RenderResult<()> {
        let fill = match background {
            Some(color) => {
                let [r, g, b, a] = color.rgba();
                tiny_skia::Color::from_rgba8(r, g, b, a)
            }
            None => tiny_skia::Color::TRANSPARENT,
        };
        self.pixmap.fill(fill);
        Ok(())
    }

    fn stroke_polyline(&mut self, points: &[Point], style: &StrokeStyle) -> RenderResult<()> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };

        let mut builder = PathBuilder::new();
        builder.move_to(first.x, first.y);
        for point in rest {
            builder.line_to(point.x, point.y);
        }
        let Some(path) = builder.finish() else {
            return Ok(());
        };

        // Match the 2D canvas defaults: butt caps, miter joins.
        let mut stroke = Stroke {
            width: style.width,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            ..Stroke::default()
        };
        if let Some(dash) = style.dash {
            stroke.dash = Some(StrokeDash::new(dash.segments().to_vec(), 0.0).ok_or_else(
                || RenderError::Frame(format!("Invalid dash pattern {dash:?}")),
            )?);
        }

        let paint = self.paint(style.color);
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) -> RenderResult<()> {
        let path = PathBuilder::from_circle(center.x, center.y, radius)
            .ok_or_else(|| RenderError::Frame(format!("Invalid circle radius {radius}")))?;
        let paint = self.paint(color);
        self.pixmap.fill_path(
            &path,
            &paint,
            FillRule::Winding,
            Transform::identity(),
            None,
        );
        Ok(())
    }

    fn fill_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    ) -> RenderResult<()> {
        let rect = Rect::from_xywh(x, y, width, height)
            .ok_or_else(|| RenderError::Frame(format!("Invalid rect {width}x{height}")))?;
        let paint = self.paint(color);
        self.pixmap
            .fill_rect(rect, &paint, Transform::identity(), None);
        Ok(())
    }
}
