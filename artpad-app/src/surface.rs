//! Browser 2D context surface.

use artpad_core::{Color, Point, StrokeStyle};
use artpad_renderer::{BackendType, RenderError, RenderResult, Surface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{AppError, AppResult};

fn frame_err(context: &str, value: &JsValue) -> RenderError {
    RenderError::Frame(format!("{context}: {value:?}"))
}

/// Paints onto a `<canvas>` through its `CanvasRenderingContext2D`.
///
/// A 2D context always smooths path edges. With anti-aliasing off the
/// surface turns image smoothing off and snaps geometry to the pixel grid
/// (stroke vertices to pixel centers, fills to pixel edges), which keeps
/// edges as hard as the context allows.
pub struct ContextSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    anti_alias: bool,
}

impl ContextSurface {
    /// Obtain the 2D context of `canvas`.
    ///
    /// # Errors
    ///
    /// Returns an error if the browser has no 2D context for the canvas.
    pub fn attach(canvas: &HtmlCanvasElement) -> AppResult<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| AppError::dom("Failed to get 2D context", &e))?
            .ok_or_else(|| AppError::Dom("2D context not available".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::Dom("Failed to cast to 2D context".to_string()))?;

        Ok(Self {
            canvas: canvas.clone(),
            ctx,
            anti_alias: true,
        })
    }

    /// Whether edge smoothing is on.
    #[must_use]
    pub fn anti_aliasing(&self) -> bool {
        self.anti_alias
    }

    fn stroke_coord(&self, v: f32) -> f64 {
        if self.anti_alias {
            f64::from(v)
        } else {
            f64::from(v).floor() + 0.5
        }
    }

    fn fill_coord(&self, v: f32) -> f64 {
        if self.anti_alias {
            f64::from(v)
        } else {
            f64::from(v).round()
        }
    }

    fn set_dash(&self, style: &StrokeStyle) -> RenderResult<()> {
        let segments = js_sys::Array::new();
        if let Some(dash) = style.dash {
            for length in dash.segments() {
                segments.push(&JsValue::from_f64(f64::from(length)));
            }
        }
        self.ctx
            .set_line_dash(&segments)
            .map_err(|e| frame_err("setLineDash", &e))
    }
}

impl Surface for ContextSurface {
    fn backend_type(&self) -> BackendType {
        BackendType::Canvas2D
    }

    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn set_anti_aliasing(&mut self, enabled: bool) {
        if self.anti_alias != enabled {
            tracing::debug!("Canvas anti-aliasing: {enabled}");
        }
        self.anti_alias = enabled;
        self.ctx.set_image_smoothing_enabled(enabled);
    }

    fn clear(&mut self, background: Option<Color>) -> RenderResult<()> {
        let width = f64::from(self.canvas.width());
        let height = f64::from(self.canvas.height());
        self.ctx.clear_rect(0.0, 0.0, width, height);
        if let Some(color) = background {
            self.ctx.set_fill_style_str(color.css_name());
            self.ctx.fill_rect(0.0, 0.0, width, height);
        }
        Ok(())
    }

    fn stroke_polyline(&mut self, points: &[Point], style: &StrokeStyle) -> RenderResult<()> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };

        self.ctx.set_stroke_style_str(style.color.css_name());
        self.ctx.set_line_width(f64::from(style.width));
        self.set_dash(style)?;

        self.ctx.begin_path();
        self.ctx
            .move_to(self.stroke_coord(first.x), self.stroke_coord(first.y));
        for point in rest {
            self.ctx
                .line_to(self.stroke_coord(point.x), self.stroke_coord(point.y));
        }
        self.ctx.stroke();
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) -> RenderResult<()> {
        self.ctx.set_fill_style_str(color.css_name());
        self.ctx.begin_path();
        self.ctx
            .arc(
                self.fill_coord(center.x),
                self.fill_coord(center.y),
                f64::from(radius),
                0.0,
                std::f64::consts::TAU,
            )
            .map_err(|e| frame_err("arc", &e))?;
        self.ctx.fill();
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
        self.ctx.set_fill_style_str(color.css_name());
        self.ctx.begin_path();
        self.ctx.rect(
            self.fill_coord(x),
            self.fill_coord(y),
            self.fill_coord(width),
            self.fill_coord(height),
        );
        self.ctx.fill();
        Ok(())
    }
}
