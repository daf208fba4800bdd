//! Drawing surface implementations.

#[cfg(feature = "raster")]
pub mod raster;
pub mod recording;

use artpad_core::{Color, Point, StrokeStyle};

use crate::{BackendType, RenderResult};

/// A 2D surface the renderer paints onto.
pub trait Surface {
    /// Get the backend type.
    fn backend_type(&self) -> BackendType;

    /// Surface size in pixels.
    fn size(&self) -> (u32, u32);

    /// Turn edge smoothing on or off for subsequent primitives.
    fn set_anti_aliasing(&mut self, enabled: bool);

    /// Wipe the whole surface, filling with `background` if given.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot be cleared.
    fn clear(&mut self, background: Option<Color>) -> RenderResult<()>;

    /// Stroke an open path through `points`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be painted.
    fn stroke_polyline(&mut self, points: &[Point], style: &StrokeStyle) -> RenderResult<()>;

    /// Fill a circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape cannot be painted.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) -> RenderResult<()>;

    /// Fill an axis-aligned rectangle.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape cannot be painted.
    fn fill_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    ) -> RenderResult<()>;
}
