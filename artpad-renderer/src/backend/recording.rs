//! Command-log surface.
//!
//! Keeps the primitives painted since the last clear instead of pixels.
//! Two surfaces holding equal command lists show the same picture.

use artpad_core::{Color, Point, StrokeStyle};

use crate::{BackendType, RenderResult};

use super::Surface;

/// A primitive painted onto a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// An open stroked path.
    Polyline {
        /// Path vertices.
        points: Vec<Point>,
        /// Stroke style.
        style: StrokeStyle,
    },
    /// A filled circle.
    Circle {
        /// Center.
        center: Point,
        /// Radius.
        radius: f32,
        /// Fill color.
        color: Color,
    },
    /// A filled rectangle.
    Rect {
        /// Left edge.
        x: f32,
        /// Top edge.
        y: f32,
        /// Width.
        width: f32,
        /// Height.
        height: f32,
        /// Fill color.
        color: Color,
    },
}

/// Surface that logs what is currently visible.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    background: Option<Color>,
    commands: Vec<DrawCommand>,
    clears: u64,
    anti_aliasing: bool,
}

impl RecordingSurface {
    /// Create an empty surface of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: None,
            commands: Vec::new(),
            clears: 0,
            anti_aliasing: true,
        }
    }

    /// Primitives painted since the last clear, in paint order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Background painted by the last clear.
    #[must_use]
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// Check if nothing has been painted since the last clear.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.commands.is_empty()
    }

    /// Last smoothing setting the renderer asked for.
    #[must_use]
    pub fn anti_aliasing(&self) -> bool {
        self.anti_aliasing
    }

    /// Number of clears so far.
    #[must_use]
    pub fn clear_count(&self) -> u64 {
        self.clears
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new(artpad_core::SURFACE_WIDTH, artpad_core::SURFACE_HEIGHT)
    }
}

impl Surface for RecordingSurface {
    fn backend_type(&self) -> BackendType {
        BackendType::Recording
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn set_anti_aliasing(&mut self, enabled: bool) {
        self.anti_aliasing = enabled;
    }

    fn clear(&mut self, background: Option<Color>) -> RenderResult<()> {
        self.commands.clear();
        self.background = background;
        self.clears += 1;
        Ok(())
    }

    fn stroke_polyline(&mut self, points: &[Point], style: &StrokeStyle) -> RenderResult<()> {
        tracing::trace!(
            "Record polyline: {} points {} width={}",
            points.len(),
            style.color,
            style.width
        );
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            style: *style,
        });
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) -> RenderResult<()> {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
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
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            color,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_wipes_commands() {
        let mut surface = RecordingSurface::default();
        surface
            .fill_circle(Point::new(1.0, 1.0), 10.0, Color::Orange)
            .expect("fill");
        assert!(!surface.is_blank());
        surface.clear(None).expect("clear");
        assert!(surface.is_blank());
        assert_eq!(surface.clear_count(), 1);
    }

    #[test]
    fn test_default_size_is_pad_size() {
        let surface = RecordingSurface::default();
        assert_eq!(surface.size(), (900, 600));
        assert_eq!(surface.backend_type(), BackendType::Recording);
    }
}
