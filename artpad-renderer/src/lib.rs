//! # ArtPad Renderer
//!
//! Turns a [`Scene`] into pixels. The renderer knows nothing about the
//! browser: it paints through the [`Surface`] trait, so the same redraw
//! routine drives a live 2D canvas context, an in-memory command log, or a
//! tiny-skia pixmap.
//!
//! ## Surfaces
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               Surface Trait                 │
//! ├─────────────┬─────────────┬─────────────────┤
//! │ Canvas2D    │ Recording   │ Raster          │
//! │ (browser,   │ (command    │ (tiny-skia,     │
//! │  artpad-app)│  log)       │  headless)      │
//! └─────────────┴─────────────┴─────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod backend;
pub mod error;

pub use backend::recording::{DrawCommand, RecordingSurface};
#[cfg(feature = "raster")]
pub use backend::raster::RasterSurface;
pub use backend::Surface;
pub use error::{RenderError, RenderResult};

use artpad_core::{resolve_style, Color, DrawOp, Mode, Scene, ShapeKind, Stamp, STAMP_RADIUS};

/// Configuration for the renderer.
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Smooth edges. Pushed to the surface before every redraw and
    /// incremental paint.
    pub anti_aliasing: bool,
    /// Color painted on clear; `None` leaves the surface transparent.
    pub background: Option<Color>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            anti_aliasing: true,
            background: None,
        }
    }
}

/// Kinds of drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    /// Browser `CanvasRenderingContext2D`.
    Canvas2D,
    /// In-memory command log.
    Recording,
    /// tiny-skia pixmap.
    Raster,
}

/// Replays recorded drawings onto a [`Surface`].
#[derive(Debug, Default)]
pub struct Renderer {
    config: RendererConfig,
    frame_count: u64,
}

impl Renderer {
    /// Create a renderer with the given configuration.
    #[must_use]
    pub fn new(config: RendererConfig) -> Self {
        Self {
            config,
            frame_count: 0,
        }
    }

    /// Clear `surface` and replay every stroke, then every stamp, in
    /// insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface rejects a primitive. The next redraw
    /// starts from a clear, so a failed frame does not leave residue.
    pub fn redraw(&mut self, surface: &mut dyn Surface, scene: &Scene) -> RenderResult<()> {
        tracing::trace!(
            "{:?} redraw: {} strokes, {} stamps",
            surface.backend_type(),
            scene.stroke_count(),
            scene.stamp_count()
        );

        surface.set_anti_aliasing(self.config.anti_aliasing);
        surface.clear(self.config.background)?;

        for stroke in scene.strokes() {
            // A lone press point has no extent; a 2D context paints nothing for it.
            if stroke.len() < 2 {
                continue;
            }
            surface.stroke_polyline(stroke.points(), stroke.style())?;
        }

        for stamp in scene.stamps() {
            Self::draw_stamp(surface, stamp)?;
        }

        self.frame_count += 1;
        Ok(())
    }

    /// Paint a single incremental operation without clearing.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface rejects the primitive.
    pub fn apply(&mut self, surface: &mut dyn Surface, op: &DrawOp) -> RenderResult<()> {
        surface.set_anti_aliasing(self.config.anti_aliasing);
        match op {
            DrawOp::MoveTo(point) => {
                tracing::trace!("Path cursor at ({}, {})", point.x, point.y);
                Ok(())
            }
            DrawOp::Segment { from, to, style } => surface.stroke_polyline(&[*from, *to], style),
            DrawOp::Stamp(stamp) => Self::draw_stamp(surface, stamp),
        }
    }

    fn draw_stamp(surface: &mut dyn Surface, stamp: &Stamp) -> RenderResult<()> {
        let fill = resolve_style(Mode::from(stamp.shape)).fill_color;
        match stamp.shape {
            ShapeKind::Circle => surface.fill_circle(stamp.center(), STAMP_RADIUS, fill),
            ShapeKind::Square => {
                let (x, y, width, height) = stamp.bounds();
                surface.fill_rect(x, y, width, height, fill)
            }
        }
    }

    /// Number of completed redraws.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the renderer configuration.
    #[must_use]
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artpad_core::{PadState, Point};

    #[test]
    fn test_redraw_counts_frames() {
        let mut renderer = Renderer::default();
        let mut surface = RecordingSurface::new(900, 600);
        let scene = Scene::new();
        renderer.redraw(&mut surface, &scene).expect("redraw");
        renderer.redraw(&mut surface, &scene).expect("redraw");
        assert_eq!(renderer.frame_count(), 2);
        assert_eq!(surface.clear_count(), 2);
    }

    #[test]
    fn test_single_point_stroke_is_skipped() {
        let mut state = PadState::new();
        state.pointer_down(Point::new(5.0, 5.0));
        state.pointer_up();

        let mut renderer = Renderer::default();
        let mut surface = RecordingSurface::new(900, 600);
        renderer.redraw(&mut surface, state.scene()).expect("redraw");
        assert!(surface.is_blank());
    }

    #[test]
    fn test_strokes_paint_before_stamps() {
        let mut state = PadState::new();
        state.set_mode(Mode::Square);
        state.click(Point::new(50.0, 50.0));
        state.set_mode(Mode::Blue);
        state.pointer_down(Point::new(0.0, 0.0));
        state.pointer_move(Point::new(100.0, 100.0));
        state.pointer_up();

        let mut renderer = Renderer::default();
        let mut surface = RecordingSurface::new(900, 600);
        renderer.redraw(&mut surface, state.scene()).expect("redraw");

        let commands = surface.commands();
        assert_eq!(commands.len(), 2);
        assert!(matches!(commands[0], DrawCommand::Polyline { .. }));
        assert!(matches!(
            commands[1],
            DrawCommand::Rect {
                color: Color::Purple,
                ..
            }
        ));
    }

    #[test]
    fn test_apply_move_to_paints_nothing() {
        let mut renderer = Renderer::default();
        let mut surface = RecordingSurface::new(900, 600);
        renderer
            .apply(&mut surface, &DrawOp::MoveTo(Point::new(1.0, 1.0)))
            .expect("apply");
        assert!(surface.is_blank());
    }

    #[test]
    fn test_apply_segment_paints_two_point_line() {
        let mut state = PadState::new();
        state.pointer_down(Point::new(0.0, 0.0));
        let op = state.pointer_move(Point::new(8.0, 0.0)).expect("segment");

        let mut renderer = Renderer::default();
        let mut surface = RecordingSurface::new(900, 600);
        renderer.apply(&mut surface, &op).expect("apply");

        match &surface.commands()[0] {
            DrawCommand::Polyline { points, style } => {
                assert_eq!(points, &vec![Point::new(0.0, 0.0), Point::new(8.0, 0.0)]);
                assert_eq!(style.color, Color::Black);
            }
            other => panic!("Expected polyline, got {other:?}"),
        }
        assert_eq!(renderer.frame_count(), 0);
    }

    #[test]
    fn test_background_is_passed_to_clear() {
        let mut renderer = Renderer::new(RendererConfig {
            background: Some(Color::Black),
            ..RendererConfig::default()
        });
        let mut surface = RecordingSurface::new(900, 600);
        renderer.redraw(&mut surface, &Scene::new()).expect("redraw");
        assert_eq!(surface.background(), Some(Color::Black));
    }

    #[test]
    fn test_anti_aliasing_is_pushed_to_surface() {
        let mut renderer = Renderer::new(RendererConfig {
            anti_aliasing: false,
            ..RendererConfig::default()
        });
        let mut surface = RecordingSurface::new(900, 600);
        assert!(surface.anti_aliasing());

        renderer.redraw(&mut surface, &Scene::new()).expect("redraw");
        assert!(!surface.anti_aliasing());

        let mut smooth = Renderer::default();
        smooth
            .apply(&mut surface, &DrawOp::MoveTo(Point::new(0.0, 0.0)))
            .expect("apply");
        assert!(surface.anti_aliasing());
    }
}
