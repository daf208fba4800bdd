//! The recorded drawing: strokes, stamps, and the operations that grow them.

use serde::Serialize;

use crate::element::{Point, Stamp, Stroke, StrokeStyle};
use crate::mode::{resolve_style, Mode};
use crate::{PadError, PadResult};

/// An incremental drawing instruction.
///
/// The recorder and stamper return these so the caller can paint the
/// change right away, before the next full redraw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    /// Move the path cursor without painting.
    MoveTo(Point),
    /// Paint a line segment.
    Segment {
        /// Segment start (the previous point of the stroke).
        from: Point,
        /// Segment end (the newly appended point).
        to: Point,
        /// Style of the stroke the segment belongs to.
        style: StrokeStyle,
    },
    /// Paint a freshly placed shape.
    Stamp(Stamp),
}

/// All strokes and stamps on the surface, in insertion order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Scene {
    strokes: Vec<Stroke>,
    stamps: Vec<Stamp>,
    /// Index of the stroke currently being dragged.
    #[serde(skip)]
    active: Option<usize>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new stroke at `point`, styled for `mode`.
    ///
    /// Any stroke still open is implicitly closed first.
    pub fn begin_stroke(&mut self, point: Point, mode: Mode) -> DrawOp {
        let style = resolve_style(mode).stroke_style();
        self.strokes.push(Stroke::new(point, style));
        self.active = Some(self.strokes.len() - 1);
        tracing::debug!(
            "Stroke {} started at ({}, {}) in {mode} mode",
            self.strokes.len(),
            point.x,
            point.y
        );
        DrawOp::MoveTo(point)
    }

    /// Append `point` to the active stroke.
    ///
    /// Returns `None` when no stroke is active.
    pub fn extend_stroke(&mut self, point: Point) -> Option<DrawOp> {
        let stroke = self.strokes.get_mut(self.active?)?;
        let from = stroke.last();
        stroke.push(point);
        tracing::trace!("Stroke point ({}, {})", point.x, point.y);
        Some(DrawOp::Segment {
            from,
            to: point,
            style: *stroke.style(),
        })
    }

    /// Close the active stroke. The stroke stays in the scene.
    ///
    /// Returns `true` if a stroke was open.
    pub fn end_stroke(&mut self) -> bool {
        match self.active.take() {
            Some(index) => {
                tracing::debug!(
                    "Stroke {} closed with {} points",
                    index + 1,
                    self.strokes[index].len()
                );
                true
            }
            None => false,
        }
    }

    /// Place a shape at `point` if `mode` is a stamp mode.
    pub fn stamp_at(&mut self, point: Point, mode: Mode) -> Option<DrawOp> {
        let shape = mode.stamp_shape()?;
        let stamp = Stamp::new(point, shape);
        self.stamps.push(stamp);
        tracing::debug!("Stamped {shape:?} at ({}, {})", point.x, point.y);
        Some(DrawOp::Stamp(stamp))
    }

    /// Drop every stamp, keeping strokes.
    pub fn clear_stamps(&mut self) {
        self.stamps.clear();
    }

    /// Drop every stroke and stamp.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.stamps.clear();
        self.active = None;
    }

    /// Recorded strokes, oldest first.
    #[must_use]
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Recorded stamps, oldest first.
    #[must_use]
    pub fn stamps(&self) -> &[Stamp] {
        &self.stamps
    }

    /// The stroke currently being dragged, if any.
    #[must_use]
    pub fn active_stroke(&self) -> Option<&Stroke> {
        self.active.and_then(|index| self.strokes.get(index))
    }

    /// Check if a stroke is open.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.active.is_some()
    }

    /// Number of strokes.
    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    /// Number of stamps.
    #[must_use]
    pub fn stamp_count(&self) -> usize {
        self.stamps.len()
    }

    /// Check if nothing has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty() && self.stamps.is_empty()
    }

    /// Serialize the scene to JSON for inspection.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> PadResult<String> {
        serde_json::to_string(self).map_err(PadError::Serialization)
    }
}
