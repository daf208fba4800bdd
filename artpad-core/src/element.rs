//! Drawing elements - the things a scene is made of.

use serde::{Deserialize, Serialize};

use crate::error::{PadError, PadResult};

/// Radius of a stamped circle, in pixels.
pub const STAMP_RADIUS: f32 = 10.0;

/// Side length of a stamped square, in pixels.
pub const STAMP_SIZE: f32 = 20.0;

/// A position on the drawing surface.
///
/// Coordinates are surface-local pixels with the origin at the top-left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X position (pixels from left).
    pub x: f32,
    /// Y position (pixels from top).
    pub y: f32,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Convert viewport (client) coordinates to surface-local coordinates,
    /// given the surface's bounding-box origin in the viewport.
    #[must_use]
    pub fn from_client(client_x: f32, client_y: f32, origin_left: f32, origin_top: f32) -> Self {
        Self {
            x: client_x - origin_left,
            y: client_y - origin_top,
        }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Named colors used by the pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// `#000000`
    Black,
    /// `#ff0000`
    Red,
    /// `#0000ff`
    Blue,
    /// `#008000` (CSS green, not lime)
    Green,
    /// `#ffa500`
    Orange,
    /// `#800080`
    Purple,
}

impl Color {
    /// CSS color keyword, as understood by a 2D canvas context.
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Purple => "purple",
        }
    }

    /// Opaque RGBA bytes for this color.
    #[must_use]
    pub const fn rgba(self) -> [u8; 4] {
        match self {
            Self::Black => [0, 0, 0, 255],
            Self::Red => [255, 0, 0, 255],
            Self::Blue => [0, 0, 255, 255],
            Self::Green => [0, 128, 0, 255],
            Self::Orange => [255, 165, 0, 255],
            Self::Purple => [128, 0, 128, 255],
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.css_name())
    }
}

/// A repeating on/off dash pattern, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashPattern {
    /// Length of each drawn segment.
    pub on: f32,
    /// Length of each gap.
    pub off: f32,
}

impl DashPattern {
    /// Create a dash pattern.
    #[must_use]
    pub const fn new(on: f32, off: f32) -> Self {
        Self { on, off }
    }

    /// The pattern as a flat segment list (`[on, off]`).
    #[must_use]
    pub const fn segments(&self) -> [f32; 2] {
        [self.on, self.off]
    }
}

/// How a stroke is painted. Fixed when the stroke starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Line color.
    pub color: Color,
    /// Line width in pixels.
    pub width: f32,
    /// Dash pattern, `None` for a solid line.
    pub dash: Option<DashPattern>,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::Black,
            width: 2.0,
            dash: None,
        }
    }
}

/// One continuous freehand drag.
///
/// A stroke always holds at least one point. Points are only appended by
/// the [`Scene`](crate::Scene) while the stroke is the active one.
/// Deserializing a stroke with no points fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawStroke")]
pub struct Stroke {
    points: Vec<Point>,
    style: StrokeStyle,
}

/// Unchecked wire form of a [`Stroke`].
#[derive(Deserialize)]
struct RawStroke {
    points: Vec<Point>,
    style: StrokeStyle,
}

impl TryFrom<RawStroke> for Stroke {
    type Error = PadError;

    fn try_from(raw: RawStroke) -> PadResult<Self> {
        if raw.points.is_empty() {
            return Err(PadError::EmptyStroke);
        }
        Ok(Self {
            points: raw.points,
            style: raw.style,
        })
    }
}

impl Stroke {
    /// Start a stroke at `origin`.
    #[must_use]
    pub fn new(origin: Point, style: StrokeStyle) -> Self {
        Self {
            points: vec![origin],
            style,
        }
    }

    pub(crate) fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// All sampled points, in drag order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The point the stroke started at.
    #[must_use]
    pub fn first(&self) -> Point {
        self.points[0]
    }

    /// The most recently sampled point.
    #[must_use]
    pub fn last(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Number of sampled points (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the stroke has no points. Never true for a stroke built
    /// through [`Stroke::new`] or deserialization.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Paint style.
    #[must_use]
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /// Line color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.style.color
    }
}

/// Kinds of shape a click can stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Filled circle of radius [`STAMP_RADIUS`].
    Circle,
    /// Filled square with side [`STAMP_SIZE`].
    Square,
}

/// A single placed shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stamp {
    /// Center X.
    pub x: f32,
    /// Center Y.
    pub y: f32,
    /// Shape kind.
    pub shape: ShapeKind,
}

impl Stamp {
    /// Create a stamp centered on `at`.
    #[must_use]
    pub const fn new(at: Point, shape: ShapeKind) -> Self {
        Self {
            x: at.x,
            y: at.y,
            shape,
        }
    }

    /// Center of the shape.
    #[must_use]
    pub const fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Axis-aligned bounds as `(left, top, width, height)`.
    #[must_use]
    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        let half = match self.shape {
            ShapeKind::Circle => STAMP_RADIUS,
            ShapeKind::Square => STAMP_SIZE / 2.0,
        };
        (self.x - half, self.y - half, half * 2.0, half * 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_from_client_subtracts_origin() {
        let p = Point::from_client(130.0, 95.5, 30.0, 20.5);
        assert_eq!(p, Point::new(100.0, 75.0));
    }

    #[test]
    fn test_stroke_starts_with_origin() {
        let stroke = Stroke::new(Point::new(3.0, 4.0), StrokeStyle::default());
        assert_eq!(stroke.len(), 1);
        assert!(!stroke.is_empty());
        assert_eq!(stroke.first(), stroke.last());
        assert_eq!(stroke.color(), Color::Black);
    }

    #[test]
    fn test_stroke_without_points_is_rejected() {
        let json = r#"{"points":[],"style":{"color":"black","width":2.0,"dash":null}}"#;
        let err = serde_json::from_str::<Stroke>(json).unwrap_err();
        assert!(err.to_string().contains("no points"), "{err}");
    }

    #[test]
    fn test_stroke_deserializes_with_points() {
        let json = r#"{"points":[{"x":1.0,"y":2.0},{"x":3.0,"y":4.0}],"style":{"color":"red","width":2.0,"dash":null}}"#;
        let stroke: Stroke = serde_json::from_str(json).expect("stroke");
        assert_eq!(stroke.first(), Point::new(1.0, 2.0));
        assert_eq!(stroke.last(), Point::new(3.0, 4.0));
        assert_eq!(stroke.color(), Color::Red);
    }

    #[test]
    fn test_square_bounds_are_centered() {
        let stamp = Stamp::new(Point::new(50.0, 40.0), ShapeKind::Square);
        assert_eq!(stamp.bounds(), (40.0, 30.0, 20.0, 20.0));
    }

    #[test]
    fn test_circle_bounds_cover_radius() {
        let stamp = Stamp::new(Point::new(100.0, 100.0), ShapeKind::Circle);
        assert_eq!(stamp.bounds(), (90.0, 90.0, 20.0, 20.0));
    }

    #[test]
    fn test_color_serializes_as_css_keyword() {
        let json = serde_json::to_string(&Color::Purple).expect("serialize");
        assert_eq!(json, "\"purple\"");
        assert_eq!(Color::Purple.to_string(), "purple");
    }
}
