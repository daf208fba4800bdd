//! Drawing modes and the style resolver.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::{Color, DashPattern, ShapeKind, StrokeStyle};
use crate::{PadError, PadResult};

/// The active drawing behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Solid black strokes.
    #[default]
    Default,
    /// Solid red strokes.
    Red,
    /// Solid blue strokes.
    Blue,
    /// Solid green strokes.
    Green,
    /// Thin dashed black strokes.
    Dashed,
    /// Clicks stamp circles.
    Circle,
    /// Clicks stamp squares.
    Square,
}

impl Mode {
    /// Every mode, in the order the mode panel lists them.
    pub const ALL: [Mode; 7] = [
        Mode::Default,
        Mode::Red,
        Mode::Blue,
        Mode::Green,
        Mode::Dashed,
        Mode::Circle,
        Mode::Square,
    ];

    /// Lowercase name of the mode.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Dashed => "dashed",
            Self::Circle => "circle",
            Self::Square => "square",
        }
    }

    /// Resolve a mode name, falling back to [`Mode::Default`] for anything
    /// unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::debug!("Unrecognized mode '{name}', using default");
            Self::Default
        })
    }

    /// The shape clicks stamp in this mode, if any.
    #[must_use]
    pub const fn stamp_shape(self) -> Option<ShapeKind> {
        match self {
            Self::Circle => Some(ShapeKind::Circle),
            Self::Square => Some(ShapeKind::Square),
            _ => None,
        }
    }

    /// Whether clicks place shapes in this mode.
    #[must_use]
    pub const fn is_stamp(self) -> bool {
        self.stamp_shape().is_some()
    }
}

impl From<ShapeKind> for Mode {
    fn from(shape: ShapeKind) -> Self {
        match shape {
            ShapeKind::Circle => Self::Circle,
            ShapeKind::Square => Self::Square,
        }
    }
}

impl FromStr for Mode {
    type Err = PadError;

    fn from_str(s: &str) -> PadResult<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PadError::UnknownMode(s.to_string()))
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Rendering style for a mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Color for freehand lines.
    pub stroke_color: Color,
    /// Color for stamped shapes.
    pub fill_color: Color,
    /// Line width in pixels.
    pub line_width: f32,
    /// Dash pattern, `None` for solid lines.
    pub dash: Option<DashPattern>,
}

impl Style {
    /// The part of this style a stroke keeps.
    #[must_use]
    pub const fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.stroke_color,
            width: self.line_width,
            dash: self.dash,
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        resolve_style(Mode::Default)
    }
}

/// Map a mode to its rendering style. Total: every mode has one.
#[must_use]
pub const fn resolve_style(mode: Mode) -> Style {
    let color = match mode {
        Mode::Default | Mode::Dashed => Color::Black,
        Mode::Red => Color::Red,
        Mode::Blue => Color::Blue,
        Mode::Green => Color::Green,
        Mode::Circle => Color::Orange,
        Mode::Square => Color::Purple,
    };

    match mode {
        Mode::Dashed => Style {
            stroke_color: color,
            fill_color: color,
            line_width: 1.0,
            dash: Some(DashPattern::new(5.0, 5.0)),
        },
        _ => Style {
            stroke_color: color,
            fill_color: color,
            line_width: 2.0,
            dash: None,
        },
    }
}
