//! Pointer input events for the drawing surface.

use serde::{Deserialize, Serialize};

use crate::Point;

/// Phase of a mouse interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPhase {
    /// Button pressed (`mousedown`).
    Down,
    /// Pointer moved (`mousemove`).
    Move,
    /// Button released (`mouseup`).
    Up,
    /// Pointer left the surface (`mouseout`).
    Leave,
    /// Press and release without leaving (`click`).
    Click,
}

impl PointerPhase {
    /// Map a DOM event type to a phase.
    #[must_use]
    pub fn from_dom_event(event_type: &str) -> Option<Self> {
        match event_type {
            "mousedown" => Some(Self::Down),
            "mousemove" => Some(Self::Move),
            "mouseup" => Some(Self::Up),
            "mouseout" | "mouseleave" => Some(Self::Leave),
            "click" => Some(Self::Click),
            _ => None,
        }
    }
}

/// A mouse event in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Phase of this event.
    pub phase: PointerPhase,
    /// Position on the surface.
    pub position: Point,
}

impl PointerEvent {
    /// Create a pointer event.
    #[must_use]
    pub const fn new(phase: PointerPhase, position: Point) -> Self {
        Self { phase, position }
    }

    /// Button pressed at `(x, y)`.
    #[must_use]
    pub const fn down(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Down, Point::new(x, y))
    }

    /// Pointer moved to `(x, y)`.
    #[must_use]
    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Move, Point::new(x, y))
    }

    /// Button released at `(x, y)`.
    #[must_use]
    pub const fn up(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Up, Point::new(x, y))
    }

    /// Pointer left the surface at `(x, y)`.
    #[must_use]
    pub const fn leave(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Leave, Point::new(x, y))
    }

    /// Click at `(x, y)`.
    #[must_use]
    pub const fn click(x: f32, y: f32) -> Self {
        Self::new(PointerPhase::Click, Point::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_event_names() {
        assert_eq!(PointerPhase::from_dom_event("mousedown"), Some(PointerPhase::Down));
        assert_eq!(PointerPhase::from_dom_event("mouseout"), Some(PointerPhase::Leave));
        assert_eq!(PointerPhase::from_dom_event("click"), Some(PointerPhase::Click));
        assert_eq!(PointerPhase::from_dom_event("touchstart"), None);
    }

    #[test]
    fn test_event_serializes_phase_lowercase() {
        let json = serde_json::to_value(PointerEvent::down(1.0, 2.0)).expect("serialize");
        assert_eq!(json["phase"], "down");
        assert_eq!(json["position"]["x"], 1.0);
    }
}
