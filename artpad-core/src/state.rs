//! Pad state: the scene, the active mode, and the drag state machine.

use serde::{Deserialize, Serialize};

use crate::{DrawOp, Mode, Point, PointerEvent, PointerPhase, Scene};

/// Drag state of the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// No button held.
    #[default]
    Idle,
    /// A stroke is being dragged.
    Drawing,
}

/// The complete state of one drawing session.
///
/// Every mutating operation marks the state dirty; the owner redraws and
/// calls [`PadState::take_dirty`] to acknowledge.
#[derive(Debug, Clone, Default)]
pub struct PadState {
    scene: Scene,
    mode: Mode,
    phase: Phase,
    dirty: bool,
}

impl PadState {
    /// Create a fresh session in [`Mode::Default`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch the active mode.
    ///
    /// Entering a stamp mode discards previously placed stamps, even when the
    /// mode was already active.
    pub fn set_mode(&mut self, mode: Mode) {
        tracing::debug!("Mode {} -> {}", self.mode, mode);
        self.mode = mode;
        if mode.is_stamp() {
            self.scene.clear_stamps();
        }
        self.dirty = true;
    }

    /// Empty both collections and return to idle.
    pub fn clear(&mut self) {
        tracing::debug!(
            "Clearing {} strokes and {} stamps",
            self.scene.stroke_count(),
            self.scene.stamp_count()
        );
        self.scene.clear();
        self.phase = Phase::Idle;
        self.dirty = true;
    }

    /// Button pressed: `Idle -> Drawing`, opening a stroke.
    pub fn pointer_down(&mut self, point: Point) -> DrawOp {
        self.phase = Phase::Drawing;
        self.dirty = true;
        self.scene.begin_stroke(point, self.mode)
    }

    /// Pointer moved: extends the stroke while drawing, ignored otherwise.
    pub fn pointer_move(&mut self, point: Point) -> Option<DrawOp> {
        if self.phase != Phase::Drawing {
            return None;
        }
        let op = self.scene.extend_stroke(point);
        if op.is_some() {
            self.dirty = true;
        }
        op
    }

    /// Button released: `Drawing -> Idle`.
    pub fn pointer_up(&mut self) {
        self.finish_stroke();
    }

    /// Pointer left the surface: `Drawing -> Idle`.
    pub fn pointer_leave(&mut self) {
        self.finish_stroke();
    }

    /// Click: stamps a shape in stamp modes.
    pub fn click(&mut self, point: Point) -> Option<DrawOp> {
        let op = self.scene.stamp_at(point, self.mode);
        if op.is_some() {
            self.dirty = true;
        }
        op
    }

    /// Dispatch a pointer event to the matching handler.
    pub fn process_event(&mut self, event: &PointerEvent) -> Option<DrawOp> {
        match event.phase {
            PointerPhase::Down => Some(self.pointer_down(event.position)),
            PointerPhase::Move => self.pointer_move(event.position),
            PointerPhase::Up => {
                self.pointer_up();
                None
            }
            PointerPhase::Leave => {
                self.pointer_leave();
                None
            }
            PointerPhase::Click => self.click(event.position),
        }
    }

    fn finish_stroke(&mut self) {
        if self.phase == Phase::Idle {
            return;
        }
        self.phase = Phase::Idle;
        self.scene.end_stroke();
        self.dirty = true;
    }

    /// Return whether a redraw is due, and reset the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Check if a redraw is due.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The recorded drawing.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The active mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The drag state.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn test_new_state_is_idle_and_clean() {
        let state = PadState::new();
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.mode(), Mode::Default);
        assert!(!state.is_dirty());
    }

    #[test]
    fn test_press_drag_release() {
        let mut state = PadState::new();
        state.pointer_down(Point::new(10.0, 10.0));
        assert_eq!(state.phase(), Phase::Drawing);
        state.pointer_move(Point::new(50.0, 10.0));
        state.pointer_up();
        assert_eq!(state.phase(), Phase::Idle);

        let strokes = state.scene().strokes();
        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].color(), Color::Black);
        assert_eq!(
            strokes[0].points(),
            &[Point::new(10.0, 10.0), Point::new(50.0, 10.0)]
        );
    }

    #[test]
    fn test_move_while_idle_is_ignored() {
        let mut state = PadState::new();
        assert!(state.pointer_move(Point::new(1.0, 1.0)).is_none());
        assert!(!state.take_dirty());
    }

    #[test]
    fn test_leave_ends_drag() {
        let mut state = PadState::new();
        state.pointer_down(Point::new(0.0, 0.0));
        state.pointer_leave();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.pointer_move(Point::new(3.0, 3.0)).is_none());
        assert_eq!(state.scene().strokes()[0].len(), 1);
    }

    #[test]
    fn test_take_dirty_resets() {
        let mut state = PadState::new();
        state.set_mode(Mode::Blue);
        assert!(state.take_dirty());
        assert!(!state.take_dirty());
    }

    #[test]
    fn test_every_drawing_event_requests_redraw() {
        let mut state = PadState::new();
        assert!(!state.take_dirty());

        state.pointer_down(Point::new(1.0, 1.0));
        assert!(state.take_dirty(), "stroke start");
        state.pointer_move(Point::new(5.0, 1.0));
        assert!(state.take_dirty(), "point append");
        state.pointer_up();
        assert!(state.take_dirty(), "stroke end on release");

        state.pointer_down(Point::new(10.0, 10.0));
        state.take_dirty();
        state.pointer_leave();
        assert!(state.take_dirty(), "stroke end on leave");

        state.set_mode(Mode::Circle);
        assert!(state.take_dirty(), "mode change");
        state.click(Point::new(50.0, 50.0));
        assert!(state.take_dirty(), "stamp");
        state.clear();
        assert!(state.take_dirty(), "clear");
    }

    #[test]
    fn test_ignored_events_leave_state_clean() {
        let mut state = PadState::new();
        state.pointer_move(Point::new(5.0, 5.0));
        state.pointer_leave();
        state.click(Point::new(5.0, 5.0));
        assert!(!state.is_dirty());
    }

    #[test]
    fn test_up_while_idle_stays_clean() {
        let mut state = PadState::new();
        state.pointer_up();
        assert!(!state.is_dirty());
    }

    #[test]
    fn test_entering_stamp_mode_clears_stamps() {
        let mut state = PadState::new();
        state.set_mode(Mode::Circle);
        state.click(Point::new(5.0, 5.0));
        state.click(Point::new(6.0, 6.0));
        assert_eq!(state.scene().stamp_count(), 2);

        state.set_mode(Mode::Red);
        assert_eq!(state.scene().stamp_count(), 2);

        state.set_mode(Mode::Square);
        assert_eq!(state.scene().stamp_count(), 0);
    }

    #[test]
    fn test_reselecting_same_stamp_mode_clears() {
        let mut state = PadState::new();
        state.set_mode(Mode::Square);
        state.click(Point::new(5.0, 5.0));
        state.set_mode(Mode::Square);
        assert_eq!(state.scene().stamp_count(), 0);
    }

    #[test]
    fn test_click_outside_stamp_mode_does_nothing() {
        let mut state = PadState::new();
        assert!(state.click(Point::new(5.0, 5.0)).is_none());
        assert!(!state.is_dirty());
    }

    #[test]
    fn test_mode_change_mid_drag_keeps_stroke_color() {
        let mut state = PadState::new();
        state.set_mode(Mode::Green);
        state.pointer_down(Point::new(0.0, 0.0));
        state.set_mode(Mode::Red);
        state.pointer_move(Point::new(4.0, 0.0));
        state.pointer_up();
        assert_eq!(state.scene().strokes()[0].color(), Color::Green);
    }

    #[test]
    fn test_clear_during_drag_returns_to_idle() {
        let mut state = PadState::new();
        state.pointer_down(Point::new(0.0, 0.0));
        state.clear();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.scene().is_empty());
    }

    #[test]
    fn test_process_event_dispatch() {
        let mut state = PadState::new();
        let op = state.process_event(&PointerEvent::down(2.0, 3.0));
        assert_eq!(op, Some(DrawOp::MoveTo(Point::new(2.0, 3.0))));
        assert!(state.process_event(&PointerEvent::moved(4.0, 3.0)).is_some());
        assert!(state.process_event(&PointerEvent::up(4.0, 3.0)).is_none());
        assert!(state.process_event(&PointerEvent::click(4.0, 3.0)).is_none());
        assert_eq!(state.scene().strokes()[0].len(), 2);
    }
}
