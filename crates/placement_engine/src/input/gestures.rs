//! Gesture classification
//!
//! Turns a frame's raw touch samples into exactly one semantic gesture.
//! The interpreter is deliberately dumb: drag versus rotate is decided by
//! the explicit dragging flag the session manager controls, never by
//! motion-shape heuristics, so a single moved finger is rotation unless a
//! drag is in progress. The only state carried across frames is derived:
//! the last known position of each finger, used for movement deltas.

use std::collections::HashMap;

use crate::foundation::math::Vec2;
use crate::input::touch::{TouchId, TouchPhase, TouchSample};

/// One classified gesture for a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Nothing actionable this frame
    None,
    /// Single finger made contact at this screen position
    Tap(Vec2),
    /// Single finger moved while a drag is in progress; current position
    Drag(Vec2),
    /// Single finger moved with no drag in progress; horizontal delta
    /// in pixels, the raw rotation input before gain is applied
    Rotate(f32),
    /// Two fingers active with movement; current distance between them
    Pinch(f32),
}

/// Per-frame classifier for raw touch samples
#[derive(Debug, Default)]
pub struct GestureInterpreter {
    /// Last known position per active finger, from the previous frame
    last_positions: HashMap<TouchId, Vec2>,
}

impl GestureInterpreter {
    /// Create an interpreter with no touch history
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one frame of touch samples.
    ///
    /// `dragging` is the session manager's explicit drag flag and selects
    /// drag over rotate for single-finger movement. `over_widget` is the
    /// UI-focus answer for this frame; a frame over an interactive widget
    /// never produces a world gesture.
    pub fn interpret(
        &mut self,
        touches: &[TouchSample],
        dragging: bool,
        over_widget: bool,
    ) -> Gesture {
        let gesture = if over_widget {
            Gesture::None
        } else {
            self.classify(touches, dragging)
        };

        // Refresh touch history even for suppressed frames so deltas do
        // not jump when the pointer leaves a widget.
        self.track(touches);

        gesture
    }

    /// Drop all touch history (scene transitions, gesture cancellation)
    pub fn reset(&mut self) {
        self.last_positions.clear();
    }

    fn classify(&self, touches: &[TouchSample], dragging: bool) -> Gesture {
        match touches {
            [touch] => match touch.phase {
                TouchPhase::Began => Gesture::Tap(touch.position),
                TouchPhase::Moved if dragging => Gesture::Drag(touch.position),
                TouchPhase::Moved => Gesture::Rotate(self.horizontal_delta(touch)),
                TouchPhase::Ended => Gesture::None,
            },
            [first, second]
                if first.phase == TouchPhase::Moved || second.phase == TouchPhase::Moved =>
            {
                Gesture::Pinch((first.position - second.position).norm())
            }
            _ => Gesture::None,
        }
    }

    fn horizontal_delta(&self, touch: &TouchSample) -> f32 {
        self.last_positions
            .get(&touch.id)
            .map_or(0.0, |last| touch.position.x - last.x)
    }

    fn track(&mut self, touches: &[TouchSample]) {
        self.last_positions = touches
            .iter()
            .filter(|touch| touch.phase != TouchPhase::Ended)
            .map(|touch| (touch.id, touch.position))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample(id: u32, x: f32, y: f32, phase: TouchPhase) -> TouchSample {
        TouchSample::new(id, Vec2::new(x, y), phase)
    }

    #[test]
    fn test_no_touches_is_no_gesture() {
        let mut interpreter = GestureInterpreter::new();
        assert_eq!(interpreter.interpret(&[], false, false), Gesture::None);
    }

    #[test]
    fn test_began_touch_is_tap() {
        let mut interpreter = GestureInterpreter::new();
        let gesture = interpreter.interpret(&[sample(0, 120.0, 300.0, TouchPhase::Began)], false, false);

        assert_eq!(gesture, Gesture::Tap(Vec2::new(120.0, 300.0)));
    }

    #[test]
    fn test_touch_over_widget_is_suppressed() {
        let mut interpreter = GestureInterpreter::new();
        let gesture = interpreter.interpret(&[sample(0, 120.0, 300.0, TouchPhase::Began)], false, true);

        assert_eq!(gesture, Gesture::None);
    }

    #[test]
    fn test_moved_touch_rotates_unless_dragging() {
        let mut interpreter = GestureInterpreter::new();
        interpreter.interpret(&[sample(0, 100.0, 100.0, TouchPhase::Began)], false, false);

        let gesture = interpreter.interpret(&[sample(0, 130.0, 100.0, TouchPhase::Moved)], false, false);
        let Gesture::Rotate(delta) = gesture else {
            panic!("expected rotate, got {gesture:?}");
        };
        assert_relative_eq!(delta, 30.0);
    }

    #[test]
    fn test_moved_touch_drags_while_flag_set() {
        let mut interpreter = GestureInterpreter::new();
        interpreter.interpret(&[sample(0, 100.0, 100.0, TouchPhase::Began)], true, false);

        let gesture = interpreter.interpret(&[sample(0, 130.0, 110.0, TouchPhase::Moved)], true, false);
        assert_eq!(gesture, Gesture::Drag(Vec2::new(130.0, 110.0)));
    }

    #[test]
    fn test_first_moved_frame_has_zero_rotation_delta() {
        // No history for the finger yet: delta must be zero, not garbage
        let mut interpreter = GestureInterpreter::new();
        let gesture = interpreter.interpret(&[sample(7, 250.0, 80.0, TouchPhase::Moved)], false, false);

        assert_eq!(gesture, Gesture::Rotate(0.0));
    }

    #[test]
    fn test_two_moved_touches_pinch_with_distance() {
        let mut interpreter = GestureInterpreter::new();
        let gesture = interpreter.interpret(
            &[
                sample(0, 100.0, 100.0, TouchPhase::Moved),
                sample(1, 100.0, 250.0, TouchPhase::Moved),
            ],
            false,
            false,
        );

        let Gesture::Pinch(distance) = gesture else {
            panic!("expected pinch, got {gesture:?}");
        };
        assert_relative_eq!(distance, 150.0);
    }

    #[test]
    fn test_two_stationary_touches_are_no_gesture() {
        let mut interpreter = GestureInterpreter::new();
        let gesture = interpreter.interpret(
            &[
                sample(0, 100.0, 100.0, TouchPhase::Began),
                sample(1, 100.0, 250.0, TouchPhase::Began),
            ],
            false,
            false,
        );

        assert_eq!(gesture, Gesture::None);
    }

    #[test]
    fn test_ended_touch_clears_history() {
        let mut interpreter = GestureInterpreter::new();
        interpreter.interpret(&[sample(0, 100.0, 100.0, TouchPhase::Began)], false, false);
        interpreter.interpret(&[sample(0, 150.0, 100.0, TouchPhase::Ended)], false, false);

        // Same id recontacts elsewhere: no stale delta from the old contact
        let gesture = interpreter.interpret(&[sample(0, 400.0, 100.0, TouchPhase::Moved)], false, false);
        assert_eq!(gesture, Gesture::Rotate(0.0));
    }
}
