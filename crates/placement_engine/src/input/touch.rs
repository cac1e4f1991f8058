//! Raw touch samples
//!
//! One [`TouchSample`] per active finger per frame, delivered by the host
//! windowing layer. The id is stable for the lifetime of a finger contact,
//! which is what lets the interpreter derive movement deltas across frames.

use crate::foundation::math::Vec2;

/// Identity of one finger contact, stable across frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TouchId(pub u32);

/// Lifecycle phase of a touch within the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// Finger made contact this frame
    Began,
    /// Finger moved since the previous frame
    Moved,
    /// Finger lifted this frame
    Ended,
}

/// One finger's state for the current frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchSample {
    /// Stable identity of the finger contact
    pub id: TouchId,

    /// Screen-space position in pixels
    pub position: Vec2,

    /// Phase within the current frame
    pub phase: TouchPhase,
}

impl TouchSample {
    /// Convenience constructor
    pub fn new(id: u32, position: Vec2, phase: TouchPhase) -> Self {
        Self {
            id: TouchId(id),
            position,
            phase,
        }
    }
}
