//! Touch input: raw samples and gesture classification

pub mod gestures;
pub mod touch;

pub use gestures::{Gesture, GestureInterpreter};
pub use touch::{TouchId, TouchPhase, TouchSample};
