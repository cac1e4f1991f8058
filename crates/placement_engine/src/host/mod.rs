//! Host integration traits
//!
//! The session core is a library driven by a host presentation layer. The
//! host supplies the three collaborators the core consumes: the surface
//! detection service (ray casts + plane visualization), the UI-focus query
//! that keeps gestures over buttons out of the world, and scene navigation.
//! None of these are implemented here.

use crate::foundation::math::{Quat, Vec2, Vec3};

/// Pose on a detected real-world surface, returned by a ray cast
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// World-space hit position
    pub position: Vec3,

    /// World-space orientation of the surface at the hit point
    pub rotation: Quat,
}

/// Surface detection service: ray-cast queries plus visualization control
pub trait SurfaceHitTester {
    /// Cast a ray from a screen point into the detected surfaces
    fn ray_cast(&self, screen_point: Vec2) -> Option<SurfaceHit>;

    /// Show or hide the detected-surface visualization
    fn set_surfaces_visible(&mut self, visible: bool);

    /// Resume or suspend surface detection
    fn set_detection_enabled(&mut self, enabled: bool);
}

/// UI-focus query: whether the current pointer is over an interactive widget
pub trait UiFocus {
    /// True when the pointer is over a button, slider, or other widget,
    /// in which case touches must not become world gestures
    fn is_pointer_over_widget(&self) -> bool;
}

/// Scene navigation service
pub trait SceneNavigator {
    /// Switch the active scene by name. Fire-and-forget; the core consumes
    /// no return value.
    fn load_scene(&mut self, scene: &str);
}
