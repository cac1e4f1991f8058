//! Math utilities and types
//!
//! Provides the spatial types used by placement and manipulation:
//! screen-space points, world-space poses, and yaw rotations about
//! the world up axis (detected surfaces are horizontal planes, so
//! single-finger rotation always spins furniture about Y).

pub use nalgebra::{Quaternion, Unit, Vector2, Vector3};

/// 2D vector type (screen-space positions, pixel units)
pub type Vec2 = Vector2<f32>;

/// 3D vector type (world-space positions and scale factors)
pub type Vec3 = Vector3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Build a rotation of `degrees` about the world up (Y) axis.
///
/// Touch rotation and slider binding both work in degrees, matching
/// the units a host UI exposes; conversion to radians happens here.
pub fn yaw_rotation(degrees: f32) -> Quat {
    Quat::from_axis_angle(&Vec3::y_axis(), degrees.to_radians())
}

/// Position, rotation, and scale of one placed object
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// World space position
    pub position: Vec3,

    /// World space rotation quaternion
    pub rotation: Quat,

    /// World space scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform with position and rotation, unit scale
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            ..Default::default()
        }
    }

    /// Set all three scale factors to the same value
    pub fn set_uniform_scale(&mut self, scale: f32) {
        self.scale = Vec3::new(scale, scale, scale);
    }
}
