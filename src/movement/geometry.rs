//! Movement domain: horizontal-plane helpers shared by the detectors and behaviors.

use bevy::prelude::*;

/// Drop the vertical component of a vector.
pub fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Unit direction of the horizontal part of `v`, or zero when there is none.
pub fn horizontal_direction(v: Vec3) -> Vec3 {
    flatten(v).normalize_or_zero()
}

/// True when the angle between `a` and `b` is at most `max_degrees`.
///
/// Compares the dot product against the cosine so no inverse trig is needed.
pub fn within_angle(a: Vec3, b: Vec3, max_degrees: f32) -> bool {
    a.normalize_or_zero().dot(b.normalize_or_zero()) >= max_degrees.to_radians().cos()
}

/// Rotate around the vertical axis. Positive degrees turn clockwise seen from above.
pub fn yaw(v: Vec3, degrees: f32) -> Vec3 {
    Quat::from_rotation_y(-degrees.to_radians()) * v
}

/// Right-hand side of a horizontal forward direction.
pub fn right_of(forward: Vec3) -> Vec3 {
    forward.cross(Vec3::Y)
}
