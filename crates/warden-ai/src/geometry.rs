//! Planar geometry helpers shared by locomotion and perception.
//!
//! Y is up and an unrotated body faces +Z. Yaw is measured in degrees about
//! +Y, so yaw 0 faces +Z and yaw 90 faces +X.

use glam::{Quat, Vec2, Vec3};

/// Squared length under which a vector counts as zero.
const DEGENERATE_LENGTH_SQ: f32 = 1e-8;

/// Forward direction of a rotation.
pub fn forward(rotation: Quat) -> Vec3 {
    rotation * Vec3::Z
}

/// Project onto the horizontal plane.
pub fn planar(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

/// Horizontal distance between two points, ignoring height.
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    (planar(a) - planar(b)).length()
}

/// Wrap an angle into `[0, 360)`.
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round tiny negatives up to exactly 360.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Yaw implied by looking along `direction`, or `None` when the direction has
/// no horizontal component (zero vector, straight up, straight down).
pub fn yaw_of_direction(direction: Vec3) -> Option<f32> {
    let flat = planar(direction);
    if flat.length_squared() <= DEGENERATE_LENGTH_SQ {
        return None;
    }
    Some(normalize_degrees(flat.x.atan2(flat.y).to_degrees()))
}

/// Yaw of a rotation, pitch and roll ignored.
pub fn yaw_degrees(rotation: Quat) -> f32 {
    yaw_of_direction(forward(rotation)).unwrap_or(0.0)
}

/// Rotation facing the given yaw.
pub fn rotation_from_yaw(yaw_degrees: f32) -> Quat {
    Quat::from_rotation_y(yaw_degrees.to_radians())
}

/// Unsigned horizontal angle between two directions, in `[0, 180]` degrees.
/// `None` if either direction has no horizontal component.
pub fn planar_angle_degrees(a: Vec3, b: Vec3) -> Option<f32> {
    let a = planar(a);
    let b = planar(b);
    if a.length_squared() <= DEGENERATE_LENGTH_SQ || b.length_squared() <= DEGENERATE_LENGTH_SQ {
        return None;
    }
    let cos = a.normalize().dot(b.normalize()).clamp(-1.0, 1.0);
    Some(cos.acos().to_degrees())
}
