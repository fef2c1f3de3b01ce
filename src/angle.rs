//! Angle helpers shared by the kinematics engine and hosts.

#[cfg(test)]
#[path = "angle_test.rs"]
mod angle_test;

use std::f64::consts::PI;

/// Lowest commanded joint angle, in degrees.
pub const JOINT_ANGLE_MIN: f64 = -180.0;

/// Highest commanded joint angle, in degrees.
pub const JOINT_ANGLE_MAX: f64 = 180.0;

/// Convert degrees to radians.
#[must_use]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

/// Convert radians to degrees.
#[must_use]
pub fn to_degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

/// Clamp `value` into `[min, max]`.
///
/// Evaluated as `min(max(value, min), max)`, so if `min > max` the result is
/// `max`. Callers should not rely on that case.
#[must_use]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Clamp a commanded joint angle into the slider range.
#[must_use]
pub fn clamp_joint_angle(degrees: f64) -> f64 {
    clamp(degrees, JOINT_ANGLE_MIN, JOINT_ANGLE_MAX)
}
