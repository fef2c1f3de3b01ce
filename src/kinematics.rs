//! Forward kinematics for a planar serial chain.
//!
//! Both operations are pure and total over finite input: no allocation beyond
//! the returned `Vec`, no shared state, no error paths.

#[cfg(test)]
#[path = "kinematics_test.rs"]
mod kinematics_test;

use std::f64::consts::TAU;

use crate::angle::to_radians;
use crate::joint::{Joint, Point, Position};

/// Sample count used for the workspace boundary overlay.
pub const DEFAULT_WORKSPACE_SAMPLES: u32 = 360;

/// Compute the endpoint of every link, base to tip.
///
/// The running heading starts at zero and each joint adds its own angle before
/// its link is laid down, so link `i` points along the sum of angles `0..=i`.
/// The base `(0, 0)` is implied and not part of the result.
#[must_use]
pub fn forward_kinematics(joints: &[Joint]) -> Vec<Position> {
    joints
        .iter()
        .scan((Point::ORIGIN, 0.0_f64), |(tip, heading), joint| {
            *heading += to_radians(joint.angle);
            tip.x += joint.length * heading.cos();
            tip.y += joint.length * heading.sin();
            Some(*tip)
        })
        .collect()
}

/// Sum of all link lengths.
#[must_use]
pub fn total_length(joints: &[Joint]) -> f64 {
    joints.iter().map(|j| j.length).sum()
}

/// Tip of the chain, or `None` for an empty chain.
#[must_use]
pub fn end_effector(joints: &[Joint]) -> Option<Position> {
    forward_kinematics(joints).last().copied()
}

/// Sample the outer workspace boundary as `samples` evenly spaced points.
///
/// This is the circle of radius [`total_length`]: the reach with every link
/// aligned. It over-approximates the reachable set and ignores joint limits.
/// The first point sits on +X and the start point is not repeated at the end.
#[must_use]
pub fn workspace_boundary(joints: &[Joint], samples: u32) -> Vec<Position> {
    let radius = total_length(joints);
    (0..samples)
        .map(|i| {
            let angle = TAU * f64::from(i) / f64::from(samples);
            Point::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}
