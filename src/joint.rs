//! Joint chain model: joints, positions, and the default arm.
//!
//! A chain is an ordered `&[Joint]`, base first. Each joint's `angle` is
//! relative to its parent link, so absolute orientation is the running sum of
//! angles up to that joint. Hosts replace the whole chain on every edit; the
//! core only ever borrows it.

#[cfg(test)]
#[path = "joint_test.rs"]
mod joint_test;

use serde::{Deserialize, Serialize};

/// A point in either model or surface space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The arm base in model space.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A model-space (Cartesian, Y up) position relative to the arm base.
pub type Position = Point;

/// One rotational link of the arm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Joint {
    /// Commanded angle in degrees, relative to the parent link.
    pub angle: f64,
    /// Link length in model units. Zero collapses the link.
    pub length: f64,
    /// Carried with the joint but not used by forward kinematics.
    #[serde(default)]
    pub offset: f64,
}

impl Joint {
    #[must_use]
    pub fn new(angle: f64, length: f64) -> Self {
        Self { angle, length, offset: 0.0 }
    }

    /// Copy of this joint with a different angle.
    #[must_use]
    pub fn with_angle(self, angle: f64) -> Self {
        Self { angle, ..self }
    }
}

/// The three-link arm shown on first load, fully extended along +X.
#[must_use]
pub fn default_arm() -> Vec<Joint> {
    vec![Joint::new(0.0, 100.0), Joint::new(0.0, 75.0), Joint::new(0.0, 50.0)]
}
