//! Forward kinematics and canvas rendering for a planar robot arm.
//!
//! The crate is split in two halves. The kinematics half is pure: it turns an
//! ordered joint chain into link endpoints and samples the outer workspace
//! boundary. The render half takes those endpoints and redraws a full frame
//! onto any [`surface::Surface`], clearing first and never diffing against the
//! previous frame.
//!
//! Joint state and reactivity belong to the host (see the `canvas` crate for
//! the browser one). Nothing here mutates joints or keeps state between calls.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`angle`] | Degree/radian conversion and clamping |
//! | [`joint`] | Joint and position types, the default arm |
//! | [`kinematics`] | Forward kinematics and workspace sampling |
//! | [`viewport`] | Model-to-surface coordinate transform |
//! | [`config`] | Render flags and surface dimensions |
//! | [`surface`] | Drawing-surface trait and the recording surface |
//! | [`render`] | Full-frame rendering: grid, axes, workspace, arm |
//! | [`consts`] | Render style constants |

pub mod angle;
pub mod config;
pub mod consts;
pub mod joint;
pub mod kinematics;
pub mod render;
pub mod surface;
pub mod viewport;

pub use angle::{clamp, clamp_joint_angle, to_degrees, to_radians};
pub use config::{ConfigError, RenderConfig};
pub use joint::{Joint, Point, Position, default_arm};
pub use kinematics::{DEFAULT_WORKSPACE_SAMPLES, end_effector, forward_kinematics, total_length, workspace_boundary};
pub use render::render_frame;
pub use surface::{DrawOp, RecordingSurface, Surface};
pub use viewport::Viewport;
