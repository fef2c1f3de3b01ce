//! Render style constants and defaults for the arm view.

// ── Defaults ────────────────────────────────────────────────────

/// Grid spacing in surface pixels.
pub const DEFAULT_GRID_SIZE: f64 = 50.0;

/// Smallest accepted grid spacing. Finer grids are unreadable and unbounded.
pub const MIN_GRID_SIZE: f64 = 1.0;

/// Default surface width in pixels.
pub const DEFAULT_CANVAS_WIDTH: f64 = 600.0;

/// Default surface height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;

// ── Grid and axes ───────────────────────────────────────────────

pub const GRID_COLOR: &str = "#e5e5e5";
pub const GRID_LINE_WIDTH: f64 = 0.5;

pub const AXIS_COLOR: &str = "#2563eb";
pub const AXIS_LINE_WIDTH: f64 = 2.0;
pub const AXIS_LABEL_FONT: &str = "14px Arial";

/// The X label sits this far left of the right edge and above the X axis.
pub const X_LABEL_INSET: (f64, f64) = (20.0, 10.0);

/// The Y label sits this far right of the Y axis and down from the top edge.
pub const Y_LABEL_INSET: (f64, f64) = (10.0, 20.0);

// ── Workspace overlay ───────────────────────────────────────────

pub const WORKSPACE_COLOR: &str = "#a3bffa";
pub const WORKSPACE_LINE_WIDTH: f64 = 1.0;

// ── Arm ─────────────────────────────────────────────────────────

pub const LINK_COLOR: &str = "#72A1E5";
pub const LINK_WIDTH: f64 = 8.0;

pub const JOINT_COLOR: &str = "#272D2D";
pub const JOINT_RADIUS: f64 = 6.0;

pub const END_EFFECTOR_COLOR: &str = "#23CE6B";
pub const END_EFFECTOR_RADIUS: f64 = 8.0;
