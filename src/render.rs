//! Rendering: draws one complete arm frame onto a [`Surface`].
//!
//! Every call clears the whole surface and redraws from scratch in a fixed
//! layer order: grid, axes, workspace overlay, links and joint markers, then
//! the end-effector. Nothing carries over between frames, so identical inputs
//! always produce an identical call sequence.
//!
//! Surface errors propagate via `Result<(), S::Error>`; the caller decides
//! what a failed frame means.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use tracing::{debug, warn};

use crate::config::RenderConfig;
use crate::consts::{
    AXIS_COLOR, AXIS_LABEL_FONT, AXIS_LINE_WIDTH, END_EFFECTOR_COLOR, END_EFFECTOR_RADIUS, GRID_COLOR,
    GRID_LINE_WIDTH, JOINT_COLOR, JOINT_RADIUS, LINK_COLOR, LINK_WIDTH, MIN_GRID_SIZE, WORKSPACE_COLOR,
    WORKSPACE_LINE_WIDTH, X_LABEL_INSET, Y_LABEL_INSET,
};
use crate::joint::{Joint, Point, Position};
use crate::kinematics::{DEFAULT_WORKSPACE_SAMPLES, forward_kinematics, workspace_boundary};
use crate::surface::Surface;
use crate::viewport::Viewport;

/// Draw the full frame for `joints` under `config`.
///
/// Axes are only drawn while the grid is shown. An empty chain draws no links,
/// only the end-effector marker on the base.
///
/// # Errors
///
/// Returns the surface's error if any fallible primitive fails. The frame is
/// left partially drawn in that case.
pub fn render_frame<S: Surface>(surface: &mut S, joints: &[Joint], config: &RenderConfig) -> Result<(), S::Error> {
    let viewport = config.viewport();

    // Layer 1: clear.
    surface.clear_rect(0.0, 0.0, config.width, config.height);

    // Layer 2: grid and axes.
    if config.show_grid {
        draw_grid(surface, config);
        if config.show_axes {
            draw_axes(surface, config)?;
        }
    }

    // Layer 3: reach overlay.
    if config.show_workspace {
        draw_workspace(surface, &viewport, joints);
    }

    // Layer 4: the arm.
    let positions = forward_kinematics(joints);
    draw_arm(surface, &viewport, &positions)?;

    debug!(links = positions.len(), width = config.width, height = config.height, "rendered arm frame");
    Ok(())
}

/// Offsets of grid lines along one surface dimension.
///
/// Lines are phase-aligned to `center`: the first sits at `center % spacing`
/// and each next one `spacing` further, stopping before `extent`. A spacing
/// below [`MIN_GRID_SIZE`] or not finite yields no lines.
pub fn grid_lines(center: f64, extent: f64, spacing: f64) -> impl Iterator<Item = f64> {
    let start = if spacing.is_finite() && spacing >= MIN_GRID_SIZE { center % spacing } else { extent };
    std::iter::successors(Some(start), move |v| Some(v + spacing)).take_while(move |v| *v < extent)
}

// =============================================================
// Background
// =============================================================

fn draw_grid<S: Surface>(surface: &mut S, config: &RenderConfig) {
    if !config.grid_size_is_valid() {
        warn!(grid_size = config.grid_size, "skipping grid: invalid spacing");
        return;
    }
    let (width, height) = (config.width, config.height);
    let center = config.viewport().center();

    surface.begin_path();
    surface.set_stroke_style(GRID_COLOR);
    surface.set_line_width(GRID_LINE_WIDTH);

    for x in grid_lines(center.x, width, config.grid_size) {
        surface.move_to(Point::new(x, 0.0));
        surface.line_to(Point::new(x, height));
    }
    for y in grid_lines(center.y, height, config.grid_size) {
        surface.move_to(Point::new(0.0, y));
        surface.line_to(Point::new(width, y));
    }
    surface.stroke();
}

fn draw_axes<S: Surface>(surface: &mut S, config: &RenderConfig) -> Result<(), S::Error> {
    let (width, height) = (config.width, config.height);
    let center = config.viewport().center();

    surface.begin_path();
    surface.set_stroke_style(AXIS_COLOR);
    surface.set_line_width(AXIS_LINE_WIDTH);
    surface.move_to(Point::new(0.0, center.y));
    surface.line_to(Point::new(width, center.y));
    surface.move_to(Point::new(center.x, 0.0));
    surface.line_to(Point::new(center.x, height));
    surface.stroke();

    surface.set_fill_style(AXIS_COLOR);
    surface.set_font(AXIS_LABEL_FONT);
    surface.fill_text("X", Point::new(width - X_LABEL_INSET.0, center.y - X_LABEL_INSET.1))?;
    surface.fill_text("Y", Point::new(center.x + Y_LABEL_INSET.0, Y_LABEL_INSET.1))?;
    Ok(())
}

fn draw_workspace<S: Surface>(surface: &mut S, viewport: &Viewport, joints: &[Joint]) {
    let boundary = workspace_boundary(joints, DEFAULT_WORKSPACE_SAMPLES);
    let Some(first) = boundary.first().copied() else {
        return;
    };

    surface.begin_path();
    surface.set_stroke_style(WORKSPACE_COLOR);
    surface.set_line_width(WORKSPACE_LINE_WIDTH);
    surface.move_to(viewport.to_surface(first));
    for p in &boundary[1..] {
        surface.line_to(viewport.to_surface(*p));
    }
    // Close the loop back to the start sample.
    surface.line_to(viewport.to_surface(first));
    surface.stroke();
}

// =============================================================
// Arm
// =============================================================

fn draw_arm<S: Surface>(surface: &mut S, viewport: &Viewport, positions: &[Position]) -> Result<(), S::Error> {
    surface.set_line_width(LINK_WIDTH);
    surface.set_stroke_style(LINK_COLOR);

    let mut prev = viewport.to_surface(Point::ORIGIN);
    for pos in positions {
        let next = viewport.to_surface(*pos);

        surface.begin_path();
        surface.move_to(prev);
        surface.line_to(next);
        surface.stroke();

        // Marker for the joint driving this link, at the link's start.
        surface.set_fill_style(JOINT_COLOR);
        surface.begin_path();
        surface.arc(prev, JOINT_RADIUS)?;
        surface.fill();

        prev = next;
    }

    surface.set_fill_style(END_EFFECTOR_COLOR);
    surface.begin_path();
    surface.arc(prev, END_EFFECTOR_RADIUS)?;
    surface.fill();
    Ok(())
}
