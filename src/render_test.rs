#![allow(clippy::float_cmp)]

use super::*;
use crate::surface::{DrawOp, RecordingSurface};

// =============================================================
// Helpers
// =============================================================

fn render(joints: &[Joint], config: &RenderConfig) -> RecordingSurface {
    let mut surface = RecordingSurface::new();
    render_frame(&mut surface, joints, config).unwrap();
    surface
}

fn arm_only() -> RenderConfig {
    RenderConfig { show_grid: false, show_axes: false, ..RenderConfig::default() }
}

fn straight_arm() -> Vec<Joint> {
    vec![Joint::new(0.0, 100.0), Joint::new(0.0, 75.0), Joint::new(0.0, 50.0)]
}

fn arcs(surface: &RecordingSurface) -> Vec<(Point, f64)> {
    surface
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::Arc { center, radius } => Some((*center, *radius)),
            _ => None,
        })
        .collect()
}

fn line_targets(surface: &RecordingSurface) -> Vec<Point> {
    surface
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::LineTo(p) => Some(*p),
            _ => None,
        })
        .collect()
}

fn has_stroke_style(surface: &RecordingSurface, color: &str) -> bool {
    surface.ops().iter().any(|op| matches!(op, DrawOp::StrokeStyle(c) if c == color))
}

fn texts(surface: &RecordingSurface) -> Vec<(String, Point)> {
    surface
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::FillText { text, at } => Some((text.clone(), *at)),
            _ => None,
        })
        .collect()
}

/// Surface that refuses to draw text.
#[derive(Default)]
struct TextlessSurface {
    inner: RecordingSurface,
}

impl Surface for TextlessSurface {
    type Error = &'static str;

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.inner.clear_rect(x, y, width, height);
    }
    fn set_stroke_style(&mut self, color: &str) {
        self.inner.set_stroke_style(color);
    }
    fn set_fill_style(&mut self, color: &str) {
        self.inner.set_fill_style(color);
    }
    fn set_line_width(&mut self, width: f64) {
        self.inner.set_line_width(width);
    }
    fn set_font(&mut self, font: &str) {
        self.inner.set_font(font);
    }
    fn begin_path(&mut self) {
        self.inner.begin_path();
    }
    fn move_to(&mut self, p: Point) {
        self.inner.move_to(p);
    }
    fn line_to(&mut self, p: Point) {
        self.inner.line_to(p);
    }
    fn arc(&mut self, center: Point, radius: f64) -> Result<(), Self::Error> {
        self.inner.arc(center, radius).map_err(|never| match never {})
    }
    fn stroke(&mut self) {
        self.inner.stroke();
    }
    fn fill(&mut self) {
        self.inner.fill();
    }
    fn fill_text(&mut self, _text: &str, _at: Point) -> Result<(), Self::Error> {
        Err("no fonts")
    }
}

// =============================================================
// grid_lines
// =============================================================

#[test]
fn grid_lines_default_canvas_start_at_zero() {
    let lines: Vec<f64> = grid_lines(300.0, 600.0, 50.0).collect();
    let expected: Vec<f64> = (0..12).map(|i| f64::from(i) * 50.0).collect();
    assert_eq!(lines, expected);
}

#[test]
fn grid_lines_are_phase_aligned_to_center() {
    for (extent, spacing) in [(70.0, 20.0), (333.0, 40.0), (1000.0, 37.0), (10.0, 3.0)] {
        let center: f64 = extent / 2.0;
        let lines: Vec<f64> = grid_lines(center, extent, spacing).collect();
        assert!(!lines.is_empty());
        assert!(lines.iter().any(|x| (x - center).abs() < 1e-9), "no line through {center}: {lines:?}");
        for x in &lines {
            let phase = (x - center).rem_euclid(spacing);
            assert!(phase < 1e-9 || spacing - phase < 1e-9, "{x} off phase for spacing {spacing}");
            assert!(*x < extent);
        }
    }
}

#[test]
fn grid_lines_zero_extent_is_empty() {
    assert_eq!(grid_lines(0.0, 0.0, 50.0).count(), 0);
}

#[test]
fn grid_lines_invalid_spacing_is_empty() {
    assert_eq!(grid_lines(300.0, 600.0, 0.0).count(), 0);
    assert_eq!(grid_lines(300.0, 600.0, -5.0).count(), 0);
    assert_eq!(grid_lines(300.0, 600.0, f64::NAN).count(), 0);
}

#[test]
fn grid_lines_sub_pixel_spacing_is_empty() {
    assert_eq!(grid_lines(300.0, 600.0, 1e-20).count(), 0);
    assert_eq!(grid_lines(300.0, 600.0, 0.999).count(), 0);
    assert_eq!(grid_lines(300.0, 600.0, MIN_GRID_SIZE).count(), 600);
}

#[test]
fn sub_pixel_grid_size_skips_grid() {
    let config = RenderConfig { grid_size: 1e-9, show_axes: false, ..RenderConfig::default() };
    let surface = render(&straight_arm(), &config);
    assert!(!has_stroke_style(&surface, GRID_COLOR));
    assert_eq!(arcs(&surface).len(), 4);
}

// =============================================================
// Background layers
// =============================================================

#[test]
fn frame_starts_by_clearing_whole_surface() {
    let surface = render(&straight_arm(), &RenderConfig::with_size(640.0, 480.0));
    assert_eq!(
        surface.ops().first(),
        Some(&DrawOp::ClearRect { x: 0.0, y: 0.0, width: 640.0, height: 480.0 })
    );
    assert_eq!(surface.count(|op| matches!(op, DrawOp::ClearRect { .. })), 1);
}

#[test]
fn grid_draws_one_stroke_with_all_lines() {
    let config = RenderConfig { show_axes: false, ..RenderConfig::default() };
    let surface = render(&[], &config);
    assert!(has_stroke_style(&surface, GRID_COLOR));
    assert_eq!(surface.count(|op| matches!(op, DrawOp::MoveTo(_))), 24);
    assert_eq!(surface.count(|op| matches!(op, DrawOp::Stroke)), 1);
    assert!(surface.ops().contains(&DrawOp::LineWidth(GRID_LINE_WIDTH)));
}

#[test]
fn hidden_grid_also_hides_axes() {
    let config = RenderConfig { show_grid: false, show_axes: true, ..RenderConfig::default() };
    let surface = render(&straight_arm(), &config);
    assert!(!has_stroke_style(&surface, GRID_COLOR));
    assert!(!has_stroke_style(&surface, AXIS_COLOR));
    assert!(texts(&surface).is_empty());
}

#[test]
fn grid_without_axes_has_no_labels() {
    let config = RenderConfig { show_axes: false, ..RenderConfig::default() };
    let surface = render(&straight_arm(), &config);
    assert!(has_stroke_style(&surface, GRID_COLOR));
    assert!(!has_stroke_style(&surface, AXIS_COLOR));
    assert!(texts(&surface).is_empty());
}

#[test]
fn axes_cross_at_center_with_labels() {
    let surface = render(&[], &RenderConfig::default());
    let targets = line_targets(&surface);
    assert!(targets.contains(&Point::new(600.0, 300.0)));
    assert!(targets.contains(&Point::new(300.0, 600.0)));
    assert_eq!(
        texts(&surface),
        vec![("X".to_owned(), Point::new(580.0, 290.0)), ("Y".to_owned(), Point::new(310.0, 20.0))]
    );
    assert!(surface.ops().contains(&DrawOp::Font(AXIS_LABEL_FONT.to_owned())));
}

#[test]
fn invalid_grid_size_skips_grid_but_draws_arm() {
    let config = RenderConfig { grid_size: 0.0, show_axes: false, ..RenderConfig::default() };
    let surface = render(&straight_arm(), &config);
    assert!(!has_stroke_style(&surface, GRID_COLOR));
    assert_eq!(arcs(&surface).len(), 4);
}

#[test]
fn zero_size_surface_draws_no_grid_lines() {
    let config = RenderConfig { show_axes: false, ..RenderConfig::with_size(0.0, 0.0) };
    let surface = render(&[], &config);
    assert_eq!(surface.count(|op| matches!(op, DrawOp::MoveTo(_))), 0);
}

// =============================================================
// Workspace overlay
// =============================================================

#[test]
fn workspace_hidden_by_default() {
    let surface = render(&straight_arm(), &RenderConfig::default());
    assert!(!has_stroke_style(&surface, WORKSPACE_COLOR));
}

#[test]
fn workspace_overlay_is_a_closed_circle() {
    let config = RenderConfig { show_workspace: true, ..arm_only() };
    let surface = render(&straight_arm(), &config);
    assert!(has_stroke_style(&surface, WORKSPACE_COLOR));

    let targets = line_targets(&surface);
    // 359 sample edges, one closing edge, then three links.
    assert_eq!(targets.len(), 360 + 3);
    assert_eq!(targets[359], Point::new(525.0, 300.0));
    assert_eq!(surface.ops().iter().find(|op| matches!(op, DrawOp::MoveTo(_))), Some(&DrawOp::MoveTo(Point::new(525.0, 300.0))));
}

// =============================================================
// Arm
// =============================================================

#[test]
fn straight_arm_links_run_right_of_center() {
    let surface = render(&straight_arm(), &arm_only());
    assert_eq!(
        line_targets(&surface),
        vec![Point::new(400.0, 300.0), Point::new(475.0, 300.0), Point::new(525.0, 300.0)]
    );
    assert!(surface.ops().contains(&DrawOp::LineWidth(LINK_WIDTH)));
    assert!(has_stroke_style(&surface, LINK_COLOR));
}

#[test]
fn joint_markers_sit_at_link_starts() {
    let surface = render(&straight_arm(), &arm_only());
    assert_eq!(
        arcs(&surface),
        vec![
            (Point::new(300.0, 300.0), JOINT_RADIUS),
            (Point::new(400.0, 300.0), JOINT_RADIUS),
            (Point::new(475.0, 300.0), JOINT_RADIUS),
            (Point::new(525.0, 300.0), END_EFFECTOR_RADIUS),
        ]
    );
}

#[test]
fn end_effector_is_drawn_last_in_its_color() {
    let surface = render(&straight_arm(), &arm_only());
    let tail = &surface.ops()[surface.ops().len() - 4..];
    assert_eq!(
        tail,
        &[
            DrawOp::FillStyle(END_EFFECTOR_COLOR.to_owned()),
            DrawOp::BeginPath,
            DrawOp::Arc { center: Point::new(525.0, 300.0), radius: END_EFFECTOR_RADIUS },
            DrawOp::Fill,
        ]
    );
}

#[test]
fn model_y_is_flipped_on_surface() {
    let surface = render(&[Joint::new(90.0, 100.0)], &arm_only());
    let targets = line_targets(&surface);
    assert_eq!(targets.len(), 1);
    assert!((targets[0].x - 300.0).abs() < 1e-9);
    assert!((targets[0].y - 200.0).abs() < 1e-9);
}

#[test]
fn empty_chain_marks_only_the_base() {
    let surface = render(&[], &RenderConfig::default());
    assert_eq!(arcs(&surface), vec![(Point::new(300.0, 300.0), END_EFFECTOR_RADIUS)]);
    assert!(!surface.ops().contains(&DrawOp::FillStyle(JOINT_COLOR.to_owned())));
}

#[test]
fn empty_chain_without_overlays_draws_base_end_effector() {
    let surface = render(&[], &arm_only());
    assert_eq!(
        surface.ops(),
        &[
            DrawOp::ClearRect { x: 0.0, y: 0.0, width: 600.0, height: 600.0 },
            DrawOp::LineWidth(LINK_WIDTH),
            DrawOp::StrokeStyle(LINK_COLOR.to_owned()),
            DrawOp::FillStyle(END_EFFECTOR_COLOR.to_owned()),
            DrawOp::BeginPath,
            DrawOp::Arc { center: Point::new(300.0, 300.0), radius: END_EFFECTOR_RADIUS },
            DrawOp::Fill,
        ]
    );
}

// =============================================================
// Frame contract
// =============================================================

#[test]
fn identical_inputs_render_identically() {
    let joints = [Joint::new(37.0, 80.0), Joint::new(-120.0, 60.0), Joint::new(15.5, 40.0)];
    let config = RenderConfig { show_workspace: true, grid_size: 32.0, ..RenderConfig::with_size(500.0, 420.0) };
    assert_eq!(render(&joints, &config), render(&joints, &config));
}

#[test]
fn redraw_on_same_surface_repeats_the_frame() {
    let joints = straight_arm();
    let config = RenderConfig::default();
    let mut surface = RecordingSurface::new();
    render_frame(&mut surface, &joints, &config).unwrap();
    let first = surface.take_ops();
    render_frame(&mut surface, &joints, &config).unwrap();
    assert_eq!(first, surface.take_ops());
}

#[test]
fn surface_error_aborts_the_frame() {
    let mut surface = TextlessSurface::default();
    let result = render_frame(&mut surface, &straight_arm(), &RenderConfig::default());
    assert_eq!(result, Err("no fonts"));
    assert!(arcs(&surface.inner).is_empty());
}

#[test]
fn surface_error_unused_without_text() {
    let mut surface = TextlessSurface::default();
    let result = render_frame(&mut surface, &straight_arm(), &arm_only());
    assert_eq!(result, Ok(()));
    assert_eq!(arcs(&surface.inner).len(), 4);
}
