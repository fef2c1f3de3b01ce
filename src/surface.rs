//! Drawing-surface abstraction and an in-memory recording surface.
//!
//! [`Surface`] is the subset of the Canvas 2D API the renderer needs, shaped so
//! the browser context can implement it directly: state setters and path
//! building are infallible, while `arc` and `fill_text` may fail the way the
//! browser's own calls do.
//!
//! [`RecordingSurface`] appends every call to an op log instead of drawing.
//! Two frames are pixel-identical when their logs are equal, which is how the
//! renderer is tested without a browser.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::convert::Infallible;

use crate::joint::Point;

/// A 2D drawing target with Canvas-style path and paint state.
pub trait Surface {
    /// Error raised by the fallible primitives.
    type Error;

    /// Clear a rectangle to transparent.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn set_stroke_style(&mut self, color: &str);
    fn set_fill_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
    fn set_font(&mut self, font: &str);

    /// Start a new, empty path.
    fn begin_path(&mut self);
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);

    /// Add a full circle of `radius` around `center` to the current path.
    ///
    /// # Errors
    ///
    /// Returns the surface's error if the arc cannot be added.
    fn arc(&mut self, center: Point, radius: f64) -> Result<(), Self::Error>;

    /// Stroke the current path with the current stroke style and width.
    fn stroke(&mut self);

    /// Fill the current path with the current fill style.
    fn fill(&mut self);

    /// Draw `text` with its baseline origin at `at`, in the current font.
    ///
    /// # Errors
    ///
    /// Returns the surface's error if the text cannot be drawn.
    fn fill_text(&mut self, text: &str, at: Point) -> Result<(), Self::Error>;
}

/// One recorded [`Surface`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    ClearRect { x: f64, y: f64, width: f64, height: f64 },
    StrokeStyle(String),
    FillStyle(String),
    LineWidth(f64),
    Font(String),
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    Arc { center: Point, radius: f64 },
    Stroke,
    Fill,
    FillText { text: String, at: Point },
}

/// A surface that records calls instead of drawing them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every op recorded so far, in call order.
    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Take the recorded ops, leaving the log empty.
    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    /// Number of recorded ops matching `pred`.
    #[must_use]
    pub fn count<F>(&self, pred: F) -> usize
    where
        F: Fn(&DrawOp) -> bool,
    {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl Surface for RecordingSurface {
    type Error = Infallible;

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(DrawOp::ClearRect { x, y, width, height });
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.ops.push(DrawOp::StrokeStyle(color.to_owned()));
    }

    fn set_fill_style(&mut self, color: &str) {
        self.ops.push(DrawOp::FillStyle(color.to_owned()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(DrawOp::LineWidth(width));
    }

    fn set_font(&mut self, font: &str) {
        self.ops.push(DrawOp::Font(font.to_owned()));
    }

    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }

    fn move_to(&mut self, p: Point) {
        self.ops.push(DrawOp::MoveTo(p));
    }

    fn line_to(&mut self, p: Point) {
        self.ops.push(DrawOp::LineTo(p));
    }

    fn arc(&mut self, center: Point, radius: f64) -> Result<(), Self::Error> {
        self.ops.push(DrawOp::Arc { center, radius });
        Ok(())
    }

    fn stroke(&mut self) {
        self.ops.push(DrawOp::Stroke);
    }

    fn fill(&mut self) {
        self.ops.push(DrawOp::Fill);
    }

    fn fill_text(&mut self, text: &str, at: Point) -> Result<(), Self::Error> {
        self.ops.push(DrawOp::FillText { text: text.to_owned(), at });
        Ok(())
    }
}
