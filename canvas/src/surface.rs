//! [`Surface`] over a browser `CanvasRenderingContext2d`.
//!
//! This is the only place that touches `web_sys`. Each trait method forwards to
//! the context call of the same name; `arc` and `fill_text` surface the
//! context's `JsValue` errors.

use std::f64::consts::TAU;

use armviz::{Point, Surface};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// Borrowed 2D context for the duration of one frame.
pub struct Canvas2dSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> Canvas2dSurface<'a> {
    #[must_use]
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for Canvas2dSurface<'_> {
    type Error = JsValue;

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: Point) {
        self.ctx.move_to(p.x, p.y);
    }

    fn line_to(&mut self, p: Point) {
        self.ctx.line_to(p.x, p.y);
    }

    fn arc(&mut self, center: Point, radius: f64) -> Result<(), JsValue> {
        self.ctx.arc(center.x, center.y, radius, 0.0, TAU)
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, at: Point) -> Result<(), JsValue> {
        self.ctx.fill_text(text, at.x, at.y)
    }
}
