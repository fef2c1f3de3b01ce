#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::joint::{Point, Position};

/// Maps model space onto a drawing surface of a given pixel size.
///
/// The model origin lands on the surface centre and model Y is flipped, since
/// surface Y grows downward. There is no zoom or pan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Geometric centre of the surface, in surface pixels.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Convert a model-space position to surface pixels.
    #[must_use]
    pub fn to_surface(&self, model: Position) -> Point {
        let c = self.center();
        Point::new(c.x + model.x, c.y - model.y)
    }
}
