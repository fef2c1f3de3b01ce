//! Render configuration: overlay toggles, grid spacing, and surface size.
//!
//! The host owns this value and passes it to [`crate::render::render_frame`]
//! on every redraw. Field names follow the browser host's camelCase JSON so a
//! partial object such as `{"showGrid": false}` deserializes onto the defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_GRID_SIZE, MIN_GRID_SIZE};
use crate::viewport::Viewport;

/// Error returned by [`RenderConfig::validate`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Grid spacing is below one pixel or not finite.
    #[error("grid size must be a finite number of at least 1 pixel, got {0}")]
    GridSize(f64),
    /// A surface dimension is negative or not finite.
    #[error("surface dimensions must be non-negative finite numbers, got {width}x{height}")]
    Dimensions { width: f64, height: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    /// Draw the minor grid.
    pub show_grid: bool,
    /// Draw the X/Y axes. Only honoured while the grid is shown.
    pub show_axes: bool,
    /// Stroke the sampled workspace boundary under the arm.
    pub show_workspace: bool,
    /// Grid spacing in surface pixels.
    pub grid_size: f64,
    /// Surface width in pixels.
    #[serde(rename = "canvasWidth")]
    pub width: f64,
    /// Surface height in pixels.
    #[serde(rename = "canvasHeight")]
    pub height: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_axes: true,
            show_workspace: false,
            grid_size: DEFAULT_GRID_SIZE,
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

impl RenderConfig {
    /// Default flags for a surface of the given size.
    #[must_use]
    pub fn with_size(width: f64, height: f64) -> Self {
        Self { width, height, ..Self::default() }
    }

    /// The model-to-surface transform for this surface size.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    /// Whether `grid_size` can drive the grid loops.
    #[must_use]
    pub fn grid_size_is_valid(&self) -> bool {
        self.grid_size.is_finite() && self.grid_size >= MIN_GRID_SIZE
    }

    /// Check that spacing and dimensions are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::GridSize`] for a sub-pixel or non-finite grid
    /// size, and [`ConfigError::Dimensions`] for a negative or non-finite size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.grid_size_is_valid() {
            return Err(ConfigError::GridSize(self.grid_size));
        }
        let dim_ok = |v: f64| v.is_finite() && v >= 0.0;
        if !dim_ok(self.width) || !dim_ok(self.height) {
            return Err(ConfigError::Dimensions { width: self.width, height: self.height });
        }
        Ok(())
    }
}
