use armviz::{
    ConfigError, Joint, Point, Position, RenderConfig, Surface, clamp_joint_angle, default_arm, forward_kinematics,
    render_frame, workspace_boundary,
};
use js_sys::Float64Array;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::surface::Canvas2dSurface;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// What the host should do after a state edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The edit changed nothing.
    None,
    /// A new state was committed and the next frame must be drawn.
    RenderNeeded,
}

impl Action {
    #[must_use]
    pub fn needs_render(self) -> bool {
        self == Self::RenderNeeded
    }
}

/// Errors from host-facing edits.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The edited joint does not exist.
    #[error("joint index {index} out of range for a {len}-joint arm")]
    JointOutOfRange { index: usize, len: usize },
    /// The proposed render config failed validation.
    #[error("invalid render config: {0}")]
    Config(#[from] ConfigError),
    /// Arm state JSON could not be read or written.
    #[error("arm state JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<EngineError> for JsValue {
    fn from(err: EngineError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Everything a frame depends on. Replaced wholesale on every commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmState {
    pub joints: Vec<Joint>,
    #[serde(default)]
    pub config: RenderConfig,
}

impl Default for ArmState {
    fn default() -> Self {
        Self { joints: default_arm(), config: RenderConfig::default() }
    }
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
/// Each edit builds a new [`ArmState`] and commits it only if it differs from
/// the current one; each commit bumps a revision. [`EngineCore::render`] draws
/// at most once per revision, so one committed state means one frame.
#[derive(Debug)]
pub struct EngineCore {
    state: ArmState,
    revision: u64,
    drawn: Option<u64>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self { state: ArmState::default(), revision: 0, drawn: None }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an explicit state.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] if the config does not validate.
    pub fn with_state(state: ArmState) -> Result<Self, EngineError> {
        state.config.validate()?;
        Ok(Self { state, ..Self::default() })
    }

    // --- Commits ---

    fn commit(&mut self, next: ArmState) -> Action {
        if next == self.state {
            return Action::None;
        }
        self.state = next;
        self.revision += 1;
        log::debug!("committed arm state revision {}", self.revision);
        Action::RenderNeeded
    }

    fn commit_config(&mut self, config: RenderConfig) -> Result<Action, EngineError> {
        config.validate()?;
        Ok(self.commit(ArmState { joints: self.state.joints.clone(), config }))
    }

    /// Replace the whole joint chain. Angles are clamped to the slider range.
    pub fn set_joints(&mut self, joints: Vec<Joint>) -> Action {
        self.commit(ArmState { joints: clamp_angles(joints), config: self.state.config })
    }

    /// Set one joint's angle, clamped to the slider range.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::JointOutOfRange`] if `index` is past the last joint.
    pub fn set_joint_angle(&mut self, index: usize, degrees: f64) -> Result<Action, EngineError> {
        let len = self.state.joints.len();
        if index >= len {
            return Err(EngineError::JointOutOfRange { index, len });
        }
        let angle = clamp_joint_angle(degrees);
        let joints = self
            .state
            .joints
            .iter()
            .enumerate()
            .map(|(i, joint)| if i == index { joint.with_angle(angle) } else { *joint })
            .collect();
        Ok(self.set_joints(joints))
    }

    pub fn set_show_grid(&mut self, show: bool) -> Action {
        let config = RenderConfig { show_grid: show, ..self.state.config };
        self.commit(ArmState { joints: self.state.joints.clone(), config })
    }

    pub fn set_show_axes(&mut self, show: bool) -> Action {
        let config = RenderConfig { show_axes: show, ..self.state.config };
        self.commit(ArmState { joints: self.state.joints.clone(), config })
    }

    pub fn set_show_workspace(&mut self, show: bool) -> Action {
        let config = RenderConfig { show_workspace: show, ..self.state.config };
        self.commit(ArmState { joints: self.state.joints.clone(), config })
    }

    /// Change the grid spacing.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] for a sub-pixel or non-finite size.
    pub fn set_grid_size(&mut self, grid_size: f64) -> Result<Action, EngineError> {
        self.commit_config(RenderConfig { grid_size, ..self.state.config })
    }

    /// Record new surface dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] for negative or non-finite dimensions.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> Result<Action, EngineError> {
        self.commit_config(RenderConfig { width, height, ..self.state.config })
    }

    /// Replace joints and config from host JSON (see [`ArmState`]), clamping
    /// every angle to the slider range.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Json`] for malformed input and
    /// [`EngineError::Config`] if the decoded config does not validate.
    pub fn load_json(&mut self, json: &str) -> Result<Action, EngineError> {
        let ArmState { joints, config } = serde_json::from_str(json)?;
        config.validate()?;
        Ok(self.commit(ArmState { joints: clamp_angles(joints), config }))
    }

    /// Current state as host JSON.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string(&self.state)?)
    }

    // --- Queries ---

    #[must_use]
    pub fn joints(&self) -> &[Joint] {
        &self.state.joints
    }

    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.state.config
    }

    /// Number of commits since construction.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Link endpoints for the current chain.
    #[must_use]
    pub fn positions(&self) -> Vec<Position> {
        forward_kinematics(&self.state.joints)
    }

    /// Sampled outer workspace boundary for the current chain.
    #[must_use]
    pub fn workspace(&self, samples: u32) -> Vec<Position> {
        workspace_boundary(&self.state.joints, samples)
    }

    /// Whether the current revision has not been drawn yet.
    #[must_use]
    pub fn needs_render(&self) -> bool {
        self.drawn != Some(self.revision)
    }

    // --- Render ---

    /// Draw the current state if it has not been drawn yet.
    ///
    /// Returns `Ok(true)` if a frame was drawn. A failed frame leaves the
    /// revision undrawn so the next call retries it.
    ///
    /// # Errors
    ///
    /// Returns the surface's error if drawing fails.
    pub fn render<S: Surface>(&mut self, surface: &mut S) -> Result<bool, S::Error> {
        if !self.needs_render() {
            return Ok(false);
        }
        render_frame(surface, &self.state.joints, &self.state.config)?;
        self.drawn = Some(self.revision);
        Ok(true)
    }
}

/// Clamp every joint angle to the slider range.
fn clamp_angles(joints: Vec<Joint>) -> Vec<Joint> {
    joints
        .into_iter()
        .map(|joint| joint.with_angle(clamp_joint_angle(joint.angle)))
        .collect()
}

/// Flatten points into `[x0, y0, x1, y1, ...]`.
#[must_use]
pub fn flatten(points: &[Point]) -> Vec<f64> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}

/// The browser engine. Wraps `EngineCore` and owns the canvas and its 2D context.
///
/// Setters return `true` when the host should schedule [`Engine::render`].
#[wasm_bindgen]
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    core: EngineCore,
}

#[wasm_bindgen]
impl Engine {
    /// Create an engine bound to `canvas`, sized to its current pixel size.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<Engine, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        let config = RenderConfig::with_size(f64::from(canvas.width()), f64::from(canvas.height()));
        let core = EngineCore::with_state(ArmState { joints: default_arm(), config })?;
        log::info!("arm engine ready at {}x{}", canvas.width(), canvas.height());
        Ok(Self { canvas, ctx, core })
    }

    /// Replace joints and config from JSON.
    ///
    /// # Errors
    ///
    /// Returns `Err` for malformed JSON or an invalid config.
    pub fn load(&mut self, json: &str) -> Result<bool, JsValue> {
        Ok(self.core.load_json(json)?.needs_render())
    }

    /// Current joints and config as JSON.
    ///
    /// # Errors
    ///
    /// Returns `Err` if serialization fails.
    pub fn snapshot(&self) -> Result<String, JsValue> {
        Ok(self.core.to_json()?)
    }

    /// # Errors
    ///
    /// Returns `Err` if `index` is out of range.
    #[wasm_bindgen(js_name = setJointAngle)]
    pub fn set_joint_angle(&mut self, index: usize, degrees: f64) -> Result<bool, JsValue> {
        Ok(self.core.set_joint_angle(index, degrees)?.needs_render())
    }

    #[wasm_bindgen(js_name = setShowGrid)]
    pub fn set_show_grid(&mut self, show: bool) -> bool {
        self.core.set_show_grid(show).needs_render()
    }

    #[wasm_bindgen(js_name = setShowAxes)]
    pub fn set_show_axes(&mut self, show: bool) -> bool {
        self.core.set_show_axes(show).needs_render()
    }

    #[wasm_bindgen(js_name = setShowWorkspace)]
    pub fn set_show_workspace(&mut self, show: bool) -> bool {
        self.core.set_show_workspace(show).needs_render()
    }

    /// # Errors
    ///
    /// Returns `Err` for a sub-pixel or non-finite size.
    #[wasm_bindgen(js_name = setGridSize)]
    pub fn set_grid_size(&mut self, grid_size: f64) -> Result<bool, JsValue> {
        Ok(self.core.set_grid_size(grid_size)?.needs_render())
    }

    /// Pick up the canvas element's current pixel size.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the size is rejected by config validation.
    #[wasm_bindgen(js_name = syncViewport)]
    pub fn sync_viewport(&mut self) -> Result<bool, JsValue> {
        let (width, height) = (f64::from(self.canvas.width()), f64::from(self.canvas.height()));
        Ok(self.core.set_viewport(width, height)?.needs_render())
    }

    #[wasm_bindgen(js_name = jointCount)]
    #[must_use]
    pub fn joint_count(&self) -> usize {
        self.core.joints().len()
    }

    #[wasm_bindgen(js_name = jointAngle)]
    #[must_use]
    pub fn joint_angle(&self, index: usize) -> Option<f64> {
        self.core.joints().get(index).map(|j| j.angle)
    }

    /// Link endpoints as a flat `[x0, y0, x1, y1, ...]` array in model space.
    #[must_use]
    pub fn positions(&self) -> Float64Array {
        Float64Array::from(flatten(&self.core.positions()).as_slice())
    }

    /// Workspace boundary samples as a flat array in model space.
    #[must_use]
    pub fn workspace(&self, samples: u32) -> Float64Array {
        Float64Array::from(flatten(&self.core.workspace(samples)).as_slice())
    }

    /// Draw the current state if it changed since the last frame.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a canvas call fails.
    pub fn render(&mut self) -> Result<bool, JsValue> {
        let mut surface = Canvas2dSurface::new(&self.ctx);
        self.core.render(&mut surface)
    }
}
