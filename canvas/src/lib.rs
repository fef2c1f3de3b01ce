//! Browser host for the robot-arm view.
//!
//! This crate is compiled to WebAssembly. It owns the arm state the page edits
//! (joint angles, overlay toggles, grid spacing, canvas size), commits each
//! edit as a new immutable state, and redraws the canvas once per committed
//! state through `armviz`'s renderer. The page only wires sliders and
//! checkboxes to [`engine::Engine`] and calls `render` when told to.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Wasm-facing `Engine` and the testable [`engine::EngineCore`] |
//! | [`surface`] | `armviz::Surface` over `CanvasRenderingContext2d` |

pub mod engine;
pub mod surface;

use wasm_bindgen::prelude::*;

/// Install the panic hook and route `log`/`tracing` output to the console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::warn!("console logger already installed");
    }
}
