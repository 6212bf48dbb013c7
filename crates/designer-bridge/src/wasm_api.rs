//! WASM entry points for the designer web worker.
//!
//! This module is only compiled for the `wasm32` target. It provides the
//! `#[wasm_bindgen]` functions that JavaScript calls from the web worker.

use wasm_bindgen::prelude::*;

use crate::dispatch;
use crate::messages::{EngineToUi, UiToEngine};
use crate::state::DesignerState;

// Global designer state — single-threaded in the web worker.
thread_local! {
    static DESIGNER_STATE: std::cell::RefCell<Option<DesignerState>> =
        std::cell::RefCell::new(None);
}

/// Initialize the designer engine. Must be called once before any other
/// function. Sets up panic hooks for better error messages.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();

    DESIGNER_STATE.with(|cell| {
        *cell.borrow_mut() = Some(DesignerState::new());
    });
}

/// Process a JSON message from the UI and return a JSON response.
///
/// The input should be a JSON-serialized `UiToEngine` message; the result
/// is a JSON-serialized `EngineToUi` response.
#[wasm_bindgen]
pub fn process_message(json_input: &str) -> String {
    let response = DESIGNER_STATE.with(|cell| {
        let mut state = cell.borrow_mut();
        let state = state
            .as_mut()
            .expect("Designer not initialized. Call init() first.");

        let msg: UiToEngine = match serde_json::from_str(json_input) {
            Ok(msg) => msg,
            Err(e) => {
                return EngineToUi::Error {
                    message: format!("Failed to parse message: {}", e),
                };
            }
        };

        dispatch::dispatch(state, msg)
    });

    serde_json::to_string(&response).unwrap_or_else(|e| {
        format!(r#"{{"type":"Error","message":"Serialization failed: {}"}}"#, e)
    })
}

/// Get the current scene graph as JSON, or `null` while required
/// selections are missing. Lets the UI re-query without replaying a
/// command.
#[wasm_bindgen]
pub fn get_scene() -> String {
    DESIGNER_STATE.with(|cell| {
        let state = cell.borrow();
        let state = state.as_ref().expect("Designer not initialized.");
        match &state.scene {
            Some(scene) => serde_json::to_string(scene).unwrap_or_default(),
            None => "null".to_string(),
        }
    })
}
