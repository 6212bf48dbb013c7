use cake_types::CakeSize;

use crate::messages::{EngineToUi, UiToEngine};
use crate::state::{BridgeError, DesignerState, FlavorChoice};
use crate::{snapshot, summary};

/// Dispatch a UI message to the designer engine and return a response.
///
/// This is the main entry point for processing messages from the
/// JavaScript main thread. Every selection change triggers a full
/// recompose; errors are folded into an `Error` response.
pub fn dispatch(state: &mut DesignerState, msg: UiToEngine) -> EngineToUi {
    match handle_message(state, msg) {
        Ok(response) => response,
        Err(e) => EngineToUi::Error {
            message: e.to_string(),
        },
    }
}

fn handle_message(state: &mut DesignerState, msg: UiToEngine) -> Result<EngineToUi, BridgeError> {
    match msg {
        UiToEngine::SetShape { shape } => {
            state.shape = shape;
            Ok(scene_response(state))
        }

        UiToEngine::SetSize { label } => {
            state.size = CakeSize::from_label(&label);
            Ok(scene_response(state))
        }

        UiToEngine::SetFlavor { name, color } => {
            state.flavor = Some(FlavorChoice { name, color });
            Ok(scene_response(state))
        }

        UiToEngine::SetCoating { id } => {
            state.coating_id = id;
            Ok(scene_response(state))
        }

        UiToEngine::SetPipingColor { color } => {
            state.piping_color = color;
            Ok(scene_response(state))
        }

        UiToEngine::SetText { text } => {
            state.custom_text = text;
            Ok(scene_response(state))
        }

        UiToEngine::SetTopDecoration { id } => {
            state.decoration.top = id;
            Ok(scene_response(state))
        }

        UiToEngine::SetSideDecoration { id } => {
            state.decoration.side = id;
            Ok(scene_response(state))
        }

        UiToEngine::SetTopping { id } => {
            state.decoration.topping = id;
            Ok(scene_response(state))
        }

        UiToEngine::TakeSnapshot {
            width,
            height,
            pixels,
        } => {
            let data_url = snapshot::encode_png_data_url(width, height, &pixels)?;
            Ok(EngineToUi::SnapshotReady { data_url })
        }

        UiToEngine::BuildSummary {
            cake_id,
            base_price,
            occasion,
        } => {
            let summary = summary::build_summary(state, cake_id, base_price, occasion)?;
            Ok(EngineToUi::SummaryReady { summary })
        }
    }
}

/// Recompose and report the scene, or which selections are still missing.
fn scene_response(state: &mut DesignerState) -> EngineToUi {
    state.recompose();
    match &state.scene {
        Some(scene) => EngineToUi::SceneUpdated {
            scene: scene.clone(),
        },
        None => EngineToUi::AwaitingSelection {
            missing: state.missing(),
        },
    }
}
