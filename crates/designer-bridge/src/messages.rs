use serde::{Deserialize, Serialize};

use cake_types::{CakeShape, Color};
use decor_engine::types::SceneGraph;

use crate::summary::OrderSummary;

/// Messages from the designer UI (JavaScript main thread) to the engine.
/// Serialized as JSON for postMessage transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiToEngine {
    SetShape {
        shape: CakeShape,
    },
    /// Size arrives as the UI label ("½ kg", "1kg", "2kg").
    SetSize {
        label: String,
    },
    /// Select a flavor from the shop's catalog.
    SetFlavor {
        name: String,
        color: Color,
    },
    SetCoating {
        id: String,
    },
    /// Explicit piping color; `None` reverts to the flavor-color fallback.
    SetPipingColor {
        color: Option<Color>,
    },
    SetText {
        text: String,
    },
    SetTopDecoration {
        id: String,
    },
    SetSideDecoration {
        id: String,
    },
    SetTopping {
        id: String,
    },
    /// Encode the committed RGBA frame for the order record. Must be sent
    /// after the viewer has rendered the current scene, never while a
    /// configuration change is in flight.
    TakeSnapshot {
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    },
    /// Flatten the current design into an order summary.
    BuildSummary {
        cake_id: i64,
        base_price: f64,
        occasion: String,
    },
}

/// Messages from the engine back to the designer UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EngineToUi {
    /// The scene has been recomposed.
    SceneUpdated { scene: SceneGraph },

    /// No scene yet: required selections are still missing.
    AwaitingSelection { missing: Vec<String> },

    /// Snapshot encoded as a `data:image/png;base64,…` URL.
    SnapshotReady { data_url: String },

    SummaryReady { summary: OrderSummary },

    Error { message: String },
}
