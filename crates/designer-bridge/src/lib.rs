pub mod dispatch;
pub mod messages;
pub mod snapshot;
pub mod state;
pub mod summary;

#[cfg(target_arch = "wasm32")]
pub mod wasm_api;

pub use dispatch::dispatch;
pub use messages::{EngineToUi, UiToEngine};
pub use snapshot::SnapshotError;
pub use state::{BridgeError, DesignerState, FlavorChoice};
pub use summary::OrderSummary;
