use cake_types::{
    CakeConfiguration, CakeShape, CakeSize, Color, DecorationSelection,
};
use decor_engine::types::SceneGraph;
use style_registry::{coating, flavor_material, NO_COATING};

use crate::snapshot::SnapshotError;

/// A flavor chosen from the shop catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct FlavorChoice {
    pub name: String,
    pub color: Color,
}

/// The designer session state.
///
/// Holds the partial selections the UI has made so far. A scene is only
/// composed once [`DesignerState::configuration`] yields a complete
/// `CakeConfiguration`; the composer itself never sees missing fields.
pub struct DesignerState {
    pub shape: CakeShape,
    pub size: CakeSize,
    /// Unset until the shop's flavor catalog has loaded and one is picked.
    pub flavor: Option<FlavorChoice>,
    pub coating_id: String,
    pub piping_color: Option<Color>,
    pub custom_text: String,
    pub decoration: DecorationSelection,
    /// The last composed scene, if any.
    pub scene: Option<SceneGraph>,
}

impl DesignerState {
    pub fn new() -> Self {
        Self {
            shape: CakeShape::Circle,
            size: CakeSize::OneKg,
            flavor: None,
            coating_id: "none".to_string(),
            piping_color: None,
            custom_text: "Happy Birthday!".to_string(),
            decoration: DecorationSelection::none(),
            scene: None,
        }
    }

    /// Required selections still missing before a scene can be composed.
    /// Shape and size always have defaults; only the flavor gates.
    pub fn missing(&self) -> Vec<String> {
        if self.flavor.is_none() {
            vec!["flavor".to_string()]
        } else {
            Vec::new()
        }
    }

    /// Build the complete configuration, or `None` while selections are
    /// missing. Unknown coating ids resolve to "no coating".
    pub fn configuration(&self) -> Option<CakeConfiguration> {
        let flavor = self.flavor.as_ref()?;
        let coating_material = coating(&self.coating_id)
            .map(|c| c.material)
            .unwrap_or(NO_COATING);
        Some(CakeConfiguration {
            shape: self.shape,
            size: self.size,
            flavor: flavor_material(flavor.color),
            coating: coating_material,
            piping_color: self.piping_color,
            custom_text: self.custom_text.clone(),
            decoration: self.decoration.clone(),
        })
    }

    /// Recompose the scene from the current selections, if complete. The
    /// full decoration set is regenerated from scratch on every call.
    pub fn recompose(&mut self) -> Option<&SceneGraph> {
        match self.configuration() {
            Some(config) => {
                log::debug!(
                    "recomposing scene: shape={:?} size={:?} top={} side={} topping={}",
                    config.shape,
                    config.size,
                    config.decoration.top,
                    config.decoration.side,
                    config.decoration.topping,
                );
                self.scene = Some(decor_engine::compose(&config));
                self.scene.as_ref()
            }
            None => {
                self.scene = None;
                None
            }
        }
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors from the designer bridge layer.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BridgeError {
    #[error("snapshot failed: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("cannot build a summary before a flavor is selected")]
    IncompleteDesign,

    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}
