//! Error type and configuration builders shared by scenario tests.

use cake_types::{
    CakeConfiguration, CakeShape, CakeSize, Color, DecorationSelection, MaterialSpec,
};
use style_registry::{coating, flavor_material, NO_COATING};

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("unknown coating id: {id}")]
    UnknownCoating { id: String },
}

/// A strawberry 1kg round cake with no decorations — the baseline most
/// scenarios start from.
pub fn plain_config(shape: CakeShape) -> CakeConfiguration {
    CakeConfiguration {
        shape,
        size: CakeSize::OneKg,
        flavor: flavor_material(Color::rgb(0xFF, 0x4D, 0x6D)),
        coating: NO_COATING,
        piping_color: None,
        custom_text: "Happy Birthday!".to_string(),
        decoration: DecorationSelection::none(),
    }
}

/// A configuration with every layer decorated.
pub fn decorated_config(shape: CakeShape) -> CakeConfiguration {
    CakeConfiguration {
        decoration: DecorationSelection {
            top: "shell".to_string(),
            side: "beads".to_string(),
            topping: "chocoSprinkles".to_string(),
        },
        ..plain_config(shape)
    }
}

/// Apply a coating from the registry by id.
pub fn with_coating(
    mut config: CakeConfiguration,
    id: &str,
) -> Result<CakeConfiguration, HarnessError> {
    let asset = coating(id).ok_or_else(|| HarnessError::UnknownCoating { id: id.to_string() })?;
    config.coating = asset.material;
    Ok(config)
}

/// Shorthand for a piping override.
pub fn with_piping(mut config: CakeConfiguration, color: Color) -> CakeConfiguration {
    config.piping_color = Some(color);
    config
}

/// Flavor material helper used by configuration builders in tests.
pub fn flavor(r: u8, g: u8, b: u8) -> MaterialSpec {
    flavor_material(Color::rgb(r, g, b))
}
