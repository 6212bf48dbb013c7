use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Visual material properties resolved from a flavor or coating selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// Surface color. `None` means the selection does not dictate a color
    /// (the "none" coating) and the flavor shows through.
    pub color: Option<Color>,
    pub roughness: f32,
    /// Clearcoat intensity for glazed finishes.
    pub clearcoat: Option<f32>,
}

/// The resolved appearance of the cake body.
///
/// Metalness is always zero: cakes must never look metallic, whichever
/// material the appearance came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMaterial {
    pub color: Color,
    pub roughness: f32,
    pub clearcoat: Option<f32>,
    pub metalness: f32,
}

impl BodyMaterial {
    /// Resolve the body appearance: a coating with a color overrides the
    /// flavor. Callers pass a resolved flavor (color set); white is a
    /// backstop, not a reachable state in the designer flow.
    pub fn resolve(flavor: &MaterialSpec, coating: &MaterialSpec) -> Self {
        let source = if coating.color.is_some() { coating } else { flavor };
        Self {
            color: source.color.unwrap_or(Color::WHITE),
            roughness: source.roughness,
            clearcoat: source.clearcoat,
            metalness: 0.0,
        }
    }
}
