use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::material::MaterialSpec;

/// The cake's base footprint. Determines which placement algorithm and
/// which body geometry apply everywhere downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CakeShape {
    Circle,
    Square,
}

/// Order size, mapped to a uniform scene scale and a price modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CakeSize {
    Half,
    #[default]
    OneKg,
    TwoKg,
}

impl CakeSize {
    /// Parse a UI size label. Unrecognized labels fall back to `OneKg`
    /// (scale 1.0). The half-kilo label carries a fraction glyph, so a
    /// couple of ASCII spellings are accepted as well.
    pub fn from_label(label: &str) -> CakeSize {
        match label {
            "\u{00bd} kg" | "1/2 kg" | "half" => CakeSize::Half,
            "2kg" => CakeSize::TwoKg,
            _ => CakeSize::OneKg,
        }
    }

    /// The uniform scale applied to the composed scene.
    pub fn scale_factor(self) -> f32 {
        match self {
            CakeSize::Half => 0.7,
            CakeSize::OneKg => 1.0,
            CakeSize::TwoKg => 1.3,
        }
    }

    /// Price added on top of the cake's base price.
    pub fn price_modifier(self) -> f64 {
        match self {
            CakeSize::Half => 0.0,
            CakeSize::OneKg => 10.0,
            CakeSize::TwoKg => 20.0,
        }
    }

    /// The label the UI displays for this size.
    pub fn label(self) -> &'static str {
        match self {
            CakeSize::Half => "\u{00bd} kg",
            CakeSize::OneKg => "1kg",
            CakeSize::TwoKg => "2kg",
        }
    }
}

/// The three independent decoration selections.
///
/// `"none"` renders nothing for that layer; ids the registries don't know
/// are treated the same way, never as errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecorationSelection {
    pub top: String,
    pub side: String,
    pub topping: String,
}

impl DecorationSelection {
    pub fn none() -> Self {
        Self {
            top: "none".to_string(),
            side: "none".to_string(),
            topping: "none".to_string(),
        }
    }
}

impl Default for DecorationSelection {
    fn default() -> Self {
        Self::none()
    }
}

/// The complete input to the scene composer.
///
/// Built fresh from the designer state on every change and consumed once;
/// nothing here survives the editing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CakeConfiguration {
    pub shape: CakeShape,
    pub size: CakeSize,
    /// Resolved flavor material. The designer bridge does not compose
    /// until a flavor is resolved, so the color is set in practice.
    pub flavor: MaterialSpec,
    /// Coating material; a color of `None` means "no coating" and the
    /// flavor shows through on the body.
    pub coating: MaterialSpec,
    /// Explicit piping color, if the user picked one.
    pub piping_color: Option<Color>,
    pub custom_text: String,
    pub decoration: DecorationSelection,
}

impl CakeConfiguration {
    /// Effective piping color: explicit choice, else the flavor color,
    /// else white.
    pub fn effective_piping_color(&self) -> Color {
        self.piping_color.or(self.flavor.color).unwrap_or(Color::WHITE)
    }
}
