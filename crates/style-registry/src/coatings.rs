//! Coating and flavor material tables.

use cake_types::{Color, MaterialSpec};

/// A coating finish: display metadata plus the material it applies.
#[derive(Debug, Clone, Copy)]
pub struct CoatingAsset {
    pub id: &'static str,
    pub name: &'static str,
    pub material: MaterialSpec,
}

/// The "no coating" material: no color, the flavor shows through.
pub const NO_COATING: MaterialSpec = MaterialSpec {
    color: None,
    roughness: 0.0,
    clearcoat: None,
};

const fn glaze(r: u8, g: u8, b: u8, roughness: f32, clearcoat: f32) -> MaterialSpec {
    MaterialSpec {
        color: Some(Color::rgb(r, g, b)),
        roughness,
        clearcoat: Some(clearcoat),
    }
}

/// Every coating finish the designer offers.
pub static COATINGS: &[CoatingAsset] = &[
    CoatingAsset {
        id: "none",
        name: "None (Flavor)",
        material: NO_COATING,
    },
    CoatingAsset {
        id: "darkChoco",
        name: "Dark Choco",
        material: glaze(0x3C, 0x2F, 0x2F, 0.1, 0.8),
    },
    CoatingAsset {
        id: "whiteChoco",
        name: "White Choco",
        material: glaze(0xFF, 0xF8, 0xF0, 0.2, 0.5),
    },
    CoatingAsset {
        id: "strawberryGlaze",
        name: "Strawberry Glaze",
        material: glaze(0xFF, 0x4D, 0x6D, 0.1, 0.7),
    },
    CoatingAsset {
        id: "lemonCream",
        name: "Lemon Cream",
        material: glaze(0xFF, 0xFA, 0xCD, 0.4, 0.2),
    },
    CoatingAsset {
        id: "mintGreen",
        name: "Mint Green",
        material: glaze(0x98, 0xFF, 0x98, 0.4, 0.2),
    },
    CoatingAsset {
        id: "blueberry",
        name: "Blueberry",
        material: glaze(0x4F, 0x86, 0xF7, 0.2, 0.5),
    },
];

/// Look up a coating by id.
pub fn coating(id: &str) -> Option<&'static CoatingAsset> {
    COATINGS.iter().find(|c| c.id == id)
}

/// Placeholder flavor material shown before the shop's flavor list loads.
pub const FALLBACK_FLAVOR: MaterialSpec = MaterialSpec {
    color: Some(Color::rgb(0xCC, 0xCC, 0xCC)),
    roughness: 0.8,
    clearcoat: None,
};

/// Resolve a catalog flavor color into its body material. All flavors
/// share the same matte finish.
pub fn flavor_material(color: Color) -> MaterialSpec {
    MaterialSpec {
        color: Some(color),
        roughness: 0.8,
        clearcoat: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_known_coatings() {
        let dark = coating("darkChoco").unwrap();
        assert_eq!(dark.name, "Dark Choco");
        assert_eq!(dark.material.color, Some(Color::rgb(0x3C, 0x2F, 0x2F)));
        assert_eq!(dark.material.clearcoat, Some(0.8));
    }

    #[test]
    fn none_coating_has_no_color() {
        assert_eq!(coating("none").unwrap().material.color, None);
    }

    #[test]
    fn unknown_coating_id_resolves_to_nothing() {
        assert!(coating("goldLeaf").is_none());
        assert!(coating("").is_none());
    }

    #[test]
    fn flavors_share_a_matte_finish() {
        let material = flavor_material(Color::rgb(0xFF, 0x00, 0x00));
        assert_eq!(material.roughness, 0.8);
        assert_eq!(material.clearcoat, None);
    }

    #[test]
    fn fallback_flavor_is_neutral_gray() {
        assert_eq!(FALLBACK_FLAVOR.color, Some(Color::rgb(0xCC, 0xCC, 0xCC)));
        assert_eq!(FALLBACK_FLAVOR.roughness, 0.8);
    }
}
