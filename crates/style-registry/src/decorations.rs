//! Decoration style display tables and pricing.

/// Display metadata for a decoration style.
#[derive(Debug, Clone, Copy)]
pub struct StyleInfo {
    pub id: &'static str,
    pub name: &'static str,
}

pub static TOP_STYLES: &[StyleInfo] = &[
    StyleInfo { id: "none", name: "None" },
    StyleInfo { id: "shell", name: "Shell Border" },
    StyleInfo { id: "rosette", name: "Rosettes" },
    StyleInfo { id: "dots", name: "Dotted Border" },
    StyleInfo { id: "flower", name: "Drop Flowers" },
    StyleInfo { id: "leaf", name: "Leaf Border" },
];

pub static SIDE_STYLES: &[StyleInfo] = &[
    StyleInfo { id: "none", name: "None" },
    StyleInfo { id: "shell", name: "Bottom Shells" },
    StyleInfo { id: "beads", name: "Bead Border" },
];

pub static TOPPING_STYLES: &[StyleInfo] = &[
    StyleInfo { id: "none", name: "None" },
    StyleInfo { id: "chocoSprinkles", name: "Choco Sprinkles" },
    StyleInfo { id: "pineSprinkles", name: "Pineapple Sprinkles" },
];

/// Price added when the layer is decorated (style known and not "none").
pub const TOP_DECORATION_PRICE: f64 = 3.0;
pub const SIDE_DECORATION_PRICE: f64 = 4.0;
pub const TOPPING_PRICE: f64 = 2.0;

fn find(table: &'static [StyleInfo], id: &str) -> Option<&'static StyleInfo> {
    table.iter().find(|s| s.id == id)
}

pub fn top_style(id: &str) -> Option<&'static StyleInfo> {
    find(TOP_STYLES, id)
}

pub fn side_style(id: &str) -> Option<&'static StyleInfo> {
    find(SIDE_STYLES, id)
}

pub fn topping_style(id: &str) -> Option<&'static StyleInfo> {
    find(TOPPING_STYLES, id)
}
