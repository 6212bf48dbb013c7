//! Primitive template tables for the decoration layers.
//!
//! Each style id maps to a template describing the primitive stamped at
//! every placement anchor, so adding a style never touches placement
//! logic. The drop flower is a cluster template: its element is itself
//! ring-placed around each anchor.

use std::f32::consts::PI;

use cake_types::{Color, PrimitiveShape};
use glam::Vec3;

/// A primitive stamped at each placement anchor.
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveTemplate {
    pub shape: PrimitiveShape,
    /// Base Euler rotation applied to every instance.
    pub rotation: Vec3,
    /// Fixed color that ignores the piping color (the leaf stays green;
    /// sprinkle colors are per-style).
    pub color_override: Option<Color>,
}

/// A decoration style resolved to placement instructions.
#[derive(Debug, Clone, Copy)]
pub enum DecorTemplate {
    /// One primitive per anchor.
    Single(PrimitiveTemplate),
    /// A ringed sub-arrangement per anchor.
    Cluster {
        element: PrimitiveTemplate,
        count: usize,
        radius: f32,
    },
}

/// The leaf border keeps its own color under any piping color.
pub const LEAF_GREEN: Color = Color::rgb(0x2E, 0x8B, 0x57);

const CHOCO_BROWN: Color = Color::rgb(0x3C, 0x2F, 0x2F);
const PINEAPPLE_YELLOW: Color = Color::rgb(0xF9, 0xE7, 0x9F);

const fn single(shape: PrimitiveShape, rotation: Vec3, color_override: Option<Color>) -> DecorTemplate {
    DecorTemplate::Single(PrimitiveTemplate {
        shape,
        rotation,
        color_override,
    })
}

pub static TOP_TEMPLATES: &[(&str, DecorTemplate)] = &[
    (
        "shell",
        single(
            PrimitiveShape::Cone { radius: 0.2, height: 0.3, radial_segments: 8 },
            Vec3::new(PI, 0.0, 0.0),
            None,
        ),
    ),
    (
        "rosette",
        single(
            PrimitiveShape::Torus { radius: 0.15, tube: 0.1, radial_segments: 8, tubular_segments: 16 },
            Vec3::new(PI / 2.0, 0.0, 0.0),
            None,
        ),
    ),
    (
        "dots",
        single(
            PrimitiveShape::Sphere { radius: 0.15, width_segments: 16, height_segments: 16 },
            Vec3::ZERO,
            None,
        ),
    ),
    (
        "leaf",
        single(
            PrimitiveShape::Cone { radius: 0.1, height: 0.4, radial_segments: 8 },
            Vec3::new(PI / 1.5, 0.0, 0.0),
            Some(LEAF_GREEN),
        ),
    ),
    (
        "flower",
        DecorTemplate::Cluster {
            element: PrimitiveTemplate {
                shape: PrimitiveShape::Sphere { radius: 0.08, width_segments: 8, height_segments: 8 },
                rotation: Vec3::ZERO,
                color_override: None,
            },
            count: 5,
            radius: 0.1,
        },
    ),
];

pub static SIDE_TEMPLATES: &[(&str, DecorTemplate)] = &[
    (
        "shell",
        single(
            PrimitiveShape::Cone { radius: 0.15, height: 0.2, radial_segments: 8 },
            Vec3::ZERO,
            None,
        ),
    ),
    (
        "beads",
        single(
            PrimitiveShape::Sphere { radius: 0.12, width_segments: 16, height_segments: 16 },
            Vec3::ZERO,
            None,
        ),
    ),
];

pub static TOPPING_TEMPLATES: &[(&str, DecorTemplate)] = &[
    (
        "chocoSprinkles",
        single(
            PrimitiveShape::Sphere { radius: 0.03, width_segments: 8, height_segments: 8 },
            Vec3::ZERO,
            Some(CHOCO_BROWN),
        ),
    ),
    (
        "pineSprinkles",
        single(
            PrimitiveShape::Sphere { radius: 0.03, width_segments: 8, height_segments: 8 },
            Vec3::ZERO,
            Some(PINEAPPLE_YELLOW),
        ),
    ),
];

fn find(table: &'static [(&str, DecorTemplate)], id: &str) -> Option<&'static DecorTemplate> {
    table.iter().find(|(key, _)| *key == id).map(|(_, template)| template)
}

pub fn top_template(id: &str) -> Option<&'static DecorTemplate> {
    find(TOP_TEMPLATES, id)
}

pub fn side_template(id: &str) -> Option<&'static DecorTemplate> {
    find(SIDE_TEMPLATES, id)
}

pub fn topping_template(id: &str) -> Option<&'static DecorTemplate> {
    find(TOPPING_TEMPLATES, id)
}
