//! Side decoration layer: borders around the cake's base.

use std::f32::consts::{FRAC_PI_2, PI};

use cake_types::{CakeShape, Color, PlacedPrimitive};
use glam::Vec3;
use placement_engine::{ring, square_outline, Edge};
use style_registry::{side_template, DecorTemplate};

const BASE_Y: f32 = 0.1;

/// Outward lean of the shell border.
const TILT: f32 = PI / 2.5;

/// Per-style placement constants.
struct SideLayout {
    circle_count: usize,
    circle_radius: f32,
    per_side: usize,
    side_len: f32,
    /// Shells lean away from the cake's axis; beads sit upright.
    tilted: bool,
}

fn side_layout(style: &str) -> Option<SideLayout> {
    match style {
        "shell" => Some(SideLayout {
            circle_count: 24,
            circle_radius: 2.05,
            per_side: 8,
            side_len: 3.7,
            tilted: true,
        }),
        "beads" => Some(SideLayout {
            circle_count: 30,
            circle_radius: 2.05,
            per_side: 10,
            side_len: 3.6,
            tilted: false,
        }),
        _ => None,
    }
}

/// Build the side border layer. `"none"` and unknown styles produce an
/// empty layer.
pub fn build_side(style: &str, shape: CakeShape, piping: Color) -> Vec<PlacedPrimitive> {
    if style == "none" {
        return Vec::new();
    }
    let (Some(template), Some(layout)) = (side_template(style), side_layout(style)) else {
        log::debug!("unknown side style {style:?}, rendering nothing");
        return Vec::new();
    };
    let DecorTemplate::Single(element) = *template else {
        return Vec::new();
    };
    let color = element.color_override.unwrap_or(piping);

    match shape {
        CakeShape::Circle => ring(layout.circle_count, layout.circle_radius, BASE_Y)
            .into_iter()
            .map(|point| PlacedPrimitive {
                shape: element.shape,
                color,
                position: point.position,
                rotation: if layout.tilted {
                    Vec3::new(TILT, 0.0, -point.angle)
                } else {
                    element.rotation
                },
            })
            .collect(),
        CakeShape::Square => square_outline(layout.per_side, layout.side_len, BASE_Y)
            .into_iter()
            .map(|point| PlacedPrimitive {
                shape: element.shape,
                color,
                position: point.position,
                rotation: if layout.tilted {
                    Vec3::new(TILT, 0.0, edge_roll(point.edge))
                } else {
                    element.rotation
                },
            })
            .collect(),
    }
}

/// Roll that points a tilted element away from its edge.
fn edge_roll(edge: Edge) -> f32 {
    match edge {
        Edge::Front | Edge::Back => 0.0,
        Edge::Right => FRAC_PI_2,
        Edge::Left => -FRAC_PI_2,
    }
}
