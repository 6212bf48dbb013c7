//! Top decoration layer: piping along the top rim.

use cake_types::{CakeShape, Color, PlacedPrimitive};
use glam::Vec3;
use placement_engine::{ring, square_outline};
use style_registry::{top_template, DecorTemplate, PrimitiveTemplate};

const RIM_Y: f32 = 0.75;
const CIRCLE_COUNT: usize = 16;
const CIRCLE_RADIUS: f32 = 1.7;
const SQUARE_PER_SIDE: usize = 5;
const SQUARE_SIDE: f32 = 2.9;

/// Build the top piping layer. `"none"` and unknown styles produce an
/// empty layer without touching the placement engine.
pub fn build_top(style: &str, shape: CakeShape, piping: Color) -> Vec<PlacedPrimitive> {
    if style == "none" {
        return Vec::new();
    }
    let Some(template) = top_template(style) else {
        log::debug!("unknown top style {style:?}, rendering nothing");
        return Vec::new();
    };

    let anchors: Vec<Vec3> = match shape {
        CakeShape::Circle => ring(CIRCLE_COUNT, CIRCLE_RADIUS, RIM_Y)
            .into_iter()
            .map(|p| p.position)
            .collect(),
        CakeShape::Square => square_outline(SQUARE_PER_SIDE, SQUARE_SIDE, RIM_Y)
            .into_iter()
            .map(|p| p.position)
            .collect(),
    };

    expand(*template, &anchors, piping)
}

/// Stamp a template at each anchor. Clusters ring their element around the
/// anchor instead of placing a single primitive.
fn expand(template: DecorTemplate, anchors: &[Vec3], piping: Color) -> Vec<PlacedPrimitive> {
    match template {
        DecorTemplate::Single(element) => anchors
            .iter()
            .map(|&anchor| place(element, anchor, piping))
            .collect(),
        DecorTemplate::Cluster {
            element,
            count,
            radius,
        } => anchors
            .iter()
            .flat_map(|&anchor| {
                ring(count, radius, 0.0)
                    .into_iter()
                    .map(move |petal| place(element, anchor + petal.position, piping))
            })
            .collect(),
    }
}

fn place(element: PrimitiveTemplate, position: Vec3, piping: Color) -> PlacedPrimitive {
    PlacedPrimitive {
        shape: element.shape,
        color: element.color_override.unwrap_or(piping),
        position,
        rotation: element.rotation,
    }
}
