//! Topping layer: sprinkles scattered over the top surface.
//!
//! Unlike the piping layers this one is non-deterministic per call; the
//! scatter takes an explicit RNG so tests can seed it.

use cake_types::{CakeShape, Color, PlacedPrimitive};
use placement_engine::{scatter_disk, scatter_square};
use rand::Rng;
use style_registry::{topping_template, DecorTemplate};

const SPRINKLE_COUNT: usize = 150;
const SURFACE_Y: f32 = 0.76;
const DISK_RADIUS: f32 = 1.8;
const SQUARE_BOUND: f32 = 1.6;

/// Build the topping layer. Sprinkle colors are per-style constants,
/// independent of the piping color.
pub fn build_topping<R: Rng + ?Sized>(
    rng: &mut R,
    style: &str,
    shape: CakeShape,
) -> Vec<PlacedPrimitive> {
    if style == "none" {
        return Vec::new();
    }
    let Some(template) = topping_template(style) else {
        log::debug!("unknown topping style {style:?}, rendering nothing");
        return Vec::new();
    };
    let DecorTemplate::Single(element) = *template else {
        return Vec::new();
    };

    let positions = match shape {
        CakeShape::Circle => scatter_disk(rng, SPRINKLE_COUNT, DISK_RADIUS, SURFACE_Y),
        CakeShape::Square => scatter_square(rng, SPRINKLE_COUNT, SQUARE_BOUND, SURFACE_Y),
    };

    positions
        .into_iter()
        .map(|position| PlacedPrimitive {
            shape: element.shape,
            color: element.color_override.unwrap_or(Color::WHITE),
            position,
            rotation: element.rotation,
        })
        .collect()
}
