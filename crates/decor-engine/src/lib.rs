//! Scene composition for the cake designer.
//!
//! Consumes a complete [`CakeConfiguration`] and produces a [`SceneGraph`]:
//! base body, three decoration layers, and the text label under one
//! uniform scale. Every recomposition regenerates the full decoration set
//! from scratch; nothing is cached between configurations.

pub mod body;
pub mod side;
pub mod top;
pub mod topping;
pub mod types;

use std::f32::consts::FRAC_PI_2;

use cake_types::{CakeConfiguration, CakeShape, Color};
use glam::Vec3;
use rand::Rng;

use crate::types::{SceneGraph, TextLabel};

const LABEL_Y: f32 = 0.76;
const LABEL_FONT_SIZE: f32 = 0.5;

/// Compose the full scene for a configuration.
///
/// The topping layer scatters with the thread RNG; use
/// [`compose_with_rng`] when reproducibility matters. Everything else is a
/// pure function of the configuration.
pub fn compose(config: &CakeConfiguration) -> SceneGraph {
    compose_with_rng(config, &mut rand::rng())
}

/// Compose with an explicit RNG for the topping scatter.
pub fn compose_with_rng<R: Rng + ?Sized>(config: &CakeConfiguration, rng: &mut R) -> SceneGraph {
    let piping = config.effective_piping_color();
    SceneGraph {
        scale: config.size.scale_factor(),
        body: body::build_body(config),
        label: build_label(config),
        top: top::build_top(&config.decoration.top, config.shape, piping),
        side: side::build_side(&config.decoration.side, config.shape, piping),
        topping: topping::build_topping(rng, &config.decoration.topping, config.shape),
    }
}

fn build_label(config: &CakeConfiguration) -> TextLabel {
    let max_width = match config.shape {
        CakeShape::Circle => 3.5,
        CakeShape::Square => 3.0,
    };
    TextLabel {
        text: config.custom_text.clone(),
        position: Vec3::new(0.0, LABEL_Y, 0.0),
        rotation: Vec3::new(-FRAC_PI_2, 0.0, 0.0),
        font_size: LABEL_FONT_SIZE,
        color: Color::WHITE,
        max_width,
    }
}
