//! Base body construction: a lathe-revolved profile for the round cake, a
//! rounded box for the square one, each over a flat serving board.

use cake_types::{BodyMaterial, CakeConfiguration, CakeShape, Color};
use glam::{Vec2, Vec3};

use crate::types::{Board, BodySolid, CakeBody};

/// Revolved profile of the circular body: flat bottom, straight side,
/// beveled top edge, flat top. Points are (radius, height).
const LATHE_PROFILE: [Vec2; 5] = [
    Vec2::new(0.0, -0.75),
    Vec2::new(2.0, -0.75),
    Vec2::new(2.0, 0.65),
    Vec2::new(1.9, 0.75),
    Vec2::new(0.0, 0.75),
];

const LATHE_SEGMENTS: u32 = 32;

const BOARD_Y: f32 = -0.8;
const BOARD_COLOR: Color = Color::rgb(0xCC, 0xCC, 0xCC);
const BOARD_ROUGHNESS: f32 = 0.8;

/// Build the cake body for a configuration. The solid is keyed solely on
/// the shape; the material resolves coating-over-flavor.
pub fn build_body(config: &CakeConfiguration) -> CakeBody {
    let (solid, board_solid) = match config.shape {
        CakeShape::Circle => (
            BodySolid::Lathe {
                profile: LATHE_PROFILE.to_vec(),
                segments: LATHE_SEGMENTS,
            },
            BodySolid::Cylinder {
                radius: 2.2,
                height: 0.1,
                segments: 32,
            },
        ),
        CakeShape::Square => (
            BodySolid::RoundedBox {
                width: 3.5,
                height: 1.5,
                depth: 3.5,
                bevel: 0.1,
            },
            BodySolid::Box {
                width: 3.8,
                height: 0.1,
                depth: 3.8,
            },
        ),
    };

    CakeBody {
        solid,
        material: BodyMaterial::resolve(&config.flavor, &config.coating),
        board: Board {
            solid: board_solid,
            position: Vec3::new(0.0, BOARD_Y, 0.0),
            color: BOARD_COLOR,
            roughness: BOARD_ROUGHNESS,
        },
    }
}
