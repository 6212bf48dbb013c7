use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// A render primitive with its dimensions. Variants mirror the geometry
/// constructors the viewer instantiates, so the scene graph serializes
/// straight into `<coneGeometry args={...}>` and friends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum PrimitiveShape {
    Cone {
        radius: f32,
        height: f32,
        radial_segments: u32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
}

/// A single placed decoration element.
///
/// The atomic output of every layer builder; the scene composer only
/// aggregates these and never inspects style identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedPrimitive {
    pub shape: PrimitiveShape,
    pub color: Color,
    pub position: Vec3,
    /// Euler XYZ rotation in radians.
    pub rotation: Vec3,
}
