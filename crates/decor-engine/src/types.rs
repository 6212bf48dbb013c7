use cake_types::{BodyMaterial, Color, PlacedPrimitive};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// A body solid, ready for the viewer to instantiate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BodySolid {
    /// A 2D profile revolved 360° around the vertical axis.
    Lathe { profile: Vec<Vec2>, segments: u32 },
    /// A beveled-edge box.
    RoundedBox {
        width: f32,
        height: f32,
        depth: f32,
        bevel: f32,
    },
    Cylinder {
        radius: f32,
        height: f32,
        segments: u32,
    },
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
}

/// The flat board the cake sits on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub solid: BodySolid,
    pub position: Vec3,
    pub color: Color,
    pub roughness: f32,
}

/// The cake's core solid plus its serving board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CakeBody {
    pub solid: BodySolid,
    pub material: BodyMaterial,
    pub board: Board,
}

/// The top-center text label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLabel {
    pub text: String,
    pub position: Vec3,
    /// Euler XYZ rotation in radians; the label lies flat on the top.
    pub rotation: Vec3,
    pub font_size: f32,
    pub color: Color,
    /// Wrap width, wider on the round cake's diagonal.
    pub max_width: f32,
}

/// The composed scene: everything the viewer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneGraph {
    /// Uniform scale applied to the whole group, from the size selection.
    pub scale: f32,
    pub body: CakeBody,
    pub label: TextLabel,
    pub top: Vec<PlacedPrimitive>,
    pub side: Vec<PlacedPrimitive>,
    pub topping: Vec<PlacedPrimitive>,
}
