use std::f32::consts::TAU;

use glam::Vec3;

/// A point on a ring, tagged with the angle it was generated at so layer
/// builders can derive outward-facing rotations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingPoint {
    pub position: Vec3,
    pub angle: f32,
}

/// Place `count` points evenly around a circle of `radius` at height `y`.
///
/// The i-th point sits at angle `i/count · 2π`, starting on +X and winding
/// toward +Z. Deterministic: the same inputs always produce the same
/// sequence. `count == 0` yields an empty layout.
pub fn ring(count: usize, radius: f32, y: f32) -> Vec<RingPoint> {
    let mut points = Vec::with_capacity(count);
    for i in 0..count {
        let angle = (i as f32 / count as f32) * TAU;
        points.push(RingPoint {
            position: Vec3::new(angle.cos() * radius, y, angle.sin() * radius),
            angle,
        });
    }
    points
}
