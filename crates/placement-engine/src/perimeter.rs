use glam::Vec3;

/// Which side of the square an outline point sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Front,
    Back,
    Right,
    Left,
}

/// A point on the square outline, tagged with its edge so builders can
/// orient elements per side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgePoint {
    pub position: Vec3,
    pub edge: Edge,
}

/// Place `per_side` points along each edge of a square outline of length
/// `side`, at height `y`.
///
/// Front and back rows span the full edge including corners; left and
/// right columns cover the interior only, so corners are never
/// double-populated. `per_side == 1` places the lone point at the edge
/// midpoint instead of normalizing by `per_side - 1`. Output order is
/// deterministic: per step front, back, then interior right and left.
pub fn square_outline(per_side: usize, side: f32, y: f32) -> Vec<EdgePoint> {
    let half = side / 2.0;
    let mut points = Vec::new();
    for i in 0..per_side {
        let t = if per_side == 1 {
            0.5
        } else {
            i as f32 / (per_side - 1) as f32
        };
        let p = t * side - half;
        points.push(EdgePoint {
            position: Vec3::new(p, y, half),
            edge: Edge::Front,
        });
        points.push(EdgePoint {
            position: Vec3::new(p, y, -half),
            edge: Edge::Back,
        });
        if i > 0 && i + 1 < per_side {
            points.push(EdgePoint {
                position: Vec3::new(half, y, p),
                edge: Edge::Right,
            });
            points.push(EdgePoint {
                position: Vec3::new(-half, y, p),
                edge: Edge::Left,
            });
        }
    }
    points
}
