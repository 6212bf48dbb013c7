use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

/// Scatter `count` points uniformly over a disk of `max_radius` at height
/// `y`.
///
/// The radius is sampled as `sqrt(U) · max_radius` so density is uniform
/// over the area; sampling the radius directly would cluster points at
/// the center.
pub fn scatter_disk<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    max_radius: f32,
    y: f32,
) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let angle = rng.random_range(0.0f32..TAU);
            let radius = rng.random_range(0.0f32..1.0).sqrt() * max_radius;
            Vec3::new(angle.cos() * radius, y, angle.sin() * radius)
        })
        .collect()
}

/// Scatter `count` points with x and z independently uniform in
/// `[-bound, bound]`, at height `y`.
pub fn scatter_square<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    bound: f32,
    y: f32,
) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.random_range(-bound..=bound),
                y,
                rng.random_range(-bound..=bound),
            )
        })
        .collect()
}
