//! Statistical checks on the topping scatter. Positions are random by
//! design, so these tests verify coverage, not coordinates.

use cake_types::CakeShape;
use decor_engine::topping::build_topping;
use placement_engine::scatter_disk;
use rand::rngs::StdRng;
use rand::SeedableRng;
use test_harness::assert_uniform_disk_density;

#[test]
fn disk_scatter_is_uniform_over_the_area() {
    // 1000-sample Monte Carlo: with sqrt-area sampling ~25% of points land
    // inside half the radius; naive polar sampling puts ~50% there.
    let mut rng = StdRng::seed_from_u64(42);
    let samples = scatter_disk(&mut rng, 1000, 1.8, 0.76);
    assert_uniform_disk_density(&samples, 1.8, "disk scatter").unwrap();
}

#[test]
fn naive_polar_sampling_would_fail_the_density_check() {
    use rand::Rng;
    use std::f32::consts::TAU;

    let mut rng = StdRng::seed_from_u64(42);
    let naive: Vec<glam::Vec3> = (0..1000)
        .map(|_| {
            let angle = rng.random_range(0.0f32..TAU);
            let radius = rng.random_range(0.0f32..1.0) * 1.8;
            glam::Vec3::new(angle.cos() * radius, 0.76, angle.sin() * radius)
        })
        .collect();
    assert!(assert_uniform_disk_density(&naive, 1.8, "naive scatter").is_err());
}

#[test]
fn topping_layer_covers_the_disk_uniformly() {
    let mut rng = StdRng::seed_from_u64(7);
    // Pool several layers to reach a 1050-sample check.
    let mut positions = Vec::new();
    for _ in 0..7 {
        positions.extend(
            build_topping(&mut rng, "chocoSprinkles", CakeShape::Circle)
                .into_iter()
                .map(|p| p.position),
        );
    }
    assert_uniform_disk_density(&positions, 1.8, "topping layer").unwrap();
}

#[test]
fn square_scatter_fills_all_four_quadrants() {
    let mut rng = StdRng::seed_from_u64(9);
    let layer = build_topping(&mut rng, "pineSprinkles", CakeShape::Square);
    let quadrant_counts = layer.iter().fold([0usize; 4], |mut counts, p| {
        let idx = match (p.position.x >= 0.0, p.position.z >= 0.0) {
            (true, true) => 0,
            (true, false) => 1,
            (false, true) => 2,
            (false, false) => 3,
        };
        counts[idx] += 1;
        counts
    });
    for (i, count) in quadrant_counts.iter().enumerate() {
        assert!(
            *count > 15,
            "quadrant {i} holds only {count} of 150 sprinkles",
        );
    }
}
