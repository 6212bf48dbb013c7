//! Rich assertion helpers with diagnostic output.
//!
//! Every failure names the offending element and the expected vs actual
//! values, so a scenario failure is debuggable from its message alone.

use cake_types::{Color, PlacedPrimitive};
use glam::Vec3;

use crate::helpers::HarnessError;

/// Assert an exact primitive count.
pub fn assert_count(
    layer: &[PlacedPrimitive],
    expected: usize,
    ctx: &str,
) -> Result<(), HarnessError> {
    if layer.len() == expected {
        Ok(())
    } else {
        Err(HarnessError::AssertionFailed {
            detail: format!("[{}] expected {} primitives, got {}", ctx, expected, layer.len()),
        })
    }
}

/// Assert every primitive carries the given color.
pub fn assert_all_color(
    layer: &[PlacedPrimitive],
    expected: Color,
    ctx: &str,
) -> Result<(), HarnessError> {
    for (i, primitive) in layer.iter().enumerate() {
        if primitive.color != expected {
            return Err(HarnessError::AssertionFailed {
                detail: format!(
                    "[{}] primitive {} colored {}, expected {}",
                    ctx, i, primitive.color, expected,
                ),
            });
        }
    }
    Ok(())
}

/// Assert every primitive sits at the given distance from the vertical
/// axis, within tolerance.
pub fn assert_ring_radius(
    layer: &[PlacedPrimitive],
    radius: f32,
    tol: f32,
    ctx: &str,
) -> Result<(), HarnessError> {
    for (i, primitive) in layer.iter().enumerate() {
        let r = (primitive.position.x.powi(2) + primitive.position.z.powi(2)).sqrt();
        if (r - radius).abs() > tol {
            return Err(HarnessError::AssertionFailed {
                detail: format!(
                    "[{}] primitive {} at radius {:.4}, expected {:.4} (tol={})",
                    ctx, i, r, radius, tol,
                ),
            });
        }
    }
    Ok(())
}

/// Assert consecutive primitives are separated by a constant angle.
pub fn assert_angular_spacing(
    layer: &[PlacedPrimitive],
    expected_delta: f32,
    tol: f32,
    ctx: &str,
) -> Result<(), HarnessError> {
    for (i, pair) in layer.windows(2).enumerate() {
        let a = pair[0].position.z.atan2(pair[0].position.x);
        let b = pair[1].position.z.atan2(pair[1].position.x);
        let mut delta = b - a;
        if delta < 0.0 {
            delta += std::f32::consts::TAU;
        }
        if (delta - expected_delta).abs() > tol {
            return Err(HarnessError::AssertionFailed {
                detail: format!(
                    "[{}] spacing between {} and {} is {:.4}, expected {:.4}",
                    ctx,
                    i,
                    i + 1,
                    delta,
                    expected_delta,
                ),
            });
        }
    }
    Ok(())
}

/// Assert no two positions coincide.
pub fn assert_no_duplicate_positions(
    positions: &[Vec3],
    tol: f32,
    ctx: &str,
) -> Result<(), HarnessError> {
    for (i, a) in positions.iter().enumerate() {
        for (j, b) in positions.iter().enumerate().skip(i + 1) {
            if a.distance(*b) <= tol {
                return Err(HarnessError::AssertionFailed {
                    detail: format!("[{}] positions {} and {} coincide at {:?}", ctx, i, j, a),
                });
            }
        }
    }
    Ok(())
}

/// Assert the fraction of disk samples inside half the radius is close to
/// the uniform-area expectation of 25%. Naive polar sampling concentrates
/// half the samples there and fails this check.
pub fn assert_uniform_disk_density(
    positions: &[Vec3],
    max_radius: f32,
    ctx: &str,
) -> Result<(), HarnessError> {
    let inner = positions
        .iter()
        .filter(|p| (p.x.powi(2) + p.z.powi(2)).sqrt() < max_radius / 2.0)
        .count();
    let fraction = inner as f64 / positions.len() as f64;
    // ~5 sigma around 0.25 for 1000 samples.
    if !(0.18..=0.32).contains(&fraction) {
        return Err(HarnessError::AssertionFailed {
            detail: format!(
                "[{}] {:.1}% of samples inside half radius, expected ~25% of a uniform disk",
                ctx,
                fraction * 100.0,
            ),
        });
    }
    Ok(())
}
