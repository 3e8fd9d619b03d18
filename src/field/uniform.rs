use glam::Vec3;

use super::point_cloud::PointCloud;
use super::random::RandomSource;

/// Edge length actually used: the magnitude of `spread`, or zero when it is not finite
fn effective_spread(spread: f32) -> f32 {
    if spread.is_finite() {
        spread.abs()
    } else {
        0.0
    }
}

/// Scatter `count` points uniformly inside a cube of edge `spread` centered on the origin
///
/// A negative spread behaves like its magnitude; NaN or infinite spreads put
/// every point at the origin.
pub fn generate_uniform_field(count: usize, spread: f32, rng: &mut dyn RandomSource) -> PointCloud {
    let spread = effective_spread(spread);
    let mut sample = || (rng.next_f32() - 0.5) * spread;

    let positions = (0..count)
        .map(|_| {
            let x = sample();
            let y = sample();
            let z = sample();
            Vec3::new(x, y, z)
        })
        .collect();

    PointCloud::new(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::random::SequenceRandom;

    #[test]
    fn test_exact_positions_from_sequence() {
        let mut rng = SequenceRandom::new(vec![0.0, 0.5, 0.75]);
        let cloud = generate_uniform_field(2, 10.0, &mut rng);

        assert_eq!(cloud.positions(), &[
            Vec3::new(-5.0, 0.0, 2.5),
            Vec3::new(-5.0, 0.0, 2.5),
        ]);
        assert!(cloud.colors().is_none());
    }

    #[test]
    fn test_zero_count() {
        let mut rng = SequenceRandom::constant(0.3);
        assert!(generate_uniform_field(0, 10.0, &mut rng).is_empty());
    }

    #[test]
    fn test_zero_spread_collapses() {
        let mut rng = SequenceRandom::new(vec![0.1, 0.9]);
        let cloud = generate_uniform_field(8, 0.0, &mut rng);
        assert!(cloud.positions().iter().all(|p| *p == Vec3::ZERO));
    }

    #[test]
    fn test_negative_spread_uses_magnitude() {
        let mut rng = SequenceRandom::new(vec![0.0, 0.5, 0.75]);
        let cloud = generate_uniform_field(1, -10.0, &mut rng);
        assert_eq!(cloud.positions(), &[Vec3::new(-5.0, 0.0, 2.5)]);
    }
}
