use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Angular velocity per axis, radians per second
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationRates {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationRates {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn is_still(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}

/// Rotation state owned by a single scene object
///
/// Angles grow without bound; wrapping is left to whoever builds matrices.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimatedTransform {
    pub angles: Vec3,
}

impl AnimatedTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_angles(angles: Vec3) -> Self {
        Self { angles }
    }

    pub fn advance(&mut self, delta: f32, rates: &RotationRates) {
        advance(self, delta, rates);
    }
}

/// Accumulate `delta × rate` on every axis with a nonzero rate
pub fn advance(transform: &mut AnimatedTransform, delta: f32, rates: &RotationRates) {
    if rates.x != 0.0 {
        transform.angles.x += delta * rates.x;
    }
    if rates.y != 0.0 {
        transform.angles.y += delta * rates.y;
    }
    if rates.z != 0.0 {
        transform.angles.z += delta * rates.z;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_only_touches_configured_axes() {
        let mut t = AnimatedTransform::with_angles(Vec3::new(1.0, 2.0, 3.0));
        t.advance(2.0, &RotationRates::new(0.0, 0.5, 0.0));
        assert_eq!(t.angles, Vec3::new(1.0, 3.0, 3.0));
    }

    #[test]
    fn angles_are_not_wrapped() {
        let mut t = AnimatedTransform::new();
        for _ in 0..100 {
            t.advance(1.0, &RotationRates::new(1.0, 0.0, 0.0));
        }
        assert!(t.angles.x > std::f32::consts::TAU * 10.0);
    }

    #[test]
    fn negative_rates_decrease_angles() {
        let mut t = AnimatedTransform::new();
        t.advance(20.0, &RotationRates::new(-1.0 / 20.0, -1.0 / 25.0, 0.0));
        assert!((t.angles.x + 1.0).abs() < 1e-6);
        assert!((t.angles.y + 0.8).abs() < 1e-6);
    }

    #[test]
    fn still_rates() {
        assert!(RotationRates::default().is_still());
        assert!(!RotationRates::new(0.0, 0.15, 0.0).is_still());
    }
}
