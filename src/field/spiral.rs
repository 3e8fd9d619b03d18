use std::f32::consts::TAU;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::point_cloud::PointCloud;
use super::random::RandomSource;
use crate::math::ColorGradient;

/// Shape of a spiral galaxy distribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiralParams {
    pub max_radius: f32,
    /// Number of arms; zero is treated as one
    pub branches: u32,
    /// Radians of twist per unit of radius
    pub spin_factor: f32,
    /// Jitter amplitude relative to radius
    pub jitter_scale: f32,
    /// Vertical squash applied to the y jitter (< 1 flattens the disk)
    pub vertical_flatten: f32,
}

impl Default for SpiralParams {
    fn default() -> Self {
        Self {
            max_radius: 1.5,
            branches: 3,
            spin_factor: 5.0,
            jitter_scale: 0.3,
            vertical_flatten: 0.5,
        }
    }
}

impl SpiralParams {
    fn effective_branches(&self) -> u32 {
        self.branches.max(1)
    }

    fn effective_radius(&self) -> f32 {
        if self.max_radius.is_finite() && self.max_radius > 0.0 {
            self.max_radius
        } else {
            0.0
        }
    }
}

/// Angle of the arm that point `i` belongs to; points cycle through the arms in order
fn branch_angle(i: usize, branches: u32) -> f32 {
    (i % branches as usize) as f32 * TAU / branches as f32
}

/// Signed cubic jitter: most samples hug zero, a few reach the full amplitude
fn jitter(rng: &mut dyn RandomSource, amplitude: f32) -> f32 {
    let magnitude = rng.next_f32().powi(3);
    let sign = if rng.next_f32() < 0.5 { 1.0 } else { -1.0 };
    magnitude * sign * amplitude
}

/// Build a colored spiral galaxy of `count` points
///
/// Per point, samples are drawn in a fixed order: radius, then (magnitude, sign)
/// for the x, y and z jitter.
pub fn generate_spiral_field(
    count: usize,
    params: &SpiralParams,
    gradient: &ColorGradient,
    rng: &mut dyn RandomSource,
) -> PointCloud {
    let branches = params.effective_branches();
    let max_radius = params.effective_radius();

    let mut positions = Vec::with_capacity(count);
    let mut colors = Vec::with_capacity(count);

    for i in 0..count {
        let radius = rng.next_f32() * max_radius;
        let spin_angle = radius * params.spin_factor;

        let amplitude = params.jitter_scale * radius;
        let jx = jitter(rng, amplitude);
        let jy = jitter(rng, amplitude);
        let jz = jitter(rng, amplitude);

        let angle = branch_angle(i, branches) + spin_angle;
        positions.push(Vec3::new(
            angle.cos() * radius + jx,
            jy * params.vertical_flatten,
            angle.sin() * radius + jz,
        ));

        let t = if max_radius > 0.0 { radius / max_radius } else { 0.0 };
        colors.push(gradient.interpolate(t));
    }

    PointCloud::with_colors(positions, colors).unwrap_or_else(PointCloud::empty)
}
