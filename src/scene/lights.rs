use glam::Vec3;

use crate::config::LightingConfig;
use crate::math::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: Color,
    pub intensity: f32,
}

/// Omnidirectional light with a hard cutoff distance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Color,
    pub intensity: f32,
    /// Zero means unlimited range
    pub distance: f32,
}

impl PointLight {
    /// Falls off as `(1 - d / distance)²`, reaching zero at `distance`
    pub fn attenuation(&self, d: f32) -> f32 {
        if self.distance <= 0.0 {
            return 1.0;
        }
        let falloff = (1.0 - d / self.distance).max(0.0);
        falloff * falloff
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub ambient: AmbientLight,
    pub point: PointLight,
}

impl Lighting {
    pub fn from_config(config: &LightingConfig) -> Self {
        Self {
            ambient: AmbientLight {
                color: config.ambient_color,
                intensity: config.ambient_intensity,
            },
            point: PointLight {
                position: Vec3::ZERO,
                color: config.point_color,
                intensity: config.point_intensity,
                distance: config.point_distance,
            },
        }
    }

    /// Lambertian shading of a surface sample
    pub fn shade(&self, albedo: Color, point: Vec3, normal: Vec3) -> Color {
        let ambient = self.ambient.color.scale(self.ambient.intensity);

        let to_light = self.point.position - point;
        let d = to_light.length();
        let diffuse = if d > f32::EPSILON {
            let lambert = normal.dot(to_light / d).max(0.0);
            lambert * self.point.intensity * self.point.attenuation(d)
        } else {
            0.0
        };
        let direct = self.point.color.scale(diffuse);

        Color::new(
            albedo.r * (ambient.r + direct.r),
            albedo.g * (ambient.g + direct.g),
            albedo.b * (ambient.b + direct.b),
        )
    }
}

impl Default for Lighting {
    fn default() -> Self {
        Self::from_config(&LightingConfig::default())
    }
}
