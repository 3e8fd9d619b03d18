use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::animation::{AnimatedTransform, FloatMotion, RotationRates};
use crate::field::PointCloud;
use crate::math::Color;

/// Size-attenuated round sprites
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMaterial {
    /// Used when the cloud carries no per-point colors
    pub color: Color,
    /// World-space diameter
    pub size: f32,
    pub opacity: f32,
}

/// Matte surface, shaded by ambient plus Lambert diffuse
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceMaterial {
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Points {
        cloud: PointCloud,
        material: PointMaterial,
    },
    Sphere {
        radius: f32,
        material: SurfaceMaterial,
    },
}

impl Geometry {
    pub fn point_count(&self) -> usize {
        match self {
            Geometry::Points { cloud, .. } => cloud.len(),
            Geometry::Sphere { .. } => 0,
        }
    }
}

fn euler(angles: Vec3) -> Quat {
    Quat::from_euler(EulerRot::XYZ, angles.x, angles.y, angles.z)
}

/// One renderable in the backdrop
///
/// The world matrix nests, outermost first: floating offset, placement
/// (`position` then `tilt`), then the animated spin.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: &'static str,
    pub geometry: Geometry,
    pub position: Vec3,
    pub tilt: Vec3,
    pub transform: AnimatedTransform,
    pub rates: RotationRates,
    pub float: Option<FloatMotion>,
}

impl SceneObject {
    pub fn new(name: &'static str, geometry: Geometry) -> Self {
        Self {
            name,
            geometry,
            position: Vec3::ZERO,
            tilt: Vec3::ZERO,
            transform: AnimatedTransform::new(),
            rates: RotationRates::default(),
            float: None,
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn tilted(mut self, tilt: Vec3) -> Self {
        self.tilt = tilt;
        self
    }

    pub fn spinning(mut self, rates: RotationRates) -> Self {
        self.rates = rates;
        self
    }

    pub fn floating(mut self, motion: FloatMotion) -> Self {
        self.float = Some(motion);
        self
    }

    pub fn advance(&mut self, delta: f32) {
        self.transform.advance(delta, &self.rates);
        if let Some(motion) = self.float.as_mut() {
            motion.advance(delta);
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        let pose = self.float.map(|m| m.pose()).unwrap_or_default();

        Mat4::from_rotation_translation(euler(pose.rotation), pose.offset)
            * Mat4::from_rotation_translation(euler(self.tilt), self.position)
            * Mat4::from_quat(euler(self.transform.angles))
    }

    /// World position of the object's local origin
    pub fn world_origin(&self) -> Vec3 {
        self.model_matrix().transform_point3(Vec3::ZERO)
    }
}
