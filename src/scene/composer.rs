use glam::Vec3;

use super::camera::PerspectiveCamera;
use super::lights::Lighting;
use super::objects::{Geometry, PointMaterial, SceneObject, SurfaceMaterial};
use crate::animation::FloatMotion;
use crate::config::PortfolioConfig;
use crate::core::{DisplayContext, LayerOutput, RenderPipeline};
use crate::field::{generate_spiral_field, generate_uniform_field, RandomSource};
use crate::math::Color;

pub const STARS: &str = "stars";
pub const GALAXY: &str = "galaxy";
pub const MOON: &str = "moon";

/// The animated 3D backdrop: particle fields, a floating moon, lights and a camera
///
/// Point buffers are generated once in [`SceneComposer::compose`]; frames only
/// move transforms.
#[derive(Debug, Clone)]
pub struct SceneComposer {
    camera: PerspectiveCamera,
    lighting: Lighting,
    background: Color,
    objects: Vec<SceneObject>,
    /// Object the point light rides along with
    light_anchor: Option<usize>,
    elapsed: f32,
}

impl SceneComposer {
    pub fn new(camera: PerspectiveCamera, lighting: Lighting, background: Color) -> Self {
        Self {
            camera,
            lighting,
            background,
            objects: Vec::new(),
            light_anchor: None,
            elapsed: 0.0,
        }
    }

    /// Build the standard backdrop from `config`
    pub fn compose(config: &PortfolioConfig, rng: &mut dyn RandomSource) -> Self {
        let mut scene = Self::new(
            PerspectiveCamera::from_config(&config.camera),
            Lighting::from_config(&config.lights),
            config.camera.background,
        );

        let stars = &config.stars;
        scene.add(
            SceneObject::new(
                STARS,
                Geometry::Points {
                    cloud: generate_uniform_field(stars.count, stars.spread, rng),
                    material: PointMaterial {
                        color: stars.color,
                        size: stars.point_size,
                        opacity: 1.0,
                    },
                },
            )
            .spinning(stars.rotation),
        );

        let galaxy = &config.galaxy;
        scene.add(
            SceneObject::new(
                GALAXY,
                Geometry::Points {
                    cloud: generate_spiral_field(galaxy.count, &galaxy.shape, &galaxy.gradient, rng),
                    material: PointMaterial {
                        color: galaxy.gradient.inner,
                        size: galaxy.point_size,
                        opacity: galaxy.opacity,
                    },
                },
            )
            .at(Vec3::from_array(galaxy.position))
            .tilted(Vec3::from_array(galaxy.tilt))
            .spinning(galaxy.rotation),
        );

        let moon = &config.moon;
        let moon_id = scene.add(
            SceneObject::new(
                MOON,
                Geometry::Sphere {
                    radius: moon.radius,
                    material: SurfaceMaterial { color: moon.color },
                },
            )
            .at(Vec3::from_array(moon.position))
            .floating(FloatMotion::new(moon.float, 0.0)),
        );
        scene.attach_light(moon_id);

        log::info!(
            "composed scene: {} objects, {} points",
            scene.objects.len(),
            scene.point_count()
        );
        scene
    }

    /// Add an object, returning its index
    pub fn add(&mut self, object: SceneObject) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    /// Make the point light follow object `index`
    pub fn attach_light(&mut self, index: usize) {
        self.light_anchor = Some(index);
        self.sync_light();
    }

    fn sync_light(&mut self) {
        if let Some(anchor) = self.light_anchor.and_then(|i| self.objects.get(i)) {
            self.lighting.point.position = anchor.world_origin();
        }
    }

    /// Move every object forward by `delta` seconds
    pub fn advance(&mut self, delta: f32) {
        self.elapsed += delta;
        for object in &mut self.objects {
            object.advance(delta);
        }
        self.sync_light();
    }

    /// Advance by `delta`, then hand the current state to `pipeline` for pixels
    pub fn render_frame<P>(&mut self, delta: f32, pipeline: &mut P, context: &DisplayContext) -> LayerOutput
    where
        P: RenderPipeline<SceneComposer> + ?Sized,
    {
        self.advance(delta);
        pipeline.render(self, context)
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn lighting(&self) -> &Lighting {
        &self.lighting
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    pub fn point_count(&self) -> usize {
        self.objects.iter().map(|o| o.geometry.point_count()).sum()
    }

    /// Seconds of animation applied so far
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::SequenceRandom;

    fn small_config() -> PortfolioConfig {
        let mut config = PortfolioConfig::default();
        config.stars.count = 10;
        config.galaxy.count = 20;
        config
    }

    #[test]
    fn test_compose_builds_three_objects() {
        let mut rng = SequenceRandom::constant(0.25);
        let scene = SceneComposer::compose(&small_config(), &mut rng);

        let names: Vec<_> = scene.objects().iter().map(|o| o.name).collect();
        assert_eq!(names, vec![STARS, GALAXY, MOON]);
        assert_eq!(scene.point_count(), 30);
    }

    #[test]
    fn test_advance_uses_each_objects_rates() {
        let mut rng = SequenceRandom::constant(0.25);
        let mut scene = SceneComposer::compose(&small_config(), &mut rng);
        scene.advance(2.0);

        let stars = scene.object(STARS).unwrap().transform.angles;
        assert!((stars.x + 0.1).abs() < 1e-6);
        assert!((stars.y + 0.08).abs() < 1e-6);

        let galaxy = scene.object(GALAXY).unwrap().transform.angles;
        assert!((galaxy.y - 0.3).abs() < 1e-6);
        assert_eq!(galaxy.x, 0.0);
    }

    #[test]
    fn test_light_follows_moon() {
        let mut rng = SequenceRandom::constant(0.25);
        let mut scene = SceneComposer::compose(&small_config(), &mut rng);
        let before = scene.lighting().point.position;
        assert!((before - Vec3::new(0.0, 0.0, -0.2)).length() < 1e-5);

        scene.advance(1.0);
        let moon = scene.object(MOON).unwrap().world_origin();
        assert_eq!(scene.lighting().point.position, moon);
        assert_ne!(moon, before);
    }

    #[test]
    fn test_buffers_survive_frames() {
        let mut rng = SequenceRandom::constant(0.75);
        let mut scene = SceneComposer::compose(&small_config(), &mut rng);
        let before = scene.objects()[0].geometry.clone();
        scene.advance(0.5);
        assert_eq!(scene.objects()[0].geometry, before);
    }
}
