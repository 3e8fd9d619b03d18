use glam::{Mat4, Vec3};

use super::camera::{PerspectiveCamera, Projector};
use super::composer::SceneComposer;
use super::lights::Lighting;
use super::objects::{Geometry, PointMaterial, SceneObject, SurfaceMaterial};
use super::raster::{Canvas, DrawOp};
use crate::core::{DisplayContext, LayerOutput, RenderPipeline};
use crate::field::PointCloud;

/// CPU renderer for the backdrop
///
/// Projects every point sprite and sphere sample, sorts them far to near and
/// paints them onto a [`Canvas`]. No depth buffer; transparent sprites blend
/// in painter's order.
pub struct PointRasterizer {
    canvas: Canvas,
    /// (depth, op) pairs queued for the current frame
    queue: Vec<(f32, DrawOp)>,
}

impl PointRasterizer {
    pub fn new() -> Self {
        Self {
            canvas: Canvas::new(0, 0),
            queue: Vec::new(),
        }
    }

    fn queue_points(&mut self, cloud: &PointCloud, material: &PointMaterial, object: &SceneObject, frame: &Frame) {
        let model = object.model_matrix();

        for (local, color) in cloud.points(material.color) {
            let Some(screen) = frame.projector.project(model.transform_point3(local)) else {
                continue;
            };
            let size = frame.camera.point_size(material.size, screen.depth, &frame.context);
            self.queue.push((
                screen.depth,
                DrawOp::Point {
                    x: screen.x,
                    y: screen.y,
                    size,
                    color,
                    alpha: material.opacity,
                },
            ));
        }
    }

    fn queue_sphere(&mut self, radius: f32, material: &SurfaceMaterial, object: &SceneObject, frame: &Frame) {
        let center = object.world_origin();
        let Some(screen) = frame.projector.project(center) else {
            return;
        };
        let pixel_radius = radius * frame.camera.focal_length(&frame.context) / screen.depth;
        if !(pixel_radius > 0.0) {
            return;
        }

        let min_x = (screen.x - pixel_radius).floor() as i32;
        let max_x = (screen.x + pixel_radius).ceil() as i32;
        let min_y = (screen.y - pixel_radius).floor() as i32;
        let max_y = (screen.y + pixel_radius).ceil() as i32;

        for py in min_y..=max_y {
            for px in min_x..=max_x {
                let nx = (px as f32 + 0.5 - screen.x) / pixel_radius;
                let ny = (screen.y - py as f32 - 0.5) / pixel_radius;
                let r2 = nx * nx + ny * ny;
                if r2 > 1.0 {
                    continue;
                }

                // Facing the camera in view space
                let nz = (1.0 - r2).sqrt();
                let normal = frame
                    .view_to_world
                    .transform_vector3(Vec3::new(nx, ny, nz))
                    .normalize_or_zero();
                let surface = center + normal * radius;
                let color = frame.lighting.shade(material.color, surface, normal);

                self.queue.push((
                    screen.depth - nz * radius,
                    DrawOp::Pixel {
                        x: px,
                        y: py,
                        color,
                        alpha: 1.0,
                    },
                ));
            }
        }
    }
}

impl Default for PointRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-frame state shared by every object
struct Frame {
    camera: PerspectiveCamera,
    projector: Projector,
    view_to_world: Mat4,
    lighting: Lighting,
    context: DisplayContext,
}

impl RenderPipeline<SceneComposer> for PointRasterizer {
    fn render(&mut self, scene: &SceneComposer, context: &DisplayContext) -> LayerOutput {
        if context.is_empty() {
            return LayerOutput::empty();
        }

        let camera = *scene.camera();
        let projector = camera.projector(context);
        let frame = Frame {
            camera,
            projector,
            view_to_world: projector.view.inverse(),
            lighting: *scene.lighting(),
            context: *context,
        };

        self.queue.clear();
        for object in scene.objects() {
            match &object.geometry {
                Geometry::Points { cloud, material } => {
                    self.queue_points(cloud, material, object, &frame)
                }
                Geometry::Sphere { radius, material } => {
                    self.queue_sphere(*radius, material, object, &frame)
                }
            }
        }

        // Far to near
        self.queue.sort_by(|a, b| b.0.total_cmp(&a.0));

        self.canvas.resize(context.width, context.height);
        self.canvas.execute(&DrawOp::Clear(scene.background()));
        for (_, op) in &self.queue {
            self.canvas.execute(op);
        }

        LayerOutput::new(self.canvas.to_rgba8(), context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PortfolioConfig;
    use crate::field::SequenceRandom;

    fn pixel(output: &LayerOutput, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y * output.width + x) * 4) as usize;
        [
            output.pixels[idx],
            output.pixels[idx + 1],
            output.pixels[idx + 2],
            output.pixels[idx + 3],
        ]
    }

    fn scene() -> SceneComposer {
        let mut config = PortfolioConfig::default();
        config.stars.count = 0;
        config.galaxy.count = 0;
        SceneComposer::compose(&config, &mut SequenceRandom::constant(0.5))
    }

    #[test]
    fn test_empty_context_renders_nothing() {
        let mut rasterizer = PointRasterizer::new();
        let output = rasterizer.render(&scene(), &DisplayContext::new(0, 0));
        assert!(output.is_empty());
    }

    #[test]
    fn test_background_fills_corners() {
        let mut rasterizer = PointRasterizer::new();
        let scene = scene();
        let output = rasterizer.render(&scene, &DisplayContext::new(64, 48));

        assert_eq!(output.pixels.len(), 64 * 48 * 4);
        assert_eq!(pixel(&output, 0, 0), scene.background().to_rgba8(1.0));
    }

    #[test]
    fn test_moon_covers_center() {
        let mut rasterizer = PointRasterizer::new();
        let scene = scene();
        let output = rasterizer.render(&scene, &DisplayContext::new(64, 64));

        let center = pixel(&output, 32, 32);
        assert_ne!(center, scene.background().to_rgba8(1.0));
        // Lit by ambient at least
        assert!(center[0] > 100);
    }
}
