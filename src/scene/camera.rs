use glam::{Mat4, Vec3};

use crate::config::CameraConfig;
use crate::core::DisplayContext;

/// Screen-space position of a projected point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// Pixels from the left edge
    pub x: f32,
    /// Pixels from the top edge
    pub y: f32,
    /// Distance in front of the camera along its view axis
    pub depth: f32,
}

/// Per-frame projection state, built by [`PerspectiveCamera::projector`]
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    pub view: Mat4,
    view_projection: Mat4,
    near: f32,
    far: f32,
    width: f32,
    height: f32,
}

impl Projector {
    pub fn project(&self, world: Vec3) -> Option<ScreenPoint> {
        let depth = -self.view.transform_point3(world).z;
        if depth < self.near || depth > self.far {
            return None;
        }

        let ndc = self.view_projection.project_point3(world);
        Some(ScreenPoint {
            x: (ndc.x + 1.0) * 0.5 * self.width,
            y: (1.0 - ndc.y) * 0.5 * self.height,
            depth,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view in degrees
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl PerspectiveCamera {
    pub fn new(position: Vec3, fov: f32) -> Self {
        Self {
            position,
            target: Vec3::ZERO,
            fov,
            near: 0.1,
            far: 1000.0,
        }
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        Self::new(Vec3::from_array(config.position), config.fov)
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or(Vec3::NEG_Z)
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), Vec3::Y)
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), aspect, self.near, self.far)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection(aspect) * self.view()
    }

    /// Pixels covered by one world unit at distance 1
    pub fn focal_length(&self, context: &DisplayContext) -> f32 {
        (context.height as f32 * 0.5) / (self.fov.to_radians() * 0.5).tan()
    }

    /// Project a world position; `None` when it lies outside the depth range
    pub fn project(&self, world: Vec3, context: &DisplayContext) -> Option<ScreenPoint> {
        self.projector(context).project(world)
    }

    /// Matrices for projecting many points into one frame
    pub fn projector(&self, context: &DisplayContext) -> Projector {
        let view = self.view();
        Projector {
            view,
            view_projection: self.projection(context.aspect()) * view,
            near: self.near,
            far: self.far,
            width: context.width as f32,
            height: context.height as f32,
        }
    }

    /// Diameter in pixels of a size-attenuated point sprite
    ///
    /// World-sized sprites shrink with distance: `size × (height / 2) / depth`.
    pub fn point_size(&self, size: f32, depth: f32, context: &DisplayContext) -> f32 {
        if depth <= 0.0 {
            return 0.0;
        }
        size * (context.height as f32 * 0.5) / depth
    }
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_projects_to_center() {
        let camera = PerspectiveCamera::default();
        let ctx = DisplayContext::new(800, 600);
        let p = camera.project(Vec3::ZERO, &ctx).unwrap();
        assert!((p.x - 400.0).abs() < 1e-3);
        assert!((p.y - 300.0).abs() < 1e-3);
        assert!((p.depth - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_points_behind_camera_are_culled() {
        let camera = PerspectiveCamera::default();
        let ctx = DisplayContext::new(100, 100);
        assert!(camera.project(Vec3::new(0.0, 0.0, 5.0), &ctx).is_none());
    }

    #[test]
    fn test_up_is_toward_top_of_screen() {
        let camera = PerspectiveCamera::default();
        let ctx = DisplayContext::new(100, 100);
        let p = camera.project(Vec3::new(0.0, 0.5, 0.0), &ctx).unwrap();
        assert!(p.y < 50.0);
    }

    #[test]
    fn test_point_size_attenuates() {
        let camera = PerspectiveCamera::default();
        let ctx = DisplayContext::new(100, 1000);
        assert!((camera.point_size(0.008, 2.0, &ctx) - 2.0).abs() < 1e-5);
        assert!(camera.point_size(0.008, 4.0, &ctx) < camera.point_size(0.008, 2.0, &ctx));
    }

    #[test]
    fn test_focal_length_matches_projection() {
        let camera = PerspectiveCamera::default();
        let ctx = DisplayContext::new(600, 600);
        let p = camera.project(Vec3::new(0.0, 0.1, 0.0), &ctx).unwrap();
        let expected = 300.0 - 0.1 * camera.focal_length(&ctx) / 2.0;
        assert!((p.y - expected).abs() < 1e-2);
    }
}
