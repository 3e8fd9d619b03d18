use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Gentle bob-and-tilt for floating objects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatParams {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
}

impl Default for FloatParams {
    fn default() -> Self {
        Self {
            speed: 1.5,
            rotation_intensity: 0.5,
            float_intensity: 1.0,
        }
    }
}

/// Pose offset produced by [`FloatMotion`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FloatPose {
    pub offset: Vec3,
    pub rotation: Vec3,
}

/// Time-driven floating motion; the pose is a pure function of accumulated time
#[derive(Debug, Clone, Copy)]
pub struct FloatMotion {
    params: FloatParams,
    /// Phase shift so several floating objects do not move in lockstep
    phase: f32,
    elapsed: f32,
}

impl FloatMotion {
    pub fn new(params: FloatParams, phase: f32) -> Self {
        Self {
            params,
            phase,
            elapsed: 0.0,
        }
    }

    pub fn advance(&mut self, delta: f32) {
        self.elapsed += delta;
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn pose(&self) -> FloatPose {
        let t = (self.phase + self.elapsed) / 4.0 * self.params.speed;
        let (s, c) = t.sin_cos();
        let tilt = self.params.rotation_intensity;

        FloatPose {
            offset: Vec3::new(0.0, s / 10.0 * self.params.float_intensity, 0.0),
            rotation: Vec3::new(c / 8.0 * tilt, s / 8.0 * tilt, s / 20.0 * tilt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pose_at_rest_is_tilted_by_cosine() {
        let motion = FloatMotion::new(FloatParams::default(), 0.0);
        let pose = motion.pose();
        assert_eq!(pose.offset, Vec3::ZERO);
        assert!((pose.rotation.x - 0.5 / 8.0).abs() < 1e-6);
    }

    #[test]
    fn bob_is_bounded_by_intensity() {
        let params = FloatParams {
            float_intensity: 2.0,
            ..FloatParams::default()
        };
        let mut motion = FloatMotion::new(params, 0.3);
        for _ in 0..500 {
            motion.advance(0.05);
            assert!(motion.pose().offset.y.abs() <= 0.2 + 1e-6);
        }
    }

    #[test]
    fn zero_intensity_is_static() {
        let params = FloatParams {
            speed: 1.5,
            rotation_intensity: 0.0,
            float_intensity: 0.0,
        };
        let mut motion = FloatMotion::new(params, 1.0);
        motion.advance(3.0);
        let pose = motion.pose();
        assert_eq!(pose.offset.y, 0.0);
        assert_eq!(pose.rotation, Vec3::ZERO);
    }
}
