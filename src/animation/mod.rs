//! Per-frame state updates for scene objects and UI effects

mod color_cycle;
mod float_motion;
mod keyframes;
mod transform;
mod tween;

pub use color_cycle::ColorCycle;
pub use float_motion::{FloatMotion, FloatParams, FloatPose};
pub use keyframes::LoopingKeyframes;
pub use transform::{advance, AnimatedTransform, RotationRates};
pub use tween::{Easing, Tween};
