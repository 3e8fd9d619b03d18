use super::tween::Easing;

/// Scalar keyframes played on repeat, each segment eased separately
///
/// Keyframes are evenly spaced over `period`; `[0, -15, 0]` over 3 s spends
/// 1.5 s easing down and 1.5 s easing back.
#[derive(Debug, Clone)]
pub struct LoopingKeyframes {
    values: Vec<f32>,
    period: f32,
    easing: Easing,
    elapsed: f32,
}

impl LoopingKeyframes {
    pub fn new(values: Vec<f32>, period: f32, easing: Easing) -> Self {
        Self {
            values,
            period,
            easing,
            elapsed: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        if self.period > 0.0 {
            self.elapsed = (self.elapsed + dt) % self.period;
        }
    }

    pub fn value(&self) -> f32 {
        match self.values.as_slice() {
            [] => 0.0,
            [only] => *only,
            values => {
                let segments = (values.len() - 1) as f32;
                let t = if self.period > 0.0 { self.elapsed / self.period } else { 0.0 };
                let position = t * segments;
                let index = (position.floor() as usize).min(values.len() - 2);
                let local = self.easing.apply(position - index as f32);
                values[index] + (values[index + 1] - values[index]) * local
            }
        }
    }
}
