/// Easing curves used by the page transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Cubic deceleration
    EaseOut,
    /// Cubic acceleration then deceleration
    EaseInOut,
    /// Pulls back slightly before accelerating away
    BackIn,
}

impl Easing {
    const BACK_OVERSHOOT: f32 = 1.70158;

    /// Map linear progress `x` in [0, 1] onto the curve
    pub fn apply(self, x: f32) -> f32 {
        let x = x.clamp(0.0, 1.0);
        match self {
            Easing::Linear => x,
            Easing::EaseOut => 1.0 - (1.0 - x).powi(3),
            Easing::EaseInOut => {
                if x < 0.5 {
                    4.0 * x * x * x
                } else {
                    1.0 - (-2.0 * x + 2.0).powi(3) / 2.0
                }
            }
            Easing::BackIn => {
                let c1 = Self::BACK_OVERSHOOT;
                let c3 = c1 + 1.0;
                c3 * x * x * x - c1 * x * x
            }
        }
    }
}

/// Scalar tween with an optional start delay
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    pub start: f32,
    pub end: f32,
    duration: f32,
    delay: f32,
    easing: Easing,
    elapsed: f32,
}

impl Tween {
    pub fn new(start: f32, end: f32, duration: f32, easing: Easing) -> Self {
        Self {
            start,
            end,
            duration,
            delay: 0.0,
            easing,
            elapsed: 0.0,
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn update(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt).min(self.delay + self.duration.max(0.0));
    }

    /// Linear progress in [0, 1], zero while the delay runs
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return if self.elapsed >= self.delay { 1.0 } else { 0.0 };
        }
        ((self.elapsed - self.delay) / self.duration).clamp(0.0, 1.0)
    }

    pub fn value(&self) -> f32 {
        self.start + (self.end - self.start) * self.easing.apply(self.progress())
    }

    pub fn finished(&self) -> bool {
        self.progress() >= 1.0
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// Jump straight to the end value
    pub fn finish(&mut self) {
        self.elapsed = self.delay + self.duration.max(0.0);
    }
}
