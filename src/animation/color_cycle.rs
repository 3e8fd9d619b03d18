use crate::math::Color;

/// Looping linear sweep through evenly spaced color keyframes
///
/// At the end of each period the cycle jumps back to the first stop.
#[derive(Debug, Clone)]
pub struct ColorCycle {
    stops: Vec<Color>,
    period: f32,
    elapsed: f32,
}

impl ColorCycle {
    pub fn new(stops: Vec<Color>, period: f32) -> Self {
        Self {
            stops,
            period,
            elapsed: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        if self.period > 0.0 {
            self.elapsed = (self.elapsed + dt) % self.period;
        }
    }

    pub fn current(&self) -> Color {
        match self.stops.as_slice() {
            [] => Color::WHITE,
            [only] => *only,
            stops => {
                let segments = (stops.len() - 1) as f32;
                let t = if self.period > 0.0 { self.elapsed / self.period } else { 0.0 };
                let position = t * segments;
                let index = (position.floor() as usize).min(stops.len() - 2);
                stops[index].lerp(stops[index + 1], position - index as f32)
            }
        }
    }
}
