use crate::animation::{Easing, Tween};

const REVEAL_DURATION: f32 = 0.6;

/// Fade-and-slide entrance that triggers the first time its element is seen
#[derive(Debug, Clone, Copy)]
pub struct RevealOnce {
    triggered: bool,
    opacity: Tween,
    offset: Tween,
}

impl RevealOnce {
    /// `offset`: starting displacement in points, slides to zero
    pub fn new(offset: f32, delay: f32) -> Self {
        Self {
            triggered: false,
            opacity: Tween::new(0.0, 1.0, REVEAL_DURATION, Easing::EaseOut).with_delay(delay),
            offset: Tween::new(offset, 0.0, REVEAL_DURATION, Easing::EaseOut).with_delay(delay),
        }
    }

    /// Slide from `from` to `to` while staying fully opaque
    pub fn slide(from: f32, to: f32, delay: f32) -> Self {
        Self {
            triggered: false,
            opacity: Tween::new(1.0, 1.0, REVEAL_DURATION, Easing::Linear).with_delay(delay),
            offset: Tween::new(from, to, REVEAL_DURATION, Easing::EaseOut).with_delay(delay),
        }
    }

    /// Report visibility; returns true only on the call that triggers the reveal
    pub fn observe(&mut self, in_view: bool) -> bool {
        if in_view && !self.triggered {
            self.triggered = true;
            return true;
        }
        false
    }

    pub fn update(&mut self, dt: f32) {
        if self.triggered {
            self.opacity.update(dt);
            self.offset.update(dt);
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    pub fn opacity(&self) -> f32 {
        self.opacity.value()
    }

    pub fn offset(&self) -> f32 {
        self.offset.value()
    }
}

/// One reveal per element, each delayed `step` seconds more than the previous
pub fn staggered(count: usize, step: f32, offset: f32) -> Vec<RevealOnce> {
    (0..count)
        .map(|i| RevealOnce::new(offset, i as f32 * step))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_observed() {
        let mut reveal = RevealOnce::new(20.0, 0.0);
        reveal.update(5.0);
        assert_eq!(reveal.opacity(), 0.0);
        assert_eq!(reveal.offset(), 20.0);
    }

    #[test]
    fn triggers_once() {
        let mut reveal = RevealOnce::new(20.0, 0.0);
        assert!(!reveal.observe(false));
        assert!(reveal.observe(true));
        assert!(!reveal.observe(true));

        // Leaving the viewport does not hide it again
        reveal.update(1.0);
        reveal.observe(false);
        assert_eq!(reveal.opacity(), 1.0);
        assert_eq!(reveal.offset(), 0.0);
    }

    #[test]
    fn slide_keeps_full_opacity() {
        let mut reveal = RevealOnce::slide(120.0, 10.0, 0.0);
        assert_eq!(reveal.opacity(), 1.0);
        assert_eq!(reveal.offset(), 120.0);

        reveal.observe(true);
        reveal.update(0.3);
        assert_eq!(reveal.opacity(), 1.0);
        assert!(reveal.offset() < 120.0 && reveal.offset() > 10.0);

        reveal.update(1.0);
        assert_eq!(reveal.offset(), 10.0);
    }

    #[test]
    fn stagger_delays_later_items() {
        let mut reveals = staggered(3, 0.1, 30.0);
        for r in reveals.iter_mut() {
            r.observe(true);
            r.update(0.15);
        }
        assert!(reveals[0].opacity() > reveals[1].opacity());
        assert!(reveals[1].opacity() > 0.0);
        assert_eq!(reveals[2].opacity(), 0.0);
    }
}
