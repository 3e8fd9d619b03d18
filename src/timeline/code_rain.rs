use glam::Vec2;

use crate::field::RandomSource;

/// Peak opacity reached halfway through a drop's cycle
const PEAK_OPACITY: f32 = 0.8;

/// One drifting code snippet, repeating forever
#[derive(Debug, Clone, Copy)]
pub struct CodeDrop {
    pub snippet: usize,
    duration: f32,
    delay: f32,
    drift: Vec2,
    elapsed: f32,
}

/// Where a drop is drawn this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropFrame {
    pub opacity: f32,
    pub offset: Vec2,
}

impl CodeDrop {
    pub fn new(snippet: usize, duration: f32, delay: f32, drift: Vec2) -> Self {
        Self {
            snippet,
            duration: duration.max(f32::EPSILON),
            delay: delay.max(0.0),
            drift,
            elapsed: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    pub fn frame(&self) -> DropFrame {
        let active = self.elapsed - self.delay;
        if active <= 0.0 {
            return DropFrame {
                opacity: 0.0,
                offset: Vec2::ZERO,
            };
        }

        let t = (active % self.duration) / self.duration;
        // 0 -> peak -> 0 over one cycle
        let opacity = if t < 0.5 {
            t * 2.0 * PEAK_OPACITY
        } else {
            (1.0 - t) * 2.0 * PEAK_OPACITY
        };

        DropFrame {
            opacity,
            offset: self.drift * t,
        }
    }
}

/// Background of faint code snippets floating upward
#[derive(Debug, Clone)]
pub struct CodeRain {
    snippets: Vec<String>,
    drops: Vec<CodeDrop>,
}

impl CodeRain {
    /// `count` drops cycling through `snippets`, each with randomized timing and drift
    pub fn new(snippets: Vec<String>, count: usize, rng: &mut dyn RandomSource) -> Self {
        let drops = if snippets.is_empty() {
            Vec::new()
        } else {
            (0..count)
                .map(|i| {
                    let vertical = rng.next_f32() * -100.0;
                    let horizontal = (rng.next_f32() - 0.5) * 20.0;
                    let duration = rng.next_f32() * 2.0 + 1.5;
                    let delay = rng.next_f32() * 3.0;
                    CodeDrop::new(i % snippets.len(), duration, delay, Vec2::new(horizontal, vertical))
                })
                .collect()
        };

        Self { snippets, drops }
    }

    pub fn update(&mut self, dt: f32) {
        for drop in &mut self.drops {
            drop.update(dt);
        }
    }

    pub fn len(&self) -> usize {
        self.drops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drops.is_empty()
    }

    pub fn frames(&self) -> impl Iterator<Item = (&str, DropFrame)> + '_ {
        self.drops
            .iter()
            .map(move |drop| (self.snippets[drop.snippet].as_str(), drop.frame()))
    }
}
