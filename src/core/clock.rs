use std::time::{Duration, Instant};

/// Source of per-frame elapsed time
pub trait FrameClock {
    /// Time since the previous tick; advances the clock
    fn tick(&mut self) -> Duration;
}

/// Wall clock for the native host
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Restart timing from now, e.g. after a long blocking setup
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for Clock {
    fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick);
        self.last_tick = now;
        delta
    }
}

/// Simulated clock for tests and offline stepping
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    pending: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue time to be reported by the next tick
    pub fn advance(&mut self, by: Duration) {
        self.pending += by;
    }
}

impl FrameClock for ManualClock {
    fn tick(&mut self) -> Duration {
        std::mem::take(&mut self.pending)
    }
}
