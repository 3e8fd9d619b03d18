use std::time::Duration;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the first frame
    pub time: f32,
    /// Seconds since the previous frame
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Turns host-supplied deltas into numbered frames
#[derive(Debug, Default)]
pub struct FrameCounter {
    frame_number: u64,
    elapsed: Duration,
}

impl FrameCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, delta: Duration) -> FrameInfo {
        self.elapsed += delta;
        let info = FrameInfo::new(
            self.frame_number,
            self.elapsed.as_secs_f32(),
            delta.as_secs_f32(),
        );
        self.frame_number += 1;
        info
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}
