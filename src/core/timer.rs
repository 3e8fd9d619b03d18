use std::time::Duration;

// Self-contained timers - manage internal state, no Frame dependency.
// Each timer accumulates delta time and decides when to fire.

/// Throttled timer - minimum interval between fires
#[derive(Debug, Clone, Copy)]
pub struct Throttled {
    min_interval: f32,
    time_since_last: f32,
}

impl Throttled {
    /// Create throttled timer with minimum interval
    pub fn new(min_interval: f32) -> Self {
        Self {
            min_interval,
            time_since_last: min_interval, // Allow immediate first tick
        }
    }

    /// Attempt to fire, returns true if enough time has passed
    pub fn try_tick(&mut self, delta: f32) -> bool {
        self.time_since_last += delta;

        if self.time_since_last >= self.min_interval {
            self.time_since_last = 0.0;
            true
        } else {
            false
        }
    }
}

/// Handle returned by [`TimerQueue::schedule`], used to revoke the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Pending<E> {
    id: u64,
    due: Duration,
    event: E,
}

/// One-shot timers on a simulated timeline
///
/// Time only moves when the owner advances it, so the same queue serves the
/// wall-clock host and deterministic tests. Cancelled timers never fire.
#[derive(Debug)]
pub struct TimerQueue<E> {
    now: Duration,
    next_id: u64,
    pending: Vec<Pending<E>>,
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Current simulated time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Fire `event` once `after` has elapsed from now
    pub fn schedule(&mut self, after: Duration, event: E) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            due: self.now + after,
            event,
        });
        TimerHandle(id)
    }

    /// Returns false if the timer already fired or was cancelled
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != handle.0);
        self.pending.len() != before
    }

    pub fn cancel_all(&mut self) -> usize {
        let count = self.pending.len();
        self.pending.clear();
        count
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|p| p.id == handle.0)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Pop the earliest timer due at or before `until`, moving `now` to its due time
    ///
    /// Ties fire in scheduling order. Callers loop on this so that timers
    /// scheduled while handling an event still fire within the same window.
    pub fn pop_due(&mut self, until: Duration) -> Option<E> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(_, p)| (p.due, p.id))
            .map(|(i, _)| i)?;

        let fired = self.pending.remove(index);
        self.now = self.now.max(fired.due);
        Some(fired.event)
    }

    /// Move time forward to `until` once all due timers were drained
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// Convenience: fire everything due within `delta`, in order
    pub fn advance(&mut self, delta: Duration) -> Vec<E> {
        let until = self.now + delta;
        let mut fired = Vec::new();
        while let Some(event) = self.pop_due(until) {
            fired.push(event);
        }
        self.settle(until);
        fired
    }
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}
