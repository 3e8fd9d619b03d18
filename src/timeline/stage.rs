use std::time::Duration;

use crate::core::{TimerHandle, TimerQueue};

/// Page-level phase, only ever moves forward
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimelineStage {
    /// Preloader visible
    Loading,
    /// Preloader exit playing, main content entering
    Revealing,
    /// Terminal
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimelineEvent {
    BeginReveal,
    Settle,
}

/// One-shot LOADING → REVEALING → SETTLED sequencer
///
/// Nothing happens until [`StagedTimeline::start`]; after [`StagedTimeline::dispose`]
/// every pending transition is dropped and the stage stays where it was.
#[derive(Debug)]
pub struct StagedTimeline {
    stage: TimelineStage,
    loading: Duration,
    exit: Duration,
    timers: TimerQueue<TimelineEvent>,
    pending: Option<TimerHandle>,
    started: bool,
    disposed: bool,
    /// Time spent in the current stage
    in_stage: Duration,
}

impl StagedTimeline {
    /// `loading`: how long the preloader stays up; `exit`: length of its exit transition
    pub fn new(loading: Duration, exit: Duration) -> Self {
        Self {
            stage: TimelineStage::Loading,
            loading,
            exit,
            timers: TimerQueue::new(),
            pending: None,
            started: false,
            disposed: false,
            in_stage: Duration::ZERO,
        }
    }

    /// Arm the loading timer; repeated calls are ignored
    pub fn start(&mut self) -> Option<TimerHandle> {
        if self.started || self.disposed {
            return None;
        }
        self.started = true;
        let handle = self.timers.schedule(self.loading, TimelineEvent::BeginReveal);
        self.pending = Some(handle);
        log::debug!("timeline started, reveal in {:?}", self.loading);
        Some(handle)
    }

    /// Move simulated time forward and return the transitions that fired, in order
    pub fn advance(&mut self, delta: Duration) -> Vec<TimelineStage> {
        let until = self.timers.now() + delta;
        let mut transitions = Vec::new();
        let mut entered_at = None;

        while let Some(event) = self.timers.pop_due(until) {
            let next = match event {
                TimelineEvent::BeginReveal => {
                    let handle = self.timers.schedule(self.exit, TimelineEvent::Settle);
                    self.pending = Some(handle);
                    TimelineStage::Revealing
                }
                TimelineEvent::Settle => {
                    self.pending = None;
                    TimelineStage::Settled
                }
            };

            if next > self.stage {
                log::debug!("timeline {:?} -> {:?}", self.stage, next);
                self.stage = next;
                entered_at = Some(self.timers.now());
                transitions.push(next);
            }
        }

        self.timers.settle(until);
        self.in_stage = match entered_at {
            Some(at) => until - at,
            None => self.in_stage + delta,
        };
        transitions
    }

    /// Revoke the transition behind `handle` if it has not fired yet
    ///
    /// Only the handle of the currently pending transition matches; a handle
    /// from [`StagedTimeline::start`] goes stale once REVEALING begins.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        if self.pending != Some(handle) || !self.timers.cancel(handle) {
            return false;
        }
        self.pending = None;
        log::debug!("timeline transition cancelled in {:?}", self.stage);
        true
    }

    /// Drop every pending transition; the timeline stays frozen afterwards
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.pending = None;
        let dropped = self.timers.cancel_all();
        log::debug!("timeline disposed in {:?}, {} timer(s) dropped", self.stage, dropped);
    }

    pub fn stage(&self) -> TimelineStage {
        self.stage
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Time spent in the current stage
    pub fn time_in_stage(&self) -> Duration {
        self.in_stage
    }

    /// Progress of the exit transition, 0 before REVEALING and 1 once SETTLED
    pub fn exit_progress(&self) -> f32 {
        match self.stage {
            TimelineStage::Loading => 0.0,
            TimelineStage::Settled => 1.0,
            TimelineStage::Revealing => {
                if self.exit.is_zero() {
                    1.0
                } else {
                    (self.in_stage.as_secs_f32() / self.exit.as_secs_f32()).min(1.0)
                }
            }
        }
    }

    pub fn has_pending_transition(&self) -> bool {
        self.pending
            .map(|handle| self.timers.is_pending(handle))
            .unwrap_or(false)
    }
}
