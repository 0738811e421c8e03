//! Virtual-clock scheduler.
//!
//! Time only moves when `advance` is called, so tests can step through
//! delays exactly.

use std::time::Duration;

use super::Scheduler;
use crate::rules::ResolutionIntent;

#[derive(Clone, Debug)]
struct Timer {
    due: Duration,
    seq: u64,
    intent: ResolutionIntent,
}

/// Deterministic scheduler driven by an explicit clock.
///
/// ## Behavior
///
/// - `schedule_after()`: records the intent as due at `now + delay`
/// - `advance()`: moves the clock and returns every intent now due,
///   earliest first (ties in scheduling order)
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_seq: u64,
    timers: Vec<Timer>,
}

impl ManualScheduler {
    /// Create a scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of intents not yet due.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.timers.len()
    }

    /// Time until the earliest outstanding intent is due.
    #[must_use]
    pub fn next_due_in(&self) -> Option<Duration> {
        self.timers
            .iter()
            .map(|t| t.due.saturating_sub(self.now))
            .min()
    }

    /// Advance the clock and collect intents that fell due.
    pub fn advance(&mut self, by: Duration) -> Vec<ResolutionIntent> {
        self.now += by;

        let now = self.now;
        let (mut due, waiting): (Vec<Timer>, Vec<Timer>) =
            self.timers.drain(..).partition(|t| t.due <= now);
        self.timers = waiting;

        due.sort_by_key(|t| (t.due, t.seq));
        due.into_iter().map(|t| t.intent).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_after(&mut self, delay: Duration, intent: ResolutionIntent) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.push(Timer {
            due: self.now + delay,
            seq,
            intent,
        });
    }
}
