//! Wall-clock scheduler on a tokio runtime.
//!
//! Each intent gets its own sleeping task; when it wakes, the intent is
//! sent down an unbounded channel. The owner of the receiver feeds what
//! it reads back into the game:
//!
//! ```no_run
//! # use memory_match::runtime::{MatchingGame, SilentSink, TokioScheduler};
//! # use memory_match::rules::MatchingEngine;
//! # use memory_match::cards::Catalog;
//! # async fn run() {
//! let (scheduler, mut due) = TokioScheduler::current();
//! let mut game = MatchingGame::new(MatchingEngine::with_seed(1), Catalog::starter(), scheduler, SilentSink);
//!
//! while let Some(intent) = due.recv().await {
//!     game.resolve(&intent);
//! }
//! # }
//! ```

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::trace;

use super::Scheduler;
use crate::rules::ResolutionIntent;

/// Scheduler backed by `tokio::time::sleep`.
#[derive(Clone, Debug)]
pub struct TokioScheduler {
    handle: Handle,
    due: UnboundedSender<ResolutionIntent>,
}

impl TokioScheduler {
    /// Create a scheduler spawning timers on `handle`.
    #[must_use]
    pub fn new(handle: Handle) -> (Self, UnboundedReceiver<ResolutionIntent>) {
        let (due, rx) = mpsc::unbounded_channel();
        (Self { handle, due }, rx)
    }

    /// Create a scheduler on the current runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    #[must_use]
    pub fn current() -> (Self, UnboundedReceiver<ResolutionIntent>) {
        Self::new(Handle::current())
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_after(&mut self, delay: Duration, intent: ResolutionIntent) {
        let due = self.due.clone();
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            if due.send(intent).is_err() {
                trace!("resolution dropped, receiver closed");
            }
        });
    }
}
