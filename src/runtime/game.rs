//! Game driver.
//!
//! `MatchingGame` owns the current session and routes every transition's
//! side effects: intents go to the scheduler, cues go to the sink.

use std::time::Duration;

use tracing::warn;

use super::{AudioCueSink, ManualScheduler, Scheduler};
use crate::cards::{Catalog, CatalogEntry, CardId};
use crate::core::Result;
use crate::rules::{GameStats, MatchingEngine, ResolutionIntent, SessionState, StepOutcome, Transition};

/// A playable game: engine, catalog, current session and collaborators.
pub struct MatchingGame<S, A> {
    engine: MatchingEngine,
    catalog: Catalog,
    state: SessionState,
    scheduler: S,
    audio: A,
}

impl<S: Scheduler, A: AudioCueSink> MatchingGame<S, A> {
    /// Deal the first game from a validated catalog.
    pub fn new(mut engine: MatchingEngine, catalog: Catalog, scheduler: S, audio: A) -> Self {
        let state = engine.deal(&catalog);
        Self {
            engine,
            catalog,
            state,
            scheduler,
            audio,
        }
    }

    /// Validate raw entries, then deal the first game.
    pub fn from_entries(engine: MatchingEngine, entries: &[CatalogEntry], scheduler: S, audio: A) -> Result<Self> {
        let catalog = Catalog::new(entries.to_vec())?;
        Ok(Self::new(engine, catalog, scheduler, audio))
    }

    /// Throw the current session away and deal a fresh one.
    ///
    /// Resolutions still in flight for the old session become stale.
    pub fn restart(&mut self) {
        self.state = self.engine.deal(&self.catalog);
    }

    /// Player picked a card.
    pub fn select(&mut self, card_id: &CardId) -> StepOutcome {
        let transition = self.engine.select_card(&self.state, card_id);
        self.apply(transition)
    }

    /// A scheduled resolution fell due.
    pub fn resolve(&mut self, intent: &ResolutionIntent) -> StepOutcome {
        let transition = self.engine.resolve_pair(&self.state, intent);
        self.apply(transition)
    }

    fn apply(&mut self, transition: Transition) -> StepOutcome {
        let Transition {
            state,
            outcome,
            intents,
            cues,
        } = transition;

        self.state = state;
        for intent in intents {
            self.scheduler.schedule_after(intent.after, intent);
        }
        for cue in cues {
            if let Err(error) = self.audio.play_cue(cue) {
                warn!(?cue, %error, "audio cue failed");
            }
        }
        outcome
    }

    /// Current session.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Derived scoreboard for the current session.
    #[must_use]
    pub fn stats(&self) -> GameStats {
        self.engine.stats(&self.state)
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn engine(&self) -> &MatchingEngine {
        &self.engine
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    #[must_use]
    pub fn audio(&self) -> &A {
        &self.audio
    }
}

impl<A: AudioCueSink> MatchingGame<ManualScheduler, A> {
    /// Move the virtual clock and apply every resolution that fell due.
    pub fn advance(&mut self, by: Duration) -> Vec<StepOutcome> {
        let due = self.scheduler.advance(by);
        due.iter().map(|intent| self.resolve(intent)).collect()
    }
}
