//! The matching-game rules.
//!
//! `MatchingEngine` turns events into transitions:
//! - `deal` / `new_game`: shuffle a fresh deck under a new generation
//! - `select_card`: flip a card; on the second flip, score an attempt and
//!   schedule the pair's resolution
//! - `resolve_pair`: apply a scheduled commit or revert
//!
//! The engine is pure with respect to time and sound. It owns only the
//! configuration, the shuffle RNG and the generation counter; every
//! session value it hands out is independent of it.
//!
//! ## Invalid input
//!
//! Mis-clicks are not errors. A rejected selection returns the input
//! state unchanged with `StepOutcome::Rejected`. A resolution that no
//! longer applies (newer game, already resolved) returns
//! `StepOutcome::Stale`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, trace};

use super::effects::{AudioCue, PairOutcome, Resolution, ResolutionIntent};
use super::session::{Generation, SessionState};
use super::stats::GameStats;
use crate::cards::{build_deck, Catalog, CatalogEntry, CardId};
use crate::core::{DeckRng, MatchConfig, Result};

/// Why a selection was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// Two cards are already awaiting resolution.
    Busy,
    /// No card with that ID in this deck.
    UnknownCard,
    /// The card's pair has been confirmed.
    AlreadyMatched,
    /// The card is already one of the pending pair.
    AlreadyPending,
    /// The card is face-up without being pending or matched.
    ///
    /// Only reachable from a state built outside the engine (e.g. a
    /// deserialized `SessionState`).
    FaceUp,
}

/// What a transition did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOutcome {
    /// First card of a pair turned face-up.
    Flipped,
    /// Second card turned face-up; resolution scheduled.
    Evaluating(PairOutcome),
    /// Pair confirmed.
    Committed,
    /// Pair turned back face-down.
    Reverted,
    /// Selection ignored.
    Rejected(Rejection),
    /// Resolution ignored.
    Stale,
}

impl StepOutcome {
    /// Whether the transition changed the session.
    #[must_use]
    pub fn is_applied(self) -> bool {
        !matches!(self, StepOutcome::Rejected(_) | StepOutcome::Stale)
    }
}

/// New state plus the side effects the caller must carry out.
#[derive(Clone, Debug)]
pub struct Transition {
    pub state: SessionState,
    pub outcome: StepOutcome,
    /// At most one per transition.
    pub intents: SmallVec<[ResolutionIntent; 1]>,
    pub cues: SmallVec<[AudioCue; 1]>,
}

impl Transition {
    fn unchanged(state: &SessionState, outcome: StepOutcome) -> Self {
        Self::new(state.clone(), outcome)
    }

    fn new(state: SessionState, outcome: StepOutcome) -> Self {
        Self {
            state,
            outcome,
            intents: SmallVec::new(),
            cues: SmallVec::new(),
        }
    }
}

/// Rules engine for the memory-matching game.
///
/// ## Example
///
/// ```
/// use memory_match::cards::{Catalog, CardId};
/// use memory_match::rules::{MatchingEngine, StepOutcome, PairOutcome};
///
/// let mut engine = MatchingEngine::with_seed(42);
/// let state = engine.deal(&Catalog::starter());
///
/// let t = engine.select_card(&state, &CardId::new("sun-1"));
/// assert_eq!(t.outcome, StepOutcome::Flipped);
///
/// let t = engine.select_card(&t.state, &CardId::new("sun-2"));
/// assert_eq!(t.outcome, StepOutcome::Evaluating(PairOutcome::Match));
/// assert_eq!(t.state.attempts(), 1);
///
/// let intent = &t.intents[0];
/// let t = engine.resolve_pair(&t.state, intent);
/// assert_eq!(t.state.score(), 10);
/// ```
///
/// Generations are unique only within one engine. The engine is not
/// `Clone`, so two sessions of the same game cannot share a counter.
///
/// ```compile_fail
/// fn needs_clone<T: Clone>() {}
/// needs_clone::<memory_match::rules::MatchingEngine>();
/// ```
#[derive(Debug)]
pub struct MatchingEngine {
    config: MatchConfig,
    rng: DeckRng,
    generation: Generation,
}

impl MatchingEngine {
    /// Create an engine, validating the configuration.
    pub fn new(config: MatchConfig, rng: DeckRng) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            generation: Generation::default(),
        })
    }

    /// Engine with the reference configuration and a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            config: MatchConfig::default(),
            rng: DeckRng::new(seed),
            generation: Generation::default(),
        }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Generation of the most recently dealt game.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    // === Session Start ===

    /// Validate raw catalog entries and deal a new game.
    pub fn new_game(&mut self, entries: &[CatalogEntry]) -> Result<SessionState> {
        let catalog = Catalog::new(entries.to_vec())?;
        Ok(self.deal(&catalog))
    }

    /// Deal a new game from a validated catalog.
    ///
    /// Bumps the generation, so resolutions scheduled for any earlier
    /// session become stale.
    pub fn deal(&mut self, catalog: &Catalog) -> SessionState {
        self.generation = self.generation.next();
        let deck = build_deck(catalog, &mut self.rng);

        info!(
            generation = %self.generation,
            groups = catalog.group_count(),
            "dealt new game"
        );

        SessionState::new(self.generation, deck, catalog.group_count())
    }

    // === Selection ===

    /// Flip a card.
    ///
    /// On the second flip the attempt is counted immediately and one
    /// `ResolutionIntent` is emitted.
    #[must_use]
    pub fn select_card(&self, state: &SessionState, card_id: &CardId) -> Transition {
        if let Err(rejection) = Self::check_selectable(state, card_id) {
            trace!(generation = %state.generation(), card = %card_id, ?rejection, "selection ignored");
            return Transition::unchanged(state, StepOutcome::Rejected(rejection));
        }

        let mut next = state.clone();
        let Some(index) = next.position(card_id) else {
            return Transition::unchanged(state, StepOutcome::Rejected(Rejection::UnknownCard));
        };
        if let Some(card) = next.card_mut(index) {
            card.reveal();
        }
        next.push_pending(card_id.clone());

        debug!(generation = %next.generation(), card = %card_id, "card flipped");

        let [first, second] = match next.pending() {
            [first, second] => [first.clone(), second.clone()],
            _ => return Transition::new(next, StepOutcome::Flipped),
        };

        next.record_attempt();
        let outcome = match (next.card(&first), next.card(&second)) {
            (Some(a), Some(b)) if a.pairs_with(b) => PairOutcome::Match,
            _ => PairOutcome::Miss,
        };
        let action = Resolution::from(outcome);
        let after = match action {
            Resolution::Commit => self.config.match_delay,
            Resolution::Revert => self.config.miss_delay,
        };

        debug!(
            generation = %next.generation(),
            first = %first,
            second = %second,
            ?outcome,
            attempts = next.attempts(),
            "pair evaluated"
        );

        let intent = ResolutionIntent {
            after,
            action,
            card_ids: [first, second],
            generation: next.generation(),
        };

        let mut transition = Transition::new(next, StepOutcome::Evaluating(outcome));
        transition.intents.push(intent);
        transition
    }

    fn check_selectable(state: &SessionState, card_id: &CardId) -> std::result::Result<(), Rejection> {
        if state.pending().len() >= 2 {
            return Err(Rejection::Busy);
        }
        let card = state.card(card_id).ok_or(Rejection::UnknownCard)?;
        if card.is_matched {
            return Err(Rejection::AlreadyMatched);
        }
        if state.pending().contains(card_id) {
            return Err(Rejection::AlreadyPending);
        }
        if card.is_flipped {
            return Err(Rejection::FaceUp);
        }
        Ok(())
    }

    // === Resolution ===

    /// Apply a previously scheduled resolution.
    ///
    /// A no-op (`StepOutcome::Stale`) unless the intent belongs to this
    /// session's generation, names exactly the pending pair, and its
    /// action agrees with whether those two cards pair.
    #[must_use]
    pub fn resolve_pair(&self, state: &SessionState, intent: &ResolutionIntent) -> Transition {
        if intent.generation != state.generation() || state.pending() != intent.card_ids.as_slice() {
            trace!(
                generation = %state.generation(),
                intent_generation = %intent.generation,
                "stale resolution ignored"
            );
            return Transition::unchanged(state, StepOutcome::Stale);
        }

        let mut next = state.clone();
        let mut indices = [0usize; 2];
        for (slot, id) in indices.iter_mut().zip(&intent.card_ids) {
            match next.position(id) {
                Some(index) => *slot = index,
                None => return Transition::unchanged(state, StepOutcome::Stale),
            }
        }

        let group = match (next.card(&intent.card_ids[0]), next.card(&intent.card_ids[1])) {
            (Some(a), Some(b)) if a.pairs_with(b) == (intent.action == Resolution::Commit) => a.group.clone(),
            _ => {
                trace!(
                    generation = %state.generation(),
                    action = ?intent.action,
                    "resolution does not fit the pending pair"
                );
                return Transition::unchanged(state, StepOutcome::Stale);
            }
        };

        match intent.action {
            Resolution::Commit => {
                for index in indices {
                    if let Some(card) = next.card_mut(index) {
                        card.confirm();
                    }
                }
                next.record_match(group.clone(), self.config.match_reward);
                next.clear_pending();

                debug!(generation = %next.generation(), group = %group, score = next.score(), "pair committed");

                let mut transition = Transition::new(next, StepOutcome::Committed);
                transition.cues.push(AudioCue::Success);
                transition
            }
            Resolution::Revert => {
                for index in indices {
                    if let Some(card) = next.card_mut(index) {
                        card.hide();
                    }
                }
                next.clear_pending();

                debug!(generation = %next.generation(), "pair reverted");

                Transition::new(next, StepOutcome::Reverted)
            }
        }
    }

    // === Stats ===

    /// Derived scoreboard for a session.
    #[must_use]
    pub fn stats(&self, state: &SessionState) -> GameStats {
        state.stats()
    }
}
