//! Session state: everything one game owns.
//!
//! ## Lifecycle
//!
//! A `SessionState` is created by [`MatchingEngine::deal`](super::MatchingEngine::deal),
//! replaced by each transition the engine returns, and discarded when the
//! next game is dealt. Every transition produces a new value; the previous
//! one stays valid, which `im` makes an O(1) clone.
//!
//! ## Phases
//!
//! The phase is derived from the number of pending cards:
//! - `Idle`: nothing face-up awaiting evaluation
//! - `OneSelected`: one card face-up
//! - `Evaluating`: two cards face-up, resolution scheduled

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::stats::GameStats;
use crate::cards::{Card, CardId, GroupKey};

/// Tag distinguishing successive games dealt by the same engine.
///
/// Scheduled resolutions carry the generation they were created under
/// and are ignored once a newer game has been dealt. Values are unique
/// only within the engine that issued them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Gen({})", self.0)
    }
}

/// Selection phase, derived from the pending selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    OneSelected,
    Evaluating,
}

/// Mutable state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    generation: Generation,
    deck: Vector<Card>,
    pending: SmallVec<[CardId; 2]>,
    matched_groups: OrdSet<GroupKey>,
    score: u32,
    attempts: u32,
    total_groups: usize,
}

impl SessionState {
    /// Start a session over an already-shuffled deck.
    pub(crate) fn new(generation: Generation, deck: Vector<Card>, total_groups: usize) -> Self {
        Self {
            generation,
            deck,
            pending: SmallVec::new(),
            matched_groups: OrdSet::new(),
            score: 0,
            attempts: 0,
            total_groups,
        }
    }

    /// Generation this session was dealt under.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Cards in board order.
    #[must_use]
    pub fn deck(&self) -> &Vector<Card> {
        &self.deck
    }

    /// Look up a card by ID.
    #[must_use]
    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.deck.iter().find(|c| &c.id == id)
    }

    /// Whether a card's face is currently shown.
    #[must_use]
    pub fn is_face_up(&self, id: &CardId) -> bool {
        self.card(id).is_some_and(|c| c.is_flipped)
    }

    /// Cards flipped and awaiting evaluation, in selection order.
    #[must_use]
    pub fn pending(&self) -> &[CardId] {
        &self.pending
    }

    /// Groups already confirmed.
    #[must_use]
    pub fn matched_groups(&self) -> &OrdSet<GroupKey> {
        &self.matched_groups
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Completed two-card evaluations.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Number of groups in the dealt catalog.
    #[must_use]
    pub fn total_groups(&self) -> usize {
        self.total_groups
    }

    /// Current selection phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.pending.len() {
            0 => Phase::Idle,
            1 => Phase::OneSelected,
            _ => Phase::Evaluating,
        }
    }

    /// All groups have been matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.matched_groups.len() == self.total_groups
    }

    /// IDs a selection would currently be accepted for.
    #[must_use]
    pub fn selectable_cards(&self) -> Vec<CardId> {
        if self.phase() == Phase::Evaluating {
            return Vec::new();
        }
        self.deck
            .iter()
            .filter(|c| c.is_selectable())
            .map(|c| c.id.clone())
            .collect()
    }

    /// Derived scoreboard.
    #[must_use]
    pub fn stats(&self) -> GameStats {
        GameStats::from_state(self)
    }

    // === Mutation (engine only) ===

    pub(crate) fn position(&self, id: &CardId) -> Option<usize> {
        self.deck.iter().position(|c| &c.id == id)
    }

    pub(crate) fn card_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.deck.get_mut(index)
    }

    pub(crate) fn push_pending(&mut self, id: CardId) {
        self.pending.push(id);
    }

    pub(crate) fn clear_pending(&mut self) {
        self.pending.clear();
    }

    pub(crate) fn record_attempt(&mut self) {
        self.attempts += 1;
    }

    pub(crate) fn record_match(&mut self, group: GroupKey, reward: u32) {
        self.matched_groups.insert(group);
        self.score = self.score.saturating_add(reward);
    }
}
