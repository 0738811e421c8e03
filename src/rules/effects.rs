//! Side effects a transition asks its caller to perform.
//!
//! The engine never touches a clock or a speaker. Instead each
//! [`Transition`](super::Transition) lists:
//! - `ResolutionIntent`s: "after this long, apply this resolution"
//! - `AudioCue`s: "play this sound now"
//!
//! The caller runs intents through a scheduler and feeds them back
//! with [`MatchingEngine::resolve_pair`](super::MatchingEngine::resolve_pair).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::session::Generation;
use crate::cards::CardId;

/// Result of comparing the two pending cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairOutcome {
    Match,
    Miss,
}

/// Delayed action applied to an evaluated pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// Mark both cards matched and award the reward.
    Commit,
    /// Turn both cards face down again.
    Revert,
}

impl From<PairOutcome> for Resolution {
    fn from(outcome: PairOutcome) -> Self {
        match outcome {
            PairOutcome::Match => Resolution::Commit,
            PairOutcome::Miss => Resolution::Revert,
        }
    }
}

/// A resolution scheduled for later.
///
/// Captures the two card IDs and the generation at schedule time so a
/// late firing can be recognised as stale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionIntent {
    /// Delay before the resolution should be applied.
    pub after: Duration,
    pub action: Resolution,
    pub card_ids: [CardId; 2],
    pub generation: Generation,
}

/// Sound the view should play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioCue {
    /// A pair was committed.
    Success,
}

/// One step of a cue's melody.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Note {
    pub frequency_hz: f32,
    /// Offset from the start of the cue.
    pub at: Duration,
}

/// Synthesis recipe for a cue: stepped notes under an exponential fade.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneRecipe {
    pub notes: &'static [Note],
    pub duration: Duration,
    pub start_gain: f32,
    pub end_gain: f32,
}

// C5, E5, G5
static SUCCESS_NOTES: [Note; 3] = [
    Note { frequency_hz: 523.25, at: Duration::from_millis(0) },
    Note { frequency_hz: 659.25, at: Duration::from_millis(100) },
    Note { frequency_hz: 783.99, at: Duration::from_millis(200) },
];

impl AudioCue {
    /// How a synthesizing sink should render this cue.
    #[must_use]
    pub fn tone(self) -> ToneRecipe {
        match self {
            AudioCue::Success => ToneRecipe {
                notes: &SUCCESS_NOTES,
                duration: Duration::from_millis(300),
                start_gain: 0.3,
                end_gain: 0.01,
            },
        }
    }
}
