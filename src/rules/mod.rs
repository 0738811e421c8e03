//! Game rules: session state, transitions, and their side effects.
//!
//! `MatchingEngine` is the only writer of `SessionState`. Callers feed it
//! selections and scheduled resolutions and receive a `Transition` back:
//! the new state, what happened, and the delayed resolutions and sounds
//! they must carry out.

pub mod effects;
pub mod engine;
pub mod session;
pub mod stats;

pub use effects::{AudioCue, Note, PairOutcome, Resolution, ResolutionIntent, ToneRecipe};
pub use engine::{MatchingEngine, Rejection, StepOutcome, Transition};
pub use session::{Generation, Phase, SessionState};
pub use stats::GameStats;
