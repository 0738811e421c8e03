//! # memory-match
//!
//! Rules engine for a memory-matching card game.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: `MatchingEngine` never sleeps, spawns, or plays
//!    sounds. Each event returns a `Transition` carrying the new state
//!    plus the delayed resolutions and cues the caller must perform.
//!
//! 2. **Generation Tagging**: every dealt game gets a new `Generation`.
//!    Resolutions carry the generation they were scheduled under, so one
//!    that fires after a restart is ignored instead of touching the new deck.
//!
//! 3. **Deterministic**: shuffles use a seeded ChaCha8 stream, so a game
//!    can be replayed exactly in tests.
//!
//! ## Game Flow
//!
//! ```
//! use std::time::Duration;
//! use memory_match::{Catalog, CardId, ManualScheduler, MatchingEngine, MatchingGame, SilentSink};
//!
//! let engine = MatchingEngine::with_seed(42);
//! let mut game = MatchingGame::new(engine, Catalog::starter(), ManualScheduler::new(), SilentSink);
//!
//! game.select(&CardId::new("cat-1"));
//! game.select(&CardId::new("cat-2"));
//! assert_eq!(game.stats().attempts, 1);
//!
//! game.advance(Duration::from_millis(1000));
//! assert_eq!(game.stats().score, 10);
//! ```
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Catalog, cards, deck builder
//! - `rules`: Session state, engine, transitions, stats
//! - `runtime`: Scheduler and audio collaborators, game driver

pub mod cards;
pub mod core;
pub mod rules;
pub mod runtime;

// Re-export commonly used types
pub use crate::core::{
    CatalogError, ConfigError, CueError, DeckRng, DeckRngState, MatchConfig, MatchError, Result,
};

pub use crate::cards::{build_deck, Card, CardId, Catalog, CatalogEntry, GroupKey, MediaRef};

pub use crate::rules::{
    AudioCue, GameStats, Generation, MatchingEngine, PairOutcome, Phase, Rejection, Resolution,
    ResolutionIntent, SessionState, StepOutcome, Transition,
};

pub use crate::runtime::{AudioCueSink, ManualScheduler, MatchingGame, Scheduler, SilentSink, TokioScheduler};
