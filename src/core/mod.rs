//! Core engine types: RNG, configuration, errors.
//!
//! These are independent of the card and rules modules and are shared by
//! every layer above them.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{MatchConfig, DEFAULT_MATCH_DELAY, DEFAULT_MATCH_REWARD, DEFAULT_MISS_DELAY};
pub use error::{CatalogError, ConfigError, CueError, MatchError, Result};
pub use rng::{DeckRng, DeckRngState};
