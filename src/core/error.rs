//! Error types.
//!
//! Only construction can fail. Mis-clicks during play are reported as
//! [`Rejection`](crate::rules::Rejection) values, never as errors.

use std::time::Duration;

use thiserror::Error;

/// Result type alias using `MatchError`.
pub type Result<T> = std::result::Result<T, MatchError>;

/// Top-level engine error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("invalid catalog: {0}")]
    InvalidCatalog(#[from] CatalogError),

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// Reasons a catalog cannot be turned into a deck.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("need at least 2 groups, found {found}")]
    TooFewGroups { found: usize },

    #[error("duplicate group key {0:?}")]
    DuplicateGroupKey(String),

    #[error("empty group key at entry {index}")]
    EmptyGroupKey { index: usize },
}

/// Reasons a configuration is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("miss delay {miss_delay:?} is shorter than match delay {match_delay:?}")]
    MissDelayTooShort {
        match_delay: Duration,
        miss_delay: Duration,
    },
}

/// Failure reported by an audio cue sink.
///
/// Never propagated into game state; the driver logs and drops it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CueError {
    #[error("audio output unavailable")]
    Unavailable,

    #[error("playback failed: {0}")]
    Playback(String),
}
