//! Collaborators and the driver that wires them to the engine.
//!
//! The engine emits side effects as data. This module provides:
//! - `Scheduler`: runs a `ResolutionIntent` after its delay
//! - `AudioCueSink`: plays an `AudioCue`
//! - `ManualScheduler`: a virtual clock for deterministic tests
//! - `TokioScheduler`: wall-clock timers on a tokio runtime
//! - `MatchingGame`: holds the current session and routes effects
//!
//! ## Design Philosophy
//!
//! Collaborators are injected capabilities. Swapping the scheduler or
//! the sink changes how effects are carried out, never the rules.

mod game;
mod manual;
mod timer;

pub use game::MatchingGame;
pub use manual::ManualScheduler;
pub use timer::TokioScheduler;

use std::time::Duration;

use crate::core::CueError;
use crate::rules::{AudioCue, ResolutionIntent};

/// Runs resolution intents after a delay.
///
/// Implementations deliver each intent exactly once. Intents for a
/// session that has since been replaced are still delivered; the engine
/// recognises them as stale.
pub trait Scheduler {
    /// Arrange for `intent` to be handed back after `delay`.
    fn schedule_after(&mut self, delay: Duration, intent: ResolutionIntent);
}

/// Plays audio feedback.
///
/// Failures are reported, not raised; they never affect game state.
pub trait AudioCueSink {
    /// Start playing a cue. Fire-and-forget.
    fn play_cue(&mut self, cue: AudioCue) -> Result<(), CueError>;
}

/// Sink for environments without audio output.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentSink;

impl AudioCueSink for SilentSink {
    fn play_cue(&mut self, _cue: AudioCue) -> Result<(), CueError> {
        Ok(())
    }
}
