//! Derived scoreboard.

use serde::{Deserialize, Serialize};

use super::session::SessionState;

/// Read-only numbers a view needs after every transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub score: u32,
    pub attempts: u32,
    /// Pairs found so far.
    pub matched_count: usize,
    pub total_groups: usize,
    /// `round(matched_count / attempts * 100)`, or 0 before the first attempt.
    pub accuracy_percent: u32,
    pub is_complete: bool,
}

impl GameStats {
    /// Compute the scoreboard for a session.
    #[must_use]
    pub fn from_state(state: &SessionState) -> Self {
        let matched_count = state.matched_groups().len();
        let attempts = state.attempts();

        Self {
            score: state.score(),
            attempts,
            matched_count,
            total_groups: state.total_groups(),
            accuracy_percent: accuracy_percent(matched_count, attempts),
            is_complete: state.is_complete(),
        }
    }
}

fn accuracy_percent(matched: usize, attempts: u32) -> u32 {
    if attempts == 0 {
        return 0;
    }
    (matched as f64 / f64::from(attempts) * 100.0).round() as u32
}
