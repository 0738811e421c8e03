//! End-to-end play through the starter catalog.

use std::time::Duration;

use memory_match::cards::{CardId, Catalog, GroupKey};
use memory_match::core::CueError;
use memory_match::rules::{AudioCue, MatchingEngine, PairOutcome, Phase, StepOutcome};
use memory_match::runtime::{AudioCueSink, ManualScheduler, MatchingGame};

/// Sink that records every cue it is asked to play.
#[derive(Default)]
struct Recorder {
    played: Vec<AudioCue>,
}

impl AudioCueSink for Recorder {
    fn play_cue(&mut self, cue: AudioCue) -> Result<(), CueError> {
        self.played.push(cue);
        Ok(())
    }
}

fn id(s: &str) -> CardId {
    CardId::new(s)
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn new_game(seed: u64) -> MatchingGame<ManualScheduler, Recorder> {
    MatchingGame::new(
        MatchingEngine::with_seed(seed),
        Catalog::starter(),
        ManualScheduler::new(),
        Recorder::default(),
    )
}

fn groups(names: &[&str]) -> Vec<GroupKey> {
    names.iter().map(|n| GroupKey::new(*n)).collect()
}

// =============================================================================
// Full Game
// =============================================================================

#[test]
fn test_full_game_scenario() {
    let mut game = new_game(42);
    assert_eq!(game.state().deck().len(), 6);

    // apple pair
    assert_eq!(game.select(&id("apple-1")), StepOutcome::Flipped);
    assert_eq!(
        game.select(&id("apple-2")),
        StepOutcome::Evaluating(PairOutcome::Match)
    );
    assert_eq!(game.stats().attempts, 1);
    assert_eq!(game.stats().score, 0);

    assert!(game.advance(ms(999)).is_empty());
    assert_eq!(game.advance(ms(1)), vec![StepOutcome::Committed]);

    let stats = game.stats();
    assert_eq!(stats.score, 10);
    assert_eq!(stats.matched_count, 1);
    assert!(!stats.is_complete);
    assert_eq!(game.state().matched_groups().iter().cloned().collect::<Vec<_>>(), groups(&["apple"]));

    // cat-1 / sun-1 mismatch
    game.select(&id("cat-1"));
    assert_eq!(
        game.select(&id("sun-1")),
        StepOutcome::Evaluating(PairOutcome::Miss)
    );
    assert_eq!(game.stats().attempts, 2);

    // Still face-up at the match delay; only the miss delay reverts
    assert!(game.advance(ms(1000)).is_empty());
    assert!(game.state().is_face_up(&id("cat-1")));
    assert_eq!(game.advance(ms(500)), vec![StepOutcome::Reverted]);
    assert!(!game.state().is_face_up(&id("cat-1")));
    assert!(!game.state().is_face_up(&id("sun-1")));
    assert_eq!(game.stats().score, 10);

    // cat pair
    game.select(&id("cat-1"));
    game.select(&id("cat-2"));
    game.advance(ms(1000));
    assert_eq!(game.stats().score, 20);
    assert_eq!(
        game.state().matched_groups().iter().cloned().collect::<Vec<_>>(),
        groups(&["apple", "cat"])
    );

    // sun pair
    game.select(&id("sun-1"));
    game.select(&id("sun-2"));
    game.advance(ms(1000));

    let stats = game.stats();
    assert_eq!(stats.score, 30);
    assert_eq!(stats.attempts, 4);
    assert_eq!(stats.matched_count, 3);
    assert_eq!(stats.total_groups, 3);
    assert!(stats.is_complete);
    assert_eq!(stats.accuracy_percent, 75);
    assert_eq!(
        game.state().matched_groups().iter().cloned().collect::<Vec<_>>(),
        groups(&["apple", "cat", "sun"])
    );

    assert_eq!(game.audio().played, vec![AudioCue::Success; 3]);
    assert!(game.state().deck().iter().all(|c| c.is_matched && c.is_flipped));
    assert!(game.state().selectable_cards().is_empty());
}

#[test]
fn test_perfect_game_accuracy() {
    let mut game = new_game(7);

    for group in ["sun", "apple", "cat"] {
        game.select(&CardId::new(format!("{group}-1")));
        game.select(&CardId::new(format!("{group}-2")));
        game.advance(ms(1000));
    }

    let stats = game.stats();
    assert!(stats.is_complete);
    assert_eq!(stats.attempts, 3);
    assert_eq!(stats.accuracy_percent, 100);
}

// =============================================================================
// Selection Rules
// =============================================================================

#[test]
fn test_third_card_changes_nothing() {
    let mut game = new_game(1);
    game.select(&id("cat-1"));
    game.select(&id("sun-1"));
    let before = game.state().clone();

    for card in ["apple-1", "apple-2", "cat-2", "sun-2"] {
        assert!(!game.select(&id(card)).is_applied());
    }

    assert_eq!(game.state(), &before);
    assert_eq!(game.state().phase(), Phase::Evaluating);
}

#[test]
fn test_selectable_after_revert() {
    let mut game = new_game(1);
    game.select(&id("cat-1"));
    game.select(&id("sun-1"));
    game.advance(ms(1500));

    assert_eq!(game.state().phase(), Phase::Idle);
    assert_eq!(game.state().selectable_cards().len(), 6);
    assert_eq!(game.select(&id("cat-1")), StepOutcome::Flipped);
}

#[test]
fn test_attempts_count_once_per_pair() {
    let mut game = new_game(3);

    // Miss, miss, match
    for (a, b) in [("apple-1", "cat-1"), ("cat-2", "sun-2"), ("apple-1", "apple-2")] {
        game.select(&id(a));
        game.select(&id(b));
        game.advance(ms(1500));
    }

    let stats = game.stats();
    assert_eq!(stats.attempts, 3);
    assert_eq!(stats.matched_count, 1);
    assert_eq!(stats.accuracy_percent, 33);
}

#[test]
fn test_stats_before_first_attempt() {
    let game = new_game(5);
    let stats = game.stats();

    assert_eq!(stats.attempts, 0);
    assert_eq!(stats.accuracy_percent, 0);
    assert!(!stats.is_complete);
}
