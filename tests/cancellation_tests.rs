//! Restarting while a resolution is in flight.
//!
//! A timer scheduled for an old session must not touch the new deck
//! when it finally fires.

use std::time::Duration;

use memory_match::cards::{CardId, Catalog};
use memory_match::rules::{MatchingEngine, Resolution, StepOutcome};
use memory_match::runtime::{ManualScheduler, MatchingGame, SilentSink};

fn id(s: &str) -> CardId {
    CardId::new(s)
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn new_game() -> MatchingGame<ManualScheduler, SilentSink> {
    MatchingGame::new(
        MatchingEngine::with_seed(11),
        Catalog::starter(),
        ManualScheduler::new(),
        SilentSink,
    )
}

#[test]
fn test_stale_commit_after_restart() {
    let mut game = new_game();
    game.select(&id("apple-1"));
    game.select(&id("apple-2"));

    game.restart();
    let fresh = game.state().clone();

    let outcomes = game.advance(ms(1000));

    assert_eq!(outcomes, vec![StepOutcome::Stale]);
    assert_eq!(game.state(), &fresh);
    assert_eq!(game.stats().score, 0);
    assert!(game.state().deck().iter().all(|c| !c.is_flipped && !c.is_matched));
}

#[test]
fn test_stale_revert_after_restart_keeps_new_selection() {
    let mut game = new_game();
    game.select(&id("cat-1"));
    game.select(&id("sun-1"));

    game.restart();
    // Same ids are face-up in the new session when the old revert fires
    game.select(&id("cat-1"));

    let outcomes = game.advance(ms(1500));

    assert_eq!(outcomes, vec![StepOutcome::Stale]);
    assert!(game.state().is_face_up(&id("cat-1")));
    assert_eq!(game.state().pending(), &[id("cat-1")]);
}

#[test]
fn test_new_session_resolves_independently() {
    let mut game = new_game();
    game.select(&id("cat-1"));
    game.select(&id("sun-1"));
    game.advance(ms(500));

    game.restart();
    game.select(&id("sun-1"));
    game.select(&id("sun-2"));
    assert_eq!(game.scheduler().pending_count(), 2);

    // Old revert (due at 1500) and new commit (due at 1500) fire together
    let outcomes = game.advance(ms(1000));

    assert_eq!(outcomes, vec![StepOutcome::Stale, StepOutcome::Committed]);
    assert_eq!(game.stats().score, 10);
    assert_eq!(game.stats().matched_count, 1);
}

#[test]
fn test_intent_tagged_with_generation() {
    let mut engine = MatchingEngine::with_seed(2);
    let first = engine.deal(&Catalog::starter());
    let t = engine.select_card(&first, &id("cat-1"));
    let t = engine.select_card(&t.state, &id("sun-2"));

    let intent = &t.intents[0];
    assert_eq!(intent.generation, first.generation());
    assert_eq!(intent.action, Resolution::Revert);

    let second = engine.deal(&Catalog::starter());
    assert!(second.generation() > intent.generation);
    assert_eq!(engine.resolve_pair(&second, intent).outcome, StepOutcome::Stale);
}
