//! Memory integration tests.
//!
//! These tests play full games by looking up pair positions from the
//! state, the way a perfect-memory player would.

use std::collections::HashMap;

use arcade_rules::core::{EntityId, GameRng};
use arcade_rules::games::memory::{MemoryAction, MemoryConfig, MemoryEngine, MemoryState, DEFAULT_SYMBOLS};
use arcade_rules::rules::GameEngine;

fn pairs(state: &MemoryState) -> Vec<(EntityId, EntityId)> {
    let mut by_content: HashMap<&str, Vec<EntityId>> = HashMap::new();
    for card in &state.cards {
        by_content.entry(card.content.as_str()).or_default().push(card.id);
    }
    let mut pairs: Vec<_> = by_content.into_values().map(|ids| (ids[0], ids[1])).collect();
    pairs.sort();
    pairs
}

fn flip(engine: &mut MemoryEngine, card_id: EntityId) -> MemoryState {
    engine.handle_action(MemoryAction::Flip { card_id }).clone()
}

fn mismatched(state: &MemoryState) -> (EntityId, EntityId) {
    let first = &state.cards[0];
    let other = state.cards.iter().find(|c| c.content != first.content).unwrap();
    (first.id, other.id)
}

// =============================================================================
// Deal Tests
// =============================================================================

/// Test that a new deal holds every symbol exactly twice, face down.
#[test]
fn test_deal_has_each_symbol_twice() {
    let engine = MemoryEngine::new(3);
    let state = engine.state();

    assert_eq!(state.cards.len(), 16);
    assert_eq!(state.pair_count(), 8);
    for symbol in DEFAULT_SYMBOLS {
        assert_eq!(state.cards.iter().filter(|c| c.content == symbol).count(), 2);
    }
    assert!(state.cards.iter().all(|c| !c.is_flipped && !c.is_matched));

    let mut ids: Vec<_> = state.cards.iter().map(|c| c.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 16);
}

/// Test that different seeds shuffle differently.
#[test]
fn test_shuffle_depends_on_seed() {
    let a: Vec<_> = MemoryEngine::new(1).state().cards.iter().map(|c| c.content.clone()).collect();
    let b: Vec<_> = MemoryEngine::new(2).state().cards.iter().map(|c| c.content.clone()).collect();
    assert_ne!(a, b);
}

// =============================================================================
// Flip Tests
// =============================================================================

/// Test that a missed pair stays visible until the next click.
#[test]
fn test_missed_pair_flips_back_on_next_click() {
    let mut engine = MemoryEngine::new(9);
    let (a, b) = mismatched(engine.state());

    flip(&mut engine, a);
    let state = flip(&mut engine, b);
    assert_eq!(state.moves, 1);
    assert_eq!(state.pending().len(), 2);

    // Third click: the old pair hides, the clicked card shows.
    let third = state.cards.iter().find(|c| c.id != a && c.id != b).unwrap().id;
    let state = flip(&mut engine, third);
    assert_eq!(state.moves, 1);
    let shown: Vec<_> = state.cards.iter().filter(|c| c.is_flipped).map(|c| c.id).collect();
    assert_eq!(shown, vec![third]);
}

/// Test that clicking a face-up card, a matched card or an unknown id
/// changes nothing.
#[test]
fn test_invalid_flips_are_noops() {
    let mut engine = MemoryEngine::new(5);
    let (first, second) = pairs(engine.state())[0];

    flip(&mut engine, first);
    let before = engine.state().clone();
    assert_eq!(flip(&mut engine, first), before);
    assert_eq!(flip(&mut engine, EntityId(999)), before);

    flip(&mut engine, second);
    let before = engine.state().clone();
    assert_eq!(flip(&mut engine, second), before);
}

/// Test that a perfect game finishes in exactly one move per pair.
#[test]
fn test_perfect_game() {
    let mut engine = MemoryEngine::new(17);
    let pairs = pairs(engine.state());

    for (i, (a, b)) in pairs.iter().enumerate() {
        flip(&mut engine, *a);
        let state = flip(&mut engine, *b);
        assert_eq!(state.matches as usize, i + 1);
    }

    let state = engine.state();
    assert!(state.is_complete);
    assert_eq!(state.moves, 8);
    assert_eq!(state.best_score, Some(8));
    assert!(MemoryEngine::is_complete(state));

    // Completed games ignore flips.
    let before = state.clone();
    assert_eq!(flip(&mut engine, pairs[0].0), before);
}

/// Test that the best score keeps the minimum across games.
#[test]
fn test_best_score_is_minimum() {
    let mut engine = MemoryEngine::new(23);

    // Sloppy game: one miss before each pair but the last.
    for (a, b) in pairs(engine.state()) {
        let decoy = engine
            .state()
            .cards
            .iter()
            .find(|c| c.id != a && c.id != b && !c.is_matched)
            .map(|c| c.id);
        match decoy {
            Some(decoy) => {
                flip(&mut engine, a);
                flip(&mut engine, decoy);
                // Clicking `b` turns the missed pair back and becomes the
                // first pick, so `a` completes the match.
                flip(&mut engine, b);
                let state = flip(&mut engine, a);
                assert!(state.cards.iter().filter(|c| c.id == a || c.id == b).all(|c| c.is_matched));
            }
            None => {
                flip(&mut engine, a);
                flip(&mut engine, b);
            }
        }
    }
    let sloppy = engine.state().moves;
    assert!(engine.state().is_complete);
    // Seven misses plus eight matches.
    assert_eq!(sloppy, 15);
    assert_eq!(engine.state().best_score, Some(sloppy));

    engine.handle_action(MemoryAction::Restart);
    assert_eq!(engine.state().best_score, Some(sloppy));
    for (a, b) in pairs(engine.state()) {
        flip(&mut engine, a);
        flip(&mut engine, b);
    }
    assert_eq!(engine.state().best_score, Some(8));
}

/// Test that a custom symbol set controls the deck size.
#[test]
fn test_custom_symbols() {
    let config = MemoryConfig::default().with_symbols(["A", "B", "C"]);
    let engine = MemoryEngine::with_config(config, GameRng::new(0));

    assert_eq!(engine.state().cards.len(), 6);
    assert_eq!(engine.state().pair_count(), 3);
}

/// Test that card ids use the `cardId` payload key.
#[test]
fn test_dispatch_flip_payload() {
    let mut engine = MemoryEngine::new(2);
    let id = engine.state().cards[4].id;

    let state = engine.dispatch("flip", &serde_json::json!({ "cardId": id.raw() }));
    assert!(state.cards[4].is_flipped);
}

/// Test that a card id sent as a numeric string is accepted.
#[test]
fn test_dispatch_flip_with_string_id() {
    let mut engine = MemoryEngine::new(2);
    let id = engine.state().cards[4].id;

    let state = engine.dispatch("flip", &serde_json::json!({ "cardId": id.raw().to_string() }));
    assert!(state.cards[4].is_flipped);

    let before = state.clone();
    let state = engine.dispatch("flip", &serde_json::json!({ "cardId": "four" }));
    assert_eq!(*state, before);
}
