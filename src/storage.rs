//! Save games.
//!
//! A `SavedGame` pairs an engine state with the RNG position that produced
//! it, so a restored engine continues with exactly the same random draws.
//! Stores are plain string maps keyed by `GameEngine::STORAGE_KEY`; the
//! library ships an in-memory one and callers can back the trait with
//! whatever they persist to.
//!
//! ## Usage
//!
//! ```
//! use arcade_rules::games::memory::{MemoryAction, MemoryEngine};
//! use arcade_rules::rules::GameEngine;
//! use arcade_rules::storage::{load_or_start, save_game, MemoryStore};
//! use arcade_rules::{EntityId, GameRng};
//!
//! let mut store = MemoryStore::default();
//! let mut engine = MemoryEngine::new(1);
//! engine.handle_action(MemoryAction::Flip { card_id: EntityId(0) });
//! save_game(&mut store, &engine).unwrap();
//!
//! let resumed: MemoryEngine = load_or_start(&store, GameRng::new(2));
//! assert_eq!(resumed.state(), engine.state());
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{GameRng, GameRngState, Result};
use crate::rules::GameEngine;

/// Key-value persistence for serialized games.
pub trait StateStore {
    /// Stored text for `key`, if any.
    fn load(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing what was there.
    fn save(&mut self, key: &str, value: String);

    /// Forget `key`.
    fn remove(&mut self, key: &str);
}

/// In-memory `StateStore`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StateStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_owned(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// A game state plus the RNG position it was saved at.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedGame<S> {
    pub state: S,
    pub rng: GameRngState,
}

impl<S: Clone> SavedGame<S> {
    /// Snapshot a running engine.
    #[must_use]
    pub fn capture<E: GameEngine<State = S>>(engine: &E) -> Self {
        Self {
            state: engine.state().clone(),
            rng: engine.rng_state(),
        }
    }

    /// Rebuild an engine from this snapshot.
    #[must_use]
    pub fn into_engine<E: GameEngine<State = S>>(self) -> E {
        E::restore(self.state, GameRng::from_state(&self.rng))
    }
}

/// Write `engine` to `store` as JSON under its storage key.
pub fn save_game<E: GameEngine>(store: &mut impl StateStore, engine: &E) -> Result<()> {
    let json = serde_json::to_string(&SavedGame::capture(engine))?;
    store.save(E::STORAGE_KEY, json);
    Ok(())
}

/// Read the saved game for `E`, if one exists.
pub fn load_game<E: GameEngine>(store: &impl StateStore) -> Result<Option<SavedGame<E::State>>> {
    match store.load(E::STORAGE_KEY) {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

/// Resume the stored game for `E` if it is still in progress; otherwise
/// start a fresh one from `rng`.
///
/// A save that fails to parse is logged and treated as absent.
pub fn load_or_start<E: GameEngine>(store: &impl StateStore, rng: GameRng) -> E {
    match load_game::<E>(store) {
        Ok(Some(saved)) if !E::is_complete(&saved.state) => {
            log::debug!("{}: resuming saved game", E::STORAGE_KEY);
            saved.into_engine()
        }
        Ok(Some(_)) => {
            log::debug!("{}: saved game is finished, starting fresh", E::STORAGE_KEY);
            E::fresh(rng)
        }
        Ok(None) => E::fresh(rng),
        Err(err) => {
            log::warn!("{}: discarding unreadable save: {}", E::STORAGE_KEY, err);
            E::fresh(rng)
        }
    }
}

/// Compact binary form of a `SavedGame`.
pub fn encode_snapshot<E: GameEngine>(engine: &E) -> Result<Vec<u8>> {
    Ok(bincode::serialize(&SavedGame::capture(engine))?)
}

/// Rebuild an engine from `encode_snapshot` output.
pub fn decode_snapshot<E: GameEngine>(bytes: &[u8]) -> Result<E> {
    let saved: SavedGame<E::State> = bincode::deserialize(bytes)?;
    Ok(saved.into_engine())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, EngineError};
    use crate::games::twenty48::{Game2048Action, Game2048Engine};

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());

        store.save("a", "1".to_owned());
        store.save("a", "2".to_owned());
        assert_eq!(store.load("a").as_deref(), Some("2"));
        assert_eq!(store.len(), 1);

        store.remove("a");
        assert!(!store.contains("a"));
        assert_eq!(store.load("a"), None);
    }

    #[test]
    fn test_save_uses_storage_key() {
        let mut store = MemoryStore::new();
        save_game(&mut store, &Game2048Engine::new(1)).unwrap();
        assert!(store.contains("game-2048"));
    }

    #[test]
    fn test_load_missing_is_none() {
        let store = MemoryStore::new();
        assert!(load_game::<Game2048Engine>(&store).unwrap().is_none());
    }

    #[test]
    fn test_corrupt_save_is_an_error_and_starts_fresh() {
        let mut store = MemoryStore::new();
        store.save("game-2048", "{not json".to_owned());

        assert!(matches!(load_game::<Game2048Engine>(&store), Err(EngineError::Json(_))));

        let engine: Game2048Engine = load_or_start(&store, GameRng::new(4));
        assert_eq!(engine.state(), Game2048Engine::new(4).state());
    }

    #[test]
    fn test_snapshot_replays_identically() {
        let mut engine = Game2048Engine::new(21);
        engine.handle_action(Game2048Action::Move { direction: Direction::Left });

        let bytes = encode_snapshot(&engine).unwrap();
        let mut restored: Game2048Engine = decode_snapshot(&bytes).unwrap();
        assert_eq!(restored.state(), engine.state());

        for direction in [Direction::Up, Direction::Right, Direction::Down] {
            let expected = engine.handle_action(Game2048Action::Move { direction }).clone();
            assert_eq!(*restored.handle_action(Game2048Action::Move { direction }), expected);
        }
    }

    #[test]
    fn test_truncated_snapshot_is_binary_error() {
        let bytes = encode_snapshot(&Game2048Engine::new(2)).unwrap();
        let result = decode_snapshot::<Game2048Engine>(&bytes[..bytes.len() / 2]);
        assert!(matches!(result, Err(EngineError::Binary(_))));
    }
}
