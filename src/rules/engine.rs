//! Engine trait for game implementations.
//!
//! Games implement `GameEngine` to expose one uniform contract:
//! - Read the current state
//! - Apply an action and get the resulting state back
//! - Start fresh or resume from a saved state

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::core::{ActionRequest, GameRng, GameRngState, NamedAction, Result};

/// Engine trait.
///
/// Each engine exclusively owns its state and RNG. Transitions are
/// synchronous and never fail: an action that does not apply (finished
/// game, illegal move, out-of-range coordinates) returns the unchanged
/// state.
///
/// ## Implementation Notes
///
/// - `fresh`: equivalent of `start_new_game` with default settings
/// - `restore`: resume from a state previously returned by `state`
/// - `handle_action`: must be deterministic for a given RNG position
/// - `is_complete`: decides whether a saved game is resumed or replaced
pub trait GameEngine: Sized {
    /// Full serializable snapshot of a game.
    type State: Clone + Serialize + DeserializeOwned;

    /// Typed actions this engine accepts.
    type Action: NamedAction;

    /// Key the storage collaborator files this game's state under.
    const STORAGE_KEY: &'static str;

    /// Start a new game with default settings.
    fn fresh(rng: GameRng) -> Self;

    /// Resume a previously serialized game.
    fn restore(state: Self::State, rng: GameRng) -> Self;

    /// Current state.
    fn state(&self) -> &Self::State;

    /// Apply one action and return the resulting state.
    fn handle_action(&mut self, action: Self::Action) -> &Self::State;

    /// Whether `state` describes a finished game.
    fn is_complete(state: &Self::State) -> bool;

    /// RNG position, saved alongside the state for exact replay.
    fn rng_state(&self) -> GameRngState;

    // === Convenience Methods ===

    /// Decode a named action and its JSON payload.
    fn parse_action(name: &str, payload: &Value) -> Result<Self::Action> {
        ActionRequest::new(name, payload.clone()).decode()
    }

    /// Apply a named action.
    ///
    /// Unknown names and malformed payloads are logged and ignored, keeping
    /// the same no-op contract as illegal moves.
    fn dispatch(&mut self, name: &str, payload: &Value) -> &Self::State {
        match Self::parse_action(name, payload) {
            Ok(action) => self.handle_action(action),
            Err(err) => {
                log::warn!("{}: ignoring action: {}", Self::STORAGE_KEY, err);
                self.state()
            }
        }
    }

    /// Apply a whole `{action, payload}` request.
    fn dispatch_request(&mut self, request: &ActionRequest) -> &Self::State {
        self.dispatch(&request.action, &request.payload)
    }
}
