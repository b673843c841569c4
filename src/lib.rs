//! # arcade-rules
//!
//! Deterministic rule engines for four casual puzzle games: 2048, Memory,
//! Candy-Match and Sudoku.
//!
//! ## Design Principles
//!
//! 1. **Pure State Machines**: An engine owns one state and applies one
//!    action at a time. Nothing runs in the background.
//!
//! 2. **Invalid Input Is A No-Op**: Illegal moves, finished games and bad
//!    coordinates return the unchanged state. Errors exist only where text
//!    crosses the boundary (action payloads, save files).
//!
//! 3. **Injectable Randomness**: Every engine draws from a seeded
//!    `GameRng`, so a seed plus an action list replays a game exactly.
//!
//! ## Modules
//!
//! - `core`: Entity ids, grid coordinates, RNG, clock, action requests, errors
//! - `rules`: `GameEngine` trait shared by every game
//! - `games`: The four engines
//! - `storage`: Save games keyed per engine

pub mod core;
pub mod games;
pub mod rules;
pub mod storage;

// Re-export commonly used types
pub use crate::core::{
    ActionRequest, Clock, Direction, EngineError, EntityId, GameRng, GameRngState, ManualClock, NamedAction,
    Position, Result, SystemClock,
};

pub use crate::rules::GameEngine;

pub use crate::games::candy::{CandyAction, CandyEngine, CandyState};
pub use crate::games::memory::{MemoryAction, MemoryEngine, MemoryState};
pub use crate::games::sudoku::{Difficulty, SudokuAction, SudokuEngine, SudokuState};
pub use crate::games::twenty48::{Game2048Action, Game2048Engine, Game2048State};

pub use crate::storage::{load_or_start, save_game, MemoryStore, SavedGame, StateStore};
