//! Core engine types: entity ids, grid coordinates, RNG, clock, actions,
//! errors.
//!
//! Nothing here knows about a particular game. Engines in `games` build on
//! these pieces.

pub mod action;
pub mod clock;
pub mod entity;
pub mod error;
pub mod grid;
pub mod rng;

pub use action::{ActionRequest, NamedAction};
pub use clock::{Clock, ManualClock, SystemClock};
pub use entity::{EntityId, IdAllocator};
pub use error::{EngineError, Result};
pub use grid::{Direction, Position};
pub use rng::{GameRng, GameRngState};
