//! Memory: find the matching pairs in a shuffled, face-down deck.
//!
//! - Flip two cards per move; equal faces stay matched
//! - A missed pair stays visible until the next click turns it back
//! - The game ends when every pair is matched; fewest moves is the best score

mod config;
mod game;

pub use config::{MemoryConfig, DEFAULT_SYMBOLS};
pub use game::{MemoryAction, MemoryCard, MemoryEngine, MemoryState};
