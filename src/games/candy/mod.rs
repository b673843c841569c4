//! Candy-Match: swap neighbouring gems to line up three or more of a colour.
//!
//! - A swap only counts if it creates a run; otherwise it is undone
//! - Runs clear, gems above fall, new gems drop in from the top
//! - Each cascade step within one swap scores with a growing multiplier
//! - The game ends when the moves run out or the target score is reached

mod cascade;
mod config;
mod game;
mod gem;

pub use cascade::{collapse, find_matches, has_matches, MIN_RUN};
pub use config::{CandyConfig, MIN_COLORS};
pub use game::{CandyAction, CandyEngine, CandyState};
pub use gem::{grid_from_kinds, grid_kinds, random_grid, swap_cells, CandyGem, CandyGrid, GemColor, Special, COLS, ROWS};
