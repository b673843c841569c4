//! 2048: slide numbered tiles on a 4x4 board, merging equal pairs.
//!
//! - Each move slides every tile as far as it goes in one direction
//! - Two equal tiles that meet merge once per move; the merged value scores
//! - A successful move spawns one tile (2 at 90%, 4 at 10%)
//! - Creating a 2048 tile wins; a full board without pairs ends the game

mod config;
mod game;
mod slide;
mod tile;

pub use config::Game2048Config;
pub use game::{Game2048Action, Game2048Engine, Game2048State};
pub use slide::{preview_move, slide, SlideOutcome};
pub use tile::{empty_cells, grid_from_values, grid_values, has_available_moves, occupied_count, Grid, Tile, SIZE};
