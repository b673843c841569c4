//! Game implementations.
//!
//! Each game is a self-contained engine implementing `GameEngine`:
//! - `twenty48`: sliding tile merges on a 4x4 board
//! - `memory`: pair matching on a shuffled deck
//! - `candy`: swap-to-match with cascades on an 8x8 board
//! - `sudoku`: generated puzzles with an optional timed challenge

pub mod candy;
pub mod memory;
pub mod sudoku;
pub mod twenty48;
