//! Sudoku with generated puzzles and an optional timed challenge mode.
//!
//! Classic mode flags every digit that repeats in its row, column or box.
//! Challenge mode instead checks each entry against the hidden solution,
//! counts mistakes and runs a clock.

mod board;
mod config;
mod game;
mod generator;

pub use board::{
    board_from_values, can_place, groups, has_errors, is_full, is_valid_solution, validate_board, Board, Solution,
    SudokuCell, BOX, SIZE,
};
pub use config::{Difficulty, SudokuConfig};
pub use game::{SudokuAction, SudokuEngine, SudokuState};
pub use generator::{carve_puzzle, generate_solution};
