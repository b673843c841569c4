//! Puzzle generation: a randomized backtracking fill, then clue removal.

use super::board::{board_from_values, can_place, Board, Solution, SIZE};
use crate::core::GameRng;

const DIGITS: [u8; SIZE] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Fill an empty grid in row-major order, trying digits in a fresh
/// shuffled order at every cell.
#[must_use]
pub fn generate_solution(rng: &mut GameRng) -> Solution {
    let mut grid = [[0; SIZE]; SIZE];
    let filled = fill_from(&mut grid, 0, rng);
    // An empty grid always has a completion.
    debug_assert!(filled);
    grid
}

fn fill_from(grid: &mut Solution, index: usize, rng: &mut GameRng) -> bool {
    if index == SIZE * SIZE {
        return true;
    }
    let (row, col) = (index / SIZE, index % SIZE);

    let mut digits = DIGITS;
    rng.shuffle(&mut digits);
    for digit in digits {
        if can_place(grid, row, col, digit) {
            grid[row][col] = digit;
            if fill_from(grid, index + 1, rng) {
                return true;
            }
            grid[row][col] = 0;
        }
    }
    false
}

/// Blank exactly `removals` distinct cells of `solution`, picked uniformly at
/// random (already-blank picks are redrawn). Cells left filled are clues.
///
/// No uniqueness check is made: the puzzle may admit other completions.
#[must_use]
pub fn carve_puzzle(solution: &Solution, removals: usize, rng: &mut GameRng) -> Board {
    let mut values = solution.map(|row| row.map(Some));
    let target = removals.min(SIZE * SIZE);

    let mut removed = 0;
    while removed < target {
        let row = rng.gen_range(0..SIZE);
        let col = rng.gen_range(0..SIZE);
        if values[row][col].take().is_some() {
            removed += 1;
        }
    }

    board_from_values(values)
}
