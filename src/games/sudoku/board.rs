//! Cells, boards and conflict validation.

use serde::{Deserialize, Serialize};

use crate::core::Position;

/// Board edge length.
pub const SIZE: usize = 9;
/// Box edge length.
pub const BOX: usize = 3;

/// Playable board. `board[row][col]`.
pub type Board = [[SudokuCell; SIZE]; SIZE];

/// Solved reference grid, digits 1-9.
pub type Solution = [[u8; SIZE]; SIZE];

/// One cell of the playable board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SudokuCell {
    pub row: usize,
    pub col: usize,
    pub value: Option<u8>,
    /// Clue from the generator; never editable.
    pub is_fixed: bool,
    pub is_error: bool,
}

impl SudokuCell {
    #[must_use]
    pub const fn new(row: usize, col: usize, value: Option<u8>) -> Self {
        Self {
            row,
            col,
            value,
            is_fixed: false,
            is_error: false,
        }
    }
}

/// Build a board from plain values. Filled cells become clues.
#[must_use]
pub fn board_from_values(values: [[Option<u8>; SIZE]; SIZE]) -> Board {
    std::array::from_fn(|row| {
        std::array::from_fn(|col| {
            let value = values[row][col];
            SudokuCell {
                is_fixed: value.is_some(),
                ..SudokuCell::new(row, col, value)
            }
        })
    })
}

/// Every row, column and 3x3 box, 27 groups of nine cells.
pub fn groups() -> impl Iterator<Item = [Position; SIZE]> {
    let rows = (0..SIZE).map(|row| std::array::from_fn(|i| Position::new(row, i)));
    let cols = (0..SIZE).map(|col| std::array::from_fn(|i| Position::new(i, col)));
    let boxes = (0..SIZE).map(|b| {
        let (top, left) = ((b / BOX) * BOX, (b % BOX) * BOX);
        std::array::from_fn(|i| Position::new(top + i / BOX, left + i % BOX))
    });
    rows.chain(cols).chain(boxes)
}

/// Recompute every `is_error` flag from scratch: a cell is in error when a
/// peer in its row, column or box holds the same digit.
pub fn validate_board(board: &mut Board) {
    for cell in board.iter_mut().flatten() {
        cell.is_error = false;
    }

    for group in groups() {
        let mut seen = [0u8; SIZE + 1];
        for pos in &group {
            let Some(digit) = board[pos.row][pos.col].value else {
                continue;
            };
            if let Some(count) = seen.get_mut(usize::from(digit)) {
                *count += 1;
            }
        }
        for pos in &group {
            let cell = &mut board[pos.row][pos.col];
            if cell.value.is_some_and(|digit| seen.get(usize::from(digit)).is_some_and(|&count| count > 1)) {
                cell.is_error = true;
            }
        }
    }
}

/// No empty cell remains.
#[must_use]
pub fn is_full(board: &Board) -> bool {
    board.iter().flatten().all(|cell| cell.value.is_some())
}

/// No cell is flagged.
#[must_use]
pub fn has_errors(board: &Board) -> bool {
    board.iter().flatten().any(|cell| cell.is_error)
}

/// Whether `digit` may go at `(row, col)` without repeating in its row,
/// column or box. The cell itself is ignored.
#[must_use]
pub fn can_place(grid: &Solution, row: usize, col: usize, digit: u8) -> bool {
    let (top, left) = ((row / BOX) * BOX, (col / BOX) * BOX);
    (0..SIZE).all(|i| {
        (i == col || grid[row][i] != digit)
            && (i == row || grid[i][col] != digit)
            && {
                let (r, c) = (top + i / BOX, left + i % BOX);
                (r == row && c == col) || grid[r][c] != digit
            }
    })
}

/// Every group of `grid` is a permutation of 1-9.
#[must_use]
pub fn is_valid_solution(grid: &Solution) -> bool {
    groups().all(|group| {
        let mut seen = [false; SIZE + 1];
        group.iter().all(|pos| {
            let digit = usize::from(grid[pos.row][pos.col]);
            (1..=SIZE).contains(&digit) && !std::mem::replace(&mut seen[digit], true)
        })
    })
}
