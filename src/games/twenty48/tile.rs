//! Tiles and the 4x4 grid.

use serde::{Deserialize, Serialize};

use crate::core::{EntityId, IdAllocator, Position};

/// Board edge length.
pub const SIZE: usize = 4;

/// Row-major grid of optional tiles. `grid[row][col]`.
pub type Grid = [[Option<Tile>; SIZE]; SIZE];

/// A numbered tile.
///
/// `merged_from` and `is_new` describe the most recent move only; callers
/// use them to animate merges and spawns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    pub id: EntityId,
    pub value: u32,
    pub row: usize,
    pub col: usize,
    pub merged_from: Option<[EntityId; 2]>,
    pub is_new: bool,
}

impl Tile {
    #[must_use]
    pub fn new(id: EntityId, value: u32, at: Position) -> Self {
        Self {
            id,
            value,
            row: at.row,
            col: at.col,
            merged_from: None,
            is_new: false,
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }
}

/// An empty grid.
#[must_use]
pub fn empty_grid() -> Grid {
    Default::default()
}

/// Build a grid from plain values, `0` meaning empty.
pub fn grid_from_values(values: [[u32; SIZE]; SIZE], ids: &mut IdAllocator) -> Grid {
    std::array::from_fn(|row| {
        std::array::from_fn(|col| {
            let value = values[row][col];
            (value != 0).then(|| Tile::new(ids.alloc(), value, Position::new(row, col)))
        })
    })
}

/// Plain values of a grid, `0` meaning empty.
#[must_use]
pub fn grid_values(grid: &Grid) -> [[u32; SIZE]; SIZE] {
    std::array::from_fn(|row| std::array::from_fn(|col| grid[row][col].as_ref().map_or(0, |tile| tile.value)))
}

/// Every empty cell in row-major order.
#[must_use]
pub fn empty_cells(grid: &Grid) -> Vec<Position> {
    (0..SIZE)
        .flat_map(|row| (0..SIZE).map(move |col| Position::new(row, col)))
        .filter(|pos| grid[pos.row][pos.col].is_none())
        .collect()
}

/// Number of occupied cells.
#[must_use]
pub fn occupied_count(grid: &Grid) -> usize {
    grid.iter().flatten().filter(|cell| cell.is_some()).count()
}

/// True when some slide would change the grid: an empty cell exists or two
/// orthogonal neighbours share a value.
#[must_use]
pub fn has_available_moves(grid: &Grid) -> bool {
    for row in 0..SIZE {
        for col in 0..SIZE {
            let Some(tile) = &grid[row][col] else {
                return true;
            };
            let right = (col + 1 < SIZE).then(|| &grid[row][col + 1]).and_then(Option::as_ref);
            let down = (row + 1 < SIZE).then(|| &grid[row + 1][col]).and_then(Option::as_ref);
            if right.is_some_and(|other| other.value == tile.value)
                || down.is_some_and(|other| other.value == tile.value)
            {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_from_values_places_tiles() {
        let mut ids = IdAllocator::default();
        let grid = grid_from_values([[2, 0, 0, 0], [0, 4, 0, 0], [0, 0, 0, 0], [0, 0, 0, 8]], &mut ids);

        assert_eq!(occupied_count(&grid), 3);
        let tile = grid[1][1].as_ref().unwrap();
        assert_eq!(tile.value, 4);
        assert_eq!(tile.position(), Position::new(1, 1));
        assert_eq!(grid_values(&grid)[3][3], 8);
        assert_eq!(ids.peek(), EntityId(3));
    }

    #[test]
    fn test_full_grid_without_pairs_is_stuck() {
        let mut ids = IdAllocator::default();
        let grid = grid_from_values(
            [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]],
            &mut ids,
        );
        assert!(empty_cells(&grid).is_empty());
        assert!(!has_available_moves(&grid));
    }

    #[test]
    fn test_full_grid_with_vertical_pair_has_moves() {
        let mut ids = IdAllocator::default();
        let grid = grid_from_values(
            [[2, 4, 2, 4], [2, 2, 4, 2], [4, 4, 2, 4], [8, 2, 4, 2]],
            &mut ids,
        );
        assert!(has_available_moves(&grid));
    }

    #[test]
    fn test_single_gap_has_moves() {
        let mut ids = IdAllocator::default();
        let grid = grid_from_values(
            [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 0]],
            &mut ids,
        );
        assert_eq!(empty_cells(&grid), vec![Position::new(3, 3)]);
        assert!(has_available_moves(&grid));
    }
}
