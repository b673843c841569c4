//! Gems and the 8x8 board.

use serde::{Deserialize, Serialize};

use crate::core::{EntityId, GameRng, IdAllocator, Position};

/// Board height.
pub const ROWS: usize = 8;
/// Board width.
pub const COLS: usize = 8;

/// Row-major board. `grid[row][col]`.
pub type CandyGrid = [[CandyGem; COLS]; ROWS];

/// Gem colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GemColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
}

impl GemColor {
    pub const ALL: [GemColor; 6] = [
        GemColor::Red,
        GemColor::Orange,
        GemColor::Yellow,
        GemColor::Green,
        GemColor::Blue,
        GemColor::Purple,
    ];

    /// Uniform pick among the first `palette` colours.
    pub fn random(rng: &mut GameRng, palette: usize) -> Self {
        let palette = palette.clamp(1, Self::ALL.len());
        Self::ALL[rng.gen_range(0..palette)]
    }
}

/// Special gem marker. Carried in the state for the UI; no rule consumes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Special {
    Horizontal,
    Vertical,
    Bomb,
}

/// A gem on the board. `kind == None` marks an empty or special-only cell
/// that never takes part in a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandyGem {
    pub id: EntityId,
    #[serde(rename = "type")]
    pub kind: Option<GemColor>,
    pub row: usize,
    pub col: usize,
    pub special: Option<Special>,
    pub is_new: bool,
    pub is_matched: bool,
}

impl CandyGem {
    #[must_use]
    pub fn new(id: EntityId, kind: Option<GemColor>, at: Position) -> Self {
        Self {
            id,
            kind,
            row: at.row,
            col: at.col,
            special: None,
            is_new: false,
            is_matched: false,
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }

    /// Same copy, relocated to `at`.
    #[must_use]
    pub fn moved_to(self, at: Position) -> Self {
        Self {
            row: at.row,
            col: at.col,
            ..self
        }
    }
}

/// Fill a board with uniformly random gems.
pub fn random_grid(rng: &mut GameRng, ids: &mut IdAllocator, palette: usize) -> CandyGrid {
    std::array::from_fn(|row| {
        std::array::from_fn(|col| {
            let kind = GemColor::random(rng, palette);
            CandyGem::new(ids.alloc(), Some(kind), Position::new(row, col))
        })
    })
}

/// Build a board from explicit colours.
pub fn grid_from_kinds(kinds: [[Option<GemColor>; COLS]; ROWS], ids: &mut IdAllocator) -> CandyGrid {
    std::array::from_fn(|row| {
        std::array::from_fn(|col| CandyGem::new(ids.alloc(), kinds[row][col], Position::new(row, col)))
    })
}

/// Colours of a board.
#[must_use]
pub fn grid_kinds(grid: &CandyGrid) -> [[Option<GemColor>; COLS]; ROWS] {
    std::array::from_fn(|row| std::array::from_fn(|col| grid[row][col].kind))
}

/// Exchange two cells, keeping each gem's `row`/`col` in step with its slot.
pub fn swap_cells(grid: &mut CandyGrid, a: Position, b: Position) {
    let first = grid[a.row][a.col];
    let second = grid[b.row][b.col];
    grid[a.row][a.col] = second.moved_to(a);
    grid[b.row][b.col] = first.moved_to(b);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_grid_positions_match_slots() {
        let mut rng = GameRng::new(42);
        let mut ids = IdAllocator::default();
        let grid = random_grid(&mut rng, &mut ids, 6);

        for (row, line) in grid.iter().enumerate() {
            for (col, gem) in line.iter().enumerate() {
                assert_eq!(gem.position(), Position::new(row, col));
                assert!(gem.kind.is_some());
            }
        }
        assert_eq!(ids.peek(), EntityId((ROWS * COLS) as u32));
    }

    #[test]
    fn test_palette_limits_colours() {
        let mut rng = GameRng::new(3);
        for _ in 0..200 {
            let color = GemColor::random(&mut rng, 2);
            assert!(color == GemColor::Red || color == GemColor::Orange);
        }
    }

    #[test]
    fn test_swap_cells_updates_coordinates() {
        let mut rng = GameRng::new(1);
        let mut ids = IdAllocator::default();
        let mut grid = random_grid(&mut rng, &mut ids, 6);
        let a = grid[2][3];
        let b = grid[2][4];

        swap_cells(&mut grid, Position::new(2, 3), Position::new(2, 4));

        assert_eq!(grid[2][3].id, b.id);
        assert_eq!(grid[2][4].id, a.id);
        assert_eq!(grid[2][3].position(), Position::new(2, 3));
        assert_eq!(grid[2][4].position(), Position::new(2, 4));
    }

    #[test]
    fn test_gem_serializes_kind_as_type() {
        let gem = CandyGem::new(EntityId(5), Some(GemColor::Blue), Position::new(1, 2));
        let json = serde_json::to_value(gem).unwrap();
        assert_eq!(json["type"], "blue");
        assert_eq!(json["isNew"], false);
    }
}
