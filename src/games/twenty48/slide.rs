//! Slide-and-merge kernel.
//!
//! Shared by the engine and by `preview_move`, the optimistic client-side
//! variant that renders a slide before the authoritative result (with its
//! spawned tile) arrives.

use smallvec::SmallVec;

use super::tile::{Grid, Tile, SIZE};
use crate::core::{Direction, EntityId, IdAllocator, Position};

/// Result of sliding a grid in one direction.
#[derive(Clone, Debug, PartialEq)]
pub struct SlideOutcome {
    /// Grid after the slide. No tile is spawned.
    pub grid: Grid,
    /// Sum of the values of all tiles created by merges.
    pub score_gained: u32,
    /// Whether any tile moved or merged.
    pub moved: bool,
    /// Values of the tiles created by merges, in creation order.
    pub merged_values: SmallVec<[u32; 8]>,
}

/// Slide every tile towards `direction`, merging equal neighbours.
///
/// Markers from the previous move (`merged_from`, `is_new`) are cleared
/// first. A tile takes part in at most one merge per slide: a tile produced
/// by a merge carries `merged_from` and refuses further merges.
pub fn slide(grid: &Grid, direction: Direction, ids: &mut IdAllocator) -> SlideOutcome {
    let mut grid = grid.clone();
    for tile in grid.iter_mut().flatten().flatten() {
        tile.merged_from = None;
        tile.is_new = false;
    }

    let vector = direction.vector();
    let mut score_gained = 0;
    let mut moved = false;
    let mut merged_values = SmallVec::new();

    for origin in traversal_order(direction) {
        let Some(tile) = grid[origin.row][origin.col].take() else {
            continue;
        };

        let (farthest, next) = find_farthest(&grid, origin, vector);

        if let Some((target, target_id)) = next.and_then(|next| merge_target(&grid, next, tile.value)) {
            let value = tile.value * 2;
            let mut merged = Tile::new(ids.alloc(), value, target);
            merged.merged_from = Some([target_id, tile.id]);
            grid[target.row][target.col] = Some(merged);

            score_gained += value;
            merged_values.push(value);
            moved = true;
        } else {
            if farthest != origin {
                moved = true;
            }
            grid[farthest.row][farthest.col] = Some(Tile {
                row: farthest.row,
                col: farthest.col,
                ..tile
            });
        }
    }

    SlideOutcome {
        grid,
        score_gained,
        moved,
        merged_values,
    }
}

/// Compute a slide without touching any engine: no spawn, no game-over
/// check. Merged tiles get provisional ids above every id on the grid.
#[must_use]
pub fn preview_move(grid: &Grid, direction: Direction) -> SlideOutcome {
    let next_id = grid
        .iter()
        .flatten()
        .flatten()
        .map(|tile| tile.id.raw() + 1)
        .max()
        .unwrap_or(0);
    slide(grid, direction, &mut IdAllocator::starting_at(next_id))
}

/// Cells in the order they must be processed: the edge tiles move towards
/// is visited first, so a placed tile is never revisited.
fn traversal_order(direction: Direction) -> impl Iterator<Item = Position> {
    let (d_row, d_col) = direction.vector();
    let rows: SmallVec<[usize; SIZE]> = if d_row == 1 {
        (0..SIZE).rev().collect()
    } else {
        (0..SIZE).collect()
    };
    let cols: SmallVec<[usize; SIZE]> = if d_col == 1 {
        (0..SIZE).rev().collect()
    } else {
        (0..SIZE).collect()
    };

    rows.into_iter()
        .flat_map(move |row| cols.clone().into_iter().map(move |col| Position::new(row, col)))
}

/// Walk from `from` along `vector` over empty cells. Returns the last empty
/// cell reached and the first blocking cell, if still on the board.
fn find_farthest(grid: &Grid, from: Position, vector: (isize, isize)) -> (Position, Option<Position>) {
    let mut farthest = from;
    loop {
        match farthest.offset(vector, SIZE, SIZE) {
            Some(next) if grid[next.row][next.col].is_none() => farthest = next,
            next => return (farthest, next),
        }
    }
}

fn merge_target(grid: &Grid, at: Position, value: u32) -> Option<(Position, EntityId)> {
    match &grid[at.row][at.col] {
        Some(tile) if tile.value == value && tile.merged_from.is_none() => Some((at, tile.id)),
        _ => None,
    }
}
