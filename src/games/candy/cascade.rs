//! Run detection and gravity.
//!
//! A run is three or more horizontally or vertically consecutive gems of
//! the same non-empty colour. Runs are reported as a set of gem ids so a
//! gem sitting on both a row run and a column run counts once.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::gem::{CandyGem, CandyGrid, COLS, ROWS};
use crate::core::{EntityId, Position};

/// Shortest line of equal gems that clears.
pub const MIN_RUN: usize = 3;

/// Ids of every gem that belongs to a run.
#[must_use]
pub fn find_matches(grid: &CandyGrid) -> FxHashSet<EntityId> {
    let mut matched = FxHashSet::default();

    for row in grid.iter() {
        let line: SmallVec<[&CandyGem; COLS]> = row.iter().collect();
        collect_runs(&line, &mut matched);
    }
    for col in 0..COLS {
        let line: SmallVec<[&CandyGem; ROWS]> = grid.iter().map(|row| &row[col]).collect();
        collect_runs(&line, &mut matched);
    }

    matched
}

/// True when at least one run exists.
#[must_use]
pub fn has_matches(grid: &CandyGrid) -> bool {
    !find_matches(grid).is_empty()
}

/// Greedy scan of one line for maximal runs.
fn collect_runs(line: &[&CandyGem], matched: &mut FxHashSet<EntityId>) {
    let mut start = 0;
    while start < line.len() {
        let kind = line[start].kind;
        let mut end = start + 1;
        while end < line.len() && line[end].kind == kind {
            end += 1;
        }
        if kind.is_some() && end - start >= MIN_RUN {
            matched.extend(line[start..end].iter().map(|gem| gem.id));
        }
        start = end;
    }
}

/// Remove `matched` gems, let the rest fall to the bottom of each column,
/// and fill the vacated top cells from `refill`.
///
/// Returns the number of refilled cells.
pub fn collapse<F>(grid: &mut CandyGrid, matched: &FxHashSet<EntityId>, mut refill: F) -> usize
where
    F: FnMut(Position) -> CandyGem,
{
    let mut refilled = 0;

    for col in 0..COLS {
        let survivors: SmallVec<[CandyGem; ROWS]> = (0..ROWS)
            .rev()
            .map(|row| grid[row][col])
            .filter(|gem| !matched.contains(&gem.id))
            .collect();

        let mut row = ROWS;
        for gem in survivors {
            row -= 1;
            grid[row][col] = gem.moved_to(Position::new(row, col));
        }
        while row > 0 {
            row -= 1;
            grid[row][col] = refill(Position::new(row, col));
            refilled += 1;
        }
    }

    refilled
}
