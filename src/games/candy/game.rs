//! Candy-Match engine implementation.

use serde::{Deserialize, Serialize};

use super::cascade::{collapse, find_matches};
use super::config::CandyConfig;
use super::gem::{grid_from_kinds, random_grid, swap_cells, CandyGem, CandyGrid, GemColor, COLS, ROWS};
use crate::core::{GameRng, GameRngState, IdAllocator, NamedAction, Position};
use crate::rules::GameEngine;

/// Full Candy-Match game state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandyState {
    pub grid: CandyGrid,
    pub score: u32,
    pub moves_left: u32,
    pub target_score: u32,
    pub is_complete: bool,
    /// Multiplier for the next cascade step. Reset to 1 on each accepted
    /// swap, incremented after every cleared step.
    pub combo_multiplier: u32,
    /// Next gem id.
    pub next_id: IdAllocator,
}

impl CandyState {
    /// A game at its first move, on an explicit board.
    #[must_use]
    pub fn from_kinds(kinds: [[Option<GemColor>; COLS]; ROWS], config: &CandyConfig) -> Self {
        let mut next_id = IdAllocator::default();
        let grid = grid_from_kinds(kinds, &mut next_id);
        Self {
            grid,
            score: 0,
            moves_left: config.moves,
            target_score: config.target_score,
            is_complete: false,
            combo_multiplier: 1,
            next_id,
        }
    }
}

/// Actions accepted by the Candy-Match engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "payload", rename_all = "snake_case")]
pub enum CandyAction {
    /// Exchange two orthogonally adjacent gems.
    Swap {
        row1: usize,
        col1: usize,
        row2: usize,
        col2: usize,
    },
    /// Roll a new board.
    #[serde(alias = "new_game")]
    Restart,
}

impl CandyAction {
    /// Swap between two positions.
    #[must_use]
    pub fn swap(a: Position, b: Position) -> Self {
        CandyAction::Swap {
            row1: a.row,
            col1: a.col,
            row2: b.row,
            col2: b.col,
        }
    }
}

impl NamedAction for CandyAction {
    const NAMES: &'static [&'static str] = &["swap", "restart", "new_game"];
}

/// Candy-Match engine.
#[derive(Clone, Debug)]
pub struct CandyEngine {
    state: CandyState,
    config: CandyConfig,
    rng: GameRng,
}

impl CandyEngine {
    /// Fresh game with default config.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_config(CandyConfig::default(), GameRng::new(seed))
    }

    /// Fresh game with a custom config.
    #[must_use]
    pub fn with_config(config: CandyConfig, rng: GameRng) -> Self {
        let state = CandyState::from_kinds([[None; COLS]; ROWS], &config);
        let mut engine = Self { state, config, rng };
        engine.start_new_game();
        engine
    }

    /// Resume from a saved state with a custom config.
    #[must_use]
    pub fn from_state(state: CandyState, config: CandyConfig, rng: GameRng) -> Self {
        Self { state, config, rng }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &CandyConfig {
        &self.config
    }

    /// Roll boards until one has no ready-made run, then reset counters.
    pub fn start_new_game(&mut self) -> &CandyState {
        let palette = self.config.palette();
        let mut attempts = 1;
        let mut grid = random_grid(&mut self.rng, &mut self.state.next_id, palette);
        while !find_matches(&grid).is_empty() {
            attempts += 1;
            grid = random_grid(&mut self.rng, &mut self.state.next_id, palette);
        }

        self.state.grid = grid;
        self.state.score = 0;
        self.state.moves_left = self.config.moves;
        self.state.target_score = self.config.target_score;
        self.state.combo_multiplier = 1;
        self.state.is_complete = false;

        log::debug!("candy: new board after {} roll(s)", attempts);
        &self.state
    }

    fn swap(&mut self, a: Position, b: Position) {
        if self.state.is_complete || self.state.moves_left == 0 {
            log::trace!("candy: no moves left, ignoring swap");
            return;
        }
        if a.row >= ROWS || a.col >= COLS || b.row >= ROWS || b.col >= COLS || !a.is_adjacent(b) {
            log::trace!("candy: illegal swap {} <-> {}", a, b);
            return;
        }

        let original = self.state.grid;
        swap_cells(&mut self.state.grid, a, b);
        if find_matches(&self.state.grid).is_empty() {
            self.state.grid = original;
            log::trace!("candy: swap {} <-> {} makes no run, reverted", a, b);
            return;
        }

        for gem in self.state.grid.iter_mut().flatten() {
            gem.is_new = false;
        }
        self.state.moves_left -= 1;
        self.state.combo_multiplier = 1;

        let cascades = self.resolve_cascades();
        log::debug!(
            "candy: swap {} <-> {} resolved in {} cascade(s), score {}",
            a,
            b,
            cascades,
            self.state.score
        );

        if self.state.moves_left == 0 || self.state.score >= self.state.target_score {
            self.state.is_complete = true;
            log::debug!("candy: complete with score {}", self.state.score);
        }
    }

    /// Clear runs, score them, drop and refill until the board is stable or
    /// the cascade cap is reached. Returns the steps taken.
    fn resolve_cascades(&mut self) -> u32 {
        let mut steps = 0;
        while steps < self.config.max_cascades {
            let matched = find_matches(&self.state.grid);
            if matched.is_empty() {
                break;
            }

            let cleared = matched.len() as u32;
            self.state.score += cleared * self.config.points_per_gem * self.state.combo_multiplier;
            self.state.combo_multiplier += 1;

            let rng = &mut self.rng;
            let ids = &mut self.state.next_id;
            let palette = self.config.palette();
            collapse(&mut self.state.grid, &matched, |at| {
                let mut gem = CandyGem::new(ids.alloc(), Some(GemColor::random(rng, palette)), at);
                gem.is_new = true;
                gem
            });

            steps += 1;
        }

        if steps == self.config.max_cascades && !find_matches(&self.state.grid).is_empty() {
            log::debug!("candy: cascade cap {} reached", self.config.max_cascades);
        }
        steps
    }
}

impl GameEngine for CandyEngine {
    type State = CandyState;
    type Action = CandyAction;

    const STORAGE_KEY: &'static str = "candy-match";

    fn fresh(rng: GameRng) -> Self {
        Self::with_config(CandyConfig::default(), rng)
    }

    fn restore(state: CandyState, rng: GameRng) -> Self {
        Self::from_state(state, CandyConfig::default(), rng)
    }

    fn state(&self) -> &CandyState {
        &self.state
    }

    fn handle_action(&mut self, action: CandyAction) -> &CandyState {
        match action {
            CandyAction::Swap { row1, col1, row2, col2 } => {
                self.swap(Position::new(row1, col1), Position::new(row2, col2));
            }
            CandyAction::Restart => {
                self.start_new_game();
            }
        }
        &self.state
    }

    fn is_complete(state: &CandyState) -> bool {
        state.is_complete
    }

    fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}
