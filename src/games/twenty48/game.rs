//! 2048 engine implementation.

use serde::{Deserialize, Serialize};

use super::config::Game2048Config;
use super::slide::slide;
use super::tile::{empty_cells, empty_grid, grid_from_values, has_available_moves, Grid, Tile, SIZE};
use crate::core::{Direction, GameRng, GameRngState, IdAllocator, NamedAction, Position};
use crate::rules::GameEngine;

/// Full 2048 game state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game2048State {
    pub grid: Grid,
    pub score: u32,
    /// Highest score seen across restarts.
    pub best_score: u32,
    pub game_over: bool,
    pub won: bool,
    pub keep_playing: bool,
    /// Next tile id.
    pub next_id: IdAllocator,
}

impl Game2048State {
    /// A board with no tiles.
    #[must_use]
    pub fn empty(best_score: u32) -> Self {
        Self {
            grid: empty_grid(),
            score: 0,
            best_score,
            game_over: false,
            won: false,
            keep_playing: false,
            next_id: IdAllocator::default(),
        }
    }

    /// A mid-game state built from plain values, `0` meaning empty.
    #[must_use]
    pub fn from_values(values: [[u32; SIZE]; SIZE]) -> Self {
        let mut state = Self::empty(0);
        state.grid = grid_from_values(values, &mut state.next_id);
        state
    }
}

/// Actions accepted by the 2048 engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "payload", rename_all = "snake_case")]
pub enum Game2048Action {
    /// Slide every tile.
    Move { direction: Direction },
    /// Continue past the win tile.
    KeepPlaying,
    /// Start over, keeping the best score.
    #[serde(alias = "new_game")]
    Restart,
}

impl NamedAction for Game2048Action {
    const NAMES: &'static [&'static str] = &["move", "keep_playing", "restart", "new_game"];
}

/// 2048 engine.
///
/// ## Example
///
/// ```
/// use arcade_rules::core::Direction;
/// use arcade_rules::games::twenty48::{Game2048Action, Game2048Engine};
/// use arcade_rules::rules::GameEngine;
///
/// let mut engine = Game2048Engine::new(7);
/// assert_eq!(engine.state().grid.iter().flatten().flatten().count(), 2);
///
/// engine.handle_action(Game2048Action::Move { direction: Direction::Left });
/// assert!(engine.state().best_score >= engine.state().score);
/// ```
#[derive(Clone, Debug)]
pub struct Game2048Engine {
    state: Game2048State,
    config: Game2048Config,
    rng: GameRng,
}

impl Game2048Engine {
    /// Fresh game with default config.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_config(Game2048Config::default(), GameRng::new(seed))
    }

    /// Fresh game with a custom config.
    #[must_use]
    pub fn with_config(config: Game2048Config, rng: GameRng) -> Self {
        let mut engine = Self {
            state: Game2048State::empty(0),
            config,
            rng,
        };
        engine.start_new_game();
        engine
    }

    /// Resume from a saved state with a custom config.
    #[must_use]
    pub fn from_state(state: Game2048State, config: Game2048Config, rng: GameRng) -> Self {
        Self { state, config, rng }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &Game2048Config {
        &self.config
    }

    /// Reset the board and spawn the starting tiles. `best_score` carries
    /// over, as do tile ids so callers never see an id reused.
    pub fn start_new_game(&mut self) -> &Game2048State {
        let next_id = self.state.next_id;
        self.state = Game2048State::empty(self.state.best_score);
        self.state.next_id = next_id;

        for _ in 0..self.config.starting_tiles {
            self.spawn_tile();
        }

        log::debug!("2048: new game, best score {}", self.state.best_score);
        &self.state
    }

    fn apply_move(&mut self, direction: Direction) {
        let outcome = slide(&self.state.grid, direction, &mut self.state.next_id);
        if !outcome.moved {
            log::trace!("2048: {:?} changes nothing", direction);
            return;
        }

        self.state.grid = outcome.grid;
        self.state.score += outcome.score_gained;

        if !self.state.won
            && !self.state.keep_playing
            && outcome.merged_values.contains(&self.config.win_value)
        {
            self.state.won = true;
            log::debug!("2048: reached {} with score {}", self.config.win_value, self.state.score);
        }

        self.spawn_tile();
        self.state.best_score = self.state.best_score.max(self.state.score);

        if !has_available_moves(&self.state.grid) {
            self.state.game_over = true;
            log::debug!("2048: game over with score {}", self.state.score);
        }
    }

    fn keep_playing(&mut self) {
        self.state.won = false;
        self.state.keep_playing = true;
    }

    /// Place a 2 (or, rarely, a 4) on a random empty cell.
    fn spawn_tile(&mut self) -> Option<Position> {
        let cells = empty_cells(&self.state.grid);
        let at = *self.rng.choose(&cells)?;
        let value = if self.rng.gen_bool(self.config.four_probability) { 4 } else { 2 };

        let mut tile = Tile::new(self.state.next_id.alloc(), value, at);
        tile.is_new = true;
        self.state.grid[at.row][at.col] = Some(tile);
        Some(at)
    }
}

impl GameEngine for Game2048Engine {
    type State = Game2048State;
    type Action = Game2048Action;

    const STORAGE_KEY: &'static str = "game-2048";

    fn fresh(rng: GameRng) -> Self {
        Self::with_config(Game2048Config::default(), rng)
    }

    fn restore(state: Game2048State, rng: GameRng) -> Self {
        Self::from_state(state, Game2048Config::default(), rng)
    }

    fn state(&self) -> &Game2048State {
        &self.state
    }

    fn handle_action(&mut self, action: Game2048Action) -> &Game2048State {
        match action {
            Game2048Action::Restart => {
                self.start_new_game();
            }
            _ if self.state.game_over => {
                log::trace!("2048: game over, ignoring {:?}", action);
            }
            Game2048Action::Move { direction } => self.apply_move(direction),
            Game2048Action::KeepPlaying => self.keep_playing(),
        }
        &self.state
    }

    fn is_complete(state: &Game2048State) -> bool {
        state.game_over
    }

    fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}
