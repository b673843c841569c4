//! Sudoku engine implementation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::board::{has_errors, is_full, validate_board, Board, Solution, SIZE};
use super::config::{Difficulty, SudokuConfig};
use super::generator::{carve_puzzle, generate_solution};
use crate::core::{Clock, GameRng, GameRngState, NamedAction, SystemClock};
use crate::rules::GameEngine;

/// Full Sudoku game state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SudokuState {
    pub board: Board,
    pub solution: Solution,
    pub difficulty: Difficulty,
    /// Wrong entries made in challenge mode.
    pub mistakes: u32,
    pub is_complete: bool,
    pub is_won: bool,
    pub start_time: DateTime<Utc>,
    /// Set on the transition to complete, won or lost.
    pub end_time: Option<DateTime<Utc>>,
    pub challenge_mode: bool,
    /// Seconds allowed in challenge mode.
    pub time_limit: Option<u32>,
}

/// Actions accepted by the Sudoku engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "payload", rename_all = "snake_case")]
pub enum SudokuAction {
    /// Write a digit, or clear the cell with `None`.
    Move {
        row: usize,
        col: usize,
        #[serde(default)]
        value: Option<u8>,
    },
    /// Generate a puzzle with explicit settings.
    NewGame {
        difficulty: Difficulty,
        #[serde(rename = "challengeMode", default)]
        challenge_mode: bool,
    },
    /// Generate a puzzle with the current settings.
    Restart,
    /// Check the challenge clock without making a move.
    Tick,
}

impl NamedAction for SudokuAction {
    const NAMES: &'static [&'static str] = &["move", "new_game", "restart", "tick"];
}

/// Sudoku engine, generic over its time source.
///
/// In challenge mode the clock is checked lazily: when a move arrives, or
/// when a `Tick` is dispatched. A game left idle past its limit stays
/// open until one of those happens.
#[derive(Clone, Debug)]
pub struct SudokuEngine<C: Clock = SystemClock> {
    state: SudokuState,
    config: SudokuConfig,
    rng: GameRng,
    clock: C,
}

impl SudokuEngine<SystemClock> {
    /// Fresh game with default config and the system clock.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_clock(SudokuConfig::default(), GameRng::new(seed), SystemClock)
    }
}

impl<C: Clock> SudokuEngine<C> {
    /// Fresh game with a custom config and clock.
    #[must_use]
    pub fn with_clock(config: SudokuConfig, mut rng: GameRng, clock: C) -> Self {
        let state = Self::generate(&config, config.difficulty, config.challenge_mode, &mut rng, &clock);
        Self {
            state,
            config,
            rng,
            clock,
        }
    }

    /// Resume from a saved state.
    #[must_use]
    pub fn from_state(state: SudokuState, config: SudokuConfig, rng: GameRng, clock: C) -> Self {
        Self {
            state,
            config,
            rng,
            clock,
        }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SudokuConfig {
        &self.config
    }

    /// Replace the current game with a freshly generated puzzle.
    pub fn generate_new_game(&mut self, difficulty: Difficulty, challenge_mode: bool) -> &SudokuState {
        self.state = Self::generate(&self.config, difficulty, challenge_mode, &mut self.rng, &self.clock);
        &self.state
    }

    /// Whole seconds since the game started, frozen once it ends.
    #[must_use]
    pub fn elapsed_seconds(&self) -> i64 {
        let until = self.state.end_time.unwrap_or_else(|| self.clock.now());
        (until - self.state.start_time).num_seconds().max(0)
    }

    /// Seconds left on the challenge clock, `None` outside challenge mode.
    #[must_use]
    pub fn remaining_seconds(&self) -> Option<i64> {
        let limit = self.active_limit()?;
        Some((i64::from(limit) - self.elapsed_seconds()).max(0))
    }

    fn generate(
        config: &SudokuConfig,
        difficulty: Difficulty,
        challenge_mode: bool,
        rng: &mut GameRng,
        clock: &C,
    ) -> SudokuState {
        let solution = generate_solution(rng);
        let board = carve_puzzle(&solution, difficulty.removals(), rng);
        log::debug!(
            "sudoku: new {} puzzle, challenge {}, {} mistakes allowed",
            difficulty,
            challenge_mode,
            config.max_mistakes
        );

        SudokuState {
            board,
            solution,
            difficulty,
            mistakes: 0,
            is_complete: false,
            is_won: false,
            start_time: clock.now(),
            end_time: None,
            challenge_mode,
            time_limit: challenge_mode.then(|| difficulty.time_limit()),
        }
    }

    fn active_limit(&self) -> Option<u32> {
        if self.state.challenge_mode {
            self.state.time_limit
        } else {
            None
        }
    }

    /// End the game as lost if the challenge clock has run out.
    fn check_timeout(&mut self) -> bool {
        let Some(limit) = self.active_limit() else {
            return false;
        };
        let now = self.clock.now();
        let elapsed_ms = (now - self.state.start_time).num_milliseconds();
        if elapsed_ms > i64::from(limit) * 1000 {
            log::debug!("sudoku: time limit of {}s exceeded", limit);
            self.finish(false, now);
            return true;
        }
        false
    }

    fn finish(&mut self, won: bool, at: DateTime<Utc>) {
        self.state.is_complete = true;
        self.state.is_won = won;
        self.state.end_time = Some(at);
    }

    fn place(&mut self, row: usize, col: usize, value: Option<u8>) {
        if row >= SIZE || col >= SIZE || value.is_some_and(|digit| !(1..=9).contains(&digit)) {
            log::trace!("sudoku: rejected move ({}, {}) = {:?}", row, col, value);
            return;
        }
        if self.state.is_complete || self.state.board[row][col].is_fixed {
            return;
        }
        if self.check_timeout() {
            return;
        }

        let expected = self.state.solution[row][col];
        let cell = &mut self.state.board[row][col];
        cell.value = value;

        if self.state.challenge_mode {
            let wrong = value.is_some_and(|digit| digit != expected);
            cell.is_error = wrong;
            if wrong {
                self.state.mistakes += 1;
                if self.state.mistakes >= self.config.max_mistakes {
                    log::debug!("sudoku: {} mistakes, game lost", self.state.mistakes);
                    self.finish(false, self.clock.now());
                }
                return;
            }
        } else {
            validate_board(&mut self.state.board);
        }

        if is_full(&self.state.board) && !has_errors(&self.state.board) {
            log::debug!("sudoku: solved in {}s", self.elapsed_seconds());
            self.finish(true, self.clock.now());
        }
    }
}

impl<C: Clock + Default> GameEngine for SudokuEngine<C> {
    type State = SudokuState;
    type Action = SudokuAction;

    const STORAGE_KEY: &'static str = "sudoku-game";

    fn fresh(rng: GameRng) -> Self {
        Self::with_clock(SudokuConfig::default(), rng, C::default())
    }

    fn restore(state: SudokuState, rng: GameRng) -> Self {
        Self::from_state(state, SudokuConfig::default(), rng, C::default())
    }

    fn state(&self) -> &SudokuState {
        &self.state
    }

    fn handle_action(&mut self, action: SudokuAction) -> &SudokuState {
        match action {
            SudokuAction::Move { row, col, value } => self.place(row, col, value),
            SudokuAction::NewGame {
                difficulty,
                challenge_mode,
            } => {
                self.generate_new_game(difficulty, challenge_mode);
            }
            SudokuAction::Restart => {
                let (difficulty, challenge_mode) = (self.state.difficulty, self.state.challenge_mode);
                self.generate_new_game(difficulty, challenge_mode);
            }
            SudokuAction::Tick => {
                if !self.state.is_complete {
                    self.check_timeout();
                }
            }
        }
        &self.state
    }

    fn is_complete(state: &SudokuState) -> bool {
        state.is_complete
    }

    fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}
