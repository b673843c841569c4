//! Sudoku configuration parameters.

use serde::{Deserialize, Serialize};

/// Puzzle difficulty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Cells cleared from the solved grid.
    #[must_use]
    pub const fn removals(self) -> usize {
        match self {
            Difficulty::Easy => 30,
            Difficulty::Medium => 45,
            Difficulty::Hard => 55,
        }
    }

    /// Challenge-mode clock in seconds.
    #[must_use]
    pub const fn time_limit(self) -> u32 {
        match self {
            Difficulty::Easy => 300,
            Difficulty::Medium => 600,
            Difficulty::Hard => 900,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// Sudoku configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SudokuConfig {
    /// Difficulty of games started without an explicit one.
    pub difficulty: Difficulty,

    /// Whether such games run in challenge mode.
    pub challenge_mode: bool,

    /// Wrong entries allowed in challenge mode before the game is lost
    /// (default: 3).
    pub max_mistakes: u32,
}

impl Default for SudokuConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            challenge_mode: false,
            max_mistakes: 3,
        }
    }
}

impl SudokuConfig {
    /// Create a new config with a custom default difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Create a new config that starts games in challenge mode.
    pub fn with_challenge_mode(mut self, enabled: bool) -> Self {
        self.challenge_mode = enabled;
        self
    }

    /// Create a new config with a custom mistake budget.
    pub fn with_max_mistakes(mut self, mistakes: u32) -> Self {
        self.max_mistakes = mistakes.max(1);
        self
    }
}
