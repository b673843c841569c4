//! 2048 configuration parameters.

use serde::{Deserialize, Serialize};

/// 2048 configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game2048Config {
    /// Tile value that wins the game (default: 2048).
    pub win_value: u32,

    /// Probability that a spawned tile is a 4 instead of a 2 (default: 0.1).
    pub four_probability: f64,

    /// Tiles spawned on a fresh board (default: 2).
    pub starting_tiles: usize,
}

impl Default for Game2048Config {
    fn default() -> Self {
        Self {
            win_value: 2048,
            four_probability: 0.1,
            starting_tiles: 2,
        }
    }
}

impl Game2048Config {
    /// Create a new config with a custom win value.
    pub fn with_win_value(mut self, value: u32) -> Self {
        self.win_value = value;
        self
    }

    /// Create a new config with a custom 4-spawn probability.
    pub fn with_four_probability(mut self, probability: f64) -> Self {
        self.four_probability = probability.clamp(0.0, 1.0);
        self
    }

    /// Create a new config with a custom starting tile count.
    pub fn with_starting_tiles(mut self, count: usize) -> Self {
        self.starting_tiles = count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Game2048Config::default();
        assert_eq!(config.win_value, 2048);
        assert_eq!(config.starting_tiles, 2);
        assert!((config.four_probability - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_builder_pattern() {
        let config = Game2048Config::default()
            .with_win_value(64)
            .with_four_probability(1.5)
            .with_starting_tiles(3);

        assert_eq!(config.win_value, 64);
        assert_eq!(config.four_probability, 1.0);
        assert_eq!(config.starting_tiles, 3);
    }
}
