//! Candy-Match configuration parameters.

use serde::{Deserialize, Serialize};

use super::gem::GemColor;

/// Candy-Match configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CandyConfig {
    /// Distinct gem colours in play, 3 to 6 (default: 6).
    pub colors: usize,

    /// Swaps available per game (default: 20).
    pub moves: u32,

    /// Score that ends the game early (default: 2000).
    pub target_score: u32,

    /// Points per cleared gem before the combo multiplier (default: 10).
    pub points_per_gem: u32,

    /// Cascade iterations resolved per swap (default: 10).
    /// Bounds resolution on a board that keeps matching.
    pub max_cascades: u32,
}

impl Default for CandyConfig {
    fn default() -> Self {
        Self {
            colors: GemColor::ALL.len(),
            moves: 20,
            target_score: 2000,
            points_per_gem: 10,
            max_cascades: 10,
        }
    }
}

/// Fewest colours in play. Below this a run-free starting board is
/// practically impossible to roll.
pub const MIN_COLORS: usize = 3;

impl CandyConfig {
    /// Create a new config with a custom colour count.
    pub fn with_colors(mut self, colors: usize) -> Self {
        self.colors = colors.clamp(MIN_COLORS, GemColor::ALL.len());
        self
    }

    /// Colours actually drawn from. `colors` is public and deserializable,
    /// so it is clamped again here.
    #[must_use]
    pub fn palette(&self) -> usize {
        self.colors.clamp(MIN_COLORS, GemColor::ALL.len())
    }

    /// Create a new config with a custom move budget.
    pub fn with_moves(mut self, moves: u32) -> Self {
        self.moves = moves;
        self
    }

    /// Create a new config with a custom target score.
    pub fn with_target_score(mut self, target: u32) -> Self {
        self.target_score = target;
        self
    }

    /// Create a new config with a custom cascade cap.
    pub fn with_max_cascades(mut self, cap: u32) -> Self {
        self.max_cascades = cap;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CandyConfig::default();
        assert_eq!(config.colors, 6);
        assert_eq!(config.moves, 20);
        assert_eq!(config.target_score, 2000);
        assert_eq!(config.points_per_gem, 10);
        assert_eq!(config.max_cascades, 10);
    }

    #[test]
    fn test_builder_pattern() {
        let config = CandyConfig::default()
            .with_colors(1)
            .with_moves(5)
            .with_target_score(300)
            .with_max_cascades(1);

        assert_eq!(config.colors, 3);
        assert_eq!(config.moves, 5);
        assert_eq!(config.target_score, 300);
        assert_eq!(config.max_cascades, 1);
    }

    #[test]
    fn test_palette_clamps_raw_field() {
        let config: CandyConfig = serde_json::from_str(
            r#"{"colors":1,"moves":20,"target_score":2000,"points_per_gem":10,"max_cascades":10}"#,
        )
        .unwrap();
        assert_eq!(config.colors, 1);
        assert_eq!(config.palette(), 3);

        let wide = CandyConfig { colors: 40, ..CandyConfig::default() };
        assert_eq!(wide.palette(), 6);
    }

    #[test]
    fn test_serialization() {
        let config = CandyConfig::default().with_moves(12);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: CandyConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
