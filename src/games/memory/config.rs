//! Memory configuration parameters.

use serde::{Deserialize, Serialize};

/// Symbols used when no custom alphabet is configured.
pub const DEFAULT_SYMBOLS: [&str; 8] = ["🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼"];

/// Memory configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Card faces; each appears on exactly two cards.
    pub symbols: Vec<String>,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

impl MemoryConfig {
    /// Create a new config with a custom alphabet. Duplicates are dropped so
    /// every symbol forms exactly one pair.
    pub fn with_symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for symbol in symbols {
            let symbol = symbol.into();
            if !unique.contains(&symbol) {
                unique.push(symbol);
            }
        }
        self.symbols = unique;
        self
    }

    /// Number of pairs in a deck.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.symbols.len()
    }
}
