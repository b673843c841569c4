//! Memory engine implementation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::MemoryConfig;
use crate::core::{EntityId, GameRng, GameRngState, NamedAction};
use crate::rules::GameEngine;

/// A single card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryCard {
    pub id: EntityId,
    pub content: String,
    pub is_flipped: bool,
    pub is_matched: bool,
}

impl MemoryCard {
    /// Face up and still waiting for a partner.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.is_flipped && !self.is_matched
    }
}

/// Full Memory game state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryState {
    pub cards: Vec<MemoryCard>,
    /// Completed flip pairs.
    pub moves: u32,
    pub matches: u32,
    pub is_complete: bool,
    /// Fewest moves over completed games.
    pub best_score: Option<u32>,
}

impl MemoryState {
    /// Pairs needed to finish.
    #[must_use]
    pub fn pair_count(&self) -> u32 {
        (self.cards.len() / 2) as u32
    }

    /// Indices of face-up, unmatched cards.
    #[must_use]
    pub fn pending(&self) -> SmallVec<[usize; 2]> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.is_pending())
            .map(|(index, _)| index)
            .collect()
    }
}

/// Actions accepted by the Memory engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "payload", rename_all = "snake_case")]
pub enum MemoryAction {
    /// Turn a card face up.
    Flip {
        #[serde(rename = "cardId")]
        card_id: EntityId,
    },
    /// Deal a new shuffled deck.
    #[serde(alias = "new_game")]
    Restart,
}

impl NamedAction for MemoryAction {
    const NAMES: &'static [&'static str] = &["flip", "restart", "new_game"];
}

/// Memory engine.
#[derive(Clone, Debug)]
pub struct MemoryEngine {
    state: MemoryState,
    config: MemoryConfig,
    rng: GameRng,
}

impl MemoryEngine {
    /// Fresh game with default config.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_config(MemoryConfig::default(), GameRng::new(seed))
    }

    /// Fresh game with a custom config.
    #[must_use]
    pub fn with_config(config: MemoryConfig, rng: GameRng) -> Self {
        let mut engine = Self {
            state: MemoryState {
                cards: Vec::new(),
                moves: 0,
                matches: 0,
                is_complete: false,
                best_score: None,
            },
            config,
            rng,
        };
        engine.start_new_game();
        engine
    }

    /// Resume from a saved state with a custom config.
    #[must_use]
    pub fn from_state(state: MemoryState, config: MemoryConfig, rng: GameRng) -> Self {
        Self { state, config, rng }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &MemoryConfig {
        &self.config
    }

    /// Deal every symbol twice, shuffled, all face down.
    pub fn start_new_game(&mut self) -> &MemoryState {
        let mut cards: Vec<MemoryCard> = self
            .config
            .symbols
            .iter()
            .chain(self.config.symbols.iter())
            .enumerate()
            .map(|(index, symbol)| MemoryCard {
                id: EntityId(index as u32),
                content: symbol.clone(),
                is_flipped: false,
                is_matched: false,
            })
            .collect();
        self.rng.shuffle(&mut cards);

        self.state.cards = cards;
        self.state.moves = 0;
        self.state.matches = 0;
        self.state.is_complete = false;

        log::debug!("memory: new game with {} pairs", self.config.pair_count());
        &self.state
    }

    fn flip(&mut self, card_id: EntityId) {
        if self.state.is_complete {
            log::trace!("memory: game complete, ignoring flip");
            return;
        }

        let Some(target) = self.state.cards.iter().position(|card| card.id == card_id) else {
            log::trace!("memory: no card {}", card_id);
            return;
        };
        if self.state.cards[target].is_flipped || self.state.cards[target].is_matched {
            return;
        }

        let pending = self.state.pending();
        match pending.as_slice() {
            [] => self.state.cards[target].is_flipped = true,
            &[first] => {
                self.state.cards[target].is_flipped = true;
                self.state.moves += 1;

                if self.state.cards[first].content == self.state.cards[target].content {
                    self.state.cards[first].is_matched = true;
                    self.state.cards[target].is_matched = true;
                    self.state.matches += 1;

                    if self.state.matches >= self.state.pair_count() {
                        self.finish();
                    }
                }
            }
            // The previous pair missed and is still showing.
            shown => {
                for &index in shown {
                    self.state.cards[index].is_flipped = false;
                }
                self.state.cards[target].is_flipped = true;
            }
        }
    }

    fn finish(&mut self) {
        let moves = self.state.moves;
        self.state.is_complete = true;
        self.state.best_score = Some(self.state.best_score.map_or(moves, |best| best.min(moves)));
        log::debug!("memory: complete in {} moves", moves);
    }
}

impl GameEngine for MemoryEngine {
    type State = MemoryState;
    type Action = MemoryAction;

    const STORAGE_KEY: &'static str = "memory-game";

    fn fresh(rng: GameRng) -> Self {
        Self::with_config(MemoryConfig::default(), rng)
    }

    fn restore(state: MemoryState, rng: GameRng) -> Self {
        Self::from_state(state, MemoryConfig::default(), rng)
    }

    fn state(&self) -> &MemoryState {
        &self.state
    }

    fn handle_action(&mut self, action: MemoryAction) -> &MemoryState {
        match action {
            MemoryAction::Flip { card_id } => self.flip(card_id),
            MemoryAction::Restart => {
                self.start_new_game();
            }
        }
        &self.state
    }

    fn is_complete(state: &MemoryState) -> bool {
        state.is_complete
    }

    fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}
