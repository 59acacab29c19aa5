//! Stack and deck configuration.
//!
//! Callers configure stack creation once at startup:
//! - `StackConfig`: alias prefix and optional alias seed
//! - `DeckConfig`: which cards a generated deck contains
//!
//! Both are plain serde types so they can be loaded alongside the rest of a
//! game's configuration.

use serde::{Deserialize, Serialize};

use super::alias::DEFAULT_ALIAS_PREFIX;
use crate::cards::{CardColor, Rank, Suit};

/// How stacks get their aliases.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackConfig {
    /// Prefix of generated aliases.
    #[serde(default = "default_prefix")]
    pub alias_prefix: String,

    /// Seed for deterministic aliases. `None` seeds from entropy.
    #[serde(default)]
    pub alias_seed: Option<u64>,
}

fn default_prefix() -> String {
    DEFAULT_ALIAS_PREFIX.to_string()
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            alias_prefix: default_prefix(),
            alias_seed: None,
        }
    }
}

impl StackConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the alias prefix.
    #[must_use]
    pub fn with_alias_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.alias_prefix = prefix.into();
        self
    }

    /// Make aliases deterministic.
    #[must_use]
    pub fn with_alias_seed(mut self, seed: u64) -> Self {
        self.alias_seed = Some(seed);
        self
    }
}

/// Color assigned to every card of one suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuitColor {
    pub suit: Suit,
    pub color: CardColor,
}

/// Contents of a generated deck.
///
/// Cards are laid out suit by suit in the order given, ranks ascending
/// within each suit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckConfig {
    pub suits: Vec<SuitColor>,
    pub ranks: Vec<Rank>,
    #[serde(default)]
    pub face_up: bool,
}

impl DeckConfig {
    /// 52 cards: red diamonds and hearts, black clubs and spades, face down.
    #[must_use]
    pub fn standard() -> Self {
        let suits = Suit::ALL
            .iter()
            .map(|&suit| SuitColor {
                suit,
                color: match suit {
                    Suit::Diamonds | Suit::Hearts => CardColor::RED,
                    Suit::Clubs | Suit::Spades => CardColor::BLACK,
                },
            })
            .collect();

        Self {
            suits,
            ranks: Rank::STANDARD.to_vec(),
            face_up: false,
        }
    }

    /// Deal the deck face up.
    #[must_use]
    pub fn face_up(mut self) -> Self {
        self.face_up = true;
        self
    }

    /// Number of cards the deck will contain.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.suits.len() * self.ranks.len()
    }
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self::standard()
    }
}
