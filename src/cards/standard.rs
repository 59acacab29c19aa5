//! Standard suits, ranks, and card colors.

use serde::{Deserialize, Serialize};

use crate::error::CodeError;

/// Card suit. Discriminants double as the suit digit in card codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// ♦
    Diamonds = 0,
    /// ♣
    Clubs = 1,
    /// ♥
    Hearts = 2,
    /// ♠
    Spades = 3,
}

impl Suit {
    /// All suits in code order.
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades];

    /// Numeric code of this suit.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up a suit by its numeric code.
    pub fn from_code(code: u8) -> Result<Self, CodeError> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or_else(|| CodeError::Suit(code.to_string()))
    }
}

/// Card rank, `1..=13`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// Every standard rank, ace to king.
    pub const STANDARD: [Rank; 13] = [
        Rank(1),
        Rank(2),
        Rank(3),
        Rank(4),
        Rank(5),
        Rank(6),
        Rank(7),
        Rank(8),
        Rank(9),
        Rank(10),
        Rank(11),
        Rank(12),
        Rank(13),
    ];

    /// Create a rank, rejecting values outside `1..=13`.
    pub fn new(value: u8) -> Result<Self, CodeError> {
        if (1..=13).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CodeError::Rank(value.to_string()))
        }
    }

    /// Get the raw rank value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rank {
    type Error = CodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

/// Opaque card color.
///
/// Stacks never interpret colors; they only carry them. The named constants
/// cover the colors used by standard decks and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardColor(pub u8);

impl CardColor {
    pub const BLACK: CardColor = CardColor(0);
    pub const RED: CardColor = CardColor(1);
    pub const BLUE: CardColor = CardColor(2);
    pub const GREEN: CardColor = CardColor(3);

    /// Colors known to card codes, in code order.
    pub const ALL: [CardColor; 4] = [Self::BLACK, Self::RED, Self::BLUE, Self::GREEN];

    /// Human-readable name for the named colors.
    #[must_use]
    pub fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("black"),
            1 => Some("red"),
            2 => Some("blue"),
            3 => Some("green"),
            _ => None,
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Hearts => "♥",
            Suit::Spades => "♠",
        };
        f.write_str(symbol)
    }
}
