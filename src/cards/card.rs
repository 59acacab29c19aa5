//! The card value object.
//!
//! A `Card` has fixed suit, rank, and color and a single mutable bit:
//! whether it is face up. Stacks only ever touch that bit.

use serde::{Deserialize, Serialize};

use super::standard::{CardColor, Rank, Suit};

/// A playing card.
///
/// Cards are owned by exactly one `CardStack` at a time; moving a card
/// between stacks moves the value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    color: CardColor,
    face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank, color: CardColor) -> Self {
        Self {
            suit,
            rank,
            color,
            face_up: false,
        }
    }

    /// Set the initial face state (builder pattern).
    #[must_use]
    pub const fn with_face_up(mut self, face_up: bool) -> Self {
        self.face_up = face_up;
        self
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn color(&self) -> CardColor {
        self.color
    }

    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Flip the card over.
    pub fn turn_around(&mut self) {
        self.face_up = !self.face_up;
    }
}
