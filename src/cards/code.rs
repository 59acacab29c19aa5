//! Compact card codes.
//!
//! A code is three or four characters:
//!
//! ```text
//! c 3 0 +
//! │ │ │ └─ face state, optional: '+' up, '-' down (default down)
//! │ │ └─── color code (0 black, 1 red, 2 blue, 3 green)
//! │ └───── suit code (0 ♦, 1 ♣, 2 ♥, 3 ♠)
//! └─────── rank in hex (1 = ace .. d = king)
//! ```
//!
//! ```
//! use card_stack::cards::{Card, CardColor, Rank, Suit};
//!
//! let card: Card = "c30".parse().unwrap();
//! assert_eq!(card.rank(), Rank::QUEEN);
//! assert_eq!(card.suit(), Suit::Spades);
//! assert_eq!(card.color(), CardColor::BLACK);
//! assert_eq!(card.code(true), "c30-");
//! ```

use std::str::FromStr;

use super::card::Card;
use super::standard::{CardColor, Rank, Suit};
use crate::error::CodeError;

const FACE_UP: char = '+';
const FACE_DOWN: char = '-';

impl Card {
    /// Format as a card code, optionally including the face state.
    #[must_use]
    pub fn code(&self, with_face: bool) -> String {
        let mut code = format!(
            "{:x}{}{}",
            self.rank().value(),
            self.suit().code(),
            self.color().0
        );
        if with_face {
            code.push(if self.is_face_up() { FACE_UP } else { FACE_DOWN });
        }
        code
    }
}

impl FromStr for Card {
    type Err = CodeError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = code.to_ascii_lowercase().chars().collect();
        if chars.len() != 3 && chars.len() != 4 {
            return Err(CodeError::Length {
                actual: chars.len(),
                expected: 3,
            });
        }

        let rank = chars[0]
            .to_digit(16)
            .ok_or_else(|| CodeError::Rank(chars[0].to_string()))
            .and_then(|value| Rank::new(value as u8))?;

        let suit = chars[1]
            .to_digit(10)
            .ok_or_else(|| CodeError::Suit(chars[1].to_string()))
            .and_then(|value| Suit::from_code(value as u8))?;

        let color = chars[2]
            .to_digit(10)
            .and_then(|value| CardColor::ALL.get(value as usize).copied())
            .ok_or_else(|| CodeError::Color(chars[2].to_string()))?;

        let face_up = match chars.get(3) {
            None | Some(&FACE_DOWN) => false,
            Some(&FACE_UP) => true,
            Some(other) => return Err(CodeError::FaceState(other.to_string())),
        };

        Ok(Card::new(suit, rank, color).with_face_up(face_up))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code(true))
    }
}

/// Compare two card codes ignoring case.
#[must_use]
pub fn codes_match(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}
