//! Cards: the value object stacks hold.
//!
//! ## Key Types
//!
//! - `Card`: suit, rank, color, and a mutable face-up bit
//! - `Suit`, `Rank`, `CardColor`: standard tables
//!
//! Cards also parse from and format to short codes (`"c30"`, `"100+"`),
//! which keeps table-driven tests readable.

pub mod card;
pub mod code;
pub mod standard;

pub use card::Card;
pub use code::codes_match;
pub use standard::{CardColor, Rank, Suit};
