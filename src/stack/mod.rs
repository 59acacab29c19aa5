//! Card stacks.
//!
//! A `CardStack` is an ordered, indexable sequence of cards with a
//! diagnostic alias. Index 0 is the top card.
//!
//! ## Operations
//!
//! - **Queries**: `card_count`, `card_exists`, `get_card`, `cards_in_order`
//! - **Splicing**: `add_to_me` / `add_myself_to` and their `_on_top` forms
//!   move every card of one stack into another
//! - **Taking**: `take` and `take_top` remove a contiguous run as a new stack
//! - **Turning**: `turn_cards_around` and friends flip face state
//! - **Sorting**: `sort` with a caller-supplied comparator
//!
//! Typed methods take `usize` and check only what depends on the stack
//! contents. Raw arguments go through `CardStack::apply`, which validates
//! them against the stack's rule table first.
//!
//! ## Example Usage
//!
//! ```
//! use card_stack::CardStack;
//!
//! let mut table = CardStack::from_codes(&["100+", "200+"]).unwrap();
//! let mut hand = CardStack::from_codes(&["300+"]).unwrap();
//!
//! table.add_to_me(&mut hand, Some(0)).unwrap();
//! table.turn_top_cards_around(2).unwrap();
//!
//! assert_eq!(table.codes(true), ["100-", "300-", "200+"]);
//! assert!(hand.is_empty());
//! ```

mod card_stack;
mod command;
mod factory;
mod splice;
mod turn;

pub use card_stack::CardStack;
pub use command::{CommandOutput, StackCommand};
pub use factory::StackFactory;
