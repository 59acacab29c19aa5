//! # card-stack
//!
//! Ordered card stacks for table games.
//!
//! ## Design Principles
//!
//! 1. **Checked at the boundary**: every operation reports a typed error
//!    instead of leaving a stack half-modified. Raw caller input is
//!    validated by a declarative rule table before any method body runs.
//!
//! 2. **No hidden modes**: reverse traversal is a view, not a flag stored
//!    on the stack.
//!
//! 3. **Cheap snapshots**: stacks are backed by `im-rs` persistent vectors,
//!    so cloning one to explore a hypothetical move is O(1).
//!
//! ## Modules
//!
//! - `cards`: Card value type, suits, ranks, colors, and card codes
//! - `core`: Direction-aware views, index helpers, aliases, configuration
//! - `stack`: `CardStack`, its operations, the command boundary, the factory
//! - `validation`: Arguments, validators, and the rule table
//! - `error`: Error enums shared by all modules

pub mod cards;
pub mod core;
pub mod error;
pub mod stack;
pub mod validation;

// Re-export commonly used types
pub use crate::cards::{codes_match, Card, CardColor, Rank, Suit};

pub use crate::core::{
    AliasGenerator, DeckConfig, Direction, IndexRange, StackConfig, SuitColor,
};

pub use crate::error::{CodeError, StackError, StackResult, ValidationError, ValidationResult};

pub use crate::stack::{CardStack, CommandOutput, StackCommand, StackFactory};

pub use crate::validation::{Arg, ParamKind, RuleTable, Validator};
