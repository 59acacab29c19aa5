//! Checked command boundary for untyped callers.
//!
//! Typed methods take `usize`, so only relationship checks ("does this
//! index exist here") run inside them. Callers that hold raw values (an
//! agent emitting integers, a script, JSON) go through `CardStack::apply`,
//! which runs the stack's declared parameter rules first and only then
//! converts arguments to typed values.
//!
//! ```
//! use card_stack::{Arg, CardStack, StackCommand};
//!
//! let mut stack = CardStack::from_codes(&["100+", "200+"]).unwrap();
//!
//! stack.apply(StackCommand::TurnCardsAround, &[Arg::Int(1)]).unwrap();
//! assert_eq!(stack.codes(true), ["100+", "200-"]);
//!
//! let err = stack.apply(StackCommand::TurnCardsAround, &[Arg::Int(-1)]).unwrap_err();
//! assert_eq!(err.to_string(), "Invalid card indexes -1: all should be non-negative integers");
//! ```

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::CardStack;
use crate::cards::Card;
use crate::error::{StackError, StackResult, ValidationError};
use crate::validation::validators::{CARD_COUNT, CARD_INDEX, CARD_INDEXES, NON_EMPTY, NON_NEGATIVE_INTEGER};
use crate::validation::{Arg, ParamKind, RuleTable};

/// Stack operations reachable through `CardStack::apply`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StackCommand {
    /// `(index?)`
    CardExists,
    /// `(index?)`
    GetCard,
    /// `(first_index, count)`
    Take,
    /// `(count)`
    TakeTop,
    /// `(indexes...)`
    TurnCardsAround,
    /// `(start, end)`
    TurnCardRangeAround,
    /// `(count)`
    TurnTopCardsAround,
    /// `()`
    TurnTopCardAround,
}

impl StackCommand {
    /// Method name the command's rules are registered under.
    #[must_use]
    pub const fn method(self) -> &'static str {
        match self {
            StackCommand::CardExists => "card_exists",
            StackCommand::GetCard => "get_card",
            StackCommand::Take => "take",
            StackCommand::TakeTop => "take_top",
            StackCommand::TurnCardsAround => "turn_cards_around",
            StackCommand::TurnCardRangeAround => "turn_card_range_around",
            StackCommand::TurnTopCardsAround => "turn_top_cards_around",
            StackCommand::TurnTopCardAround => "turn_top_card_around",
        }
    }
}

/// What an applied command produced.
#[derive(Clone, Debug)]
pub enum CommandOutput {
    Exists(bool),
    Card(Card),
    Taken(CardStack),
    Done,
}

static STACK_RULES: OnceLock<RuleTable> = OnceLock::new();

fn build_rules() -> RuleTable {
    use StackCommand::*;

    let mut table = RuleTable::new();
    table
        .register::<CardStack>(CardExists.method(), 0, ParamKind::Ordinary, CARD_INDEX)
        .register::<CardStack>(GetCard.method(), 0, ParamKind::Ordinary, CARD_INDEX)
        .register::<CardStack>(Take.method(), 0, ParamKind::Ordinary, NON_NEGATIVE_INTEGER)
        .register::<CardStack>(Take.method(), 1, ParamKind::Ordinary, CARD_COUNT)
        .register::<CardStack>(TakeTop.method(), 0, ParamKind::Ordinary, CARD_COUNT)
        .register::<CardStack>(TurnCardsAround.method(), 0, ParamKind::Rest, CARD_INDEXES)
        .register::<CardStack>(TurnCardsAround.method(), 0, ParamKind::Rest, NON_EMPTY)
        .register::<CardStack>(TurnCardRangeAround.method(), 0, ParamKind::Ordinary, NON_NEGATIVE_INTEGER)
        .register::<CardStack>(TurnCardRangeAround.method(), 1, ParamKind::Ordinary, NON_NEGATIVE_INTEGER)
        .register::<CardStack>(TurnTopCardsAround.method(), 0, ParamKind::Ordinary, CARD_COUNT);
    table
}

/// Argument at `position` as a non-negative integer.
///
/// Validators have already run, so `None` means the argument was absent.
fn index_at(args: &[Arg], position: usize) -> Option<usize> {
    args.get(position).and_then(Arg::as_non_negative_integer)
}

/// Argument at `position`, required.
fn required_at(args: &[Arg], position: usize) -> StackResult<usize> {
    index_at(args, position).ok_or_else(|| {
        ValidationError::NotNonNegativeInteger(args.get(position).copied().unwrap_or_default()).into()
    })
}

impl CardStack {
    /// Parameter rules of every `StackCommand`, built on first use.
    pub fn rule_table() -> &'static RuleTable {
        STACK_RULES.get_or_init(build_rules)
    }

    /// Validate raw `args` against `command`'s rules, then run it.
    pub fn apply(&mut self, command: StackCommand, args: &[Arg]) -> StackResult<CommandOutput> {
        Self::rule_table().intercept::<CardStack, CommandOutput, StackError>(command.method(), args, |args| match command {
            StackCommand::CardExists => Ok(CommandOutput::Exists(self.card_exists(index_at(args, 0)))),
            StackCommand::GetCard => match index_at(args, 0) {
                Some(index) => self.get_card(index).cloned().map(CommandOutput::Card),
                None => Err(StackError::IndexNotFound {
                    index: None,
                    alias: self.alias().to_string(),
                }),
            },
            StackCommand::Take => {
                let first_index = required_at(args, 0)?;
                let count = required_at(args, 1)?;
                self.take(first_index, count).map(CommandOutput::Taken)
            }
            StackCommand::TakeTop => self.take_top(required_at(args, 0)?).map(CommandOutput::Taken),
            StackCommand::TurnCardsAround => {
                let indexes = args
                    .iter()
                    .map(|arg| arg.as_non_negative_integer().ok_or(ValidationError::InvalidIndexSet(args.to_vec())))
                    .collect::<Result<Vec<_>, _>>()?;
                self.turn_cards_around(&indexes).map(|()| CommandOutput::Done)
            }
            StackCommand::TurnCardRangeAround => {
                let start = required_at(args, 0)?;
                let end = required_at(args, 1)?;
                self.turn_card_range_around(start, end).map(|()| CommandOutput::Done)
            }
            StackCommand::TurnTopCardsAround => self
                .turn_top_cards_around(required_at(args, 0)?)
                .map(|()| CommandOutput::Done),
            StackCommand::TurnTopCardAround => self.turn_top_card_around().map(|()| CommandOutput::Done),
        })
    }
}
