//! Error types.
//!
//! ```text
//! ValidationError  - argument shape (negative index, empty index set, ...)
//!        │
//!        ▼ (#[from])
//! StackError       - argument vs. a concrete stack (index missing, too few cards, ...)
//!
//! CodeError        - card code parsing
//! ```
//!
//! All errors are raised synchronously to the immediate caller. Checks always
//! run before mutation, so a failed call leaves every stack involved untouched.

use thiserror::Error;

use crate::validation::Arg;

/// Argument-shape failures raised by validators before a method body runs.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ValidationError {
    /// An index is neither absent nor a non-negative integer.
    #[error("Invalid card index {0}: should be non-negative integer")]
    InvalidIndex(Arg),

    /// At least one entry of an index set is invalid.
    #[error("Invalid card indexes {}: all should be non-negative integers", join_args(.0))]
    InvalidIndexSet(Vec<Arg>),

    /// A take/turn count is not a non-negative integer.
    #[error("Invalid number of cards {0}: should be non-negative integer")]
    InvalidCount(Arg),

    /// Generic strict check: absence is not allowed either.
    #[error("Invalid value {0}: should be non-negative integer")]
    NotNonNegativeInteger(Arg),

    /// A variadic index list was required to be non-empty.
    #[error("Index set should not be empty")]
    EmptyIndexSet,

    /// A rule carries a parameter kind code the interceptor doesn't know.
    #[error("Unknown parameter type {0}")]
    UnknownParameterKind(u8),
}

/// Failures of card stack operations.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum StackError {
    /// `index` is `None` when the caller omitted it.
    #[error("Card with index {} doesn't exist in card stack {alias}", display_index(.index))]
    IndexNotFound { index: Option<usize>, alias: String },

    /// Sorted, deduplicated list of missing indexes. Range turns list at
    /// most `MAX_REPORTED_INDEXES` of them.
    #[error("Cannot turn around cards: indexes {} don't exist in card stack", join_indexes(.0))]
    IndexesNotFound(Vec<usize>),

    #[error("Cannot take cards from card stack {alias}: stack is empty")]
    StackEmpty { alias: String },

    #[error("Cannot turn around cards in empty card stack")]
    EmptyStackTurn,

    #[error("Cannot take {requested} cards from card stack {alias}: only {available} cards are available to take")]
    InsufficientCards {
        requested: usize,
        available: usize,
        alias: String,
    },

    #[error("Cannot turn top cards around: number of cards {requested} exceeds number of cards {count} in the stack")]
    ExceedsCount { requested: usize, count: usize },

    #[error("Cannot add card stack into stack {alias}: card index is missing")]
    MissingIndex { alias: String },

    #[error("Cannot add card stack into stack {alias}: target stack is empty so no card index should be passed")]
    IndexShouldBeOmitted { alias: String },

    #[error("Cannot turn around cards: start card index value {start} is greater or equals end card index value {end}")]
    RangeOrder { start: usize, end: usize },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Card code parse failures.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("Invalid card code length {actual}: length should be {expected}")]
    Length { actual: usize, expected: usize },

    #[error("Invalid rank value {0}: should be >= 1 and <= 13")]
    Rank(String),

    #[error("Invalid suit {0}: it doesn't exist in Suit type")]
    Suit(String),

    #[error("Cannot parse card color {0}: unknown color code")]
    Color(String),

    #[error("Cannot parse face state {0}: should be either + or -")]
    FaceState(String),
}

/// Result alias for stack operations.
pub type StackResult<T> = Result<T, StackError>;

/// Result alias for validators.
pub type ValidationResult<T> = Result<T, ValidationError>;

fn join_args(args: &[Arg]) -> String {
    args.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn display_index(index: &Option<usize>) -> String {
    index.map_or_else(|| "undefined".to_string(), |index| index.to_string())
}

fn join_indexes(indexes: &[usize]) -> String {
    indexes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
