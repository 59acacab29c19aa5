//! Declarative parameter validation.
//!
//! Methods declare, per parameter, which validator must pass before the
//! method body runs. Declarations live in a `RuleTable` built once; a call
//! goes through `RuleTable::intercept`, which:
//!
//! 1. looks up every rule registered for the method,
//! 2. hands each validator its argument (ordinary) or argument tail (rest),
//! 3. returns the first validator error unchanged, or runs the body.
//!
//! ## Key Types
//!
//! - `Arg`: an unchecked dynamic argument
//! - `Validator`: a named check; built-ins live in `validators`
//! - `ParamKind`: ordinary or rest
//! - `RuleTable`: registration, lookup, and interception

pub mod arg;
pub mod table;
pub mod validators;

pub use arg::Arg;
pub use table::{ParamKind, RuleKey, RuleTable};
pub use validators::{Check, Validator};
