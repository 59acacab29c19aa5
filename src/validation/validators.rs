//! Parameter validators.
//!
//! A validator is a named, stateless check. Ordinary validators see one
//! argument; rest validators see the whole tail of arguments.

use super::arg::Arg;
use crate::error::{ValidationError, ValidationResult};

/// Check over a single argument.
pub type ValueCheck = fn(&Arg) -> ValidationResult<()>;

/// Check over a tail of arguments.
pub type ValuesCheck = fn(&[Arg]) -> ValidationResult<()>;

/// The function a validator runs.
#[derive(Clone, Copy, Debug)]
pub enum Check {
    Value(ValueCheck),
    Values(ValuesCheck),
}

/// A named validator.
///
/// The name is part of the rule key, so one parameter may carry several
/// validators and they run in name order.
#[derive(Clone, Copy, Debug)]
pub struct Validator {
    name: &'static str,
    check: Check,
}

impl Validator {
    /// Validator over a single argument.
    #[must_use]
    pub const fn value(name: &'static str, check: ValueCheck) -> Self {
        Self {
            name,
            check: Check::Value(check),
        }
    }

    /// Validator over a tail of arguments.
    #[must_use]
    pub const fn values(name: &'static str, check: ValuesCheck) -> Self {
        Self {
            name,
            check: Check::Values(check),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Run against one ordinary argument.
    pub fn check_one(&self, arg: &Arg) -> ValidationResult<()> {
        match self.check {
            Check::Value(check) => check(arg),
            Check::Values(check) => check(std::slice::from_ref(arg)),
        }
    }

    /// Run against a rest tail. Single-value checks apply to every entry.
    pub fn check_rest(&self, args: &[Arg]) -> ValidationResult<()> {
        match self.check {
            Check::Value(check) => args.iter().try_for_each(check),
            Check::Values(check) => check(args),
        }
    }
}

/// Absent or a non-negative integer. For optional index parameters.
pub const CARD_INDEX: Validator = Validator::value("card_index", card_index);

/// Every entry absent or a non-negative integer.
pub const CARD_INDEXES: Validator = Validator::values("card_indexes", card_indexes);

/// Strict non-negative integer for take/turn counts.
pub const CARD_COUNT: Validator = Validator::value("card_count", card_count);

/// Strict non-negative integer, absence not allowed.
pub const NON_NEGATIVE_INTEGER: Validator =
    Validator::value("non_negative_integer", non_negative_integer);

/// The tail holds at least one argument.
pub const NON_EMPTY: Validator = Validator::values("non_empty", non_empty);

fn card_index(arg: &Arg) -> ValidationResult<()> {
    if arg.is_optional_index() {
        Ok(())
    } else {
        Err(ValidationError::InvalidIndex(*arg))
    }
}

fn card_indexes(args: &[Arg]) -> ValidationResult<()> {
    if args.iter().all(Arg::is_optional_index) {
        Ok(())
    } else {
        Err(ValidationError::InvalidIndexSet(args.to_vec()))
    }
}

fn card_count(arg: &Arg) -> ValidationResult<()> {
    if arg.is_non_negative_integer() {
        Ok(())
    } else {
        Err(ValidationError::InvalidCount(*arg))
    }
}

fn non_negative_integer(arg: &Arg) -> ValidationResult<()> {
    if arg.is_non_negative_integer() {
        Ok(())
    } else {
        Err(ValidationError::NotNonNegativeInteger(*arg))
    }
}

fn non_empty(args: &[Arg]) -> ValidationResult<()> {
    if args.is_empty() {
        Err(ValidationError::EmptyIndexSet)
    } else {
        Ok(())
    }
}
