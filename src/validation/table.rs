//! Rule table and interceptor.
//!
//! Rules are keyed by `(target type, method, parameter kind, position,
//! validator name)`. The table is a `BTreeMap` over that tuple, so the rules
//! of one method come out in declaration order: ordinary parameters by
//! position, the rest parameter last.
//!
//! ```
//! use card_stack::validation::{validators, Arg, ParamKind, RuleTable};
//! use card_stack::error::StackError;
//!
//! struct Dealer;
//!
//! let mut table = RuleTable::new();
//! table.register::<Dealer>("deal", 0, ParamKind::Ordinary, validators::CARD_COUNT);
//!
//! let dealt = table.intercept::<Dealer, _, StackError>("deal", &[Arg::Int(2)], |_| Ok(2));
//! assert_eq!(dealt, Ok(2));
//!
//! let rejected = table.intercept::<Dealer, u32, StackError>("deal", &[Arg::Int(-1)], |_| Ok(2));
//! assert!(rejected.is_err());
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::arg::Arg;
use super::validators::Validator;
use crate::error::{ValidationError, ValidationResult};

/// How a validated parameter receives its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ParamKind {
    /// A single positional argument.
    Ordinary = 0,
    /// Every argument from the position to the end.
    Rest = 1,
}

impl ParamKind {
    /// Numeric code stored in rule keys.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for ParamKind {
    type Error = ValidationError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(ParamKind::Ordinary),
            1 => Ok(ParamKind::Rest),
            other => Err(ValidationError::UnknownParameterKind(other)),
        }
    }
}

/// Unique key of one validation rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuleKey {
    pub target: &'static str,
    pub method: &'static str,
    pub kind: u8,
    pub position: usize,
    pub validator: &'static str,
}

/// Validation rules for any number of types and methods.
///
/// Populated once at startup, read on every intercepted call.
#[derive(Clone, Debug, Default)]
pub struct RuleTable {
    rules: BTreeMap<RuleKey, Validator>,
}

impl RuleTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a validator for parameter `position` of `T::method`.
    ///
    /// Panics if the same validator is already registered for that parameter.
    pub fn register<T: ?Sized>(
        &mut self,
        method: &'static str,
        position: usize,
        kind: ParamKind,
        validator: Validator,
    ) -> &mut Self {
        self.register_encoded(std::any::type_name::<T>(), method, position, kind.code(), validator)
    }

    /// Register with an already-encoded target name and kind code.
    ///
    /// The kind code is not checked here; an unknown code surfaces as
    /// `UnknownParameterKind` on the first intercepted call.
    pub fn register_encoded(
        &mut self,
        target: &'static str,
        method: &'static str,
        position: usize,
        kind: u8,
        validator: Validator,
    ) -> &mut Self {
        let key = RuleKey {
            target,
            method,
            kind,
            position,
            validator: validator.name(),
        };
        if self.rules.contains_key(&key) {
            panic!("Validation rule {:?} already registered", key);
        }
        self.rules.insert(key, validator);
        self
    }

    /// Rules for `T::method` in declaration order.
    pub fn rules_for<T: ?Sized>(
        &self,
        method: &'static str,
    ) -> impl Iterator<Item = (&RuleKey, &Validator)> + '_ {
        let target = std::any::type_name::<T>();
        self.rules
            .iter()
            .filter(move |(key, _)| key.target == target && key.method == method)
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the table has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule of `T::method` against `args`, stopping at the first failure.
    pub fn check<T: ?Sized>(&self, method: &'static str, args: &[Arg]) -> ValidationResult<()> {
        for (key, validator) in self.rules_for::<T>(method) {
            trace!(
                method,
                position = key.position,
                validator = validator.name(),
                "Running parameter validator"
            );
            let outcome = match ParamKind::try_from(key.kind)? {
                ParamKind::Ordinary => {
                    let arg = args.get(key.position).copied().unwrap_or_default();
                    validator.check_one(&arg)
                }
                ParamKind::Rest => validator.check_rest(args.get(key.position..).unwrap_or(&[])),
            };
            if let Err(err) = outcome {
                debug!(method, validator = validator.name(), error = %err, "Call rejected");
                return Err(err);
            }
        }
        Ok(())
    }

    /// Validate `args`, then run `body` with them.
    ///
    /// The first failing validator's error is returned unchanged and `body`
    /// never runs.
    pub fn intercept<T, R, E>(
        &self,
        method: &'static str,
        args: &[Arg],
        body: impl FnOnce(&[Arg]) -> Result<R, E>,
    ) -> Result<R, E>
    where
        T: ?Sized,
        E: From<ValidationError>,
    {
        self.check::<T>(method, args)?;
        body(args)
    }
}
