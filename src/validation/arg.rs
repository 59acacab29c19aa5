//! Dynamic call arguments.
//!
//! Typed stack methods take `usize`, so the type system already rules out
//! negative indexes there. `Arg` is what arrives from untyped callers
//! (scripting layers, agents, JSON) before it has been checked.

use serde::{Deserialize, Serialize};

/// One argument of a dynamic call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Arg {
    /// Argument not supplied.
    #[default]
    Absent,
    Int(i64),
    Float(f64),
}

impl Arg {
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Arg::Absent)
    }

    /// The value as a non-negative integer, if it is one.
    ///
    /// Integral floats count (`2.0` is the integer 2) when they fit in `usize`.
    #[must_use]
    pub fn as_non_negative_integer(&self) -> Option<usize> {
        match *self {
            Arg::Absent => None,
            Arg::Int(value) => usize::try_from(value).ok(),
            Arg::Float(value) => {
                // `usize::MAX as f64` rounds up to 2^64, which no `usize` holds.
                if value.is_finite() && value >= 0.0 && value < usize::MAX as f64 && value.fract() == 0.0 {
                    Some(value as usize)
                } else {
                    None
                }
            }
        }
    }

    #[must_use]
    pub fn is_non_negative_integer(&self) -> bool {
        self.as_non_negative_integer().is_some()
    }

    /// Absent, or a non-negative integer.
    #[must_use]
    pub fn is_optional_index(&self) -> bool {
        self.is_absent() || self.is_non_negative_integer()
    }
}

impl std::fmt::Display for Arg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Arg::Absent => f.write_str("undefined"),
            Arg::Int(value) => write!(f, "{value}"),
            Arg::Float(value) => write!(f, "{value}"),
        }
    }
}

impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        Arg::Int(value)
    }
}

impl From<i32> for Arg {
    fn from(value: i32) -> Self {
        Arg::Int(i64::from(value))
    }
}

impl From<usize> for Arg {
    fn from(value: usize) -> Self {
        i64::try_from(value).map_or(Arg::Float(value as f64), Arg::Int)
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Arg::Float(value)
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Arg::Absent, Into::into)
    }
}
