//! Stack alias generation.
//!
//! Aliases only label stacks in error messages and logs. They carry no
//! meaning for equality or ordering.
//!
//! - `random_alias()`: fresh identifier from the thread RNG (default for new stacks)
//! - `AliasGenerator`: seedable, deterministic sequence of aliases (tests, replays)

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Prefix used when none is configured.
pub const DEFAULT_ALIAS_PREFIX: &str = "stack";

/// Generate a fresh random alias with the default prefix.
#[must_use]
pub fn random_alias() -> String {
    format_alias(DEFAULT_ALIAS_PREFIX, rand::thread_rng().gen())
}

fn format_alias(prefix: &str, value: u64) -> String {
    format!("{prefix}-{value:016x}")
}

/// Deterministic alias source.
///
/// Uses ChaCha8 like the rest of the engine's seeded randomness, so the same
/// seed yields the same aliases in the same order.
#[derive(Clone, Debug)]
pub struct AliasGenerator {
    inner: ChaCha8Rng,
    prefix: String,
}

impl AliasGenerator {
    /// Create a generator with the given seed and the default prefix.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_prefix(seed, DEFAULT_ALIAS_PREFIX)
    }

    /// Create a generator with a custom prefix.
    #[must_use]
    pub fn with_prefix(seed: u64, prefix: impl Into<String>) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            prefix: prefix.into(),
        }
    }

    /// Create a generator seeded from the thread RNG.
    #[must_use]
    pub fn from_entropy(prefix: impl Into<String>) -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
            prefix: prefix.into(),
        }
    }

    /// Produce the next alias.
    pub fn next_alias(&mut self) -> String {
        format_alias(&self.prefix, self.inner.gen())
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}
