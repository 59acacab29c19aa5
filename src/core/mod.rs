//! Core building blocks shared by stacks: direction-aware sequence views,
//! index helpers, alias generation, and configuration.

pub mod alias;
pub mod config;
pub mod indexes;
pub mod sequence;

pub use alias::{random_alias, AliasGenerator, DEFAULT_ALIAS_PREFIX};
pub use config::{DeckConfig, StackConfig, SuitColor};
pub use indexes::{
    find_anomalies, normalize_indexes, seq_indexes, Anomalies, IndexRange, IndexSet, MAX_REPORTED_INDEXES,
};
pub use sequence::{in_direction, Directed, Direction};
