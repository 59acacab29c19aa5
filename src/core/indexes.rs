//! Index helpers: ranges, sequential index lists, and anomaly detection.

use std::hash::Hash;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{StackError, StackResult};

/// Inline capacity for index sets; turn requests are usually a handful of cards.
pub type IndexSet = SmallVec<[usize; 8]>;

/// Most missing indexes a range error lists.
pub const MAX_REPORTED_INDEXES: usize = 64;

/// Half-open index range `[start, end)` with `start < end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexRange {
    start: usize,
    end: usize,
}

impl IndexRange {
    /// Create a range, rejecting empty or inverted bounds.
    pub fn new(start: usize, end: usize) -> StackResult<Self> {
        if start >= end {
            return Err(StackError::RangeOrder { start, end });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Number of indexes covered. Never zero.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false; kept for API symmetry with collections.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// True when the range covers exactly one index.
    #[must_use]
    pub const fn is_single(&self) -> bool {
        self.end - self.start == 1
    }

    /// True when every index of the range is below `len`.
    #[must_use]
    pub const fn fits(&self, len: usize) -> bool {
        self.end <= len
    }

    /// Indexes of the range at or past `len`, ascending, at most
    /// `MAX_REPORTED_INDEXES` of them.
    #[must_use]
    pub fn indexes_beyond(&self, len: usize) -> Vec<usize> {
        (self.start.max(len)..self.end).take(MAX_REPORTED_INDEXES).collect()
    }

    /// Expand into the full index list.
    ///
    /// Allocates `len()` entries: check `fits` against the target first.
    #[must_use]
    pub fn indexes(&self) -> IndexSet {
        (self.start..self.end).collect()
    }
}

/// `n -> [0, 1, ..., n - 1]`
#[must_use]
pub fn seq_indexes(size: usize) -> IndexSet {
    (0..size).collect()
}

/// Sort and deduplicate an index list.
#[must_use]
pub fn normalize_indexes(indexes: &[usize]) -> IndexSet {
    let mut normalized: IndexSet = indexes.iter().copied().collect();
    normalized.sort_unstable();
    normalized.dedup();
    normalized
}

/// Problems found when checking candidate values against a target set.
///
/// Each list holds distinct values in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anomalies<T> {
    /// Candidates absent from the target.
    pub not_found: Vec<T>,
    /// Candidates rejected by the validator.
    pub invalid: Vec<T>,
    /// Candidates supplied more than once.
    pub duplicates: Vec<T>,
}

impl<T> Anomalies<T> {
    /// True when no anomaly of any kind was found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.not_found.is_empty() && self.invalid.is_empty() && self.duplicates.is_empty()
    }
}

/// Check `candidates` against `target`, collecting every kind of anomaly.
///
/// A standalone utility for callers auditing index lists or card codes in
/// one pass. Stack operations use the narrower `normalize_indexes` scan.
///
/// ```
/// use card_stack::core::find_anomalies;
///
/// let found = find_anomalies(&[0, 1, 2], &[2, 5, 2, 7], |v| v < 6);
/// assert_eq!(found.not_found, [5, 7]);
/// assert_eq!(found.invalid, [7]);
/// assert_eq!(found.duplicates, [2]);
/// ```
pub fn find_anomalies<T, F>(target: &[T], candidates: &[T], validator: F) -> Anomalies<T>
where
    T: Copy + Eq + Hash,
    F: Fn(T) -> bool,
{
    let known: FxHashSet<T> = target.iter().copied().collect();
    let mut seen = FxHashSet::default();
    let mut reported_duplicates = FxHashSet::default();
    let mut anomalies = Anomalies {
        not_found: Vec::new(),
        invalid: Vec::new(),
        duplicates: Vec::new(),
    };

    for &candidate in candidates {
        if !seen.insert(candidate) {
            if reported_duplicates.insert(candidate) {
                anomalies.duplicates.push(candidate);
            }
            continue;
        }
        if !known.contains(&candidate) {
            anomalies.not_found.push(candidate);
        }
        if !validator(candidate) {
            anomalies.invalid.push(candidate);
        }
    }

    anomalies
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range() {
        assert_eq!(IndexRange::new(0, 1).unwrap().indexes().as_slice(), &[0]);
        assert_eq!(IndexRange::new(1, 3).unwrap().indexes().as_slice(), &[1, 2]);
        assert_eq!(IndexRange::new(5, 8).unwrap().indexes().as_slice(), &[5, 6, 7]);
        assert!(IndexRange::new(2, 3).unwrap().is_single());
    }

    #[test]
    fn test_range_beyond_len() {
        let range = IndexRange::new(1, 4).unwrap();
        assert!(!range.fits(2));
        assert!(range.fits(4));
        assert_eq!(range.indexes_beyond(2), vec![2, 3]);
        assert!(range.indexes_beyond(4).is_empty());

        let huge = IndexRange::new(0, usize::MAX).unwrap();
        let beyond = huge.indexes_beyond(3);
        assert_eq!(beyond.len(), MAX_REPORTED_INDEXES);
        assert_eq!(beyond[0], 3);
    }

    #[test]
    fn test_range_rejects_inverted_bounds() {
        assert_eq!(
            IndexRange::new(1, 0),
            Err(StackError::RangeOrder { start: 1, end: 0 })
        );
        assert_eq!(
            IndexRange::new(1, 1),
            Err(StackError::RangeOrder { start: 1, end: 1 })
        );
    }

    #[test]
    fn test_seq_indexes() {
        assert_eq!(seq_indexes(1).as_slice(), &[0]);
        assert_eq!(seq_indexes(3).as_slice(), &[0, 1, 2]);
        assert!(seq_indexes(0).is_empty());
    }

    #[test]
    fn test_normalize_indexes() {
        assert_eq!(normalize_indexes(&[3, 1, 3, 2]).as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_invalid_values() {
        let target = [0, 1, 2, 3, 4, 5];
        let result = find_anomalies(&target, &target, |v| v <= 3);
        assert_eq!(result.invalid, vec![4, 5]);
        assert!(result.not_found.is_empty());
        assert!(result.duplicates.is_empty());
    }

    #[test]
    fn test_not_found_values() {
        let result = find_anomalies(&[0, 1, 2, 3], &[0, 1, -1, -2, 3], |_| true);
        assert_eq!(result.not_found, vec![-1, -2]);

        let result = find_anomalies(&[], &[0, 1, 2], |_: i64| true);
        assert_eq!(result.not_found, vec![0, 1, 2]);
    }

    #[test]
    fn test_multiple_anomalies() {
        let validator = |v: i64| (0..=3).contains(&v);
        let result = find_anomalies(&[], &[0, 1, 3, 2, 2, 3, -1, -2, 4, 5], validator);
        assert_eq!(result.not_found, vec![0, 1, 3, 2, -1, -2, 4, 5]);
        assert_eq!(result.invalid, vec![-1, -2, 4, 5]);
        assert_eq!(result.duplicates, vec![2, 3]);

        let result = find_anomalies(&[0, 1, 2, 3], &[], validator);
        assert!(result.is_clean());
    }
}
