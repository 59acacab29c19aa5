//! Direction-aware iteration over ordered sequences.
//!
//! Splicing algorithms sometimes need to walk a sequence back to front
//! (repeated insertion at a fixed point reverses order, so the source is
//! walked in reverse to cancel that out). Instead of a mode flag stored on
//! the container, the direction is a value passed per call and the view
//! borrows nothing beyond the iterator it wraps.
//!
//! ```
//! use card_stack::core::{in_direction, Direction};
//!
//! let values = [1, 2, 3];
//! let forward: Vec<_> = in_direction(&values, Direction::Forward).copied().collect();
//! let reverse: Vec<_> = in_direction(&values, Direction::Reverse).copied().collect();
//!
//! assert_eq!(forward, [1, 2, 3]);
//! assert_eq!(reverse, [3, 2, 1]);
//! ```

use serde::{Deserialize, Serialize};

/// Iteration direction over an ordered sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Index 0 first.
    #[default]
    Forward,
    /// Last index first.
    Reverse,
}

impl Direction {
    /// The opposite direction. Not used by stack operations; for callers
    /// that toggle a stored direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

/// Iterator adapter yielding items of `I` in a chosen direction.
#[derive(Clone, Debug)]
pub struct Directed<I> {
    inner: I,
    direction: Direction,
}

impl<I> Directed<I> {
    /// Wrap a double-ended iterator.
    pub fn new(inner: I, direction: Direction) -> Self {
        Self { inner, direction }
    }

    /// Direction this view yields in.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl<I: DoubleEndedIterator> Iterator for Directed<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.direction {
            Direction::Forward => self.inner.next(),
            Direction::Reverse => self.inner.next_back(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: DoubleEndedIterator> DoubleEndedIterator for Directed<I> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match self.direction {
            Direction::Forward => self.inner.next_back(),
            Direction::Reverse => self.inner.next(),
        }
    }
}

impl<I: ExactSizeIterator + DoubleEndedIterator> ExactSizeIterator for Directed<I> {}

/// View any double-ended sequence in the given direction without copying it.
pub fn in_direction<T>(items: T, direction: Direction) -> Directed<T::IntoIter>
where
    T: IntoIterator,
    T::IntoIter: DoubleEndedIterator,
{
    Directed::new(items.into_iter(), direction)
}
