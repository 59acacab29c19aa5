//! Face-state operations.

use tracing::debug;

use super::CardStack;
use crate::core::{normalize_indexes, seq_indexes, IndexRange};
use crate::error::{StackError, StackResult, ValidationError};

impl CardStack {
    /// Flip the cards at `indexes`.
    ///
    /// Indexes are sorted and deduplicated first: naming a card twice flips
    /// it once. If any index is missing nothing is flipped and the error
    /// lists every missing index in ascending order.
    pub fn turn_cards_around(&mut self, indexes: &[usize]) -> StackResult<()> {
        if self.is_empty() {
            return Err(StackError::EmptyStackTurn);
        }
        if indexes.is_empty() {
            return Err(ValidationError::EmptyIndexSet.into());
        }

        let indexes = normalize_indexes(indexes);
        let missing: Vec<usize> = indexes
            .iter()
            .copied()
            .filter(|&index| !self.card_exists(Some(index)))
            .collect();
        if !missing.is_empty() {
            return Err(StackError::IndexesNotFound(missing));
        }

        for &index in &indexes {
            if let Some(card) = self.cards.get_mut(index) {
                card.turn_around();
            }
        }
        debug!(alias = %self.alias(), indexes = ?indexes.as_slice(), "Turned cards around");
        Ok(())
    }

    /// Flip every card in `[start, end)`.
    ///
    /// A range running past the last card fails with `IndexesNotFound`
    /// listing the indexes beyond the stack (at most `MAX_REPORTED_INDEXES`).
    pub fn turn_card_range_around(&mut self, start: usize, end: usize) -> StackResult<()> {
        let range = IndexRange::new(start, end)?;
        if self.is_empty() {
            return Err(StackError::EmptyStackTurn);
        }
        if !range.fits(self.card_count()) {
            return Err(StackError::IndexesNotFound(range.indexes_beyond(self.card_count())));
        }
        if range.is_single() {
            self.turn_cards_around(&[range.start()])
        } else {
            self.turn_cards_around(&range.indexes())
        }
    }

    /// Flip the first `count` cards (indexes `0..count`).
    pub fn turn_top_cards_around(&mut self, count: usize) -> StackResult<()> {
        if self.is_empty() {
            return Err(StackError::EmptyStackTurn);
        }
        if count > self.card_count() {
            return Err(StackError::ExceedsCount {
                requested: count,
                count: self.card_count(),
            });
        }
        self.turn_cards_around(&seq_indexes(count))
    }

    /// Flip the card at index 0.
    pub fn turn_top_card_around(&mut self) -> StackResult<()> {
        self.turn_cards_around(&[0])
    }
}
