//! Moving whole sub-stacks between stacks: `add_*` and `take*`.
//!
//! ```text
//! add_to_me(source, Some(1)):
//!
//!   destination        source          destination after
//!   0: 200                             0: 200
//!   1: 300  <- after   0: 400          1: 300
//!   2: 600             1: 500          2: 400
//!                                      3: 500
//!                                      4: 600
//! ```
//!
//! Every check runs before either stack is touched, so a rejected call
//! leaves both stacks as they were.

use tracing::debug;

use super::CardStack;
use crate::core::{in_direction, random_alias, Direction};
use crate::error::{StackError, StackResult};

impl CardStack {
    /// Move every card of `source` into this stack, right after `index`.
    ///
    /// - Empty `source`: no-op, whatever `index` is.
    /// - Empty destination: `index` must be `None`; `source` becomes the content.
    /// - Otherwise: `index` is required and must exist.
    ///
    /// On success `source` is left empty; its cards now belong to this stack,
    /// in their original order.
    pub fn add_to_me(&mut self, source: &mut CardStack, index: Option<usize>) -> StackResult<()> {
        if source.is_empty() {
            return Ok(());
        }

        if self.is_empty() {
            if index.is_some() {
                return Err(StackError::IndexShouldBeOmitted {
                    alias: self.alias().to_string(),
                });
            }
            self.cards = std::mem::take(&mut source.cards);
            debug!(
                alias = %self.alias(),
                source = %source.alias(),
                added = self.card_count(),
                "Filled empty card stack"
            );
            return Ok(());
        }

        let index = index.ok_or_else(|| StackError::MissingIndex {
            alias: self.alias().to_string(),
        })?;
        if !self.card_exists(Some(index)) {
            return Err(StackError::IndexNotFound {
                index: Some(index),
                alias: self.alias().to_string(),
            });
        }

        // Inserting at one fixed point reverses order, so feed the source back to front.
        let incoming = std::mem::take(&mut source.cards);
        let insert_at = index + 1;
        for card in in_direction(incoming.iter(), Direction::Reverse) {
            self.cards.insert(insert_at, card.clone());
        }
        debug!(
            alias = %self.alias(),
            source = %source.alias(),
            added = incoming.len(),
            index,
            "Added card stack"
        );
        Ok(())
    }

    /// Move every card of this stack into `target`, right after `index`.
    pub fn add_myself_to(&mut self, target: &mut CardStack, index: Option<usize>) -> StackResult<()> {
        target.add_to_me(self, index)
    }

    /// Move `source` in after this stack's last card (or fill it when empty).
    pub fn add_to_me_on_top(&mut self, source: &mut CardStack) -> StackResult<()> {
        let index = self.card_count().checked_sub(1);
        self.add_to_me(source, index)
    }

    /// Move this stack in after `target`'s last card (or fill it when empty).
    pub fn add_myself_on_top(&mut self, target: &mut CardStack) -> StackResult<()> {
        target.add_to_me_on_top(self)
    }

    /// Remove `count` contiguous cards starting at `first_index` and return
    /// them as a new stack, in their original order, under a random alias.
    pub fn take(&mut self, first_index: usize, count: usize) -> StackResult<CardStack> {
        self.take_with_alias(first_index, count, random_alias)
    }

    /// `take`, naming the new stack with `alias`. `alias` only runs on success.
    pub fn take_with_alias(
        &mut self,
        first_index: usize,
        count: usize,
        alias: impl FnOnce() -> String,
    ) -> StackResult<CardStack> {
        if self.is_empty() {
            return Err(StackError::StackEmpty {
                alias: self.alias().to_string(),
            });
        }

        let available = self.card_count().saturating_sub(first_index);
        if count > available {
            return Err(StackError::InsufficientCards {
                requested: count,
                available,
                alias: self.alias().to_string(),
            });
        }

        let start = first_index.min(self.card_count());
        let taken = CardStack::from_vector(self.cards.slice(start..start + count), alias());
        debug!(
            alias = %self.alias(),
            taken_alias = %taken.alias(),
            first_index,
            count,
            "Took cards"
        );
        Ok(taken)
    }

    /// Remove the last `count` cards and return them as a new stack.
    ///
    /// Availability is reported against the whole stack.
    pub fn take_top(&mut self, count: usize) -> StackResult<CardStack> {
        self.take_top_with_alias(count, random_alias)
    }

    /// `take_top`, naming the new stack with `alias`.
    pub fn take_top_with_alias(&mut self, count: usize, alias: impl FnOnce() -> String) -> StackResult<CardStack> {
        if self.is_empty() {
            return Err(StackError::StackEmpty {
                alias: self.alias().to_string(),
            });
        }

        let available = self.card_count();
        if count > available {
            return Err(StackError::InsufficientCards {
                requested: count,
                available,
                alias: self.alias().to_string(),
            });
        }

        self.take_with_alias(available - count, count, alias)
    }
}
