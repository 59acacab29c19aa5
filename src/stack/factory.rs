//! Configured stack creation.

use tracing::debug;

use super::card_stack::deck_cards;
use super::CardStack;
use crate::cards::Card;
use crate::core::{AliasGenerator, DeckConfig, StackConfig};
use crate::error::StackResult;

/// Creates stacks whose aliases come from one configured generator.
///
/// With `StackConfig::alias_seed` set, two factories built from the same
/// config hand out the same aliases in the same order.
///
/// ```
/// use card_stack::{DeckConfig, StackConfig, StackFactory};
///
/// let config = StackConfig::new().with_alias_prefix("pile").with_alias_seed(7);
/// let mut factory = StackFactory::new(&config);
///
/// let deck = factory.deck(&DeckConfig::standard());
/// assert_eq!(deck.card_count(), 52);
/// assert!(deck.alias().starts_with("pile-"));
/// ```
#[derive(Clone, Debug)]
pub struct StackFactory {
    aliases: AliasGenerator,
}

impl StackFactory {
    #[must_use]
    pub fn new(config: &StackConfig) -> Self {
        let aliases = match config.alias_seed {
            Some(seed) => AliasGenerator::with_prefix(seed, config.alias_prefix.clone()),
            None => AliasGenerator::from_entropy(config.alias_prefix.clone()),
        };
        Self { aliases }
    }

    /// An empty stack.
    pub fn empty(&mut self) -> CardStack {
        self.from_cards(Vec::new())
    }

    /// A stack holding `cards`, top first.
    pub fn from_cards(&mut self, cards: impl IntoIterator<Item = Card>) -> CardStack {
        CardStack::with_alias(self.aliases.next_alias(), cards)
    }

    /// A freshly generated deck.
    pub fn deck(&mut self, config: &DeckConfig) -> CardStack {
        let stack = self.from_cards(deck_cards(config));
        debug!(alias = %stack.alias(), count = stack.card_count(), "Created deck");
        stack
    }

    /// `CardStack::take`, naming the taken stack from this factory.
    pub fn take(&mut self, source: &mut CardStack, first_index: usize, count: usize) -> StackResult<CardStack> {
        source.take_with_alias(first_index, count, || self.aliases.next_alias())
    }

    /// `CardStack::take_top`, naming the taken stack from this factory.
    pub fn take_top(&mut self, source: &mut CardStack, count: usize) -> StackResult<CardStack> {
        source.take_top_with_alias(count, || self.aliases.next_alias())
    }
}

impl Default for StackFactory {
    fn default() -> Self {
        Self::new(&StackConfig::default())
    }
}
