//! The `CardStack` container: construction, queries, iteration, sorting.

use std::cmp::Ordering;

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Card;
use crate::core::{in_direction, random_alias, DeckConfig, Directed, Direction};
use crate::error::{CodeError, StackError, StackResult};

/// An ordered stack of cards. Index 0 is the top card.
///
/// Backed by a persistent vector, so cloning a stack (e.g. to explore a
/// hypothetical move) is O(1) and the clone is independent.
///
/// ```
/// use card_stack::CardStack;
///
/// let mut deck = CardStack::from_codes(&["100", "200", "300"]).unwrap();
/// let hand = deck.take(0, 2).unwrap();
///
/// assert_eq!(hand.codes(false), ["100", "200"]);
/// assert_eq!(deck.codes(false), ["300"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardStack {
    pub(super) cards: Vector<Card>,
    alias: String,
}

impl CardStack {
    /// Create an empty stack with a random alias.
    #[must_use]
    pub fn new() -> Self {
        Self::with_alias(random_alias(), Vec::new())
    }

    /// Create a stack from cards in top-to-bottom order.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self::with_alias(random_alias(), cards)
    }

    /// Create a stack with an explicit alias.
    pub fn with_alias(alias: impl Into<String>, cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            alias: alias.into(),
        }
    }

    pub(super) fn from_vector(cards: Vector<Card>, alias: String) -> Self {
        Self { cards, alias }
    }

    /// Parse a stack from card codes (see `cards::code`).
    pub fn from_codes<S: AsRef<str>>(codes: &[S]) -> Result<Self, CodeError> {
        let cards = codes
            .iter()
            .map(|code| code.as_ref().parse::<Card>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_cards(cards))
    }

    /// Build a deck laid out as `config` describes.
    #[must_use]
    pub fn standard_deck(config: &DeckConfig) -> Self {
        Self::from_cards(deck_cards(config))
    }

    /// Diagnostic identifier of this stack.
    #[must_use]
    pub fn alias(&self) -> &str {
        &self.alias
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// True iff `index` is given and points at a card.
    #[must_use]
    pub fn card_exists(&self, index: Option<usize>) -> bool {
        index.is_some_and(|i| i < self.cards.len())
    }

    /// Get the card at `index`.
    pub fn get_card(&self, index: usize) -> StackResult<&Card> {
        self.cards.get(index).ok_or_else(|| StackError::IndexNotFound {
            index: Some(index),
            alias: self.alias.clone(),
        })
    }

    /// Iterate top to bottom.
    pub fn iter(&self) -> im::vector::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Iterate in the given direction without touching the stack.
    pub fn cards_in_order(&self, direction: Direction) -> Directed<im::vector::Iter<'_, Card>> {
        in_direction(self.cards.iter(), direction)
    }

    /// Card codes top to bottom.
    #[must_use]
    pub fn codes(&self, with_face: bool) -> Vec<String> {
        self.cards.iter().map(|card| card.code(with_face)).collect()
    }

    /// Reorder in place with a caller-supplied comparator.
    ///
    /// Not stable: supply a total order when ties must be deterministic.
    pub fn sort<F>(&mut self, compare: F)
    where
        F: Fn(&Card, &Card) -> Ordering,
    {
        self.cards.sort_by(compare);
        debug!(alias = %self.alias, count = self.cards.len(), "Sorted card stack");
    }
}

impl Default for CardStack {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a CardStack {
    type Item = &'a Card;
    type IntoIter = im::vector::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

pub(super) fn deck_cards(config: &DeckConfig) -> Vec<Card> {
    config
        .suits
        .iter()
        .flat_map(|suit_color| {
            config.ranks.iter().map(move |&rank| {
                Card::new(suit_color.suit, rank, suit_color.color).with_face_up(config.face_up)
            })
        })
        .collect()
}
