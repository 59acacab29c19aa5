//! Property tests for stack operations.
//!
//! Properties tested:
//! - Taking a run and adding it back after its predecessor restores the stack
//! - `take_top(k)` is `take(len - k, k)`
//! - Turning the same index set twice restores face state
//! - Duplicate indexes flip once
//! - A range turn equals turning its indexes explicitly
//! - Adding an empty stack changes nothing
//! - A rejected operation changes nothing

use proptest::prelude::*;

use card_stack::{Card, CardColor, CardStack, Rank, Suit};

fn card() -> impl Strategy<Value = Card> {
    (0usize..4, 1u8..=13, 0u8..4, any::<bool>()).prop_map(|(suit, rank, color, face_up)| {
        Card::new(Suit::ALL[suit], Rank::new(rank).unwrap(), CardColor(color)).with_face_up(face_up)
    })
}

fn cards(min: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(card(), min..24)
}

fn snapshot(stack: &CardStack) -> Vec<String> {
    stack.codes(true)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: take then add after the predecessor is the identity
    #[test]
    fn prop_take_then_add_back(
        cards in cards(2),
        first in any::<prop::sample::Index>(),
        count in any::<prop::sample::Index>(),
    ) {
        let mut stack = CardStack::from_cards(cards);
        let before = snapshot(&stack);

        let first = 1 + first.index(stack.card_count() - 1);
        let count = count.index(stack.card_count() - first + 1);

        let mut taken = stack.take(first, count).unwrap();
        prop_assert_eq!(taken.card_count(), count);
        prop_assert_eq!(stack.card_count(), before.len() - count);

        stack.add_to_me(&mut taken, Some(first - 1)).unwrap();
        prop_assert_eq!(snapshot(&stack), before);
        prop_assert!(taken.is_empty());
    }

    /// Property: take_top is a take from the end
    #[test]
    fn prop_take_top_is_tail_take(cards in cards(1), count in any::<prop::sample::Index>()) {
        let mut a = CardStack::from_cards(cards);
        let mut b = a.clone();
        let count = count.index(a.card_count() + 1);

        let top = a.take_top(count).unwrap();
        let tail = b.take(b.card_count() - count, count).unwrap();
        prop_assert_eq!(snapshot(&top), snapshot(&tail));
        prop_assert_eq!(snapshot(&a), snapshot(&b));
    }

    /// Property: turning twice is the identity
    #[test]
    fn prop_turn_involution(
        cards in cards(1),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..8),
    ) {
        let mut stack = CardStack::from_cards(cards);
        let before = snapshot(&stack);
        let indexes: Vec<usize> = picks.iter().map(|pick| pick.index(stack.card_count())).collect();

        stack.turn_cards_around(&indexes).unwrap();
        stack.turn_cards_around(&indexes).unwrap();
        prop_assert_eq!(snapshot(&stack), before);
    }

    /// Property: duplicates in the index set flip once
    #[test]
    fn prop_turn_ignores_duplicates(
        cards in cards(1),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..8),
    ) {
        let mut doubled = CardStack::from_cards(cards);
        let mut single = doubled.clone();
        let indexes: Vec<usize> = picks.iter().map(|pick| pick.index(single.card_count())).collect();
        let repeated: Vec<usize> = indexes.iter().chain(indexes.iter()).copied().collect();

        doubled.turn_cards_around(&repeated).unwrap();
        single.turn_cards_around(&indexes).unwrap();
        prop_assert_eq!(snapshot(&doubled), snapshot(&single));
    }

    /// Property: a range turn equals the explicit index turn
    #[test]
    fn prop_range_matches_indexes(
        cards in cards(1),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let mut ranged = CardStack::from_cards(cards);
        let mut explicit = ranged.clone();
        let len = ranged.card_count();
        let start = a.index(len);
        let end = start + 1 + b.index(len - start);

        ranged.turn_card_range_around(start, end).unwrap();
        let indexes: Vec<usize> = (start..end).collect();
        explicit.turn_cards_around(&indexes).unwrap();
        prop_assert_eq!(snapshot(&ranged), snapshot(&explicit));
    }

    /// Property: adding an empty stack is a no-op for any index
    #[test]
    fn prop_add_empty_is_noop(cards in cards(0), index in proptest::option::of(0usize..64)) {
        let mut stack = CardStack::from_cards(cards);
        let before = snapshot(&stack);
        let mut empty = CardStack::new();

        prop_assert!(stack.add_to_me(&mut empty, index).is_ok());
        prop_assert_eq!(snapshot(&stack), before);
    }

    /// Property: a failed turn leaves every card as it was
    #[test]
    fn prop_failed_turn_is_atomic(cards in cards(1), extra in 0usize..8) {
        let mut stack = CardStack::from_cards(cards);
        let before = snapshot(&stack);
        let indexes = [0, stack.card_count() + extra];

        prop_assert!(stack.turn_cards_around(&indexes).is_err());
        prop_assert_eq!(snapshot(&stack), before);
    }
}
