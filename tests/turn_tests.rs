//! Face-state integration tests.

use card_stack::{CardStack, StackError};

fn stack(codes: &[&str]) -> CardStack {
    CardStack::from_codes(codes).unwrap()
}

const FOUR: &[&str] = &["100+", "200+", "300+", "400+"];

// =============================================================================
// turn_cards_around
// =============================================================================

/// Test flipping explicit index sets.
#[test]
fn test_turn_cards_around_cases() {
    let cases: &[(&[&str], &[usize], &[&str])] = &[
        (&["100+"], &[0], &["100-"]),
        (FOUR, &[0], &["100-", "200+", "300+", "400+"]),
        (FOUR, &[1], &["100+", "200-", "300+", "400+"]),
        (FOUR, &[2], &["100+", "200+", "300-", "400+"]),
        (FOUR, &[3], &["100+", "200+", "300+", "400-"]),
        (FOUR, &[0, 1], &["100-", "200-", "300+", "400+"]),
        (FOUR, &[0, 0], &["100-", "200+", "300+", "400+"]),
        (FOUR, &[1, 3], &["100+", "200-", "300+", "400-"]),
        (FOUR, &[0, 1, 2, 3], &["100-", "200-", "300-", "400-"]),
        (FOUR, &[1, 1, 3, 3], &["100+", "200-", "300+", "400-"]),
    ];

    for &(target, indexes, result) in cases {
        let mut cards = stack(target);
        cards.turn_cards_around(indexes).unwrap();
        assert_eq!(cards.codes(true), result, "indexes {indexes:?}");
    }
}

/// Test that missing indexes are reported sorted and deduplicated.
#[test]
fn test_turn_cards_around_missing() {
    let three: &[&str] = &["100+", "100+", "100+"];
    let cases: &[(&[&str], &[usize], &str)] = &[
        (&["100+"], &[1], "1"),
        (three, &[0, 1, 2, 3], "3"),
        (three, &[0, 1, 2, 3, 3], "3"),
        (three, &[0, 1, 3, 2], "3"),
        (three, &[3, 1, 3, 2], "3"),
        (three, &[3, 3, 3, 3], "3"),
        (three, &[3, 4, 5, 3], "3,4,5"),
        (three, &[3, 4, 5, 2], "3,4,5"),
    ];

    for &(target, indexes, missing) in cases {
        let mut cards = stack(target);
        let err = cards.turn_cards_around(indexes).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Cannot turn around cards: indexes {missing} don't exist in card stack")
        );
        assert_eq!(cards.codes(true), target, "nothing flips on error");
    }
}

/// Test that an empty stack rejects turning.
#[test]
fn test_turn_empty_stack() {
    let mut empty = CardStack::new();
    assert_eq!(
        empty.turn_cards_around(&[0]).unwrap_err().to_string(),
        "Cannot turn around cards in empty card stack"
    );
    assert_eq!(empty.turn_top_card_around(), Err(StackError::EmptyStackTurn));
}

/// Test that turning twice restores the face state.
#[test]
fn test_turn_twice() {
    let mut single = stack(&["100"]);
    single.turn_cards_around(&[0]).unwrap();
    assert!(single.get_card(0).unwrap().is_face_up());
    single.turn_cards_around(&[0]).unwrap();
    assert!(!single.get_card(0).unwrap().is_face_up());
}

// =============================================================================
// turn_card_range_around
// =============================================================================

/// Test every half-open range of a four-card stack.
#[test]
fn test_turn_range_cases() {
    let cases: &[(usize, usize, &[&str])] = &[
        (0, 1, &["100-", "200+", "300+", "400+"]),
        (0, 2, &["100-", "200-", "300+", "400+"]),
        (0, 3, &["100-", "200-", "300-", "400+"]),
        (0, 4, &["100-", "200-", "300-", "400-"]),
        (1, 2, &["100+", "200-", "300+", "400+"]),
        (1, 3, &["100+", "200-", "300-", "400+"]),
        (1, 4, &["100+", "200-", "300-", "400-"]),
        (2, 3, &["100+", "200+", "300-", "400+"]),
        (2, 4, &["100+", "200+", "300-", "400-"]),
        (3, 4, &["100+", "200+", "300+", "400-"]),
    ];

    for &(start, end, result) in cases {
        let mut cards = stack(FOUR);
        cards.turn_card_range_around(start, end).unwrap();
        assert_eq!(cards.codes(true), result, "range {start}..{end}");
    }

    let mut single = stack(&["100+"]);
    single.turn_card_range_around(0, 1).unwrap();
    assert_eq!(single.codes(true), ["100-"]);
}

/// Test that a range must be non-empty.
#[test]
fn test_turn_range_order() {
    let mut cards = stack(&["100+"]);
    for (start, end) in [(0, 0), (1, 0)] {
        assert_eq!(
            cards.turn_card_range_around(start, end).unwrap_err().to_string(),
            format!(
                "Cannot turn around cards: start card index value {start} is greater or equals end card index value {end}"
            )
        );
    }
}

/// Test that a range running past the end reports the missing indexes.
#[test]
fn test_turn_range_past_end() {
    let mut cards = stack(&["100+", "200+"]);
    assert_eq!(
        cards.turn_card_range_around(1, 4),
        Err(StackError::IndexesNotFound(vec![2, 3]))
    );
}

/// Test that a range ending far past the stack fails without expanding it.
#[test]
fn test_turn_range_huge_end() {
    let mut cards = stack(&["100+", "200+", "300+"]);
    let missing = match cards.turn_card_range_around(0, 1 << 40) {
        Err(StackError::IndexesNotFound(missing)) => missing,
        other => panic!("unexpected result {other:?}"),
    };
    assert_eq!(missing.len(), card_stack::core::MAX_REPORTED_INDEXES);
    assert_eq!(missing.first(), Some(&3));
    assert_eq!(cards.codes(true), ["100+", "200+", "300+"]);
}

/// Test that an empty stack is reported before the range is checked against it.
#[test]
fn test_turn_range_on_empty_stack() {
    let mut empty = CardStack::new();
    assert_eq!(empty.turn_card_range_around(0, 2), Err(StackError::EmptyStackTurn));
}

// =============================================================================
// turn_top_cards_around / turn_top_card_around
// =============================================================================

/// Test flipping the first cards.
#[test]
fn test_turn_top_cards_cases() {
    let cases: &[(&[&str], usize, &[&str])] = &[
        (&["100+"], 1, &["100-"]),
        (FOUR, 1, &["100-", "200+", "300+", "400+"]),
        (FOUR, 2, &["100-", "200-", "300+", "400+"]),
        (FOUR, 3, &["100-", "200-", "300-", "400+"]),
        (FOUR, 4, &["100-", "200-", "300-", "400-"]),
    ];

    for &(target, count, result) in cases {
        let mut cards = stack(target);
        cards.turn_top_cards_around(count).unwrap();
        assert_eq!(cards.codes(true), result, "count {count}");
    }
}

/// Test the count and emptiness checks of turn_top_cards_around.
#[test]
fn test_turn_top_cards_rejections() {
    let mut cards = stack(&["100+"]);
    assert_eq!(
        cards.turn_top_cards_around(2).unwrap_err().to_string(),
        "Cannot turn top cards around: number of cards 2 exceeds number of cards 1 in the stack"
    );

    let mut empty = CardStack::new();
    assert_eq!(
        empty.turn_top_cards_around(1).unwrap_err().to_string(),
        "Cannot turn around cards in empty card stack"
    );
}

/// Test flipping the top card only.
#[test]
fn test_turn_top_card() {
    for (target, result) in [(vec!["100+"], vec!["100-"]), (vec!["100+", "200+"], vec!["100-", "200+"])] {
        let mut cards = stack(&target);
        cards.turn_top_card_around().unwrap();
        assert_eq!(cards.codes(true), result);
    }
}
