//! Property tests for answer derivation and column placement.

use cipher_notes::{
    derive_answer, positions_from_answer, swap_columns, NotesConfig, NO_ANSWER,
};
use proptest::prelude::*;

/// An injective placement of 3 hints into columns 1..=4, plus the spare
/// placeholder slot.
fn classic_positions() -> impl Strategy<Value = Vec<u8>> {
    Just(vec![1u8, 2, 3, 4]).prop_shuffle().prop_map(|mut cols| {
        // First three shuffled columns are the hints; the placeholder keeps
        // the default spare column.
        cols.truncate(3);
        cols.push(4);
        cols
    })
}

proptest! {
    /// The answer is exactly the first three entries as digits.
    #[test]
    fn derive_answer_matches_first_three(positions in classic_positions()) {
        let answer = derive_answer(&positions);

        prop_assert_eq!(answer.len(), 3);
        for (i, ch) in answer.chars().enumerate() {
            prop_assert_eq!(ch.to_digit(10).unwrap() as u8, positions[i]);
        }
    }

    /// Fewer than three entries always yields the sentinel.
    #[test]
    fn derive_answer_short_input(entries in proptest::collection::vec(1u8..=4, 0..3)) {
        prop_assert_eq!(derive_answer(&entries), NO_ANSWER);
    }

    /// Swapping any two columns preserves injectivity among the live hints.
    #[test]
    fn swap_preserves_injectivity(
        mut positions in classic_positions(),
        col_a in 1u8..=4,
        col_b in 1u8..=4,
    ) {
        swap_columns(&mut positions, 3, col_a, col_b);

        let live = &positions[..3];
        for col in live {
            prop_assert_eq!(live.iter().filter(|&&p| p == *col).count(), 1);
        }
    }

    /// A swap is undone by swapping the same columns again.
    #[test]
    fn swap_is_an_involution(
        positions in classic_positions(),
        col_a in 1u8..=4,
        col_b in 1u8..=4,
    ) {
        let mut swapped = positions.clone();
        swap_columns(&mut swapped, 3, col_a, col_b);
        swap_columns(&mut swapped, 3, col_a, col_b);

        prop_assert_eq!(swapped, positions);
    }

    /// A clean three-digit answer round-trips through position derivation.
    #[test]
    fn clean_answer_roundtrips(positions in classic_positions()) {
        let config = NotesConfig::classic();
        let answer = derive_answer(&positions);

        let parse = positions_from_answer(&answer, &config);

        prop_assert!(parse.is_clean());
        prop_assert_eq!(&parse.positions[..3], &positions[..3]);
        prop_assert_eq!(derive_answer(&parse.positions), answer);
    }

    /// Arbitrary typed answers always produce a full positions array with
    /// every invalid character reported and replaced by its identity column.
    #[test]
    fn typed_answers_never_panic(answer in ".{0,8}") {
        let config = NotesConfig::classic();
        let parse = positions_from_answer(&answer, &config);

        prop_assert_eq!(parse.positions.len(), config.column_count);
        for &i in &parse.invalid {
            prop_assert_eq!(parse.positions[i], i as u8 + 1);
        }
        for (i, &col) in parse.positions[..config.hint_count].iter().enumerate() {
            if !parse.invalid.contains(&i) {
                prop_assert!(config.is_valid_column(col));
            }
        }
    }
}
