//! Property tests for round invariants.

use proptest::prelude::*;
use strictly_hangman::{InvariantSet, Letter, MAX_CHANCES, PLACEHOLDER, Round, RoundInvariants};

fn secret() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,12}"
}

fn guesses() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(prop::char::range('a', 'z'), 0..40)
}

proptest! {
    #[test]
    fn chances_always_match_wrong_letters(secret in secret(), guesses in guesses()) {
        let mut round = Round::start(&secret).unwrap();
        for c in guesses {
            let _ = round.apply_guess(Letter::try_from(c).unwrap());
            prop_assert_eq!(
                usize::from(round.chances_remaining()),
                usize::from(MAX_CHANCES) - round.wrong_letters().len()
            );
            prop_assert!(RoundInvariants::check_all(&round).is_ok());
        }
    }

    #[test]
    fn won_iff_fully_revealed(secret in secret(), guesses in guesses()) {
        let mut round = Round::start(&secret).unwrap();
        for c in guesses {
            let _ = round.apply_guess(Letter::try_from(c).unwrap());
            prop_assert_eq!(round.is_won(), !round.display_word().contains(PLACEHOLDER));
        }
    }

    #[test]
    fn six_distinct_misses_lose_in_any_order(order in Just(vec!['Q', 'W', 'E', 'R', 'T', 'Y']).prop_shuffle()) {
        let mut round = Round::start("dog").unwrap();
        for c in order {
            round.apply_guess(Letter::try_from(c).unwrap()).unwrap();
        }
        prop_assert_eq!(round.chances_remaining(), 0);
        prop_assert!(round.is_lost());
    }
}
