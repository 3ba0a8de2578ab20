//! Wrong-guess invariant: the miss list is exactly the guessed letters
//! absent from the secret.

use super::Invariant;
use crate::{Letter, Round};
use std::collections::BTreeSet;

/// Invariant: wrong letters are the guessed letters not in the secret.
///
/// This covers both directions: no hit is recorded as a miss, and no miss
/// goes unrecorded.
pub struct WrongGuessesConsistentInvariant;

impl Invariant<Round> for WrongGuessesConsistentInvariant {
    fn holds(round: &Round) -> bool {
        let in_secret = |letter: &Letter| round.secret().chars().any(|c| letter.matches(c));

        let expected: BTreeSet<Letter> = round
            .guessed_letters()
            .iter()
            .filter(|letter| !in_secret(*letter))
            .copied()
            .collect();
        let recorded: BTreeSet<Letter> = round.wrong_letters().iter().copied().collect();

        expected == recorded
    }

    fn description() -> &'static str {
        "Wrong letters are exactly the guessed letters absent from the secret"
    }
}
