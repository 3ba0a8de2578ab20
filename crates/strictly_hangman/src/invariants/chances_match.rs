//! Chances invariant: every miss costs exactly one chance.

use super::Invariant;
use crate::{MAX_CHANCES, Round};

/// Invariant: `chances == MAX_CHANCES - wrong.len()`.
pub struct ChancesMatchInvariant;

impl Invariant<Round> for ChancesMatchInvariant {
    fn holds(round: &Round) -> bool {
        usize::from(MAX_CHANCES)
            .checked_sub(round.wrong_letters().len())
            .is_some_and(|expected| expected == usize::from(round.chances_remaining()))
    }

    fn description() -> &'static str {
        "Remaining chances equal the allowance minus wrong guesses"
    }
}
