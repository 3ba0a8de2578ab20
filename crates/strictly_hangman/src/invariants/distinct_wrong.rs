//! Distinct-miss invariant: a letter is never charged twice.

use super::Invariant;
use crate::Round;
use std::collections::BTreeSet;

/// Invariant: the wrong-guess list has no duplicates.
pub struct DistinctWrongInvariant;

impl Invariant<Round> for DistinctWrongInvariant {
    fn holds(round: &Round) -> bool {
        let unique: BTreeSet<_> = round.wrong_letters().iter().collect();
        unique.len() == round.wrong_letters().len()
    }

    fn description() -> &'static str {
        "Wrong letters are never repeated"
    }
}
