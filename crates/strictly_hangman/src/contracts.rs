//! Contract-based validation for guesses.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P(round, letter)} apply_guess {Q(before, after)}

use crate::invariants::{InvariantSet, RoundInvariants};
use crate::{GuessError, Letter, MAX_CHANCES, Round};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GuessError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GuessError>;
}

/// Precondition: the round must not be won or lost.
pub struct RoundStillOpen;

impl RoundStillOpen {
    /// Checks the precondition.
    #[instrument(skip(round))]
    pub fn check(round: &Round) -> Result<(), GuessError> {
        if round.is_over() {
            Err(GuessError::RoundOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the letter must not have been guessed before.
pub struct LetterNotGuessed;

impl LetterNotGuessed {
    /// Checks the precondition.
    #[instrument(skip(round))]
    pub fn check(letter: &Letter, round: &Round) -> Result<(), GuessError> {
        if round.has_guessed(*letter) {
            Err(GuessError::AlreadyGuessed(*letter))
        } else {
            Ok(())
        }
    }
}

/// Contract for guesses.
///
/// Preconditions:
/// - Round is still open
/// - Letter is new
///
/// Postconditions:
/// - Round invariants hold
/// - Exactly one letter was added to the guessed set
/// - Chances dropped by at most one
pub struct GuessContract;

impl Contract<Round, Letter> for GuessContract {
    fn pre(round: &Round, letter: &Letter) -> Result<(), GuessError> {
        RoundStillOpen::check(round)?;
        LetterNotGuessed::check(letter, round)?;
        Ok(())
    }

    fn post(before: &Round, after: &Round) -> Result<(), GuessError> {
        RoundInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GuessError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        if after.guessed.len() != before.guessed.len() + 1 || !before.guessed.is_subset(&after.guessed) {
            warn!(before = before.guessed.len(), after = after.guessed.len(), "Guessed set did not grow by one");
            return Err(GuessError::InvariantViolation(
                "Guessed set must grow by exactly one letter".to_string(),
            ));
        }

        let spent = before.chances.saturating_sub(after.chances);
        if after.chances > before.chances || spent > 1 || after.chances > MAX_CHANCES {
            warn!(before = before.chances, after = after.chances, "Chances changed by more than one");
            return Err(GuessError::InvariantViolation(
                "Chances must drop by at most one per guess".to_string(),
            ));
        }

        Ok(())
    }
}
