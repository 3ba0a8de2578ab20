//! Error types for round creation and guessing.

use crate::Letter;

/// Error returned when a round cannot be created.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RoundError {
    /// The secret is empty or has no letters to guess.
    #[display("Invalid word {:?}: a secret needs at least one letter", _0)]
    InvalidWord(String),
}

impl std::error::Error for RoundError {}

/// Error that can occur when validating or applying a guess.
///
/// None of these leave the round modified.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GuessError {
    /// Input was not exactly one letter of the english alphabet.
    #[display("{:?} is not a single letter from the english alphabet", _0)]
    InvalidLetter(String),

    /// The letter is already in the guessed set.
    #[display("The letter {} was already guessed", _0)]
    AlreadyGuessed(Letter),

    /// The round is already won or lost.
    #[display("Round is already over")]
    RoundOver,

    /// A postcondition failed after applying the guess.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GuessError {}
