//! Pure hangman round logic.
//!
//! A [`Round`] owns the secret word, the guessed letters and the remaining
//! chances. Guesses are validated into [`Letter`]s before they reach the
//! round, and every accepted guess is checked against the round contract.
//!
//! # Example
//!
//! ```
//! use strictly_hangman::{GuessOutcome, Letter, Round};
//!
//! let mut round = Round::start("cat")?;
//! assert_eq!(round.apply_guess(Letter::try_from('a')?)?, GuessOutcome::Hit);
//! assert_eq!(round.apply_guess(Letter::try_from('z')?)?, GuessOutcome::Miss);
//! assert_eq!(round.display_word(), "_A_");
//! assert_eq!(round.chances_remaining(), 5);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod error;
mod gallows;
pub mod invariants;
mod letter;
mod round;

pub use contracts::{Contract, GuessContract, LetterNotGuessed, RoundStillOpen};
pub use error::{GuessError, RoundError};
pub use gallows::{BodyPart, gallows_art};
pub use invariants::{Invariant, InvariantSet, InvariantViolation, RoundInvariants};
pub use letter::Letter;
pub use round::{GuessOutcome, MAX_CHANCES, Outcome, Round};

/// Placeholder shown for letters that have not been guessed yet.
pub const PLACEHOLDER: char = '_';
