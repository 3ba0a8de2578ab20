//! Validated guess letters.

use crate::GuessError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A single uppercase letter of the english alphabet.
///
/// Lowercase input is normalised on construction, so two `Letter`s compare
/// equal regardless of the case they were typed in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(char);

impl Letter {
    /// Returns the uppercase character.
    pub fn as_char(self) -> char {
        self.0
    }

    /// Returns true if `c` is this letter, ignoring case.
    pub fn matches(self, c: char) -> bool {
        c.to_ascii_uppercase() == self.0
    }

    /// Parses raw player input.
    ///
    /// The input must be exactly one character and that character must be
    /// an ASCII letter. Surrounding whitespace is not trimmed.
    #[instrument]
    pub fn parse(input: &str) -> Result<Self, GuessError> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(GuessError::InvalidLetter(input.to_string())),
        }
    }
}

impl TryFrom<char> for Letter {
    type Error = GuessError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_uppercase()))
        } else {
            Err(GuessError::InvalidLetter(c.to_string()))
        }
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.0
    }
}
