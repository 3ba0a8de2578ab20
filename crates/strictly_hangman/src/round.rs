//! The round state and its guess operation.

use crate::contracts::{Contract, GuessContract};
use crate::{GuessError, Letter, PLACEHOLDER, RoundError, gallows_art};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Wrong guesses allowed before the round is lost.
pub const MAX_CHANCES: u8 = 6;

/// Result of an accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// The letter occurs in the secret.
    Hit,
    /// The letter does not occur in the secret; one chance was spent.
    Miss,
}

/// Terminal outcome of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Every letter of the secret was guessed.
    Won,
    /// All chances were spent.
    Lost,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won => write!(f, "Won"),
            Outcome::Lost => write!(f, "Lost"),
        }
    }
}

/// One attempt at guessing a single secret word.
///
/// Invariants:
/// - `chances_remaining() == MAX_CHANCES - wrong_letters().len()`
/// - every wrong letter is also a guessed letter
/// - the guessed set only grows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub(crate) secret: String,
    pub(crate) guessed: BTreeSet<Letter>,
    pub(crate) wrong: Vec<Letter>,
    pub(crate) chances: u8,
}

impl Round {
    /// Starts a fresh round for `secret`.
    ///
    /// The secret is trimmed and uppercased. Characters that are not ASCII
    /// letters (spaces, hyphens, apostrophes) are shown as-is and never need
    /// guessing, so a secret without any letter is rejected.
    #[instrument(skip_all, fields(len = secret.len()))]
    pub fn start(secret: &str) -> Result<Self, RoundError> {
        let secret = secret.trim().to_uppercase();
        if !secret.chars().any(|c| c.is_ascii_alphabetic()) {
            return Err(RoundError::InvalidWord(secret));
        }

        debug!("Round started");
        Ok(Self {
            secret,
            guessed: BTreeSet::new(),
            wrong: Vec::new(),
            chances: MAX_CHANCES,
        })
    }

    /// Applies a validated letter to the round.
    ///
    /// Fails without touching the round if the letter was already guessed
    /// or the round is over.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self, letter), fields(letter = %letter, chances = self.chances))]
    pub fn apply_guess(&mut self, letter: Letter) -> Result<GuessOutcome, GuessError> {
        GuessContract::pre(self, &letter)?;

        let mut next = self.clone();
        next.guessed.insert(letter);
        let outcome = if next.secret.chars().any(|c| letter.matches(c)) {
            GuessOutcome::Hit
        } else {
            next.wrong.push(letter);
            next.chances -= 1;
            GuessOutcome::Miss
        };

        #[cfg(debug_assertions)]
        GuessContract::post(self, &next)?;

        *self = next;
        debug!(?outcome, chances = self.chances, "Guess applied");
        Ok(outcome)
    }

    /// Returns the secret with unguessed letters replaced by `_`.
    ///
    /// Masking is per letter, so repeated letters reveal together.
    pub fn display_word(&self) -> String {
        self.secret
            .chars()
            .map(|c| match Letter::try_from(c) {
                Ok(letter) if !self.guessed.contains(&letter) => PLACEHOLDER,
                _ => c,
            })
            .collect()
    }

    /// Returns true if every distinct letter of the secret has been guessed.
    pub fn is_won(&self) -> bool {
        self.secret
            .chars()
            .filter_map(|c| Letter::try_from(c).ok())
            .all(|letter| self.guessed.contains(&letter))
    }

    /// Returns true once all chances are spent.
    pub fn is_lost(&self) -> bool {
        self.chances == 0
    }

    /// Returns the outcome, or `None` while the round is still open.
    ///
    /// A lost round is reported as lost even if the word happens to be
    /// complete.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_lost() {
            Some(Outcome::Lost)
        } else if self.is_won() {
            Some(Outcome::Won)
        } else {
            None
        }
    }

    /// Returns true if the round is won or lost.
    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Returns true if `letter` was already guessed.
    pub fn has_guessed(&self, letter: Letter) -> bool {
        self.guessed.contains(&letter)
    }

    /// Returns the uppercased secret.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Returns every guessed letter.
    pub fn guessed_letters(&self) -> &BTreeSet<Letter> {
        &self.guessed
    }

    /// Returns the wrong guesses in the order they were made.
    pub fn wrong_letters(&self) -> &[Letter] {
        &self.wrong
    }

    /// Returns the chances left, in `0..=MAX_CHANCES`.
    pub fn chances_remaining(&self) -> u8 {
        self.chances
    }

    /// Returns the gallows drawing for the current chances.
    pub fn gallows(&self) -> String {
        gallows_art(self.chances)
    }
}
