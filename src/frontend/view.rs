//! View model handed to a [`Frontend`](super::Frontend).

use crate::EmptyAnswer;
use derive_getters::Getters;
use strictly_hangman::{Letter, Round};

/// Everything the board area shows for one round.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct BoardView {
    /// Masked word, letters separated by spaces.
    word: String,
    /// Wrong guesses in the order they were made.
    wrong_guesses: Vec<Letter>,
    /// Gallows drawing for the current chances.
    gallows: String,
    /// Chances left.
    chances: u8,
    /// Current win streak, when streak tracking is on.
    streak: Option<u32>,
}

impl BoardView {
    /// Captures the state of `round`.
    pub fn new(round: &Round, streak: Option<u32>) -> Self {
        let word = round
            .display_word()
            .chars()
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            word,
            wrong_guesses: round.wrong_letters().to_vec(),
            gallows: round.gallows(),
            chances: round.chances_remaining(),
            streak,
        }
    }

    /// Wrong guesses joined with commas.
    pub fn wrong_list(&self) -> String {
        self.wrong_guesses
            .iter()
            .map(|letter| letter.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Board text, one entry per screen line.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!("You have {} chances left to save the man!", self.chances)];
        lines.extend(self.gallows.lines().map(str::to_string));
        lines.push(format!("Word: {}", self.word));
        lines.push(format!("Incorrect guesses = {}", self.wrong_list()));
        if let Some(streak) = self.streak {
            lines.push(format!("Current streak: {}", streak));
        }
        lines
    }
}

impl std::fmt::Display for BoardView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

/// Line shown under the board asking for input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// Ask for the next letter.
    GuessLetter,
    /// The key was not a letter.
    InvalidLetter,
    /// The letter was guessed earlier this round.
    AlreadyGuessed(Letter),
    /// Round won; ask to play again.
    Won(EmptyAnswer),
    /// Round lost; reveal the word and ask to play again.
    Lost {
        /// The secret.
        word: String,
        /// Meaning of a blank answer.
        empty_answer: EmptyAnswer,
    },
    /// The play-again answer was not understood.
    InvalidAnswer(EmptyAnswer),
}

impl Prompt {
    /// Returns true for prompts caused by rejected input.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidLetter | Self::AlreadyGuessed(_) | Self::InvalidAnswer(_)
        )
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GuessLetter => write!(f, "Guess a letter."),
            Self::InvalidLetter => write!(f, "Please enter a valid letter from the english alphabet."),
            Self::AlreadyGuessed(letter) => {
                write!(f, "The letter {} was already guessed. Pick a new letter.", letter)
            }
            Self::Won(empty_answer) => write!(
                f,
                "Yay! You saved him! He was responsible for killing 20 people, but oh well. \
                 Would you like to start a new game? {}",
                empty_answer.hint()
            ),
            Self::Lost { word, empty_answer } => write!(
                f,
                "The word was '{}'. No worries, he was only a father of 5 small children... \
                 Would you like to start a new game? {}",
                word,
                empty_answer.hint()
            ),
            Self::InvalidAnswer(empty_answer) => write!(
                f,
                "Please answer y or n. Would you like to start a new game? {}",
                empty_answer.hint()
            ),
        }
    }
}

/// One full screen: the board plus the current prompt.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct View {
    /// Board area.
    board: BoardView,
    /// Prompt line.
    prompt: Prompt,
}

impl View {
    /// Creates a view.
    pub fn new(board: BoardView, prompt: Prompt) -> Self {
        Self { board, prompt }
    }
}
