//! Strictly Hangman - terminal word guessing on a contract-checked engine.
//!
//! # Architecture
//!
//! - **Round engine**: [`strictly_hangman`] owns a single round (secret,
//!   guesses, chances) and never performs I/O.
//! - **Controller**: [`GameController`] drives the Start → Play → Win/Loss
//!   state machine and the optional win streak.
//! - **Frontend**: the [`Frontend`] trait renders [`View`]s and reads
//!   keystrokes; [`TerminalFrontend`] implements it with ratatui.
//! - **Words**: [`WordPool`] loads the comma-separated word list.
//!
//! # Example
//!
//! ```no_run
//! use strictly_hangman_tui::{GameConfig, GameController, TerminalFrontend, WordPool};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = GameConfig::default();
//! let pool = WordPool::load(config.word_list())?;
//! let mut frontend = TerminalFrontend::new(config.word_list())?;
//! let end = GameController::new(pool, &config).run(&mut frontend)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod controller;
mod frontend;
mod streak;
mod words;

// Crate-level exports - Configuration
pub use config::{ConfigError, EmptyAnswer, GameConfig};

// Crate-level exports - Controller
pub use controller::{Flow, GameController, GameState, RestartAnswer, SessionEnd, SessionSummary, parse_restart};

// Crate-level exports - Frontend
pub use frontend::{BoardView, Frontend, Keystroke, Prompt, TerminalFrontend, View, map_key};

// Crate-level exports - Streak
pub use streak::Streak;

// Crate-level exports - Word pool
pub use words::{WordPool, WordPoolError};

// Crate-level exports - Round engine
pub use strictly_hangman::{GuessError, GuessOutcome, Letter, MAX_CHANCES, Outcome, Round, RoundError, gallows_art};
