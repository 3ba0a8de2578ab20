//! Command-line interface for the hangman binary.

use clap::Parser;
use std::path::PathBuf;
use strictly_hangman_tui::{EmptyAnswer, GameConfig};
use tracing::{debug, instrument};

/// Strictly Hangman - guess the word before the man is hanged
#[derive(Parser, Debug)]
#[command(name = "hangman")]
#[command(about = "Terminal hangman with a contract-checked round engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Comma-separated word list (overrides the config file)
    #[arg(short, long)]
    pub words: Option<PathBuf>,

    /// Path to the TOML config file (ignored if missing)
    #[arg(short, long, default_value = "hangman.toml")]
    pub config: PathBuf,

    /// Do not count or show the win streak
    #[arg(long)]
    pub no_streak: bool,

    /// What a blank answer to "play again?" means
    #[arg(long, value_enum)]
    pub empty_answer: Option<EmptyAnswer>,

    /// Seed for word selection (random if not provided)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where to write logs (the terminal is taken by the game)
    #[arg(long, default_value = "strictly_hangman.log")]
    pub log_file: PathBuf,
}

impl Cli {
    /// Applies command-line overrides on top of the file configuration.
    #[instrument(skip(self, config))]
    pub fn apply(&self, mut config: GameConfig) -> GameConfig {
        if let Some(words) = &self.words {
            debug!(words = %words.display(), "Overriding word list");
            config = config.with_word_list(words.clone());
        }
        if self.no_streak {
            config = config.with_track_streak(false);
        }
        if let Some(empty_answer) = self.empty_answer {
            config = config.with_empty_answer(empty_answer);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}
