//! Word pool loading and selection.

use derive_more::{Display, Error};
use rand::Rng;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Error raised while building a [`WordPool`].
#[derive(Debug, Display, Error)]
pub enum WordPoolError {
    /// The word list file could not be read.
    #[display("Failed to read word list {}: {}", path.display(), source)]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// No playable word was found.
    #[display("Word list {} has no playable words", origin)]
    Empty {
        /// Where the words came from.
        origin: String,
    },
}

/// Immutable, non-empty collection of candidate secrets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    /// Loads a comma-separated word list from disk.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WordPoolError> {
        let path = path.as_ref();
        debug!("Loading word list");
        let text = std::fs::read_to_string(path).map_err(|source| WordPoolError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let pool = Self::build(split_list(&text), path.display().to_string())?;
        info!(words = pool.len(), "Word list loaded");
        Ok(pool)
    }

    /// Parses comma-separated text.
    ///
    /// Entries are trimmed and blank entries dropped.
    #[instrument(skip(text))]
    pub fn parse(text: &str) -> Result<Self, WordPoolError> {
        Self::build(split_list(text), "<inline>".to_string())
    }

    /// Builds a pool from already separated words.
    pub fn from_words<I, S>(words: I) -> Result<Self, WordPoolError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words.into_iter().map(|w| w.as_ref().to_string()).collect();
        Self::build(words.iter().map(String::as_str), "<inline>".to_string())
    }

    fn build<'a>(entries: impl Iterator<Item = &'a str>, origin: String) -> Result<Self, WordPoolError> {
        let words: Vec<String> = entries
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .filter(|entry| {
                let playable = entry.chars().any(|c| c.is_ascii_alphabetic());
                if !playable {
                    warn!(entry, "Dropping word without letters");
                }
                playable
            })
            .map(str::to_string)
            .collect();

        if words.is_empty() {
            return Err(WordPoolError::Empty { origin });
        }
        Ok(Self { words })
    }

    /// Picks a word uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // Non-empty by construction.
        &self.words[rng.gen_range(0..self.words.len())]
    }

    /// Returns the words in file order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; an empty pool cannot be built.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn split_list(text: &str) -> impl Iterator<Item = &str> {
    text.split(',')
}
