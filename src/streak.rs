//! Consecutive-win counter.

use tracing::{debug, instrument};

/// Counts rounds won in a row.
///
/// A loss resets the current run; the best run is kept for the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Streak {
    current: u32,
    best: u32,
}

impl Streak {
    /// Creates a streak at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a win and returns the new streak.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn record_win(&mut self) -> u32 {
        self.current += 1;
        self.best = self.best.max(self.current);
        debug!(current = self.current, "Streak extended");
        self.current
    }

    /// Records a loss, resetting the streak to zero.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn record_loss(&mut self) {
        self.current = 0;
        debug!("Streak reset");
    }

    /// Returns the current run of wins.
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Returns the longest run seen.
    pub fn best(&self) -> u32 {
        self.best
    }
}
