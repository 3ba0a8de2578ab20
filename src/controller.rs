//! Game controller — the state machine driving rounds.

use anyhow::{Context, Result};
use derive_getters::Getters;
use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_hangman::{Letter, Outcome, Round};
use tracing::{debug, info, instrument};

use crate::frontend::{BoardView, Frontend, Keystroke, Prompt, View};
use crate::{EmptyAnswer, GameConfig, Streak, WordPool};

/// Top-level game state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GameState {
    /// About to pick a word.
    #[default]
    Start,
    /// Round in progress.
    Play(Round),
    /// Round won; waiting for the play-again answer.
    Win(Round),
    /// Round lost; waiting for the play-again answer.
    Loss(Round),
}

/// Why the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player declined another round.
    Declined,
    /// The player pressed Ctrl+C.
    Interrupted,
}

/// Result of one controller step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep stepping.
    Continue,
    /// Stop; the session is over.
    End(SessionEnd),
}

/// Answer to "play again?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartAnswer {
    /// Start another round.
    PlayAgain,
    /// End the session.
    Quit,
}

/// Parses a play-again key.
///
/// `y` plays again and `n` quits, in either case. Enter quits under
/// [`EmptyAnswer::Quit`]. Anything else returns `None` and the question is
/// asked again.
#[instrument]
pub fn parse_restart(key: Keystroke, empty_answer: EmptyAnswer) -> Option<RestartAnswer> {
    match key {
        Keystroke::Char('y' | 'Y') => Some(RestartAnswer::PlayAgain),
        Keystroke::Char('n' | 'N') => Some(RestartAnswer::Quit),
        Keystroke::Char(c) if c.is_whitespace() => empty_answer_choice(empty_answer),
        Keystroke::Enter => empty_answer_choice(empty_answer),
        _ => None,
    }
}

fn empty_answer_choice(empty_answer: EmptyAnswer) -> Option<RestartAnswer> {
    match empty_answer {
        EmptyAnswer::Quit => Some(RestartAnswer::Quit),
        EmptyAnswer::Reprompt => None,
    }
}

/// Totals for a session, logged when it ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct SessionSummary {
    /// Rounds finished.
    rounds: u32,
    /// Rounds won.
    wins: u32,
    /// Rounds lost.
    losses: u32,
    /// Longest win streak.
    best_streak: u32,
}

/// Controller that drives the game state machine.
///
/// Call [`GameController::run`] to play until the player quits, or
/// [`GameController::step`] to advance one state at a time.
#[derive(Debug)]
pub struct GameController<R = StdRng> {
    pool: WordPool,
    track_streak: bool,
    empty_answer: EmptyAnswer,
    rng: R,
    streak: Streak,
    summary: SessionSummary,
    state: GameState,
}

impl GameController<StdRng> {
    /// Creates a controller, seeding word selection from the config or entropy.
    #[instrument(skip(pool, config), fields(words = pool.len(), seed = ?config.seed()))]
    pub fn new(pool: WordPool, config: &GameConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(pool, config, rng)
    }
}

impl<R: rand::Rng> GameController<R> {
    /// Creates a controller with a caller-provided RNG.
    pub fn with_rng(pool: WordPool, config: &GameConfig, rng: R) -> Self {
        info!(
            track_streak = config.track_streak(),
            empty_answer = ?config.empty_answer(),
            "Creating GameController"
        );
        Self {
            pool,
            track_streak: *config.track_streak(),
            empty_answer: *config.empty_answer(),
            rng,
            streak: Streak::new(),
            summary: SessionSummary::default(),
            state: GameState::Start,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the current streak, or `None` when streaks are not tracked.
    pub fn streak(&self) -> Option<u32> {
        self.track_streak.then(|| self.streak.current())
    }

    /// Returns the session totals so far.
    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    /// Runs until the player declines another round or interrupts.
    #[instrument(skip_all)]
    pub fn run<F: Frontend>(&mut self, frontend: &mut F) -> Result<SessionEnd> {
        info!("Starting game loop");

        loop {
            if let Flow::End(end) = self.step(frontend)? {
                let summary = self.summary;
                info!(
                    ?end,
                    rounds = summary.rounds,
                    wins = summary.wins,
                    losses = summary.losses,
                    best_streak = summary.best_streak,
                    "Session ended"
                );
                return Ok(end);
            }
        }
    }

    /// Advances the state machine by one state handler.
    ///
    /// In `Play` this consumes exactly one accepted guess; rejected keys are
    /// answered with a new prompt inside the same step.
    pub fn step<F: Frontend>(&mut self, frontend: &mut F) -> Result<Flow> {
        let (next, flow) = match std::mem::take(&mut self.state) {
            GameState::Start => (GameState::Play(self.handle_start()?), Flow::Continue),
            GameState::Play(round) => self.handle_play(round, frontend)?,
            GameState::Win(round) => self.handle_finished(round, Outcome::Won, frontend)?,
            GameState::Loss(round) => self.handle_finished(round, Outcome::Lost, frontend)?,
        };
        self.state = next;
        Ok(flow)
    }

    #[instrument(skip(self))]
    fn handle_start(&mut self) -> Result<Round> {
        let word = self.pool.choose(&mut self.rng);
        let round = Round::start(word).with_context(|| format!("Word pool entry {:?} is not playable", word))?;
        info!(letters = round.secret().len(), "New round");
        Ok(round)
    }

    #[instrument(skip_all, fields(chances = round.chances_remaining()))]
    fn handle_play<F: Frontend>(&mut self, mut round: Round, frontend: &mut F) -> Result<(GameState, Flow)> {
        let Some(letter) = self.read_letter(&round, frontend)? else {
            return Ok((GameState::Play(round), Flow::End(SessionEnd::Interrupted)));
        };

        let outcome = round.apply_guess(letter)?;
        debug!(%letter, ?outcome, chances = round.chances_remaining(), "Guess resolved");

        let next = if round.is_lost() {
            self.streak.record_loss();
            self.record_round(Outcome::Lost);
            GameState::Loss(round)
        } else if round.is_won() {
            self.streak.record_win();
            self.record_round(Outcome::Won);
            GameState::Win(round)
        } else {
            GameState::Play(round)
        };
        Ok((next, Flow::Continue))
    }

    /// Prompts until a new letter arrives. `None` means the player interrupted.
    fn read_letter<F: Frontend>(&self, round: &Round, frontend: &mut F) -> Result<Option<Letter>> {
        let board = BoardView::new(round, self.streak());
        let mut prompt = Prompt::GuessLetter;

        loop {
            frontend.render(&View::new(board.clone(), prompt))?;

            prompt = match frontend.read_key()? {
                Keystroke::Interrupt => return Ok(None),
                Keystroke::Char(c) => match Letter::try_from(c) {
                    Ok(letter) if round.has_guessed(letter) => {
                        debug!(%letter, "Letter already guessed");
                        Prompt::AlreadyGuessed(letter)
                    }
                    Ok(letter) => return Ok(Some(letter)),
                    Err(e) => {
                        debug!(error = %e, "Rejected guess");
                        Prompt::InvalidLetter
                    }
                },
                Keystroke::Enter | Keystroke::Other => Prompt::InvalidLetter,
            };
        }
    }

    #[instrument(skip(self, round, frontend))]
    fn handle_finished<F: Frontend>(
        &mut self,
        round: Round,
        outcome: Outcome,
        frontend: &mut F,
    ) -> Result<(GameState, Flow)> {
        let board = BoardView::new(&round, self.streak());
        let mut prompt = match outcome {
            Outcome::Won => Prompt::Won(self.empty_answer),
            Outcome::Lost => Prompt::Lost {
                word: round.secret().to_string(),
                empty_answer: self.empty_answer,
            },
        };

        loop {
            frontend.render(&View::new(board.clone(), prompt))?;

            let key = frontend.read_key()?;
            if key == Keystroke::Interrupt {
                return Ok((finished_state(round, outcome), Flow::End(SessionEnd::Interrupted)));
            }

            match parse_restart(key, self.empty_answer) {
                Some(RestartAnswer::PlayAgain) => {
                    info!("Restarting game");
                    return Ok((GameState::Start, Flow::Continue));
                }
                Some(RestartAnswer::Quit) => {
                    return Ok((finished_state(round, outcome), Flow::End(SessionEnd::Declined)));
                }
                None => prompt = Prompt::InvalidAnswer(self.empty_answer),
            }
        }
    }

    fn record_round(&mut self, outcome: Outcome) {
        self.summary.rounds += 1;
        match outcome {
            Outcome::Won => self.summary.wins += 1,
            Outcome::Lost => self.summary.losses += 1,
        }
        self.summary.best_streak = self.streak.best();
        info!(%outcome, streak = self.streak.current(), "Round finished");
    }
}

fn finished_state(round: Round, outcome: Outcome) -> GameState {
    match outcome {
        Outcome::Won => GameState::Win(round),
        Outcome::Lost => GameState::Loss(round),
    }
}
