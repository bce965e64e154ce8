//! Session state and game lifecycle
//!
//! `NoGame → Active → Finished(won | lost) → NoGame` (on restart).
//!
//! [`GameSession`] holds the state of the one game the client plays at a time.
//! It only changes through [`GameController`], which owns it together with the
//! API gateway. The client never computes feedback: every guess reconciles the
//! session with the authoritative state the backend returns.

mod controller;
mod error;

pub use controller::GameController;
pub use error::ClientError;

use crate::core::{GameId, GuessRecord};
use crate::normalize::GamePayload;
use serde_json::Value;

/// Word length assumed when the backend does not report one
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Attempt budget assumed when the backend does not report one
pub const DEFAULT_MAX_ATTEMPTS: u64 = 6;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Lifecycle phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    NoGame,
    Active,
    Finished(Outcome),
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Game goes on
    Continue { attempts_left: u64 },
    /// Solved; `attempts` counts the guesses on the board
    Won { attempts: usize },
    /// Out of attempts; the solution when the backend revealed it
    Lost { solution: Option<String> },
}

/// State of the current game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    id: Option<GameId>,
    word_length: usize,
    max_attempts: u64,
    attempts_left: u64,
    guesses: Vec<GuessRecord>,
    phase: GamePhase,
    solution: Option<String>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self {
            id: None,
            word_length: DEFAULT_WORD_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            attempts_left: DEFAULT_MAX_ATTEMPTS,
            guesses: Vec::new(),
            phase: GamePhase::NoGame,
            solution: None,
        }
    }
}

impl GameSession {
    /// Session for a freshly started game
    ///
    /// Returns `None` when the payload carries no game id.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use wordle_client::session::{GamePhase, GameSession};
    ///
    /// let payload = json!({"game": {"id": 7, "attempts": 0, "max_attempts": 6}, "guesses": []});
    /// let session = GameSession::from_start(&payload).unwrap();
    /// assert_eq!(session.phase(), GamePhase::Active);
    /// assert_eq!(session.attempts_left(), 6);
    /// assert_eq!(session.word_length(), 5);
    /// ```
    #[must_use]
    pub fn from_start(payload: &Value) -> Option<Self> {
        let session = Self::from_payload(payload);
        session.id.is_some().then_some(session)
    }

    /// Snapshot of any game payload (start response or game info)
    ///
    /// The phase is `Finished` when the payload reports the game as finished
    /// or won, `Active` when it carries an id, and `NoGame` otherwise.
    #[must_use]
    pub fn from_payload(payload: &Value) -> Self {
        let view = GamePayload::new(payload);
        let word_length = view.word_length().unwrap_or(DEFAULT_WORD_LENGTH);
        let max_attempts = view.max_attempts().unwrap_or(DEFAULT_MAX_ATTEMPTS);
        let attempts_left = view.attempts_left(max_attempts).unwrap_or(max_attempts);
        let guesses = view.guesses(word_length).unwrap_or_default();
        let id = view.game_id();

        let won = view.won().unwrap_or(false);
        let phase = if won {
            GamePhase::Finished(Outcome::Won)
        } else if view.finished() == Some(true) {
            GamePhase::Finished(Outcome::Lost)
        } else if id.is_some() {
            GamePhase::Active
        } else {
            GamePhase::NoGame
        };

        Self {
            id,
            word_length,
            max_attempts,
            attempts_left,
            guesses,
            phase,
            solution: view.solution(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> Option<&GameId> {
        self.id.as_ref()
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub const fn max_attempts(&self) -> u64 {
        self.max_attempts
    }

    #[must_use]
    pub const fn attempts_left(&self) -> u64 {
        self.attempts_left
    }

    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn solution(&self) -> Option<&str> {
        self.solution.as_deref()
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.phase, GamePhase::Active)
    }

    pub(crate) fn set_solution(&mut self, solution: String) {
        self.solution = Some(solution);
    }

    /// Use `id` when the payload named no game
    #[must_use]
    pub(crate) fn with_fallback_id(mut self, id: GameId) -> Self {
        if self.id.is_none() {
            self.id = Some(id);
            if self.phase == GamePhase::NoGame {
                self.phase = GamePhase::Active;
            }
        }
        self
    }

    /// Check a raw guess before any network call
    ///
    /// Returns the game id and the trimmed, uppercased word.
    ///
    /// # Errors
    /// - [`ClientError::NoActiveGame`] without a game id
    /// - [`ClientError::GameOver`] once the game is finished
    /// - [`ClientError::InvalidLength`] when the letter count differs from the
    ///   word length
    pub fn validate_guess(&self, input: &str) -> Result<(GameId, String), ClientError> {
        let id = self.id.clone().ok_or(ClientError::NoActiveGame)?;

        if matches!(self.phase, GamePhase::Finished(_)) {
            return Err(ClientError::GameOver);
        }

        let word = input.trim().to_uppercase();
        let actual = word.chars().count();
        if actual != self.word_length {
            return Err(ClientError::InvalidLength {
                expected: self.word_length,
                actual,
            });
        }

        Ok((id, word))
    }

    /// Reconcile the session with a successful guess response
    pub fn apply_guess(&mut self, payload: &Value) -> GuessOutcome {
        let view = GamePayload::new(payload);

        if let Some(guesses) = view.guesses(self.word_length) {
            self.guesses = guesses;
        } else if let Some(guess) = view.single_guess(self.word_length) {
            self.guesses.push(guess);
        }

        if let Some(max_attempts) = view.max_attempts() {
            self.max_attempts = max_attempts;
        }
        self.attempts_left = view
            .attempts_left(self.max_attempts)
            .unwrap_or_else(|| self.attempts_left.saturating_sub(1));

        if let Some(solution) = view.solution() {
            self.solution = Some(solution);
        }

        let won = view
            .won()
            .unwrap_or_else(|| self.guesses.last().is_some_and(GuessRecord::is_solved));

        if won {
            self.phase = GamePhase::Finished(Outcome::Won);
            GuessOutcome::Won {
                attempts: self.guesses.len(),
            }
        } else if self.attempts_left == 0 || view.finished() == Some(true) {
            self.phase = GamePhase::Finished(Outcome::Lost);
            GuessOutcome::Lost {
                solution: self.solution.clone(),
            }
        } else {
            GuessOutcome::Continue {
                attempts_left: self.attempts_left,
            }
        }
    }

    /// `Attempts left: N`
    #[must_use]
    pub fn status_line(&self) -> String {
        format!("Attempts left: {}", self.attempts_left)
    }
}
