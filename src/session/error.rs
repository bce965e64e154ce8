//! Client-side error types.

use crate::api::ApiError;
use derive_more::{Display, Error, From};

/// Why a lifecycle operation did not go through.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum ClientError {
    /// A guess was attempted before any game was started.
    #[display("Start a game first")]
    NoActiveGame,
    /// A guess was attempted after the game ended.
    #[display("Game is over. Start a new game to play again")]
    GameOver,
    /// Guess length does not match the game's word length.
    #[display("Guess must be {expected} letters")]
    InvalidLength {
        /// Word length of the active game.
        expected: usize,
        /// Length of the rejected input.
        actual: usize,
    },
    /// The start response carried no game id.
    #[display("server returned no game id")]
    MissingGameId,
    /// The backend call failed.
    #[from]
    #[display("{_0}")]
    Api(ApiError),
}

impl ClientError {
    /// Message shown when starting a game fails.
    #[must_use]
    pub fn start_message(&self) -> String {
        match self {
            Self::Api(err) if err.is_transport() => "Network error starting game".to_string(),
            other => format!("Could not start game: {other}"),
        }
    }

    /// Message shown when submitting a guess fails.
    #[must_use]
    pub fn guess_message(&self) -> String {
        match self {
            Self::Api(err) if err.is_transport() => "Network error submitting guess".to_string(),
            other => other.to_string(),
        }
    }
}
