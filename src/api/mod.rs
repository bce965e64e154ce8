//! API gateway
//!
//! The [`GameApi`] trait is the seam between game logic and the network. The
//! real implementation is [`HttpGameClient`]; tests substitute scripted fakes.
//!
//! Every call returns the parsed JSON body on success. Empty or malformed
//! bodies come back as `{}` so callers only deal with one failure shape:
//! [`ApiError`].

mod client;
mod error;
#[cfg(test)]
pub(crate) mod fake;
mod leaderboard;
mod response;

pub use client::HttpGameClient;
pub use error::ApiError;
pub use leaderboard::{LeaderboardEntry, parse_leaderboard};
pub use response::{interpret_response, parse_body};

use crate::core::GameId;
use serde_json::Value;

/// Backend operations used by the client
pub trait GameApi {
    /// `POST /api/games` with `{player}`
    ///
    /// # Errors
    /// Transport failure or non-2xx status.
    fn start_game(&self, player: &str) -> Result<Value, ApiError>;

    /// `POST /api/games/{id}/guess` with `{guess}`
    ///
    /// # Errors
    /// Transport failure or non-2xx status.
    fn submit_guess(&self, game_id: &GameId, word: &str) -> Result<Value, ApiError>;

    /// `GET /api/games/{id}`, used to recover the solution after a loss
    ///
    /// # Errors
    /// Transport failure or non-2xx status.
    fn fetch_game_info(&self, game_id: &GameId) -> Result<Value, ApiError>;

    /// `GET /api/leaderboard`
    ///
    /// # Errors
    /// Transport failure or non-2xx status.
    fn leaderboard(&self) -> Result<Value, ApiError>;
}

impl<A: GameApi + ?Sized> GameApi for &A {
    fn start_game(&self, player: &str) -> Result<Value, ApiError> {
        (**self).start_game(player)
    }

    fn submit_guess(&self, game_id: &GameId, word: &str) -> Result<Value, ApiError> {
        (**self).submit_guess(game_id, word)
    }

    fn fetch_game_info(&self, game_id: &GameId) -> Result<Value, ApiError> {
        (**self).fetch_game_info(game_id)
    }

    fn leaderboard(&self) -> Result<Value, ApiError> {
        (**self).leaderboard()
    }
}
