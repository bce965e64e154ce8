//! Blocking HTTP client for the game backend.

use super::{ApiError, GameApi, interpret_response};
use crate::core::GameId;
use reqwest::blocking::{Client, RequestBuilder};
use serde_json::{Value, json};
use tracing::{debug, info, instrument, warn};

/// HTTP game client.
#[derive(Debug, Clone)]
pub struct HttpGameClient {
    /// Base URL of the backend, without a trailing slash.
    base_url: String,
    /// HTTP client.
    client: Client,
}

impl HttpGameClient {
    /// Creates a client for the backend at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Client::new(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends a request and maps the outcome.
    ///
    /// A body that cannot be read is treated like an empty one.
    fn send(&self, request: RequestBuilder) -> Result<Value, ApiError> {
        let response = request.send().map_err(|err| {
            warn!(error = %err, "Request failed before a response arrived");
            ApiError::from(err)
        })?;

        let status = response.status();
        let body = response.text().unwrap_or_else(|err| {
            warn!(error = %err, "Could not read response body");
            String::new()
        });
        debug!(status = %status, body = %body, "Got response");

        interpret_response(status, &body)
    }
}

impl GameApi for HttpGameClient {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    fn start_game(&self, player: &str) -> Result<Value, ApiError> {
        info!("Starting game");
        let request = self
            .client
            .post(self.url("/api/games"))
            .json(&json!({ "player": player }));
        self.send(request)
    }

    #[instrument(skip(self), fields(base_url = %self.base_url, game_id = %game_id))]
    fn submit_guess(&self, game_id: &GameId, word: &str) -> Result<Value, ApiError> {
        info!("Submitting guess");
        let request = self
            .client
            .post(self.url(&format!("/api/games/{game_id}/guess")))
            .json(&json!({ "guess": word }));
        self.send(request)
    }

    #[instrument(skip(self), fields(base_url = %self.base_url, game_id = %game_id))]
    fn fetch_game_info(&self, game_id: &GameId) -> Result<Value, ApiError> {
        debug!("Fetching game info");
        let request = self.client.get(self.url(&format!("/api/games/{game_id}")));
        self.send(request)
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    fn leaderboard(&self) -> Result<Value, ApiError> {
        debug!("Fetching leaderboard");
        let request = self.client.get(self.url("/api/leaderboard"));
        self.send(request)
    }
}
