//! Client configuration
//!
//! Resolved from command-line flags, which fall back to `WORDLE_*` environment
//! variables (optionally loaded from `.env`).

use derive_more::{Display, Error};
use reqwest::Url;

/// Server used when neither `--server` nor `WORDLE_SERVER` is set
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";

/// Player name used when none is given
pub const DEFAULT_PLAYER: &str = "guest";

/// Log file for the full-screen mode
pub const DEFAULT_LOG_FILE: &str = "wordle_client.log";

/// Rejected configuration
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    #[display("invalid server URL '{url}': {reason}")]
    InvalidServer { url: String, reason: String },
}

/// Validated settings for one client run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    server: String,
    player: String,
}

impl ClientConfig {
    /// Validate the server URL and normalize the player name
    ///
    /// # Errors
    /// [`ConfigError::InvalidServer`] when the URL does not parse or is not
    /// `http`/`https`.
    pub fn new(server: &str, player: &str) -> Result<Self, ConfigError> {
        let trimmed = server.trim().trim_end_matches('/');
        let url = Url::parse(trimmed).map_err(|err| ConfigError::InvalidServer {
            url: server.to_string(),
            reason: err.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidServer {
                url: server.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        Ok(Self {
            server: trimmed.to_string(),
            player: normalize_player(player),
        })
    }

    #[must_use]
    pub fn server(&self) -> &str {
        &self.server
    }

    #[must_use]
    pub fn player(&self) -> &str {
        &self.player
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            player: DEFAULT_PLAYER.to_string(),
        }
    }
}

/// Trimmed player name, `guest` when blank
#[must_use]
pub fn normalize_player(player: &str) -> String {
    let trimmed = player.trim();
    if trimmed.is_empty() {
        DEFAULT_PLAYER.to_string()
    } else {
        trimmed.to_string()
    }
}
