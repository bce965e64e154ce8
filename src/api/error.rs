//! Gateway error types.

use derive_more::{Display, Error};

/// Failure of a single backend call.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[display("network error: {message}")]
    Transport {
        /// Underlying transport error text.
        message: String,
    },
    /// The backend answered with a non-2xx status.
    #[display("{message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// `error` field from the body, or the status reason phrase.
        message: String,
    },
}

impl ApiError {
    /// Creates a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// True for failures where no response arrived.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::transport(err.to_string())
    }
}
