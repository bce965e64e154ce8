//! Leaderboard lookup

use crate::api::{GameApi, LeaderboardEntry, parse_leaderboard};
use crate::session::ClientError;
use tracing::{info, instrument};

/// Fetch the leaderboard rows, best first as the server orders them
///
/// # Errors
///
/// Returns the gateway failure when the leaderboard cannot be fetched.
#[instrument(skip(api))]
pub fn fetch_leaderboard<A: GameApi>(api: &A) -> Result<Vec<LeaderboardEntry>, ClientError> {
    let payload = api.leaderboard()?;
    let entries = parse_leaderboard(&payload);
    info!(rows = entries.len(), "Fetched leaderboard");
    Ok(entries)
}
