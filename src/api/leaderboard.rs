//! Leaderboard payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// One leaderboard row; every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardEntry {
    /// Player name.
    #[serde(alias = "name")]
    pub player: String,
    /// Games started.
    pub total_games: u64,
    /// Games won.
    pub wins: u64,
    /// Mean attempts over won games, absent when the player never won.
    #[serde(alias = "avg_attempts")]
    pub avg_attempts_for_wins: Option<f64>,
}

/// Extracts leaderboard rows from `{leaderboard: [...]}` or a bare array.
///
/// Rows that do not deserialize are skipped.
#[must_use]
pub fn parse_leaderboard(raw: &Value) -> Vec<LeaderboardEntry> {
    let rows = raw
        .get("leaderboard")
        .unwrap_or(raw)
        .as_array()
        .map(Vec::as_slice)
        .unwrap_or_default();

    rows.iter()
        .filter_map(|row| {
            serde_json::from_value(row.clone())
                .inspect_err(|err| warn!(error = %err, "Skipping leaderboard row"))
                .ok()
        })
        .collect()
}
