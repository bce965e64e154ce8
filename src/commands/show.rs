//! Game inspection

use crate::api::GameApi;
use crate::core::GameId;
use crate::session::{ClientError, GameSession};
use tracing::{info, instrument};

/// Fetch a game and build a read-only snapshot of it
///
/// # Errors
///
/// Returns the gateway failure when the game cannot be fetched.
#[instrument(skip(api), fields(game_id = %game_id))]
pub fn show_game<A: GameApi>(api: &A, game_id: &GameId) -> Result<GameSession, ClientError> {
    let payload = api.fetch_game_info(game_id)?;
    let session = GameSession::from_payload(&payload).with_fallback_id(game_id.clone());
    info!(
        guesses = session.guesses().len(),
        phase = ?session.phase(),
        "Fetched game"
    );
    Ok(session)
}
