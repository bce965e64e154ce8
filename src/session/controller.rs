//! Game controller: owns the session and drives it through the gateway

use super::{ClientError, GameSession, GuessOutcome};
use crate::api::GameApi;
use crate::core::GameId;
use crate::normalize::GamePayload;
use tracing::{debug, info, instrument, warn};

/// Single owner of the session state
///
/// All lifecycle transitions go through here. Each operation issues at most
/// one request at a time and leaves the session untouched when it fails.
#[derive(Debug)]
pub struct GameController<A> {
    api: A,
    player: String,
    session: GameSession,
}

impl<A: GameApi> GameController<A> {
    #[must_use]
    pub fn new(api: A, player: impl Into<String>) -> Self {
        Self {
            api,
            player: player.into(),
            session: GameSession::default(),
        }
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub const fn api(&self) -> &A {
        &self.api
    }

    #[must_use]
    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn set_player(&mut self, player: impl Into<String>) {
        self.player = player.into();
    }

    /// Start a new game for the current player
    ///
    /// # Errors
    /// Gateway failures, or [`ClientError::MissingGameId`] when the response
    /// names no game. The previous session is kept in both cases.
    #[instrument(skip(self), fields(player = %self.player))]
    pub fn start(&mut self) -> Result<&GameSession, ClientError> {
        let payload = self.api.start_game(&self.player).inspect_err(|err| {
            warn!(error = %err, "Start request failed");
        })?;

        let session = GameSession::from_start(&payload).ok_or_else(|| {
            warn!(payload = %payload, "Start response carried no game id");
            ClientError::MissingGameId
        })?;

        info!(
            game_id = ?session.id().map(GameId::as_str),
            word_length = session.word_length(),
            attempts_left = session.attempts_left(),
            "Game started"
        );
        self.session = session;
        Ok(&self.session)
    }

    /// Submit a guess for the active game
    ///
    /// Input that fails local validation never reaches the network.
    ///
    /// # Errors
    /// Local rejections ([`ClientError::NoActiveGame`], [`ClientError::GameOver`],
    /// [`ClientError::InvalidLength`]) or gateway failures.
    #[instrument(skip(self), fields(player = %self.player))]
    pub fn guess(&mut self, input: &str) -> Result<GuessOutcome, ClientError> {
        let (game_id, word) = self.session.validate_guess(input).inspect_err(|err| {
            debug!(error = %err, "Guess rejected locally");
        })?;

        let payload = self.api.submit_guess(&game_id, &word).inspect_err(|err| {
            warn!(error = %err, "Guess request failed");
        })?;

        let outcome = match self.session.apply_guess(&payload) {
            GuessOutcome::Lost { solution: None } => {
                let solution = self.recover_solution(&game_id);
                if let Some(solution) = &solution {
                    self.session.set_solution(solution.clone());
                }
                GuessOutcome::Lost { solution }
            }
            other => other,
        };

        info!(outcome = ?outcome, "Guess applied");
        Ok(outcome)
    }

    /// Drop the current game and start a new one
    ///
    /// # Errors
    /// Same as [`GameController::start`]; the session is left in `NoGame`.
    pub fn restart(&mut self) -> Result<&GameSession, ClientError> {
        info!("Restarting");
        self.session = GameSession::default();
        self.start()
    }

    /// Best-effort lookup of the solution after a loss
    fn recover_solution(&self, game_id: &GameId) -> Option<String> {
        match self.api.fetch_game_info(game_id) {
            Ok(payload) => GamePayload::new(&payload).solution(),
            Err(err) => {
                warn!(error = %err, "Could not fetch game info for solution");
                None
            }
        }
    }
}
