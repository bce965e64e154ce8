//! Scripted gateway for unit tests

use super::{ApiError, GameApi};
use crate::core::GameId;
use serde_json::{Value, json};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

type Script = RefCell<VecDeque<Result<Value, ApiError>>>;

/// Pops one canned response per call; an empty queue answers with a
/// transport error
#[derive(Debug, Default)]
pub struct FakeApi {
    pub starts: Script,
    pub guesses: Script,
    pub infos: Script,
    pub boards: Script,
    pub start_calls: Cell<usize>,
    pub guess_calls: Cell<usize>,
    pub info_calls: Cell<usize>,
    pub submitted: RefCell<Vec<(String, String)>>,
}

impl FakeApi {
    pub fn with_start(self, response: Result<Value, ApiError>) -> Self {
        self.starts.borrow_mut().push_back(response);
        self
    }

    pub fn with_guess(self, response: Result<Value, ApiError>) -> Self {
        self.guesses.borrow_mut().push_back(response);
        self
    }

    pub fn with_info(self, response: Result<Value, ApiError>) -> Self {
        self.infos.borrow_mut().push_back(response);
        self
    }

    pub fn with_leaderboard(self, response: Result<Value, ApiError>) -> Self {
        self.boards.borrow_mut().push_back(response);
        self
    }
}

/// Start payload for game 5 in the nested backend shape
pub fn start_payload() -> Value {
    json!({"game": {"id": 5, "attempts": 0, "max_attempts": 6, "finished": false, "won": false},
           "masked": "*****", "guesses": []})
}

fn next(queue: &Script) -> Result<Value, ApiError> {
    queue
        .borrow_mut()
        .pop_front()
        .unwrap_or_else(|| Err(ApiError::transport("no scripted response")))
}

impl GameApi for FakeApi {
    fn start_game(&self, _player: &str) -> Result<Value, ApiError> {
        self.start_calls.set(self.start_calls.get() + 1);
        next(&self.starts)
    }

    fn submit_guess(&self, game_id: &GameId, word: &str) -> Result<Value, ApiError> {
        self.guess_calls.set(self.guess_calls.get() + 1);
        self.submitted
            .borrow_mut()
            .push((game_id.to_string(), word.to_string()));
        next(&self.guesses)
    }

    fn fetch_game_info(&self, _game_id: &GameId) -> Result<Value, ApiError> {
        self.info_calls.set(self.info_calls.get() + 1);
        next(&self.infos)
    }

    fn leaderboard(&self) -> Result<Value, ApiError> {
        next(&self.boards)
    }
}
