//! Game-level payload view
//!
//! Start, guess and info responses carry the game either flat at the top level
//! or nested under a `game` object. [`GamePayload`] looks in both places so the
//! session never has to care which shape arrived.

use super::fields::{
    SOLUTION_FIELDS, WON_FIELDS, first_bool, first_count, first_string, game_id,
};
use super::{normalize_guess, normalize_guesses};
use crate::core::{GameId, GuessRecord};
use serde_json::{Map, Value};

/// Remaining attempts given the reported maximum and the attempts used
///
/// # Examples
/// ```
/// use wordle_client::normalize::remaining_attempts;
///
/// assert_eq!(remaining_attempts(6, 2), 4);
/// assert_eq!(remaining_attempts(6, 9), 0);
/// ```
#[must_use]
pub const fn remaining_attempts(max_attempts: u64, attempts_used: u64) -> u64 {
    max_attempts.saturating_sub(attempts_used)
}

/// Longest word length accepted from the backend
pub const MAX_WORD_LENGTH: usize = 32;

/// Read-only view over a game response in either flat or nested shape
#[derive(Debug, Clone, Copy)]
pub struct GamePayload<'a> {
    root: Option<&'a Map<String, Value>>,
    game: Option<&'a Map<String, Value>>,
    raw: &'a Value,
}

impl<'a> GamePayload<'a> {
    #[must_use]
    pub fn new(raw: &'a Value) -> Self {
        let root = raw.as_object();
        let game = root.and_then(|obj| obj.get("game")).and_then(Value::as_object);
        Self { root, game, raw }
    }

    /// Nested game first, then the top level
    fn game_first(&self) -> impl Iterator<Item = &'a Map<String, Value>> {
        self.game.into_iter().chain(self.root)
    }

    /// Top level first, then the nested game
    fn root_first(&self) -> impl Iterator<Item = &'a Map<String, Value>> {
        self.root.into_iter().chain(self.game)
    }

    #[must_use]
    pub fn game_id(&self) -> Option<GameId> {
        self.game_first().find_map(game_id)
    }

    /// Reported word length; zero or anything above [`MAX_WORD_LENGTH`] is
    /// treated as unreported
    #[must_use]
    pub fn word_length(&self) -> Option<usize> {
        self.game_first()
            .find_map(|obj| first_count(obj, &["word_length", "length"]))
            .and_then(|len| usize::try_from(len).ok())
            .filter(|len| (1..=MAX_WORD_LENGTH).contains(len))
    }

    #[must_use]
    pub fn max_attempts(&self) -> Option<u64> {
        self.game_first()
            .find_map(|obj| first_count(obj, &["max_attempts"]))
    }

    #[must_use]
    pub fn attempts_used(&self) -> Option<u64> {
        self.game_first()
            .find_map(|obj| first_count(obj, &["attempts", "attempts_used"]))
    }

    /// Remaining attempts as the backend reports them
    ///
    /// Derived as `max(0, max_attempts - attempts)` when either quantity is
    /// present, with `default_max` and zero standing in for the missing one.
    /// Falls back to an explicit `attempts_left` field otherwise.
    #[must_use]
    pub fn attempts_left(&self, default_max: u64) -> Option<u64> {
        match (self.max_attempts(), self.attempts_used()) {
            (None, None) => self
                .game_first()
                .find_map(|obj| first_count(obj, &["attempts_left", "remaining_attempts"])),
            (max, used) => Some(remaining_attempts(
                max.unwrap_or(default_max),
                used.unwrap_or(0),
            )),
        }
    }

    #[must_use]
    pub fn won(&self) -> Option<bool> {
        self.root_first().find_map(|obj| first_bool(obj, WON_FIELDS))
    }

    #[must_use]
    pub fn finished(&self) -> Option<bool> {
        self.root_first()
            .find_map(|obj| first_bool(obj, &["finished", "game_over"]))
    }

    /// Solution word, uppercased, when the backend reveals it
    #[must_use]
    pub fn solution(&self) -> Option<String> {
        self.root_first()
            .find_map(|obj| first_string(obj, SOLUTION_FIELDS))
            .map(str::to_uppercase)
    }

    /// The authoritative guess list, if the payload carries one
    ///
    /// Looks at `guesses` (top level, then nested), then a `words` array, then
    /// the payload itself when it is a bare array.
    #[must_use]
    pub fn guesses(&self, word_length: usize) -> Option<Vec<GuessRecord>> {
        if self.raw.is_array() {
            return Some(normalize_guesses(self.raw, word_length));
        }

        self.root_first()
            .find_map(|obj| obj.get("guesses").filter(|v| v.is_array()))
            .or_else(|| self.root.and_then(|obj| obj.get("words")).filter(|v| v.is_array()))
            .map(|list| normalize_guesses(list, word_length))
    }

    /// A lone guess entry at the top level (`guess` object or string)
    #[must_use]
    pub fn single_guess(&self, word_length: usize) -> Option<GuessRecord> {
        self.root
            .and_then(|obj| obj.get("guess"))
            .filter(|v| v.is_object() || v.is_string())
            .map(|v| normalize_guess(v, word_length))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn remaining_attempts_never_negative() {
        for max in 0..10 {
            for used in 0..12 {
                let left = remaining_attempts(max, used);
                assert_eq!(left, max.saturating_sub(used));
                assert!(left <= max);
            }
        }
    }

    #[test]
    fn nested_start_payload() {
        // Backend response to POST /api/games
        let raw = json!({
            "game": {"id": 3, "player_id": 1, "attempts": 0, "max_attempts": 6,
                     "finished": false, "won": false},
            "masked": "*****",
            "guesses": []
        });
        let payload = GamePayload::new(&raw);

        assert_eq!(payload.game_id(), Some(GameId::new("3")));
        assert_eq!(payload.word_length(), None);
        assert_eq!(payload.attempts_left(6), Some(6));
        assert_eq!(payload.guesses(5), Some(Vec::new()));
        assert_eq!(payload.won(), Some(false));
    }

    #[test]
    fn flat_start_payload() {
        let raw = json!({"game_id": "abc", "word_length": 6, "max_attempts": 8, "attempts": 3});
        let payload = GamePayload::new(&raw);

        assert_eq!(payload.game_id(), Some(GameId::new("abc")));
        assert_eq!(payload.word_length(), Some(6));
        assert_eq!(payload.attempts_left(6), Some(5));
        assert_eq!(payload.guesses(6), None);
    }

    #[test]
    fn zero_word_length_is_ignored() {
        let raw = json!({"id": 1, "word_length": 0});
        assert_eq!(GamePayload::new(&raw).word_length(), None);
    }

    #[test]
    fn oversized_word_length_is_ignored() {
        for len in [json!(33), json!(1e9), json!(u64::MAX), json!("18446744073709551615")] {
            let raw = json!({"id": 1, "word_length": len});
            assert_eq!(GamePayload::new(&raw).word_length(), None);
        }

        let raw = json!({"id": 1, "word_length": MAX_WORD_LENGTH});
        assert_eq!(GamePayload::new(&raw).word_length(), Some(MAX_WORD_LENGTH));
    }

    #[test]
    fn attempts_left_defaults() {
        let raw = json!({"attempts": 2});
        assert_eq!(GamePayload::new(&raw).attempts_left(6), Some(4));

        let raw = json!({"max_attempts": 4});
        assert_eq!(GamePayload::new(&raw).attempts_left(6), Some(4));

        let raw = json!({"attempts_left": 3});
        assert_eq!(GamePayload::new(&raw).attempts_left(6), Some(3));

        let raw = json!({});
        assert_eq!(GamePayload::new(&raw).attempts_left(6), None);
    }

    #[test]
    fn solution_aliases_top_level_first() {
        let raw = json!({"target": "apple", "game": {"target_word": "other"}});
        assert_eq!(GamePayload::new(&raw).solution(), Some("APPLE".to_string()));

        let raw = json!({"game": {"solution": "crane"}});
        assert_eq!(GamePayload::new(&raw).solution(), Some("CRANE".to_string()));

        let raw = json!({"target_word": null});
        assert_eq!(GamePayload::new(&raw).solution(), None);
    }

    #[test]
    fn won_and_finished_flags() {
        let raw = json!({"game": {"finished": true, "won": true}});
        let payload = GamePayload::new(&raw);
        assert_eq!(payload.won(), Some(true));
        assert_eq!(payload.finished(), Some(true));

        let raw = json!({"is_won": true});
        assert_eq!(GamePayload::new(&raw).won(), Some(true));
    }

    #[test]
    fn guesses_lookup_order() {
        let raw = json!({"game": {"guesses": ["SLATE"]}, "guesses": ["CRANE"]});
        let guesses = GamePayload::new(&raw).guesses(5).unwrap();
        assert_eq!(guesses[0].word(), "CRANE");

        let raw = json!({"game": {"guesses": ["SLATE"]}});
        let guesses = GamePayload::new(&raw).guesses(5).unwrap();
        assert_eq!(guesses[0].word(), "SLATE");

        let raw = json!({"words": ["TRACE", "CRATE"]});
        let guesses = GamePayload::new(&raw).guesses(5).unwrap();
        assert_eq!(guesses.len(), 2);

        let raw = json!(["CRANE"]);
        let guesses = GamePayload::new(&raw).guesses(5).unwrap();
        assert_eq!(guesses[0].word(), "CRANE");
    }

    #[test]
    fn single_guess_entry() {
        let raw = json!({"guess": {"guess": "crane", "feedback": "GGGGG"}});
        let record = GamePayload::new(&raw).single_guess(5).unwrap();
        assert!(record.is_solved());

        let raw = json!({"guess": 5});
        assert!(GamePayload::new(&raw).single_guess(5).is_none());
    }

    #[test]
    fn non_object_payload_is_empty() {
        let raw = Value::Null;
        let payload = GamePayload::new(&raw);
        assert_eq!(payload.game_id(), None);
        assert_eq!(payload.solution(), None);
        assert_eq!(payload.guesses(5), None);
    }
}
