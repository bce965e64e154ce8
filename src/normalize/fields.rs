//! Field alias tables and lookup helpers
//!
//! Each table lists the names a backend has been seen to use for one concept,
//! in priority order. Lookups return the first usable match.

use crate::core::GameId;
use serde_json::{Map, Value};

/// Names carrying the guessed word
pub const WORD_FIELDS: &[&str] = &["word", "guess", "text", "answer", "value"];

/// Names carrying per-letter feedback
pub const FEEDBACK_FIELDS: &[&str] = &["feedback", "result", "statuses", "status", "states", "codes"];

/// Names carrying a single letter's status inside a letter object
pub const STATUS_FIELDS: &[&str] = &["status", "state", "flag"];

/// Names carrying the solution word
pub const SOLUTION_FIELDS: &[&str] = &["target_word", "target", "solution", "answer"];

/// Names carrying the game identifier
pub const ID_FIELDS: &[&str] = &["id", "game_id"];

/// Names carrying the won flag
pub const WON_FIELDS: &[&str] = &["won", "is_won"];

/// First field holding a non-empty (after trimming) string
#[must_use]
pub fn first_string<'a>(object: &'a Map<String, Value>, fields: &[&str]) -> Option<&'a str> {
    fields
        .iter()
        .filter_map(|field| object.get(*field)?.as_str())
        .map(str::trim)
        .find(|s| !s.is_empty())
}

/// First field present with a non-null value
#[must_use]
pub fn first_present<'a>(object: &'a Map<String, Value>, fields: &[&str]) -> Option<&'a Value> {
    fields
        .iter()
        .filter_map(|field| object.get(*field))
        .find(|value| !value.is_null())
}

/// First field holding a non-negative integer
///
/// Integral floats (`6.0`) and numeric strings (`"6"`) are accepted too.
#[must_use]
pub fn first_count(object: &Map<String, Value>, fields: &[&str]) -> Option<u64> {
    fields
        .iter()
        .filter_map(|field| object.get(*field))
        .find_map(as_count)
}

/// First field holding a boolean
#[must_use]
pub fn first_bool(object: &Map<String, Value>, fields: &[&str]) -> Option<bool> {
    fields
        .iter()
        .find_map(|field| object.get(*field)?.as_bool())
}

/// Game id from the id aliases; numbers and non-empty strings both qualify
#[must_use]
pub fn game_id(object: &Map<String, Value>) -> Option<GameId> {
    ID_FIELDS
        .iter()
        .filter_map(|field| object.get(*field))
        .find_map(|value| match value {
            Value::Number(n) => Some(GameId::new(n.to_string())),
            Value::String(s) if !s.trim().is_empty() => Some(GameId::new(s.trim())),
            _ => None,
        })
}

#[allow(clippy::cast_sign_loss)] // Guarded by the range check
fn as_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= f64::from(u32::MAX))
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test fixture must be an object"),
        }
    }

    #[test]
    fn first_string_respects_priority() {
        let obj = object(json!({"value": "LAST", "guess": "SECOND", "word": "FIRST"}));
        assert_eq!(first_string(&obj, WORD_FIELDS), Some("FIRST"));
    }

    #[test]
    fn first_string_skips_empty_and_non_strings() {
        let obj = object(json!({"word": "  ", "guess": 42, "text": "crane"}));
        assert_eq!(first_string(&obj, WORD_FIELDS), Some("crane"));
    }

    #[test]
    fn first_present_skips_null() {
        let obj = object(json!({"feedback": null, "result": [2, 1]}));
        assert_eq!(first_present(&obj, FEEDBACK_FIELDS), Some(&json!([2, 1])));
    }

    #[test]
    fn first_count_accepts_loose_numbers() {
        let obj = object(json!({"a": -1, "b": 6.0, "c": "7"}));
        assert_eq!(first_count(&obj, &["a", "b"]), Some(6));
        assert_eq!(first_count(&obj, &["c"]), Some(7));
        assert_eq!(first_count(&obj, &["a"]), None);
        assert_eq!(first_count(&obj, &["missing"]), None);
    }

    #[test]
    fn game_id_from_number_or_string() {
        assert_eq!(
            game_id(&object(json!({"id": 12}))),
            Some(GameId::new("12"))
        );
        assert_eq!(
            game_id(&object(json!({"game_id": "abc"}))),
            Some(GameId::new("abc"))
        );
        assert_eq!(
            game_id(&object(json!({"id": null, "game_id": 3}))),
            Some(GameId::new("3"))
        );
        assert_eq!(game_id(&object(json!({"id": ""}))), None);
    }
}
