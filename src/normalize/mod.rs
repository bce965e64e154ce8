//! Response normalization
//!
//! Turns whatever the backend sends for a guess into a [`GuessRecord`]. The
//! backend contract is not trusted to be stable, so normalization is total:
//! it never fails and never panics, it only falls back to absent feedback.
//!
//! Word and feedback are each extracted by an ordered list of strategies; the
//! first strategy producing a value wins.

pub mod feedback;
pub mod fields;
mod game;

pub use feedback::{FeedbackEncoding, decode_feedback};
pub use game::{GamePayload, MAX_WORD_LENGTH, remaining_attempts};

use crate::core::{GuessRecord, LetterStatus};
use fields::{FEEDBACK_FIELDS, WORD_FIELDS, first_present, first_string};
use serde_json::{Map, Value};

type WordStrategy = fn(&Map<String, Value>) -> Option<String>;
type FeedbackStrategy = fn(&Map<String, Value>) -> Option<Vec<LetterStatus>>;

const WORD_STRATEGIES: &[WordStrategy] = &[word_from_aliases];

const FEEDBACK_STRATEGIES: &[FeedbackStrategy] = &[feedback_from_aliases, feedback_from_letters];

/// Normalize a single raw guess
///
/// # Examples
/// ```
/// use serde_json::json;
/// use wordle_client::core::LetterStatus::{Absent, Correct, Present};
/// use wordle_client::normalize::normalize_guess;
///
/// let record = normalize_guess(&json!({"word": "CRANE", "feedback": "GYBGB"}), 5);
/// assert_eq!(record.word(), "CRANE");
/// assert_eq!(record.feedback(), &[Correct, Present, Absent, Correct, Absent]);
/// ```
#[must_use]
pub fn normalize_guess(raw: &Value, word_length: usize) -> GuessRecord {
    match raw {
        Value::String(word) => GuessRecord::new(word.trim(), Vec::new(), word_length),
        Value::Object(object) => {
            let word = WORD_STRATEGIES
                .iter()
                .find_map(|strategy| strategy(object))
                .unwrap_or_default();
            let feedback = FEEDBACK_STRATEGIES
                .iter()
                .find_map(|strategy| strategy(object))
                .unwrap_or_default();
            GuessRecord::new(&word, feedback, word_length)
        }
        _ => GuessRecord::blank(word_length),
    }
}

/// Normalize an array of raw guesses; anything else yields no guesses
#[must_use]
pub fn normalize_guesses(raw: &Value, word_length: usize) -> Vec<GuessRecord> {
    raw.as_array()
        .map(|items| {
            items
                .iter()
                .map(|item| normalize_guess(item, word_length))
                .collect()
        })
        .unwrap_or_default()
}

fn word_from_aliases(object: &Map<String, Value>) -> Option<String> {
    first_string(object, WORD_FIELDS).map(str::to_uppercase)
}

fn feedback_from_aliases(object: &Map<String, Value>) -> Option<Vec<LetterStatus>> {
    first_present(object, FEEDBACK_FIELDS).map(decode_feedback)
}

fn feedback_from_letters(object: &Map<String, Value>) -> Option<Vec<LetterStatus>> {
    let letters = object.get("letters")?.as_array()?;
    Some(letters.iter().map(feedback::decode_letter_object).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Absent, Correct, Present};
    use serde_json::json;

    const EXPECTED: [LetterStatus; 5] = [Correct, Present, Absent, Correct, Absent];

    #[test]
    fn null_yields_blank_record() {
        let record = normalize_guess(&Value::Null, 5);
        assert_eq!(record.word(), "");
        assert_eq!(record.feedback(), &[Absent; 5]);
    }

    #[test]
    fn plain_string_is_the_word() {
        let record = normalize_guess(&json!("CRANE"), 5);
        assert_eq!(record.word(), "CRANE");
        assert_eq!(record.feedback(), &[Absent; 5]);
    }

    #[test]
    fn plain_string_is_uppercased() {
        let record = normalize_guess(&json!("crane"), 5);
        assert_eq!(record.word(), "CRANE");
    }

    #[test]
    fn word_with_token_feedback() {
        let record = normalize_guess(&json!({"word": "CRANE", "feedback": "GYBGB"}), 5);
        assert_eq!(record.word(), "CRANE");
        assert_eq!(record.feedback(), EXPECTED);
    }

    #[test]
    fn guess_with_numeric_result() {
        let record = normalize_guess(&json!({"guess": "CRANE", "result": [2, 1, 0, 2, 0]}), 5);
        assert_eq!(record.word(), "CRANE");
        assert_eq!(record.feedback(), EXPECTED);
    }

    #[test]
    fn word_with_float_result() {
        let record = normalize_guess(&json!({"word": "CRANE", "result": [2.0, 1.0, 0.0, 2.0, 0.0]}), 5);
        assert_eq!(record.feedback(), EXPECTED);
    }

    #[test]
    fn backend_guess_dict() {
        // Guess row as the backend serializes it
        let raw = json!({
            "id": 1,
            "game_id": 7,
            "guess": "crane",
            "feedback": ["correct", "present", "absent", "correct", "absent"],
            "created_at": "2024-01-01T00:00:00"
        });
        let record = normalize_guess(&raw, 5);
        assert_eq!(record.word(), "CRANE");
        assert_eq!(record.feedback(), EXPECTED);
    }

    #[test]
    fn word_alias_priority() {
        let raw = json!({"value": "zzzzz", "text": "yyyyy", "guess": "crane"});
        assert_eq!(normalize_guess(&raw, 5).word(), "CRANE");

        let raw = json!({"word": "", "answer": "slate"});
        assert_eq!(normalize_guess(&raw, 5).word(), "SLATE");
    }

    #[test]
    fn feedback_alias_priority() {
        let raw = json!({"word": "CRANE", "codes": [0, 0, 0, 0, 0], "statuses": "GYBGB"});
        assert_eq!(normalize_guess(&raw, 5).feedback(), EXPECTED);

        let raw = json!({"word": "CRANE", "feedback": null, "states": [2, 1, 0, 2, 0]});
        assert_eq!(normalize_guess(&raw, 5).feedback(), EXPECTED);
    }

    #[test]
    fn letters_fallback() {
        let raw = json!({
            "word": "CRANE",
            "letters": [
                {"letter": "C", "status": "correct"},
                {"letter": "R", "state": "present"},
                {"letter": "A", "flag": "absent"},
                {"letter": "N", "status": "green"},
                {"letter": "E"}
            ]
        });
        assert_eq!(normalize_guess(&raw, 5).feedback(), EXPECTED);
    }

    #[test]
    fn aliases_win_over_letters() {
        let raw = json!({
            "word": "CRANE",
            "status": "GYBGB",
            "letters": [{"status": "present"}]
        });
        assert_eq!(normalize_guess(&raw, 5).feedback(), EXPECTED);
    }

    #[test]
    fn object_without_feedback_is_all_absent() {
        let record = normalize_guess(&json!({"word": "CRANE"}), 5);
        assert_eq!(record.feedback(), &[Absent; 5]);
    }

    #[test]
    fn object_without_word_has_empty_word() {
        let record = normalize_guess(&json!({"feedback": "GGGGG"}), 5);
        assert_eq!(record.word(), "");
        assert!(record.is_solved());
    }

    #[test]
    fn every_encoding_yields_word_length_tokens() {
        let payloads = [
            json!({"word": "CRANE", "feedback": "GY"}),
            json!({"word": "CRANE", "feedback": "GYBGBGYY"}),
            json!({"word": "CRANE", "result": [2]}),
            json!({"word": "CRANE", "result": [2, 1, 0, 2, 0, 1, 1]}),
            json!({"word": "CRANE", "statuses": [{"status": "correct"}]}),
            json!({"word": "CRANE", "states": ["correct", "present", "absent"]}),
            json!({"word": "CRANE", "letters": []}),
            json!({"word": "CRANE", "feedback": 12}),
            json!("CRANE"),
            json!(["not", "a", "guess"]),
            json!(3.5),
            Value::Null,
        ];

        for word_length in [4, 5, 6] {
            for payload in &payloads {
                let record = normalize_guess(payload, word_length);
                assert_eq!(
                    record.feedback().len(),
                    word_length,
                    "payload {payload} at length {word_length}"
                );
            }
        }
    }

    #[test]
    fn short_feedback_is_padded() {
        let record = normalize_guess(&json!({"word": "CRANE", "feedback": [2, 2]}), 5);
        assert_eq!(record.feedback(), &[Correct, Correct, Absent, Absent, Absent]);
    }

    #[test]
    fn long_feedback_is_truncated() {
        let record = normalize_guess(&json!({"word": "CRANE", "feedback": "GGGGGYY"}), 5);
        assert_eq!(record.feedback(), &[Correct; 5]);
    }

    #[test]
    fn normalize_guesses_array() {
        let raw = json!(["CRANE", {"word": "SLATE", "feedback": "GGGGG"}, null]);
        let records = normalize_guesses(&raw, 5);

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].word(), "CRANE");
        assert!(records[1].is_solved());
        assert_eq!(records[2].word(), "");
    }

    #[test]
    fn normalize_guesses_non_array() {
        assert!(normalize_guesses(&json!({"guesses": []}), 5).is_empty());
        assert!(normalize_guesses(&Value::Null, 5).is_empty());
    }
}
