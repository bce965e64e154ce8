//! Feedback encoding detection and decoding

use super::fields::{STATUS_FIELDS, first_present};
use crate::core::LetterStatus;
use serde_json::Value;

/// Wire encodings seen for a guess's feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackEncoding {
    /// One character per letter, e.g. `"GYBGB"`
    TokenString,
    /// Array of numeric codes, e.g. `[2, 1, 0, 2, 0]`
    NumericCodes,
    /// Array of objects with a `status`/`state`/`flag` field
    ObjectArray,
    /// Array of word tokens, e.g. `["correct", "present", ...]`
    LooseTokens,
}

impl FeedbackEncoding {
    /// Detect the encoding of a feedback value
    ///
    /// Returns `None` for values that carry no feedback at all (numbers,
    /// booleans, bare objects, null).
    #[must_use]
    pub fn detect(value: &Value) -> Option<Self> {
        match value {
            Value::String(_) => Some(Self::TokenString),
            Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_number) => {
                Some(Self::NumericCodes)
            }
            Value::Array(items) if items.iter().any(Value::is_object) => Some(Self::ObjectArray),
            Value::Array(_) => Some(Self::LooseTokens),
            _ => None,
        }
    }

    /// Decode `value` under this encoding
    ///
    /// The result has whatever length the payload had; length fixing happens
    /// when the record is built.
    #[must_use]
    pub fn decode(self, value: &Value) -> Vec<LetterStatus> {
        match (self, value) {
            (Self::TokenString, Value::String(s)) => {
                s.trim().chars().map(LetterStatus::from_symbol).collect()
            }
            (Self::NumericCodes, Value::Array(items)) => items
                .iter()
                .map(decode_code)
                .collect(),
            (Self::ObjectArray, Value::Array(items)) => items.iter().map(decode_letter_object).collect(),
            (Self::LooseTokens, Value::Array(items)) => items.iter().map(decode_loose).collect(),
            _ => Vec::new(),
        }
    }
}

/// Detect and decode in one step
#[must_use]
pub fn decode_feedback(value: &Value) -> Vec<LetterStatus> {
    FeedbackEncoding::detect(value).map_or_else(Vec::new, |encoding| encoding.decode(value))
}

/// Status of one `{status|state|flag}` letter object; absent when missing
pub(super) fn decode_letter_object(item: &Value) -> LetterStatus {
    item.as_object()
        .and_then(|obj| first_present(obj, STATUS_FIELDS))
        .map_or(LetterStatus::Absent, decode_loose)
}

/// Numeric code; integral floats such as `2.0` count as their integer
fn decode_code(item: &Value) -> LetterStatus {
    item.as_i64()
        .or_else(|| {
            item.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() <= f64::from(u32::MAX))
                .map(|f| f as i64)
        })
        .map_or(LetterStatus::Absent, LetterStatus::from_code)
}

fn decode_loose(item: &Value) -> LetterStatus {
    match item {
        Value::String(token) => LetterStatus::from_token(token),
        Value::Number(_) => decode_code(item),
        _ => LetterStatus::Absent,
    }
}
