//! Canonical guess record and game identifier

use super::LetterStatus;
use std::fmt;

/// Opaque game identifier as handed out by the backend
///
/// The backend may send a number or a string; both are kept in textual form
/// since the client only ever echoes the id back in URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameId(String);

impl GameId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single guess with per-letter feedback
///
/// Invariant: `feedback.len()` equals the word length the record was built
/// for. The word itself is uppercase and never longer than that length, but
/// may be shorter when the backend sent a truncated or empty word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    word: String,
    feedback: Vec<LetterStatus>,
}

impl GuessRecord {
    /// Build a record, fixing the feedback to exactly `word_length` entries
    ///
    /// Missing feedback is padded with [`LetterStatus::Absent`]; excess entries
    /// are dropped. The word is uppercased and cut to `word_length` characters.
    ///
    /// # Examples
    /// ```
    /// use wordle_client::core::{GuessRecord, LetterStatus};
    ///
    /// let record = GuessRecord::new("crane", vec![LetterStatus::Correct], 5);
    /// assert_eq!(record.word(), "CRANE");
    /// assert_eq!(record.feedback().len(), 5);
    /// assert_eq!(record.feedback()[4], LetterStatus::Absent);
    /// ```
    #[must_use]
    pub fn new(word: &str, mut feedback: Vec<LetterStatus>, word_length: usize) -> Self {
        let word: String = word.to_uppercase().chars().take(word_length).collect();
        feedback.resize(word_length, LetterStatus::Absent);

        Self { word, feedback }
    }

    /// Record with an empty word and all-absent feedback
    #[must_use]
    pub fn blank(word_length: usize) -> Self {
        Self::new("", Vec::new(), word_length)
    }

    /// The guessed word (uppercase)
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn feedback(&self) -> &[LetterStatus] {
        &self.feedback
    }

    /// Letter at a tile position, if the word is long enough
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<char> {
        self.word.chars().nth(position)
    }

    /// True when every tile is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.feedback.is_empty() && self.feedback.iter().all(|s| s.is_correct())
    }
}
