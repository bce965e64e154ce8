//! Per-letter feedback status
//!
//! The backend reports feedback in several encodings:
//! - single-letter codes (`G` green, `Y` yellow, anything else gray)
//! - numeric codes (`2` correct, `1` present, anything else absent)
//! - word tokens (`correct`, `present`, `absent` and color synonyms)
//!
//! All of them collapse into [`LetterStatus`].

use std::fmt;

/// Canonical feedback for one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterStatus {
    /// Letter is in the word at this position
    Correct,
    /// Letter is in the word at another position
    Present,
    /// Letter is not in the word (also the fallback for anything unrecognized)
    #[default]
    Absent,
}

impl LetterStatus {
    /// Decode one character of a token string like `"GYBGB"` or `"🟩🟨⬜🟩⬜"`
    ///
    /// # Examples
    /// ```
    /// use wordle_client::core::LetterStatus;
    ///
    /// assert_eq!(LetterStatus::from_symbol('g'), LetterStatus::Correct);
    /// assert_eq!(LetterStatus::from_symbol('Y'), LetterStatus::Present);
    /// assert_eq!(LetterStatus::from_symbol('B'), LetterStatus::Absent);
    /// ```
    #[must_use]
    pub const fn from_symbol(ch: char) -> Self {
        match ch {
            'G' | 'g' | '🟩' => Self::Correct,
            'Y' | 'y' | '🟨' => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Decode a numeric code (`2` correct, `1` present)
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Decode a loose word token
    ///
    /// Exact matches are tried first, then substring matches on `correct`,
    /// `present` and `yellow`. Anything else is absent.
    ///
    /// # Examples
    /// ```
    /// use wordle_client::core::LetterStatus;
    ///
    /// assert_eq!(LetterStatus::from_token("Green"), LetterStatus::Correct);
    /// assert_eq!(LetterStatus::from_token("present"), LetterStatus::Present);
    /// assert_eq!(LetterStatus::from_token("letter-is-yellow"), LetterStatus::Present);
    /// assert_eq!(LetterStatus::from_token("gray"), LetterStatus::Absent);
    /// ```
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        let token = token.trim().to_ascii_lowercase();

        match token.as_str() {
            "g" | "green" | "correct" => return Self::Correct,
            "y" | "yellow" | "present" => return Self::Present,
            "a" | "absent" | "grey" | "gray" => return Self::Absent,
            _ => {}
        }

        if token.contains("correct") {
            Self::Correct
        } else if token.contains("present") || token.contains("yellow") {
            Self::Present
        } else {
            Self::Absent
        }
    }

    /// Wire name of the status
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }

    /// Square emoji for share-style output
    #[inline]
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
