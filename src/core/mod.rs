//! Core domain types for the Wordle client
//!
//! Canonical letter feedback and guess records. Everything the backend sends
//! is reduced to these types before it reaches session state or rendering.

mod guess;
mod status;

pub use guess::{GameId, GuessRecord};
pub use status::LetterStatus;
