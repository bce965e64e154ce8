//! Board view-model
//!
//! Rendering is a pure function from [`GameSession`] to a [`Board`] of tiles.
//! The terminal front ends only translate tiles into styled cells, so the
//! same session always draws the same grid.

use crate::core::LetterStatus;
use crate::session::GameSession;

/// Rows the board always shows, filled or not
pub const BOARD_ROWS: usize = 6;

/// Visual state of one tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileState {
    Correct,
    Present,
    Absent,
    /// Placeholder in a row that has not been guessed yet
    Empty,
}

impl From<LetterStatus> for TileState {
    fn from(status: LetterStatus) -> Self {
        match status {
            LetterStatus::Correct => Self::Correct,
            LetterStatus::Present => Self::Present,
            LetterStatus::Absent => Self::Absent,
        }
    }
}

impl TileState {
    /// Feedback behind the tile; `None` for placeholders
    #[must_use]
    pub const fn status(self) -> Option<LetterStatus> {
        match self {
            Self::Correct => Some(LetterStatus::Correct),
            Self::Present => Some(LetterStatus::Present),
            Self::Absent => Some(LetterStatus::Absent),
            Self::Empty => None,
        }
    }
}

/// One cell of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub letter: Option<char>,
    pub state: TileState,
}

impl Tile {
    pub const EMPTY: Self = Self {
        letter: None,
        state: TileState::Empty,
    };
}

/// One row of tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRow {
    pub tiles: Vec<Tile>,
    /// True for rows holding a submitted guess
    pub filled: bool,
}

/// The whole grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub rows: Vec<BoardRow>,
    pub word_length: usize,
}

impl Board {
    /// Rows holding submitted guesses
    pub fn filled_rows(&self) -> impl Iterator<Item = &BoardRow> {
        self.rows.iter().filter(|row| row.filled)
    }
}

/// Project a session onto the board
///
/// Produces `max(guesses, BOARD_ROWS)` rows of `word_length` tiles. Guess rows
/// show the letters and their feedback; the rest are empty placeholders.
///
/// # Examples
/// ```
/// use wordle_client::render::{BOARD_ROWS, TileState, render_board};
/// use wordle_client::session::GameSession;
///
/// let board = render_board(&GameSession::default());
/// assert_eq!(board.rows.len(), BOARD_ROWS);
/// assert!(board.rows.iter().all(|row| row.tiles.iter().all(|t| t.state == TileState::Empty)));
/// ```
#[must_use]
pub fn render_board(session: &GameSession) -> Board {
    let word_length = session.word_length();
    let guesses = session.guesses();
    let row_count = guesses.len().max(BOARD_ROWS);

    let rows = (0..row_count)
        .map(|r| match guesses.get(r) {
            Some(guess) => BoardRow {
                tiles: guess
                    .feedback()
                    .iter()
                    .enumerate()
                    .map(|(i, &status)| Tile {
                        letter: guess.letter_at(i),
                        state: status.into(),
                    })
                    .collect(),
                filled: true,
            },
            None => BoardRow {
                tiles: vec![Tile::EMPTY; word_length],
                filled: false,
            },
        })
        .collect();

    Board { rows, word_length }
}
