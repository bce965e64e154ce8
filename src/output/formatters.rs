//! Formatting utilities for terminal output

use crate::render::{BoardRow, Tile, TileState};
use colored::{ColoredString, Colorize};

/// One tile as a three-character colored cell
#[must_use]
pub fn tile_cell(tile: Tile) -> ColoredString {
    let text = format!(" {} ", tile.letter.unwrap_or(' '));
    match tile.state {
        TileState::Correct => text.black().on_green().bold(),
        TileState::Present => text.black().on_yellow().bold(),
        TileState::Absent => text.white().on_bright_black().bold(),
        TileState::Empty => " · ".bright_black(),
    }
}

/// A row of colored cells separated by single spaces
#[must_use]
pub fn row_line(row: &BoardRow) -> String {
    row.tiles
        .iter()
        .map(|&tile| tile_cell(tile).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Square emoji for a tile; placeholders are white squares
#[must_use]
pub const fn tile_emoji(state: TileState) -> char {
    match state.status() {
        Some(status) => status.to_emoji(),
        None => '⬜',
    }
}

/// A row as an emoji string
#[must_use]
pub fn row_emoji(row: &BoardRow) -> String {
    row.tiles.iter().map(|tile| tile_emoji(tile.state)).collect()
}

/// Win percentage, 0 when no games were played
#[must_use]
pub fn win_rate(wins: u64, total_games: u64) -> f64 {
    if total_games == 0 {
        0.0
    } else {
        // Counts stay far below 2^52
        #[allow(clippy::cast_precision_loss)]
        let rate = wins as f64 / total_games as f64 * 100.0;
        rate
    }
}
