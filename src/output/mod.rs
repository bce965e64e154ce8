//! Terminal output formatting
//!
//! Colored printing of boards and the leaderboard for the line-oriented
//! commands.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_leaderboard, print_session, print_share};
