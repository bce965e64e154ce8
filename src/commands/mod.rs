//! Command implementations

pub mod leaderboard;
pub mod show;
pub mod simple;

pub use leaderboard::fetch_leaderboard;
pub use show::show_game;
pub use simple::run_simple;
