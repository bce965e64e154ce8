//! Display functions for boards, game summaries, and the leaderboard

use super::formatters::{row_emoji, row_line, win_rate};
use crate::api::LeaderboardEntry;
use crate::core::GameId;
use crate::render::{Board, render_board};
use crate::session::{GamePhase, GameSession, Outcome};
use colored::Colorize;

/// Print every row of the board
pub fn print_board(board: &Board) {
    println!();
    for row in &board.rows {
        println!("  {}", row_line(row));
    }
    println!();
}

/// Print a session: board, attempts, and the solution once revealed
pub fn print_session(session: &GameSession) {
    let title = session
        .id()
        .map_or_else(|| "No game".to_string(), |id| format!("Game {id}"));
    println!("\n{}", "─".repeat(40).cyan());
    println!("{}", title.bright_yellow().bold());
    println!("{}", "─".repeat(40).cyan());

    print_board(&render_board(session));

    println!("{}", session.status_line());
    match session.phase() {
        GamePhase::Finished(Outcome::Won) => println!("{}", "✅ Solved".green().bold()),
        GamePhase::Finished(Outcome::Lost) => println!("{}", "❌ Out of attempts".red().bold()),
        GamePhase::Active | GamePhase::NoGame => {}
    }
    if let Some(solution) = session.solution() {
        println!("Word: {}", solution.bright_white().bold());
    }
}

/// Print the guesses of a finished game as share-style emoji rows
pub fn print_share(game_id: Option<&GameId>, board: &Board) {
    if let Some(id) = game_id {
        println!("{}", format!("Game {id}").bright_black());
    }
    for row in board.filled_rows() {
        println!("  {}", row_emoji(row));
    }
}

/// Print the leaderboard as a table
pub fn print_leaderboard(entries: &[LeaderboardEntry]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {}", "LEADERBOARD".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if entries.is_empty() {
        println!("\n  No games played yet.\n");
        return;
    }

    println!(
        "\n  {:<4} {:<20} {:>6} {:>6} {:>8} {:>10}",
        "#".bold(),
        "Player".bold(),
        "Games".bold(),
        "Wins".bold(),
        "Win %".bold(),
        "Avg tries".bold()
    );
    for (rank, entry) in entries.iter().enumerate() {
        let avg = entry
            .avg_attempts_for_wins
            .map_or_else(|| "-".to_string(), |avg| format!("{avg:.2}"));
        println!(
            "  {:<4} {:<20} {:>6} {:>6} {:>7.1}% {:>10}",
            rank + 1,
            entry.player.bright_white(),
            entry.total_games,
            entry.wins.to_string().green(),
            win_rate(entry.wins, entry.total_games),
            avg
        );
    }
    println!();
}
