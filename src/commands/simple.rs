//! Simple interactive CLI mode
//!
//! Line-oriented play without the full-screen interface

use crate::api::GameApi;
use crate::output::{print_session, print_share};
use crate::render::render_board;
use crate::session::{GameController, GuessOutcome};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// What the player typed at the guess prompt
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Quit,
    NewGame,
    Guess(String),
}

impl Command {
    fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "quit" | "q" | "exit" => Self::Quit,
            "new" | "n" => Self::NewGame,
            _ => Self::Guess(line.trim().to_string()),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// Reads commands and guesses from `input` until the player quits or the
/// input ends. Failed requests are reported and play continues.
///
/// # Errors
///
/// Returns an error only if reading input or flushing stdout fails.
pub fn run_simple<A: GameApi, R: BufRead>(
    controller: &mut GameController<A>,
    input: &mut R,
) -> Result<()> {
    print_banner(controller.player());

    let mut needs_start = true;
    loop {
        if needs_start {
            match controller.restart() {
                Ok(session) => {
                    needs_start = false;
                    println!(
                        "{}",
                        format!("🔄 New game started ({} letters)", session.word_length()).green()
                    );
                }
                Err(err) => {
                    println!("{}", err.start_message().red());
                    match prompt(input, "Press Enter to retry, or type 'quit'")? {
                        Some(line) if Command::parse(&line) != Command::Quit => continue,
                        _ => return farewell(),
                    }
                }
            }
        }

        print_session(controller.session());

        let Some(line) = prompt(input, "Guess ('new', 'quit')")? else {
            return farewell();
        };

        let word = match Command::parse(&line) {
            Command::Quit => return farewell(),
            Command::NewGame => {
                needs_start = true;
                continue;
            }
            Command::Guess(word) => word,
        };

        match controller.guess(&word) {
            Ok(GuessOutcome::Continue { attempts_left }) => {
                debug!(attempts_left, "Guess accepted");
            }
            Ok(GuessOutcome::Won { attempts }) => {
                print_session(controller.session());
                celebrate(attempts);
                print_share(
                    controller.session().id(),
                    &render_board(controller.session()),
                );
                if !play_again(input)? {
                    return farewell();
                }
                needs_start = true;
            }
            Ok(GuessOutcome::Lost { solution }) => {
                print_session(controller.session());
                let reveal = solution.map_or_else(
                    || "Out of attempts!".to_string(),
                    |word| format!("Out of attempts! The word was {word}"),
                );
                println!("\n{}", reveal.red().bold());
                if !play_again(input)? {
                    return farewell();
                }
                needs_start = true;
            }
            Err(err) => println!("{}", format!("❌ {}", err.guess_message()).red()),
        }
    }
}

fn print_banner(player: &str) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Simple Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Playing as {}", player.bright_cyan().bold());
    println!("Type a word and press Enter to guess.");
    println!("Commands: 'new' for a new game, 'quit' to exit\n");
}

fn celebrate(attempts: usize) {
    let verdict = match attempts {
        1 => "🏆 Hole in one!",
        2 => "⭐ Magnificent!",
        3 => "💫 Splendid!",
        4 => "✨ Great!",
        5 => "👍 Nice!",
        _ => "😅 Phew!",
    };
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("  {}", verdict.bright_yellow().bold());
    println!(
        "  Solved in {} {}",
        attempts.to_string().bright_cyan().bold(),
        if attempts == 1 { "guess" } else { "guesses" }
    );
    println!("{}", "═".repeat(60).bright_cyan());
}

fn play_again<R: BufRead>(input: &mut R) -> Result<bool> {
    Ok(prompt(input, "Play again? (yes/no)")?
        .is_some_and(|answer| matches!(answer.to_lowercase().as_str(), "yes" | "y")))
}

fn farewell() -> Result<()> {
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead>(input: &mut R, label: &str) -> io::Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
