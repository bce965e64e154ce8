//! TUI application state and logic

use crate::api::GameApi;
use crate::config::normalize_player;
use crate::session::{GameController, GameSession, GuessOutcome};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info};

/// Longest player name accepted from the keyboard
const MAX_NAME_LEN: usize = 24;

/// Messages kept in the log panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<A> {
    pub controller: GameController<A>,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub pending: Option<PendingAction>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Editing the player name before the first game
    Name,
    Guess,
    GameOver,
}

/// Request queued by a key press, run after the next redraw
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    Start,
    Guess(String),
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Games finished in this run
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by guesses used; slot 0 stays empty
    pub guess_distribution: [usize; 7],
}

impl Statistics {
    /// `1:a 2:b ... 6:f` wins per guess count
    #[must_use]
    pub fn distribution_line(&self) -> String {
        self.guess_distribution
            .iter()
            .enumerate()
            .skip(1)
            .map(|(guesses, wins)| format!("{guesses}:{wins}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<A: GameApi> App<A> {
    #[must_use]
    pub fn new(controller: GameController<A>) -> Self {
        let input_buffer = controller.player().to_string();
        Self {
            controller,
            input_mode: InputMode::Name,
            input_buffer,
            messages: vec![Message {
                text: "Welcome! Enter your name and press Enter to start.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            pending: None,
            should_quit: false,
        }
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession {
        self.controller.session()
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Apply one key press; network work is only queued here
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press || self.is_pending() {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('r') if ctrl => {
                self.request_start();
                return;
            }
            _ => {}
        }

        match self.input_mode {
            InputMode::Name => match key.code {
                KeyCode::Char(c)
                    if !c.is_control() && self.input_buffer.chars().count() < MAX_NAME_LEN =>
                {
                    self.input_buffer.push(c);
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => {
                    let player = normalize_player(&self.input_buffer);
                    self.controller.set_player(player);
                    self.request_start();
                }
                _ => {}
            },
            InputMode::Guess => match key.code {
                KeyCode::Char(c)
                    if c.is_alphabetic()
                        && self.input_buffer.chars().count() < self.session().word_length() =>
                {
                    self.input_buffer.extend(c.to_uppercase());
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter if !self.input_buffer.is_empty() => {
                    self.pending = Some(PendingAction::Guess(self.input_buffer.clone()));
                }
                _ => {}
            },
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.request_start(),
                _ => {}
            },
        }
    }

    fn request_start(&mut self) {
        self.pending = Some(PendingAction::Start);
    }

    /// Perform the queued request, if any
    pub fn run_pending(&mut self) {
        match self.pending.take() {
            Some(PendingAction::Start) => self.start_game(),
            Some(PendingAction::Guess(word)) => self.submit_guess(&word),
            None => {}
        }
    }

    fn start_game(&mut self) {
        match self.controller.restart() {
            Ok(session) => {
                let (word_length, attempts) = (session.word_length(), session.attempts_left());
                let text = format!(
                    "New game for {}: {word_length} letters, {attempts} attempts",
                    self.controller.player()
                );
                info!(player = %self.controller.player(), "TUI game started");
                self.messages.clear();
                self.input_buffer.clear();
                self.input_mode = InputMode::Guess;
                self.add_message(&text, MessageStyle::Info);
            }
            Err(err) => {
                self.input_mode = InputMode::Name;
                self.input_buffer = self.controller.player().to_string();
                self.add_message(&err.start_message(), MessageStyle::Error);
                self.add_message("Press Enter to try again.", MessageStyle::Info);
            }
        }
    }

    fn submit_guess(&mut self, word: &str) {
        match self.controller.guess(word) {
            Ok(outcome) => {
                self.input_buffer.clear();
                self.record_outcome(outcome);
            }
            Err(err) => {
                debug!(error = %err, "Guess not accepted");
                self.add_message(&err.guess_message(), MessageStyle::Error);
            }
        }
    }

    fn record_outcome(&mut self, outcome: GuessOutcome) {
        match outcome {
            GuessOutcome::Continue { attempts_left } => {
                self.add_message(
                    &format!("{attempts_left} attempts left"),
                    MessageStyle::Info,
                );
            }
            GuessOutcome::Won { attempts } => {
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                if let Some(slot) = self.stats.guess_distribution.get_mut(attempts) {
                    *slot += 1;
                }
                self.input_mode = InputMode::GameOver;

                let celebration = match attempts {
                    1 => "🎯 HOLE IN ONE! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    6 => "😅 PHEW! Got it in six! 😅",
                    _ => "🎊 SOLVED! 🎊",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
            GuessOutcome::Lost { solution } => {
                self.stats.total_games += 1;
                self.input_mode = InputMode::GameOver;

                let text = solution.map_or_else(
                    || "Out of attempts!".to_string(),
                    |word| format!("Out of attempts! The word was {word}"),
                );
                self.add_message(&text, MessageStyle::Error);
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<A: GameApi>(app: App<A>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, A: GameApi>(
    terminal: &mut Terminal<B>,
    mut app: App<A>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // The pending state is on screen; now block on the request
        if app.is_pending() {
            app.run_pending();
            continue;
        }

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::api::fake::{FakeApi, start_payload};
    use crate::session::GamePhase;
    use serde_json::json;

    fn press(app: &mut App<FakeApi>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App<FakeApi>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn playing(api: FakeApi) -> App<FakeApi> {
        api.starts.borrow_mut().push_front(Ok(start_payload()));
        let mut app = App::new(GameController::new(api, "guest"));
        press(&mut app, KeyCode::Enter);
        app.run_pending();
        app
    }

    #[test]
    fn enter_on_name_queues_start() {
        let mut app = App::new(GameController::new(FakeApi::default(), "guest"));
        for _ in 0..5 {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "ada");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.pending, Some(PendingAction::Start));
        assert_eq!(app.controller.player(), "ada");
        assert_eq!(app.controller.api().start_calls.get(), 0);
    }

    #[test]
    fn name_limit_counts_characters() {
        let mut app = App::new(GameController::new(FakeApi::default(), ""));
        type_text(&mut app, &"é".repeat(MAX_NAME_LEN + 4));
        assert_eq!(app.input_buffer.chars().count(), MAX_NAME_LEN);
    }

    #[test]
    fn blank_name_falls_back_to_guest() {
        let mut app = App::new(GameController::new(FakeApi::default(), ""));
        type_text(&mut app, "   ");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller.player(), "guest");
    }

    #[test]
    fn successful_start_switches_to_guessing() {
        let app = playing(FakeApi::default());
        assert_eq!(app.input_mode, InputMode::Guess);
        assert!(app.input_buffer.is_empty());
        assert!(app.session().is_active());
    }

    #[test]
    fn failed_start_stays_on_name() {
        let api = FakeApi::default().with_start(Err(ApiError::transport("refused")));
        let mut app = App::new(GameController::new(api, "guest"));
        press(&mut app, KeyCode::Enter);
        app.run_pending();

        assert_eq!(app.input_mode, InputMode::Name);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "Network error starting game")
        );
    }

    #[test]
    fn guess_input_is_uppercased_and_capped() {
        let mut app = playing(FakeApi::default());
        type_text(&mut app, "cr4anesx");
        assert_eq!(app.input_buffer, "CRANE");
    }

    #[test]
    fn keys_are_ignored_while_pending() {
        let mut app = playing(FakeApi::default());
        type_text(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Backspace);

        assert_eq!(app.pending, Some(PendingAction::Guess("CRANE".to_string())));
        assert_eq!(app.input_buffer, "CRANE");
    }

    #[test]
    fn accepted_guess_clears_input() {
        let api = FakeApi::default().with_guess(Ok(json!({
            "game": {"attempts": 1, "max_attempts": 6},
            "guesses": [{"guess": "crane", "feedback": "BBYBG"}]
        })));
        let mut app = playing(api);
        type_text(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        app.run_pending();

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.session().guesses().len(), 1);
        assert_eq!(app.session().attempts_left(), 5);
    }

    #[test]
    fn rejected_guess_keeps_input() {
        let api = FakeApi::default().with_guess(Err(ApiError::Status {
            status: 400,
            message: "not in word list".to_string(),
        }));
        let mut app = playing(api);
        type_text(&mut app, "zzzzz");
        press(&mut app, KeyCode::Enter);
        app.run_pending();

        assert_eq!(app.input_buffer, "ZZZZZ");
        assert_eq!(app.messages.last().map(|m| m.text.as_str()), Some("not in word list"));
    }

    #[test]
    fn win_moves_to_game_over_and_counts() {
        let api = FakeApi::default()
            .with_guess(Ok(json!({"won": true, "guesses": [{"guess": "apple", "feedback": "GGGGG"}]})))
            .with_start(Ok(json!({"id": 6})));
        let mut app = playing(api);
        type_text(&mut app, "apple");
        press(&mut app, KeyCode::Enter);
        app.run_pending();

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
        assert_eq!(app.stats.distribution_line(), "1:1 2:0 3:0 4:0 5:0 6:0");

        press(&mut app, KeyCode::Char('n'));
        app.run_pending();
        assert_eq!(app.input_mode, InputMode::Guess);
        assert_eq!(app.session().phase(), GamePhase::Active);
    }

    #[test]
    fn ctrl_r_restarts_mid_game() {
        let mut app = playing(FakeApi::default());
        app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert_eq!(app.pending, Some(PendingAction::Start));
    }

    #[test]
    fn quit_keys() {
        let mut app = playing(FakeApi::default());
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit, "q is a letter while guessing");

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
