//! TUI rendering with ratatui
//!
//! Draws the board view-model as colored tiles plus the input and log panels.

use super::app::{App, InputMode, MessageStyle};
use crate::api::GameApi;
use crate::render::{Board, TileState, render_board};
use crate::session::{GamePhase, Outcome};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<A: GameApi>(f: &mut Frame, app: &App<A>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and side panel
            Constraint::Length(3), // Input
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board_panel(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header<A: GameApi>(f: &mut Frame, app: &App<A>, area: Rect) {
    let title = match app.session().id() {
        Some(id) => format!("🟩 WORDLE - game {id} - {}", app.controller.player()),
        None => "🟩 WORDLE".to_string(),
    };
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Background/foreground colors for a tile
#[must_use]
pub fn tile_style(state: TileState) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match state {
        TileState::Correct => base.fg(Color::Black).bg(Color::Green),
        TileState::Present => base.fg(Color::Black).bg(Color::Yellow),
        TileState::Absent => base.fg(Color::White).bg(Color::DarkGray),
        TileState::Empty => Style::default().fg(Color::DarkGray),
    }
}

/// One line per board row with a blank line between rows
#[must_use]
pub fn board_lines(board: &Board) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(board.rows.len() * 2);
    for (i, row) in board.rows.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        let mut spans = Vec::with_capacity(row.tiles.len() * 2);
        for (j, tile) in row.tiles.iter().enumerate() {
            if j > 0 {
                spans.push(Span::raw(" "));
            }
            let text = match (tile.state, tile.letter) {
                (TileState::Empty, _) => "[ ]".to_string(),
                (_, Some(letter)) => format!(" {letter} "),
                (_, None) => "   ".to_string(),
            };
            spans.push(Span::styled(text, tile_style(tile.state)));
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn render_board_panel<A: GameApi>(f: &mut Frame, app: &App<A>, area: Rect) {
    let board = render_board(app.session());
    let mut lines = vec![Line::default()];
    lines.extend(board_lines(&board));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board_widget, area);
}

fn render_side_panel<A: GameApi>(f: &mut Frame, app: &App<A>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(4)])
        .split(area);

    render_game_info(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_game_info<A: GameApi>(f: &mut Frame, app: &App<A>, area: Rect) {
    let session = app.session();
    let (phase_text, phase_color) = match session.phase() {
        GamePhase::NoGame => ("No game", Color::DarkGray),
        GamePhase::Active => ("Playing", Color::Cyan),
        GamePhase::Finished(Outcome::Won) => ("Won", Color::Green),
        GamePhase::Finished(Outcome::Lost) => ("Lost", Color::Red),
    };

    let mut content = vec![
        Line::from(session.status_line()),
        Line::from(vec![
            Span::raw("State: "),
            Span::styled(phase_text, Style::default().fg(phase_color)),
        ]),
        Line::from(vec![
            Span::raw("Wins:  "),
            Span::styled(
                app.stats.distribution_line(),
                Style::default().fg(Color::Green),
            ),
        ]),
    ];
    if let Some(solution) = session.solution() {
        content.push(Line::from(vec![
            Span::raw("Word:  "),
            Span::styled(
                solution.to_string(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let info = Paragraph::new(content).block(
        Block::default()
            .title(" Game ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(info, area);
}

fn render_messages<A: GameApi>(f: &mut Frame, app: &App<A>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_input<A: GameApi>(f: &mut Frame, app: &App<A>, area: Rect) {
    let (title, content, color) = if app.is_pending() {
        (" Waiting for server... ", "", Color::DarkGray)
    } else {
        match app.input_mode {
            InputMode::Name => (
                " Player name | Enter to start ",
                app.input_buffer.as_str(),
                Color::Cyan,
            ),
            InputMode::Guess => (
                " Your guess | Enter to submit ",
                app.input_buffer.as_str(),
                Color::Yellow,
            ),
            InputMode::GameOver => (" Game over | 'n' new game, 'q' quit ", "", Color::Green),
        }
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status<A: GameApi>(f: &mut Frame, app: &App<A>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats = &app.stats;
    let win_rate = crate::output::formatters::win_rate(
        stats.games_won as u64,
        stats.total_games as u64,
    );
    let stats_text = format!(
        "Games: {} | Won: {} | Win Rate: {win_rate:.0}%",
        stats.total_games, stats.games_won
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let help = Paragraph::new("Esc: Quit | Ctrl-R: New Game | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
