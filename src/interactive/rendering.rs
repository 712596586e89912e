//! TUI rendering with ratatui
//!
//! Login form, letter grid, on-screen keyboard and the statistics panel.

use super::app::{App, LoginField, MessageStyle, Screen};
use crate::core::{LetterStatus, WORD_LENGTH};
use crate::game::{GameState, KeyboardStatus, MAX_ATTEMPTS, Outcome, Stats};
use crate::output::formatters::create_progress_bar;
use crate::wordlists::WordSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui<W: WordSource>(f: &mut Frame, app: &App<W>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(16),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    match app.screen {
        Screen::Login => render_login(f, app, chunks[1]),
        Screen::Playing => render_game(f, app, chunks[1]),
    }

    render_status(f, app, chunks[2]);
}

fn render_header<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let title = match app.session.user() {
        Some(user) => format!("🟩 WORDLE | Hi, {}", user.username),
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

fn render_login<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let field = |label: &str, value: String, focused: bool| {
        let style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let cursor = if focused { "▏" } else { "" };
        Line::from(vec![
            Span::raw(format!("{label:<10}")),
            Span::styled(format!("{value}{cursor}"), style),
        ])
    };

    let form = &app.login;
    let mut lines = vec![
        Line::from(""),
        field(
            "Username:",
            form.username.clone(),
            form.focus == LoginField::Username,
        ),
        field(
            "Password:",
            "*".repeat(form.password.chars().count()),
            form.focus == LoginField::Password,
        ),
        Line::from(""),
    ];
    if let Some(ref error) = form.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Login to Play ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(paragraph, centered(area, 50, 9));
}

fn render_game<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Stats and messages
        ])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(MAX_ATTEMPTS as u16 + 2), // Grid
            Constraint::Length(5),                       // Keyboard
            Constraint::Min(0),
        ])
        .split(chunks[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(12),   // Stats
            Constraint::Length(7), // Messages
        ])
        .split(chunks[1]);

    if let Some(game) = app.session.game() {
        render_grid(f, game, left[0]);
        render_keyboard(f, game.keyboard(), left[1]);
        render_stats(f, game, &app.session.stats(), right[0]);
    }
    render_messages(f, app, right[1]);
}

fn status_style(status: LetterStatus) -> Style {
    let bg = match status {
        LetterStatus::Correct => Color::Green,
        LetterStatus::Present => Color::Yellow,
        LetterStatus::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn render_grid(f: &mut Frame, game: &GameState, area: Rect) {
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS);

    for attempt in game.attempts() {
        let spans = attempt
            .word()
            .letters()
            .iter()
            .zip(attempt.feedback().statuses())
            .map(|(&letter, &status)| {
                Span::styled(format!(" {} ", char::from(letter)), status_style(status))
            })
            .collect::<Vec<_>>();
        lines.push(Line::from(spans));
    }

    if !game.is_finished() {
        let typed = game.current_input();
        let spans = (0..WORD_LENGTH)
            .map(|i| {
                typed.chars().nth(i).map_or_else(
                    || Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
                    |c| {
                        Span::styled(
                            format!(" {c} "),
                            Style::default()
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD),
                        )
                    },
                )
            })
            .collect::<Vec<_>>();
        lines.push(Line::from(spans));
    }

    while lines.len() < MAX_ATTEMPTS {
        lines.push(Line::from(Span::styled(
            " · ".repeat(WORD_LENGTH),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Guesses ({} left) ", game.attempts_remaining()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_keyboard(f: &mut Frame, keyboard: &KeyboardStatus, area: Rect) {
    let lines = KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(row, keys)| {
            let mut spans = Vec::new();
            if row == 2 {
                spans.push(Span::raw("ENTER "));
            }
            spans.extend(keys.chars().map(|key| {
                let style = keyboard
                    .status(key)
                    .map_or_else(|| Style::default().fg(Color::White), status_style);
                Span::styled(format!(" {key} "), style)
            }));
            if row == 2 {
                spans.push(Span::raw(" ⌫"));
            }
            Line::from(spans)
        })
        .collect::<Vec<_>>();

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_stats(f: &mut Frame, game: &GameState, stats: &Stats, area: Rect) {
    let mut lines = Vec::new();
    let mut current = None;

    match game.outcome() {
        Outcome::Won => {
            let tries = game.attempts().len();
            current = Some(tries);
            lines.push(Line::from(Span::styled(
                format!(
                    "Congratulations! You guessed the word in {tries} {}",
                    if tries == 1 { "try" } else { "tries" }
                ),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
        }
        Outcome::Lost => {
            lines.push(Line::from(vec![
                Span::styled("Game Over. The word was ", Style::default().fg(Color::Red)),
                Span::styled(
                    game.secret().to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(""));
        }
        Outcome::InProgress => {}
    }

    lines.push(Line::from(format!(
        "Played: {}   Win %: {}",
        stats.played(),
        stats.win_percentage()
    )));
    lines.push(Line::from(format!(
        "Current Streak: {}   Max Streak: {}",
        stats.current_streak(),
        stats.max_streak()
    )));
    lines.push(Line::from(""));
    lines.push(Line::from("Guess Distribution"));

    let max = stats.guess_distribution().iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution().iter().enumerate() {
        let attempt = i + 1;
        let style = if current == Some(attempt) {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{attempt}: ")),
            Span::styled(
                create_progress_bar(f64::from(count), f64::from(max), 16),
                style,
            ),
            Span::raw(format!(" {count}")),
        ]));
    }

    let title = if game.is_finished() {
        " Game Over | Enter: Play Again "
    } else {
        " Statistics "
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_messages<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
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

fn render_status<W: WordSource>(f: &mut Frame, app: &App<W>, area: Rect) {
    let help_text = match app.screen {
        Screen::Login => "Tab: Switch Field | Enter: Login | Esc: Quit",
        Screen::Playing if app.is_game_over() => {
            "Enter: Play Again | Ctrl-L: Logout | Esc: Quit"
        }
        Screen::Playing => "Enter: Submit | Ctrl-N: New Game | Ctrl-L: Logout | Esc: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, area);
}

/// A `width` x `height` rectangle centred in `area`, clipped to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
