//! TUI application state and logic

use crate::game::{Outcome, Submission};
use crate::session::Session;
use crate::wordlists::WordSource;
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

/// Application state
pub struct App<W: WordSource> {
    pub session: Session<W>,
    pub screen: Screen,
    pub login: LoginForm,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Playing,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
    pub error: Option<String>,
}

impl LoginForm {
    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }
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

impl<W: WordSource> App<W> {
    /// Wrap a session; a restored user goes straight to the board
    ///
    /// # Errors
    ///
    /// Returns an error if a game is needed and no secret can be drawn.
    pub fn new(session: Session<W>) -> Result<Self> {
        let mut app = Self {
            session,
            screen: Screen::Login,
            login: LoginForm::default(),
            messages: Vec::new(),
            should_quit: false,
        };

        if let Some(user) = app.session.user() {
            let greeting = format!("Welcome back, {}!", user.username);
            app.screen = Screen::Playing;
            app.add_message(&greeting, MessageStyle::Info);
            app.new_game()?;
        }

        Ok(app)
    }

    /// Dispatch one key press
    ///
    /// # Errors
    ///
    /// Returns an error only if a new game cannot be started.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return Ok(());
        }

        match self.screen {
            Screen::Login => self.handle_login_key(key),
            Screen::Playing => self.handle_game_key(key),
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.login.toggle_focus();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.login.focused_mut().push(c);
            }
            KeyCode::Backspace => {
                self.login.focused_mut().pop();
            }
            KeyCode::Enter => self.submit_login()?,
            _ => {}
        }
        Ok(())
    }

    fn handle_game_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('n') if ctrl => self.new_game()?,
            KeyCode::Char('l') if ctrl => self.logout(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                // Full input and non-letters are silently ignored, like a real keyboard
                let _ = self.session.append_letter(c);
            }
            KeyCode::Backspace => {
                let _ = self.session.delete_letter();
            }
            KeyCode::Enter => {
                if self.is_game_over() {
                    self.new_game()?;
                } else {
                    self.submit_guess();
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Try the typed credentials
    ///
    /// # Errors
    ///
    /// Returns an error if login succeeds but no game can be started.
    pub fn submit_login(&mut self) -> Result<()> {
        match self.session.login(&self.login.username, &self.login.password) {
            Ok(user) => {
                self.login = LoginForm::default();
                self.screen = Screen::Playing;
                self.messages.clear();
                self.add_message(&format!("Hi, {}!", user.username), MessageStyle::Info);
                self.new_game()?;
            }
            Err(e) => self.login.error = Some(e.to_string()),
        }
        Ok(())
    }

    pub fn submit_guess(&mut self) {
        match self.session.submit_guess() {
            Ok(Submission {
                completion: Some(completion),
                ..
            }) => {
                if completion.won {
                    let tries = if completion.attempts == 1 { "try" } else { "tries" };
                    self.add_message(
                        &format!(
                            "Congratulations! You guessed the word in {} {tries}!",
                            completion.attempts
                        ),
                        MessageStyle::Success,
                    );
                } else {
                    let secret = self
                        .session
                        .game()
                        .map(|g| g.secret().to_string())
                        .unwrap_or_default();
                    self.add_message(
                        &format!("Game Over. The word was {secret}."),
                        MessageStyle::Error,
                    );
                }
                self.add_message("Press Enter to play again.", MessageStyle::Info);
            }
            Ok(_) => {}
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// # Errors
    ///
    /// Returns an error if no secret can be drawn.
    pub fn new_game(&mut self) -> Result<()> {
        self.session.new_game()?;
        self.add_message("New game started!", MessageStyle::Info);
        Ok(())
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.screen = Screen::Login;
        self.login = LoginForm::default();
        self.messages.clear();
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.session.game().is_some_and(|g| g.outcome() != Outcome::InProgress)
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
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
pub fn run_tui<W: WordSource>(app: App<W>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, W: WordSource>(
    terminal: &mut Terminal<B>,
    mut app: App<W>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key)?;
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
    use crate::core::Word;
    use crate::wordlists::{FixedSource, WordList};

    fn app(secrets: &[&str]) -> App<FixedSource> {
        let session = Session::new(
            WordList::embedded(),
            FixedSource::new(secrets.iter().map(|s| Word::new(s).unwrap())),
        );
        App::new(session).unwrap()
    }

    fn press(app: &mut App<FixedSource>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn ctrl(app: &mut App<FixedSource>, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
            .unwrap();
    }

    fn type_text(app: &mut App<FixedSource>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn log_in(app: &mut App<FixedSource>) {
        type_text(app, "ada");
        press(app, KeyCode::Tab);
        type_text(app, "pw");
        press(app, KeyCode::Enter);
    }

    #[test]
    fn starts_on_login_screen() {
        let app = app(&["crane"]);
        assert_eq!(app.screen, Screen::Login);
        assert!(app.session.game().is_none());
    }

    #[test]
    fn empty_password_shows_error() {
        let mut app = app(&["crane"]);
        type_text(&mut app, "ada");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.screen, Screen::Login);
        assert_eq!(
            app.login.error.as_deref(),
            Some("Please enter both username and password")
        );
    }

    #[test]
    fn login_starts_a_game() {
        let mut app = app(&["crane"]);
        log_in(&mut app);

        assert_eq!(app.screen, Screen::Playing);
        assert_eq!(app.session.user().unwrap().username, "ada");
        assert!(app.session.game().is_some());
        assert!(app.login.username.is_empty());
    }

    #[test]
    fn typing_and_backspace_edit_the_input() {
        let mut app = app(&["crane"]);
        log_in(&mut app);
        type_text(&mut app, "tracex");
        assert_eq!(app.session.game().unwrap().current_input(), "TRACE");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.game().unwrap().current_input(), "TRAC");
    }

    #[test]
    fn short_guess_reports_error() {
        let mut app = app(&["crane"]);
        log_in(&mut app);
        type_text(&mut app, "tra");
        press(&mut app, KeyCode::Enter);

        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("Word too short"));
    }

    #[test]
    fn winning_then_enter_starts_new_game() {
        let mut app = app(&["crane", "slate"]);
        log_in(&mut app);
        type_text(&mut app, "crane");
        press(&mut app, KeyCode::Enter);

        assert!(app.is_game_over());
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "Congratulations! You guessed the word in 1 try!")
        );
        assert_eq!(app.session.stats().won_on(1), 1);

        press(&mut app, KeyCode::Enter);
        assert!(!app.is_game_over());
        assert_eq!(app.session.game().unwrap().secret().text(), "SLATE");
        assert_eq!(app.session.stats().played(), 1);
    }

    #[test]
    fn loss_reveals_the_word() {
        let mut app = app(&["crane"]);
        log_in(&mut app);
        for _ in 0..6 {
            type_text(&mut app, "slate");
            press(&mut app, KeyCode::Enter);
        }
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "Game Over. The word was CRANE.")
        );
    }

    #[test]
    fn ctrl_n_abandons_game() {
        let mut app = app(&["crane", "slate"]);
        log_in(&mut app);
        type_text(&mut app, "trace");
        press(&mut app, KeyCode::Enter);
        ctrl(&mut app, 'n');

        assert!(app.session.game().unwrap().attempts().is_empty());
        assert_eq!(app.session.stats().played(), 0);
    }

    #[test]
    fn ctrl_l_logs_out() {
        let mut app = app(&["crane"]);
        log_in(&mut app);
        ctrl(&mut app, 'l');

        assert_eq!(app.screen, Screen::Login);
        assert!(app.session.user().is_none());
        assert!(app.session.game().is_none());
    }

    #[test]
    fn modifier_chords_do_not_type() {
        let mut app = app(&["crane"]);
        log_in(&mut app);
        ctrl(&mut app, 'a');
        app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT))
            .unwrap();
        type_text(&mut app, "cr");

        assert_eq!(app.session.game().unwrap().current_input(), "CR");
    }

    #[test]
    fn escape_quits() {
        let mut app = app(&["crane"]);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn restored_user_skips_login() {
        let mut session = Session::new(
            WordList::embedded(),
            FixedSource::new([Word::new("crane").unwrap()]),
        );
        session.login("ada", "pw").unwrap();

        let app = App::new(session).unwrap();
        assert_eq!(app.screen, Screen::Playing);
        assert!(app.session.game().is_some());
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = app(&["crane"]);
        for i in 0..8 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "m3");
    }
}
