//! Player session
//!
//! The one object front-ends talk to. It owns the word list, the secret source,
//! the signed-in user, the active game and the statistics, and guarantees that
//! each finished game is counted exactly once.

mod store;

pub use store::{JsonFileStore, MemoryStore, SavedSession, SessionStore, StoreError};

use crate::core::Word;
use crate::game::{GameError, GameState, KeyboardStatus, Stats, Submission};
use crate::wordlists::{WordList, WordListError, WordSource};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Please enter both username and password")]
    MissingCredentials,
    #[error("No game in progress")]
    NoActiveGame,
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    WordList(#[from] WordListError),
}

pub struct Session<W: WordSource> {
    words: WordList,
    source: W,
    store: Box<dyn SessionStore>,
    /// Off when the stored record could not be trusted at open
    saving: bool,
    user: Option<User>,
    game: Option<GameState>,
    stats: Stats,
}

impl<W: WordSource> Session<W> {
    /// Fresh session that keeps its record in memory only
    pub fn new(words: WordList, source: W) -> Self {
        Self::open(words, source, Box::new(MemoryStore::default()))
    }

    /// Session restored from `store`
    ///
    /// A store that cannot be read, or holds statistics that contradict
    /// themselves, yields a fresh record and is never written for the rest of
    /// the session, so the unreadable record stays on disk for recovery.
    pub fn open(words: WordList, source: W, store: Box<dyn SessionStore>) -> Self {
        let mut saving = true;
        let saved = match store.load() {
            Ok(saved) => saved.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "could not load saved session, playing without saving");
                saving = false;
                SavedSession::default()
            }
        };

        let stats = if saved.stats.is_consistent() {
            saved.stats
        } else {
            tracing::warn!(
                stats = ?saved.stats,
                "discarding inconsistent saved statistics, playing without saving"
            );
            saving = false;
            Stats::default()
        };

        if let Some(user) = &saved.user {
            tracing::info!(username = %user.username, "restored signed-in user");
        }

        Self {
            words,
            source,
            store,
            saving,
            user: saved.user,
            game: None,
            stats,
        }
    }

    /// Sign in; any non-empty username and password are accepted
    ///
    /// # Errors
    ///
    /// Returns `SessionError::MissingCredentials` if either field is blank.
    pub fn login(&mut self, username: &str, password: &str) -> Result<User, SessionError> {
        let username = username.trim();
        if username.is_empty() || password.trim().is_empty() {
            return Err(SessionError::MissingCredentials);
        }

        tracing::info!(username, "logged in");
        let user = User::new(username);
        self.user = Some(user.clone());
        self.persist();
        Ok(user)
    }

    /// Sign out, dropping the active game
    ///
    /// Statistics stay with the session.
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(username = %user.username, "logged out");
        }
        self.game = None;
        self.persist();
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Start a game with a secret from the word source
    ///
    /// Any unfinished game is discarded.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::WordList` if the source has nothing to offer.
    pub fn new_game(&mut self) -> Result<&GameState, SessionError> {
        let secret = self.source.next_secret(&self.words)?;
        Ok(self.new_game_with(secret))
    }

    /// Start a game with a known secret
    pub fn new_game_with(&mut self, secret: Word) -> &GameState {
        if self.game.as_ref().is_some_and(|g| !g.is_finished()) {
            tracing::debug!("abandoning unfinished game");
        }
        tracing::info!("new game started");
        self.game.insert(GameState::new(secret))
    }

    /// # Errors
    ///
    /// `NoActiveGame`, or the game's own rejection.
    pub fn append_letter(&mut self, ch: char) -> Result<(), SessionError> {
        Ok(self.active_game()?.append_letter(ch)?)
    }

    /// # Errors
    ///
    /// `NoActiveGame`, or the game's own rejection.
    pub fn delete_letter(&mut self) -> Result<(), SessionError> {
        Ok(self.active_game()?.delete_letter()?)
    }

    /// Submit the typed word, checked against the session's word list
    ///
    /// When the guess finishes the game, the statistics are updated and saved
    /// before returning.
    ///
    /// # Errors
    ///
    /// `NoActiveGame`, or the game's own rejection (too short, unknown word,
    /// game already over).
    pub fn submit_guess(&mut self) -> Result<Submission, SessionError> {
        let game = self.game.as_mut().ok_or(SessionError::NoActiveGame)?;
        let submission = game.submit_guess(&self.words)?;

        tracing::debug!(
            guess = %submission.attempt.word(),
            feedback = %submission.attempt.feedback(),
            "guess accepted"
        );

        if let Some(completion) = submission.completion {
            if let Err(e) = self
                .stats
                .record_completion(completion.won, completion.attempts)
            {
                tracing::warn!(error = %e, "completion not recorded");
                return Ok(submission);
            }
            tracing::info!(
                won = completion.won,
                attempts = completion.attempts,
                played = self.stats.played(),
                streak = self.stats.current_streak(),
                "game finished"
            );
            self.persist();
        }

        Ok(submission)
    }

    #[must_use]
    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    #[must_use]
    pub fn keyboard(&self) -> Option<&KeyboardStatus> {
        self.game.as_ref().map(GameState::keyboard)
    }

    #[must_use]
    pub const fn stats(&self) -> Stats {
        self.stats
    }

    #[must_use]
    pub const fn words(&self) -> &WordList {
        &self.words
    }

    fn active_game(&mut self) -> Result<&mut GameState, SessionError> {
        self.game.as_mut().ok_or(SessionError::NoActiveGame)
    }

    /// Whether changes are written back to the store
    #[must_use]
    pub const fn is_saving(&self) -> bool {
        self.saving
    }

    fn persist(&mut self) {
        if !self.saving {
            tracing::debug!("saving disabled for this session");
            return;
        }
        let record = SavedSession {
            user: self.user.clone(),
            stats: self.stats,
        };
        if let Err(e) = self.store.save(&record) {
            tracing::warn!(error = %e, "could not save session, continuing in memory");
        }
    }
}
