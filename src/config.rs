//! Runtime configuration
//!
//! Resolved from the command line. Builds the word list, the secret source, the
//! session store and the log target.

use crate::logging::LogTarget;
use crate::session::{JsonFileStore, MemoryStore, Session, SessionStore};
use crate::wordlists::{RandomSource, WordList, WordListError, loader};
use std::path::PathBuf;

/// Default location of the saved session
pub const DEFAULT_SESSION_FILE: &str = "wordle_session.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListChoice {
    Embedded,
    File(PathBuf),
}

impl WordListChoice {
    /// `embedded` selects the built-in list, anything else is a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        if arg.eq_ignore_ascii_case("embedded") {
            Self::Embedded
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChoice {
    Memory,
    JsonFile(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub word_list: WordListChoice,
    pub store: StoreChoice,
    pub seed: Option<u64>,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word_list: WordListChoice::Embedded,
            store: StoreChoice::JsonFile(PathBuf::from(DEFAULT_SESSION_FILE)),
            seed: None,
            log_level: "warn".into(),
            log_file: None,
        }
    }
}

impl Config {
    /// Load the configured word list
    ///
    /// # Errors
    ///
    /// Returns `WordListError` if the file cannot be read or yields no words.
    pub fn load_word_list(&self) -> Result<WordList, WordListError> {
        let list = match &self.word_list {
            WordListChoice::Embedded => WordList::embedded(),
            WordListChoice::File(path) => loader::load_from_file(path)?,
        };
        list.non_empty()
    }

    #[must_use]
    pub fn word_source(&self) -> RandomSource {
        self.seed
            .map_or_else(RandomSource::from_entropy, RandomSource::from_seed)
    }

    #[must_use]
    pub fn open_store(&self) -> Box<dyn SessionStore> {
        match &self.store {
            StoreChoice::Memory => Box::new(MemoryStore::default()),
            StoreChoice::JsonFile(path) => Box::new(JsonFileStore::new(path.clone())),
        }
    }

    /// Where logs should go; the TUI cannot share the terminal with them
    #[must_use]
    pub fn log_target(&self, uses_terminal_ui: bool) -> LogTarget {
        match &self.log_file {
            Some(path) => LogTarget::File(path.clone()),
            None if uses_terminal_ui => LogTarget::Discard,
            None => LogTarget::Stderr,
        }
    }

    /// Build the session, failing fast on an unusable word list
    ///
    /// # Errors
    ///
    /// Returns `WordListError` from `load_word_list`.
    pub fn build_session(&self) -> Result<Session<RandomSource>, WordListError> {
        let words = self.load_word_list()?;
        tracing::info!(words = words.len(), seed = ?self.seed, "session configured");
        Ok(Session::open(words, self.word_source(), self.open_store()))
    }
}
