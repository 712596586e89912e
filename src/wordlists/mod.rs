//! Word lists for secrets and guess checking
//!
//! Provides the embedded word list compiled into the binary, a loader for custom
//! lists, and the secret selection policies.

mod embedded;
pub mod loader;
pub mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use source::{FixedSource, RandomSource, WordSource, pick_secret};

use crate::core::Word;
use crate::game::WordValidator;
use rustc_hash::FxHashSet;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or drawing from a word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("Word list is empty")]
    Empty,
    #[error("Failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Ordered list of playable words with constant-time membership checks
///
/// Order is preserved from the source so seeded secret selection is reproducible.
/// Duplicate entries keep their first position.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl WordList {
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut list = Self::default();
        for word in words {
            if list.index.insert(word) {
                list.words.push(word);
            }
        }
        list
    }

    /// The list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(WORDS))
    }

    /// Reject an empty list up front, before any game is started
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Empty` if the list has no words.
    pub fn non_empty(self) -> Result<Self, WordListError> {
        if self.words.is_empty() {
            Err(WordListError::Empty)
        } else {
            Ok(self)
        }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }
}

impl WordValidator for WordList {
    fn is_accepted(&self, word: &Word) -> bool {
        self.contains(word)
    }
}
