//! Secret word selection
//!
//! A `WordSource` supplies the secret for each new game. `RandomSource` draws
//! uniformly from the word list with an injected RNG; `FixedSource` replays a
//! given sequence so tests and scripted sessions know the answer in advance.

use super::{WordList, WordListError};
use crate::core::Word;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Pick a secret uniformly at random from `words`
///
/// # Errors
///
/// Returns `WordListError::Empty` if `words` is empty.
pub fn pick_secret<R: Rng + ?Sized>(words: &[Word], rng: &mut R) -> Result<Word, WordListError> {
    words.choose(rng).copied().ok_or(WordListError::Empty)
}

/// Secret selection policy
pub trait WordSource {
    /// Choose the secret for the next game
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Empty` if there is nothing to choose from.
    fn next_secret(&mut self, words: &WordList) -> Result<Word, WordListError>;
}

/// Uniform random selection over the word list
#[derive(Debug, Clone)]
pub struct RandomSource<R: Rng = StdRng> {
    rng: R,
}

impl<R: Rng> RandomSource<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSource<StdRng> {
    /// Deterministic source for reproducible sessions
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> WordSource for RandomSource<R> {
    fn next_secret(&mut self, words: &WordList) -> Result<Word, WordListError> {
        pick_secret(words.words(), &mut self.rng)
    }
}

/// Replays a fixed sequence of secrets, cycling when exhausted
///
/// The word list is ignored, so injected secrets need not be guessable words.
#[derive(Debug, Clone)]
pub struct FixedSource {
    secrets: Vec<Word>,
    next: usize,
}

impl FixedSource {
    #[must_use]
    pub fn new(secrets: impl IntoIterator<Item = Word>) -> Self {
        Self {
            secrets: secrets.into_iter().collect(),
            next: 0,
        }
    }
}

impl WordSource for FixedSource {
    fn next_secret(&mut self, _words: &WordList) -> Result<Word, WordListError> {
        let secret = *self.secrets.get(self.next).ok_or(WordListError::Empty)?;
        self.next = (self.next + 1) % self.secrets.len();
        Ok(secret)
    }
}
