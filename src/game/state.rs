//! Single-game state machine
//!
//! A game starts `InProgress` and ends `Won` or `Lost`. Letters are typed into the
//! current input, then submitted as an attempt. Every command checks its
//! preconditions before touching anything, so a rejected command leaves the game
//! exactly as it was.

use super::{GameError, KeyboardStatus};
use crate::core::{Feedback, WORD_LENGTH, Word};

/// Maximum attempts per game
pub const MAX_ATTEMPTS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// Decides whether a submitted word is a recognised guess
pub trait WordValidator {
    fn is_accepted(&self, word: &Word) -> bool;
}

/// Validator that accepts every well-formed word
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl WordValidator for AcceptAll {
    fn is_accepted(&self, _word: &Word) -> bool {
        true
    }
}

/// A locked-in guess and its feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attempt {
    word: Word,
    feedback: Feedback,
}

impl Attempt {
    /// Score `word` against `secret`
    #[must_use]
    pub fn new(word: Word, secret: &Word) -> Self {
        Self {
            word,
            feedback: Feedback::evaluate(&word, secret),
        }
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.feedback.is_perfect()
    }
}

/// Emitted by the submission that finishes a game, and only that one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub won: bool,
    pub attempts: usize,
}

/// Result of an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub attempt: Attempt,
    pub outcome: Outcome,
    pub completion: Option<Completion>,
}

#[derive(Debug, Clone)]
pub struct GameState {
    secret: Word,
    attempts: Vec<Attempt>,
    input: String,
    outcome: Outcome,
    keyboard: KeyboardStatus,
}

impl GameState {
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            attempts: Vec::with_capacity(MAX_ATTEMPTS),
            input: String::with_capacity(WORD_LENGTH),
            outcome: Outcome::InProgress,
            keyboard: KeyboardStatus::default(),
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Letters typed but not yet submitted (uppercase)
    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.outcome != Outcome::InProgress
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardStatus {
        &self.keyboard
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.attempts.len()
    }

    /// Type a letter into the current input
    ///
    /// # Errors
    ///
    /// `GameOver` once the game has finished, `InputFull` when five letters are
    /// already typed, `NotALetter` for anything outside A-Z.
    pub fn append_letter(&mut self, ch: char) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        if self.input.len() >= WORD_LENGTH {
            return Err(GameError::InputFull);
        }
        if !ch.is_ascii_alphabetic() {
            return Err(GameError::NotALetter(ch));
        }
        self.input.push(ch.to_ascii_uppercase());
        Ok(())
    }

    /// Remove the last typed letter
    ///
    /// # Errors
    ///
    /// `GameOver` once the game has finished, `InputEmpty` when nothing is typed.
    pub fn delete_letter(&mut self) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        self.input.pop().map(|_| ()).ok_or(GameError::InputEmpty)
    }

    /// Submit the current input as an attempt
    ///
    /// On success the attempt is appended, the input cleared and the keyboard
    /// updated. If this attempt ends the game the returned submission carries the
    /// `Completion` for the statistics.
    ///
    /// # Errors
    ///
    /// `GameOver` once the game has finished, `WordTooShort` with fewer than five
    /// letters typed, `NotInWordList` when `validator` rejects the word.
    pub fn submit_guess<V: WordValidator + ?Sized>(
        &mut self,
        validator: &V,
    ) -> Result<Submission, GameError> {
        self.ensure_in_progress()?;
        if self.input.len() < WORD_LENGTH {
            return Err(GameError::WordTooShort {
                len: self.input.len(),
            });
        }

        // Input only ever holds ASCII letters
        let word = Word::new(&self.input).map_err(|_| GameError::WordTooShort {
            len: self.input.len(),
        })?;
        if !validator.is_accepted(&word) {
            return Err(GameError::NotInWordList(word.to_string()));
        }

        let attempt = Attempt::new(word, &self.secret);
        self.attempts.push(attempt);
        self.keyboard.record(&attempt);
        self.input.clear();

        if attempt.is_winning() {
            self.outcome = Outcome::Won;
        } else if self.attempts.len() >= MAX_ATTEMPTS {
            self.outcome = Outcome::Lost;
        }

        let completion = self.is_finished().then(|| Completion {
            won: self.outcome == Outcome::Won,
            attempts: self.attempts.len(),
        });

        Ok(Submission {
            attempt,
            outcome: self.outcome,
            completion,
        })
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.is_finished() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }
}
