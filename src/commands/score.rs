//! Score a single guess against a secret

use crate::core::{Feedback, Word, WordError};

/// Result of scoring one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    pub guess: Word,
    pub secret: Word,
    pub feedback: Feedback,
}

/// Parse both words and evaluate the guess
///
/// Neither word has to be in the word list.
///
/// # Errors
///
/// Returns `WordError` if either argument is not a 5-letter word.
pub fn score_words(guess: &str, secret: &str) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess)?;
    let secret = Word::new(secret)?;
    Ok(ScoreResult {
        guess,
        secret,
        feedback: Feedback::evaluate(&guess, &secret),
    })
}
