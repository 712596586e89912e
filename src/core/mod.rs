//! Core domain types for Wordle
//!
//! Words and the pure guess evaluator. Nothing here holds game state.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterStatus, ParseFeedbackError};
pub use word::{WORD_LENGTH, Word, WordError};
