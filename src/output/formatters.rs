//! Formatting utilities for terminal output

use crate::core::LetterStatus;
use crate::game::Attempt;
use colored::{ColoredString, Colorize};

/// One letter tile coloured by its status
#[must_use]
pub fn letter_tile(letter: char, status: LetterStatus) -> ColoredString {
    let tile = format!(" {letter} ");
    match status {
        LetterStatus::Correct => tile.black().on_green().bold(),
        LetterStatus::Present => tile.black().on_yellow().bold(),
        LetterStatus::Absent => tile.white().on_bright_black(),
    }
}

/// A submitted attempt as a row of coloured tiles
#[must_use]
pub fn attempt_row(attempt: &Attempt) -> String {
    attempt
        .word()
        .letters()
        .iter()
        .zip(attempt.feedback().statuses())
        .map(|(&letter, &status)| letter_tile(char::from(letter), status).to_string())
        .collect()
}

/// Emoji grid of a game, one line per attempt
#[must_use]
pub fn share_grid(attempts: &[Attempt]) -> String {
    attempts
        .iter()
        .map(|a| a.feedback().to_emoji())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
