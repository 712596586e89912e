//! Best-known status of every guessed letter
//!
//! Drives the on-screen keyboard colouring. A letter's status only ever moves up
//! the precedence order `Absent < Present < Correct`.

use super::Attempt;
use crate::core::LetterStatus;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardStatus {
    letters: FxHashMap<u8, LetterStatus>,
}

impl KeyboardStatus {
    /// Rebuild from the full attempt history
    #[must_use]
    pub fn from_attempts(attempts: &[Attempt]) -> Self {
        let mut keyboard = Self::default();
        for attempt in attempts {
            keyboard.record(attempt);
        }
        keyboard
    }

    /// Fold one attempt in, upgrading letters where it shows something better
    pub fn record(&mut self, attempt: &Attempt) {
        let letters = attempt.word().letters();
        for (&letter, &status) in letters.iter().zip(attempt.feedback().statuses()) {
            self.letters
                .entry(letter)
                .and_modify(|best| *best = (*best).max(status))
                .or_insert(status);
        }
    }

    /// Status for a letter, or `None` if it has not been guessed
    #[must_use]
    pub fn status(&self, letter: char) -> Option<LetterStatus> {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        self.letters
            .get(&(letter.to_ascii_uppercase() as u8))
            .copied()
    }

    /// Guessed letters with their status, alphabetically
    #[must_use]
    pub fn entries(&self) -> Vec<(char, LetterStatus)> {
        let mut entries: Vec<(char, LetterStatus)> = self
            .letters
            .iter()
            .map(|(&letter, &status)| (char::from(letter), status))
            .collect();
        entries.sort_unstable_by_key(|&(letter, _)| letter);
        entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use LetterStatus::{Absent, Correct, Present};

    fn attempt(guess: &str, secret: &str) -> Attempt {
        Attempt::new(Word::new(guess).unwrap(), &Word::new(secret).unwrap())
    }

    #[test]
    fn unused_letters_have_no_entry() {
        let keyboard = KeyboardStatus::from_attempts(&[attempt("trace", "crane")]);
        assert_eq!(keyboard.status('Z'), None);
        assert_eq!(keyboard.status('1'), None);
        assert_eq!(keyboard.len(), 5);
    }

    #[test]
    fn records_each_status() {
        let keyboard = KeyboardStatus::from_attempts(&[attempt("trace", "crane")]);
        assert_eq!(keyboard.status('T'), Some(Absent));
        assert_eq!(keyboard.status('r'), Some(Correct));
        assert_eq!(keyboard.status('C'), Some(Present));
    }

    #[test]
    fn correct_is_never_downgraded() {
        // R correct in the first attempt, merely present in the second
        let attempts = [attempt("trace", "crane"), attempt("rebus", "crane")];
        let keyboard = KeyboardStatus::from_attempts(&attempts);
        assert_eq!(keyboard.status('R'), Some(Correct));
    }

    #[test]
    fn present_upgrades_to_correct() {
        let attempts = [attempt("nails", "crane"), attempt("grand", "crane")];
        let keyboard = KeyboardStatus::from_attempts(&attempts);
        assert_eq!(keyboard.status('N'), Some(Correct));
        assert_eq!(keyboard.status('A'), Some(Correct));
    }

    #[test]
    fn duplicate_letter_keeps_best_status_within_one_attempt() {
        // EERIE vs CRANE marks the leading E's absent and the last one correct
        let keyboard = KeyboardStatus::from_attempts(&[attempt("eerie", "crane")]);
        assert_eq!(keyboard.status('E'), Some(Correct));
    }

    #[test]
    fn incremental_matches_rebuild() {
        let attempts = [
            attempt("speed", "erase"),
            attempt("llama", "erase"),
            attempt("erase", "erase"),
        ];

        let mut incremental = KeyboardStatus::default();
        for a in &attempts {
            incremental.record(a);
        }
        assert_eq!(incremental, KeyboardStatus::from_attempts(&attempts));
    }

    #[test]
    fn entries_are_sorted() {
        let keyboard = KeyboardStatus::from_attempts(&[attempt("trace", "crane")]);
        let letters: String = keyboard.entries().iter().map(|(l, _)| *l).collect();
        assert_eq!(letters, "ACERT");
    }
}
