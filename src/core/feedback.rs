//! Guess evaluation and per-letter feedback
//!
//! Every letter of a guess is classified as one of:
//! - Absent (letter not in the secret, or all its occurrences already accounted for)
//! - Present (letter in the secret, wrong position)
//! - Correct (letter in the correct position)

use super::{WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Feedback for a single letter of a guess
///
/// Variants are ordered by precedence: `Correct > Present > Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    Absent,
    Present,
    Correct,
}

impl LetterStatus {
    /// Square emoji used in share strings
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }

    /// Single ASCII symbol (`G`, `Y` or `-`)
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Absent => '-',
            Self::Present => 'Y',
            Self::Correct => 'G',
        }
    }
}

/// Feedback for a whole guess, one status per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

/// Error returned when a feedback string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid feedback string: {0}")]
pub struct ParseFeedbackError(String);

impl Feedback {
    /// All correct (perfect match)
    pub const PERFECT: Self = Self([LetterStatus::Correct; WORD_LENGTH]);

    /// Build feedback from explicit statuses
    #[must_use]
    pub const fn new(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    /// Evaluate `guess` against `secret`
    ///
    /// Implements Wordle's feedback rules, including duplicate letters: a letter is
    /// never reported Correct or Present more times than it occurs in the secret.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches Correct and remove them from the secret's pool
    /// 2. Second pass, left to right: mark remaining letters Present while the pool
    ///    still holds that letter, consuming one occurrence each time
    ///
    /// # Examples
    /// ```
    /// use wordle_session::core::{Feedback, Word};
    ///
    /// let guess = Word::new("trace").unwrap();
    /// let secret = Word::new("crane").unwrap();
    ///
    /// // T(absent) R(correct) A(correct) C(present) E(correct)
    /// assert_eq!(Feedback::evaluate(&guess, &secret).to_string(), "-GGYG");
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, secret: &Word) -> Self {
        let mut result = [LetterStatus::Absent; WORD_LENGTH];
        let mut secret_available = secret.letter_counts();

        // First pass: exact position matches
        // Allow: Index needed to access guess[i], secret[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.letter_at(i) == secret.letter_at(i) {
                result[i] = LetterStatus::Correct;

                if let Some(count) = secret_available.get_mut(&guess.letter_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but an unconsumed occurrence remains
        // Allow: Index needed to access guess[i] and check/set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == LetterStatus::Correct {
                continue;
            }
            if let Some(count) = secret_available.get_mut(&guess.letter_at(i))
                && *count > 0
            {
                result[i] = LetterStatus::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Per-position statuses
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Status at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn status_at(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    /// Check if this is a perfect match (all correct)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the number of Correct squares
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterStatus::Correct)
    }

    /// Count the number of Present squares
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterStatus::Present)
    }

    fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Convert feedback to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_session::core::Feedback;
    ///
    /// let f: Feedback = "GY-GY".parse().unwrap();
    /// assert_eq!(f.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl FromStr for Feedback {
    type Err = ParseFeedbackError;

    /// Parse feedback from a string like "GYGGY" or "🟩🟨🟩🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(ParseFeedbackError(s.to_string()));
        }

        let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
        for (slot, ch) in statuses.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => LetterStatus::Correct,
                'Y' | 'y' | '🟨' => LetterStatus::Present,
                '-' | '_' | '⬜' => LetterStatus::Absent,
                _ => return Err(ParseFeedbackError(s.to_string())),
            };
        }

        Ok(Self(statuses))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in &self.0 {
            write!(f, "{}", status.symbol())?;
        }
        Ok(())
    }
}
