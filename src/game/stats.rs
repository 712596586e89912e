//! Cross-game statistics
//!
//! Updated once per finished game: played, wins, streaks and the histogram of
//! which attempt a game was won on.

use super::MAX_ATTEMPTS;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    played: u32,
    wins: u32,
    current_streak: u32,
    max_streak: u32,
    /// Index `n - 1` counts games won on attempt `n`
    guess_distribution: [u32; MAX_ATTEMPTS],
}

/// A completion that cannot be recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("Attempt count {0} is outside 1..=6")]
    AttemptsOutOfRange(usize),
}

impl Stats {
    /// Record a finished game
    ///
    /// `attempts` is the number of guesses the game took. Losses leave the
    /// distribution alone since they have no winning attempt.
    ///
    /// # Errors
    ///
    /// `AttemptsOutOfRange` if `attempts` is not in 1..=6; nothing is recorded.
    pub fn record_completion(&mut self, won: bool, attempts: usize) -> Result<(), StatsError> {
        if !(1..=MAX_ATTEMPTS).contains(&attempts) {
            return Err(StatsError::AttemptsOutOfRange(attempts));
        }

        self.played += 1;
        if won {
            self.wins += 1;
            self.current_streak += 1;
            self.max_streak = self.max_streak.max(self.current_streak);
            self.guess_distribution[attempts - 1] += 1;
        } else {
            self.current_streak = 0;
        }
        Ok(())
    }

    #[must_use]
    pub const fn played(&self) -> u32 {
        self.played
    }

    #[must_use]
    pub const fn wins(&self) -> u32 {
        self.wins
    }

    #[must_use]
    pub const fn current_streak(&self) -> u32 {
        self.current_streak
    }

    #[must_use]
    pub const fn max_streak(&self) -> u32 {
        self.max_streak
    }

    /// Full histogram; index `n - 1` is "won on attempt n"
    #[must_use]
    pub const fn guess_distribution(&self) -> &[u32; MAX_ATTEMPTS] {
        &self.guess_distribution
    }

    /// Games won on attempt `attempt` (1-indexed), 0 outside 1..=6
    #[must_use]
    pub fn won_on(&self, attempt: usize) -> u32 {
        attempt
            .checked_sub(1)
            .and_then(|i| self.guess_distribution.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// Win rate rounded to a whole percent, 0 before any game is played
    #[must_use]
    pub fn win_percentage(&self) -> u32 {
        if self.played == 0 {
            return 0;
        }
        (f64::from(self.wins) / f64::from(self.played) * 100.0).round() as u32
    }

    /// Check the relationships a loaded record must satisfy
    ///
    /// `wins <= played`, `current_streak <= max_streak`, streaks no longer than
    /// the win count, and the distribution sums to the win count.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let distributed: u64 = self.guess_distribution.iter().map(|&n| u64::from(n)).sum();
        self.wins <= self.played
            && self.current_streak <= self.max_streak
            && self.max_streak <= self.wins
            && distributed == u64::from(self.wins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let stats = Stats::default();
        assert_eq!(stats.played(), 0);
        assert_eq!(stats.win_percentage(), 0);
        assert!(stats.is_consistent());
    }

    #[test]
    fn win_updates_everything() {
        let mut stats = Stats::default();
        stats.record_completion(true, 3).unwrap();

        assert_eq!(stats.played(), 1);
        assert_eq!(stats.wins(), 1);
        assert_eq!(stats.current_streak(), 1);
        assert_eq!(stats.max_streak(), 1);
        assert_eq!(stats.guess_distribution(), &[0, 0, 1, 0, 0, 0]);
        assert_eq!(stats.won_on(3), 1);
    }

    #[test]
    fn loss_resets_streak_but_not_max() {
        let mut stats = Stats::default();
        stats.record_completion(true, 2).unwrap();
        stats.record_completion(true, 4).unwrap();
        stats.record_completion(false, 6).unwrap();

        assert_eq!(stats.played(), 3);
        assert_eq!(stats.wins(), 2);
        assert_eq!(stats.current_streak(), 0);
        assert_eq!(stats.max_streak(), 2);
        assert_eq!(stats.guess_distribution(), &[0, 1, 0, 1, 0, 0]);
    }

    #[test]
    fn new_streak_must_exceed_old_max() {
        let mut stats = Stats::default();
        for won in [true, true, true, false, true, true] {
            stats.record_completion(won, 4).unwrap();
        }
        assert_eq!(stats.current_streak(), 2);
        assert_eq!(stats.max_streak(), 3);

        stats.record_completion(true, 1).unwrap();
        stats.record_completion(true, 1).unwrap();
        assert_eq!(stats.current_streak(), 4);
        assert_eq!(stats.max_streak(), 4);
    }

    #[test]
    fn win_percentage_rounds() {
        let mut stats = Stats::default();
        stats.record_completion(true, 1).unwrap();
        stats.record_completion(true, 1).unwrap();
        stats.record_completion(false, 6).unwrap();
        // 2 of 3 is 66.67%
        assert_eq!(stats.win_percentage(), 67);
    }

    #[test]
    fn won_on_out_of_range_is_zero() {
        let mut stats = Stats::default();
        stats.record_completion(true, 1).unwrap();
        assert_eq!(stats.won_on(0), 0);
        assert_eq!(stats.won_on(7), 0);
    }

    #[test]
    fn out_of_range_attempts_change_nothing() {
        let mut stats = Stats::default();
        stats.record_completion(true, 2).unwrap();
        let before = stats;

        assert_eq!(
            stats.record_completion(true, 7),
            Err(StatsError::AttemptsOutOfRange(7))
        );
        assert_eq!(
            stats.record_completion(false, 0),
            Err(StatsError::AttemptsOutOfRange(0))
        );
        assert_eq!(stats, before);
        assert!(stats.is_consistent());
    }

    #[test]
    fn serializes_as_flat_record() {
        let mut stats = Stats::default();
        stats.record_completion(true, 5).unwrap();

        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["played"], 1);
        assert_eq!(json["max_streak"], 1);
        assert_eq!(json["guess_distribution"][4], 1);

        let back: Stats = serde_json::from_value(json).unwrap();
        assert_eq!(back, stats);
    }

    #[test]
    fn inconsistent_records_are_detected() {
        let bad: Stats = serde_json::from_str(
            r#"{"played":1,"wins":2,"current_streak":0,"max_streak":0,"guess_distribution":[2,0,0,0,0,0]}"#,
        )
        .unwrap();
        assert!(!bad.is_consistent());
    }
}
