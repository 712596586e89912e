//! Property tests for scoring, keyboard hints, statistics and game limits

use proptest::prelude::*;
use wordle_session::core::{Feedback, LetterStatus, WORD_LENGTH, Word};
use wordle_session::game::{AcceptAll, GameError, GameState, MAX_ATTEMPTS, Outcome, Stats};

/// Small alphabet so guesses share and repeat letters often
fn word() -> impl Strategy<Value = Word> {
    "[a-e]{5}".prop_map(|s| Word::new(s).unwrap())
}

fn count(word: &Word, letter: u8) -> usize {
    word.letters().iter().filter(|&&l| l == letter).count()
}

fn submit(game: &mut GameState, guess: &Word) -> Result<(), GameError> {
    for c in guess.text().chars() {
        game.append_letter(c)?;
    }
    game.submit_guess(&AcceptAll).map(|_| ())
}

proptest! {
    #[test]
    fn correct_matches_positions(guess in word(), secret in word()) {
        let feedback = Feedback::evaluate(&guess, &secret);
        for i in 0..WORD_LENGTH {
            let same = guess.letter_at(i) == secret.letter_at(i);
            prop_assert_eq!(feedback.status_at(i) == LetterStatus::Correct, same);
        }
    }

    #[test]
    fn marked_letters_never_exceed_secret(guess in word(), secret in word()) {
        let feedback = Feedback::evaluate(&guess, &secret);
        for letter in b'A'..=b'E' {
            let marked = (0..WORD_LENGTH)
                .filter(|&i| {
                    guess.letter_at(i) == letter
                        && feedback.status_at(i) != LetterStatus::Absent
                })
                .count();
            prop_assert_eq!(marked, count(&guess, letter).min(count(&secret, letter)));
        }
    }

    #[test]
    fn self_match_is_perfect(secret in word()) {
        prop_assert!(Feedback::evaluate(&secret, &secret).is_perfect());
    }

    #[test]
    fn keyboard_never_downgrades(secret in word(), guesses in prop::collection::vec(word(), 1..=MAX_ATTEMPTS)) {
        let mut game = GameState::new(secret);
        let mut previous: Vec<(char, LetterStatus)> = Vec::new();

        for guess in &guesses {
            if game.is_finished() {
                break;
            }
            submit(&mut game, guess).unwrap();

            for &(letter, status) in &previous {
                let now = game.keyboard().status(letter);
                prop_assert!(now.is_some_and(|s| s >= status));
            }
            previous = game.keyboard().entries();
        }

        // Each key shows the best status any attempt gave it
        for (letter, status) in game.keyboard().entries() {
            let best = game
                .attempts()
                .iter()
                .flat_map(|a| a.word().letters().iter().zip(a.feedback().statuses()))
                .filter(|&(&l, _)| char::from(l) == letter)
                .map(|(_, &s)| s)
                .max();
            prop_assert_eq!(Some(status), best);
        }
    }

    #[test]
    fn stats_stay_consistent(games in prop::collection::vec((any::<bool>(), 1..=MAX_ATTEMPTS), 0..40)) {
        let mut stats = Stats::default();
        for &(won, attempts) in &games {
            let before = stats;
            stats.record_completion(won, attempts).unwrap();
            prop_assert!(stats.is_consistent());
            prop_assert!(stats.max_streak() >= before.max_streak());

            // Only the winning attempt's bucket moves, and only by one
            for n in 1..=MAX_ATTEMPTS {
                let expected = before.won_on(n) + u32::from(won && n == attempts);
                prop_assert_eq!(stats.won_on(n), expected);
            }
        }

        let wins = games.iter().filter(|(won, _)| *won).count() as u32;
        prop_assert_eq!(stats.played(), games.len() as u32);
        prop_assert_eq!(stats.wins(), wins);
        prop_assert_eq!(stats.guess_distribution().iter().sum::<u32>(), wins);
        prop_assert!(stats.current_streak() <= stats.max_streak());

        let trailing = games.iter().rev().take_while(|(won, _)| *won).count() as u32;
        prop_assert_eq!(stats.current_streak(), trailing);
    }

    #[test]
    fn six_misses_end_the_game(secret in word(), guesses in prop::collection::vec(word(), MAX_ATTEMPTS)) {
        prop_assume!(guesses.iter().all(|g| g != &secret));

        let mut game = GameState::new(secret);
        for guess in &guesses {
            submit(&mut game, guess).unwrap();
        }

        prop_assert_eq!(game.outcome(), Outcome::Lost);
        prop_assert_eq!(game.attempts().len(), MAX_ATTEMPTS);
        prop_assert_eq!(game.append_letter('a'), Err(GameError::GameOver));
        prop_assert_eq!(game.submit_guess(&AcceptAll).map(|_| ()), Err(GameError::GameOver));
    }
}
