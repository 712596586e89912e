//! Display functions for game state and statistics

use super::formatters::{attempt_row, create_progress_bar, letter_tile, share_grid};
use crate::core::{Feedback, Word};
use crate::game::{GameState, MAX_ATTEMPTS, Outcome, Stats};
use colored::Colorize;
use std::io::{self, Write};

/// Print the statistics panel
///
/// `current` highlights the distribution row of the game just won.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_stats<W: Write>(out: &mut W, stats: &Stats, current: Option<usize>) -> io::Result<()> {
    writeln!(out, "\n📊 {}", "Statistics".bright_cyan().bold())?;
    writeln!(out, "   Played:          {}", stats.played())?;
    writeln!(out, "   Win %:           {}", stats.win_percentage())?;
    writeln!(out, "   Current Streak:  {}", stats.current_streak())?;
    writeln!(out, "   Max Streak:      {}", stats.max_streak())?;

    writeln!(out, "\n📈 {}", "Guess Distribution".bright_cyan().bold())?;
    let max = stats.guess_distribution().iter().copied().max().unwrap_or(0);
    for attempt in 1..=MAX_ATTEMPTS {
        let count = stats.won_on(attempt);
        let bar = create_progress_bar(f64::from(count), f64::from(max), 30);
        let bar = if current == Some(attempt) {
            bar.green().bold()
        } else {
            bar.bright_black()
        };
        writeln!(out, "   {attempt}: {bar} {count}")?;
    }
    Ok(())
}

/// Print every attempt as coloured tiles, then the typed input
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_board<W: Write>(out: &mut W, game: &GameState) -> io::Result<()> {
    writeln!(out)?;
    for (i, attempt) in game.attempts().iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, attempt_row(attempt))?;
    }
    if !game.is_finished() {
        writeln!(
            out,
            "  {} guess{} left",
            game.attempts_remaining(),
            if game.attempts_remaining() == 1 { "" } else { "es" }
        )?;
    }
    Ok(())
}

/// Print the end-of-game summary
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_game_over<W: Write>(out: &mut W, game: &GameState, stats: &Stats) -> io::Result<()> {
    let tries = game.attempts().len();
    writeln!(out, "\n{}", "═".repeat(50).bright_cyan())?;
    match game.outcome() {
        Outcome::Won => {
            writeln!(out, "{}", "Congratulations!".bright_green().bold())?;
            writeln!(
                out,
                "You guessed the word in {tries} {}!",
                if tries == 1 { "try" } else { "tries" }
            )?;
        }
        Outcome::Lost => {
            writeln!(out, "{}", "Game Over".red().bold())?;
            writeln!(out, "The word was {}.", game.secret())?;
        }
        Outcome::InProgress => return Ok(()),
    }
    writeln!(out, "\n{}", share_grid(game.attempts()))?;

    let current = (game.outcome() == Outcome::Won).then_some(tries);
    print_stats(out, stats, current)?;
    writeln!(out, "{}", "═".repeat(50).bright_cyan())
}

/// Print the result of scoring one guess against a secret
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_score<W: Write>(
    out: &mut W,
    guess: &Word,
    secret: &Word,
    feedback: &Feedback,
) -> io::Result<()> {
    let tiles: String = guess
        .letters()
        .iter()
        .zip(feedback.statuses())
        .map(|(&letter, &status)| letter_tile(char::from(letter), status).to_string())
        .collect();

    writeln!(out, "Guess:    {guess}")?;
    writeln!(out, "Secret:   {secret}")?;
    writeln!(out, "Feedback: {tiles}  {}  {feedback}", feedback.to_emoji())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::AcceptAll;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn finished_game(secret: &str, guesses: &[&str]) -> GameState {
        let mut game = GameState::new(Word::new(secret).unwrap());
        for guess in guesses {
            for ch in guess.chars() {
                game.append_letter(ch).unwrap();
            }
            game.submit_guess(&AcceptAll).unwrap();
        }
        game
    }

    #[test]
    fn stats_panel_lists_all_fields() {
        let mut stats = Stats::default();
        stats.record_completion(true, 2).unwrap();
        stats.record_completion(false, 6).unwrap();

        let text = render(|out| print_stats(out, &stats, None));
        assert!(text.contains("Played:          2"));
        assert!(text.contains("Win %:           50"));
        assert!(text.contains("Current Streak:  0"));
        assert!(text.contains("Max Streak:      1"));
        assert!(text.contains("   2: "));
        assert!(text.contains("   6: "));
    }

    #[test]
    fn game_over_for_win() {
        let game = finished_game("crane", &["trace", "crane"]);
        let mut stats = Stats::default();
        stats.record_completion(true, 2).unwrap();

        let text = render(|out| print_game_over(out, &game, &stats));
        assert!(text.contains("Congratulations!"));
        assert!(text.contains("You guessed the word in 2 tries!"));
        assert!(text.contains("⬜🟩🟩🟨🟩"));
    }

    #[test]
    fn game_over_for_single_try() {
        let game = finished_game("crane", &["crane"]);
        let text = render(|out| print_game_over(out, &game, &Stats::default()));
        assert!(text.contains("in 1 try!"));
    }

    #[test]
    fn game_over_for_loss_reveals_word() {
        let game = finished_game("crane", &["slate"; 6]);
        let text = render(|out| print_game_over(out, &game, &Stats::default()));
        assert!(text.contains("Game Over"));
        assert!(text.contains("The word was CRANE."));
    }

    #[test]
    fn score_output() {
        let guess = Word::new("speed").unwrap();
        let secret = Word::new("erase").unwrap();
        let feedback = Feedback::evaluate(&guess, &secret);

        let text = render(|out| print_score(out, &guess, &secret, &feedback));
        assert!(text.contains("Guess:    SPEED"));
        assert!(text.contains("🟨⬜🟨🟨⬜"));
        assert!(text.contains("Y-YY-"));
    }
}
