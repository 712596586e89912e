//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: sign in, then type whole words.

use crate::core::{WORD_LENGTH, WordError};
use crate::game::Submission;
use crate::output::{print_board, print_game_over, print_stats};
use crate::session::Session;
use crate::wordlists::WordSource;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode
///
/// Reads commands from `input` until it is exhausted or the player quits.
///
/// # Errors
///
/// Returns an error on I/O failure or if no secret word can be drawn.
pub fn run_simple<W, R, O>(session: &mut Session<W>, input: &mut R, out: &mut O) -> Result<()>
where
    W: WordSource,
    R: BufRead,
    O: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════╗")?;
    writeln!(out, "║                W O R D L E                       ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════╝\n")?;

    if let Some(user) = session.user() {
        writeln!(out, "Welcome back, {}!", user.username.bright_cyan())?;
    } else if !login(session, input, out)? {
        return farewell(out);
    }

    writeln!(out, "Guess the five-letter word in six tries.")?;
    writeln!(out, "Commands: ':new' new game, ':stats', ':logout', ':quit'\n")?;
    session.new_game()?;

    loop {
        let Some(line) = prompt(input, out, "Guess")? else {
            return farewell(out);
        };

        match line.to_lowercase().as_str() {
            "" => {}
            ":quit" | ":q" | ":exit" => return farewell(out),
            ":new" | ":n" => {
                session.new_game()?;
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            ":stats" => print_stats(out, &session.stats(), None)?,
            ":logout" => {
                session.logout();
                writeln!(out, "Logged out.")?;
                return Ok(());
            }
            _ => match submit_word(session, &line) {
                Ok(submission) => {
                    if let Some(game) = session.game() {
                        print_board(out, game)?;
                        if submission.completion.is_some() {
                            print_game_over(out, game, &session.stats())?;
                        }
                    }
                    if submission.completion.is_some() {
                        if !play_again(input, out)? {
                            return farewell(out);
                        }
                        session.new_game()?;
                        writeln!(out, "\n🔄 New game started!\n")?;
                    }
                }
                Err(e) => writeln!(out, "{} {e}", "❌".red())?,
            },
        }
    }
}

/// Ask for credentials until they are accepted; `false` if input ran out
fn login<W: WordSource, R: BufRead, O: Write>(
    session: &mut Session<W>,
    input: &mut R,
    out: &mut O,
) -> Result<bool> {
    writeln!(out, "{}", "Login to Play".bright_cyan().bold())?;
    loop {
        let Some(username) = prompt(input, out, "Username")? else {
            return Ok(false);
        };
        let Some(password) = prompt(input, out, "Password")? else {
            return Ok(false);
        };

        match session.login(&username, &password) {
            Ok(user) => {
                writeln!(out, "Hi, {}!\n", user.username.bright_cyan())?;
                return Ok(true);
            }
            Err(e) => writeln!(out, "{} {e}", "❌".red())?,
        }
    }
}

/// Type `word` into the active game and submit it
///
/// Lines of the wrong length are rejected before any letter is typed.
fn submit_word<W: WordSource>(session: &mut Session<W>, word: &str) -> Result<Submission> {
    let len = word.chars().count();
    if len != WORD_LENGTH {
        return Err(WordError::InvalidLength(len).into());
    }

    // Start from an empty input line
    while session.delete_letter().is_ok() {}

    for ch in word.chars() {
        session.append_letter(ch)?;
    }
    Ok(session.submit_guess()?)
}

fn play_again<R: BufRead, O: Write>(input: &mut R, out: &mut O) -> io::Result<bool> {
    let answer = prompt(input, out, "Play again? (yes/no)")?.unwrap_or_default();
    Ok(matches!(answer.to_lowercase().as_str(), "yes" | "y"))
}

fn farewell<O: Write>(out: &mut O) -> Result<()> {
    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

/// Get user input with a prompt; `None` at end of input
fn prompt<R: BufRead, O: Write>(input: &mut R, out: &mut O, label: &str) -> io::Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
