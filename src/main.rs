//! Wordle - CLI
//!
//! Play Wordle in a TUI or a plain line-oriented mode, with login and saved statistics.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use wordle_session::{
    commands::{run_simple, score_words},
    config::{Config, DEFAULT_SESSION_FILE, StoreChoice, WordListChoice},
    interactive::{App, run_tui},
    logging::init_tracing,
    output::{print_score, print_stats},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Where the logged-in user and statistics are saved
    #[arg(long, global = true, default_value = DEFAULT_SESSION_FILE)]
    stats_file: PathBuf,

    /// Keep everything in memory for this run
    #[arg(long, global = true)]
    no_save: bool,

    /// Seed for secret word selection (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log filter, e.g. 'info' or 'wordle_session=debug' (overridden by WORDLE_LOG)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write logs to this file (required to see logs in TUI mode)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type whole words, no TUI)
    Simple,

    /// Show saved statistics
    Stats,

    /// Score a guess against a secret word
    Score {
        /// The guessed word
        guess: String,

        /// The secret word
        secret: String,
    },
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            word_list: WordListChoice::from_arg(&self.wordlist),
            store: if self.no_save {
                StoreChoice::Memory
            } else {
                StoreChoice::JsonFile(self.stats_file.clone())
            },
            seed: self.seed,
            log_level: self.log_level.clone(),
            log_file: self.log_file.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    init_tracing(
        &config.log_level,
        &config.log_target(matches!(command, Commands::Play)),
    )?;

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Stats => run_stats_command(&config),
        Commands::Score { guess, secret } => run_score_command(&guess, &secret),
    }
}

fn run_play_command(config: &Config) -> Result<()> {
    let session = config.build_session()?;
    run_tui(App::new(session)?)
}

fn run_simple_command(config: &Config) -> Result<()> {
    let mut session = config.build_session()?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_simple(&mut session, &mut stdin.lock(), &mut stdout)
}

fn run_stats_command(config: &Config) -> Result<()> {
    let session = config.build_session()?;
    let mut stdout = io::stdout();

    if let Some(user) = session.user() {
        writeln!(stdout, "Logged in as {}", user.username)?;
    }
    print_stats(&mut stdout, &session.stats(), None)?;
    Ok(())
}

fn run_score_command(guess: &str, secret: &str) -> Result<()> {
    let result = score_words(guess, secret)?;
    print_score(
        &mut io::stdout(),
        &result.guess,
        &result.secret,
        &result.feedback,
    )?;
    Ok(())
}
