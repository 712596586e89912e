//! Tracing subscriber setup
//!
//! The TUI owns the terminal, so logs go to stderr only in line-oriented modes.
//! Otherwise they go to a file or nowhere.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable that overrides the configured filter
pub const LOG_ENV: &str = "WORDLE_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Discard,
}

/// Filter from `WORDLE_LOG` if set and valid, else `level`, else `warn`
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is already set.
pub fn init_tracing(level: &str, target: &LogTarget) -> Result<()> {
    match target {
        LogTarget::Discard => {}
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(env_filter(level))
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .try_init()?;
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;

            tracing_subscriber::registry()
                .with(env_filter(level))
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_target(true),
                )
                .try_init()?;
        }
    }
    Ok(())
}
