//! Wordle Session
//!
//! A Wordle game engine: duplicate-aware guess scoring, a per-game state machine,
//! keyboard hints, streak statistics and a login-gated session with saved progress.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_session::core::{Feedback, Word};
//!
//! let guess = Word::new("speed").unwrap();
//! let secret = Word::new("erase").unwrap();
//!
//! let feedback = Feedback::evaluate(&guess, &secret);
//! println!("{feedback} {}", feedback.to_emoji()); // Y-YY-
//! ```

// Core domain types
pub mod core;

// Game rules: state machine, keyboard, statistics
pub mod game;

// Word lists and secret selection
pub mod wordlists;

// Login, active game and persistence
pub mod session;

// Runtime configuration
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
