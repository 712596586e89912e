//! Game engine
//!
//! The per-game state machine, the keyboard status it maintains, and the
//! statistics fed by finished games.

mod error;
mod keyboard;
mod state;
mod stats;

pub use error::GameError;
pub use keyboard::KeyboardStatus;
pub use state::{
    AcceptAll, Attempt, Completion, GameState, MAX_ATTEMPTS, Outcome, Submission, WordValidator,
};
pub use stats::{Stats, StatsError};
