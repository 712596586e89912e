use thiserror::Error;

/// Rejected game commands
///
/// All of these are recoverable user-input conditions. A command that returns one
/// of them has left the game untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("The game is over")]
    GameOver,
    #[error("The guess is already five letters")]
    InputFull,
    #[error("Nothing to delete")]
    InputEmpty,
    #[error("'{0}' is not a letter")]
    NotALetter(char),
    #[error("Word too short ({len} of 5 letters)")]
    WordTooShort { len: usize },
    #[error("{0} is not in the word list")]
    NotInWordList(String),
}
