//! Error types for the game engine.
//!
//! Refusals that are part of normal play (a denied hint) are values, not
//! errors. `EngineError` covers misuse: bad input and bad configuration.

use thiserror::Error;

/// Errors returned by engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// An operation needed a game but `start_game` was never called.
    #[error("no game in progress: call start_game first")]
    NotStarted,

    /// Character is not an ASCII letter.
    #[error("invalid letter {0:?}: expected A-Z")]
    InvalidLetter(char),

    /// The configured word list has no words.
    #[error("word list is empty")]
    EmptyWordList,

    /// A configured word is empty or contains non-letters.
    #[error("invalid word {0:?}: words must be non-empty and contain only letters")]
    InvalidWord(String),

    /// Some other configuration value is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
