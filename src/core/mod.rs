//! Core engine types: letters, state, RNG, configuration, errors.
//!
//! These are the building blocks the engine is made of. None of them
//! enforce game rules on their own; `engine::GameEngine` does.

pub mod letter;
pub mod rng;
pub mod config;
pub mod state;
pub mod error;

pub use letter::{parse_word, Letter};
pub use rng::{GameRng, RandomSource, SequenceSource};
pub use config::{GameConfig, DEFAULT_CATEGORY, DEFAULT_WORDS, MAX_HINTS, MAX_INCORRECT_GUESSES, PLACEHOLDER};
pub use state::{GameState, Vowels};
pub use error::{EngineError, Result};
