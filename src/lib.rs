//! # hangman-engine
//!
//! A deterministic state engine for single-player hangman.
//!
//! ## Design Principles
//!
//! 1. **Pure State Machine**: No rendering, no I/O. Presentation code calls
//!    operations and reads state.
//!
//! 2. **Derived Status**: Won/lost is computed from state on demand, never
//!    stored, so it can't drift.
//!
//! 3. **Injectable Randomness**: Word choice and the letter-disabling hint go
//!    through `RandomSource`, so every game can be replayed from a seed.
//!
//! ## Rules
//!
//! - A word is picked from the configured list; every position starts hidden.
//! - A correct letter reveals all of its occurrences.
//! - An incorrect letter costs one guess; six incorrect guesses lose.
//! - Up to three hints, each costing one guess: the category, then half of
//!   the wrong letters disabled, then the vowels.
//!
//! ## Modules
//!
//! - `core`: Letters, state, RNG, configuration, errors
//! - `engine`: The state machine, status, hints, events, figure stages

pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    EngineError, Result,
    GameConfig, GameRng, RandomSource, SequenceSource,
    GameState, Letter, Vowels,
    MAX_HINTS, MAX_INCORRECT_GUESSES, PLACEHOLDER,
};

pub use crate::engine::{
    GameEngine, GameStatus, GuessFeedback,
    Hint, HintDenial, HintOutcome,
    GameEvent, ListenerId,
    FigurePart,
};
