//! The hangman state machine and everything derived from it.
//!
//! - `GameEngine`: start, guess, hint, query
//! - `GameStatus`: won / lost / in progress, derived from state
//! - `Hint`, `HintOutcome`: tiered hints with their denial reasons
//! - `GameEvent`, `ListenerList`: synchronous change notification
//! - `FigurePart`: which parts of the figure to draw

pub mod game;
pub mod status;
pub mod hint;
pub mod events;
pub mod figure;

pub use game::GameEngine;
pub use status::{GameStatus, GuessFeedback};
pub use hint::{Hint, HintDenial, HintOutcome};
pub use events::{GameEvent, Listener, ListenerId, ListenerList};
pub use figure::{visible_parts, FigurePart};
