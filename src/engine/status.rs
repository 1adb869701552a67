//! Game status and player-facing outcome text.

use serde::{Deserialize, Serialize};

use crate::core::GameState;

/// Where a game stands. Derived from state, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Neither won nor lost.
    InProgress,
    /// Every position revealed.
    Won,
    /// Incorrect guesses reached the threshold.
    Lost,
}

impl GameStatus {
    /// Derive the status of `state` for a loss threshold of `max_incorrect`.
    ///
    /// A solved word wins even if the counter is also at the threshold.
    #[must_use]
    pub fn of(state: &GameState, max_incorrect: u32) -> Self {
        if state.is_solved() {
            GameStatus::Won
        } else if state.incorrect_guesses() >= max_incorrect {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Has the game ended?
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    /// The end-of-game message for `word`, or `None` while in progress.
    #[must_use]
    pub fn message(self, word: &str) -> Option<String> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won => Some(format!("Congrats! You guessed the word: {word}! :D")),
            GameStatus::Lost => Some(format!("You lost! The word was: {word}. :(")),
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameStatus::InProgress => "IN_PROGRESS",
            GameStatus::Won => "WON",
            GameStatus::Lost => "LOST",
        };
        f.write_str(name)
    }
}

/// Feedback for a single letter guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessFeedback {
    Correct,
    Incorrect,
}

impl From<bool> for GuessFeedback {
    fn from(correct: bool) -> Self {
        if correct {
            GuessFeedback::Correct
        } else {
            GuessFeedback::Incorrect
        }
    }
}

impl std::fmt::Display for GuessFeedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuessFeedback::Correct => f.write_str("Correct :D"),
            GuessFeedback::Incorrect => f.write_str("Incorrect :T"),
        }
    }
}
