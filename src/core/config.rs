//! Game configuration.
//!
//! The word list, the loss threshold, the hint budget, the placeholder
//! and the tier-1 category fact are the only tunable parameters. Each
//! defaults to a named constant.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};
use super::letter::{parse_word, Letter};

/// Incorrect guesses (hint penalties included) that end the game.
pub const MAX_INCORRECT_GUESSES: u32 = 6;

/// Hints available per game.
pub const MAX_HINTS: u32 = 3;

/// Masking symbol for unrevealed positions.
pub const PLACEHOLDER: char = '_';

/// Category revealed by the first hint.
pub const DEFAULT_CATEGORY: &str = "Fruit";

/// Built-in word list.
pub const DEFAULT_WORDS: &[&str] = &["apple", "banana", "cherry", "date", "elderberry"];

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Candidate answers. Case is normalized when a word is picked.
    pub words: Vec<String>,

    /// Loss threshold.
    pub max_incorrect_guesses: u32,

    /// Hint budget per game.
    pub max_hints: u32,

    /// Masking symbol. Must not be a letter.
    pub placeholder: char,

    /// Static fact revealed by the first hint.
    pub category: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| (*w).to_string()).collect(),
            max_incorrect_guesses: MAX_INCORRECT_GUESSES,
            max_hints: MAX_HINTS,
            placeholder: PLACEHOLDER,
            category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the word list.
    #[must_use]
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Set the loss threshold.
    #[must_use]
    pub fn with_max_incorrect_guesses(mut self, max: u32) -> Self {
        self.max_incorrect_guesses = max;
        self
    }

    /// Set the hint budget.
    #[must_use]
    pub fn with_max_hints(mut self, max: u32) -> Self {
        self.max_hints = max;
        self
    }

    /// Set the placeholder character.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Set the category revealed by the first hint.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if self.words.is_empty() {
            return Err(EngineError::EmptyWordList);
        }
        for word in &self.words {
            parse_word(word)?;
        }
        if self.max_incorrect_guesses == 0 {
            return Err(EngineError::InvalidConfig(
                "max_incorrect_guesses must be at least 1".into(),
            ));
        }
        if Letter::new(self.placeholder).is_ok() {
            return Err(EngineError::InvalidConfig(format!(
                "placeholder {:?} must not be a letter",
                self.placeholder
            )));
        }
        Ok(())
    }

    /// Validate, then parse every word into uppercase letters.
    pub fn parse_words(&self) -> Result<Vec<Vec<Letter>>> {
        self.validate()?;
        self.words.iter().map(|word| parse_word(word)).collect()
    }
}
