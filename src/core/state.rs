//! Per-game state.
//!
//! ## GameState
//!
//! One record per game:
//! - The hidden word (fixed for the game)
//! - Revealed positions
//! - Incorrect guess and hint counters
//! - Letters used (guessed or disabled by a hint)
//!
//! Fields are read through accessors; only the engine mutates them.
//! `letters_used` is an `im::OrdSet` so snapshots are O(1) to clone.

use im::OrdSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::letter::Letter;

/// Distinct vowels of a word in order of first appearance.
pub type Vowels = SmallVec<[Letter; 5]>;

/// State of a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    word: Vec<Letter>,

    /// `Some(letter)` once position `i` is revealed; always `word[i]`.
    revealed: Vec<Option<Letter>>,

    incorrect_guesses: u32,

    hints_used: u32,

    letters_used: OrdSet<Letter>,

    placeholder: char,

    category: String,
}

impl GameState {
    /// Create a fresh state for `word`: nothing revealed, counters at zero.
    #[must_use]
    pub fn new(word: Vec<Letter>, placeholder: char, category: impl Into<String>) -> Self {
        Self {
            revealed: vec![None; word.len()],
            word,
            incorrect_guesses: 0,
            hints_used: 0,
            letters_used: OrdSet::new(),
            placeholder,
            category: category.into(),
        }
    }

    // === Word ===

    /// The hidden word.
    #[must_use]
    pub fn word(&self) -> &[Letter] {
        &self.word
    }

    /// The hidden word as a string.
    #[must_use]
    pub fn word_string(&self) -> String {
        self.word.iter().map(|l| l.as_char()).collect()
    }

    /// Word length.
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.word.len()
    }

    /// Does the word contain `letter`?
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.word.contains(&letter)
    }

    /// Distinct vowels in order of first appearance.
    #[must_use]
    pub fn vowels(&self) -> Vowels {
        let mut vowels = Vowels::new();
        for &letter in &self.word {
            if letter.is_vowel() && !vowels.contains(&letter) {
                vowels.push(letter);
            }
        }
        vowels
    }

    // === Revealed pattern ===

    /// Per-position reveal state.
    #[must_use]
    pub fn revealed(&self) -> &[Option<Letter>] {
        &self.revealed
    }

    /// The pattern shown to the player, e.g. `"_A_A_A"`.
    #[must_use]
    pub fn revealed_pattern(&self) -> String {
        self.revealed
            .iter()
            .map(|slot| slot.map_or(self.placeholder, Letter::as_char))
            .collect()
    }

    /// Placeholder used for unrevealed positions.
    #[must_use]
    pub fn placeholder(&self) -> char {
        self.placeholder
    }

    /// True once every position is revealed.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.revealed.iter().all(Option::is_some)
    }

    /// Reveal every occurrence of `letter`. Returns how many positions matched.
    pub(crate) fn reveal(&mut self, letter: Letter) -> usize {
        let mut matched = 0;
        for (slot, &actual) in self.revealed.iter_mut().zip(&self.word) {
            if actual == letter {
                *slot = Some(letter);
                matched += 1;
            }
        }
        matched
    }

    // === Counters ===

    /// Incorrect guesses so far, hint penalties included.
    #[must_use]
    pub fn incorrect_guesses(&self) -> u32 {
        self.incorrect_guesses
    }

    /// Hints granted so far.
    #[must_use]
    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    pub(crate) fn add_incorrect(&mut self) {
        self.incorrect_guesses += 1;
    }

    pub(crate) fn add_hint(&mut self) {
        self.hints_used += 1;
    }

    // === Letters used ===

    /// Letters guessed or disabled, in alphabetical order.
    #[must_use]
    pub fn letters_used(&self) -> &OrdSet<Letter> {
        &self.letters_used
    }

    /// Has `letter` been guessed or disabled?
    #[must_use]
    pub fn is_used(&self, letter: Letter) -> bool {
        self.letters_used.contains(&letter)
    }

    /// Mark `letter` used. Returns false if it already was.
    pub(crate) fn mark_used(&mut self, letter: Letter) -> bool {
        self.letters_used.insert(letter).is_none()
    }

    /// Letters that are neither used nor in the word.
    ///
    /// These are the letters a tier-2 hint may disable.
    #[must_use]
    pub fn disable_candidates(&self) -> Vec<Letter> {
        Letter::all()
            .filter(|&l| !self.is_used(l) && !self.contains(l))
            .collect()
    }

    // === Hints ===

    /// Static fact revealed by the first hint.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }
}
