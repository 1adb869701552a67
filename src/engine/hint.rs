//! Hint tiers and outcomes.
//!
//! Hints are granted in a fixed order. Each one costs one incorrect guess:
//!
//! | Tier | Effect                                              |
//! |------|-----------------------------------------------------|
//! | 1    | Reveals the static category fact                    |
//! | 2    | Disables half of the unused letters not in the word |
//! | 3    | Reveals the distinct vowels of the word             |
//!
//! ## Polarity
//!
//! `GameEngine::request_hint` returns `true` when the hint was **denied**
//! and `false` when it was applied. `HintOutcome::is_denied` carries the
//! same meaning. Callers that want the structured result use
//! `GameEngine::apply_hint`.

use log::{trace, warn};
use serde::{Deserialize, Serialize};

use crate::core::{GameState, Letter, RandomSource, Vowels};

/// Information handed to the player by a granted hint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hint {
    /// Tier 1: the category the word belongs to.
    Category(String),
    /// Tier 2: letters that were marked used.
    LettersDisabled(Vec<Letter>),
    /// Tier 3: distinct vowels in order of first appearance.
    Vowels(Vowels),
}

impl Hint {
    /// One-based tier of this hint.
    #[must_use]
    pub fn tier(&self) -> u32 {
        match self {
            Hint::Category(_) => 1,
            Hint::LettersDisabled(_) => 2,
            Hint::Vowels(_) => 3,
        }
    }
}

impl std::fmt::Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hint::Category(category) => {
                write!(f, "Hint 1: This object is a {} :P", category.to_lowercase())
            }
            Hint::LettersDisabled(_) => {
                f.write_str("Hint 2: Letters not in the word have been disabled!")
            }
            Hint::Vowels(vowels) => {
                f.write_str("Hint 3: The vowels in this word are: ")?;
                for vowel in vowels {
                    write!(f, "{vowel}")?;
                }
                Ok(())
            }
        }
    }
}

/// Why a hint was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HintDenial {
    /// Every hint in the budget has been used.
    BudgetExhausted,
    /// One more incorrect guess would lose the game.
    TooCloseToLoss,
    /// The game is already won or lost.
    GameOver,
}

/// Result of asking for a hint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintOutcome {
    Granted(Hint),
    Denied(HintDenial),
}

impl HintOutcome {
    /// `true` when no hint was applied.
    #[must_use]
    pub fn is_denied(&self) -> bool {
        matches!(self, HintOutcome::Denied(_))
    }

    /// The granted hint, if any.
    #[must_use]
    pub fn hint(&self) -> Option<&Hint> {
        match self {
            HintOutcome::Granted(hint) => Some(hint),
            HintOutcome::Denied(_) => None,
        }
    }
}

impl std::fmt::Display for HintOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HintOutcome::Granted(hint) => write!(f, "{hint}"),
            HintOutcome::Denied(_) => f.write_str("Hint not available"),
        }
    }
}

/// Mark `floor(n / 2)` random candidates used, where `n` counts the
/// letters that are neither used nor in the word. Returns them sorted.
///
/// Indices from `rng` are reduced modulo `n` and repeats are skipped. If
/// that leaves fewer than `floor(n / 2)` letters, the remaining candidates
/// are taken in alphabetical order until the count is met.
pub(crate) fn disable_half_candidates<R>(state: &mut GameState, rng: &mut R) -> Vec<Letter>
where
    R: RandomSource + ?Sized,
{
    let candidates = state.disable_candidates();
    let amount = candidates.len() / 2;
    trace!(
        "tier-2 hint: {} candidates, disabling {}",
        candidates.len(),
        amount
    );
    if amount == 0 {
        return Vec::new();
    }

    let mut chosen = vec![false; candidates.len()];
    let mut picked = 0;
    for index in rng.sample_indices(candidates.len(), amount) {
        if picked == amount {
            break;
        }
        let slot = &mut chosen[index % candidates.len()];
        if !*slot {
            *slot = true;
            picked += 1;
        }
    }

    if picked < amount {
        warn!(
            "random source gave {} usable indices of {}, filling in order",
            picked, amount
        );
        for slot in chosen.iter_mut().filter(|slot| !**slot).take(amount - picked) {
            *slot = true;
        }
    }

    let disabled: Vec<Letter> = candidates
        .iter()
        .zip(&chosen)
        .filter_map(|(&letter, &on)| on.then_some(letter))
        .collect();
    for &letter in &disabled {
        state.mark_used(letter);
    }
    disabled
}
