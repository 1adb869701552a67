//! Hangman figure stages.
//!
//! Each incorrect guess adds one body part. This is the data a renderer
//! needs; drawing is left to the presentation layer.

use serde::{Deserialize, Serialize};

/// A body part of the hangman figure, in the order parts appear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FigurePart {
    Head,
    Body,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl FigurePart {
    /// All parts in drawing order.
    pub const ALL: [FigurePart; 6] = [
        FigurePart::Head,
        FigurePart::Body,
        FigurePart::LeftArm,
        FigurePart::RightArm,
        FigurePart::LeftLeg,
        FigurePart::RightLeg,
    ];
}

/// Parts visible after `incorrect` incorrect guesses.
#[must_use]
pub fn visible_parts(incorrect: u32) -> &'static [FigurePart] {
    let shown = (incorrect as usize).min(FigurePart::ALL.len());
    &FigurePart::ALL[..shown]
}
