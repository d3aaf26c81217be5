//! Hint records produced by the strategies.

use kazuban_core::{Digit, DigitSet, House, Position};

/// A single hint, produced fresh on every request and never persisted.
///
/// A hint either names a digit to place (naked and hidden singles) or
/// points the player at a cell worth studying (cross-hatching and
/// candidate-list hints). [`Hint::placement`] distinguishes the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    /// An elimination is possible at this cell: at least one digit is
    /// ruled out by the cell's row, column, and box. The weakest hint:
    /// it does not decide the cell, only directs attention to it.
    CrossHatching {
        /// The cell worth studying.
        position: Position,
        /// How many of the nine digits its peers rule out.
        eliminated: u8,
    },
    /// The cell admits exactly one digit.
    NakedSingle {
        /// The decided cell.
        position: Position,
        /// Its only legal digit.
        digit: Digit,
    },
    /// Within one house, the digit fits in exactly one cell.
    HiddenSingle {
        /// The only cell in the house that admits the digit.
        position: Position,
        /// The digit in question.
        digit: Digit,
        /// The house the deduction was made in.
        house: House,
    },
    /// The candidate list of a well-constrained cell, from the
    /// min-candidate strategy. Not a deduction; a note-taking aid.
    Candidates {
        /// The surveyed cell.
        position: Position,
        /// Its full candidate set at the time of the survey.
        candidates: DigitSet,
    },
}

impl Hint {
    /// Returns the cell this hint is about.
    #[must_use]
    pub const fn target(&self) -> Position {
        match *self {
            Self::CrossHatching { position, .. }
            | Self::NakedSingle { position, .. }
            | Self::HiddenSingle { position, .. }
            | Self::Candidates { position, .. } => position,
        }
    }

    /// Returns the digit to commit, if this hint decides its cell.
    ///
    /// `None` for hints that only annotate (cross-hatching, candidates).
    #[must_use]
    pub const fn placement(&self) -> Option<Digit> {
        match *self {
            Self::NakedSingle { digit, .. } | Self::HiddenSingle { digit, .. } => Some(digit),
            Self::CrossHatching { .. } | Self::Candidates { .. } => None,
        }
    }

    /// Returns the name of the technique that produced this hint.
    #[must_use]
    pub const fn technique_name(&self) -> &'static str {
        match self {
            Self::CrossHatching { .. } => "cross-hatching",
            Self::NakedSingle { .. } => "naked single",
            Self::HiddenSingle { .. } => "hidden single",
            Self::Candidates { .. } => "candidates",
        }
    }
}
