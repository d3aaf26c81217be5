//! Difficulty tiers and their clue-removal counts.

use std::{fmt, str::FromStr};

/// A puzzle difficulty tier.
///
/// Each tier maps to a fixed number of cells removed from the solved grid.
/// More removals mean more empty cells and a harder puzzle. The mapping is
/// configuration, not an algorithm: it makes no promise about which solving
/// techniques a puzzle will require.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    /// 45 cells removed (36 clues).
    #[default]
    Easy,
    /// 50 cells removed (31 clues).
    Medium,
    /// 55 cells removed (26 clues).
    Hard,
    /// 60 cells removed (21 clues).
    Expert,
}

impl Difficulty {
    /// All tiers, easiest first.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    /// Returns the number of cells removed from the solution for this tier.
    #[must_use]
    pub const fn removal_count(self) -> usize {
        match self {
            Self::Easy => 45,
            Self::Medium => 50,
            Self::Hard => 55,
            Self::Expert => 60,
        }
    }

    /// Returns the number of clues left after removal.
    #[must_use]
    pub const fn clue_count(self) -> usize {
        81 - self.removal_count()
    }

    /// Returns the lowercase tier name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error parsing a [`Difficulty`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown difficulty: {input:?}")]
pub struct ParseDifficultyError {
    /// The unrecognized input.
    input: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, ParseDifficultyError> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseDifficultyError {
                input: s.to_owned(),
            })
    }
}
