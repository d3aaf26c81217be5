use kazuban_core::{DigitGrid, Position};

use super::{BoxedHintTechnique, HintTechnique};
use crate::Hint;

const NAME: &str = "naked single";

/// Finds the first empty cell whose candidate set has exactly one member.
///
/// Cells are scanned in row-major order, so the hint always lands on the
/// topmost-leftmost naked single on the board.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSingle;

impl NakedSingle {
    /// Creates a new `NakedSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl HintTechnique for NakedSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedHintTechnique {
        Box::new(*self)
    }

    fn find_hint(&self, grid: &DigitGrid) -> Option<Hint> {
        for position in Position::ALL {
            if grid.get(position).is_some() {
                continue;
            }
            if let Some(digit) = grid.candidates_at(position).as_single() {
                return Some(Hint::NakedSingle { position, digit });
            }
        }
        None
    }
}
