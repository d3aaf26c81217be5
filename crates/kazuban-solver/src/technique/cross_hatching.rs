use kazuban_core::{DigitGrid, Position};

use super::{BoxedHintTechnique, HintTechnique};
use crate::Hint;

const NAME: &str = "cross-hatching";

/// Finds the first cell where scanning the row, column, and box eliminates
/// at least one digit.
///
/// This is the elementary technique a beginner is taught first: look at a
/// cell, strike out every digit already visible from it. It deliberately
/// fires even when many candidates remain, which makes it the chattiest
/// technique; it exists to direct attention, not to decide cells.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrossHatching;

impl CrossHatching {
    /// Creates a new `CrossHatching` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl HintTechnique for CrossHatching {
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
            let remaining = grid.candidates_at(position).len();
            if remaining < 9 {
                #[expect(clippy::cast_possible_truncation)]
                return Some(Hint::CrossHatching {
                    position,
                    eliminated: (9 - remaining) as u8,
                });
            }
        }
        None
    }
}
