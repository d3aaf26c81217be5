use kazuban_core::{Digit, DigitGrid, House};
use tinyvec::ArrayVec;

use super::{BoxedHintTechnique, HintTechnique};
use crate::Hint;

const NAME: &str = "hidden single";

/// Finds a digit that fits in exactly one cell of some house.
///
/// The search order is part of the contract: the outer loop walks digits 1
/// through 9, and for each digit every house in [`House::ALL`] order: all
/// rows top to bottom, then all columns left to right, then all boxes in
/// row-major box order. The first house where the digit has a unique home
/// wins, so a row-scoped deduction always beats a column- or box-scoped
/// one for the same digit.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSingle;

impl HiddenSingle {
    /// Creates a new `HiddenSingle` technique.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl HintTechnique for HiddenSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedHintTechnique {
        Box::new(*self)
    }

    fn find_hint(&self, grid: &DigitGrid) -> Option<Hint> {
        for digit in Digit::ALL {
            for house in House::ALL {
                let mut homes = ArrayVec::<[_; 9]>::new();
                for pos in house.positions() {
                    if grid.get(pos).is_none() && grid.is_placement_valid(pos, digit) {
                        homes.push(pos);
                    }
                }
                if let [position] = homes.as_slice() {
                    return Some(Hint::HiddenSingle {
                        position: *position,
                        digit,
                        house,
                    });
                }
            }
        }
        None
    }
}
