//! Hint techniques.
//!
//! Each technique searches a grid for one kind of opportunity and reports
//! the first it finds as a [`Hint`]. Techniques never mutate the grid.

use std::fmt::Debug;

use kazuban_core::DigitGrid;

pub use self::{
    cross_hatching::CrossHatching, hidden_single::HiddenSingle, naked_single::NakedSingle,
};
use crate::Hint;

mod cross_hatching;
mod hidden_single;
mod naked_single;

/// A hint-finding technique.
///
/// Implementations scan in a fixed order and return the first opportunity
/// found, so a given grid always produces the same hint.
pub trait HintTechnique: Debug {
    /// Returns the name of the technique.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the technique.
    fn clone_box(&self) -> BoxedHintTechnique;

    /// Finds this technique's first opportunity on the grid, if any.
    fn find_hint(&self, grid: &DigitGrid) -> Option<Hint>;
}

/// A boxed technique.
pub type BoxedHintTechnique = Box<dyn HintTechnique>;

impl Clone for BoxedHintTechnique {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Returns every technique, ordered from coarsest to sharpest.
///
/// Cross-hatching comes first: it fires on almost any board and serves as
/// a "look here first" teaching aid before the decisive singles techniques
/// get a turn.
#[must_use]
pub fn all_techniques() -> Vec<BoxedHintTechnique> {
    vec![
        Box::new(CrossHatching::new()),
        Box::new(NakedSingle::new()),
        Box::new(HiddenSingle::new()),
    ]
}

/// Returns only the decisive techniques: naked single, then hidden single.
///
/// Use this list when every hint should name a digit to place instead of
/// merely pointing at a cell.
#[must_use]
pub fn singles_techniques() -> Vec<BoxedHintTechnique> {
    vec![Box::new(NakedSingle::new()), Box::new(HiddenSingle::new())]
}
