//! The tiered hint engine.

use kazuban_core::DigitGrid;

use crate::{
    Hint,
    technique::{self, BoxedHintTechnique},
};

/// Runs an ordered list of techniques and returns the first hint found.
///
/// Techniques are tried strictly in list order: a later technique is only
/// consulted when every earlier one comes up empty. With the default list
/// that means cross-hatching outranks naked single, which outranks hidden
/// single.
///
/// The engine holds no board state; every call searches the grid it is
/// given from scratch.
///
/// # Examples
///
/// ```
/// use kazuban_core::DigitGrid;
/// use kazuban_solver::HintEngine;
///
/// let engine = HintEngine::with_all_techniques();
/// let empty = DigitGrid::new();
///
/// // A blank board offers nothing to hint at
/// assert_eq!(engine.find_hint(&empty), None);
/// ```
#[derive(Debug, Clone)]
pub struct HintEngine {
    techniques: Vec<BoxedHintTechnique>,
}

impl HintEngine {
    /// Creates an engine that tries `techniques` in the given order.
    #[must_use]
    pub fn new(techniques: Vec<BoxedHintTechnique>) -> Self {
        Self { techniques }
    }

    /// Creates an engine with every technique, coarsest first.
    #[must_use]
    pub fn with_all_techniques() -> Self {
        Self::new(technique::all_techniques())
    }

    /// Creates an engine with only the decisive singles techniques.
    ///
    /// Every hint from this engine names a digit to place.
    #[must_use]
    pub fn with_singles() -> Self {
        Self::new(technique::singles_techniques())
    }

    /// Returns the configured techniques in application order.
    #[must_use]
    pub fn techniques(&self) -> &[BoxedHintTechnique] {
        &self.techniques
    }

    /// Returns the first hint any technique finds, or `None` when the
    /// board offers nothing at this tier set.
    #[must_use]
    pub fn find_hint(&self, grid: &DigitGrid) -> Option<Hint> {
        self.techniques
            .iter()
            .find_map(|technique| technique.find_hint(grid))
    }
}

impl Default for HintEngine {
    fn default() -> Self {
        Self::with_all_techniques()
    }
}
