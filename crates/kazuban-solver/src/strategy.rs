//! The strategy abstraction over the hint engines.

use kazuban_core::DigitGrid;

use crate::{Hint, HintEngine, MinCandidateHints};

/// A source of hints for a board.
///
/// Implemented by both [`HintEngine`] and [`MinCandidateHints`] so callers
/// (the game session, a UI settings menu) can switch strategies without
/// caring which one is active. The receiver is mutable because the
/// min-candidate strategy draws from an RNG for its fallback; the tiered
/// engine simply ignores the mutability.
pub trait HintStrategy {
    /// Returns the name of the strategy.
    fn strategy_name(&self) -> &'static str;

    /// Finds the next hint for the grid, if any.
    fn find_hint(&mut self, grid: &DigitGrid) -> Option<Hint>;
}

impl HintStrategy for HintEngine {
    fn strategy_name(&self) -> &'static str {
        "tiered techniques"
    }

    fn find_hint(&mut self, grid: &DigitGrid) -> Option<Hint> {
        Self::find_hint(self, grid)
    }
}

impl HintStrategy for MinCandidateHints {
    fn strategy_name(&self) -> &'static str {
        "min candidate"
    }

    fn find_hint(&mut self, grid: &DigitGrid) -> Option<Hint> {
        Self::find_hint(self, grid)
    }
}

#[cfg(test)]
mod tests {
    use kazuban_core::{Digit, DigitGrid, Position};

    use super::*;

    #[test]
    fn test_strategies_are_interchangeable() {
        let mut grid = DigitGrid::new();
        // Leave a lone naked single so both strategies agree on the answer
        for (i, digit) in Digit::ALL.into_iter().take(8).enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            grid.set(Position::new(i as u8, 0), Some(digit));
        }

        let mut strategies: Vec<Box<dyn HintStrategy>> = vec![
            Box::new(HintEngine::with_singles()),
            Box::new(MinCandidateHints::from_seed([0; 32])),
        ];

        for strategy in &mut strategies {
            let hint = strategy.find_hint(&grid).unwrap();
            assert_eq!(hint.target(), Position::new(8, 0));
            assert_eq!(hint.placement(), Some(Digit::D9));
        }
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(
            HintEngine::with_all_techniques().strategy_name(),
            "tiered techniques"
        );
        assert_eq!(
            MinCandidateHints::from_seed([0; 32]).strategy_name(),
            "min candidate"
        );
    }
}
