//! The min-candidate hint strategy.

use kazuban_core::{DigitGrid, DigitSet, Position};
use rand::{SeedableRng as _, seq::IndexedRandom as _};
use rand_pcg::Pcg64;

use crate::Hint;

/// Surveys the whole board for the most constrained empty cell.
///
/// This strategy answers "where should I work next?" rather than "which
/// technique applies?". Its scan over all empty cells, in row-major order:
///
/// 1. The first cell with exactly one candidate is returned immediately as
///    a [`Hint::NakedSingle`].
/// 2. Otherwise the cell with the fewest candidates (ties broken by scan
///    order) is returned as a [`Hint::Candidates`] survey.
/// 3. If no cell was tracked (which takes a board where every empty cell
///    has lost all nine candidates), a uniformly random empty cell's
///    candidate list is returned instead.
///
/// This is an alternative to [`HintEngine`](crate::HintEngine), not a
/// variant of it; the two deliberately disagree on what a hint is for.
///
/// # Examples
///
/// ```
/// use kazuban_core::DigitGrid;
/// use kazuban_solver::MinCandidateHints;
///
/// let mut strategy = MinCandidateHints::new();
/// assert!(strategy.find_hint(&DigitGrid::new()).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct MinCandidateHints {
    rng: Pcg64,
}

impl MinCandidateHints {
    /// Creates a strategy with a randomly seeded fallback RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::from_seed(rand::random())
    }

    /// Creates a strategy whose random fallback is reproducible.
    #[must_use]
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            rng: Pcg64::from_seed(seed),
        }
    }

    /// Finds the next cell worth working on, per the strategy's survey.
    ///
    /// Returns `None` only when the board has no empty cells.
    pub fn find_hint(&mut self, grid: &DigitGrid) -> Option<Hint> {
        let empty_cells: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|&pos| grid.get(pos).is_none())
            .collect();
        if empty_cells.is_empty() {
            return None;
        }

        let mut best: Option<(Position, DigitSet)> = None;
        for &position in &empty_cells {
            let candidates = grid.candidates_at(position);
            if let Some(digit) = candidates.as_single() {
                return Some(Hint::NakedSingle { position, digit });
            }
            let beats_best = best.is_none_or(|(_, held)| candidates.len() < held.len());
            if candidates.len() > 1 && beats_best {
                best = Some((position, candidates));
            }
        }

        if let Some((position, candidates)) = best {
            return Some(Hint::Candidates {
                position,
                candidates,
            });
        }

        // Every empty cell has an empty candidate set; pick one anyway so
        // the caller still gets a cell to show
        empty_cells
            .choose(&mut self.rng)
            .map(|&position| Hint::Candidates {
                position,
                candidates: grid.candidates_at(position),
            })
    }
}

impl Default for MinCandidateHints {
    fn default() -> Self {
        Self::new()
    }
}
