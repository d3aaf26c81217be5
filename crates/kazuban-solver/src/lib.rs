//! Hint generation for the Kazuban Sudoku engine.
//!
//! Two hint strategies are provided, and they are deliberately distinct:
//!
//! - [`HintEngine`]: the canonical, teaching-oriented strategy. It runs an
//!   ordered list of [`HintTechnique`]s (cross-hatching, then naked single,
//!   then hidden single) and returns the first technique's first finding.
//!   Each technique scans in a fixed, documented order, so a given board
//!   always yields the same hint.
//! - [`MinCandidateHints`]: a board-survey strategy. It looks for the most
//!   constrained empty cell rather than for a named technique, and falls
//!   back to a random empty cell when the board offers nothing better.
//!
//! Both produce [`Hint`] records. The game layer decides how to apply a
//! hint: placements commit a digit, candidate hints rewrite a cell's notes.
//!
//! Every search runs fresh against the grid it is handed; no solver state
//! survives between calls.
//!
//! # Examples
//!
//! ```
//! use kazuban_core::DigitGrid;
//! use kazuban_solver::{Hint, HintEngine};
//!
//! let grid: DigitGrid = "\
//!     .12345678\
//!     .........\
//!     .........\
//!     .........\
//!     .........\
//!     .........\
//!     .........\
//!     .........\
//!     .........
//! "
//! .parse()
//! .unwrap();
//!
//! let engine = HintEngine::with_all_techniques();
//! let hint = engine.find_hint(&grid).unwrap();
//! assert!(matches!(hint, Hint::CrossHatching { .. }));
//! ```

pub mod engine;
pub mod hint;
pub mod min_candidate;
pub mod strategy;
pub mod technique;

pub use self::{
    engine::HintEngine,
    hint::Hint,
    min_candidate::MinCandidateHints,
    strategy::HintStrategy,
    technique::{BoxedHintTechnique, HintTechnique},
};
