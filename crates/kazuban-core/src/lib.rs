//! Core data structures for the Kazuban Sudoku engine.
//!
//! This crate defines the vocabulary shared by the generator, the hint
//! solver, and the game session:
//!
//! - [`Digit`]: a type-safe Sudoku digit 1-9
//! - [`Position`]: a cell coordinate on the 9×9 board
//! - [`DigitSet`]: a set of digits, used for candidates and notes
//! - [`House`]: a row, column, or 3×3 box
//! - [`DigitGrid`]: the 9×9 grid of optional digits, together with the
//!   rule checks (placement validity, candidate computation, completeness)
//!
//! Candidates are always recomputed from the grid on demand. At 9×9 scale
//! the recomputation is cheap, and it keeps the grid free of cached state
//! that would have to be invalidated on every edit.
//!
//! # Examples
//!
//! ```
//! use kazuban_core::{Digit, DigitGrid, Position};
//!
//! let mut grid = DigitGrid::new();
//! let pos = Position::new(4, 4);
//! grid.set(pos, Some(Digit::D5));
//!
//! // 5 can no longer be placed anywhere else in row 4
//! assert!(!grid.is_placement_valid(Position::new(0, 4), Digit::D5));
//! // ...but the occupied cell itself is excluded from the check
//! assert!(grid.is_placement_valid(pos, Digit::D5));
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod position;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{DigitGrid, GridParseError},
    house::House,
    position::Position,
};
