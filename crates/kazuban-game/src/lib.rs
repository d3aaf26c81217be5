//! Game session state for the Kazuban Sudoku engine.
//!
//! A [`Game`] owns the three grids that make up a play session (the
//! immutable solution, the immutable problem, and the current board) plus
//! the player's per-cell candidate notes ([`NoteGrid`]). Everything a UI
//! does to a running game goes through this crate: entering and erasing
//! digits, toggling notes, requesting and applying hints, resetting,
//! detecting errors, and checking for completion.
//!
//! The session enforces one invariant throughout: cells that are given in
//! the problem can never be modified. Operations targeting a given cell
//! return [`GameError::CannotModifyGivenCell`] and leave the state
//! untouched.
//!
//! # Examples
//!
//! ```
//! use kazuban_game::Game;
//! use kazuban_generator::{Difficulty, PuzzleGenerator};
//!
//! let puzzle = PuzzleGenerator::new(Difficulty::Easy).generate();
//! let game = Game::new(puzzle);
//! assert!(!game.is_solved());
//! ```

pub mod error;
pub mod game;
pub mod notes;

pub use self::{error::GameError, game::Game, notes::NoteGrid};
