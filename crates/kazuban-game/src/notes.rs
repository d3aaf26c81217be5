//! Per-cell candidate notes.

use std::ops::Index;

use kazuban_core::{Digit, DigitSet, Position};

/// The player's candidate notes: one [`DigitSet`] per cell.
///
/// Notes are display state, not engine state: nothing in the engine reads
/// them to make decisions. They are only meaningful on cells that are
/// editable and currently empty; the [`Game`](crate::Game) clears a cell's
/// notes whenever the cell receives a digit.
///
/// # Examples
///
/// ```
/// use kazuban_core::{Digit, Position};
/// use kazuban_game::NoteGrid;
///
/// let mut notes = NoteGrid::new();
/// let pos = Position::new(2, 3);
///
/// assert!(notes.toggle(pos, Digit::D4)); // added
/// assert!(!notes.toggle(pos, Digit::D4)); // removed again
/// assert!(notes[pos].is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteGrid {
    cells: [DigitSet; 81],
}

impl Default for NoteGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteGrid {
    /// Creates a grid with every cell's note set empty.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [DigitSet::EMPTY; 81],
        }
    }

    /// Returns the note set for a cell.
    #[must_use]
    pub const fn get(&self, pos: Position) -> DigitSet {
        self.cells[pos.index()]
    }

    /// Toggles a digit in a cell's notes, returning `true` if the digit is
    /// now present.
    pub fn toggle(&mut self, pos: Position, digit: Digit) -> bool {
        let cell = &mut self.cells[pos.index()];
        if cell.remove(digit) {
            false
        } else {
            cell.insert(digit);
            true
        }
    }

    /// Replaces a cell's note set wholesale.
    pub const fn set(&mut self, pos: Position, notes: DigitSet) {
        self.cells[pos.index()] = notes;
    }

    /// Clears a single cell's notes.
    pub const fn clear_cell(&mut self, pos: Position) {
        self.cells[pos.index()] = DigitSet::EMPTY;
    }

    /// Clears every cell's notes.
    pub fn clear_all(&mut self) {
        self.cells = [DigitSet::EMPTY; 81];
    }

    /// Returns `true` if no cell has any notes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_empty())
    }
}

impl Index<Position> for NoteGrid {
    type Output = DigitSet;

    fn index(&self, pos: Position) -> &DigitSet {
        &self.cells[pos.index()]
    }
}
