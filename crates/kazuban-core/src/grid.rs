//! The 9×9 digit grid and its rule checks.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{Digit, DigitSet, House, Position};

/// A 9×9 grid of optional digits.
///
/// Empty cells are `None`. Three grids with this shape make up a game: the
/// immutable solution, the immutable problem (solution with clues removed),
/// and the current board the player mutates.
///
/// All rule checks use the strict convention: the queried cell is excluded
/// from its own row, column, and box. Asking "is `num` valid at this cell"
/// therefore ignores whatever the cell currently holds, and callers never
/// need to blank a cell before probing it.
///
/// # Examples
///
/// ```
/// use kazuban_core::{Digit, DigitGrid, Position};
///
/// let grid: DigitGrid = "\
///     53. .7. ...
///     6.. 195 ...
///     .98 ... .6.
///     8.. .6. ..3
///     4.. 8.3 ..1
///     7.. .2. ..6
///     .6. ... 28.
///     ... 419 ..5
///     ... .8. .79
/// "
/// .parse()
/// .unwrap();
///
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D5));
/// assert_eq!(grid.filled_count(), 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at the given position, or `None` if the cell is
    /// empty.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets or clears the cell at the given position.
    pub const fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.index()] = digit;
    }

    /// Returns the number of filled cells (0-81).
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the first empty cell in row-major order, if any.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        Position::ALL.into_iter().find(|&pos| self.get(pos).is_none())
    }

    /// Returns `true` if no *other* cell in the row, column, or box of
    /// `pos` holds `digit`.
    ///
    /// The queried cell itself is excluded, so its current content (if
    /// any) does not influence the answer.
    #[must_use]
    pub fn is_placement_valid(&self, pos: Position, digit: Digit) -> bool {
        pos.peers().all(|peer| self.get(peer) != Some(digit))
    }

    /// Returns the candidate digits for a cell: all digits not present in
    /// its row, column, or box.
    ///
    /// Recomputed from scratch on every call; nothing is cached. The
    /// cell's own content is ignored, matching
    /// [`is_placement_valid`](Self::is_placement_valid).
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        let mut candidates = DigitSet::FULL;
        for peer in pos.peers() {
            if let Some(digit) = self.get(peer) {
                candidates.remove(digit);
            }
        }
        candidates
    }

    /// Returns `true` if the grid is completely and correctly solved:
    /// every cell is filled and no value conflicts with its peers.
    ///
    /// A fully filled board with a duplicate anywhere is *not* solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        Position::ALL.into_iter().all(|pos| match self.get(pos) {
            Some(digit) => self.is_placement_valid(pos, digit),
            None => false,
        })
    }

    /// Returns `true` if the row `y` contains each digit 1-9 exactly once.
    #[must_use]
    pub fn is_row_complete(&self, y: u8) -> bool {
        self.is_house_complete(House::Row { y })
    }

    /// Returns `true` if the column `x` contains each digit 1-9 exactly once.
    #[must_use]
    pub fn is_col_complete(&self, x: u8) -> bool {
        self.is_house_complete(House::Column { x })
    }

    /// Returns `true` if the box `index` contains each digit 1-9 exactly once.
    #[must_use]
    pub fn is_box_complete(&self, index: u8) -> bool {
        self.is_house_complete(House::Box { index })
    }

    fn is_house_complete(&self, house: House) -> bool {
        let mut seen = DigitSet::EMPTY;
        for pos in house.positions() {
            let Some(digit) = self.get(pos) else {
                return false;
            };
            if !seen.insert(digit) {
                return false;
            }
        }
        seen.len() == 9
    }

    /// Returns the peers of `pos` that hold `digit`.
    ///
    /// Empty when the placement is valid; otherwise lists the cells a UI
    /// would highlight as conflicting.
    #[must_use]
    pub fn conflicting_cells(&self, pos: Position, digit: Digit) -> Vec<Position> {
        pos.peers()
            .filter(|&peer| self.get(peer) == Some(digit))
            .collect()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Option<Digit> {
        &self.cells[pos.index()]
    }
}

/// Error parsing a [`DigitGrid`] from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The string contained a character other than a digit, `.`, `_`, `0`,
    /// or whitespace.
    #[display("invalid character in grid: {found:?}")]
    InvalidCharacter {
        /// The offending character.
        found: char,
    },
    /// The string did not contain exactly 81 cells.
    #[display("expected 81 cells, found {count}")]
    WrongCellCount {
        /// The number of cell characters actually found.
        count: usize,
    },
}

impl FromStr for DigitGrid {
    type Err = GridParseError;

    /// Parses a grid from 81 cell characters.
    ///
    /// `1`-`9` are filled cells; `.`, `_`, and `0` are empty cells;
    /// whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, GridParseError> {
        let mut grid = Self::new();
        let mut count = 0;
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            #[expect(clippy::cast_possible_truncation)]
            let digit = match c {
                '.' | '_' | '0' => None,
                '1'..='9' => Digit::try_from_value(c as u8 - b'0'),
                _ => return Err(GridParseError::InvalidCharacter { found: c }),
            };
            if count < 81 {
                grid.cells[count] = digit;
            }
            count += 1;
        }
        if count != 81 {
            return Err(GridParseError::WrongCellCount { count });
        }
        Ok(grid)
    }
}

impl Display for DigitGrid {
    /// Formats the grid as an 81-character string, `.` for empty cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}
