//! The game session.

use kazuban_core::{Digit, DigitGrid, Position};
use kazuban_generator::GeneratedPuzzle;
use kazuban_solver::{Hint, HintStrategy};

use crate::{GameError, NoteGrid};

/// A Sudoku play session.
///
/// Owns the puzzle's three grids and the player's notes:
///
/// - `solution`: the full grid the problem was carved from; immutable.
/// - `problem`: the solution with clues removed; immutable. A cell filled
///   here is a *given* and can never be edited during play.
/// - `current`: starts as a copy of `problem` and is the only grid that
///   changes as the player works.
/// - `notes`: the player's candidate marks, one set per cell.
///
/// # Examples
///
/// ```
/// use kazuban_core::Position;
/// use kazuban_game::Game;
/// use kazuban_generator::{Difficulty, PuzzleGenerator};
///
/// let puzzle = PuzzleGenerator::new(Difficulty::Easy).generate();
/// let mut game = Game::new(puzzle);
///
/// let empty = Position::ALL
///     .into_iter()
///     .find(|&pos| game.is_empty(pos))
///     .expect("an easy puzzle has empty cells");
/// let answer = game.solution().get(empty).unwrap();
/// game.set_digit(empty, answer).unwrap();
/// assert_eq!(game.value(empty), Some(answer));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    solution: DigitGrid,
    problem: DigitGrid,
    current: DigitGrid,
    notes: NoteGrid,
}

impl Game {
    /// Creates a session from a generated puzzle.
    ///
    /// The current board starts as a copy of the problem and all note sets
    /// start empty.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            solution, problem, ..
        } = puzzle;
        Self::from_parts(solution, problem)
    }

    /// Creates a session from a solution and a problem grid.
    ///
    /// Useful for restoring a saved game or building test scenarios. The
    /// problem's filled cells must agree with the solution; that property
    /// comes for free from the generator and is asserted in debug builds.
    #[must_use]
    pub fn from_parts(solution: DigitGrid, problem: DigitGrid) -> Self {
        debug_assert!(Position::ALL.into_iter().all(|pos| {
            problem.get(pos).is_none() || problem.get(pos) == solution.get(pos)
        }));
        let current = problem.clone();
        Self {
            solution,
            problem,
            current,
            notes: NoteGrid::new(),
        }
    }

    /// Returns the solution grid.
    #[must_use]
    pub const fn solution(&self) -> &DigitGrid {
        &self.solution
    }

    /// Returns the problem grid (the givens).
    #[must_use]
    pub const fn problem(&self) -> &DigitGrid {
        &self.problem
    }

    /// Returns the current board.
    #[must_use]
    pub const fn current(&self) -> &DigitGrid {
        &self.current
    }

    /// Returns the player's notes.
    #[must_use]
    pub const fn notes(&self) -> &NoteGrid {
        &self.notes
    }

    /// Returns the digit currently at `pos`, given or player-entered.
    #[must_use]
    pub const fn value(&self, pos: Position) -> Option<Digit> {
        self.current.get(pos)
    }

    /// Returns `true` if `pos` is a given cell.
    #[must_use]
    pub const fn is_given(&self, pos: Position) -> bool {
        self.problem.get(pos).is_some()
    }

    /// Returns `true` if the cell at `pos` currently holds no digit.
    #[must_use]
    pub const fn is_empty(&self, pos: Position) -> bool {
        self.current.get(pos).is_none()
    }

    /// Enters a digit at `pos`, replacing any previous player digit and
    /// clearing the cell's notes.
    ///
    /// Conflicting entries are allowed; the board is the player's to get
    /// wrong, and [`error_cells`](Self::error_cells) reports the damage.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if `pos` is a given.
    pub fn set_digit(&mut self, pos: Position, digit: Digit) -> Result<(), GameError> {
        if self.is_given(pos) {
            return Err(GameError::CannotModifyGivenCell);
        }
        self.current.set(pos, Some(digit));
        self.notes.clear_cell(pos);
        Ok(())
    }

    /// Erases the player's digit and notes at `pos`.
    ///
    /// Erasing an already-empty cell is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if `pos` is a given.
    pub fn clear_cell(&mut self, pos: Position) -> Result<(), GameError> {
        if self.is_given(pos) {
            return Err(GameError::CannotModifyGivenCell);
        }
        self.current.set(pos, None);
        self.notes.clear_cell(pos);
        Ok(())
    }

    /// Toggles a note digit at `pos`, returning `true` if the note is now
    /// present.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if `pos` is a given,
    /// or [`GameError::CannotNoteFilledCell`] if the cell already holds a
    /// player digit.
    pub fn toggle_note(&mut self, pos: Position, digit: Digit) -> Result<bool, GameError> {
        if self.is_given(pos) {
            return Err(GameError::CannotModifyGivenCell);
        }
        if self.current.get(pos).is_some() {
            return Err(GameError::CannotNoteFilledCell);
        }
        Ok(self.notes.toggle(pos, digit))
    }

    /// Returns `true` if `digit` would be legal at `pos` on the current
    /// board, ignoring whatever the cell itself holds.
    #[must_use]
    pub fn is_placement_valid(&self, pos: Position, digit: Digit) -> bool {
        self.current.is_placement_valid(pos, digit)
    }

    /// Returns `true` if the current board is completely and correctly
    /// filled.
    ///
    /// Any valid completion counts, not only the generator's solution,
    /// since clue removal does not guarantee uniqueness.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.current.is_solved()
    }

    /// Returns the number of filled cells on the current board.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.current.filled_count()
    }

    /// Restores the board to the problem and wipes all notes.
    ///
    /// Resetting is idempotent: no matter what the player has done, the
    /// result equals a freshly created session.
    pub fn reset(&mut self) {
        self.current = self.problem.clone();
        self.notes.clear_all();
    }

    /// Fills the board with the generator's solution and wipes all notes.
    pub fn reveal_solution(&mut self) {
        self.current = self.solution.clone();
        self.notes.clear_all();
    }

    /// Runs a hint strategy against the current board.
    pub fn find_hint<S>(&self, strategy: &mut S) -> Option<Hint>
    where
        S: HintStrategy + ?Sized,
    {
        strategy.find_hint(&self.current)
    }

    /// Applies a hint to the session.
    ///
    /// Placement hints (naked and hidden singles) commit their digit and
    /// clear the cell's notes. Cross-hatching replaces the cell's notes
    /// with its freshly computed candidate set. Candidate surveys replace
    /// the notes with the recorded set.
    ///
    /// Fresh hints only ever target empty, editable cells, so application
    /// cannot fail; a stale hint aimed at a given cell is ignored.
    pub fn apply_hint(&mut self, hint: &Hint) {
        let target = hint.target();
        if self.is_given(target) {
            return;
        }
        match *hint {
            Hint::NakedSingle { position, digit } | Hint::HiddenSingle { position, digit, .. } => {
                self.current.set(position, Some(digit));
                self.notes.clear_cell(position);
            }
            Hint::CrossHatching { position, .. } => {
                self.notes.set(position, self.current.candidates_at(position));
            }
            Hint::Candidates {
                position,
                candidates,
            } => {
                self.notes.set(position, candidates);
            }
        }
    }

    /// Returns the player-entered cells whose digit conflicts with a peer,
    /// in row-major order.
    ///
    /// Given cells are never reported, even when a player entry conflicts
    /// with them; the player's cell is the one at fault.
    #[must_use]
    pub fn error_cells(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|&pos| {
                !self.is_given(pos)
                    && self
                        .current
                        .get(pos)
                        .is_some_and(|digit| !self.current.is_placement_valid(pos, digit))
            })
            .collect()
    }

    /// Erases every conflicting player entry, returning how many cells
    /// were cleared.
    pub fn clear_errors(&mut self) -> usize {
        let errors = self.error_cells();
        for &pos in &errors {
            self.current.set(pos, None);
        }
        errors.len()
    }
}

#[cfg(test)]
mod tests {
    use kazuban_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
    use kazuban_solver::{HintEngine, MinCandidateHints};

    use super::*;

    const SOLVED: &str = "\
        534678912\
        672195348\
        198342567\
        859761423\
        426853791\
        713924856\
        961537284\
        287419635\
        345286179";

    fn solution_grid() -> DigitGrid {
        SOLVED.parse().expect("valid solution grid")
    }

    /// The solution with (0, 0) and (1, 0) blanked: two editable cells
    /// whose answers are 5 and 3.
    fn two_blank_game() -> Game {
        let solution = solution_grid();
        let mut problem = solution.clone();
        problem.set(Position::new(0, 0), None);
        problem.set(Position::new(1, 0), None);
        Game::from_parts(solution, problem)
    }

    fn generated_game(phrase: &str) -> Game {
        let puzzle =
            PuzzleGenerator::new(Difficulty::Easy).generate_with_seed(PuzzleSeed::from_phrase(phrase));
        Game::new(puzzle)
    }

    #[test]
    fn test_new_game_copies_problem() {
        let game = generated_game("new-game");
        assert_eq!(game.current(), game.problem());
        assert!(game.notes().is_empty());
        assert!(!game.is_solved());
    }

    #[test]
    fn test_given_cells_are_immutable() {
        let mut game = generated_game("givens");
        let given = Position::ALL
            .into_iter()
            .find(|&pos| game.is_given(pos))
            .expect("puzzle has givens");

        assert_eq!(
            game.set_digit(given, Digit::D1),
            Err(GameError::CannotModifyGivenCell)
        );
        assert_eq!(game.clear_cell(given), Err(GameError::CannotModifyGivenCell));
        assert_eq!(
            game.toggle_note(given, Digit::D1),
            Err(GameError::CannotModifyGivenCell)
        );

        // After a burst of legal edits, every given still matches the problem
        for pos in Position::ALL {
            if !game.is_given(pos) {
                game.set_digit(pos, Digit::D9).unwrap();
            }
        }
        for pos in Position::ALL {
            if let Some(digit) = game.problem().get(pos) {
                assert_eq!(game.value(pos), Some(digit));
            }
        }
    }

    #[test]
    fn test_set_digit_clears_notes() {
        let mut game = two_blank_game();
        let pos = Position::new(0, 0);

        game.toggle_note(pos, Digit::D5).unwrap();
        game.toggle_note(pos, Digit::D7).unwrap();
        assert_eq!(game.notes()[pos].len(), 2);

        game.set_digit(pos, Digit::D5).unwrap();
        assert!(game.notes()[pos].is_empty());
        assert_eq!(game.value(pos), Some(Digit::D5));
    }

    #[test]
    fn test_toggle_note_rejected_on_filled_cell() {
        let mut game = two_blank_game();
        let pos = Position::new(0, 0);

        game.set_digit(pos, Digit::D5).unwrap();
        assert_eq!(
            game.toggle_note(pos, Digit::D1),
            Err(GameError::CannotNoteFilledCell)
        );

        game.clear_cell(pos).unwrap();
        assert!(game.toggle_note(pos, Digit::D1).unwrap());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut game = generated_game("reset");
        let fresh = game.clone();

        for pos in Position::ALL {
            if !game.is_given(pos) {
                game.set_digit(pos, Digit::D1).unwrap();
            }
        }
        let empty = Position::ALL
            .into_iter()
            .find(|&pos| !game.is_given(pos))
            .unwrap();
        game.clear_cell(empty).unwrap();
        game.toggle_note(empty, Digit::D2).unwrap();

        game.reset();
        assert_eq!(game, fresh);

        // Resetting a pristine game changes nothing
        game.reset();
        assert_eq!(game, fresh);
    }

    #[test]
    fn test_reveal_solution() {
        let mut game = generated_game("reveal");
        game.reveal_solution();
        assert!(game.is_solved());
        assert_eq!(game.current(), game.solution());
        assert!(game.notes().is_empty());
    }

    #[test]
    fn test_placement_check_scenario() {
        // Blanks at (0, 0) and (1, 0); answers 5 and 3. Neither digit
        // occurs elsewhere in row 0, column 0, or box 0, so both are
        // valid placements; 3 collides at (0, 0) via column 0's 3
        let mut game = two_blank_game();

        assert!(game.is_placement_valid(Position::new(0, 0), Digit::D5));
        assert!(!game.is_placement_valid(Position::new(0, 0), Digit::D3));
        assert!(game.is_placement_valid(Position::new(1, 0), Digit::D3));

        // Enter 5 at (0, 0): placing 5 at (1, 0) is now a row conflict
        game.set_digit(Position::new(0, 0), Digit::D5).unwrap();
        assert!(!game.is_placement_valid(Position::new(1, 0), Digit::D5));

        // Complete the board; it is solved and no hint remains
        game.set_digit(Position::new(1, 0), Digit::D3).unwrap();
        assert!(game.is_solved());
        assert_eq!(game.find_hint(&mut HintEngine::with_all_techniques()), None);
        assert_eq!(game.find_hint(&mut MinCandidateHints::from_seed([1; 32])), None);
    }

    #[test]
    fn test_solved_rejects_conflicting_completion() {
        let mut game = two_blank_game();
        // Fill both blanks with the same digit: the board is full but wrong
        game.set_digit(Position::new(0, 0), Digit::D3).unwrap();
        game.set_digit(Position::new(1, 0), Digit::D3).unwrap();
        assert_eq!(game.filled_count(), 81);
        assert!(!game.is_solved());
    }

    #[test]
    fn test_apply_placement_hint() {
        let mut game = two_blank_game();
        let pos = Position::new(0, 0);
        game.toggle_note(pos, Digit::D5).unwrap();

        let hint = Hint::NakedSingle {
            position: pos,
            digit: Digit::D5,
        };
        game.apply_hint(&hint);

        assert_eq!(game.value(pos), Some(Digit::D5));
        assert!(game.notes()[pos].is_empty());
    }

    #[test]
    fn test_apply_cross_hatching_hint_fills_notes() {
        let mut game = two_blank_game();
        let pos = Position::new(0, 0);

        let hint = Hint::CrossHatching {
            position: pos,
            eliminated: 8,
        };
        game.apply_hint(&hint);

        // The cell stays empty; its notes become the candidate set
        assert_eq!(game.value(pos), None);
        assert_eq!(game.notes()[pos], game.current().candidates_at(pos));
        assert!(game.notes()[pos].contains(Digit::D5));
    }

    #[test]
    fn test_apply_candidates_hint_overwrites_notes() {
        let mut game = two_blank_game();
        let pos = Position::new(1, 0);
        game.toggle_note(pos, Digit::D9).unwrap();

        let candidates = kazuban_core::DigitSet::from_iter([Digit::D3, Digit::D5]);
        game.apply_hint(&Hint::Candidates {
            position: pos,
            candidates,
        });

        assert_eq!(game.value(pos), None);
        assert_eq!(game.notes()[pos], candidates);
    }

    #[test]
    fn test_hint_strategy_end_to_end() {
        // Both blanks are naked singles; applying hints until the engine
        // runs dry must finish the board
        let mut game = two_blank_game();
        let mut engine = HintEngine::with_singles();

        while let Some(hint) = game.find_hint(&mut engine) {
            game.apply_hint(&hint);
        }
        assert!(game.is_solved());
    }

    #[test]
    fn test_error_cells_and_clear_errors() {
        let mut game = two_blank_game();

        // A correct entry is not an error
        game.set_digit(Position::new(0, 0), Digit::D5).unwrap();
        assert!(game.error_cells().is_empty());

        // 3 at (0, 0) conflicts with column 0's existing 3
        game.set_digit(Position::new(0, 0), Digit::D3).unwrap();
        assert_eq!(game.error_cells(), vec![Position::new(0, 0)]);

        assert_eq!(game.clear_errors(), 1);
        assert_eq!(game.value(Position::new(0, 0)), None);
        assert!(game.error_cells().is_empty());
    }

    #[test]
    fn test_error_cells_skip_givens() {
        let mut game = two_blank_game();
        // Duplicate a given's digit into the same row: only the player's
        // cell is reported
        game.set_digit(Position::new(0, 0), Digit::D4).unwrap();
        assert_eq!(game.error_cells(), vec![Position::new(0, 0)]);
    }
}
