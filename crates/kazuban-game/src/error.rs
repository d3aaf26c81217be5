//! Game operation errors.

/// An error from a game operation.
///
/// These are the only failure modes the session has; everything else is a
/// no-op or an `Option`. Malformed positions and digits are impossible by
/// construction of the core types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The targeted cell is a given (pre-filled) cell and cannot change.
    #[display("cannot modify a given cell")]
    CannotModifyGivenCell,
    /// Notes can only be edited on cells without a committed digit.
    #[display("cannot edit notes on a filled cell")]
    CannotNoteFilledCell,
}
