use thiserror::Error;

/// Errors returned by engine operations.
///
/// None of these are fatal: the engine state is unchanged whenever an
/// operation is rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The cell is occupied or the placement flips nothing.
    #[error("illegal move at ({row}, {col})")]
    IllegalMove { row: u8, col: u8 },

    /// The coordinate is outside the 8x8 grid.
    #[error("position out of bounds: ({row}, {col})")]
    OutOfBounds { row: u8, col: u8 },

    /// The operation is not allowed in the current game state.
    #[error("invalid state transition: {0}")]
    InvalidStateTransition(&'static str),
}
