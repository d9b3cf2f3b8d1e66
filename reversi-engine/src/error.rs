//! Errors returned by the engine.

use derive_more::{Display, Error};

/// Why a placement was refused.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display)]
pub enum MoveRejection {
    #[display(fmt = "the cell is already occupied")]
    Occupied,
    #[display(fmt = "no opponent disks would be bracketed")]
    NoCapture,
    #[display(fmt = "the game is over")]
    GameOver,
}

/// Every way a call into the engine can fail.
///
/// All of these are caller contract violations; none are transient.
#[derive(Clone, Debug, Eq, PartialEq, Display, Error)]
pub enum GameError {
    /// The board edge length is odd or below [`crate::MIN_DIMENSION`].
    #[display(fmt = "invalid board dimension {}: must be even and at least 4", dimension)]
    InvalidDimension { dimension: usize },

    /// A coordinate lies outside `[1, dimension]`.
    #[display(
        fmt = "position ({}, {}) is outside the {}x{} board",
        row,
        column,
        dimension,
        dimension
    )]
    OutOfRange {
        row: usize,
        column: usize,
        dimension: usize,
    },

    /// A placement that the rules do not allow.
    #[display(fmt = "illegal move at ({}, {}): {}", row, column, reason)]
    IllegalMove {
        row: usize,
        column: usize,
        reason: MoveRejection,
    },

    /// The winner was requested while the game is still in progress.
    #[display(fmt = "the game is not over yet")]
    GameNotOver,
}
