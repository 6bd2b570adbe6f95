//! Reasons a placement, move or stored game is refused.
//!
//! Placement and move errors are never fatal: each one means "nothing
//! changed, try another cell or restart".

use crate::types::{GameState, Player};

/// Error returned when a mark cannot be placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlaceError {
    /// Row or column lies outside the 3x3 grid.
    #[display("Cell ({row}, {col}) is outside the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell ({row}, {col}) is already occupied")]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

/// Error returned when the game rejects a move.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
)]
pub enum MoveError {
    /// The game has already ended.
    #[display("Game is already over ({state})")]
    GameOver {
        /// Terminal state the game is in.
        state: GameState,
    },

    /// The board refused the placement.
    #[display("{_0}")]
    #[from]
    Place(#[error(source)] PlaceError),
}

/// Error returned when a stored game does not describe a reachable position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SnapshotError {
    /// X must have the same number of marks as O, or one more.
    #[display("Board has {x} X marks and {o} O marks")]
    MarkCounts {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },

    /// Both players have a completed line.
    #[display("Both players have a completed line")]
    BothWin,

    /// The stored outcome is not the one the board implies.
    #[display("Stored state {stored} does not match the board ({derived})")]
    StateMismatch {
        /// Outcome found in the snapshot.
        stored: GameState,
        /// Outcome the board implies.
        derived: GameState,
    },

    /// The stored player to move is not the one the mark counts imply.
    #[display("{current} cannot be the player to move on this board")]
    TurnMismatch {
        /// Player found in the snapshot.
        current: Player,
    },
}
