//! Error types for the match engine.
//!
//! An occupied cell or a finished match is not an error: those moves are
//! reported as `Ok(false)` so a front end can ignore the click. The variants
//! here signal bugs in the caller.

use derive_more::{Display, Error};

/// Error raised by [`Board`](crate::Board) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// The index does not name one of the nine cells.
    #[display("Cell index {} is out of range (expected 0-8)", index)]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
    },
}

/// Error raised by [`Game`](crate::Game) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// `set_players` has not been called yet.
    #[display("Match not initialized: players have not been set")]
    PlayersNotSet,

    /// The board rejected the request.
    #[display("Board error: {}", _0)]
    Board(BoardError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        Self::Board(err)
    }
}
