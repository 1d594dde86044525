//! Win detection.

use super::super::{Board, Cell, Marker};
use tracing::instrument;

/// The 8 index triples that end a match when uniformly marked.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first line fully held by `marker`.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, marker: Marker) -> Option<[usize; 3]> {
    let cells = board.cells();
    WINNING_LINES
        .into_iter()
        .find(|line| line.iter().all(|&i| cells[i] == Cell::Marked(marker)))
}

/// Checks whether `marker` holds any complete line.
pub fn completes_line(board: &Board, marker: Marker) -> bool {
    winning_line(board, marker).is_some()
}
