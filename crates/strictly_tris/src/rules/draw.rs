//! Tie detection.

use super::super::{Board, Marker};
use super::win::completes_line;

/// Checks if the board is full with no completed line for either marker.
///
/// The engine only asks this after the win check for the mover has failed.
pub fn is_tie(board: &Board) -> bool {
    board.is_full() && !completes_line(board, Marker::X) && !completes_line(board, Marker::O)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    const X: Cell = Cell::Marked(Marker::X);
    const O: Cell = Cell::Marked(Marker::O);

    #[test]
    fn test_empty_board_not_tied() {
        assert!(!is_tie(&Board::new()));
    }

    #[test]
    fn test_full_board_without_line() {
        // X O X / X O O / O X X
        let board = Board::from([X, O, X, X, O, O, O, X, X]);
        assert!(is_tie(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_tied() {
        // X X X / O O X / X O O
        let board = Board::from([X, X, X, O, O, X, X, O, O]);
        assert!(!is_tie(&board));
    }
}
