//! The 3x3 grid.

use super::error::BoardError;
use super::types::{Cell, Marker};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of cells on the grid.
pub const CELL_COUNT: usize = 9;

/// 3x3 grid of cells in row-major order.
///
/// A claimed cell stays claimed until [`Board::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Returns the cell at `index`, `None` past 8.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Checks if every cell is claimed.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Claims the cell at `index` for `marker`.
    ///
    /// Returns `Ok(false)` without touching the board when the cell is
    /// already claimed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::IndexOutOfRange`] if `index` is not in 0-8.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, index: usize, marker: Marker) -> Result<bool, BoardError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(BoardError::IndexOutOfRange { index })?;

        if !cell.is_empty() {
            debug!(index, "Cell already claimed");
            return Ok(false);
        }

        *cell = Cell::Marked(marker);
        Ok(true)
    }

    /// Empties every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Formats the board as text, empty cells showing their 1-based number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => (index + 1).to_string(),
                    Cell::Marked(marker) => marker.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl From<[Cell; CELL_COUNT]> for Board {
    fn from(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.cells().iter().all(|c| c.is_empty()));
        assert!(!board.is_full());
    }

    #[test]
    fn test_second_placement_is_rejected_everywhere() {
        for index in 0..CELL_COUNT {
            let mut board = Board::new();
            assert_eq!(board.place_mark(index, Marker::X), Ok(true));
            assert_eq!(board.place_mark(index, Marker::O), Ok(false));
            assert_eq!(board.get(index), Some(Cell::Marked(Marker::X)));
        }
    }

    #[test]
    fn test_out_of_range_index() {
        let mut board = Board::new();
        assert_eq!(
            board.place_mark(9, Marker::X),
            Err(BoardError::IndexOutOfRange { index: 9 })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut board = Board::new();
        for index in 0..CELL_COUNT {
            let marker = if index % 2 == 0 { Marker::X } else { Marker::O };
            board.place_mark(index, marker).unwrap();
        }
        assert!(board.is_full());

        board.reset();
        assert_eq!(board.cells(), &[Cell::Empty; CELL_COUNT]);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.place_mark(0, Marker::X).unwrap();
        board.place_mark(4, Marker::O).unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
