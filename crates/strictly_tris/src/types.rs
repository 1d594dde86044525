//! Core domain types for a tris match.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Mark a player leaves on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Marker {
    /// Held by player 1, who always moves first.
    X,
    /// Held by player 2.
    O,
}

/// A single cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has claimed the cell yet.
    #[default]
    Empty,
    /// Claimed by the holder of the marker.
    Marked(Marker),
}

impl Cell {
    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Marked(marker) => Some(marker),
        }
    }

    /// Returns true if nobody has claimed the cell.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// One of the two places at the table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Seat {
    /// Plays `X` and moves first.
    First,
    /// Plays `O`.
    Second,
}

impl Seat {
    /// Name used when the player leaves theirs empty.
    pub fn default_name(self) -> &'static str {
        match self {
            Seat::First => "Player 1",
            Seat::Second => "Player 2",
        }
    }

    /// Marker held from this seat.
    pub fn marker(self) -> Marker {
        match self {
            Seat::First => Marker::X,
            Seat::Second => Marker::O,
        }
    }
}

/// A participant in a match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    name: String,
    /// Marker fixed for the whole match.
    marker: Marker,
}

impl Player {
    /// Creates a player with the given name and marker.
    #[instrument(skip(name))]
    pub fn new(name: impl Into<String>, marker: Marker) -> Self {
        Self {
            name: name.into(),
            marker,
        }
    }

    /// Creates the player sitting in `seat`.
    ///
    /// An empty name falls back to the seat's default name. Other names,
    /// whitespace included, are kept as given.
    #[instrument]
    pub fn for_seat(seat: Seat, name: &str) -> Self {
        let name = if name.is_empty() {
            seat.default_name()
        } else {
            name
        };
        Self::new(name, seat.marker())
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.marker)
    }
}

/// Where a match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MatchStatus {
    /// Moves are accepted.
    #[default]
    InProgress,
    /// The holder of the marker completed a line.
    Won(Marker),
    /// The grid filled up without a completed line.
    Tied,
}

impl MatchStatus {
    /// Returns true for `Won` and `Tied`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, MatchStatus::InProgress)
    }
}
