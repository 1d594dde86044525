//! Strictly Tris - a two-player 3x3 match engine.
//!
//! The crate holds only game state and rules. Front ends drive a [`Game`]
//! through its operations and learn about changes through a [`Notifier`].
//!
//! # Example
//!
//! ```
//! use strictly_tris::{Announcement, EventLog, Game};
//!
//! let mut game = Game::new(EventLog::new());
//! game.set_players("Alice", "Bob");
//! game.reset_game();
//!
//! for index in [0, 4, 1, 3, 2] {
//!     assert_eq!(game.play_turn(index), Ok(true));
//! }
//!
//! assert!(game.is_game_over());
//! assert_eq!(
//!     game.notifier().last_announcement().map(ToString::to_string),
//!     Some("Alice has won".to_string())
//! );
//! assert_eq!(game.play_turn(5), Ok(false));
//! # let _ = Announcement::Prompt;
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
pub mod invariants;
mod notifier;
mod position;
pub mod rules;
mod types;

// Crate-level exports - Board
pub use board::{Board, CELL_COUNT};

// Crate-level exports - Errors
pub use error::{BoardError, GameError};

// Crate-level exports - Engine
pub use game::Game;

// Crate-level exports - Notifications
pub use notifier::{Announcement, EventLog, GameEvent, Notifier};

// Crate-level exports - Domain types
pub use position::Position;
pub use types::{Cell, MatchStatus, Marker, Player, Seat};
