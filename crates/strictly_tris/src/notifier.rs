//! Outbound notifications from the engine to a presentation layer.
//!
//! [`Game`](crate::Game) never talks to a renderer directly. It calls a
//! [`Notifier`] it owns, and the front end decides what to do with the calls.

use super::board::Board;
use super::types::{Marker, Player};
use serde::{Deserialize, Serialize};
use std::sync::mpsc::Sender;
use tracing::{instrument, warn};

/// Informational text for the result line of a front end.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Announcement {
    /// A player completed a line.
    Won {
        /// Winner's name.
        name: String,
    },
    /// The grid filled up without a winner.
    Tied,
    /// Whose move it is.
    Turn {
        /// Name of the player to move.
        name: String,
        /// That player's marker.
        marker: Marker,
    },
    /// Waiting for names before a match starts.
    Prompt,
}

impl Announcement {
    /// Announces that `player` won.
    pub fn won(player: &Player) -> Self {
        Self::Won {
            name: player.name().clone(),
        }
    }

    /// Announces that it is `player`'s turn.
    pub fn turn(player: &Player) -> Self {
        Self::Turn {
            name: player.name().clone(),
            marker: *player.marker(),
        }
    }
}

impl std::fmt::Display for Announcement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Announcement::Won { name } => write!(f, "{} has won", name),
            Announcement::Tied => write!(f, "It's a tie! No winner."),
            Announcement::Turn { name, marker } => write!(f, "Turn of {} ({})", name, marker),
            Announcement::Prompt => write!(f, "Enter the player names and press Enter to start"),
        }
    }
}

/// Receiver of engine notifications.
pub trait Notifier {
    /// A new message for the result line.
    fn on_result(&mut self, announcement: &Announcement);

    /// The board changed and should be redrawn from `board`.
    fn on_render(&mut self, board: &Board);
}

/// Discards every notification.
impl Notifier for () {
    fn on_result(&mut self, _announcement: &Announcement) {}

    fn on_render(&mut self, _board: &Board) {}
}

/// A notification in value form, for channels and logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Mirrors [`Notifier::on_result`].
    Result(Announcement),
    /// Mirrors [`Notifier::on_render`] with a snapshot of the board.
    Render(Board),
}

/// Forwards notifications over a channel.
///
/// A hung-up receiver is logged and otherwise ignored: the engine keeps
/// running without a front end.
impl Notifier for Sender<GameEvent> {
    #[instrument(skip(self))]
    fn on_result(&mut self, announcement: &Announcement) {
        if self.send(GameEvent::Result(announcement.clone())).is_err() {
            warn!("Event receiver disconnected, dropping result");
        }
    }

    #[instrument(skip_all)]
    fn on_render(&mut self, board: &Board) {
        if self.send(GameEvent::Render(*board)).is_err() {
            warn!("Event receiver disconnected, dropping render");
        }
    }
}

/// Records every notification in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events, oldest first.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Only the announcements, oldest first.
    pub fn announcements(&self) -> impl Iterator<Item = &Announcement> {
        self.events.iter().filter_map(|event| match event {
            GameEvent::Result(announcement) => Some(announcement),
            GameEvent::Render(_) => None,
        })
    }

    /// The most recent announcement.
    pub fn last_announcement(&self) -> Option<&Announcement> {
        self.announcements().last()
    }

    /// Removes and returns everything recorded so far.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Notifier for EventLog {
    fn on_result(&mut self, announcement: &Announcement) {
        self.events.push(GameEvent::Result(announcement.clone()));
    }

    fn on_render(&mut self, board: &Board) {
        self.events.push(GameEvent::Render(*board));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_announcement_text() {
        let alice = Player::new("Alice", Marker::X);
        assert_eq!(Announcement::won(&alice).to_string(), "Alice has won");
        assert_eq!(Announcement::turn(&alice).to_string(), "Turn of Alice (X)");
        assert_eq!(Announcement::Tied.to_string(), "It's a tie! No winner.");
    }

    #[test]
    fn test_channel_forwards_in_order() {
        let (mut tx, rx) = mpsc::channel();
        tx.on_result(&Announcement::Prompt);
        tx.on_render(&Board::new());

        let received: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            received,
            vec![
                GameEvent::Result(Announcement::Prompt),
                GameEvent::Render(Board::new()),
            ]
        );
    }

    #[test]
    fn test_channel_survives_dropped_receiver() {
        let (mut tx, rx) = mpsc::channel::<GameEvent>();
        drop(rx);
        tx.on_result(&Announcement::Tied);
        tx.on_render(&Board::new());
    }

    #[test]
    fn test_event_log_drain() {
        let mut log = EventLog::new();
        log.on_result(&Announcement::Tied);
        log.on_render(&Board::new());
        assert_eq!(log.last_announcement(), Some(&Announcement::Tied));
        assert_eq!(log.drain().len(), 2);
        assert!(log.events().is_empty());
    }

    #[test]
    fn test_event_serializes() {
        let json = serde_json::to_string(&GameEvent::Result(Announcement::Tied)).unwrap();
        assert_eq!(json, r#"{"Result":"Tied"}"#);
    }
}
