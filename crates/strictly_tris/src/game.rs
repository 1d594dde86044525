//! Match engine: players, turns, and the end-of-match checks.

use super::board::Board;
use super::error::GameError;
use super::notifier::{Announcement, Notifier};
use super::rules;
use super::types::{MatchStatus, Player, Seat};
use tracing::{debug, info, instrument};

/// A single match between two players on one board.
///
/// The engine owns its [`Board`] and a [`Notifier`] that receives result
/// messages and render requests. Calls are synchronous and must not be
/// interleaved.
#[derive(Debug, Clone)]
pub struct Game<N> {
    board: Board,
    players: Option<[Player; 2]>,
    current: usize,
    status: MatchStatus,
    notifier: N,
}

impl<N: Notifier> Game<N> {
    /// Creates an engine with an empty board and no players.
    #[instrument(skip(notifier))]
    pub fn new(notifier: N) -> Self {
        Self {
            board: Board::new(),
            players: None,
            current: 0,
            status: MatchStatus::InProgress,
            notifier,
        }
    }

    /// Seats two players. Empty names become "Player 1" and "Player 2".
    ///
    /// Player 0 plays `X`, player 1 plays `O`. The turn and status are left
    /// alone; pair this with [`Game::reset_game`] to begin a match.
    #[instrument(skip(self))]
    pub fn set_players(&mut self, name0: &str, name1: &str) {
        let players = [
            Player::for_seat(Seat::First, name0),
            Player::for_seat(Seat::Second, name1),
        ];
        info!(
            player0 = %players[0].name(),
            player1 = %players[1].name(),
            "Players seated"
        );
        self.players = Some(players);
    }

    /// Returns the player to move.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PlayersNotSet`] before [`Game::set_players`].
    pub fn current_player(&self) -> Result<&Player, GameError> {
        let players = self.players.as_ref().ok_or(GameError::PlayersNotSet)?;
        Ok(&players[self.current])
    }

    /// Plays the current player's marker at `index`.
    ///
    /// Returns `Ok(false)` with no side effects when the match is over or the
    /// cell is taken. On an accepted move the notifier receives exactly one
    /// announcement (win, tie, or next turn) followed by one render request.
    ///
    /// # Errors
    ///
    /// - [`GameError::PlayersNotSet`] before [`Game::set_players`].
    /// - [`GameError::Board`] when `index` is outside 0-8 and the match is
    ///   still running.
    #[instrument(skip(self), fields(status = ?self.status, current = self.current))]
    pub fn play_turn(&mut self, index: usize) -> Result<bool, GameError> {
        let mover = self.current_player()?.clone();

        if self.status.is_terminal() {
            debug!("Match is over, move ignored");
            return Ok(false);
        }

        #[cfg(debug_assertions)]
        let before = self.board;

        if !self.board.place_mark(index, *mover.marker())? {
            debug!(index, "Cell occupied, move ignored");
            return Ok(false);
        }

        #[cfg(debug_assertions)]
        {
            let broken = super::invariants::violations(&before, &self.board);
            debug_assert!(broken.is_empty(), "Invariant violation: {:?}", broken);
        }

        if rules::completes_line(&self.board, *mover.marker()) {
            info!(winner = %mover.name(), "Match won");
            self.status = MatchStatus::Won(*mover.marker());
            self.notifier.on_result(&Announcement::won(&mover));
        } else if rules::is_tie(&self.board) {
            info!("Match tied");
            self.status = MatchStatus::Tied;
            self.notifier.on_result(&Announcement::Tied);
        } else {
            self.current = 1 - self.current;
            let next = self.current_player()?;
            debug!(next = %next.name(), "Turn passes");
            let announcement = Announcement::turn(next);
            self.notifier.on_result(&announcement);
        }

        self.notifier.on_render(&self.board);
        Ok(true)
    }

    /// Clears the board and starts a fresh match with player 0 to move.
    ///
    /// Emits no notification. Players are kept.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.board.reset();
        self.current = 0;
        self.status = MatchStatus::InProgress;
    }

    /// Checks if the match has been won or tied.
    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }
}

impl<N> Game<N> {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the match status.
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Returns both players, if seated.
    pub fn players(&self) -> Option<&[Player; 2]> {
        self.players.as_ref()
    }

    /// Returns the winner once the match is won.
    pub fn winner(&self) -> Option<&Player> {
        let MatchStatus::Won(marker) = self.status else {
            return None;
        };
        self.players
            .as_ref()?
            .iter()
            .find(|player| *player.marker() == marker)
    }

    /// Returns the notifier.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Returns the notifier mutably.
    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }
}

impl<N: Notifier + Default> Default for Game<N> {
    fn default() -> Self {
        Self::new(N::default())
    }
}
