//! Headless play-through of a fixed move list.

use anyhow::{Context, Result};
use std::io::Write;
use strictly_tris::{Announcement, EventLog, Game, GameEvent, MatchStatus};
use tracing::{debug, info, instrument, warn};

/// Plays `moves` in order and writes every announcement to `out`.
///
/// Occupied cells and moves after the end of the match are reported and
/// skipped. An index outside 0-8 aborts the replay with an error. The final
/// board is written last.
#[instrument(skip(out))]
pub fn replay<W: Write>(
    out: &mut W,
    player1: &str,
    player2: &str,
    moves: &[usize],
) -> Result<MatchStatus> {
    let mut game = Game::new(EventLog::new());
    game.set_players(player1.trim(), player2.trim());
    game.reset_game();

    let first = game.current_player()?;
    writeln!(out, "{}", Announcement::turn(first))?;

    for (turn, &index) in moves.iter().enumerate() {
        let over_before = game.is_game_over();
        let accepted = game
            .play_turn(index)
            .with_context(|| format!("move #{} (cell {}) is invalid", turn + 1, index))?;

        if !accepted {
            let reason = if over_before {
                "the match is over"
            } else {
                "the cell is taken"
            };
            warn!(index, reason, "Move rejected");
            writeln!(out, "Move #{} at cell {} rejected: {}", turn + 1, index, reason)?;
            continue;
        }

        for event in game.notifier_mut().drain() {
            match event {
                GameEvent::Result(announcement) => writeln!(out, "{}", announcement)?,
                GameEvent::Render(board) => debug!(board = %board.display(), "Render"),
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", game.board().display())?;

    info!(status = ?game.status(), "Replay finished");
    Ok(game.status())
}
