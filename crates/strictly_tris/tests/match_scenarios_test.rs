//! End-to-end match scenarios driven through the public engine API.

use strictly_tris::{
    Announcement, Board, CELL_COUNT, Cell, EventLog, Game, GameEvent, MatchStatus, Marker,
    rules::WINNING_LINES,
};

fn new_match(name0: &str, name1: &str) -> Game<EventLog> {
    let mut game = Game::new(EventLog::new());
    game.set_players(name0, name1);
    game.reset_game();
    game
}

/// Two cells off `line` for the losing side.
fn filler_moves(line: [usize; 3]) -> Vec<usize> {
    (0..CELL_COUNT)
        .filter(|i| !line.contains(i))
        .take(2)
        .collect()
}

#[test]
fn test_alice_bob_scenario() {
    let mut game = new_match("Alice", "Bob");

    assert_eq!(game.play_turn(0), Ok(true));
    assert_eq!(game.current_player().unwrap().name(), "Bob");

    let board_before = *game.board();
    let events_before = game.notifier().events().len();
    assert_eq!(game.play_turn(0), Ok(false));
    assert_eq!(game.board(), &board_before);
    assert_eq!(game.notifier().events().len(), events_before);
    assert_eq!(game.current_player().unwrap().name(), "Bob");

    assert_eq!(game.play_turn(4), Ok(true));
    assert_eq!(game.play_turn(1), Ok(true));
    assert_eq!(game.play_turn(3), Ok(true));
    assert_eq!(game.play_turn(2), Ok(true));

    assert_eq!(
        game.notifier().last_announcement().map(ToString::to_string),
        Some("Alice has won".to_string())
    );
    assert!(game.is_game_over());
    assert_eq!(game.status(), MatchStatus::Won(Marker::X));

    let events_after_win = game.notifier().events().len();
    assert_eq!(game.play_turn(5), Ok(false));
    assert_eq!(game.board().get(5), Some(Cell::Empty));
    assert_eq!(game.notifier().events().len(), events_after_win);
}

#[test]
fn test_blank_names_are_substituted() {
    let game = new_match("", "");
    let players = game.players().expect("players seated");
    assert_eq!(players[0].name(), "Player 1");
    assert_eq!(players[1].name(), "Player 2");
    assert_eq!(*players[0].marker(), Marker::X);
    assert_eq!(*players[1].marker(), Marker::O);
}

#[test]
fn test_every_line_wins_for_x() {
    for line in WINNING_LINES {
        let mut game = new_match("Alice", "Bob");
        let fillers = filler_moves(line);

        // X, O, X, O, X with X finishing on the line's third cell.
        let moves = [line[0], fillers[0], line[1], fillers[1], line[2]];
        for (turn, index) in moves.into_iter().enumerate() {
            assert_eq!(game.play_turn(index), Ok(true), "turn {turn} on line {line:?}");
        }

        assert_eq!(game.status(), MatchStatus::Won(Marker::X), "line {line:?}");
        assert_eq!(
            game.notifier().last_announcement(),
            Some(&Announcement::Won {
                name: "Alice".to_string()
            })
        );
    }
}

#[test]
fn test_every_line_wins_for_o() {
    for line in WINNING_LINES {
        let mut game = new_match("Alice", "Bob");
        // X needs three moves off the line that never form a line themselves.
        let spare: Vec<usize> = (0..CELL_COUNT).filter(|i| !line.contains(i)).collect();
        let x_moves = pick_non_winning_triple(&spare);

        let moves = [
            x_moves[0], line[0], x_moves[1], line[1], x_moves[2], line[2],
        ];
        for index in moves {
            assert_eq!(game.play_turn(index), Ok(true), "line {line:?}");
        }

        assert_eq!(game.status(), MatchStatus::Won(Marker::O), "line {line:?}");
        assert_eq!(
            game.notifier().last_announcement().map(ToString::to_string),
            Some("Bob has won".to_string())
        );
    }
}

fn pick_non_winning_triple(spare: &[usize]) -> [usize; 3] {
    for a in 0..spare.len() {
        for b in a + 1..spare.len() {
            for c in b + 1..spare.len() {
                let triple = [spare[a], spare[b], spare[c]];
                if !WINNING_LINES.contains(&triple) {
                    return triple;
                }
            }
        }
    }
    panic!("no safe triple in {spare:?}");
}

#[test]
fn test_full_board_without_line_is_a_tie() {
    // Final board: X O X / X O O / O X X
    let mut game = new_match("Alice", "Bob");
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        assert_eq!(game.play_turn(index), Ok(true));
    }

    let board = game.board().display();
    assert_eq!(board, "X|O|X\n-+-+-\nX|O|O\n-+-+-\nO|X|X");
    assert_eq!(game.status(), MatchStatus::Tied);
    assert!(game.winner().is_none());
    assert_eq!(
        game.notifier().last_announcement(),
        Some(&Announcement::Tied)
    );
}

#[test]
fn test_winning_move_that_fills_board_is_a_win() {
    // X O X / O X O / O X X, X completes the 0-4-8 diagonal on the last cell.
    let mut game = new_match("Alice", "Bob");
    for index in [0, 1, 2, 3, 4, 5, 7, 6, 8] {
        assert_eq!(game.play_turn(index), Ok(true));
    }
    assert!(game.board().is_full());
    assert_eq!(game.status(), MatchStatus::Won(Marker::X));
}

#[test]
fn test_reset_returns_to_first_player_and_empty_board() {
    let mut game = new_match("Alice", "Bob");
    for index in [0, 4, 1, 3, 2] {
        game.play_turn(index).unwrap();
    }
    assert!(game.is_game_over());

    game.reset_game();
    assert!(!game.is_game_over());
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.current_player().unwrap().name(), "Alice");
    assert_eq!(game.play_turn(8), Ok(true));
}

#[test]
fn test_each_accepted_move_renders_once() {
    let mut game = new_match("Alice", "Bob");
    for index in [0, 4, 8] {
        game.play_turn(index).unwrap();
    }
    let renders = game
        .notifier()
        .events()
        .iter()
        .filter(|e| matches!(e, GameEvent::Render(_)))
        .count();
    assert_eq!(renders, 3);
}

#[test]
fn test_matches_are_independent() {
    let mut first = new_match("Alice", "Bob");
    let mut second = new_match("Carol", "Dave");

    first.play_turn(4).unwrap();
    assert_eq!(second.board(), &Board::new());
    assert_eq!(second.play_turn(4), Ok(true));
    assert_eq!(second.current_player().unwrap().name(), "Dave");
}
