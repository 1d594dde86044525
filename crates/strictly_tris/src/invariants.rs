//! Transition invariants checked after every accepted move.
//!
//! Debug builds assert them inside [`Game::play_turn`](crate::Game::play_turn);
//! they are also usable on their own in tests.

use super::board::Board;

/// A property relating the state before and after one accepted move.
pub trait Invariant<S> {
    /// Checks if the invariant holds across the transition.
    fn holds(before: &S, after: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Claimed cells never change.
pub struct MonotonicBoardInvariant;

impl Invariant<Board> for MonotonicBoardInvariant {
    fn holds(before: &Board, after: &Board) -> bool {
        before
            .cells()
            .iter()
            .zip(after.cells())
            .all(|(b, a)| b.is_empty() || b == a)
    }

    fn description() -> &'static str {
        "Claimed cells never change until reset"
    }
}

/// Exactly one empty cell becomes claimed.
pub struct SingleClaimInvariant;

impl Invariant<Board> for SingleClaimInvariant {
    fn holds(before: &Board, after: &Board) -> bool {
        before
            .cells()
            .iter()
            .zip(after.cells())
            .filter(|(b, a)| b.is_empty() && !a.is_empty())
            .count()
            == 1
    }

    fn description() -> &'static str {
        "Each accepted move claims exactly one cell"
    }
}

/// Collects the descriptions of every board invariant broken by a move.
pub fn violations(before: &Board, after: &Board) -> Vec<&'static str> {
    let mut violations = Vec::new();

    if !MonotonicBoardInvariant::holds(before, after) {
        violations.push(MonotonicBoardInvariant::description());
    }

    if !SingleClaimInvariant::holds(before, after) {
        violations.push(SingleClaimInvariant::description());
    }

    violations
}
