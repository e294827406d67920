//! Snapshot delta invariant: each move changes exactly one cell.

use super::Invariant;
use crate::position::Position;
use crate::state::GameState;
use crate::types::{Board, Square};
use strum::IntoEnumIterator;

/// Invariant: consecutive snapshots differ in exactly one cell,
/// which was empty before the move and carries a mark after it.
///
/// This is the copy-on-write contract of the history: a move never
/// erases or overwrites a mark, and never touches two cells.
pub struct SnapshotDeltaInvariant;

impl Invariant<GameState> for SnapshotDeltaInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .windows(2)
            .all(|pair| is_single_mark_delta(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Consecutive snapshots differ in exactly one cell, empty before the move"
    }
}

fn is_single_mark_delta(before: &Board, after: &Board) -> bool {
    let mut changed = 0;
    for pos in Position::iter() {
        match (before.get(pos), after.get(pos)) {
            (b, a) if b == a => {}
            (Square::Empty, Square::Occupied(_)) => changed += 1,
            _ => return false,
        }
    }
    changed == 1
}
