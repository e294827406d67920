//! Alternating mark invariant: marks follow move parity.

use super::Invariant;
use crate::position::Position;
use crate::state::GameState;
use crate::types::{Board, Player, Square};
use strum::IntoEnumIterator;

/// Invariant: the mark added between snapshot i and snapshot i+1 is
/// X when i is even and O when i is odd.
///
/// Combined with [`super::SnapshotDeltaInvariant`] this guarantees
/// turns alternate along the recorded line of play.
pub struct AlternatingMarkInvariant;

impl Invariant<GameState> for AlternatingMarkInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().windows(2).enumerate().all(|(i, pair)| {
            let expected = if i % 2 == 0 { Player::X } else { Player::O };
            added_mark(&pair[0], &pair[1]).is_none_or(|mark| mark == expected)
        })
    }

    fn description() -> &'static str {
        "The mark added at each step matches the mover's parity"
    }
}

/// The mark newly placed between two snapshots, if any single one was.
fn added_mark(before: &Board, after: &Board) -> Option<Player> {
    Position::iter().find_map(|pos| match (before.get(pos), after.get(pos)) {
        (Square::Empty, Square::Occupied(mark)) => Some(mark),
        _ => None,
    })
}
