//! Pointer bounds invariant: the display pointer stays inside history.

use super::Invariant;
use crate::state::GameState;

/// Invariant: `current_move < history.len()`.
///
/// Truncation on play and the bounds check on jump both preserve this;
/// the displayed snapshot therefore always exists.
pub struct PointerInBoundsInvariant;

impl Invariant<GameState> for PointerInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        state.current_move() < state.history().len()
    }

    fn description() -> &'static str {
        "The current-move pointer indexes an existing snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_fresh_game_holds() {
        assert!(PointerInBoundsInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_holds_after_play_and_jump() {
        let mut state = GameState::new();
        state.play(Position::Center).unwrap();
        state.play(Position::TopLeft).unwrap();
        assert!(PointerInBoundsInvariant::holds(&state));

        state.jump_to(0).unwrap();
        assert!(PointerInBoundsInvariant::holds(&state));
    }

    #[test]
    fn test_holds_after_truncating_play() {
        let mut state = GameState::new();
        state.play(Position::Center).unwrap();
        state.play(Position::TopLeft).unwrap();
        state.play(Position::TopRight).unwrap();

        state.jump_to(0).unwrap();
        state.play(Position::BottomRight).unwrap();

        assert!(PointerInBoundsInvariant::holds(&state));
    }
}
