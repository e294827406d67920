//! Render-view contract between the game state and its presenter.

use crate::types::{Board, GameStatus};
use serde::{Deserialize, Serialize};

/// An entry in the move list, one per history snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Index into history; 0 is the empty starting board.
    pub index: usize,
}

impl MoveEntry {
    /// Creates an entry for the given history index.
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// The label shown for this entry in the move list.
    pub fn label(&self) -> String {
        if self.index > 0 {
            format!("Go to move #{}", self.index)
        } else {
            "Go to game start".to_string()
        }
    }
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Everything a presenter needs to draw one frame.
///
/// Views are owned values: observers receive a snapshot of the state,
/// never a borrow into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderView {
    /// The board currently on display.
    pub board: Board,
    /// Status of the displayed board.
    pub status: GameStatus,
    /// One entry per history snapshot, in move order.
    pub moves: Vec<MoveEntry>,
    /// Which history entry is on display.
    pub current_move: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_label() {
        assert_eq!(MoveEntry::new(0).label(), "Go to game start");
    }

    #[test]
    fn test_move_labels_count_from_one() {
        assert_eq!(MoveEntry::new(1).label(), "Go to move #1");
        assert_eq!(MoveEntry::new(5).label(), "Go to move #5");
    }
}
