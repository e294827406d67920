//! First-class intent types for the presentation boundary.
//!
//! Intents are domain events, not side effects. The presenter reports
//! what the user asked for; [`crate::GameState`] decides whether the
//! request is legal against the currently displayed board.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// A request from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// The user clicked a cell on the displayed board.
    CellClicked(Position),
    /// The user selected an entry in the move list.
    MoveSelected(usize),
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::CellClicked(pos) => write!(f, "cell clicked: {pos}"),
            Intent::MoveSelected(index) => write!(f, "move selected: #{index}"),
        }
    }
}

/// Error that can occur when validating an intent.
///
/// Rejections leave the game state untouched; the intent dispatcher
/// logs and discards them, which preserves the silent-rejection
/// behavior at the presentation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell at the position is already occupied.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The displayed board already has a winner.
    #[display("game is already decided")]
    GameOver,

    /// History has no entry at the requested index.
    #[display("no move #{} in history", _0)]
    MoveOutOfRange(usize),
}

impl std::error::Error for MoveError {}
