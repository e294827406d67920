//! Authoritative game state: snapshot history plus a display pointer.

use crate::intent::{Intent, MoveError};
use crate::invariants;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Player, Square};
use crate::view::{MoveEntry, RenderView};
use tracing::{debug, instrument};

/// Callback invoked with a fresh view after every successful mutation.
pub type Observer = Box<dyn FnMut(&RenderView)>;

/// Owns the move history and the current-move pointer.
///
/// History is a linear sequence of immutable [`Board`] snapshots:
/// index 0 is the empty starting board, index i the board after move i.
/// The pointer selects which snapshot is on display and, by parity,
/// whose turn it is. Playing after jumping backward truncates the
/// discarded future first; last write wins.
pub struct GameState {
    history: Vec<Board>,
    current_move: usize,
    observers: Vec<Observer>,
}

// ─────────────────────────────────────────────────────────────
//  Constructor
// ─────────────────────────────────────────────────────────────

impl GameState {
    /// Creates a fresh game: one empty snapshot, pointer at 0.
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
            observers: Vec::new(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Operations
// ─────────────────────────────────────────────────────────────

impl GameState {
    /// Places the current mover's mark at `pos`.
    ///
    /// The mover is derived from pointer parity (X on even). On success
    /// the history is truncated to the displayed snapshot, the new board
    /// is appended, the pointer advances, and observers are notified.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the displayed board already has
    /// a winner, or [`MoveError::CellOccupied`] if the cell is taken.
    /// Rejected plays leave the state untouched and notify nobody.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn play(&mut self, pos: Position) -> Result<(), MoveError> {
        let board = self.current_board();
        if rules::check_winner(board).is_some() {
            return Err(MoveError::GameOver);
        }
        if !board.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }

        let next = board.with(pos, Square::Occupied(self.to_move()));
        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;

        debug!(
            pos = %pos,
            move_number = self.current_move,
            "Mark placed"
        );
        invariants::assert_invariants(self);
        self.notify();
        Ok(())
    }

    /// Moves the display pointer to an earlier or later snapshot.
    ///
    /// Only the pointer changes; history is untouched. Jumping to a
    /// snapshot where a winner already exists is permitted and simply
    /// displays that state.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::MoveOutOfRange`] if `index` exceeds history.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), MoveError> {
        if index >= self.history.len() {
            return Err(MoveError::MoveOutOfRange(index));
        }

        self.current_move = index;
        debug!(index, "Jumped to move");
        self.notify();
        Ok(())
    }

    /// Dispatches an intent from the presentation layer.
    ///
    /// Invalid intents (occupied cell, decided game, out-of-range move)
    /// are logged and discarded, mirroring a click that does nothing.
    #[instrument(skip(self))]
    pub fn apply(&mut self, intent: Intent) {
        let outcome = match intent {
            Intent::CellClicked(pos) => self.play(pos),
            Intent::MoveSelected(index) => self.jump_to(index),
        };
        if let Err(err) = outcome {
            debug!(%intent, %err, "Intent rejected");
        }
    }

    /// Drops all history and starts over from the empty board.
    ///
    /// Observers stay subscribed and are notified of the reset.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.history = vec![Board::new()];
        self.current_move = 0;
        self.notify();
    }
}

// ─────────────────────────────────────────────────────────────
//  Accessors
// ─────────────────────────────────────────────────────────────

impl GameState {
    /// The board snapshot currently on display.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Whose turn it is at the displayed snapshot: X on even pointers.
    pub fn to_move(&self) -> Player {
        if self.current_move % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Status of the displayed board.
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        if let Some(winner) = rules::check_winner(board) {
            GameStatus::Won(winner)
        } else if rules::is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::NextTurn(self.to_move())
        }
    }

    /// All snapshots, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Builds an owned view of the current state for rendering.
    pub fn render_view(&self) -> RenderView {
        RenderView {
            board: self.current_board().clone(),
            status: self.status(),
            moves: (0..self.history.len()).map(MoveEntry::new).collect(),
            current_move: self.current_move,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Observers
// ─────────────────────────────────────────────────────────────

impl GameState {
    /// Registers a callback fired after every successful mutation.
    pub fn subscribe(&mut self, observer: impl FnMut(&RenderView) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn notify(&mut self) {
        let view = self.render_view();
        for observer in &mut self.observers {
            observer(&view);
        }
    }
}

impl std::fmt::Debug for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameState")
            .field("history", &self.history)
            .field("current_move", &self.current_move)
            .field("observers", &self.observers.len())
            .finish()
    }
}
