//! Tic-tac-toe with linear move history and time travel.
//!
//! The crate models a two-sided 3x3 game as a sequence of immutable
//! board snapshots plus a current-move pointer. Jumping moves only the
//! pointer; playing truncates any discarded future and appends a fresh
//! snapshot.
//!
//! # Architecture
//!
//! - **State**: [`GameState`] owns the history and pointer and notifies
//!   subscribed observers with a [`RenderView`] after every mutation
//! - **Rules**: pure win/draw evaluation over a single snapshot
//! - **Intents**: [`Intent`] is the only input a presenter sends
//! - **Invariants**: first-class, testable properties of the history
//!
//! # Example
//!
//! ```
//! use replay_tictactoe::{GameState, GameStatus, Intent, Player, Position};
//!
//! let mut game = GameState::new();
//! game.play(Position::Center)?;
//! game.play(Position::TopLeft)?;
//!
//! // Rewind one move, then branch: the old future is discarded.
//! game.jump_to(1)?;
//! game.apply(Intent::CellClicked(Position::BottomRight));
//!
//! assert_eq!(game.history().len(), 3);
//! assert_eq!(game.status(), GameStatus::NextTurn(Player::X));
//! # Ok::<(), replay_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod intent;
mod position;
mod state;
mod types;
mod view;

// Public rule and invariant modules
pub mod invariants;
pub mod rules;

// Crate-level exports - intents
pub use intent::{Intent, MoveError};

// Crate-level exports - positions
pub use position::Position;

// Crate-level exports - game state
pub use state::{GameState, Observer};

// Crate-level exports - domain types
pub use types::{Board, GameStatus, Player, Square};

// Crate-level exports - render contract
pub use view::{MoveEntry, RenderView};
