//! Application state and intent dispatch.

use crate::input;
use crossterm::event::KeyCode;
use replay_tictactoe::{GameState, Intent, Position, RenderView};
use std::sync::mpsc;
use tracing::debug;

/// Main application state.
///
/// The app owns the game and subscribes to it; notified views land in
/// a same-thread mailbox and are drained into the cached view before
/// each frame. Rendering reads only the cached view, never the game.
pub struct App {
    game: GameState,
    view: RenderView,
    views: mpsc::Receiver<RenderView>,
    cursor: Position,
}

impl App {
    /// Creates the application and wires up the render callback.
    pub fn new() -> Self {
        let mut game = GameState::new();
        let (tx, views) = mpsc::channel();
        game.subscribe(move |view: &RenderView| {
            let _ = tx.send(view.clone());
        });
        let view = game.render_view();

        Self {
            game,
            view,
            views,
            cursor: Position::Center,
        }
    }

    /// The view to draw this frame.
    pub fn view(&self) -> &RenderView {
        &self.view
    }

    /// The board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Translates a key press into cursor movement or a game intent.
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, code);
            }
            KeyCode::Enter => self.dispatch(Intent::CellClicked(self.cursor)),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(pos) = Position::from_index(c as usize - '1' as usize) {
                    self.dispatch(Intent::CellClicked(pos));
                }
            }
            KeyCode::Char('[') | KeyCode::PageUp => {
                if self.view.current_move > 0 {
                    self.dispatch(Intent::MoveSelected(self.view.current_move - 1));
                }
            }
            KeyCode::Char(']') | KeyCode::PageDown => {
                // Out-of-range selections are silently ignored by the game.
                self.dispatch(Intent::MoveSelected(self.view.current_move + 1));
            }
            KeyCode::Home => self.dispatch(Intent::MoveSelected(0)),
            KeyCode::Char('r') => {
                debug!("Restarting game");
                self.game.restart();
                self.sync();
            }
            _ => {}
        }
    }

    fn dispatch(&mut self, intent: Intent) {
        self.game.apply(intent);
        self.sync();
    }

    /// Drains notified views into the cached one.
    fn sync(&mut self) {
        while let Ok(view) = self.views.try_recv() {
            self.view = view;
        }
    }
}
