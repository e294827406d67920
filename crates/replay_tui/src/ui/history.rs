//! Move list pane rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use replay_tictactoe::RenderView;

/// Renders the move list; the displayed move is highlighted.
pub fn render_history(f: &mut Frame, area: Rect, view: &RenderView) {
    let items: Vec<ListItem> = view
        .moves
        .iter()
        .map(|entry| ListItem::new(entry.label()))
        .collect();

    let mut state = ListState::default();
    state.select(Some(view.current_move));

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Moves"))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    f.render_stateful_widget(list, area, &mut state);
}
