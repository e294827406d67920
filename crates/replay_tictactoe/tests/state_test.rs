//! Tests for the play operation and observer notification.

use replay_tictactoe::{
    GameState, GameStatus, Intent, MoveError, Player, Position, RenderView, Square,
};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_fresh_game() {
    let game = GameState::new();

    assert_eq!(game.history().len(), 1);
    assert_eq!(game.current_move(), 0);
    assert_eq!(game.status(), GameStatus::NextTurn(Player::X));
    assert!(game.current_board().is_empty(Position::Center));
}

#[test]
fn test_history_grows_by_one_per_play() {
    let mut game = GameState::new();
    let line = [
        Position::Center,
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
    ];

    for (n, pos) in line.iter().enumerate() {
        game.play(*pos).expect("legal move");
        assert_eq!(game.history().len(), n + 2);
        assert_eq!(game.current_move(), n + 1);
    }
}

#[test]
fn test_marks_alternate_from_x() {
    let mut game = GameState::new();

    assert_eq!(game.to_move(), Player::X);
    game.play(Position::Center).unwrap();

    assert_eq!(game.to_move(), Player::O);
    assert_eq!(
        game.current_board().get(Position::Center),
        Square::Occupied(Player::X)
    );

    game.play(Position::TopLeft).unwrap();
    assert_eq!(game.to_move(), Player::X);
    assert_eq!(
        game.current_board().get(Position::TopLeft),
        Square::Occupied(Player::O)
    );
}

#[test]
fn test_double_play_on_one_cell_mutates_once() {
    let mut game = GameState::new();
    game.play(Position::TopLeft).unwrap();
    let before = game.history().to_vec();

    let result = game.play(Position::TopLeft);

    assert_eq!(result, Err(MoveError::CellOccupied(Position::TopLeft)));
    assert_eq!(game.history(), before.as_slice());
    assert_eq!(game.current_move(), 1);
    // Still the same mark, still O to move.
    assert_eq!(
        game.current_board().get(Position::TopLeft),
        Square::Occupied(Player::X)
    );
    assert_eq!(game.to_move(), Player::O);
}

#[test]
fn test_play_rejected_once_game_is_won() {
    let mut game = GameState::new();
    // X takes the top row while O dawdles below.
    for pos in [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::TopCenter,
        Position::MiddleRight,
        Position::TopRight,
    ] {
        game.play(pos).unwrap();
    }

    assert_eq!(game.status(), GameStatus::Won(Player::X));
    let result = game.play(Position::BottomLeft);
    assert_eq!(result, Err(MoveError::GameOver));
    assert_eq!(game.history().len(), 6);
}

#[test]
fn test_observers_fire_on_play_and_jump() {
    let mut game = GameState::new();
    let log: Rc<RefCell<Vec<RenderView>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    game.subscribe(move |view| sink.borrow_mut().push(view.clone()));

    game.play(Position::Center).unwrap();
    game.play(Position::TopLeft).unwrap();
    game.jump_to(0).unwrap();

    let views = log.borrow();
    assert_eq!(views.len(), 3);
    assert_eq!(views[0].current_move, 1);
    assert_eq!(views[1].current_move, 2);
    assert_eq!(views[2].current_move, 0);
    assert_eq!(views[2].status, GameStatus::NextTurn(Player::X));
    // The move list always covers the whole history.
    assert_eq!(views[2].moves.len(), 3);
}

#[test]
fn test_observers_silent_on_rejected_intents() {
    let mut game = GameState::new();
    game.play(Position::Center).unwrap();

    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    game.subscribe(move |_| *sink.borrow_mut() += 1);

    game.apply(Intent::CellClicked(Position::Center));
    game.apply(Intent::MoveSelected(17));

    assert_eq!(*count.borrow(), 0);
}

#[test]
fn test_restart_drops_history_but_keeps_observers() {
    let mut game = GameState::new();
    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    game.subscribe(move |_| *sink.borrow_mut() += 1);

    game.play(Position::Center).unwrap();
    game.play(Position::TopLeft).unwrap();
    game.restart();

    assert_eq!(game.history().len(), 1);
    assert_eq!(game.current_move(), 0);
    assert_eq!(game.status(), GameStatus::NextTurn(Player::X));
    assert_eq!(*count.borrow(), 3);
}

#[test]
fn test_render_view_round_trips_through_json() {
    let mut game = GameState::new();
    game.play(Position::Center).unwrap();

    let view = game.render_view();
    let json = serde_json::to_string(&view).expect("serialize");
    let back: RenderView = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(back, view);
}
