//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The 8 lines a player can complete: 3 rows, 3 columns, 2 diagonals.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Finds a completed line on the board.
///
/// Returns the owning player together with the three positions of the
/// line. For a legal game at most one line can be complete, so the
/// first match is the answer.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, [Position; 3])> {
    for line in LINES {
        let [a, b, c] = line;
        if let Square::Occupied(player) = board.get(a) {
            if board.get(b) == Square::Occupied(player)
                && board.get(c) == Square::Occupied(player)
            {
                return Some((player, line));
            }
        }
    }

    None
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Player)]) -> Board {
        marks.iter().fold(Board::new(), |board, (pos, player)| {
            board.with(*pos, Square::Occupied(*player))
        })
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_every_row() {
        for start in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::BottomLeft,
        ] {
            let row: Vec<_> = (0..3)
                .map(|offset| {
                    let pos = Position::from_index(start.to_index() + offset).unwrap();
                    (pos, Player::X)
                })
                .collect();
            assert_eq!(check_winner(&board_with(&row)), Some(Player::X));
        }
    }

    #[test]
    fn test_winner_every_column() {
        for start in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            let column: Vec<_> = (0..3)
                .map(|offset| {
                    let pos = Position::from_index(start.to_index() + offset * 3).unwrap();
                    (pos, Player::O)
                })
                .collect();
            assert_eq!(check_winner(&board_with(&column)), Some(Player::O));
        }
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::Center, Player::X),
            (Position::BottomRight, Player::X),
        ]);
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Player::O),
            (Position::Center, Player::O),
            (Position::BottomLeft, Player::O),
        ]);
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winning_line_reports_positions() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::Center, Player::X),
            (Position::BottomRight, Player::X),
        ]);
        let (player, line) = winning_line(&board).unwrap();
        assert_eq!(player, Player::X);
        assert_eq!(
            line,
            [Position::TopLeft, Position::Center, Position::BottomRight]
        );
    }
}
