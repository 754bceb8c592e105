//! Draw detection logic for tic-tac-toe.

use super::win::WINNING_LINES;
use crate::state::{BoardState, Team};
use tracing::instrument;

/// Checks if every line holds marks of both teams.
///
/// Once that happens no line can ever be completed, so the game is a draw
/// even if empty cells remain.
#[instrument(skip(board))]
pub fn all_lines_blocked(board: &BoardState<9>) -> bool {
    WINNING_LINES.iter().all(|line| {
        let holds = |team: Team| line.iter().any(|&index| board.cells()[index].belongs_to(team));
        holds(Team::Team1) && holds(Team::Team2)
    })
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::games::tictactoe::ALPHABET;
    use crate::state::decode;

    fn board(text: &str) -> BoardState<9> {
        decode(text, &ALPHABET).unwrap()
    }

    fn is_draw(board: &BoardState<9>) -> bool {
        all_lines_blocked(board) && check_winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_blocked() {
        assert!(!all_lines_blocked(&board("1---------")));
    }

    #[test]
    fn test_full_board_draw() {
        // X O X / O X X / O X O
        assert!(is_draw(&board("1XOXOXXOXO")));
    }

    #[test]
    fn test_blocked_before_full() {
        // X X O / O O X / X O -: the last cell cannot complete any line.
        assert!(all_lines_blocked(&board("1XXOOOXXO-")));
    }

    #[test]
    fn test_open_line_keeps_game_alive() {
        // X X O / O O X / X - -: the bottom row can still be completed by X.
        assert!(!all_lines_blocked(&board("2XXOOOXX--")));
    }

    #[test]
    fn test_not_draw_if_winner() {
        assert!(!is_draw(&board("2XXXOO----")));
    }
}
