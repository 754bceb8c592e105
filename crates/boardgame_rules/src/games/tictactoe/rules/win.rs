//! Win detection logic for tic-tac-toe.

use crate::state::{BoardState, Cell, Team};
use tracing::instrument;

/// The eight lines that win the game: rows, columns, diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(team)` if the team has three in a row, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &BoardState<9>) -> Option<Team> {
    for [a, b, c] in WINNING_LINES {
        let cells = board.cells();
        if let Cell::Mark(team) = cells[a]
            && cells[b] == cells[a]
            && cells[c] == cells[a]
        {
            return Some(team);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::ALPHABET;
    use crate::state::decode;

    fn board(text: &str) -> BoardState<9> {
        decode(text, &ALPHABET).unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&board("1---------")), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(check_winner(&board("2XXXOO----")), Some(Team::Team1));
    }

    #[test]
    fn test_winner_column() {
        assert_eq!(check_winner(&board("1XO-XO----")), None);
        assert_eq!(check_winner(&board("2XO-XO-X--")), Some(Team::Team1));
        assert_eq!(check_winner(&board("1XO-XO--O-")), Some(Team::Team2));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        assert_eq!(check_winner(&board("1XXO-O-OX-")), Some(Team::Team2));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(check_winner(&board("2XX-------")), None);
    }
}
