//! Board geometry for checkers.

use super::CELLS;
use crate::state::{BoardState, Cell, Team};

/// Cells per row.
pub const WIDTH: usize = 8;

/// Index deltas of the four one-cell diagonal steps.
pub const STEP_OFFSETS: [i64; 4] = [-9, -7, 7, 9];

/// Index deltas of the four two-cell diagonal jumps.
pub const JUMP_OFFSETS: [i64; 4] = [-18, -14, 14, 18];

pub(super) fn row(index: usize) -> i64 {
    (index / WIDTH) as i64
}

pub(super) fn col(index: usize) -> i64 {
    (index % WIDTH) as i64
}

/// Resolves a raw index to a cell on the board.
pub(super) fn on_board(index: i64) -> Option<usize> {
    usize::try_from(index).ok().filter(|index| *index < CELLS)
}

/// `from_row - to_row` for a plain piece of `team` stepping forward.
///
/// Team 1 starts at the bottom and moves up the board, team 2 the other way.
pub(super) fn forward_row_change(team: Team) -> i64 {
    match team {
        Team::Team1 => 1,
        Team::Team2 => -1,
    }
}

/// Row on which a piece of `team` is promoted.
pub(super) fn promotion_row(team: Team) -> i64 {
    match team {
        Team::Team1 => 0,
        Team::Team2 => (CELLS / WIDTH) as i64 - 1,
    }
}

/// True for a two-row move, i.e. a jump over the midpoint.
pub(super) fn is_jump(from: usize, to: usize) -> bool {
    (row(from) - row(to)).abs() == 2
}

/// Moves the piece on `from` to `to`, removing the piece jumped over if any.
///
/// Returns true if a piece was captured. Callers check legality first.
pub(super) fn play_step(board: &mut BoardState<CELLS>, from: usize, to: usize) -> bool {
    let piece = board.cells()[from];
    let captured = is_jump(from, to);
    if captured {
        board.set((from + to) / 2, Cell::Empty);
    }
    board.set(to, piece);
    board.set(from, Cell::Empty);
    captured
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_and_col() {
        assert_eq!((row(0), col(0)), (0, 0));
        assert_eq!((row(42), col(42)), (5, 2));
        assert_eq!((row(63), col(63)), (7, 7));
    }

    #[test]
    fn test_on_board() {
        assert_eq!(on_board(-1), None);
        assert_eq!(on_board(64), None);
        assert_eq!(on_board(63), Some(63));
    }

    #[test]
    fn test_offsets_are_diagonal() {
        for offset in STEP_OFFSETS {
            let to = (27 + offset) as usize;
            assert_eq!((row(27) - row(to)).abs(), 1);
            assert_eq!((col(27) - col(to)).abs(), 1);
        }
        for offset in JUMP_OFFSETS {
            let to = (27 + offset) as usize;
            assert!(is_jump(27, to));
            assert_eq!((col(27) - col(to)).abs(), 2);
        }
    }

    #[test]
    fn test_promotion_rows() {
        assert_eq!(promotion_row(Team::Team1), 0);
        assert_eq!(promotion_row(Team::Team2), 7);
    }
}
