//! Tic-tac-toe: the 3x3 line game.
//!
//! Team 1 places `X`, team 2 places `O`. Cells are indexed row-major:
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```

mod action;
mod game;
pub mod rules;

pub use action::Placement;
pub use game::TicTacToe;

use crate::state::Alphabet;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// Cell characters: `-`, `X` for team 1, `O` for team 2.
pub const ALPHABET: Alphabet = Alphabet::marks('X', 'O');
