//! Checkers on an 8x8 board.
//!
//! Team 1 plays black (`b`, kings `B`) from the two bottom rows, team 2
//! plays white (`w`, kings `W`) from the two top rows. Cells are indexed
//! row-major from the top-left corner, so row 0 is white's back row and
//! row 7 is black's.
//!
//! Pieces move one cell diagonally toward the opponent and capture by
//! jumping over an adjacent enemy piece, in either direction. Kings step in
//! either direction. After a capture the same team moves again.

mod action;
mod game;
mod geometry;
mod rules;

pub use action::{Chain, Step};
pub use game::Checkers;
pub use geometry::{JUMP_OFFSETS, STEP_OFFSETS, WIDTH};

use crate::state::Alphabet;

/// Number of cells on the board.
pub const CELLS: usize = 64;

/// Cell characters: `-`, `b`/`B` for team 1, `w`/`W` for team 2.
pub const ALPHABET: Alphabet = Alphabet::with_kings('b', 'w', 'B', 'W');
