//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board after a placement. They are kept apart
//! from move application so each can be tested on hand-written boards.

pub mod draw;
pub mod win;

pub use draw::all_lines_blocked;
pub use win::{WINNING_LINES, check_winner};
