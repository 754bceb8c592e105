//! Rule sets for every supported game.
//!
//! Each game implements [`GameRules`] for its board size. The orchestrator in
//! [`crate::engine`] only talks to this trait, so adding a game means adding
//! an implementation here and an arm in the registry's rule-set enum.

pub mod checkers;
pub mod tictactoe;

use crate::moves::Move;
use crate::state::{Alphabet, BoardState, Outcome, Team};
use serde_json::Value;
use std::fmt::Debug;

/// The operations a game variant provides to the orchestrator.
pub trait GameRules<const N: usize> {
    /// Shape of a classified move for this game.
    type Move: Clone + Debug + Into<Move>;

    /// Cell characters used in the stored state.
    const ALPHABET: Alphabet;

    /// State a new game instance starts from.
    fn default_state(&self) -> BoardState<N>;

    /// Converts a raw move payload into this game's move shape.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedMove`] if the payload has the wrong shape or types.
    fn classify(&self, raw: &Value) -> Result<Self::Move, MalformedMove>;

    /// Decides whether `mv` is legal for the team to move in `state`.
    ///
    /// # Errors
    ///
    /// Returns the first [`Violation`] found. Never panics, whatever the
    /// indices inside `mv`.
    fn check_legality(&self, state: &BoardState<N>, mv: &Self::Move) -> Result<(), Violation>;

    /// Produces the next state. Only called with moves that passed
    /// [`GameRules::check_legality`].
    fn apply(&self, state: &BoardState<N>, mv: &Self::Move) -> BoardState<N>;

    /// Classifies `state`, reached by `mover` having just moved.
    fn evaluate(&self, state: &BoardState<N>, mover: Team) -> Outcome;

    /// Every legal single move for the team to move.
    fn legal_moves(&self, state: &BoardState<N>) -> Vec<Self::Move>;
}

/// A payload that does not have the shape a game expects.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{}", reason)]
pub struct MalformedMove {
    reason: String,
}

impl MalformedMove {
    /// Creates a new malformed-move error.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// What was wrong with the payload.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Reads a JSON integer as a cell index. Integers above `i64::MAX` saturate
/// to it; floats and other values give `None`.
pub(crate) fn json_index(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| value.as_u64().map(|_| i64::MAX))
}

/// A well-formed move that breaks a game rule.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Violation {
    /// An index falls outside the board.
    #[display("Index {} is off the board", _0)]
    OutOfBounds(i64),

    /// The destination already holds a mark or piece.
    #[display("Cell {} is already occupied", _0)]
    Occupied(usize),

    /// The origin does not hold a piece of the team to move.
    #[display("Cell {} does not hold a piece of the team to move", _0)]
    NotOwnPiece(usize),

    /// Neither a one-cell diagonal step nor a two-cell diagonal jump.
    #[display("Move {} -> {} is not a diagonal step or jump", from, to)]
    InvalidGeometry {
        /// Origin index.
        from: usize,
        /// Destination index.
        to: usize,
    },

    /// A jump whose midpoint holds no enemy piece.
    #[display("Jump over cell {} captures nothing", _0)]
    NothingToCapture(usize),

    /// A plain piece stepping away from the opponent.
    #[display("Move {} -> {} goes backwards", from, to)]
    WrongDirection {
        /// Origin index.
        from: usize,
        /// Destination index.
        to: usize,
    },

    /// A chain step that does not start where the previous one ended.
    #[display("Chain step starts at {} but the piece is on {}", found, expected)]
    BrokenChain {
        /// Where the previous step ended.
        expected: i64,
        /// Where this step starts.
        found: i64,
    },

    /// A step after the first in a chain that does not capture.
    #[display("Chain step {} -> {} does not capture", from, to)]
    ChainStepNotJump {
        /// Origin index.
        from: usize,
        /// Destination index.
        to: usize,
    },
}

impl std::error::Error for Violation {}
