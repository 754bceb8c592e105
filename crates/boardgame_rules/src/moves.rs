//! Game-independent view of a classified move.
//!
//! Moves are domain events, not side effects: they carry the intent of the
//! team to move and can be recorded in a game's history in their canonical
//! payload form.

use crate::games::checkers::Chain;
use crate::games::tictactoe::Placement;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// A move of any supported game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::From)]
#[serde(untagged)]
pub enum Move {
    /// A mark placed on a single cell.
    Placement(Placement),
    /// One or more consecutive diagonal steps of a single piece.
    Chain(Chain),
}

impl Move {
    /// Canonical JSON payload: an integer for placements, a list of
    /// `[from, to]` pairs for chains.
    pub fn to_payload(&self) -> Value {
        match self {
            Move::Placement(placement) => json!(placement.index()),
            Move::Chain(chain) => Value::Array(
                chain
                    .steps()
                    .iter()
                    .map(|step| json!([step.origin(), step.destination()]))
                    .collect(),
            ),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Placement(placement) => write!(f, "{}", placement),
            Move::Chain(chain) => write!(f, "{}", chain),
        }
    }
}
