//! Tic-tac-toe move payloads.

use crate::games::{MalformedMove, json_index};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

/// A mark placed on the cell at `index`.
///
/// The index is kept as supplied; bounds are a legality question, not a
/// shape one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new,
)]
#[serde(transparent)]
pub struct Placement {
    index: i64,
}

impl Placement {
    /// Target cell.
    pub fn index(&self) -> i64 {
        self.index
    }

    /// Reads a placement from a raw payload, which must be a bare integer.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedMove`] for anything else, including a missing
    /// payload, floats, strings and lists.
    #[instrument]
    pub fn from_payload(raw: &Value) -> Result<Self, MalformedMove> {
        match raw {
            Value::Number(number) => json_index(raw).map(Self::new).ok_or_else(|| {
                MalformedMove::new(format!("Expected an integer cell index, got {}", number))
            }),
            Value::Null => Err(MalformedMove::new("Missing cell index")),
            other => Err(MalformedMove::new(format!(
                "Expected an integer cell index, got {}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "place at {}", self.index)
    }
}
