//! Checkers move payloads.

use crate::games::{MalformedMove, json_index};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

/// A single diagonal step or jump from one cell to another.
///
/// Indices are kept as supplied; bounds are checked by the legality rules.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new,
)]
#[serde(into = "[i64; 2]", from = "[i64; 2]")]
pub struct Step {
    from: i64,
    to: i64,
}

impl Step {
    /// Origin cell.
    pub fn origin(&self) -> i64 {
        self.from
    }

    /// Destination cell.
    pub fn destination(&self) -> i64 {
        self.to
    }

    /// Reads a `[from, to]` pair of integers.
    fn from_pair(value: &Value) -> Option<Self> {
        match value.as_array()?.as_slice() {
            [from, to] => Some(Self::new(json_index(from)?, json_index(to)?)),
            _ => None,
        }
    }
}

impl From<Step> for [i64; 2] {
    fn from(step: Step) -> Self {
        [step.from, step.to]
    }
}

impl From<[i64; 2]> for Step {
    fn from([from, to]: [i64; 2]) -> Self {
        Self::new(from, to)
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Consecutive steps of one piece, submitted as a single move.
///
/// Never empty. A chain of one step is an ordinary move or a single
/// capture; longer chains are multi-captures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Step>", try_from = "Vec<Step>")]
pub struct Chain {
    steps: Vec<Step>,
}

impl Chain {
    /// A chain of exactly one step.
    pub fn single(step: Step) -> Self {
        Self { steps: vec![step] }
    }

    /// The steps in the order they are played.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Chains built by this module always hold at least one step.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Reads a chain from a raw payload.
    ///
    /// Accepts a list of `[from, to]` pairs, or a bare `[from, to]` pair as
    /// a chain of one step.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedMove`] for an empty list, pairs of the wrong
    /// arity, non-integer entries or any other shape.
    #[instrument]
    pub fn from_payload(raw: &Value) -> Result<Self, MalformedMove> {
        let items = raw.as_array().ok_or_else(|| {
            MalformedMove::new(format!("Expected a list of [from, to] pairs, got {}", raw))
        })?;

        if items.is_empty() {
            return Err(MalformedMove::new("Move chain is empty"));
        }

        if items.iter().all(Value::is_number) {
            return Step::from_pair(raw)
                .map(Self::single)
                .ok_or_else(|| MalformedMove::new(format!("Expected a [from, to] pair, got {}", raw)));
        }

        let steps = items
            .iter()
            .map(|item| {
                Step::from_pair(item).ok_or_else(|| {
                    MalformedMove::new(format!("Expected a [from, to] pair, got {}", item))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { steps })
    }
}

impl TryFrom<Vec<Step>> for Chain {
    type Error = MalformedMove;

    fn try_from(steps: Vec<Step>) -> Result<Self, Self::Error> {
        if steps.is_empty() {
            return Err(MalformedMove::new("Move chain is empty"));
        }
        Ok(Self { steps })
    }
}

impl From<Chain> for Vec<Step> {
    fn from(chain: Chain) -> Self {
        chain.steps
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut steps = self.steps.iter();
        if let Some(first) = steps.next() {
            write!(f, "{}", first)?;
        }
        for step in steps {
            write!(f, " -> {}", step.to)?;
        }
        Ok(())
    }
}
