//! The move pipeline.
//!
//! A submission runs decode → classify → legality → apply → evaluate →
//! encode. Every stage before apply may refuse it; nothing is returned but
//! the rejection in that case, so the caller's stored state stays as it was.

use crate::error::Rejection;
use crate::games::GameRules;
use crate::moves::Move;
use crate::registry::{Variant, VariantRegistry};
use crate::state::{Outcome, decode, encode};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

/// Result of an accepted move: the state to store and the game outcome.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, derive_new::new)]
pub struct Applied {
    /// Encoded state after the move.
    state: String,
    /// Outcome computed from that state.
    outcome: Outcome,
}

/// Plays `raw` on `encoded` under `rules`.
///
/// # Errors
///
/// Returns a [`Rejection`] if the state does not decode, the payload is
/// malformed or the move is illegal.
#[instrument(skip(rules, raw), fields(raw = %raw))]
pub fn submit_move<R, const N: usize>(
    rules: &R,
    encoded: &str,
    raw: &Value,
) -> Result<Applied, Rejection>
where
    R: GameRules<N>,
{
    run_pipeline(rules, encoded, raw)
        .inspect_err(|rejection| warn!(stage = %rejection.stage(), %rejection, "Move rejected"))
}

fn run_pipeline<R, const N: usize>(
    rules: &R,
    encoded: &str,
    raw: &Value,
) -> Result<Applied, Rejection>
where
    R: GameRules<N>,
{
    let state = decode::<N>(encoded, &R::ALPHABET)?;
    let mover = state.active_team();
    debug!(%mover, "State decoded");

    let mv = rules.classify(raw)?;
    debug!(?mv, "Move classified");

    rules.check_legality(&state, &mv)?;
    debug!("Move is legal");

    let next = rules.apply(&state, &mv);
    let outcome = rules.evaluate(&next, mover);
    let applied = Applied::new(encode(&next, &R::ALPHABET), outcome);

    info!(%mover, %outcome, state = %applied.state, "Move applied");
    Ok(applied)
}

/// Every legal single move for the team to move in `encoded`.
///
/// # Errors
///
/// Returns a [`Rejection`] if the state does not decode.
#[instrument(skip(rules))]
pub fn legal_moves<R, const N: usize>(rules: &R, encoded: &str) -> Result<Vec<Move>, Rejection>
where
    R: GameRules<N>,
{
    let state = decode::<N>(encoded, &R::ALPHABET)?;
    let moves: Vec<Move> = rules.legal_moves(&state).into_iter().map(Into::into).collect();
    debug!(count = moves.len(), "Legal moves listed");
    Ok(moves)
}

/// Encoded default state of `rules`.
pub fn default_state<R, const N: usize>(rules: &R) -> String
where
    R: GameRules<N>,
{
    encode(&rules.default_state(), &R::ALPHABET)
}

/// Entry point for hosts: resolves variant names, then runs the pipeline.
///
/// Holds no per-game state; one engine can serve any number of games, from
/// any number of threads.
#[derive(Debug, Clone, Default, Getters)]
pub struct Engine {
    /// Registered variants.
    registry: VariantRegistry,
}

impl Engine {
    /// Creates an engine over `registry`.
    #[instrument(skip(registry), fields(variants = registry.len()))]
    pub fn new(registry: VariantRegistry) -> Self {
        Self { registry }
    }

    /// Plays `raw` on `encoded` under the variant called `variant`.
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] if the variant is unknown, the state does not
    /// decode, the payload is malformed or the move is illegal.
    #[instrument(skip(self, raw), fields(raw = %raw))]
    pub fn submit_move(
        &self,
        encoded: &str,
        raw: &Value,
        variant: &str,
    ) -> Result<Applied, Rejection> {
        let variant = self.lookup(variant)?;
        variant.rules().submit_move(encoded, raw)
    }

    /// Encoded state a new game of `variant` starts from.
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] if the variant is unknown.
    #[instrument(skip(self))]
    pub fn default_state(&self, variant: &str) -> Result<String, Rejection> {
        Ok(self.lookup(variant)?.default_state().clone())
    }

    /// Every legal single move for the team to move.
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] if the variant is unknown or the state does
    /// not decode.
    #[instrument(skip(self))]
    pub fn legal_moves(&self, encoded: &str, variant: &str) -> Result<Vec<Move>, Rejection> {
        let variant = self.lookup(variant)?;
        variant.rules().legal_moves(encoded)
    }

    /// Registered variants in name order.
    pub fn variants(&self) -> impl Iterator<Item = &Variant> {
        self.registry.iter()
    }

    fn lookup(&self, name: &str) -> Result<&Variant, Rejection> {
        self.registry.get(name).inspect_err(|rejection| warn!(%rejection, "Unknown variant"))
    }
}
