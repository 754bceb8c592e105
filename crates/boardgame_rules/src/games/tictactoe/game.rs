//! Tic-tac-toe rule set.

use super::rules::{all_lines_blocked, check_winner};
use super::{ALPHABET, CELLS, Placement};
use crate::games::{GameRules, MalformedMove, Violation};
use crate::state::{Alphabet, BoardState, Cell, Outcome, Team};
use serde_json::Value;
use tracing::{debug, instrument};

/// Tic-tac-toe rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicTacToe;

impl GameRules<CELLS> for TicTacToe {
    type Move = Placement;

    const ALPHABET: Alphabet = ALPHABET;

    fn default_state(&self) -> BoardState<CELLS> {
        BoardState::empty(Team::Team1)
    }

    fn classify(&self, raw: &Value) -> Result<Placement, MalformedMove> {
        Placement::from_payload(raw)
    }

    /// A placement is legal on any empty cell. Whether the game is already
    /// decided is not checked here.
    #[instrument(skip(self, state))]
    fn check_legality(&self, state: &BoardState<CELLS>, mv: &Placement) -> Result<(), Violation> {
        let index = usize::try_from(mv.index())
            .ok()
            .filter(|index| *index < CELLS)
            .ok_or(Violation::OutOfBounds(mv.index()))?;

        if !state.is_empty(index) {
            return Err(Violation::Occupied(index));
        }

        Ok(())
    }

    #[instrument(skip(self, state))]
    fn apply(&self, state: &BoardState<CELLS>, mv: &Placement) -> BoardState<CELLS> {
        let team = state.active_team();
        let mut next = state.clone();
        // check_legality guarantees 0 <= index < CELLS
        next.set(mv.index() as usize, Cell::Mark(team));
        next.set_active_team(team.opponent());
        next
    }

    #[instrument(skip(self, state))]
    fn evaluate(&self, state: &BoardState<CELLS>, _mover: Team) -> Outcome {
        let outcome = if let Some(winner) = check_winner(state) {
            Outcome::win_for(winner)
        } else if all_lines_blocked(state) {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        };
        debug!(%outcome, "Board evaluated");
        outcome
    }

    #[instrument(skip(self, state))]
    fn legal_moves(&self, state: &BoardState<CELLS>) -> Vec<Placement> {
        (0..CELLS)
            .filter(|index| state.is_empty(*index))
            .map(|index| Placement::new(index as i64))
            .collect()
    }
}
